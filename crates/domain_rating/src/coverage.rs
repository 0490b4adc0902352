//! Coverage breakdown value objects
//!
//! A breakdown itemizes the insured amounts by named component. Once built
//! for a quote it is treated as immutable; the engine only ever reads it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::RatingError;
use core_kernel::{Currency, Money};

/// Named coverage components of a home policy
///
/// Serializes as its snake_case label so breakdowns stay plain JSON maps.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum CoverageComponent {
    /// The dwelling structure itself
    Dwelling,
    /// Detached garages, fences, outbuildings
    OtherStructures,
    /// Contents of the home
    PersonalProperty,
    /// Legal liability to third parties
    Liability,
    /// Medical payments to guests
    MedicalPayments,
    /// Additional living expenses while the home is uninhabitable
    LossOfUse,
    /// Product-specific or legacy component
    Other(String),
}

impl CoverageComponent {
    /// Parses a component from its snake_case label, falling back to `Other`
    pub fn from_label(label: &str) -> Self {
        match label {
            "dwelling" => CoverageComponent::Dwelling,
            "other_structures" => CoverageComponent::OtherStructures,
            "personal_property" => CoverageComponent::PersonalProperty,
            "liability" => CoverageComponent::Liability,
            "medical_payments" => CoverageComponent::MedicalPayments,
            "loss_of_use" => CoverageComponent::LossOfUse,
            other => CoverageComponent::Other(other.to_string()),
        }
    }
}

impl fmt::Display for CoverageComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CoverageComponent::Dwelling => "dwelling",
            CoverageComponent::OtherStructures => "other_structures",
            CoverageComponent::PersonalProperty => "personal_property",
            CoverageComponent::Liability => "liability",
            CoverageComponent::MedicalPayments => "medical_payments",
            CoverageComponent::LossOfUse => "loss_of_use",
            CoverageComponent::Other(s) => s.as_str(),
        };
        write!(f, "{}", label)
    }
}

impl Serialize for CoverageComponent {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CoverageComponent {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(CoverageComponent::from_label(&label))
    }
}

/// Itemized coverage amounts keyed by component
///
/// All components must share one currency and every amount must be
/// non-negative. Construction validates both so downstream code can rely
/// on a well-formed breakdown; deserialization routes through the same
/// validation, so tampered JSON from the web layer cannot smuggle in a
/// negative component or mixed currencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CoverageBreakdownRepr")]
pub struct CoverageBreakdown {
    components: BTreeMap<CoverageComponent, Money>,
    currency: Currency,
}

/// Wire shape of a breakdown; converted via [`CoverageBreakdown::new`]
#[derive(Deserialize)]
struct CoverageBreakdownRepr {
    components: BTreeMap<CoverageComponent, Money>,
    currency: Currency,
}

impl TryFrom<CoverageBreakdownRepr> for CoverageBreakdown {
    type Error = RatingError;

    fn try_from(repr: CoverageBreakdownRepr) -> Result<Self, Self::Error> {
        let breakdown = CoverageBreakdown::new(repr.components)?;
        if breakdown.currency() != repr.currency {
            return Err(RatingError::malformed_coverage(format!(
                "breakdown declares {} but its components are in {}",
                repr.currency,
                breakdown.currency()
            )));
        }
        Ok(breakdown)
    }
}

impl CoverageBreakdown {
    /// Builds a breakdown from component/amount pairs
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::MalformedCoverage`] if any component amount is
    /// negative, the components mix currencies, or no components are given.
    pub fn new(
        components: impl IntoIterator<Item = (CoverageComponent, Money)>,
    ) -> Result<Self, RatingError> {
        let mut map = BTreeMap::new();
        let mut currency: Option<Currency> = None;

        for (component, amount) in components {
            if amount.is_negative() {
                return Err(RatingError::malformed_coverage(format!(
                    "component '{}' has negative amount {}",
                    component, amount
                )));
            }
            match currency {
                None => currency = Some(amount.currency()),
                Some(c) if c != amount.currency() => {
                    return Err(RatingError::malformed_coverage(format!(
                        "component '{}' is in {} but the breakdown is in {}",
                        component,
                        amount.currency(),
                        c
                    )));
                }
                Some(_) => {}
            }
            // Later entries for the same component accumulate
            map.entry(component)
                .and_modify(|existing: &mut Money| *existing = *existing + amount)
                .or_insert(amount);
        }

        let currency = currency.ok_or_else(|| {
            RatingError::malformed_coverage("breakdown must contain at least one component")
        })?;

        Ok(Self {
            components: map,
            currency,
        })
    }

    /// Single-component convenience constructor
    pub fn single(component: CoverageComponent, amount: Money) -> Result<Self, RatingError> {
        Self::new([(component, amount)])
    }

    /// Returns the currency shared by all components
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the amount for a component, if present
    pub fn amount(&self, component: &CoverageComponent) -> Option<Money> {
        self.components.get(component).copied()
    }

    /// Iterates components in stable (sorted) order
    pub fn iter(&self) -> impl Iterator<Item = (&CoverageComponent, &Money)> {
        self.components.iter()
    }

    /// Number of itemized components
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// True if there are no components
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Total coverage: the sum of all component amounts
    ///
    /// Exposed standalone for callers that persist the sum without
    /// requesting a full quote.
    pub fn total(&self) -> Money {
        self.components
            .values()
            .fold(Money::zero(self.currency), |acc, amount| acc + *amount)
    }

    /// Validates that the breakdown can be priced
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::MalformedCoverage`] if the total is not
    /// strictly positive.
    pub fn require_positive_total(&self) -> Result<Money, RatingError> {
        let total = self.total();
        if !total.is_positive() {
            return Err(RatingError::malformed_coverage(format!(
                "total coverage must be positive, got {}",
                total
            )));
        }
        Ok(total)
    }
}
