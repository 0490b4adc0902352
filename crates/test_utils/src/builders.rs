//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the fields relevant to the behaviour under test.

use core_kernel::{Currency, Money};
use domain_rating::coverage::{CoverageBreakdown, CoverageComponent};
use domain_rating::risk_factors::{
    Demographics, LocationFactors, PersonalFactors, PropertyFactors, RiskFactors, RiskTier,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Builder for risk factor bundles
///
/// Defaults to a neutral 35-year-old applicant with no optional bundles.
pub struct RiskFactorsBuilder {
    factors: RiskFactors,
}

impl Default for RiskFactorsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RiskFactorsBuilder {
    /// Creates a builder with the mandatory age defaulted to 35
    pub fn new() -> Self {
        Self {
            factors: RiskFactors::with_age(35),
        }
    }

    /// Sets the applicant age
    pub fn with_age(mut self, age: u32) -> Self {
        self.factors.demographics = Some(Demographics { age: Some(age) });
        self
    }

    /// Clears the demographics bundle entirely (for missing-age tests)
    pub fn without_demographics(mut self) -> Self {
        self.factors.demographics = None;
        self
    }

    /// Sets the crime rate tier
    pub fn with_crime_rate(mut self, tier: RiskTier) -> Self {
        self.factors
            .location
            .get_or_insert_with(LocationFactors::default)
            .crime_rate = Some(tier);
        self
    }

    /// Sets the natural disaster risk tier
    pub fn with_disaster_risk(mut self, tier: RiskTier) -> Self {
        self.factors
            .location
            .get_or_insert_with(LocationFactors::default)
            .natural_disaster_risk = Some(tier);
        self
    }

    /// Sets the credit score
    pub fn with_credit_score(mut self, score: u16) -> Self {
        self.factors
            .personal
            .get_or_insert_with(PersonalFactors::default)
            .credit_score = Some(score);
        self
    }

    /// Sets the claims history count
    pub fn with_claims_history(mut self, claims: u8) -> Self {
        self.factors
            .personal
            .get_or_insert_with(PersonalFactors::default)
            .claims_history = Some(claims);
        self
    }

    /// Sets the year the property was built
    pub fn with_year_built(mut self, year: u32) -> Self {
        self.factors
            .property
            .get_or_insert_with(PropertyFactors::default)
            .year_built = Some(year);
        self
    }

    /// Adds a safety feature label
    pub fn with_safety_feature(mut self, feature: impl Into<String>) -> Self {
        self.factors
            .property
            .get_or_insert_with(PropertyFactors::default)
            .safety_features
            .push(feature.into());
        self
    }

    /// Sets the pool flag
    pub fn with_pool(mut self, has_pool: bool) -> Self {
        self.factors
            .property
            .get_or_insert_with(PropertyFactors::default)
            .has_pool = Some(has_pool);
        self
    }

    /// Builds the bundle
    pub fn build(self) -> RiskFactors {
        self.factors
    }
}

/// Builder for coverage breakdowns
///
/// Defaults to an empty ZAR breakdown; add components as needed.
pub struct CoverageBreakdownBuilder {
    components: Vec<(CoverageComponent, Money)>,
    currency: Currency,
}

impl Default for CoverageBreakdownBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CoverageBreakdownBuilder {
    /// Creates an empty ZAR builder
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
            currency: Currency::ZAR,
        }
    }

    /// Sets the currency for subsequently added amounts
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Adds a component amount
    pub fn with_component(mut self, component: CoverageComponent, amount: Decimal) -> Self {
        self.components
            .push((component, Money::new(amount, self.currency)));
        self
    }

    /// Adds the standard 70/20/10 million-rand home split
    pub fn standard_home(self) -> Self {
        self.with_component(CoverageComponent::Dwelling, dec!(700000))
            .with_component(CoverageComponent::PersonalProperty, dec!(200000))
            .with_component(CoverageComponent::Liability, dec!(100000))
    }

    /// Builds the breakdown, panicking on malformed fixture data
    pub fn build(self) -> CoverageBreakdown {
        CoverageBreakdown::new(self.components).expect("test breakdown is well-formed")
    }
}
