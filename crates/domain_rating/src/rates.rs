//! Base rate tables and per-policy-type rating parameters
//!
//! Everything in this module is a read-only constant. Rates are annual,
//! expressed per 1,000 units of coverage. HOME is the product the book is
//! written on; AUTO, LIFE, and HEALTH carry legacy placeholder rates kept
//! for older quote flows.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::RatingError;

/// Supported policy types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PolicyType {
    Home,
    Auto,
    Life,
    Health,
}

impl PolicyType {
    /// Short uppercase code used in quote references
    pub fn code(&self) -> &'static str {
        match self {
            PolicyType::Home => "HOME",
            PolicyType::Auto => "AUTO",
            PolicyType::Life => "LIFE",
            PolicyType::Health => "HEALTH",
        }
    }
}

impl fmt::Display for PolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Number of coverage units per base-rate application
pub const RATE_UNIT: Decimal = dec!(1000);

/// Looks up the annual base rate per [`RATE_UNIT`] of coverage
///
/// Fails loudly rather than defaulting: a policy type without a configured
/// rate must never be priced silently.
///
/// # Errors
///
/// Returns [`RatingError::UnsupportedPolicyType`] if no rate is configured.
pub fn base_rate(policy_type: PolicyType) -> Result<Decimal, RatingError> {
    // HOME is maintained by the product team; the rest are frozen legacy rates
    let rate = match policy_type {
        PolicyType::Home => dec!(3.50),
        PolicyType::Auto => dec!(45.00),
        PolicyType::Life => dec!(1.80),
        PolicyType::Health => dec!(6.20),
    };

    if rate <= Decimal::ZERO {
        return Err(RatingError::UnsupportedPolicyType(policy_type));
    }
    Ok(rate)
}

/// Maximum deductible accepted for a policy type
///
/// In coverage units; the per-amount quoting path enforces this cap.
pub fn deductible_cap(policy_type: PolicyType) -> Decimal {
    match policy_type {
        PolicyType::Home => dec!(50000),
        PolicyType::Auto => dec!(25000),
        PolicyType::Life => dec!(10000),
        PolicyType::Health => dec!(20000),
    }
}

/// Reference deductible used by the diminishing-returns discount curve
///
/// A deductible equal to the reference value earns exactly half of the
/// maximum discount.
pub fn reference_deductible(policy_type: PolicyType) -> Decimal {
    match policy_type {
        PolicyType::Home => dec!(5000),
        PolicyType::Auto => dec!(2500),
        PolicyType::Life => dec!(1000),
        PolicyType::Health => dec!(2000),
    }
}

/// Standard HOME split: dwelling / contents / liability
const HOME_SPLIT: &[(&str, Decimal)] = &[
    ("dwelling", dec!(0.70)),
    ("personal_property", dec!(0.20)),
    ("liability", dec!(0.10)),
];

/// Legacy types were never itemized; the whole amount is one line
const LEGACY_SPLIT: &[(&str, Decimal)] = &[("combined_cover", dec!(1.00))];

/// Synthetic coverage split proportions for the per-amount quoting path
///
/// Returned as `(component_label, ratio)` pairs summing to 1. The split is
/// cosmetic metadata for consumers that still expect itemized figures;
/// pricing always uses the total directly.
pub fn coverage_split(policy_type: PolicyType) -> &'static [(&'static str, Decimal)] {
    match policy_type {
        PolicyType::Home => HOME_SPLIT,
        PolicyType::Auto | PolicyType::Life | PolicyType::Health => LEGACY_SPLIT,
    }
}
