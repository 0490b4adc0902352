//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for common rating inputs. Fixtures are
//! consistent and predictable so unit tests stay deterministic.

use core_kernel::{Currency, Money};
use domain_rating::coverage::{CoverageBreakdown, CoverageComponent};
use domain_rating::risk_factors::{
    Demographics, LocationFactors, PersonalFactors, RiskFactors, RiskTier,
};
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Standard home deductible
    pub fn zar_deductible() -> Money {
        Money::new(dec!(5000.00), Currency::ZAR)
    }

    /// Zero deductible
    pub fn zar_zero() -> Money {
        Money::zero(Currency::ZAR)
    }

    /// A typical quoted coverage total
    pub fn zar_million() -> Money {
        Money::new(dec!(1000000.00), Currency::ZAR)
    }

    /// A USD amount for currency mismatch tests
    pub fn usd_100() -> Money {
        Money::new(dec!(100.00), Currency::USD)
    }
}

/// Fixture for coverage breakdowns
pub struct CoverageFixtures;

impl CoverageFixtures {
    /// The standard scenario breakdown: 700k dwelling, 200k contents,
    /// 100k liability (total 1,000,000)
    pub fn standard_home() -> CoverageBreakdown {
        CoverageBreakdown::new([
            (
                CoverageComponent::Dwelling,
                Money::new(dec!(700000), Currency::ZAR),
            ),
            (
                CoverageComponent::PersonalProperty,
                Money::new(dec!(200000), Currency::ZAR),
            ),
            (
                CoverageComponent::Liability,
                Money::new(dec!(100000), Currency::ZAR),
            ),
        ])
        .expect("fixture breakdown is well-formed")
    }

    /// A single-component dwelling breakdown with the given total
    pub fn dwelling_only(total: rust_decimal::Decimal) -> CoverageBreakdown {
        CoverageBreakdown::single(
            CoverageComponent::Dwelling,
            Money::new(total, Currency::ZAR),
        )
        .expect("fixture breakdown is well-formed")
    }
}

/// Fixture for risk factor bundles
pub struct RiskFactorFixtures;

impl RiskFactorFixtures {
    /// The standard Gauteng applicant: age 35, credit 700, no claims,
    /// medium crime
    pub fn gauteng_applicant() -> RiskFactors {
        RiskFactors {
            location: Some(LocationFactors {
                province: Some("Gauteng".to_string()),
                postal_code: Some("2000".to_string()),
                crime_rate: Some(RiskTier::Medium),
                natural_disaster_risk: None,
            }),
            demographics: Some(Demographics { age: Some(35) }),
            property: None,
            personal: Some(PersonalFactors {
                credit_score: Some(700),
                claims_history: Some(0),
            }),
        }
    }

    /// The minimal bundle: mandatory age only
    pub fn minimal() -> RiskFactors {
        RiskFactors::with_age(35)
    }
}
