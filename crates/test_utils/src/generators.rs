//! Property-Based Test Generators
//!
//! Proptest strategies for generating random rating inputs that maintain
//! domain invariants (ages in range, scores in range, positive coverage).

use core_kernel::{Currency, Money};
use domain_rating::risk_factors::{
    Demographics, LocationFactors, PersonalFactors, PropertyFactors, RiskFactors, RiskTier,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for valid applicant ages
pub fn age_strategy() -> impl Strategy<Value = u32> {
    18u32..=120u32
}

/// Strategy for valid credit scores
pub fn credit_score_strategy() -> impl Strategy<Value = u16> {
    300u16..=850u16
}

/// Strategy for valid claims history counts
pub fn claims_history_strategy() -> impl Strategy<Value = u8> {
    0u8..=20u8
}

/// Strategy for risk tiers
pub fn risk_tier_strategy() -> impl Strategy<Value = RiskTier> {
    prop_oneof![
        Just(RiskTier::Low),
        Just(RiskTier::Medium),
        Just(RiskTier::High),
    ]
}

/// Strategy for positive ZAR coverage totals (in whole rand)
pub fn coverage_amount_strategy() -> impl Strategy<Value = Money> {
    (10_000i64..50_000_000i64)
        .prop_map(|rand| Money::new(Decimal::from(rand), Currency::ZAR))
}

/// Strategy for valid HOME deductibles (within the 50,000 cap)
pub fn home_deductible_strategy() -> impl Strategy<Value = Money> {
    (0i64..=50_000i64).prop_map(|rand| Money::new(Decimal::from(rand), Currency::ZAR))
}

/// Strategy for full, valid risk factor bundles
///
/// Every generated bundle normalizes successfully: all values are in range
/// and the mandatory age is always present.
pub fn risk_factors_strategy() -> impl Strategy<Value = RiskFactors> {
    (
        age_strategy(),
        proptest::option::of(credit_score_strategy()),
        proptest::option::of(claims_history_strategy()),
        proptest::option::of(risk_tier_strategy()),
        proptest::option::of(risk_tier_strategy()),
        proptest::option::of(1900u32..2025u32),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(
            |(age, credit, claims, crime, disaster, year_built, has_pool)| RiskFactors {
                location: Some(LocationFactors {
                    province: None,
                    postal_code: None,
                    crime_rate: crime,
                    natural_disaster_risk: disaster,
                }),
                demographics: Some(Demographics { age: Some(age) }),
                property: Some(PropertyFactors {
                    year_built,
                    has_pool,
                    ..Default::default()
                }),
                personal: Some(PersonalFactors {
                    credit_score: credit,
                    claims_history: claims,
                }),
            },
        )
}
