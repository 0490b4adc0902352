//! Risk score calculation
//!
//! Converts normalized risk factors into multiplicative adjustments around a
//! neutral baseline of 1.0, one per category, and an aggregate score clamped
//! to a sane band. Every table in this module is a read-only constant; the
//! calculator is a pure function safe to call from any number of threads.
//!
//! The specific constants are product decisions. Tests assert monotone
//! direction and bounds rather than exact magnitudes, so the tables can be
//! retuned without rewriting the suite.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::risk_factors::{NormalizedRiskFactors, RiskTier};

/// Aggregate score clamp bounds
pub const MIN_AGGREGATE_SCORE: Decimal = dec!(0.5);
pub const MAX_AGGREGATE_SCORE: Decimal = dec!(3.0);

/// Per-feature discount for recognized safety features
const SAFETY_FEATURE_DISCOUNT: Decimal = dec!(0.02);
/// Diminishing returns: features beyond this count earn no further discount
const SAFETY_FEATURE_CAP: usize = 4;

/// Surcharge per prior claim, applied compounding
const CLAIM_SURCHARGE: Decimal = dec!(0.12);
/// Ceiling on the total claims multiplier
const CLAIM_SURCHARGE_CAP: Decimal = dec!(1.8);

/// Safety features the rating plan recognizes
///
/// Unrecognized labels are ignored rather than rejected; the web layer sends
/// free-form strings.
const RECOGNIZED_SAFETY_FEATURES: &[&str] = &[
    "smoke_detector",
    "sprinkler_system",
    "burglar_alarm",
    "burglar_bars",
    "security_gate",
    "electric_fence",
    "armed_response",
    "deadbolt_locks",
];

/// Multiplier for a crime-rate tier
pub fn crime_rate_multiplier(tier: RiskTier) -> Decimal {
    match tier {
        RiskTier::Low => dec!(0.92),
        RiskTier::Medium => dec!(1.00),
        RiskTier::High => dec!(1.22),
    }
}

/// Multiplier for a natural-disaster-risk tier
pub fn disaster_risk_multiplier(tier: RiskTier) -> Decimal {
    match tier {
        RiskTier::Low => dec!(0.94),
        RiskTier::Medium => dec!(1.00),
        RiskTier::High => dec!(1.28),
    }
}

/// Multiplier for the year the structure was built
///
/// Banded on the construction year itself so the table stays a pure
/// constant; unknown year is neutral.
pub fn year_built_multiplier(year_built: Option<u32>) -> Decimal {
    match year_built {
        None => dec!(1.00),
        Some(y) if y >= 2010 => dec!(0.96),
        Some(y) if y >= 1995 => dec!(1.02),
        Some(y) if y >= 1970 => dec!(1.08),
        Some(_) => dec!(1.15),
    }
}

/// Discount multiplier for recognized safety features, with a cap
pub fn safety_feature_multiplier(features: &[String]) -> Decimal {
    let recognized = features
        .iter()
        .filter(|f| RECOGNIZED_SAFETY_FEATURES.contains(&f.to_lowercase().as_str()))
        .count()
        .min(SAFETY_FEATURE_CAP);

    dec!(1.00) - SAFETY_FEATURE_DISCOUNT * Decimal::from(recognized as u32)
}

/// Multiplier for construction material
pub fn construction_type_multiplier(construction_type: Option<&str>) -> Decimal {
    match construction_type.map(|s| s.to_lowercase()).as_deref() {
        Some("brick") => dec!(0.98),
        Some("concrete") => dec!(0.97),
        Some("steel") => dec!(0.98),
        Some("wood") => dec!(1.10),
        Some("prefab") => dec!(1.05),
        _ => dec!(1.00),
    }
}

/// Multiplier for roof material
pub fn roof_type_multiplier(roof_type: Option<&str>) -> Decimal {
    match roof_type.map(|s| s.to_lowercase()).as_deref() {
        Some("tile") => dec!(0.98),
        Some("slate") => dec!(0.99),
        Some("metal") => dec!(1.00),
        Some("thatch") => dec!(1.12),
        _ => dec!(1.00),
    }
}

/// Multiplier for heating installation
pub fn heating_type_multiplier(heating_type: Option<&str>) -> Decimal {
    match heating_type.map(|s| s.to_lowercase()).as_deref() {
        Some("electric") => dec!(1.00),
        Some("solar") => dec!(0.98),
        Some("gas") => dec!(1.04),
        Some("solid_fuel") | Some("fireplace") => dec!(1.06),
        _ => dec!(1.00),
    }
}

/// Multiplier for foundation type
pub fn foundation_type_multiplier(foundation_type: Option<&str>) -> Decimal {
    match foundation_type.map(|s| s.to_lowercase()).as_deref() {
        Some("slab") => dec!(1.00),
        Some("basement") => dec!(1.02),
        Some("pier") | Some("raised") => dec!(1.03),
        _ => dec!(1.00),
    }
}

/// Multiplier for a credit-score band; rises as the score falls
pub fn credit_score_multiplier(score: u16) -> Decimal {
    match score {
        800..=850 => dec!(0.90),
        720..=799 => dec!(0.95),
        650..=719 => dec!(1.00),
        580..=649 => dec!(1.10),
        _ => dec!(1.25),
    }
}

/// Compounding surcharge per prior claim, capped
pub fn claims_history_multiplier(claims: u8) -> Decimal {
    let mut multiplier = dec!(1.00);
    for _ in 0..claims {
        multiplier *= dec!(1.00) + CLAIM_SURCHARGE;
        if multiplier >= CLAIM_SURCHARGE_CAP {
            return CLAIM_SURCHARGE_CAP;
        }
    }
    multiplier
}

/// Age-banded demographic multiplier
///
/// Middle-aged applicants carry the baseline; the very young and very old
/// carry modest surcharges.
pub fn age_multiplier(age: u32) -> Decimal {
    match age {
        0..=24 => dec!(1.10),
        25..=64 => dec!(1.00),
        65..=84 => dec!(1.05),
        _ => dec!(1.12),
    }
}

/// The per-category multipliers and clamped aggregate for one applicant
///
/// Returned inside every quote so the caller can render an itemized
/// explanation of the price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskScore {
    /// Crime and disaster tiers combined
    pub location: Decimal,
    /// Structure age, safety features, pool, and material tables combined
    pub property: Decimal,
    /// Credit band and claims surcharge combined
    pub personal: Decimal,
    /// Age band
    pub demographic: Decimal,
    /// Product of the four categories, clamped to [0.5, 3.0]
    pub aggregate: Decimal,
}

impl RiskScore {
    /// Computes the risk score for fully-normalized factors
    pub fn calculate(factors: &NormalizedRiskFactors) -> Self {
        let location = crime_rate_multiplier(factors.location.crime_rate)
            * disaster_risk_multiplier(factors.location.natural_disaster_risk);

        let mut property = year_built_multiplier(factors.property.year_built)
            * safety_feature_multiplier(&factors.property.safety_features)
            * construction_type_multiplier(factors.property.construction_type.as_deref())
            * roof_type_multiplier(factors.property.roof_type.as_deref())
            * heating_type_multiplier(factors.property.heating_type.as_deref())
            * foundation_type_multiplier(factors.property.foundation_type.as_deref());
        if factors.property.has_pool {
            // Liability exposure
            property *= dec!(1.04);
        }
        if factors.property.has_garage {
            property *= dec!(0.99);
        }

        let personal = credit_score_multiplier(factors.personal.credit_score)
            * claims_history_multiplier(factors.personal.claims_history);

        let demographic = age_multiplier(factors.age);

        let raw = location * property * personal * demographic;
        let aggregate = raw.clamp(MIN_AGGREGATE_SCORE, MAX_AGGREGATE_SCORE);

        Self {
            location,
            property,
            personal,
            demographic,
            aggregate,
        }
    }

    /// True when the unclamped product already sat inside the clamp band
    pub fn is_unclamped(&self) -> bool {
        let raw = self.location * self.property * self.personal * self.demographic;
        raw == self.aggregate
    }
}
