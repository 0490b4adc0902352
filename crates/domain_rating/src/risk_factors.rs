//! Risk factor bundles and normalization
//!
//! The surrounding RPC layer feeds the engine partially-populated JSON.
//! This module is the single boundary where that loosely-shaped input is
//! validated and defaulted into [`NormalizedRiskFactors`]; nothing past the
//! normalizer ever sees an `Option` it has to guess about.
//!
//! Missing optional data is never an error: every optional field has a
//! documented neutral default. Errors are raised only for values that were
//! explicitly supplied outside their documented bounds, and for a missing
//! applicant age, which is mandatory.

use serde::{Deserialize, Serialize};

use crate::error::RatingError;

/// Applicant age bounds (inclusive)
pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 120;

/// Credit score bounds (inclusive)
pub const MIN_CREDIT_SCORE: u16 = 300;
pub const MAX_CREDIT_SCORE: u16 = 850;

/// Maximum prior claims the engine will rate
pub const MAX_CLAIMS_HISTORY: u8 = 20;

/// Neutral default applied when no credit score is supplied
pub const DEFAULT_CREDIT_SCORE: u16 = 650;

/// Categorical risk tier for location hazards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

/// Location risk factors as supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationFactors {
    /// Province or state code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    /// Postal code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Crime rate tier; defaults to medium
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crime_rate: Option<RiskTier>,
    /// Natural disaster risk tier; defaults to medium
    #[serde(skip_serializing_if = "Option::is_none")]
    pub natural_disaster_risk: Option<RiskTier>,
}

/// Applicant demographics
///
/// Age is mandatory wherever demographic risk is scored. A convenience
/// default (e.g. 35) may only be applied by the orchestration layer, never
/// inside the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Demographics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

/// Property attributes as supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyFactors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_built: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub square_footage: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub construction_type: Option<String>,
    /// Free-form feature labels, e.g. "smoke_detector", "burglar_bars"
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub safety_features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_pool: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_garage: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foundation_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roof_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heating_type: Option<String>,
}

/// Personal history factors as supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalFactors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_score: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claims_history: Option<u8>,
}

/// The full, partially-optional risk factor bundle at the engine boundary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RiskFactors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationFactors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demographics: Option<Demographics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<PropertyFactors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal: Option<PersonalFactors>,
}

/// Fully-defaulted location factors
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedLocation {
    pub province: Option<String>,
    pub postal_code: Option<String>,
    pub crime_rate: RiskTier,
    pub natural_disaster_risk: RiskTier,
}

/// Fully-defaulted property factors
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedProperty {
    pub year_built: Option<u32>,
    pub square_footage: Option<u32>,
    pub construction_type: Option<String>,
    pub safety_features: Vec<String>,
    pub has_pool: bool,
    pub has_garage: bool,
    pub foundation_type: Option<String>,
    pub roof_type: Option<String>,
    pub heating_type: Option<String>,
}

/// Fully-defaulted personal factors
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedPersonal {
    pub credit_score: u16,
    pub claims_history: u8,
}

/// The internal representation used by the risk score calculator
///
/// Every field holds a concrete value; scoring never has to apply defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRiskFactors {
    pub location: NormalizedLocation,
    pub age: u32,
    pub property: NormalizedProperty,
    pub personal: NormalizedPersonal,
}

/// Validates and defaults a risk factor bundle
///
/// # Errors
///
/// Returns [`RatingError::Validation`] when:
/// - the applicant age is missing or outside 18..=120
/// - a supplied credit score is outside 300..=850
/// - a supplied claims history is above 20
pub fn normalize(factors: &RiskFactors) -> Result<NormalizedRiskFactors, RatingError> {
    let age = factors
        .demographics
        .as_ref()
        .and_then(|d| d.age)
        .ok_or_else(|| {
            RatingError::validation("demographics.age", "applicant age is mandatory")
        })?;
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(RatingError::validation(
            "demographics.age",
            format!("must be between {} and {}, got {}", MIN_AGE, MAX_AGE, age),
        ));
    }

    let location = factors.location.clone().unwrap_or_default();
    let location = NormalizedLocation {
        province: location.province,
        postal_code: location.postal_code,
        crime_rate: location.crime_rate.unwrap_or(RiskTier::Medium),
        natural_disaster_risk: location.natural_disaster_risk.unwrap_or(RiskTier::Medium),
    };

    let property = factors.property.clone().unwrap_or_default();
    let property = NormalizedProperty {
        year_built: property.year_built,
        square_footage: property.square_footage,
        construction_type: property.construction_type,
        safety_features: property.safety_features,
        has_pool: property.has_pool.unwrap_or(false),
        has_garage: property.has_garage.unwrap_or(false),
        foundation_type: property.foundation_type,
        roof_type: property.roof_type,
        heating_type: property.heating_type,
    };

    let personal = factors.personal.clone().unwrap_or_default();
    let credit_score = personal.credit_score.unwrap_or(DEFAULT_CREDIT_SCORE);
    if !(MIN_CREDIT_SCORE..=MAX_CREDIT_SCORE).contains(&credit_score) {
        return Err(RatingError::validation(
            "personal.creditScore",
            format!(
                "must be between {} and {}, got {}",
                MIN_CREDIT_SCORE, MAX_CREDIT_SCORE, credit_score
            ),
        ));
    }
    let claims_history = personal.claims_history.unwrap_or(0);
    if claims_history > MAX_CLAIMS_HISTORY {
        return Err(RatingError::validation(
            "personal.claimsHistory",
            format!("must be at most {}, got {}", MAX_CLAIMS_HISTORY, claims_history),
        ));
    }

    Ok(NormalizedRiskFactors {
        location,
        age,
        property,
        personal: NormalizedPersonal {
            credit_score,
            claims_history,
        },
    })
}

impl RiskFactors {
    /// Convenience constructor for the common "age only" minimal bundle
    pub fn with_age(age: u32) -> Self {
        Self {
            demographics: Some(Demographics { age: Some(age) }),
            ..Default::default()
        }
    }
}
