//! Rating domain errors
//!
//! All engine failures are synchronous and typed. The engine never logs or
//! swallows an error; translation into user-facing messages is the calling
//! layer's responsibility.

use thiserror::Error;

use crate::rates::PolicyType;
use core_kernel::MoneyError;

/// Errors that can occur in the rating domain
#[derive(Debug, Error)]
pub enum RatingError {
    /// An explicitly supplied input is outside its documented bound,
    /// or a mandatory input is missing
    #[error("Validation failed for '{field}': {message}")]
    Validation { field: String, message: String },

    /// Policy type has no entry in the base-rate table
    #[error("No base rate configured for policy type {0}")]
    UnsupportedPolicyType(PolicyType),

    /// Coverage breakdown contains a negative component or a non-positive total
    #[error("Malformed coverage: {0}")]
    MalformedCoverage(String),

    /// Monetary arithmetic error (e.g., mixed currencies)
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}

impl RatingError {
    /// Creates a validation error for a named field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        RatingError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a malformed-coverage error
    pub fn malformed_coverage(message: impl Into<String>) -> Self {
        RatingError::MalformedCoverage(message.into())
    }
}
