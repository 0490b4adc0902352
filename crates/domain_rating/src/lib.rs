//! Premium Rating Domain
//!
//! This crate implements the premium calculation engine for the home
//! insurance platform. It is a pure, stateless library: no I/O, no
//! persistence, no logging, and no global mutable state. Every rate and
//! multiplier table is a read-only constant, so any number of callers may
//! rate quotes concurrently without coordination.
//!
//! # Pipeline
//!
//! ```text
//! RiskFactors --normalize--> NormalizedRiskFactors --score--> RiskScore
//!                                                                 |
//! CoverageBreakdown / coverage amount --> total coverage ---> compose --> PremiumQuote
//! ```
//!
//! Two entrypoints feed the pipeline: the coverage-breakdown model
//! (itemized amounts) and the per-amount model (a single total, with a
//! synthetic split derived for display). Both produce identical premiums
//! for identical totals.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_rating::{PolicyType, RatingService, RiskFactors};
//!
//! let service = RatingService::new();
//! let quote = service.quote_per_amount(
//!     PolicyType::Home,
//!     coverage_amount,
//!     &risk_factors,
//!     deductible,
//! )?;
//! println!("{} / year ({})", quote.annual_premium, quote.reference);
//! ```

pub mod composer;
pub mod coverage;
pub mod error;
pub mod rates;
pub mod reference;
pub mod risk_factors;
pub mod scoring;
pub mod services;

pub use composer::{compose, deductible_discount, PremiumQuote};
pub use coverage::{CoverageBreakdown, CoverageComponent};
pub use error::RatingError;
pub use rates::{base_rate, PolicyType};
pub use reference::QuoteReference;
pub use risk_factors::{normalize, NormalizedRiskFactors, RiskFactors, RiskTier};
pub use scoring::RiskScore;
pub use services::RatingService;
