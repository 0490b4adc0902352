//! Core Kernel - Foundational types for the rating engine
//!
//! This crate provides the fundamental building blocks used by the domain
//! modules:
//! - Money and Rate types with precise decimal arithmetic
//! - Strongly-typed identifiers

pub mod error;
pub mod identifiers;
pub mod money;

pub use error::CoreError;
pub use identifiers::{PolicyId, QuoteId};
pub use money::{Currency, Money, MoneyError, Rate};
