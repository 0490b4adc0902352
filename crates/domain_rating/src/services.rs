//! Rating domain services
//!
//! [`RatingService`] is the engine's public surface. Its two entrypoints,
//! the coverage-breakdown model and the per-amount model, normalize their
//! distinct inputs into one common `(coverage, risk, deductible, policy
//! type)` shape and run a single shared scoring-and-composition pipeline,
//! so the pricing logic exists exactly once.
//!
//! The service holds no state: any number of callers may invoke it
//! concurrently without coordination.

use crate::composer::{self, PremiumQuote};
use crate::coverage::{CoverageBreakdown, CoverageComponent};
use crate::error::RatingError;
use crate::rates::{self, PolicyType};
use crate::reference::QuoteReference;
use crate::risk_factors::{self, RiskFactors};
use crate::scoring::RiskScore;
use core_kernel::Money;

/// Service for premium rating
#[derive(Debug, Clone, Copy, Default)]
pub struct RatingService;

impl RatingService {
    /// Creates a new rating service
    pub fn new() -> Self {
        Self
    }

    /// Prices a quote from an itemized coverage breakdown
    ///
    /// # Arguments
    ///
    /// * `policy_type` - The policy type to rate
    /// * `coverage` - Itemized coverage amounts
    /// * `factors` - Possibly-partial risk factor bundle
    /// * `deductible` - The deductible the quote assumes
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::Validation`] for out-of-range inputs or a
    /// missing applicant age, [`RatingError::MalformedCoverage`] for a
    /// non-positive total, and [`RatingError::UnsupportedPolicyType`] if no
    /// base rate is configured.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let service = RatingService::new();
    /// let quote = service.quote(PolicyType::Home, breakdown, &factors, deductible)?;
    /// println!("{} per month", quote.monthly_premium);
    /// ```
    pub fn quote(
        &self,
        policy_type: PolicyType,
        coverage: CoverageBreakdown,
        factors: &RiskFactors,
        deductible: Money,
    ) -> Result<PremiumQuote, RatingError> {
        self.rate(policy_type, coverage, factors, deductible)
    }

    /// Prices a quote from a single total coverage amount
    ///
    /// Newer UI flows quote off one figure. A synthetic breakdown is derived
    /// from the policy type's standard split (70/20/10 for HOME) purely for
    /// consumers that still expect itemized figures; pricing uses the total
    /// directly, so this model and [`Self::quote`] agree whenever their
    /// totals agree.
    ///
    /// # Errors
    ///
    /// As for [`Self::quote`]; a negative coverage amount is a
    /// [`RatingError::Validation`] on `coverageAmount`.
    pub fn quote_per_amount(
        &self,
        policy_type: PolicyType,
        coverage_amount: Money,
        factors: &RiskFactors,
        deductible: Money,
    ) -> Result<PremiumQuote, RatingError> {
        if coverage_amount.is_negative() {
            return Err(RatingError::validation(
                "coverageAmount",
                format!("must not be negative, got {}", coverage_amount),
            ));
        }

        let coverage = derive_breakdown(policy_type, coverage_amount)?;
        self.rate(policy_type, coverage, factors, deductible)
    }

    /// The shared scoring-and-composition pipeline
    fn rate(
        &self,
        policy_type: PolicyType,
        coverage: CoverageBreakdown,
        factors: &RiskFactors,
        deductible: Money,
    ) -> Result<PremiumQuote, RatingError> {
        let normalized = risk_factors::normalize(factors)?;
        let risk = RiskScore::calculate(&normalized);
        let reference = QuoteReference::generate(policy_type);

        composer::compose(reference, policy_type, coverage, risk, deductible)
    }
}

/// Derives the synthetic coverage breakdown for the per-amount model
///
/// The split proportions sum to 1 and the ratio allocator pushes rounding
/// remainders into the last component, so the derived breakdown always
/// totals exactly the input amount.
fn derive_breakdown(
    policy_type: PolicyType,
    total: Money,
) -> Result<CoverageBreakdown, RatingError> {
    let split = rates::coverage_split(policy_type);
    let ratios: Vec<_> = split.iter().map(|(_, ratio)| *ratio).collect();
    let amounts = total.allocate_by_ratios(&ratios)?;

    CoverageBreakdown::new(
        split
            .iter()
            .zip(amounts)
            .map(|((label, _), amount)| (CoverageComponent::from_label(label), amount)),
    )
}
