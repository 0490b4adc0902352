//! Premium composition
//!
//! Combines total coverage, base rate, aggregate risk score, and the
//! deductible discount into final premium figures. The output carries the
//! full breakdown of contributing factors so the caller can render an
//! itemized quote explanation; that transparency is part of the contract,
//! and tests recombine the breakdown back into the final premium.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::coverage::CoverageBreakdown;
use crate::error::RatingError;
use crate::rates::{self, PolicyType, RATE_UNIT};
use crate::reference::QuoteReference;
use crate::scoring::RiskScore;
use core_kernel::{Money, Rate};

/// Floor applied to the annual premium after all discounts
pub const MIN_ANNUAL_PREMIUM: Decimal = dec!(50.00);

/// Ceiling on the deductible discount as a fraction of the risk-adjusted
/// annual premium
pub const MAX_DEDUCTIBLE_DISCOUNT: Decimal = dec!(0.30);

/// A fully-priced premium quote
///
/// A pure computed value: the engine keeps no record of quotes issued, and
/// persistence (if any) belongs to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumQuote {
    /// Generated human-readable reference for tracking
    pub reference: QuoteReference,
    /// Policy type the quote was priced for
    pub policy_type: PolicyType,
    /// Itemized coverage (synthetic for the per-amount path)
    pub coverage: CoverageBreakdown,
    /// Sum of all coverage components
    pub total_coverage: Money,
    /// Deductible the quote assumes
    pub deductible: Money,
    /// Annual base rate per 1,000 of coverage
    pub base_rate: Decimal,
    /// Per-category risk multipliers and clamped aggregate
    pub risk: RiskScore,
    /// Deductible discount applied, as a fraction of the risk-adjusted
    /// annual premium
    pub deductible_discount: Rate,
    /// Premium before the deductible discount
    pub risk_adjusted_annual: Money,
    /// Final annual premium, rounded to 2 decimal places
    pub annual_premium: Money,
    /// Annual premium / 12, rounded to 2 decimal places
    pub monthly_premium: Money,
}

/// Computes the deductible discount fraction
///
/// The curve is `max_discount * d / (d + reference)`: monotone increasing in
/// the deductible, with diminishing returns, and asymptotically below the
/// 30% cap. A deductible equal to the policy type's reference value earns
/// exactly half the maximum discount.
pub fn deductible_discount(policy_type: PolicyType, deductible: Decimal) -> Rate {
    if deductible <= Decimal::ZERO {
        return Rate::new(Decimal::ZERO);
    }
    let reference = rates::reference_deductible(policy_type);
    Rate::new(MAX_DEDUCTIBLE_DISCOUNT * deductible / (deductible + reference))
}

/// Validates a deductible against the policy type's cap and the
/// coverage currency
///
/// # Errors
///
/// Returns [`RatingError::Validation`] for a negative deductible, one
/// above the cap, or one quoted in a different currency than the coverage.
pub fn validate_deductible(
    policy_type: PolicyType,
    deductible: &Money,
    coverage_currency: core_kernel::Currency,
) -> Result<(), RatingError> {
    if deductible.currency() != coverage_currency {
        return Err(RatingError::validation(
            "deductible",
            format!(
                "must be in the coverage currency {}, got {}",
                coverage_currency,
                deductible.currency()
            ),
        ));
    }
    if deductible.is_negative() {
        return Err(RatingError::validation(
            "deductible",
            format!("must not be negative, got {}", deductible),
        ));
    }
    let cap = rates::deductible_cap(policy_type);
    if deductible.amount() > cap {
        return Err(RatingError::validation(
            "deductible",
            format!("exceeds the {} cap of {}", policy_type, cap),
        ));
    }
    Ok(())
}

/// Composes the final premium figures
///
/// Pure function of its inputs; the quote reference is generated by the
/// caller so this stays clock-free.
///
/// # Errors
///
/// Returns [`RatingError::MalformedCoverage`] if the breakdown's total is
/// not strictly positive, and [`RatingError::Validation`] for an invalid
/// deductible.
pub fn compose(
    reference: QuoteReference,
    policy_type: PolicyType,
    coverage: CoverageBreakdown,
    risk: RiskScore,
    deductible: Money,
) -> Result<PremiumQuote, RatingError> {
    let total_coverage = coverage.require_positive_total()?;
    let currency = total_coverage.currency();
    validate_deductible(policy_type, &deductible, currency)?;
    let base_rate = rates::base_rate(policy_type)?;

    // Annual premium before any risk adjustment
    let raw_annual = total_coverage.amount() / RATE_UNIT * base_rate;
    let risk_adjusted = raw_annual * risk.aggregate;

    let discount = deductible_discount(policy_type, deductible.amount());
    let discounted = risk_adjusted * (dec!(1) - discount.as_decimal());

    let annual = discounted.round_dp(2).max(MIN_ANNUAL_PREMIUM);
    let monthly = (annual / dec!(12)).round_dp(2);

    Ok(PremiumQuote {
        reference,
        policy_type,
        coverage,
        total_coverage,
        deductible,
        base_rate,
        risk,
        deductible_discount: discount,
        risk_adjusted_annual: Money::new(risk_adjusted, currency).round_to_currency(),
        annual_premium: Money::new(annual, currency),
        monthly_premium: Money::new(monthly, currency),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage::CoverageComponent;
    use crate::risk_factors::{normalize, RiskFactors};
    use core_kernel::Currency;

    fn zar(amount: Decimal) -> Money {
        Money::new(amount, Currency::ZAR)
    }

    fn neutral_score() -> RiskScore {
        RiskScore::calculate(&normalize(&RiskFactors::with_age(35)).unwrap())
    }

    fn home_breakdown(total: Decimal) -> CoverageBreakdown {
        CoverageBreakdown::single(CoverageComponent::Dwelling, zar(total)).unwrap()
    }

    #[test]
    fn test_compose_neutral_home_quote() {
        let quote = compose(
            QuoteReference::generate(PolicyType::Home),
            PolicyType::Home,
            home_breakdown(dec!(1000000)),
            neutral_score(),
            zar(dec!(5000)),
        )
        .unwrap();

        // 1,000,000 / 1,000 * 3.50 = 3,500 before adjustment
        assert_eq!(quote.risk_adjusted_annual.amount(), dec!(3500.00));
        // 5,000 deductible at a 5,000 reference: 15% discount
        assert_eq!(quote.deductible_discount.as_decimal(), dec!(0.15));
        assert_eq!(quote.annual_premium.amount(), dec!(2975.00));
        assert_eq!(quote.monthly_premium.amount(), dec!(247.92));
    }

    #[test]
    fn test_monthly_is_annual_over_twelve_rounded() {
        let quote = compose(
            QuoteReference::generate(PolicyType::Home),
            PolicyType::Home,
            home_breakdown(dec!(847500)),
            neutral_score(),
            zar(dec!(2000)),
        )
        .unwrap();

        let expected = (quote.annual_premium.amount() / dec!(12)).round_dp(2);
        assert_eq!(quote.monthly_premium.amount(), expected);
    }

    #[test]
    fn test_discount_never_reaches_cap() {
        // HOME deductible cap is 50,000
        let at_cap = deductible_discount(PolicyType::Home, dec!(50000));
        assert!(at_cap.as_decimal() < MAX_DEDUCTIBLE_DISCOUNT);

        let zero = deductible_discount(PolicyType::Home, dec!(0));
        assert_eq!(zero.as_decimal(), dec!(0));
    }

    #[test]
    fn test_discount_has_diminishing_returns() {
        let first_step = deductible_discount(PolicyType::Home, dec!(5000)).as_decimal();
        let second_step = deductible_discount(PolicyType::Home, dec!(10000)).as_decimal()
            - first_step;

        assert!(second_step > Decimal::ZERO);
        assert!(second_step < first_step);
    }

    #[test]
    fn test_minimum_premium_floor() {
        let quote = compose(
            QuoteReference::generate(PolicyType::Home),
            PolicyType::Home,
            home_breakdown(dec!(1000)),
            neutral_score(),
            zar(dec!(0)),
        )
        .unwrap();

        // 1,000 of coverage would price at 3.50; the floor takes over
        assert_eq!(quote.annual_premium.amount(), MIN_ANNUAL_PREMIUM);
    }

    #[test]
    fn test_negative_deductible_rejected() {
        let result = compose(
            QuoteReference::generate(PolicyType::Home),
            PolicyType::Home,
            home_breakdown(dec!(500000)),
            neutral_score(),
            zar(dec!(-100)),
        );

        assert!(matches!(result, Err(RatingError::Validation { .. })));
    }

    #[test]
    fn test_deductible_above_cap_rejected() {
        let result = compose(
            QuoteReference::generate(PolicyType::Home),
            PolicyType::Home,
            home_breakdown(dec!(500000)),
            neutral_score(),
            zar(dec!(50001)),
        );

        assert!(matches!(result, Err(RatingError::Validation { .. })));
    }

    #[test]
    fn test_foreign_currency_deductible_rejected() {
        let result = compose(
            QuoteReference::generate(PolicyType::Home),
            PolicyType::Home,
            home_breakdown(dec!(500000)),
            neutral_score(),
            Money::new(dec!(5000), Currency::USD),
        );

        assert!(matches!(
            result,
            Err(RatingError::Validation { field, .. }) if field == "deductible"
        ));
    }

    #[test]
    fn test_zero_total_coverage_rejected() {
        let result = compose(
            QuoteReference::generate(PolicyType::Home),
            PolicyType::Home,
            home_breakdown(dec!(0)),
            neutral_score(),
            zar(dec!(5000)),
        );

        assert!(matches!(result, Err(RatingError::MalformedCoverage(_))));
    }

    #[test]
    fn test_breakdown_recombines_to_annual_premium() {
        let quote = compose(
            QuoteReference::generate(PolicyType::Home),
            PolicyType::Home,
            home_breakdown(dec!(1234567)),
            neutral_score(),
            zar(dec!(7500)),
        )
        .unwrap();

        let recombined = quote.total_coverage.amount() / RATE_UNIT
            * quote.base_rate
            * quote.risk.aggregate
            * (dec!(1) - quote.deductible_discount.as_decimal());

        let diff = (recombined - quote.annual_premium.amount()).abs();
        assert!(diff <= dec!(0.01), "breakdown drifted by {}", diff);
    }
}
