//! Custom Test Assertions
//!
//! Specialized assertion helpers for domain types that give more
//! meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_rating::PremiumQuote;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the currencies don't match or the amounts differ by more than
/// the tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );

    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts that a Money value is strictly positive
pub fn assert_money_positive(money: &Money) {
    assert!(
        money.is_positive(),
        "Expected positive money, got {}",
        money
    );
}

/// Asserts the internal consistency of a premium quote
///
/// Recombines the returned breakdown (base rate, aggregate risk multiplier,
/// deductible discount) and checks it reproduces the annual premium within
/// rounding tolerance, and that the monthly premium is exactly the rounded
/// twelfth of the annual premium.
///
/// # Panics
///
/// Panics if any consistency property fails
pub fn assert_quote_consistent(quote: &PremiumQuote) {
    assert_money_positive(&quote.annual_premium);

    let recombined = quote.total_coverage.amount() / dec!(1000)
        * quote.base_rate
        * quote.risk.aggregate
        * (dec!(1) - quote.deductible_discount.as_decimal());
    // The floor only engages for tiny premiums; skip recombination there
    if quote.annual_premium.amount() > dec!(50.00) {
        let diff = (recombined - quote.annual_premium.amount()).abs();
        assert!(
            diff <= dec!(0.01),
            "breakdown does not recombine: recombined={}, annual={}, diff={}",
            recombined,
            quote.annual_premium.amount(),
            diff
        );
    }

    let expected_monthly = (quote.annual_premium.amount() / dec!(12)).round_dp(2);
    assert_eq!(
        quote.monthly_premium.amount(),
        expected_monthly,
        "monthly premium must be annual/12 rounded to 2 decimals"
    );

    // Discount bound: annual never drops below 70% of the risk-adjusted figure
    let floor = (quote.risk_adjusted_annual.amount() * dec!(0.70)).round_dp(2);
    assert!(
        quote.annual_premium.amount() + dec!(0.01) >= floor,
        "deductible discount exceeded 30%: annual={}, risk_adjusted={}",
        quote.annual_premium.amount(),
        quote.risk_adjusted_annual.amount()
    );
}

/// Asserts that money values sum to a total
pub fn assert_money_sums_to(parts: &[Money], total: &Money) {
    let sum: Decimal = parts.iter().map(|p| p.amount()).sum();
    assert_eq!(
        sum,
        total.amount(),
        "parts sum to {} but expected {}",
        sum,
        total.amount()
    );
}
