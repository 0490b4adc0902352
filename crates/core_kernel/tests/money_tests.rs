//! Unit tests for the Money module
//!
//! Tests cover money creation, arithmetic operations, ratio allocation,
//! currency handling, and edge cases.

use core_kernel::{Currency, Money, MoneyError, Rate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_creates_money_with_correct_amount() {
        let m = Money::new(dec!(100.50), Currency::ZAR);
        assert_eq!(m.amount(), dec!(100.50));
        assert_eq!(m.currency(), Currency::ZAR);
    }

    #[test]
    fn test_new_rounds_to_four_decimal_places() {
        let m = Money::new(dec!(100.123456789), Currency::ZAR);
        assert_eq!(m.amount(), dec!(100.1235));
    }

    #[test]
    fn test_from_minor_converts_cents_correctly() {
        let m = Money::from_minor(10050, Currency::ZAR);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        let m = Money::zero(Currency::NAD);
        assert!(m.is_zero());
        assert_eq!(m.currency(), Currency::NAD);
    }

    #[test]
    fn test_negative_amount_creation() {
        let m = Money::new(dec!(-100.00), Currency::ZAR);
        assert!(m.is_negative());
        assert_eq!(m.amount(), dec!(-100.00));
    }
}

mod predicates {
    use super::*;

    #[test]
    fn test_is_zero_true_for_zero_amount() {
        assert!(Money::zero(Currency::ZAR).is_zero());
    }

    #[test]
    fn test_is_positive_false_for_zero() {
        assert!(!Money::zero(Currency::ZAR).is_positive());
    }

    #[test]
    fn test_is_positive_true_for_positive() {
        assert!(Money::new(dec!(0.01), Currency::ZAR).is_positive());
    }

    #[test]
    fn test_is_negative_false_for_zero() {
        assert!(!Money::zero(Currency::ZAR).is_negative());
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_addition_same_currency() {
        let a = Money::new(dec!(700000), Currency::ZAR);
        let b = Money::new(dec!(300000), Currency::ZAR);
        assert_eq!((a + b).amount(), dec!(1000000));
    }

    #[test]
    fn test_subtraction_same_currency() {
        let a = Money::new(dec!(1000), Currency::ZAR);
        let b = Money::new(dec!(250), Currency::ZAR);
        assert_eq!((a - b).amount(), dec!(750));
    }

    #[test]
    fn test_checked_add_rejects_currency_mismatch() {
        let zar = Money::new(dec!(100), Currency::ZAR);
        let gbp = Money::new(dec!(100), Currency::GBP);
        assert!(matches!(
            zar.checked_add(&gbp),
            Err(MoneyError::CurrencyMismatch(_, _))
        ));
    }

    #[test]
    fn test_multiply_by_scalar() {
        let m = Money::new(dec!(12000), Currency::ZAR);
        assert_eq!(m.multiply(dec!(1.25)).amount(), dec!(15000));
    }

    #[test]
    fn test_divide_by_scalar() {
        let m = Money::new(dec!(12000), Currency::ZAR);
        assert_eq!(m.divide(dec!(12)).unwrap().amount(), dec!(1000));
    }

    #[test]
    fn test_divide_by_zero_errors() {
        let m = Money::new(dec!(12000), Currency::ZAR);
        assert!(matches!(
            m.divide(dec!(0)),
            Err(MoneyError::DivisionByZero)
        ));
    }

    #[test]
    fn test_negation() {
        let m = Money::new(dec!(50), Currency::ZAR);
        assert_eq!((-m).amount(), dec!(-50));
    }

    #[test]
    fn test_ordering_same_currency() {
        let small = Money::new(dec!(100), Currency::ZAR);
        let big = Money::new(dec!(200), Currency::ZAR);
        assert!(small < big);
    }

    #[test]
    fn test_ordering_across_currencies_is_undefined() {
        let zar = Money::new(dec!(100), Currency::ZAR);
        let usd = Money::new(dec!(100), Currency::USD);
        assert!(zar.partial_cmp(&usd).is_none());
    }
}

mod allocation {
    use super::*;

    #[test]
    fn test_allocate_by_ratios_standard_split() {
        let total = Money::new(dec!(1000000), Currency::ZAR);
        let parts = total
            .allocate_by_ratios(&[dec!(70), dec!(20), dec!(10)])
            .unwrap();

        assert_eq!(parts[0].amount(), dec!(700000));
        assert_eq!(parts[1].amount(), dec!(200000));
        assert_eq!(parts[2].amount(), dec!(100000));
    }

    #[test]
    fn test_allocate_by_ratios_remainder_goes_to_last_part() {
        let total = Money::new(dec!(100.01), Currency::ZAR);
        let parts = total.allocate_by_ratios(&[dec!(1), dec!(1), dec!(1)]).unwrap();

        let sum: Decimal = parts.iter().map(|p| p.amount()).sum();
        assert_eq!(sum, dec!(100.01));
    }

    #[test]
    fn test_allocate_by_empty_ratios_errors() {
        let total = Money::new(dec!(100), Currency::ZAR);
        assert!(total.allocate_by_ratios(&[]).is_err());
    }

    #[test]
    fn test_allocate_by_zero_ratios_errors() {
        let total = Money::new(dec!(100), Currency::ZAR);
        assert!(total.allocate_by_ratios(&[dec!(0), dec!(0)]).is_err());
    }
}

mod rates {
    use super::*;

    #[test]
    fn test_rate_from_percentage() {
        let rate = Rate::from_percentage(dec!(30));
        assert_eq!(rate.as_decimal(), dec!(0.30));
        assert_eq!(rate.as_percentage(), dec!(30));
    }

    #[test]
    fn test_rate_applies_to_money() {
        let rate = Rate::new(dec!(0.12));
        let m = Money::new(dec!(5000), Currency::ZAR);
        assert_eq!(rate.apply(&m).amount(), dec!(600));
    }
}

mod rounding {
    use super::*;

    #[test]
    fn test_round_to_currency_two_places() {
        let m = Money::new(dec!(874.2291), Currency::ZAR);
        assert_eq!(m.round_to_currency().amount(), dec!(874.23));
    }

    #[test]
    fn test_midpoint_rounds_to_even() {
        let m = Money::new(dec!(10.005), Currency::ZAR);
        // rust_decimal round_dp uses banker's rounding at the midpoint
        assert_eq!(m.round_to_currency().amount(), dec!(10.00));
    }
}
