//! Tests for line math, totals and listing order.

use fakt_shared::types::Fraction;
use proptest::prelude::*;

use super::entry::{LineAmounts, line_amounts, resolve_tax_rate};
use super::error::InvoiceError;
use super::ordering::sort_by_number_desc;
use super::totals::InvoiceTotals;

fn fraction_strategy() -> impl Strategy<Value = Fraction> {
    (-100_000i64..100_000i64, 1i64..10_000i64)
        .prop_map(|(num, den)| Fraction::new(num, den).unwrap())
}

fn rate_strategy() -> impl Strategy<Value = Fraction> {
    (0i64..10_000i64, 1i64..100i64).prop_map(|(num, den)| Fraction::new(num, den).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// For any rational inputs, gross == net + tax exactly.
    #[test]
    fn prop_gross_is_net_plus_tax(
        quantity in fraction_strategy(),
        price in fraction_strategy(),
        rate in rate_strategy(),
    ) {
        let line = line_amounts(quantity, price, rate);
        prop_assert_eq!(line.gross, line.net + line.tax);
    }

    /// For any rational inputs, tax == net * rate * 0.01 exactly.
    #[test]
    fn prop_tax_is_net_times_rate(
        quantity in fraction_strategy(),
        price in fraction_strategy(),
        rate in rate_strategy(),
    ) {
        let line = line_amounts(quantity, price, rate);
        prop_assert_eq!(line.tax, line.net * rate * Fraction::PERCENT);
    }

    /// Invoice totals are the exact sums of the per-line figures.
    #[test]
    fn prop_totals_are_sums(
        lines in prop::collection::vec(
            (fraction_strategy(), fraction_strategy(), rate_strategy()),
            0..8,
        ),
    ) {
        let amounts: Vec<LineAmounts> = lines
            .iter()
            .map(|(q, p, r)| line_amounts(*q, *p, *r))
            .collect();
        let totals = InvoiceTotals::from_lines(&amounts);
        prop_assert_eq!(totals.net, amounts.iter().map(|l| l.net).sum());
        prop_assert_eq!(totals.tax, amounts.iter().map(|l| l.tax).sum());
        prop_assert_eq!(totals.gross, amounts.iter().map(|l| l.gross).sum());
    }
}

mod unit_tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_worked_example_line() {
        // quantity 3/1, unit price 100/1, taxable at 25/1 percent
        let line = line_amounts(
            Fraction::from_int(3),
            Fraction::from_int(100),
            Fraction::from_int(25),
        );
        assert_eq!(line.net.to_decimal().unwrap(), dec!(300));
        assert_eq!(line.tax.to_decimal().unwrap(), dec!(75));
        assert_eq!(line.gross.to_decimal().unwrap(), dec!(375));
    }

    #[test]
    fn test_untaxed_line_rates_zero() {
        let rate = resolve_tax_rate(false, None).unwrap();
        assert_eq!(rate, Fraction::ZERO);
        // An untaxed entry keeps rate zero even when it references a table.
        let rate = resolve_tax_rate(false, Some(Fraction::from_int(25))).unwrap();
        assert_eq!(rate, Fraction::ZERO);
    }

    #[test]
    fn test_taxable_line_without_table_row_fails() {
        assert_eq!(resolve_tax_rate(true, None), Err(InvoiceError::MissingTaxRate));
    }

    #[test]
    fn test_taxable_line_uses_table_rate() {
        let rate = resolve_tax_rate(true, Some(Fraction::from_int(25))).unwrap();
        assert_eq!(rate, Fraction::from_int(25));
    }

    #[test]
    fn test_worked_example_totals() {
        let lines = [
            line_amounts(
                Fraction::from_int(3),
                Fraction::from_int(100),
                Fraction::from_int(25),
            ),
            line_amounts(
                Fraction::from_int(1),
                Fraction::from_int(100),
                Fraction::ZERO,
            ),
        ];
        let totals = InvoiceTotals::from_lines(&lines);
        assert_eq!(totals.net.to_decimal().unwrap(), dec!(400));
        assert_eq!(totals.tax.to_decimal().unwrap(), dec!(75));
        assert_eq!(totals.gross.to_decimal().unwrap(), dec!(475));
    }

    #[test]
    fn test_empty_invoice_totals_are_zero() {
        let totals = InvoiceTotals::from_lines(&[]);
        assert!(totals.net.is_zero());
        assert!(totals.tax.is_zero());
        assert!(totals.gross.is_zero());
    }

    #[test]
    fn test_fractional_quantity() {
        // Half an hour at 90/1 with 10% tax.
        let line = line_amounts(
            Fraction::new(1, 2).unwrap(),
            Fraction::from_int(90),
            Fraction::from_int(10),
        );
        assert_eq!(line.net.to_decimal().unwrap(), dec!(45));
        assert_eq!(line.tax.to_decimal().unwrap(), dec!(4.5));
        assert_eq!(line.gross.to_decimal().unwrap(), dec!(49.5));
    }

    #[test]
    fn test_number_ordering_is_string_descending() {
        let mut numbers = vec!["A-3", "A-10", "A-2"];
        sort_by_number_desc(&mut numbers, |n| n);
        assert_eq!(numbers, vec!["A-3", "A-2", "A-10"]);
    }

    #[test]
    fn test_number_ordering_stable_for_duplicates() {
        let mut items = vec![("A-1", 1), ("A-2", 2), ("A-1", 3)];
        sort_by_number_desc(&mut items, |(n, _)| *n);
        assert_eq!(items, vec![("A-2", 2), ("A-1", 1), ("A-1", 3)]);
    }
}
