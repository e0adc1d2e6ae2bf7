//! Invoice-level totals.

use fakt_shared::types::Fraction;

use super::entry::LineAmounts;

/// Exact per-invoice sums of the line figures.
///
/// Accumulated as rationals so that rounding happens once, at the
/// presentation boundary, never inside the sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvoiceTotals {
    /// Sum of line nets.
    pub net: Fraction,
    /// Sum of line taxes.
    pub tax: Fraction,
    /// Sum of line grosses.
    pub gross: Fraction,
}

impl Default for InvoiceTotals {
    fn default() -> Self {
        Self {
            net: Fraction::ZERO,
            tax: Fraction::ZERO,
            gross: Fraction::ZERO,
        }
    }
}

impl InvoiceTotals {
    /// Adds one line's figures to the running totals.
    pub fn add_line(&mut self, line: &LineAmounts) {
        self.net = self.net + line.net;
        self.tax = self.tax + line.tax;
        self.gross = self.gross + line.gross;
    }

    /// Builds totals from an iterator of line figures.
    ///
    /// An empty iterator yields all-zero totals.
    #[must_use]
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a LineAmounts>,
    {
        let mut totals = Self::default();
        for line in lines {
            totals.add_line(line);
        }
        totals
    }
}
