//! Ledger splits to due/paid/status derivation.
//!
//! Posting an invoice creates a lot in the ledger; every split charged
//! or paid against the invoice carries that lot reference. The balance
//! still due is simply the exact sum of those split values: the posting
//! charge is positive, payments and credits are non-positive.

use fakt_shared::types::Fraction;

/// Returns true if a split is internal bookkeeping noise.
///
/// The ledger balances lots with marker splits (by default labelled
/// "Auto Split") that are not part of the invoice's payment history.
#[must_use]
pub fn is_internal(action: &str, marker: &str) -> bool {
    action == marker
}

/// Returns true if a split value represents a payment or credit.
///
/// Non-positive values count; a zero-value split is a credit note.
#[must_use]
pub fn is_payment(value: &Fraction) -> bool {
    !value.is_positive()
}

/// Sums split values into the outstanding balance.
///
/// Zero when nothing was charged or everything was settled.
#[must_use]
pub fn balance_due<I>(values: I) -> Fraction
where
    I: IntoIterator<Item = Fraction>,
{
    values.into_iter().sum()
}

/// Sums the payment splits only.
#[must_use]
pub fn amount_paid<I>(values: I) -> Fraction
where
    I: IntoIterator<Item = Fraction>,
{
    values.into_iter().filter(is_payment).sum()
}

/// Derives the paid status.
///
/// An invoice counts as paid only once it has been posted AND its
/// balance is exactly zero. Unposted invoices are never "paid", no
/// matter what the lot holds.
#[must_use]
pub fn is_settled(posted: bool, due: &Fraction) -> bool {
    posted && due.is_zero()
}
