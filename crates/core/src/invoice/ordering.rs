//! Invoice listing order.
//!
//! Listings show invoices by number, descending. Invoice numbers are
//! free-form strings, so the order is plain byte-wise string comparison
//! ("A-3" sorts above "A-2", which sorts above "A-10"). Sorting happens
//! in-process so a backend's collation cannot change the result.

use std::cmp::Ordering;

/// Compares two invoice numbers for descending listing order.
#[must_use]
pub fn compare_numbers_desc(a: &str, b: &str) -> Ordering {
    b.cmp(a)
}

/// Sorts items descending by their invoice number.
///
/// The sort is stable: items with equal numbers keep their store order.
pub fn sort_by_number_desc<T, F>(items: &mut [T], number: F)
where
    F: for<'a> Fn(&'a T) -> &'a str,
{
    items.sort_by(|a, b| compare_numbers_desc(number(a), number(b)));
}
