//! Line-item math, invoice totals and listing order.

pub mod entry;
pub mod error;
pub mod ordering;
pub mod totals;

#[cfg(test)]
mod tests;

pub use entry::{LineAmounts, line_amounts, resolve_tax_rate};
pub use error::InvoiceError;
pub use ordering::{compare_numbers_desc, sort_by_number_desc};
pub use totals::InvoiceTotals;
