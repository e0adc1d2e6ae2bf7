//! `SeaORM` entity definitions.
//!
//! All tables except `options` live in the external bookkeeping
//! database and are treated as read-only views: only the columns this
//! application consumes are mapped. Identifiers are 32-character hex
//! GUID strings; monetary columns are exact numerator/denominator
//! pairs.

pub mod billterms;
pub mod customers;
pub mod entries;
pub mod invoices;
pub mod jobs;
pub mod options;
pub mod slots;
pub mod splits;
pub mod taxtable_entries;
pub mod transactions;
