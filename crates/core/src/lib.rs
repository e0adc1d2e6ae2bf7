//! Core invoice derivation logic for Fakt.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. The data-access layer feeds it raw ledger values; it
//! derives the invoice-level figures.
//!
//! # Modules
//!
//! - `invoice` - Line-item math, invoice totals and listing order
//! - `owner` - The polymorphic owner-type discriminator
//! - `settlement` - Ledger splits to due/paid/status derivation
//! - `schedule` - Due-date arithmetic with time-zone normalization

pub mod invoice;
pub mod owner;
pub mod schedule;
pub mod settlement;
