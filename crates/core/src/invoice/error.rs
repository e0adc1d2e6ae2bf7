//! Invoice computation error types.

use thiserror::Error;

/// Errors raised by invoice line computations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvoiceError {
    /// A taxable entry has no matching tax-table row.
    ///
    /// An earlier revision of the system swallowed this and taxed the
    /// line at zero; that masked broken tax-table references, so the
    /// lookup failure is now propagated.
    #[error("Taxable entry has no matching tax-table row")]
    MissingTaxRate,
}
