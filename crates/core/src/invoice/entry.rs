//! Per-line invoice arithmetic.
//!
//! Every figure stays an exact rational. The tax rate is a percentage
//! (25 means 25%), as stored in the tax tables.

use fakt_shared::types::Fraction;

use super::error::InvoiceError;

/// Derived monetary figures for a single invoice line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineAmounts {
    /// Unit price times quantity.
    pub net: Fraction,
    /// The applied tax rate, as a percentage.
    pub tax_rate: Fraction,
    /// Net times rate over one hundred.
    pub tax: Fraction,
    /// Net plus tax.
    pub gross: Fraction,
}

/// Resolves the tax rate applicable to an entry.
///
/// Untaxed entries always rate zero, whether or not they reference a
/// tax table. Taxable entries must resolve their tax-table row.
///
/// # Errors
///
/// Returns `InvoiceError::MissingTaxRate` when `taxable` is set but no
/// tax-table row matched the entry's reference.
pub fn resolve_tax_rate(
    taxable: bool,
    table_rate: Option<Fraction>,
) -> Result<Fraction, InvoiceError> {
    if !taxable {
        return Ok(Fraction::ZERO);
    }
    table_rate.ok_or(InvoiceError::MissingTaxRate)
}

/// Computes net, tax and gross for one line.
#[must_use]
pub fn line_amounts(quantity: Fraction, unit_price: Fraction, tax_rate: Fraction) -> LineAmounts {
    let net = unit_price * quantity;
    let tax = net * tax_rate * Fraction::PERCENT;
    LineAmounts {
        net,
        tax_rate,
        tax,
        gross: net + tax,
    }
}
