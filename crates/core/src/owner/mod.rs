//! The polymorphic owner-type discriminator.
//!
//! Invoices and jobs carry an integer tag selecting whether their owner
//! is a customer or another job. Only those two values are meaningful;
//! anything else in the store is an error, not a silent none.

use thiserror::Error;

/// Errors raised while interpreting owner references.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OwnerError {
    /// The discriminator is outside the supported set.
    #[error("Invalid owner type: {0}")]
    InvalidOwnerType(i32),
}

/// Owner-type discriminator values used by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerType {
    /// The owner reference points at a customer.
    Customer,
    /// The owner reference points at a job.
    Job,
}

impl OwnerType {
    /// Returns the integer tag the store uses for this variant.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Customer => 2,
            Self::Job => 3,
        }
    }
}

impl TryFrom<i32> for OwnerType {
    type Error = OwnerError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Self::Customer),
            3 => Ok(Self::Job),
            other => Err(OwnerError::InvalidOwnerType(other)),
        }
    }
}
