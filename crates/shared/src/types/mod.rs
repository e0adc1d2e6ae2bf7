//! Common types used across the application.

pub mod fraction;
pub mod guid;

pub use fraction::{Fraction, FractionError};
pub use guid::{Guid, GuidError};
