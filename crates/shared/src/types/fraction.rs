//! Exact rational amounts.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! The ledger stores every monetary figure as an integer
//! numerator/denominator pair. `Fraction` keeps that exact form through
//! all intermediate arithmetic; conversion to `Decimal` happens only at
//! the presentation boundary.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors produced when constructing or converting a fraction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FractionError {
    /// The denominator read from the store is zero.
    #[error("Fraction denominator is zero")]
    ZeroDenominator,

    /// The value does not fit in a `Decimal`.
    #[error("Fraction {0}/{1} is out of decimal range")]
    OutOfRange(i128, i128),
}

/// An exact rational number.
///
/// Always held in reduced form with a positive denominator, so derived
/// `PartialEq`/`Eq` compare mathematical values. Arithmetic widens to
/// `i128`; inputs come from 64-bit ledger columns and every operation
/// reduces its result, which keeps intermediates far from overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    num: i128,
    den: i128,
}

impl Fraction {
    /// Exactly zero.
    pub const ZERO: Self = Self { num: 0, den: 1 };

    /// One hundredth, for percentage-to-factor conversion.
    pub const PERCENT: Self = Self { num: 1, den: 100 };

    /// Creates a fraction from a stored numerator/denominator pair.
    ///
    /// # Errors
    ///
    /// Returns `FractionError::ZeroDenominator` if `den` is zero.
    pub fn new(num: i64, den: i64) -> Result<Self, FractionError> {
        if den == 0 {
            return Err(FractionError::ZeroDenominator);
        }
        Ok(Self::reduced(i128::from(num), i128::from(den)))
    }

    /// Creates a fraction from a whole number.
    #[must_use]
    pub fn from_int(value: i64) -> Self {
        Self {
            num: i128::from(value),
            den: 1,
        }
    }

    /// Returns true if the value is exactly zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.num == 0
    }

    /// Returns true if the value is strictly positive.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.num > 0
    }

    /// Converts to a `Decimal` for presentation.
    ///
    /// Non-terminating expansions are truncated to `Decimal` precision;
    /// this is the documented precision limit of the reporting boundary.
    ///
    /// # Errors
    ///
    /// Returns `FractionError::OutOfRange` if either component exceeds
    /// `Decimal` range.
    pub fn to_decimal(&self) -> Result<Decimal, FractionError> {
        let num = Decimal::try_from_i128_with_scale(self.num, 0)
            .map_err(|_| FractionError::OutOfRange(self.num, self.den))?;
        let den = Decimal::try_from_i128_with_scale(self.den, 0)
            .map_err(|_| FractionError::OutOfRange(self.num, self.den))?;
        // den is never zero by construction.
        Ok(num / den)
    }

    fn reduced(num: i128, den: i128) -> Self {
        let (num, den) = if den < 0 { (-num, -den) } else { (num, den) };
        let g = gcd(num.unsigned_abs(), den.unsigned_abs());
        if g <= 1 {
            return Self { num, den };
        }
        #[allow(clippy::cast_possible_wrap)]
        Self {
            num: num / g as i128,
            den: den / g as i128,
        }
    }
}

impl std::ops::Add for Fraction {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::reduced(self.num * rhs.den + rhs.num * self.den, self.den * rhs.den)
    }
}

impl std::ops::Mul for Fraction {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::reduced(self.num * rhs.num, self.den * rhs.den)
    }
}

impl std::iter::Sum for Fraction {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, f| acc + f)
    }
}

impl std::fmt::Display for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
