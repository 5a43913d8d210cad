//! `Currency` and `CurrencyAmount`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg};

use ir_core::errors::{Error, Result};
use ir_core::Real;

/// Data describing a single currency.
///
/// Currencies are identified by their ISO code: equality, ordering and
/// hashing only look at [`Currency::code`].
#[derive(Debug, Clone, Copy)]
pub struct Currency {
    /// Full name (e.g. "United States Dollar").
    pub name: &'static str,
    /// ISO 4217 alphabetic code (e.g. "USD").
    pub code: &'static str,
    /// ISO 4217 numeric code (e.g. 840).
    pub numeric_code: u16,
    /// Symbol used in financial notation (e.g. "$").
    pub symbol: &'static str,
    /// Number of fractional units per whole unit (e.g. 100 for cents).
    pub fractions_per_unit: u32,
    /// Rounding precision (decimal places for display).
    pub rounding: u8,
}

impl Currency {
    /// Return `true` if this is the null / empty currency sentinel.
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl PartialOrd for Currency {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Currency {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code.cmp(other.code)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// An amount in a given currency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrencyAmount {
    /// The currency.
    pub currency: Currency,
    /// Numeric value.
    pub amount: Real,
}

impl CurrencyAmount {
    /// Create a new amount.
    pub fn of(currency: Currency, amount: Real) -> Self {
        Self { currency, amount }
    }

    /// Add another amount in the same currency.
    ///
    /// # Errors
    /// Returns an error if the currencies differ.
    pub fn plus(&self, other: &CurrencyAmount) -> Result<Self> {
        if self.currency != other.currency {
            return Err(Error::InvalidArgument(format!(
                "cannot add {} to {}",
                other.currency, self.currency
            )));
        }
        Ok(Self::of(self.currency, self.amount + other.amount))
    }
}

impl Add<Real> for CurrencyAmount {
    type Output = Self;
    fn add(self, rhs: Real) -> Self {
        Self::of(self.currency, self.amount + rhs)
    }
}

impl Mul<Real> for CurrencyAmount {
    type Output = Self;
    fn mul(self, rhs: Real) -> Self {
        Self::of(self.currency, self.amount * rhs)
    }
}

impl Neg for CurrencyAmount {
    type Output = Self;
    fn neg(self) -> Self {
        Self::of(self.currency, -self.amount)
    }
}

impl fmt::Display for CurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.*} {}",
            usize::from(self.currency.rounding),
            self.amount,
            self.currency.code
        )
    }
}
