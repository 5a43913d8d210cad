//! `Period`: a tenor expressed as an integer length of a [`TimeUnit`].

use crate::frequency::Frequency;
use crate::time_unit::TimeUnit;
use ir_core::errors::{Error, Result};
use ir_core::Real;

/// A tenor made up of an integer length and a [`TimeUnit`], e.g. `3M`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    /// Number of units.
    pub length: i32,
    /// The unit of time.
    pub unit: TimeUnit,
}

impl Period {
    /// Create a new period.
    pub fn new(length: i32, unit: TimeUnit) -> Self {
        Self { length, unit }
    }

    /// Shorthand for `Period::new(n, TimeUnit::Months)`.
    pub fn months(n: i32) -> Self {
        Self::new(n, TimeUnit::Months)
    }

    /// Shorthand for `Period::new(n, TimeUnit::Years)`.
    pub fn years(n: i32) -> Self {
        Self::new(n, TimeUnit::Years)
    }

    /// The tenor between two consecutive payments of a leg paying at `freq`.
    pub fn from_frequency(freq: Frequency) -> Self {
        match freq {
            Frequency::Annual => Period::years(1),
            Frequency::Semiannual => Period::months(6),
            Frequency::Quarterly => Period::months(3),
            Frequency::Bimonthly => Period::months(2),
            Frequency::Monthly => Period::months(1),
            Frequency::Weekly => Period::new(1, TimeUnit::Weeks),
            Frequency::Daily => Period::new(1, TimeUnit::Days),
        }
    }

    /// The frequency of a leg whose payments are one period apart.
    ///
    /// # Errors
    /// Returns an error if the period does not divide a year evenly.
    pub fn frequency(&self) -> Result<Frequency> {
        let p = self.normalized();
        match (p.length, p.unit) {
            (1, TimeUnit::Years) => Ok(Frequency::Annual),
            (6, TimeUnit::Months) => Ok(Frequency::Semiannual),
            (3, TimeUnit::Months) => Ok(Frequency::Quarterly),
            (2, TimeUnit::Months) => Ok(Frequency::Bimonthly),
            (1, TimeUnit::Months) => Ok(Frequency::Monthly),
            (7, TimeUnit::Days) => Ok(Frequency::Weekly),
            (1, TimeUnit::Days) => Ok(Frequency::Daily),
            _ => Err(Error::InvalidArgument(format!(
                "no frequency corresponds to {self}"
            ))),
        }
    }

    /// Approximate length in years (months / 12, days / 365).
    pub fn year_fraction(&self) -> Real {
        let n = Real::from(self.length);
        match self.unit {
            TimeUnit::Days => n / 365.0,
            TimeUnit::Weeks => 7.0 * n / 365.0,
            TimeUnit::Months => n / 12.0,
            TimeUnit::Years => n,
        }
    }

    /// Normalise the period by converting weeks to days and whole-year
    /// month counts to years.
    pub fn normalized(self) -> Self {
        let (length, unit) = match self.unit {
            TimeUnit::Weeks => (self.length * 7, TimeUnit::Days),
            TimeUnit::Months if self.length % 12 == 0 => (self.length / 12, TimeUnit::Years),
            _ => (self.length, self.unit),
        };
        Period { length, unit }
    }
}

impl std::ops::Mul<i32> for Period {
    type Output = Self;
    fn mul(self, rhs: i32) -> Self {
        Period {
            length: self.length * rhs,
            unit: self.unit,
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.length, self.unit.suffix())
    }
}

impl std::fmt::Debug for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Period({self})")
    }
}
