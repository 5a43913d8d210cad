//! `PriceIndexCurve`: projected price-index levels.

use ir_core::{errors::Result, Real, Time};
use ir_math::{Interpolation1D, LinearInterpolation};

/// Price-index levels linearly interpolated on reference times.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceIndexCurve {
    name: String,
    interpolation: LinearInterpolation,
}

impl PriceIndexCurve {
    /// Build a curve from reference times and index levels.
    ///
    /// # Errors
    /// Returns an error if a level is not strictly positive or the nodes are
    /// inconsistent.
    pub fn new(name: impl Into<String>, times: &[Time], levels: &[Real]) -> Result<Self> {
        ir_core::ensure!(
            levels.iter().all(|&v| v > 0.0),
            "price index levels must be positive"
        );
        Ok(Self {
            name: name.into(),
            interpolation: LinearInterpolation::new(times, levels)?,
        })
    }

    /// Curve name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Projected index level at reference time `t`.
    pub fn price_index(&self, t: Time) -> Real {
        self.interpolation.value(t)
    }
}
