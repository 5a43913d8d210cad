//! `IndexSwap`: swap-rate index.

use ir_core::{errors::Result, Real};
use ir_currencies::Currency;
use ir_time::{Frequency, Period};

use crate::ibor_index::IborIndex;
use crate::index::Index;

/// A swap-rate index: the par rate of a fixed-versus-Ibor swap of a given
/// tenor, as referenced by CMS coupons.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndexSwap {
    name: String,
    fixed_leg_period: Period,
    fixed_leg_frequency: Frequency,
    tenor: Period,
    ibor_index: IborIndex,
}

impl IndexSwap {
    /// Create a new swap index.
    ///
    /// # Errors
    /// Returns an error if the fixed-leg period is not a regular frequency.
    pub fn new(
        name: impl Into<String>,
        fixed_leg_period: Period,
        tenor: Period,
        ibor_index: IborIndex,
    ) -> Result<Self> {
        let fixed_leg_frequency = fixed_leg_period.frequency()?;
        ir_core::ensure!(tenor.length > 0, "swap index tenor must be positive");
        Ok(Self {
            name: name.into(),
            fixed_leg_period,
            fixed_leg_frequency,
            tenor,
            ibor_index,
        })
    }

    /// Period between fixed-leg payments.
    pub fn fixed_leg_period(&self) -> Period {
        self.fixed_leg_period
    }

    /// Fixed-leg payments per year.
    pub fn fixed_leg_payments_per_year(&self) -> u32 {
        self.fixed_leg_frequency.periods_per_year()
    }

    /// Tenor of the underlying swap.
    pub fn tenor(&self) -> Period {
        self.tenor
    }

    /// Tenor of the underlying swap in years.
    pub fn tenor_years(&self) -> Real {
        self.tenor.year_fraction()
    }

    /// The floating-leg index of the underlying swap.
    pub fn ibor_index(&self) -> &IborIndex {
        &self.ibor_index
    }
}

impl Index for IndexSwap {
    fn name(&self) -> &str {
        &self.name
    }

    fn currency(&self) -> Currency {
        self.ibor_index.currency()
    }
}
