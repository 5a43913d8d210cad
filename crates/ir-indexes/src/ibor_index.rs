//! `IborIndex`: interbank offered-rate index.

use std::fmt;

use ir_currencies::Currency;
use ir_time::Period;

use crate::index::{Index, IndexDeposit};

/// An interbank offered-rate index (e.g. Euribor 6M).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IborIndex {
    name: String,
    currency: Currency,
    tenor: Period,
    spot_lag: u32,
    end_of_month: bool,
}

impl IborIndex {
    /// Create a new Ibor index.
    pub fn new(
        name: impl Into<String>,
        currency: Currency,
        tenor: Period,
        spot_lag: u32,
        end_of_month: bool,
    ) -> Self {
        Self {
            name: name.into(),
            currency,
            tenor,
            spot_lag,
            end_of_month,
        }
    }

    /// Deposit tenor.
    pub fn tenor(&self) -> Period {
        self.tenor
    }

    /// Business days between fixing and deposit start.
    pub fn spot_lag(&self) -> u32 {
        self.spot_lag
    }

    /// Whether deposit end dates follow the end-of-month rule.
    pub fn is_end_of_month(&self) -> bool {
        self.end_of_month
    }
}

impl Index for IborIndex {
    fn name(&self) -> &str {
        &self.name
    }

    fn currency(&self) -> Currency {
        self.currency
    }
}

impl IndexDeposit for IborIndex {}

impl fmt::Display for IborIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
