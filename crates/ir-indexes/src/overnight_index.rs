//! `IndexON`: overnight rate index.

use std::fmt;

use ir_currencies::Currency;

use crate::index::{Index, IndexDeposit};

/// An overnight index (e.g. ESTR, SOFR).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndexON {
    name: String,
    currency: Currency,
    publication_lag: u32,
}

impl IndexON {
    /// Create a new overnight index.
    pub fn new(name: impl Into<String>, currency: Currency, publication_lag: u32) -> Self {
        Self {
            name: name.into(),
            currency,
            publication_lag,
        }
    }

    /// Business days between the rate date and its publication.
    pub fn publication_lag(&self) -> u32 {
        self.publication_lag
    }
}

impl Index for IndexON {
    fn name(&self) -> &str {
        &self.name
    }

    fn currency(&self) -> Currency {
        self.currency
    }
}

impl IndexDeposit for IndexON {}

impl fmt::Display for IndexON {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
