//! `IndexPrice`: consumer price index.

use ir_currencies::Currency;

use crate::index::Index;

/// A price index (e.g. EU HICP ex-tobacco) referenced by inflation coupons.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndexPrice {
    name: String,
    currency: Currency,
}

impl IndexPrice {
    /// Create a new price index.
    pub fn new(name: impl Into<String>, currency: Currency) -> Self {
        Self {
            name: name.into(),
            currency,
        }
    }
}

impl Index for IndexPrice {
    fn name(&self) -> &str {
        &self.name
    }

    fn currency(&self) -> Currency {
        self.currency
    }
}
