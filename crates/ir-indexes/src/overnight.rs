//! Concrete overnight index factory functions.

use ir_currencies::currencies::{BRL, EUR, GBP, USD};

use crate::overnight_index::IndexON;

/// EONIA (publication lag 0).
pub fn eonia() -> IndexON {
    IndexON::new("EUR-EONIA", EUR, 0)
}

/// €STR (publication lag 1).
pub fn estr() -> IndexON {
    IndexON::new("EUR-ESTR", EUR, 1)
}

/// SOFR (publication lag 1).
pub fn sofr() -> IndexON {
    IndexON::new("USD-SOFR", USD, 1)
}

/// SONIA (publication lag 0).
pub fn sonia() -> IndexON {
    IndexON::new("GBP-SONIA", GBP, 0)
}

/// Brazilian CDI (publication lag 0), compounded on a business-day basis.
pub fn cdi() -> IndexON {
    IndexON::new("BRL-CDI", BRL, 0)
}
