//! Concrete Ibor index factory functions.

use ir_currencies::currencies::{EUR, GBP, USD};
use ir_time::Period;

use crate::ibor_index::IborIndex;

/// Euribor with the given tenor (spot lag 2, end-of-month).
pub fn euribor(tenor: Period) -> IborIndex {
    IborIndex::new(format!("EUR-Euribor-{tenor}"), EUR, tenor, 2, true)
}

/// USD LIBOR with the given tenor (spot lag 2, end-of-month).
pub fn usd_libor(tenor: Period) -> IborIndex {
    IborIndex::new(format!("USD-LIBOR-{tenor}"), USD, tenor, 2, true)
}

/// GBP LIBOR with the given tenor (spot lag 0, end-of-month).
pub fn gbp_libor(tenor: Period) -> IborIndex {
    IborIndex::new(format!("GBP-LIBOR-{tenor}"), GBP, tenor, 0, true)
}
