//! # ir-indexes
//!
//! Rate and price index definitions referenced by coupons.
//!
//! Indexes are small immutable values compared structurally; a coupon owns
//! its index by value and providers key their forward curves on it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Index` and `IndexDeposit` traits.
pub mod index;

/// `IborIndex`: term deposit indexes (Euribor, LIBOR, ...).
pub mod ibor_index;

/// `IndexON`: overnight indexes (ESTR, SOFR, SONIA, ...).
pub mod overnight_index;

/// `IndexSwap`: swap-rate indexes referenced by CMS coupons.
pub mod swap_index;

/// `IndexPrice`: consumer price indexes.
pub mod price_index;

/// Concrete Ibor index definitions.
pub mod ibor;

/// Concrete overnight index definitions.
pub mod overnight;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use ibor::{euribor, gbp_libor, usd_libor};
pub use ibor_index::IborIndex;
pub use index::{Index, IndexDeposit};
pub use overnight::{cdi, eonia, estr, sofr, sonia};
pub use overnight_index::IndexON;
pub use price_index::IndexPrice;
pub use swap_index::IndexSwap;
