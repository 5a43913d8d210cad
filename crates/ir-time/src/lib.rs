//! # ir-time
//!
//! Tenors and frequencies.
//!
//! Instruments in this workspace live in time space: every date has already
//! been converted to a year fraction from the valuation date. What remains
//! of calendar arithmetic is the description of index tenors (`3M`, `10Y`)
//! and of swap fixed-leg frequencies, which this crate provides.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Payment frequencies.
pub mod frequency;

/// Tenors made of a length and a unit.
pub mod period;

/// Units of time used by [`Period`].
pub mod time_unit;

pub use frequency::Frequency;
pub use period::Period;
pub use time_unit::TimeUnit;
