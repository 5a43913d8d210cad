//! Construction-time checks shared by the instrument constructors.

use ir_core::{ensure, errors::Result, Real, Time};
use ir_currencies::Currency;

pub(crate) fn non_negative(name: &str, value: Real) -> Result<()> {
    ensure!(value >= 0.0, "{name} must be non-negative, got {value}");
    Ok(())
}

pub(crate) fn all_non_negative(name: &str, values: &[Real]) -> Result<()> {
    for (i, &v) in values.iter().enumerate() {
        ensure!(v >= 0.0, "{name}[{i}] must be non-negative, got {v}");
    }
    Ok(())
}

pub(crate) fn fixing_period(fixing_time: Time, start: Time, end: Time) -> Result<()> {
    non_negative("fixing time", fixing_time)?;
    ensure!(
        start >= fixing_time,
        "fixing period start {start} is before fixing time {fixing_time}"
    );
    ensure!(
        end >= start,
        "fixing period end {end} is before fixing period start {start}"
    );
    Ok(())
}

pub(crate) fn same_currency(coupon: &Currency, index: &Currency) -> Result<()> {
    ensure!(
        coupon == index,
        "index currency {index} differs from coupon currency {coupon}"
    );
    Ok(())
}

pub(crate) fn same_length(name: &str, expected: usize, actual: usize) -> Result<()> {
    ensure!(
        expected == actual,
        "{name} has {actual} elements, expected {expected}"
    );
    Ok(())
}

pub(crate) fn not_empty(name: &str, len: usize) -> Result<()> {
    ensure!(len > 0, "{name} must not be empty");
    Ok(())
}

// Ratio to rescale notional-derived amounts; a zero old notional maps to zero.
pub(crate) fn notional_ratio(old: Real, new: Real) -> Real {
    if old == 0.0 {
        0.0
    } else {
        new / old
    }
}

// Accrued notional for a new notional: the accrued compounding ratio is kept,
// and is taken as one when the old notional is zero.
pub(crate) fn rescaled_notional_accrued(notional_accrued: Real, old: Real, new: Real) -> Real {
    if old == 0.0 {
        new
    } else {
        notional_accrued * new / old
    }
}
