//! Coupons whose notional is set in a reference currency and converted at
//! an FX fixing.

use ir_core::{
    errors::{Error, Result},
    Rate, Real, Spread, Time,
};
use ir_currencies::Currency;

use crate::coupon::{Coupon, CouponData, FloatingCoupon, IborFixing};
use crate::validation;

/// The FX fixing converting a reference-currency notional into the payment
/// currency.
#[derive(Debug, Clone, PartialEq)]
pub struct FxReset {
    reference_currency: Currency,
    fx_fixing_time: Time,
    fx_delivery_time: Time,
}

impl FxReset {
    /// Create an FX reset.
    ///
    /// # Errors
    /// Returns an error unless `0 ≤ fx_fixing_time ≤ fx_delivery_time` and
    /// the reference currency is set.
    pub fn new(
        reference_currency: Currency,
        fx_fixing_time: Time,
        fx_delivery_time: Time,
    ) -> Result<Self> {
        ir_core::ensure!(!reference_currency.is_empty(), "FX reset needs a reference currency");
        validation::non_negative("FX fixing time", fx_fixing_time)?;
        ir_core::ensure!(
            fx_delivery_time >= fx_fixing_time,
            "FX delivery time {fx_delivery_time} is before FX fixing time {fx_fixing_time}"
        );
        Ok(Self {
            reference_currency,
            fx_fixing_time,
            fx_delivery_time,
        })
    }

    /// Currency of the notional.
    pub fn reference_currency(&self) -> Currency {
        self.reference_currency
    }

    /// FX fixing time.
    pub fn fx_fixing_time(&self) -> Time {
        self.fx_fixing_time
    }

    /// Delivery time of the fixed FX rate.
    pub fn fx_delivery_time(&self) -> Time {
        self.fx_delivery_time
    }
}

impl_structural_hash!(FxReset {
    hash: [reference_currency],
    real: [fx_fixing_time, fx_delivery_time]
});

fn unsupported(kind: &str) -> Error {
    Error::UnsupportedOperation(format!(
        "{kind}: notional is set in the reference currency and cannot be changed"
    ))
}

// ── CouponFixedFxReset ────────────────────────────────────────────────────────

/// Pays `N_ref · FX(t_fix) · r · δ` in the payment currency.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponFixedFxReset {
    coupon: CouponData,
    fixed_rate: Rate,
    fx_reset: FxReset,
}

impl CouponFixedFxReset {
    /// Create the coupon. The notional of `coupon` is in the reference
    /// currency.
    pub fn new(coupon: CouponData, fixed_rate: Rate, fx_reset: FxReset) -> Result<Self> {
        Ok(Self {
            coupon,
            fixed_rate,
            fx_reset,
        })
    }

    /// The fixed rate.
    pub fn fixed_rate(&self) -> Rate {
        self.fixed_rate
    }

    /// The FX reset.
    pub fn fx_reset(&self) -> &FxReset {
        &self.fx_reset
    }

    /// Paid amount in the reference currency, `N · r · δ`.
    pub fn paid_amount_reference(&self) -> Real {
        self.coupon.notional() * self.fixed_rate * self.coupon.payment_year_fraction()
    }
}

impl Coupon for CouponFixedFxReset {
    fn coupon_data(&self) -> &CouponData {
        &self.coupon
    }

    fn with_notional(&self, _notional: Real) -> Result<Self> {
        Err(unsupported("CouponFixedFxReset"))
    }
}

impl_structural_hash!(CouponFixedFxReset {
    hash: [coupon, fx_reset],
    real: [fixed_rate]
});

// ── CouponIborFxReset ─────────────────────────────────────────────────────────

/// Pays `N_ref · FX(t_fix) · (F + s) · δ` in the payment currency.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponIborFxReset {
    coupon: CouponData,
    fixing: IborFixing,
    spread: Spread,
    fx_reset: FxReset,
}

impl CouponIborFxReset {
    /// Create the coupon.
    ///
    /// # Errors
    /// Returns an error if the index currency differs from the payment
    /// currency.
    pub fn new(
        coupon: CouponData,
        fixing: IborFixing,
        spread: Spread,
        fx_reset: FxReset,
    ) -> Result<Self> {
        fixing.check_currency(&coupon)?;
        Ok(Self {
            coupon,
            fixing,
            spread,
            fx_reset,
        })
    }

    /// The fixing description.
    pub fn fixing(&self) -> &IborFixing {
        &self.fixing
    }

    /// The spread.
    pub fn spread(&self) -> Spread {
        self.spread
    }

    /// The FX reset.
    pub fn fx_reset(&self) -> &FxReset {
        &self.fx_reset
    }
}

impl Coupon for CouponIborFxReset {
    fn coupon_data(&self) -> &CouponData {
        &self.coupon
    }

    fn with_notional(&self, _notional: Real) -> Result<Self> {
        Err(unsupported("CouponIborFxReset"))
    }
}

impl FloatingCoupon for CouponIborFxReset {
    fn fixing_time(&self) -> Time {
        self.fixing.fixing_time()
    }
}

impl_structural_hash!(CouponIborFxReset {
    hash: [coupon, fixing, fx_reset],
    real: [spread]
});

impl_coupon_cash_flow!(CouponFixedFxReset, CouponIborFxReset);
