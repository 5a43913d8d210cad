//! Zero-coupon inflation coupons with monthly index reference.

use ir_core::{errors::Result, Real, Time};
use ir_indexes::{Index, IndexPrice};

use crate::coupon::{Coupon, CouponData};
use crate::validation;

/// Pays `N · (I(t_ref)/I_start − 1)`, plus `N` when the notional is paid.
///
/// `I(t_ref)` is the price index for the reference month preceding
/// payment, observed at `reference_end_time`.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponInflationZeroCouponMonthly {
    coupon: CouponData,
    price_index: IndexPrice,
    index_start_value: Real,
    reference_end_time: Time,
    pay_notional: bool,
}

impl CouponInflationZeroCouponMonthly {
    /// Create the coupon.
    ///
    /// # Errors
    /// Returns an error if the start index value is not positive, if the
    /// reference time is negative, or on a currency mismatch.
    pub fn new(
        coupon: CouponData,
        price_index: IndexPrice,
        index_start_value: Real,
        reference_end_time: Time,
        pay_notional: bool,
    ) -> Result<Self> {
        validation::same_currency(&coupon.currency(), &price_index.currency())?;
        ir_core::ensure!(
            index_start_value > 0.0,
            "index start value must be positive, got {index_start_value}"
        );
        validation::non_negative("reference end time", reference_end_time)?;
        Ok(Self {
            coupon,
            price_index,
            index_start_value,
            reference_end_time,
            pay_notional,
        })
    }

    /// The price index.
    pub fn price_index(&self) -> &IndexPrice {
        &self.price_index
    }

    /// Index level at the start of the coupon.
    pub fn index_start_value(&self) -> Real {
        self.index_start_value
    }

    /// Time at which the end index level is referenced.
    pub fn reference_end_time(&self) -> Time {
        self.reference_end_time
    }

    /// Whether the notional is paid with the coupon.
    pub fn pay_notional(&self) -> bool {
        self.pay_notional
    }

    /// Amount paid for a given end index level.
    pub fn amount(&self, index_end_value: Real) -> Real {
        let notional_part = if self.pay_notional { 1.0 } else { 0.0 };
        self.coupon.notional() * (index_end_value / self.index_start_value - 1.0 + notional_part)
    }
}

impl Coupon for CouponInflationZeroCouponMonthly {
    fn coupon_data(&self) -> &CouponData {
        &self.coupon
    }

    fn with_notional(&self, notional: Real) -> Result<Self> {
        Self::new(
            self.coupon.with_notional(notional),
            self.price_index.clone(),
            self.index_start_value,
            self.reference_end_time,
            self.pay_notional,
        )
    }
}

impl_coupon_cash_flow!(CouponInflationZeroCouponMonthly);
impl_structural_hash!(CouponInflationZeroCouponMonthly {
    hash: [coupon, price_index, pay_notional],
    real: [index_start_value, reference_end_time]
});
