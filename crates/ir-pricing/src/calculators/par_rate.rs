//! Par rates of coupons.

use ir_cashflows::{
    CapFloorCMS, CapFloorIbor, CouponInflationZeroCouponMonthly, InstrumentDerivative, PaymentFixed,
};
use ir_core::{errors::Result, Rate};
use ir_termstructures::MulticurveProvider;

use crate::methods::ParRateMethod;

/// The rate a fixed coupon with the same dates and notional would pay to
/// have the same present value.
///
/// Fixed payments and the inflation coupon carry no rate; options are not
/// linear in one. All of them are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParRateDiscountingCalculator;

impl ParRateDiscountingCalculator {
    /// Par rate of one instrument.
    pub fn compute<T>(&self, instrument: &T, multicurve: &dyn MulticurveProvider) -> Result<Rate>
    where
        T: InstrumentDerivative + ?Sized,
    {
        instrument.accept_with(self, multicurve)
    }
}

with_rate_coupons!(impl_calculator! {
    ['a] ParRateDiscountingCalculator, dyn MulticurveProvider + 'a => Rate;
    rejected {
        visit_payment_fixed(PaymentFixed),
        visit_coupon_inflation_zero_coupon_monthly(CouponInflationZeroCouponMonthly),
        visit_cap_floor_ibor(CapFloorIbor),
        visit_cap_floor_cms(CapFloorCMS),
    }
    custom {}
    priced |_s, i, d| i.par_rate(d);
    visit_coupon_cms(::ir_cashflows::CouponCMS),
});
