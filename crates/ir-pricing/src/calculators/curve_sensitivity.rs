//! Point sensitivities of the discounting present value.

use ir_cashflows::{CapFloorCMS, CapFloorIbor, InstrumentDerivative};
use ir_core::errors::Result;
use ir_termstructures::MulticurveProvider;

use crate::methods::DiscountingMethod;
use crate::sensitivity::MultipleCurrencyMulticurveSensitivity;

/// Sensitivities of [`PresentValueDiscountingCalculator`] to the
/// discount factors and forwards, per currency.
///
/// [`PresentValueDiscountingCalculator`]: super::PresentValueDiscountingCalculator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresentValueCurveSensitivityDiscountingCalculator;

impl PresentValueCurveSensitivityDiscountingCalculator {
    /// Point sensitivities of one instrument.
    pub fn compute<T>(
        &self,
        instrument: &T,
        multicurve: &dyn MulticurveProvider,
    ) -> Result<MultipleCurrencyMulticurveSensitivity>
    where
        T: InstrumentDerivative + ?Sized,
    {
        instrument.accept_with(self, multicurve)
    }
}

with_rate_coupons!(impl_calculator! {
    ['a] PresentValueCurveSensitivityDiscountingCalculator, dyn MulticurveProvider + 'a
        => MultipleCurrencyMulticurveSensitivity;
    rejected {
        visit_cap_floor_ibor(CapFloorIbor),
        visit_cap_floor_cms(CapFloorCMS),
    }
    custom {}
    priced |_s, i, d| i.present_value_curve_sensitivity(d);
    visit_payment_fixed(::ir_cashflows::PaymentFixed),
    visit_coupon_cms(::ir_cashflows::CouponCMS),
    visit_coupon_inflation_zero_coupon_monthly(::ir_cashflows::CouponInflationZeroCouponMonthly),
});
