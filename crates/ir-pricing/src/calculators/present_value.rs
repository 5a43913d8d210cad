//! Present value by discounting.

use ir_cashflows::{Annuity, CapFloorCMS, CapFloorIbor, CashFlow, InstrumentDerivative, Swap};
use ir_core::errors::Result;
use ir_currencies::MultipleCurrencyAmount;
use ir_termstructures::MulticurveProvider;

use crate::methods::DiscountingMethod;

/// Present value of every linear instrument from the discounting and
/// forward curves. Options are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresentValueDiscountingCalculator;

impl PresentValueDiscountingCalculator {
    /// Present value of one instrument.
    pub fn compute<T>(
        &self,
        instrument: &T,
        multicurve: &dyn MulticurveProvider,
    ) -> Result<MultipleCurrencyAmount>
    where
        T: InstrumentDerivative + ?Sized,
    {
        instrument.accept_with(self, multicurve)
    }

    /// Sum of the present values of the payments of an annuity.
    pub fn annuity<P>(
        &self,
        annuity: &Annuity<P>,
        multicurve: &dyn MulticurveProvider,
    ) -> Result<MultipleCurrencyAmount>
    where
        P: InstrumentDerivative + CashFlow,
    {
        annuity
            .payments()
            .iter()
            .try_fold(MultipleCurrencyAmount::new(), |pv, p| {
                Ok(pv.plus(&self.compute(p, multicurve)?))
            })
    }

    /// Present value of both legs of a swap.
    pub fn swap<P1, P2>(
        &self,
        swap: &Swap<P1, P2>,
        multicurve: &dyn MulticurveProvider,
    ) -> Result<MultipleCurrencyAmount>
    where
        P1: InstrumentDerivative + CashFlow,
        P2: InstrumentDerivative + CashFlow,
    {
        Ok(self
            .annuity(swap.first_leg(), multicurve)?
            .plus(&self.annuity(swap.second_leg(), multicurve)?))
    }
}

with_rate_coupons!(impl_calculator! {
    ['a] PresentValueDiscountingCalculator, dyn MulticurveProvider + 'a => MultipleCurrencyAmount;
    rejected {
        visit_cap_floor_ibor(CapFloorIbor),
        visit_cap_floor_cms(CapFloorCMS),
    }
    custom {}
    priced |_s, i, d| i.present_value(d);
    visit_payment_fixed(::ir_cashflows::PaymentFixed),
    visit_coupon_cms(::ir_cashflows::CouponCMS),
    visit_coupon_inflation_zero_coupon_monthly(::ir_cashflows::CouponInflationZeroCouponMonthly),
});
