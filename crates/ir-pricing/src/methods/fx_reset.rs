//! Coupons with a notional in a reference currency, converted at an FX
//! fixing before payment.
//!
//! The converted amount uses the forward FX rate for the delivery time,
//! `FX(ref → pay) · DF_ref(t_d) / DF_pay(t_d)`, so it depends on both
//! discounting curves.

use ir_cashflows::{CashFlow, Coupon, CouponFixedFxReset, CouponIborFxReset, FxReset};
use ir_core::{errors::Result, Rate, Real};
use ir_currencies::Currency;
use ir_termstructures::MulticurveProvider;

use super::ibor::{fixing_forward, fixing_point};
use super::{impl_discounting_method, ParRateMethod, ProjectedAmount};
use crate::sensitivity::MulticurveSensitivity;

/// Forward FX rate from the reference to the payment currency at delivery.
fn forward_fx(
    reset: &FxReset,
    payment_currency: &Currency,
    multicurve: &dyn MulticurveProvider,
) -> Result<Real> {
    let reference = reset.reference_currency();
    let delivery = reset.fx_delivery_time();
    let spot = multicurve.fx_rate(&reference, payment_currency)?;
    Ok(spot * multicurve.discount_factor(&reference, delivery)?
        / multicurve.discount_factor(payment_currency, delivery)?)
}

/// Points of `amount = reference_amount · forward_fx` on both discounting
/// curves at delivery.
fn forward_fx_points(
    reset: &FxReset,
    payment_currency: &Currency,
    multicurve: &dyn MulticurveProvider,
    amount: Real,
) -> Result<MulticurveSensitivity> {
    let delivery = reset.fx_delivery_time();
    let reference_curve = multicurve.discount_curve_name(&reset.reference_currency())?;
    let payment_curve = multicurve.discount_curve_name(payment_currency)?;
    let reference = MulticurveSensitivity::of_yield_discounting(
        reference_curve,
        vec![(delivery, -delivery * amount)],
    );
    let payment = MulticurveSensitivity::of_yield_discounting(
        payment_curve,
        vec![(delivery, delivery * amount)],
    );
    Ok(reference.plus(&payment))
}

impl ProjectedAmount for CouponFixedFxReset {
    fn projected_amount(&self, multicurve: &dyn MulticurveProvider) -> Result<Real> {
        let fx = forward_fx(self.fx_reset(), &self.currency(), multicurve)?;
        Ok(self.paid_amount_reference() * fx)
    }

    fn projected_amount_sensitivity(
        &self,
        multicurve: &dyn MulticurveProvider,
    ) -> Result<(Real, MulticurveSensitivity)> {
        let amount = self.projected_amount(multicurve)?;
        let points = forward_fx_points(self.fx_reset(), &self.currency(), multicurve, amount)?;
        Ok((amount, points))
    }
}

impl ParRateMethod for CouponFixedFxReset {
    fn par_rate(&self, _multicurve: &dyn MulticurveProvider) -> Result<Rate> {
        Ok(self.fixed_rate())
    }
}

impl ProjectedAmount for CouponIborFxReset {
    fn projected_amount(&self, multicurve: &dyn MulticurveProvider) -> Result<Real> {
        let unit = self.notional() * self.payment_year_fraction();
        let reference_amount = unit * (fixing_forward(self.fixing(), multicurve)? + self.spread());
        Ok(reference_amount * forward_fx(self.fx_reset(), &self.currency(), multicurve)?)
    }

    fn projected_amount_sensitivity(
        &self,
        multicurve: &dyn MulticurveProvider,
    ) -> Result<(Real, MulticurveSensitivity)> {
        let unit = self.notional() * self.payment_year_fraction();
        let fx = forward_fx(self.fx_reset(), &self.currency(), multicurve)?;
        let amount = unit * (fixing_forward(self.fixing(), multicurve)? + self.spread()) * fx;
        let sensitivity = forward_fx_points(self.fx_reset(), &self.currency(), multicurve, amount)?
            .plus(&fixing_point(self.fixing(), multicurve, unit * fx)?);
        Ok((amount, sensitivity))
    }
}

impl ParRateMethod for CouponIborFxReset {
    fn par_rate(&self, multicurve: &dyn MulticurveProvider) -> Result<Rate> {
        fixing_forward(self.fixing(), multicurve)
    }
}

impl_discounting_method!(CouponFixedFxReset, CouponIborFxReset);
