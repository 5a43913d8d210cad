//! Ibor coupons averaging several fixings, possibly compounded.

use ir_cashflows::{
    AveragingFixings, Coupon, CouponIborAverageCompounding, CouponIborAverageFixingDates,
    CouponIborAverageFlatCompoundingSpread,
};
use ir_core::{errors::Result, Rate, Real};
use ir_indexes::IborIndex;
use ir_termstructures::MulticurveProvider;

use super::compounding::{compounded, flat_compounded, rate_from_amount};
use super::{impl_discounting_method, ForwardIndex, ParRateMethod, ProjectedAmount};
use crate::sensitivity::MulticurveSensitivity;

/// `Σ wⱼ·Fⱼ` over one averaging layout.
fn average(
    index: &IborIndex,
    fixings: &AveragingFixings,
    multicurve: &dyn MulticurveProvider,
) -> Result<Rate> {
    let mut rate = 0.0;
    for (weight, _, start, end, accrual) in fixings.iter() {
        rate += weight * index.forward_rate(multicurve, start, end, accrual)?;
    }
    Ok(rate)
}

/// Forward points `factor·wⱼ` for one averaging layout.
fn average_points(
    index: &IborIndex,
    fixings: &AveragingFixings,
    multicurve: &dyn MulticurveProvider,
    factor: Real,
) -> Result<MulticurveSensitivity> {
    let mut sensitivity = MulticurveSensitivity::new();
    for (weight, _, start, end, accrual) in fixings.iter() {
        sensitivity = sensitivity.plus(&index.forward_point(
            multicurve,
            start,
            end,
            accrual,
            factor * weight,
        )?);
    }
    Ok(sensitivity)
}

// ── Simple average ────────────────────────────────────────────────────────────

impl ProjectedAmount for CouponIborAverageFixingDates {
    fn projected_amount(&self, multicurve: &dyn MulticurveProvider) -> Result<Real> {
        let unit = self.notional() * self.payment_year_fraction();
        Ok(unit * average(self.index(), self.fixings(), multicurve)? + self.amount_accrued())
    }

    fn projected_amount_sensitivity(
        &self,
        multicurve: &dyn MulticurveProvider,
    ) -> Result<(Real, MulticurveSensitivity)> {
        let unit = self.notional() * self.payment_year_fraction();
        Ok((
            self.projected_amount(multicurve)?,
            average_points(self.index(), self.fixings(), multicurve, unit)?,
        ))
    }
}

// ── Averaged compounding ──────────────────────────────────────────────────────

/// Averaged rate of every sub-period, `r_0 = rate_fixed` included.
fn sub_period_rates(
    index: &IborIndex,
    fixings: &[AveragingFixings],
    rate_fixed: Rate,
    multicurve: &dyn MulticurveProvider,
) -> Result<Vec<Rate>> {
    fixings
        .iter()
        .enumerate()
        .map(|(k, layout)| {
            let fixed = if k == 0 { rate_fixed } else { 0.0 };
            Ok(fixed + average(index, layout, multicurve)?)
        })
        .collect()
}

/// Chain `∂amount/∂R_k` through the averaging weights.
fn chained_points(
    index: &IborIndex,
    fixings: &[AveragingFixings],
    derivatives: &[Real],
    multicurve: &dyn MulticurveProvider,
) -> Result<MulticurveSensitivity> {
    let mut sensitivity = MulticurveSensitivity::new();
    for (layout, &d) in fixings.iter().zip(derivatives) {
        sensitivity = sensitivity.plus(&average_points(index, layout, multicurve, d)?);
    }
    Ok(sensitivity)
}

impl ProjectedAmount for CouponIborAverageCompounding {
    fn projected_amount(&self, multicurve: &dyn MulticurveProvider) -> Result<Real> {
        Ok(self.projected_amount_sensitivity(multicurve)?.0)
    }

    fn projected_amount_sensitivity(
        &self,
        multicurve: &dyn MulticurveProvider,
    ) -> Result<(Real, MulticurveSensitivity)> {
        let rates = sub_period_rates(self.index(), self.fixings(), self.rate_fixed(), multicurve)?;
        let (amount, derivatives) = compounded(
            self.payment_accrual_factors(),
            &rates,
            self.notional(),
            self.notional_accrued(),
            0.0,
        );
        let sensitivity = chained_points(self.index(), self.fixings(), &derivatives, multicurve)?;
        Ok((amount, sensitivity))
    }
}

impl ProjectedAmount for CouponIborAverageFlatCompoundingSpread {
    fn projected_amount(&self, multicurve: &dyn MulticurveProvider) -> Result<Real> {
        Ok(self.projected_amount_sensitivity(multicurve)?.0)
    }

    fn projected_amount_sensitivity(
        &self,
        multicurve: &dyn MulticurveProvider,
    ) -> Result<(Real, MulticurveSensitivity)> {
        let rates = sub_period_rates(self.index(), self.fixings(), self.rate_fixed(), multicurve)?;
        let (amount, derivatives) = flat_compounded(
            self.payment_accrual_factors(),
            &rates,
            self.notional(),
            self.amount_accrued(),
            self.spread(),
        );
        let sensitivity = chained_points(self.index(), self.fixings(), &derivatives, multicurve)?;
        Ok((amount, sensitivity))
    }
}

impl_discounting_method!(
    CouponIborAverageFixingDates,
    CouponIborAverageCompounding,
    CouponIborAverageFlatCompoundingSpread,
);

macro_rules! impl_rate_from_amount {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ParRateMethod for $ty {
                fn par_rate(&self, multicurve: &dyn MulticurveProvider) -> Result<Rate> {
                    rate_from_amount(self, self.projected_amount(multicurve)?)
                }
            }
        )*
    };
}

impl_rate_from_amount!(
    CouponIborAverageFixingDates,
    CouponIborAverageCompounding,
    CouponIborAverageFlatCompoundingSpread,
);
