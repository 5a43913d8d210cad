//! Ibor coupons compounded over sub-periods.

use ir_cashflows::{
    CompoundingPeriods, Coupon, CouponIborCompounding, CouponIborCompoundingFlatSpread,
    CouponIborCompoundingSimpleSpread, CouponIborCompoundingSpread,
};
use ir_core::{
    errors::{Error, Result},
    Rate, Real, Spread,
};
use ir_termstructures::MulticurveProvider;

use super::{impl_discounting_method, ForwardIndex, ParRateMethod, ProjectedAmount};
use crate::sensitivity::MulticurveSensitivity;

/// Forwards of every sub-period.
fn forwards(
    periods: &CompoundingPeriods,
    multicurve: &dyn MulticurveProvider,
) -> Result<Vec<Rate>> {
    (0..periods.len())
        .map(|i| {
            periods.index().forward_rate(
                multicurve,
                periods.fixing_period_start_times()[i],
                periods.fixing_period_end_times()[i],
                periods.fixing_period_accrual_factors()[i],
            )
        })
        .collect()
}

/// Forward points with `values[i]` on sub-period `i`.
fn points(
    periods: &CompoundingPeriods,
    multicurve: &dyn MulticurveProvider,
    values: &[Real],
) -> Result<MulticurveSensitivity> {
    let mut sensitivity = MulticurveSensitivity::new();
    for (i, &value) in values.iter().enumerate() {
        sensitivity = sensitivity.plus(&periods.index().forward_point(
            multicurve,
            periods.fixing_period_start_times()[i],
            periods.fixing_period_end_times()[i],
            periods.fixing_period_accrual_factors()[i],
            value,
        )?);
    }
    Ok(sensitivity)
}

/// `notional_accrued · Π(1 + δᵢ·(Fᵢ + s)) − N` and its derivatives.
pub(crate) fn compounded(
    payment_accrual_factors: &[Real],
    rates: &[Rate],
    notional: Real,
    notional_accrued: Real,
    spread: Spread,
) -> (Real, Vec<Real>) {
    let factors: Vec<Real> = payment_accrual_factors
        .iter()
        .zip(rates)
        .map(|(delta, f)| 1.0 + delta * (f + spread))
        .collect();
    let product = notional_accrued * factors.iter().product::<Real>();
    let derivatives = payment_accrual_factors
        .iter()
        .zip(&factors)
        .map(|(delta, factor)| product * delta / factor)
        .collect();
    (product - notional, derivatives)
}

/// Flat compounding from `accumulated`: each sub-period adds
/// `cpa·Fᵢ·δᵢ + N·(Fᵢ + s)·δᵢ`.
pub(crate) fn flat_compounded(
    payment_accrual_factors: &[Real],
    rates: &[Rate],
    notional: Real,
    accumulated: Real,
    spread: Spread,
) -> (Real, Vec<Real>) {
    let n = rates.len();
    let mut cpa = Vec::with_capacity(n + 1);
    cpa.push(accumulated);
    for i in 0..n {
        let delta = payment_accrual_factors[i];
        cpa.push(cpa[i] * (1.0 + rates[i] * delta) + notional * (rates[i] + spread) * delta);
    }
    let mut derivatives = vec![0.0; n];
    let mut tail = 1.0;
    for i in (0..n).rev() {
        derivatives[i] = (cpa[i] + notional) * payment_accrual_factors[i] * tail;
        tail *= 1.0 + rates[i] * payment_accrual_factors[i];
    }
    (cpa[n], derivatives)
}

/// Rate `r` with `N·δ·r` equal to `amount`.
pub(crate) fn rate_from_amount<C: Coupon>(coupon: &C, amount: Real) -> Result<Rate> {
    let unit = coupon.notional() * coupon.payment_year_fraction();
    if unit == 0.0 {
        return Err(Error::Numerical(
            "par rate undefined for a zero notional or accrual".into(),
        ));
    }
    Ok(amount / unit)
}

trait Compounded: Coupon {
    fn periods(&self) -> &CompoundingPeriods;

    fn amount_and_derivatives(&self, forwards: &[Rate]) -> (Real, Vec<Real>);
}

impl Compounded for CouponIborCompounding {
    fn periods(&self) -> &CompoundingPeriods {
        CouponIborCompounding::periods(self)
    }

    fn amount_and_derivatives(&self, forwards: &[Rate]) -> (Real, Vec<Real>) {
        compounded(
            self.periods().payment_accrual_factors(),
            forwards,
            self.notional(),
            self.notional_accrued(),
            0.0,
        )
    }
}

impl Compounded for CouponIborCompoundingSpread {
    fn periods(&self) -> &CompoundingPeriods {
        CouponIborCompoundingSpread::periods(self)
    }

    fn amount_and_derivatives(&self, forwards: &[Rate]) -> (Real, Vec<Real>) {
        compounded(
            Compounded::periods(self).payment_accrual_factors(),
            forwards,
            self.notional(),
            self.notional_accrued(),
            self.spread(),
        )
    }
}

impl Compounded for CouponIborCompoundingSimpleSpread {
    fn periods(&self) -> &CompoundingPeriods {
        CouponIborCompoundingSimpleSpread::periods(self)
    }

    fn amount_and_derivatives(&self, forwards: &[Rate]) -> (Real, Vec<Real>) {
        let (amount, derivatives) = compounded(
            Compounded::periods(self).payment_accrual_factors(),
            forwards,
            self.notional(),
            self.notional_accrued(),
            0.0,
        );
        (amount + self.spread_amount(), derivatives)
    }
}

impl Compounded for CouponIborCompoundingFlatSpread {
    fn periods(&self) -> &CompoundingPeriods {
        CouponIborCompoundingFlatSpread::periods(self)
    }

    fn amount_and_derivatives(&self, forwards: &[Rate]) -> (Real, Vec<Real>) {
        flat_compounded(
            Compounded::periods(self).payment_accrual_factors(),
            forwards,
            self.notional(),
            self.compounding_period_amount_accumulated(),
            self.spread(),
        )
    }
}

macro_rules! impl_compounded {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ProjectedAmount for $ty {
                fn projected_amount(&self, multicurve: &dyn MulticurveProvider) -> Result<Real> {
                    let forwards = forwards(Compounded::periods(self), multicurve)?;
                    Ok(self.amount_and_derivatives(&forwards).0)
                }

                fn projected_amount_sensitivity(
                    &self,
                    multicurve: &dyn MulticurveProvider,
                ) -> Result<(Real, MulticurveSensitivity)> {
                    let periods = Compounded::periods(self);
                    let forwards = forwards(periods, multicurve)?;
                    let (amount, derivatives) = self.amount_and_derivatives(&forwards);
                    Ok((amount, points(periods, multicurve, &derivatives)?))
                }
            }

            impl ParRateMethod for $ty {
                fn par_rate(&self, multicurve: &dyn MulticurveProvider) -> Result<Rate> {
                    rate_from_amount(self, self.projected_amount(multicurve)?)
                }
            }
        )*
    };
}

impl_compounded!(
    CouponIborCompounding,
    CouponIborCompoundingSpread,
    CouponIborCompoundingSimpleSpread,
    CouponIborCompoundingFlatSpread,
);
impl_discounting_method!(
    CouponIborCompounding,
    CouponIborCompoundingSpread,
    CouponIborCompoundingSimpleSpread,
    CouponIborCompoundingFlatSpread,
);
