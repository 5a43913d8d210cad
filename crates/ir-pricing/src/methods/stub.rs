//! Interpolated stub coupons on Ibor and overnight indexes.

use ir_cashflows::{
    Coupon, DepositIndexCoupon, FloatingCoupon, IborInterpolatedStubCoupon, InterpolatedStubCoupon,
    OvernightInterpolatedStubCoupon,
};
use ir_core::{errors::Result, Rate, Real};
use ir_termstructures::MulticurveProvider;

use super::{impl_discounting_method, ForwardIndex, ParRateMethod, ProjectedAmount};
use crate::sensitivity::MulticurveSensitivity;

/// The two tenor forwards from the fixing period start.
fn tenor_forwards<C, I>(
    stub: &InterpolatedStubCoupon<C, I>,
    multicurve: &dyn MulticurveProvider,
) -> Result<(Rate, Rate)>
where
    C: DepositIndexCoupon<I> + FloatingCoupon + Clone,
    I: ForwardIndex,
{
    let start = stub.fixing_period_start_time();
    let first = stub.index().forward_rate(
        multicurve,
        start,
        stub.first_interpolated_time(),
        stub.first_interpolated_year_fraction(),
    )?;
    let second = stub.index().forward_rate(
        multicurve,
        start,
        stub.second_interpolated_time(),
        stub.second_interpolated_year_fraction(),
    )?;
    Ok((first, second))
}

/// `(1 − w)·F₁ + w·F₂`.
fn interpolated_rate<C, I>(
    stub: &InterpolatedStubCoupon<C, I>,
    multicurve: &dyn MulticurveProvider,
) -> Result<Rate>
where
    C: DepositIndexCoupon<I> + FloatingCoupon + Clone,
    I: ForwardIndex,
{
    let (first, second) = tenor_forwards(stub, multicurve)?;
    let w = stub.interpolation_weight();
    Ok((1.0 - w) * first + w * second)
}

impl<C, I> ProjectedAmount for InterpolatedStubCoupon<C, I>
where
    C: DepositIndexCoupon<I> + FloatingCoupon + Clone,
    I: ForwardIndex,
{
    fn projected_amount(&self, multicurve: &dyn MulticurveProvider) -> Result<Real> {
        Ok(self.notional() * self.payment_year_fraction() * interpolated_rate(self, multicurve)?)
    }

    fn projected_amount_sensitivity(
        &self,
        multicurve: &dyn MulticurveProvider,
    ) -> Result<(Real, MulticurveSensitivity)> {
        let unit = self.notional() * self.payment_year_fraction();
        let w = self.interpolation_weight();
        let start = self.fixing_period_start_time();
        let sensitivity = self
            .index()
            .forward_point(
                multicurve,
                start,
                self.first_interpolated_time(),
                self.first_interpolated_year_fraction(),
                unit * (1.0 - w),
            )?
            .plus(&self.index().forward_point(
                multicurve,
                start,
                self.second_interpolated_time(),
                self.second_interpolated_year_fraction(),
                unit * w,
            )?);
        Ok((self.projected_amount(multicurve)?, sensitivity))
    }
}

impl ParRateMethod for IborInterpolatedStubCoupon {
    fn par_rate(&self, multicurve: &dyn MulticurveProvider) -> Result<Rate> {
        interpolated_rate(self, multicurve)
    }
}

impl ParRateMethod for OvernightInterpolatedStubCoupon {
    fn par_rate(&self, multicurve: &dyn MulticurveProvider) -> Result<Rate> {
        interpolated_rate(self, multicurve)
    }
}

impl_discounting_method!(IborInterpolatedStubCoupon, OvernightInterpolatedStubCoupon);
