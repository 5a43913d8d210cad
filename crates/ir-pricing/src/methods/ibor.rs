//! Ibor coupons paying a linear function of one or two fixings.

use ir_cashflows::{
    Coupon, CouponIbor, CouponIborAverage, CouponIborGearing, CouponIborSpread, IborFixing,
};
use ir_core::{errors::Result, Rate, Real};
use ir_termstructures::MulticurveProvider;

use super::{impl_discounting_method, ForwardIndex, ParRateMethod, ProjectedAmount};
use crate::sensitivity::MulticurveSensitivity;

/// Forward of the index over the fixing period.
pub(crate) fn fixing_forward(
    fixing: &IborFixing,
    multicurve: &dyn MulticurveProvider,
) -> Result<Rate> {
    fixing.index().forward_rate(
        multicurve,
        fixing.fixing_period_start_time(),
        fixing.fixing_period_end_time(),
        fixing.fixing_accrual_factor(),
    )
}

/// Forward point of value `value` on the fixing's curve.
pub(crate) fn fixing_point(
    fixing: &IborFixing,
    multicurve: &dyn MulticurveProvider,
    value: Real,
) -> Result<MulticurveSensitivity> {
    fixing.index().forward_point(
        multicurve,
        fixing.fixing_period_start_time(),
        fixing.fixing_period_end_time(),
        fixing.fixing_accrual_factor(),
        value,
    )
}

/// `Σ wᵢ·Fᵢ + constant` and its sensitivity.
fn linear_in_fixings(
    multicurve: &dyn MulticurveProvider,
    terms: &[(&IborFixing, Real)],
    constant: Real,
) -> Result<(Real, MulticurveSensitivity)> {
    let mut amount = constant;
    let mut sensitivity = MulticurveSensitivity::new();
    for &(fixing, weight) in terms {
        amount += weight * fixing_forward(fixing, multicurve)?;
        sensitivity = sensitivity.plus(&fixing_point(fixing, multicurve, weight)?);
    }
    Ok((amount, sensitivity))
}

fn unit_amount<C: Coupon>(coupon: &C) -> Real {
    coupon.notional() * coupon.payment_year_fraction()
}

/// Fixings and the weight of each in the paid amount.
trait LinearFixings {
    fn terms(&self) -> Vec<(&IborFixing, Real)>;
}

impl LinearFixings for CouponIbor {
    fn terms(&self) -> Vec<(&IborFixing, Real)> {
        vec![(self.fixing(), unit_amount(self))]
    }
}

impl LinearFixings for CouponIborSpread {
    fn terms(&self) -> Vec<(&IborFixing, Real)> {
        vec![(self.fixing(), unit_amount(self))]
    }
}

impl LinearFixings for CouponIborGearing {
    fn terms(&self) -> Vec<(&IborFixing, Real)> {
        vec![(self.fixing(), unit_amount(self) * self.factor())]
    }
}

impl LinearFixings for CouponIborAverage {
    fn terms(&self) -> Vec<(&IborFixing, Real)> {
        let unit = unit_amount(self);
        vec![
            (self.fixing1(), unit * self.weight1()),
            (self.fixing2(), unit * self.weight2()),
        ]
    }
}

macro_rules! impl_linear_ibor {
    ($($ty:ty => |$c:ident| $constant:expr),* $(,)?) => {
        $(
            impl ProjectedAmount for $ty {
                fn projected_amount(&self, multicurve: &dyn MulticurveProvider) -> Result<Real> {
                    let $c = self;
                    let mut amount = $constant;
                    for (fixing, weight) in self.terms() {
                        amount += weight * fixing_forward(fixing, multicurve)?;
                    }
                    Ok(amount)
                }

                fn projected_amount_sensitivity(
                    &self,
                    multicurve: &dyn MulticurveProvider,
                ) -> Result<(Real, MulticurveSensitivity)> {
                    let $c = self;
                    linear_in_fixings(multicurve, &self.terms(), $constant)
                }
            }
        )*
    };
}

impl_linear_ibor!(
    CouponIbor => |_c| 0.0,
    CouponIborSpread => |c| c.spread_amount(),
    CouponIborGearing => |c| c.spread_amount(),
    CouponIborAverage => |_c| 0.0,
);
impl_discounting_method!(CouponIbor, CouponIborSpread, CouponIborGearing, CouponIborAverage);

impl ParRateMethod for CouponIbor {
    fn par_rate(&self, multicurve: &dyn MulticurveProvider) -> Result<Rate> {
        fixing_forward(self.fixing(), multicurve)
    }
}

impl ParRateMethod for CouponIborSpread {
    fn par_rate(&self, multicurve: &dyn MulticurveProvider) -> Result<Rate> {
        fixing_forward(self.fixing(), multicurve)
    }
}

impl ParRateMethod for CouponIborGearing {
    fn par_rate(&self, multicurve: &dyn MulticurveProvider) -> Result<Rate> {
        fixing_forward(self.fixing(), multicurve)
    }
}

impl ParRateMethod for CouponIborAverage {
    fn par_rate(&self, multicurve: &dyn MulticurveProvider) -> Result<Rate> {
        Ok(self.weight1() * fixing_forward(self.fixing1(), multicurve)?
            + self.weight2() * fixing_forward(self.fixing2(), multicurve)?)
    }
}
