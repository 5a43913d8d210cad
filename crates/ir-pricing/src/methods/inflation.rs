//! Zero-coupon inflation coupons.

use ir_cashflows::CouponInflationZeroCouponMonthly;
use ir_core::{errors::Result, Real};
use ir_termstructures::MulticurveProvider;

use super::{impl_discounting_method, ProjectedAmount};
use crate::sensitivity::MulticurveSensitivity;

/// The projected index level is taken as given: only discounting
/// contributes to the curve sensitivity.
impl ProjectedAmount for CouponInflationZeroCouponMonthly {
    fn projected_amount(&self, multicurve: &dyn MulticurveProvider) -> Result<Real> {
        let index_end_value =
            multicurve.price_index(self.price_index(), self.reference_end_time())?;
        Ok(self.amount(index_end_value))
    }

    fn projected_amount_sensitivity(
        &self,
        multicurve: &dyn MulticurveProvider,
    ) -> Result<(Real, MulticurveSensitivity)> {
        Ok((self.projected_amount(multicurve)?, MulticurveSensitivity::new()))
    }
}

impl_discounting_method!(CouponInflationZeroCouponMonthly);
