//! Payments whose amount is known: fixed payments and fixed coupons.

use ir_cashflows::{
    CouponFixed, CouponFixedAccruedCompounding, CouponFixedCompounding, PaymentFixed,
};
use ir_core::{errors::Result, Rate, Real};
use ir_termstructures::MulticurveProvider;

use super::{impl_discounting_method, ParRateMethod, ProjectedAmount};
use crate::sensitivity::MulticurveSensitivity;

macro_rules! impl_known_amount {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ProjectedAmount for $ty {
                fn projected_amount(&self, _multicurve: &dyn MulticurveProvider) -> Result<Real> {
                    Ok(self.amount())
                }

                fn projected_amount_sensitivity(
                    &self,
                    _multicurve: &dyn MulticurveProvider,
                ) -> Result<(Real, MulticurveSensitivity)> {
                    Ok((self.amount(), MulticurveSensitivity::new()))
                }
            }
        )*
    };
}

impl_known_amount!(
    PaymentFixed,
    CouponFixed,
    CouponFixedCompounding,
    CouponFixedAccruedCompounding,
);
impl_discounting_method!(
    PaymentFixed,
    CouponFixed,
    CouponFixedCompounding,
    CouponFixedAccruedCompounding,
);

impl ParRateMethod for CouponFixed {
    fn par_rate(&self, _multicurve: &dyn MulticurveProvider) -> Result<Rate> {
        Ok(self.fixed_rate())
    }
}

impl ParRateMethod for CouponFixedCompounding {
    fn par_rate(&self, _multicurve: &dyn MulticurveProvider) -> Result<Rate> {
        Ok(self.fixed_rate())
    }
}

impl ParRateMethod for CouponFixedAccruedCompounding {
    fn par_rate(&self, _multicurve: &dyn MulticurveProvider) -> Result<Rate> {
        Ok(self.fixed_rate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::methods::DiscountingMethod;
    use approx::assert_relative_eq;
    use ir_cashflows::CouponData;
    use ir_currencies::{currencies::EUR, FxMatrix};
    use ir_termstructures::{MulticurveProviderDiscount, YieldCurve};

    fn provider() -> MulticurveProviderDiscount {
        MulticurveProviderDiscount::new(FxMatrix::new())
            .with_discount_curve(EUR, YieldCurve::flat("EUR Dsc", 0.02).unwrap())
    }

    #[test]
    fn fixed_coupon() {
        let c = CouponFixed::new(CouponData::new(EUR, 2.0, 0.5, 1e6).unwrap(), 0.03).unwrap();
        let mc = provider();
        let pv = c.present_value(&mc).unwrap().amount(&EUR).unwrap();
        assert_relative_eq!(pv, 1e6 * 0.5 * 0.03 * (-0.04_f64).exp(), max_relative = 1e-14);
        let s = c.present_value_curve_sensitivity(&mc).unwrap();
        let points = &s.get(&EUR).unwrap().yield_discounting()["EUR Dsc"];
        assert_eq!(points.len(), 1);
        assert_relative_eq!(points[0].1, -2.0 * pv, max_relative = 1e-14);
        assert!(s.get(&EUR).unwrap().forward().is_empty());
        assert_eq!(c.par_rate(&mc).unwrap(), 0.03);
    }

    #[test]
    fn missing_curve() {
        let p = PaymentFixed::new(ir_currencies::currencies::USD, 1.0, 1.0).unwrap();
        assert!(p.present_value(&provider()).is_err());
    }
}
