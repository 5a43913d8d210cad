//! Overnight coupons.
//!
//! Daily compounding over `[s, e]` telescopes to `P(s)/P(e) = 1 + δ·F` on
//! the overnight curve, so each coupon only needs the forward over its
//! remaining period.

use ir_cashflows::{
    Coupon, CouponArithmeticAverageON, CouponArithmeticAverageONSpreadSimplified, CouponON,
    CouponONCompounded, CouponONSpread, DepositIndexCoupon,
};
use ir_core::{
    errors::{Error, Result},
    Rate, Real,
};
use ir_termstructures::MulticurveProvider;

use super::compounding::rate_from_amount;
use super::{impl_discounting_method, ForwardIndex, ParRateMethod, ProjectedAmount};
use crate::sensitivity::MulticurveSensitivity;

// ── Compounded over one period ────────────────────────────────────────────────

impl ProjectedAmount for CouponON {
    fn projected_amount(&self, multicurve: &dyn MulticurveProvider) -> Result<Real> {
        let forward = self.par_rate(multicurve)?;
        let growth = 1.0 + self.fixing_accrual_factor() * forward;
        Ok(self.notional_accrued() * growth - self.notional())
    }

    fn projected_amount_sensitivity(
        &self,
        multicurve: &dyn MulticurveProvider,
    ) -> Result<(Real, MulticurveSensitivity)> {
        let point = self.index().forward_point(
            multicurve,
            self.fixing_period_start_time(),
            self.fixing_period_end_time(),
            self.fixing_accrual_factor(),
            self.notional_accrued() * self.fixing_accrual_factor(),
        )?;
        Ok((self.projected_amount(multicurve)?, point))
    }
}

impl ParRateMethod for CouponON {
    fn par_rate(&self, multicurve: &dyn MulticurveProvider) -> Result<Rate> {
        self.index().forward_rate(
            multicurve,
            self.fixing_period_start_time(),
            self.fixing_period_end_time(),
            self.fixing_accrual_factor(),
        )
    }
}

impl ProjectedAmount for CouponONSpread {
    fn projected_amount(&self, multicurve: &dyn MulticurveProvider) -> Result<Real> {
        let forward = self.par_rate(multicurve)?;
        Ok(
            self.notional_accrued() * (1.0 + self.fixing_period_accrual_factor() * forward)
                - self.notional()
                + self.spread_amount(),
        )
    }

    fn projected_amount_sensitivity(
        &self,
        multicurve: &dyn MulticurveProvider,
    ) -> Result<(Real, MulticurveSensitivity)> {
        let point = self.index().forward_point(
            multicurve,
            self.fixing_period_start_time(),
            self.fixing_period_end_time(),
            self.fixing_period_accrual_factor(),
            self.notional_accrued() * self.fixing_period_accrual_factor(),
        )?;
        Ok((self.projected_amount(multicurve)?, point))
    }
}

impl ParRateMethod for CouponONSpread {
    fn par_rate(&self, multicurve: &dyn MulticurveProvider) -> Result<Rate> {
        self.index().forward_rate(
            multicurve,
            self.fixing_period_start_time(),
            self.fixing_period_end_time(),
            self.fixing_period_accrual_factor(),
        )
    }
}

// ── Business-day compounding ──────────────────────────────────────────────────

fn compounded_growth(
    coupon: &CouponONCompounded,
    multicurve: &dyn MulticurveProvider,
) -> Result<Vec<Real>> {
    let starts = coupon.fixing_period_start_times();
    let ends = coupon.fixing_period_end_times();
    let accruals = coupon.fixing_period_accrual_factors();
    (0..starts.len())
        .map(|i| {
            let forward = coupon
                .index()
                .forward_rate(multicurve, starts[i], ends[i], accruals[i])?;
            Ok(1.0 + accruals[i] * forward)
        })
        .collect()
}

impl ProjectedAmount for CouponONCompounded {
    fn projected_amount(&self, multicurve: &dyn MulticurveProvider) -> Result<Real> {
        let growth = compounded_growth(self, multicurve)?;
        Ok(self.notional_accrued() * growth.iter().product::<Real>())
    }

    fn projected_amount_sensitivity(
        &self,
        multicurve: &dyn MulticurveProvider,
    ) -> Result<(Real, MulticurveSensitivity)> {
        let growth = compounded_growth(self, multicurve)?;
        let amount = self.notional_accrued() * growth.iter().product::<Real>();
        let mut sensitivity = MulticurveSensitivity::new();
        for (i, g) in growth.iter().enumerate() {
            let accrual = self.fixing_period_accrual_factors()[i];
            sensitivity = sensitivity.plus(&self.index().forward_point(
                multicurve,
                self.fixing_period_start_times()[i],
                self.fixing_period_end_times()[i],
                accrual,
                amount * accrual / g,
            )?);
        }
        Ok((amount, sensitivity))
    }
}

impl ParRateMethod for CouponONCompounded {
    /// Annually compounded rate `r` with `N·(1 + r)^δ` equal to the
    /// projected payment.
    fn par_rate(&self, multicurve: &dyn MulticurveProvider) -> Result<Rate> {
        let unit = self.notional();
        let yf = self.payment_year_fraction();
        if unit == 0.0 || yf == 0.0 {
            return Err(Error::Numerical(
                "par rate undefined for a zero notional or accrual".into(),
            ));
        }
        Ok((self.projected_amount(multicurve)? / unit).powf(1.0 / yf) - 1.0)
    }
}

// ── Arithmetic average ────────────────────────────────────────────────────────

impl ProjectedAmount for CouponArithmeticAverageON {
    fn projected_amount(&self, multicurve: &dyn MulticurveProvider) -> Result<Real> {
        let times = self.fixing_period_times();
        let mut accrued = self.rate_accrued();
        for (i, &delta) in self.fixing_period_accrual_factors().iter().enumerate() {
            accrued += delta
                * self
                    .index()
                    .forward_rate(multicurve, times[i], times[i + 1], delta)?;
        }
        Ok(self.notional() * accrued)
    }

    fn projected_amount_sensitivity(
        &self,
        multicurve: &dyn MulticurveProvider,
    ) -> Result<(Real, MulticurveSensitivity)> {
        let times = self.fixing_period_times();
        let mut sensitivity = MulticurveSensitivity::new();
        for (i, &delta) in self.fixing_period_accrual_factors().iter().enumerate() {
            sensitivity = sensitivity.plus(&self.index().forward_point(
                multicurve,
                times[i],
                times[i + 1],
                delta,
                self.notional() * delta,
            )?);
        }
        Ok((self.projected_amount(multicurve)?, sensitivity))
    }
}

impl ParRateMethod for CouponArithmeticAverageON {
    fn par_rate(&self, multicurve: &dyn MulticurveProvider) -> Result<Rate> {
        rate_from_amount(self, self.projected_amount(multicurve)?)
    }
}

/// Approximates the average by `ln(1 + δ·F)`, the continuously
/// compounded rate over the period.
impl ProjectedAmount for CouponArithmeticAverageONSpreadSimplified {
    fn projected_amount(&self, multicurve: &dyn MulticurveProvider) -> Result<Real> {
        let growth = 1.0 + self.fixing_period_accrual_factor() * self.forward(multicurve)?;
        Ok(self.notional() * growth.ln() + self.spread_amount())
    }

    fn projected_amount_sensitivity(
        &self,
        multicurve: &dyn MulticurveProvider,
    ) -> Result<(Real, MulticurveSensitivity)> {
        let delta = self.fixing_period_accrual_factor();
        let growth = 1.0 + delta * self.forward(multicurve)?;
        let point = self.index().forward_point(
            multicurve,
            self.fixing_period_start_time(),
            self.fixing_period_end_time(),
            delta,
            self.notional() * delta / growth,
        )?;
        Ok((self.notional() * growth.ln() + self.spread_amount(), point))
    }
}

trait SimplifiedForward {
    fn forward(&self, multicurve: &dyn MulticurveProvider) -> Result<Rate>;
}

impl SimplifiedForward for CouponArithmeticAverageONSpreadSimplified {
    fn forward(&self, multicurve: &dyn MulticurveProvider) -> Result<Rate> {
        self.index().forward_rate(
            multicurve,
            self.fixing_period_start_time(),
            self.fixing_period_end_time(),
            self.fixing_period_accrual_factor(),
        )
    }
}

impl ParRateMethod for CouponArithmeticAverageONSpreadSimplified {
    fn par_rate(&self, multicurve: &dyn MulticurveProvider) -> Result<Rate> {
        let delta = self.fixing_period_accrual_factor();
        if delta == 0.0 {
            return Err(Error::Numerical("par rate undefined for a zero accrual".into()));
        }
        Ok((1.0 + delta * self.forward(multicurve)?).ln() / delta)
    }
}

impl_discounting_method!(
    CouponON,
    CouponONSpread,
    CouponONCompounded,
    CouponArithmeticAverageON,
    CouponArithmeticAverageONSpreadSimplified,
);
