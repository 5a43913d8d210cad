//! Annuities, swaps and the par rate of fixed/Ibor swaps.

use ir_cashflows::{Annuity, CashFlow, Coupon, CouponFixed, Swap, SwapFixedIbor};
use ir_core::{
    errors::{Error, Result},
    Rate, Real,
};
use ir_currencies::MultipleCurrencyAmount;
use ir_termstructures::MulticurveProvider;

use super::{DiscountingMethod, ParRateMethod};
use crate::sensitivity::{MultipleCurrencyMulticurveSensitivity, MulticurveSensitivity};

impl<P: CashFlow + DiscountingMethod> DiscountingMethod for Annuity<P> {
    fn present_value(&self, multicurve: &dyn MulticurveProvider) -> Result<MultipleCurrencyAmount> {
        self.payments()
            .iter()
            .try_fold(MultipleCurrencyAmount::new(), |pv, p| {
                Ok(pv.plus(&p.present_value(multicurve)?))
            })
    }

    fn present_value_curve_sensitivity(
        &self,
        multicurve: &dyn MulticurveProvider,
    ) -> Result<MultipleCurrencyMulticurveSensitivity> {
        self.payments()
            .iter()
            .try_fold(MultipleCurrencyMulticurveSensitivity::new(), |s, p| {
                Ok(s.plus(&p.present_value_curve_sensitivity(multicurve)?))
            })
    }
}

impl<P1, P2> DiscountingMethod for Swap<P1, P2>
where
    P1: CashFlow + DiscountingMethod,
    P2: CashFlow + DiscountingMethod,
{
    fn present_value(&self, multicurve: &dyn MulticurveProvider) -> Result<MultipleCurrencyAmount> {
        Ok(self
            .first_leg()
            .present_value(multicurve)?
            .plus(&self.second_leg().present_value(multicurve)?))
    }

    fn present_value_curve_sensitivity(
        &self,
        multicurve: &dyn MulticurveProvider,
    ) -> Result<MultipleCurrencyMulticurveSensitivity> {
        Ok(self
            .first_leg()
            .present_value_curve_sensitivity(multicurve)?
            .plus(&self.second_leg().present_value_curve_sensitivity(multicurve)?))
    }
}

// ── Basis point value ─────────────────────────────────────────────────────────

/// Present value of one unit of rate on the leg: `Σ |Nᵢ|·δᵢ·DF(tᵢ)`.
pub fn present_value_basis_point(
    leg: &Annuity<CouponFixed>,
    multicurve: &dyn MulticurveProvider,
) -> Result<Real> {
    let currency = leg.currency();
    leg.payments().iter().try_fold(0.0, |pvbp, c| {
        let df = multicurve.discount_factor(&currency, c.payment_time())?;
        Ok(pvbp + c.notional().abs() * c.payment_year_fraction() * df)
    })
}

/// Discounting points of [`present_value_basis_point`].
pub fn present_value_basis_point_curve_sensitivity(
    leg: &Annuity<CouponFixed>,
    multicurve: &dyn MulticurveProvider,
) -> Result<MulticurveSensitivity> {
    let currency = leg.currency();
    let curve = multicurve.discount_curve_name(&currency)?;
    let mut points = Vec::with_capacity(leg.number_of_payments());
    for c in leg.payments() {
        let t = c.payment_time();
        let df = multicurve.discount_factor(&currency, t)?;
        points.push((t, -t * c.notional().abs() * c.payment_year_fraction() * df));
    }
    Ok(MulticurveSensitivity::of_yield_discounting(curve, points))
}

// ── Par rate ──────────────────────────────────────────────────────────────────

/// Sign of the fixed leg and the two terms of `S = A/B`: the Ibor leg
/// value `A = −sign·PV_ibor` and the basis point value `B`.
fn par_rate_terms(
    swap: &SwapFixedIbor,
    multicurve: &dyn MulticurveProvider,
) -> Result<(Real, Real, Real)> {
    let currency = swap.fixed_leg().currency();
    let sign = swap.fixed_leg().payments()[0].notional().signum();
    let pv_ibor = swap
        .ibor_leg()
        .present_value(multicurve)?
        .amount(&currency)
        .unwrap_or(0.0);
    let pvbp = present_value_basis_point(swap.fixed_leg(), multicurve)?;
    if pvbp == 0.0 {
        return Err(Error::Numerical("swap par rate undefined for a zero basis point value".into()));
    }
    Ok((sign, -sign * pv_ibor, pvbp))
}

impl ParRateMethod for SwapFixedIbor {
    /// Fixed rate setting the swap value to zero.
    fn par_rate(&self, multicurve: &dyn MulticurveProvider) -> Result<Rate> {
        let (_, numerator, pvbp) = par_rate_terms(self, multicurve)?;
        Ok(numerator / pvbp)
    }
}

/// Point sensitivities of the par rate of `swap`.
pub fn swap_par_rate_curve_sensitivity(
    swap: &SwapFixedIbor,
    multicurve: &dyn MulticurveProvider,
) -> Result<MulticurveSensitivity> {
    let currency = swap.fixed_leg().currency();
    let (sign, numerator, pvbp) = par_rate_terms(swap, multicurve)?;
    let ibor = swap
        .ibor_leg()
        .present_value_curve_sensitivity(multicurve)?
        .get(&currency)
        .cloned()
        .unwrap_or_default();
    let pvbp_sensitivity =
        present_value_basis_point_curve_sensitivity(swap.fixed_leg(), multicurve)?;
    Ok(ibor
        .multiplied_by(-sign / pvbp)
        .plus(&pvbp_sensitivity.multiplied_by(-numerator / (pvbp * pvbp))))
}
