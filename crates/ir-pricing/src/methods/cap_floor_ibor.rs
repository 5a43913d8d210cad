//! Ibor caplets and floorlets priced with the caplet volatility surface.

use ir_cashflows::{CapFloor, CapFloorIbor, CashFlow, Coupon, FloatingCoupon};
use ir_core::{errors::Result, Rate, Real, Time, Volatility};
use ir_currencies::MultipleCurrencyAmount;
use ir_termstructures::{VolatilityModel, VolatilityProvider};

use super::discounting_point;
use super::ibor::{fixing_forward, fixing_point};
use crate::formulas::{bachelier_price, black_price, OptionPrice};
use crate::sensitivity::MultipleCurrencyMulticurveSensitivity;

/// Prices a caplet as `N·δ·DF(t_pay)·price(F, K, t_fix, σ(t_fix, K))`,
/// in the Black or Bachelier model according to the surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CapFloorIborVolatilityMethod;

impl CapFloorIborVolatilityMethod {
    /// Create the method.
    pub fn new() -> Self {
        Self
    }

    /// Undiscounted option price on the forward, per unit of notional and
    /// accrual.
    fn option_price(
        &self,
        cap: &CapFloorIbor,
        volatilities: &VolatilityProvider<'_>,
    ) -> Result<OptionPrice> {
        let surface = volatilities.caplet()?;
        let forward = fixing_forward(cap.fixing(), volatilities.multicurve())?;
        let expiry = cap.fixing_time();
        let volatility = surface.volatility(expiry, cap.strike())?;
        let formula: fn(Rate, Rate, Time, Volatility, bool) -> OptionPrice = match surface.model() {
            VolatilityModel::Black => black_price,
            VolatilityModel::Normal => bachelier_price,
        };
        Ok(formula(forward, cap.strike(), expiry, volatility, cap.is_cap()))
    }

    fn discounted_unit(
        &self,
        cap: &CapFloorIbor,
        volatilities: &VolatilityProvider<'_>,
    ) -> Result<Real> {
        let df = volatilities
            .multicurve()
            .discount_factor(&cap.currency(), cap.payment_time())?;
        Ok(cap.notional() * cap.payment_year_fraction() * df)
    }

    /// Present value of the caplet or floorlet.
    ///
    /// # Errors
    /// Fails when the provider has no caplet surface or misses a curve.
    pub fn present_value(
        &self,
        cap: &CapFloorIbor,
        volatilities: &VolatilityProvider<'_>,
    ) -> Result<MultipleCurrencyAmount> {
        let price = self.option_price(cap, volatilities)?;
        let pv = self.discounted_unit(cap, volatilities)? * price.price;
        tracing::trace!(strike = cap.strike(), is_cap = cap.is_cap(), pv, "caplet present value");
        Ok(MultipleCurrencyAmount::of(cap.currency(), pv))
    }

    /// Point sensitivities at fixed volatility: discounting at payment and
    /// the forward through the option delta.
    pub fn present_value_curve_sensitivity(
        &self,
        cap: &CapFloorIbor,
        volatilities: &VolatilityProvider<'_>,
    ) -> Result<MultipleCurrencyMulticurveSensitivity> {
        let multicurve = volatilities.multicurve();
        let price = self.option_price(cap, volatilities)?;
        let unit = self.discounted_unit(cap, volatilities)?;
        let pv = unit * price.price;
        let sensitivity = discounting_point(multicurve, &cap.currency(), cap.payment_time(), pv)?
            .plus(&fixing_point(cap.fixing(), multicurve, unit * price.delta)?);
        Ok(MultipleCurrencyMulticurveSensitivity::of(cap.currency(), sensitivity))
    }
}
