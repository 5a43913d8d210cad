//! CMS coupons and CMS caps/floors.
//!
//! Without volatility a CMS coupon is valued at the discounted forward swap
//! rate. [`CmsSabrReplicationMethod`] adds the convexity adjustment by
//! static replication with swaptions priced on the SABR smile: the payoff
//! paid at `t_pay` is written as a strip of cash-settled swaptions using
//! the annuity approximation `A(S) = g(S)` with
//!
//! ```text
//! g(x) = (1 − (1 + x/m)^−n) / x      n fixed periods, m per year
//! h(x) = (1 + x/m)^−(t_pay − t_settle)
//! k(x) = h(x) / g(x)
//! ```
//!
//! and prices `(k(K)·bs(K) + ∫ w(x)·bs(x) dx) · g(F)/h(F)` with
//! `w(x) = k''(x)·(x − K) + 2k'(x)` over `[K, K + interval]` for a cap and
//! `−w(x)` over `[0, K]` for a floor.

use std::cell::RefCell;

use ir_cashflows::{CapFloor, CapFloorCMS, CashFlow, Coupon, CouponCMS, FloatingCoupon};
use ir_core::{
    errors::{Error, Result},
    Rate, Real, Time,
};
use ir_currencies::MultipleCurrencyAmount;
use ir_math::{GaussKronrodAdaptive, Integrator};
use ir_termstructures::{MulticurveProvider, SwaptionVolatility, VolatilityProvider};

use super::swap::swap_par_rate_curve_sensitivity;
use super::{discounting_point, impl_discounting_method, ParRateMethod, ProjectedAmount};
use crate::config::PricingConfig;
use crate::formulas::black_price;
use crate::sensitivity::{MultipleCurrencyMulticurveSensitivity, MulticurveSensitivity};

// ── Discounting ───────────────────────────────────────────────────────────────

impl ProjectedAmount for CouponCMS {
    fn projected_amount(&self, multicurve: &dyn MulticurveProvider) -> Result<Real> {
        Ok(self.notional() * self.payment_year_fraction() * self.par_rate(multicurve)?)
    }

    fn projected_amount_sensitivity(
        &self,
        multicurve: &dyn MulticurveProvider,
    ) -> Result<(Real, MulticurveSensitivity)> {
        let unit = self.notional() * self.payment_year_fraction();
        let rate = swap_par_rate_curve_sensitivity(self.underlying_swap(), multicurve)?;
        Ok((self.projected_amount(multicurve)?, rate.multiplied_by(unit)))
    }
}

impl ParRateMethod for CouponCMS {
    /// Forward rate of the underlying swap, without convexity adjustment.
    fn par_rate(&self, multicurve: &dyn MulticurveProvider) -> Result<Rate> {
        self.underlying_swap().par_rate(multicurve)
    }
}

impl_discounting_method!(CouponCMS);

// ── Replication ───────────────────────────────────────────────────────────────

/// Below this rate `g` and `k` use their limits at zero.
const EPS: Real = 1e-10;

/// Replication integrand of one CMS cap/floor.
struct Integrand<'a> {
    surface: &'a dyn SwaptionVolatility,
    periods: Real,
    periods_per_year: Real,
    eta: Real,
    expiry: Time,
    tenor: Time,
    forward: Rate,
    strike: Rate,
    is_cap: bool,
    shift: Real,
}

impl<'a> Integrand<'a> {
    fn new(
        cap: &CapFloorCMS,
        forward: Rate,
        surface: &'a dyn SwaptionVolatility,
        shift: Real,
    ) -> Result<Self> {
        let fixed_leg = cap.underlying_swap().fixed_leg();
        let first = &fixed_leg.payments()[0];
        let last = &fixed_leg.payments()[fixed_leg.number_of_payments() - 1];
        let year_fraction = first.payment_year_fraction();
        if year_fraction <= 0.0 {
            return Err(Error::InvalidArgument(
                "CMS replication needs a fixed leg with positive accrual".into(),
            ));
        }
        Ok(Self {
            surface,
            periods: fixed_leg.number_of_payments() as Real,
            periods_per_year: (1.0 / year_fraction).round().max(1.0),
            eta: -(cap.payment_time() - cap.settlement_time()),
            expiry: cap.fixing_time(),
            tenor: last.payment_time() - cap.settlement_time(),
            forward,
            strike: cap.strike(),
            is_cap: cap.is_cap(),
            shift,
        })
    }

    fn tau(&self) -> Real {
        1.0 / self.periods_per_year
    }

    fn h(&self, x: Rate) -> Real {
        (1.0 + self.tau() * x).powf(self.eta)
    }

    fn g(&self, x: Rate) -> Real {
        if x >= EPS {
            (1.0 - (1.0 + x / self.periods_per_year).powf(-self.periods)) / x
        } else {
            self.periods / self.periods_per_year
        }
    }

    fn k(&self, x: Rate) -> Real {
        if x >= EPS {
            self.h(x) / self.g(x)
        } else {
            1.0 / self.g(x)
        }
    }

    /// `(k'(x), k''(x))`.
    fn k_derivatives(&self, x: Rate) -> (Real, Real) {
        let (n, m) = (self.periods, self.periods_per_year);
        let period_factor = 1.0 + x / m;
        let discount = period_factor.powf(-n);
        let (g, gp, gpp) = if x >= EPS {
            let g = (1.0 - discount) / x;
            let gp = -g / x + n / x / m * discount / period_factor;
            let gpp = 2.0 / (x * x) * g - 2.0 * n / (x * x) / m * discount / period_factor
                - (n + 1.0) * n / x / (m * m) * discount / (period_factor * period_factor);
            (g, gp, gpp)
        } else {
            (
                n / m,
                -n / 2.0 * (n + 1.0) / (m * m),
                n / 2.0 * (n + 1.0) * (1.0 + (n + 2.0) / 3.0) / (m * m * m),
            )
        };
        let g2 = g * g;
        let h = self.h(x);
        let hp = self.eta * self.tau() * h / period_factor;
        let hpp = (self.eta - 1.0) * self.tau() * hp / period_factor;
        let kp = hp / g - h * gp / g2;
        let kpp = hpp / g - 2.0 * hp * gp / g2 - h * (gpp / g2 - 2.0 * gp * gp / (g2 * g));
        (kp, kpp)
    }

    /// Replication weight of the option struck at `x`.
    fn weight(&self, x: Rate) -> Real {
        let (kp, kpp) = self.k_derivatives(x);
        let w = kpp * (x - self.strike) + 2.0 * kp;
        if self.is_cap {
            w
        } else {
            -w
        }
    }

    /// Black price of the swaption struck at `x` and its derivative with
    /// respect to the forward, the smile moving with the forward.
    fn black(&self, x: Rate) -> Result<(Real, Real)> {
        if x <= 0.0 {
            let intrinsic = black_price(self.forward, x, self.expiry, 0.0, self.is_cap);
            return Ok((intrinsic.price, intrinsic.delta));
        }
        let vol = |f: Rate| self.surface.volatility(self.expiry, self.tenor, x, f);
        let price = black_price(self.forward, x, self.expiry, vol(self.forward)?, self.is_cap);
        let (up, down) = (vol(self.forward + self.shift)?, vol(self.forward - self.shift)?);
        let dvol = (up - down) / (2.0 * self.shift);
        Ok((price.price, price.delta + price.vega * dvol))
    }

    fn bounds(&self, interval: Real) -> (Rate, Rate) {
        if self.is_cap {
            (self.strike, self.strike + interval)
        } else {
            (0.0, self.strike.max(0.0))
        }
    }
}

/// Integrate a fallible integrand, returning the first error it raised.
fn integrate_fallible<F>(integrator: &GaussKronrodAdaptive, f: F, a: Real, b: Real) -> Result<Real>
where
    F: Fn(Real) -> Result<Real>,
{
    let failure = RefCell::new(None);
    let value = integrator.integrate(
        |x| match f(x) {
            Ok(v) => v,
            Err(e) => {
                failure.borrow_mut().get_or_insert(e);
                Real::NAN
            }
        },
        a,
        b,
    );
    match failure.into_inner() {
        Some(e) => Err(e),
        None => value,
    }
}

/// CMS replication with a SABR swaption smile.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CmsSabrReplicationMethod {
    config: PricingConfig,
}

/// Per unit of notional, accrual and discount factor: the replicated
/// price and its derivative with respect to the forward swap rate.
struct Replicated {
    price: Real,
    delta: Real,
}

impl CmsSabrReplicationMethod {
    /// Create the method with the given numerical settings.
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    /// The numerical settings.
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    fn integrator(&self) -> GaussKronrodAdaptive {
        GaussKronrodAdaptive::new(
            self.config.integration_absolute_tolerance,
            self.config.integration_max_evaluations,
        )
    }

    fn replicate(
        &self,
        cap: &CapFloorCMS,
        volatilities: &VolatilityProvider<'_>,
    ) -> Result<Replicated> {
        let multicurve = volatilities.multicurve();
        let forward = cap.underlying_swap().par_rate(multicurve)?;
        let integrand = Integrand::new(
            cap,
            forward,
            volatilities.swaption()?,
            self.config.finite_difference_shift,
        )?;
        let (a, b) = integrand.bounds(self.config.cms_integration_interval);
        let integrator = self.integrator();
        let integral_price = integrate_fallible(
            &integrator,
            |x| Ok(integrand.weight(x) * integrand.black(x)?.0),
            a,
            b,
        )?;
        let integral_delta = integrate_fallible(
            &integrator,
            |x| Ok(integrand.weight(x) * integrand.black(x)?.1),
            a,
            b,
        )?;

        let strike = integrand.strike;
        let (strike_price, strike_delta) = integrand.black(strike)?;
        let k_strike = integrand.k(strike);
        let undiscounted = k_strike * strike_price + integral_price;
        let undiscounted_delta = k_strike * strike_delta + integral_delta;

        // g(F)/h(F) = 1/k(F) and its derivative −k'(F)/k(F)².
        let factor = integrand.g(forward) / integrand.h(forward);
        let k_forward = integrand.k(forward);
        let factor_derivative = -integrand.k_derivatives(forward).0 / (k_forward * k_forward);

        tracing::debug!(
            forward,
            strike,
            is_cap = integrand.is_cap,
            integral_price,
            "CMS replication"
        );
        Ok(Replicated {
            price: factor * undiscounted,
            delta: factor_derivative * undiscounted + factor * undiscounted_delta,
        })
    }

    fn discounted_unit<C: Coupon>(
        &self,
        coupon: &C,
        multicurve: &dyn MulticurveProvider,
    ) -> Result<Real> {
        let df = multicurve.discount_factor(&coupon.currency(), coupon.payment_time())?;
        Ok(coupon.notional() * coupon.payment_year_fraction() * df)
    }

    /// Present value of a CMS cap/floor.
    ///
    /// # Errors
    /// Fails without a swaption surface, on missing curves, or when the
    /// integration does not converge.
    pub fn present_value_cap_floor(
        &self,
        cap: &CapFloorCMS,
        volatilities: &VolatilityProvider<'_>,
    ) -> Result<MultipleCurrencyAmount> {
        let unit = self.discounted_unit(cap, volatilities.multicurve())?;
        let pv = unit * self.replicate(cap, volatilities)?.price;
        Ok(MultipleCurrencyAmount::of(cap.currency(), pv))
    }

    /// Present value of a CMS coupon, replicated as a cap struck at zero.
    pub fn present_value_coupon(
        &self,
        coupon: &CouponCMS,
        volatilities: &VolatilityProvider<'_>,
    ) -> Result<MultipleCurrencyAmount> {
        self.present_value_cap_floor(&CapFloorCMS::from_coupon(coupon, 0.0, true)?, volatilities)
    }

    /// Point sensitivities of a CMS cap/floor at fixed SABR parameters.
    ///
    /// The forward swap rate enters through its own curve sensitivity
    /// scaled by `∂PV/∂S`.
    pub fn present_value_cap_floor_curve_sensitivity(
        &self,
        cap: &CapFloorCMS,
        volatilities: &VolatilityProvider<'_>,
    ) -> Result<MultipleCurrencyMulticurveSensitivity> {
        let multicurve = volatilities.multicurve();
        let unit = self.discounted_unit(cap, multicurve)?;
        let replicated = self.replicate(cap, volatilities)?;
        let forward = swap_par_rate_curve_sensitivity(cap.underlying_swap(), multicurve)?;
        let sensitivity = discounting_point(
            multicurve,
            &cap.currency(),
            cap.payment_time(),
            unit * replicated.price,
        )?
        .plus(&forward.multiplied_by(unit * replicated.delta));
        Ok(MultipleCurrencyMulticurveSensitivity::of(cap.currency(), sensitivity))
    }

    /// Point sensitivities of a CMS coupon.
    pub fn present_value_coupon_curve_sensitivity(
        &self,
        coupon: &CouponCMS,
        volatilities: &VolatilityProvider<'_>,
    ) -> Result<MultipleCurrencyMulticurveSensitivity> {
        self.present_value_cap_floor_curve_sensitivity(
            &CapFloorCMS::from_coupon(coupon, 0.0, true)?,
            volatilities,
        )
    }
}
