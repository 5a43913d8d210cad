//! Pricing methods.
//!
//! Linear instruments implement [`DiscountingMethod`] (present value and
//! its point sensitivities) and, where a rate is defined, [`ParRateMethod`].
//! Options need a volatility model and are priced by method structs:
//! [`CapFloorIborVolatilityMethod`] for Ibor caplets and
//! [`CmsSabrReplicationMethod`] for CMS coupons and caplets.
//!
//! Each linear instrument only describes the amount it pays, projected
//! from the curves, and that amount's sensitivities
//! ([`ProjectedAmount`]); discounting at the payment time is shared.

use ir_cashflows::CashFlow;
use ir_core::{errors::Result, Rate, Real, Time};
use ir_currencies::{Currency, MultipleCurrencyAmount};
use ir_indexes::{IborIndex, IndexDeposit, IndexON};
use ir_termstructures::MulticurveProvider;

use crate::sensitivity::{
    ForwardSensitivity, MultipleCurrencyMulticurveSensitivity, MulticurveSensitivity,
};

mod average;
mod cap_floor_ibor;
mod cms;
mod compounding;
mod fixed;
mod fx_reset;
mod ibor;
mod inflation;
mod overnight;
mod stub;
mod swap;

pub use cap_floor_ibor::CapFloorIborVolatilityMethod;
pub use cms::CmsSabrReplicationMethod;
pub use swap::{
    present_value_basis_point, present_value_basis_point_curve_sensitivity,
    swap_par_rate_curve_sensitivity,
};

/// Present value by discounting projected cash flows.
pub trait DiscountingMethod {
    /// Present value, per currency of payment.
    fn present_value(&self, multicurve: &dyn MulticurveProvider) -> Result<MultipleCurrencyAmount>;

    /// Point sensitivities of [`DiscountingMethod::present_value`] to the
    /// discounting and forward curves.
    fn present_value_curve_sensitivity(
        &self,
        multicurve: &dyn MulticurveProvider,
    ) -> Result<MultipleCurrencyMulticurveSensitivity>;
}

/// The rate that sets the instrument's present value to that of a fixed
/// coupon paying it.
pub trait ParRateMethod {
    /// Par rate implied by the curves.
    fn par_rate(&self, multicurve: &dyn MulticurveProvider) -> Result<Rate>;
}

// ── Projection ────────────────────────────────────────────────────────────────

/// The amount a linear instrument pays, projected from the curves.
pub(crate) trait ProjectedAmount: CashFlow {
    /// Amount paid at the payment time.
    fn projected_amount(&self, multicurve: &dyn MulticurveProvider) -> Result<Real>;

    /// The projected amount and its point sensitivities (of the amount,
    /// not of its present value).
    fn projected_amount_sensitivity(
        &self,
        multicurve: &dyn MulticurveProvider,
    ) -> Result<(Real, MulticurveSensitivity)>;
}

/// `DiscountingMethod` from `ProjectedAmount`: `PV = amount·DF(t_pay)`.
macro_rules! impl_discounting_method {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::methods::DiscountingMethod for $ty {
                fn present_value(
                    &self,
                    multicurve: &dyn ::ir_termstructures::MulticurveProvider,
                ) -> ::ir_core::errors::Result<::ir_currencies::MultipleCurrencyAmount> {
                    $crate::methods::discounted_present_value(self, multicurve, stringify!($ty))
                }

                fn present_value_curve_sensitivity(
                    &self,
                    multicurve: &dyn ::ir_termstructures::MulticurveProvider,
                ) -> ::ir_core::errors::Result<
                    $crate::sensitivity::MultipleCurrencyMulticurveSensitivity,
                > {
                    $crate::methods::discounted_curve_sensitivity(self, multicurve)
                }
            }
        )*
    };
}
pub(crate) use impl_discounting_method;

pub(crate) fn discounted_present_value<T: ProjectedAmount + ?Sized>(
    instrument: &T,
    multicurve: &dyn MulticurveProvider,
    kind: &'static str,
) -> Result<MultipleCurrencyAmount> {
    let currency = instrument.currency();
    let df = multicurve.discount_factor(&currency, instrument.payment_time())?;
    let pv = instrument.projected_amount(multicurve)? * df;
    tracing::trace!(kind, pv, "discounting present value");
    Ok(MultipleCurrencyAmount::of(currency, pv))
}

pub(crate) fn discounted_curve_sensitivity<T: ProjectedAmount + ?Sized>(
    instrument: &T,
    multicurve: &dyn MulticurveProvider,
) -> Result<MultipleCurrencyMulticurveSensitivity> {
    let currency = instrument.currency();
    let payment_time = instrument.payment_time();
    let df = multicurve.discount_factor(&currency, payment_time)?;
    let (amount, amount_sensitivity) = instrument.projected_amount_sensitivity(multicurve)?;
    let sensitivity = discounting_point(multicurve, &currency, payment_time, amount * df)?
        .plus(&amount_sensitivity.multiplied_by(df));
    Ok(MultipleCurrencyMulticurveSensitivity::of(currency, sensitivity))
}

/// Discounting point for a value `pv = amount·DF(t)` paid at `t`.
pub(crate) fn discounting_point(
    multicurve: &dyn MulticurveProvider,
    currency: &Currency,
    t: Time,
    pv: Real,
) -> Result<MulticurveSensitivity> {
    let name = multicurve.discount_curve_name(currency)?;
    Ok(MulticurveSensitivity::of_yield_discounting(name, vec![(t, -t * pv)]))
}

// ── Forwards ──────────────────────────────────────────────────────────────────

/// Deposit indexes whose forwards the provider projects.
pub(crate) trait ForwardIndex: IndexDeposit {
    /// Forward rate over `[start, end]`.
    fn forward_rate(
        &self,
        multicurve: &dyn MulticurveProvider,
        start: Time,
        end: Time,
        accrual: Real,
    ) -> Result<Rate>;

    /// Name of the curve projecting the index.
    fn forward_curve_name(&self, multicurve: &dyn MulticurveProvider) -> Result<String>;

    /// A single forward point on the index curve.
    fn forward_point(
        &self,
        multicurve: &dyn MulticurveProvider,
        start: Time,
        end: Time,
        accrual: Real,
        value: Real,
    ) -> Result<MulticurveSensitivity> {
        Ok(MulticurveSensitivity::of_forward(
            self.forward_curve_name(multicurve)?,
            vec![ForwardSensitivity::new(start, end, accrual, value)],
        ))
    }
}

impl ForwardIndex for IborIndex {
    fn forward_rate(
        &self,
        multicurve: &dyn MulticurveProvider,
        start: Time,
        end: Time,
        accrual: Real,
    ) -> Result<Rate> {
        multicurve.ibor_forward_rate(self, start, end, accrual)
    }

    fn forward_curve_name(&self, multicurve: &dyn MulticurveProvider) -> Result<String> {
        multicurve.ibor_curve_name(self).map(str::to_owned)
    }
}

impl ForwardIndex for IndexON {
    fn forward_rate(
        &self,
        multicurve: &dyn MulticurveProvider,
        start: Time,
        end: Time,
        accrual: Real,
    ) -> Result<Rate> {
        multicurve.overnight_forward_rate(self, start, end, accrual)
    }

    fn forward_curve_name(&self, multicurve: &dyn MulticurveProvider) -> Result<String> {
        multicurve.overnight_curve_name(self).map(str::to_owned)
    }
}
