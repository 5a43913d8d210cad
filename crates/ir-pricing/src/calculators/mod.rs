//! Calculators: [`InstrumentVisitor`]s mapping every instrument kind to its
//! pricing method.
//!
//! Calculators are stateless, or hold only numerical settings, and take the
//! market data as the visitor data. A kind a calculator does not handle is
//! rejected with [`Error::UnsupportedInstrument`] naming both.
//!
//! ```
//! use ir_cashflows::{CouponData, CouponFixed, InstrumentDerivative};
//! use ir_currencies::{currencies::EUR, FxMatrix};
//! use ir_pricing::PresentValueDiscountingCalculator;
//! use ir_termstructures::{MulticurveProvider, MulticurveProviderDiscount, YieldCurve};
//!
//! let mc = MulticurveProviderDiscount::new(FxMatrix::new())
//!     .with_discount_curve(EUR, YieldCurve::flat("EUR Dsc", 0.0).unwrap());
//! let coupon = CouponFixed::new(CouponData::new(EUR, 1.0, 1.0, 100.0).unwrap(), 0.05).unwrap();
//! let pv = coupon
//!     .accept_with(&PresentValueDiscountingCalculator, &mc as &dyn MulticurveProvider)
//!     .unwrap();
//! assert_eq!(pv.amount(&EUR), Some(5.0));
//! ```
//!
//! [`InstrumentVisitor`]: ir_cashflows::InstrumentVisitor

use ir_core::errors::Error;

/// Error for a kind the calculator does not handle.
pub(crate) fn rejected(calculator: &'static str, instrument: &'static str) -> Error {
    tracing::debug!(calculator, instrument, "instrument kind not supported");
    Error::UnsupportedInstrument {
        calculator,
        instrument,
    }
}

/// Implements `InstrumentVisitor<data>` for a calculator.
///
/// `rejected` kinds, named by their type in scope, return
/// [`Error::UnsupportedInstrument`]. `custom` holds hand-written visit
/// methods. Every kind listed after `priced` evaluates the closure-like
/// body with the calculator, the instrument and the data.
macro_rules! impl_calculator {
    (
        [$($gen:tt)*] $calc:ty, $data:ty => $out:ty;
        rejected { $($rvisit:ident($rkind:ident)),* $(,)? }
        custom { $($custom:tt)* }
        priced |$s:ident, $i:ident, $d:ident| $body:expr;
        $($visit:ident($kind:ty),)*
    ) => {
        impl<$($gen)*> ::ir_cashflows::InstrumentVisitor<$data> for $calc {
            type Output = $out;

            $($custom)*

            $(
                fn $visit(&self, $i: &$kind, $d: &$data) -> ::ir_core::errors::Result<$out> {
                    let $s = self;
                    $body
                }
            )*

            $(
                fn $rvisit(
                    &self,
                    _instrument: &$rkind,
                    _data: &$data,
                ) -> ::ir_core::errors::Result<$out> {
                    Err($crate::calculators::rejected(stringify!($calc), stringify!($rkind)))
                }
            )*
        }
    };
}

/// Appends the coupons with a par rate and no optionality (every kind
/// except `PaymentFixed`, the inflation coupon, CMS coupons and the
/// caps/floors) to the `priced` list of an [`impl_calculator!`] call.
macro_rules! with_rate_coupons {
    ($mac:ident! { $($head:tt)* }) => {
        $mac! {
            $($head)*
            visit_coupon_fixed(::ir_cashflows::CouponFixed),
            visit_coupon_fixed_compounding(::ir_cashflows::CouponFixedCompounding),
            visit_coupon_fixed_accrued_compounding(::ir_cashflows::CouponFixedAccruedCompounding),
            visit_coupon_fixed_fx_reset(::ir_cashflows::CouponFixedFxReset),
            visit_coupon_ibor(::ir_cashflows::CouponIbor),
            visit_coupon_ibor_spread(::ir_cashflows::CouponIborSpread),
            visit_coupon_ibor_gearing(::ir_cashflows::CouponIborGearing),
            visit_coupon_ibor_compounding(::ir_cashflows::CouponIborCompounding),
            visit_coupon_ibor_compounding_spread(::ir_cashflows::CouponIborCompoundingSpread),
            visit_coupon_ibor_compounding_simple_spread(
                ::ir_cashflows::CouponIborCompoundingSimpleSpread
            ),
            visit_coupon_ibor_compounding_flat_spread(
                ::ir_cashflows::CouponIborCompoundingFlatSpread
            ),
            visit_coupon_ibor_average(::ir_cashflows::CouponIborAverage),
            visit_coupon_ibor_average_fixing_dates(::ir_cashflows::CouponIborAverageFixingDates),
            visit_coupon_ibor_average_compounding(::ir_cashflows::CouponIborAverageCompounding),
            visit_coupon_ibor_average_flat_compounding_spread(
                ::ir_cashflows::CouponIborAverageFlatCompoundingSpread
            ),
            visit_coupon_ibor_fx_reset(::ir_cashflows::CouponIborFxReset),
            visit_coupon_on(::ir_cashflows::CouponON),
            visit_coupon_on_spread(::ir_cashflows::CouponONSpread),
            visit_coupon_on_compounded(::ir_cashflows::CouponONCompounded),
            visit_coupon_arithmetic_average_on(::ir_cashflows::CouponArithmeticAverageON),
            visit_coupon_arithmetic_average_on_spread_simplified(
                ::ir_cashflows::CouponArithmeticAverageONSpreadSimplified
            ),
            visit_ibor_interpolated_stub_coupon(::ir_cashflows::IborInterpolatedStubCoupon),
            visit_overnight_interpolated_stub_coupon(
                ::ir_cashflows::OvernightInterpolatedStubCoupon
            ),
        }
    };
}

// ── Calculators ───────────────────────────────────────────────────────────────

mod curve_sensitivity;
mod par_rate;
mod present_value;
mod volatility;

pub use curve_sensitivity::PresentValueCurveSensitivityDiscountingCalculator;
pub use par_rate::ParRateDiscountingCalculator;
pub use present_value::PresentValueDiscountingCalculator;
pub use volatility::{
    PresentValueCurveSensitivityVolatilityCalculator, PresentValueVolatilityCalculator,
};
