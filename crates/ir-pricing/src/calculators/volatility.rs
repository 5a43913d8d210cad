//! Calculators over a [`VolatilityProvider`]: linear instruments are
//! discounted on its curves, options use its surfaces.

use ir_cashflows::{CapFloorCMS, CapFloorIbor, CouponCMS, InstrumentDerivative};
use ir_core::errors::Result;
use ir_currencies::MultipleCurrencyAmount;
use ir_termstructures::VolatilityProvider;

use crate::config::PricingConfig;
use crate::methods::{CapFloorIborVolatilityMethod, CmsSabrReplicationMethod, DiscountingMethod};
use crate::sensitivity::MultipleCurrencyMulticurveSensitivity;

// ── Present value ─────────────────────────────────────────────────────────────

/// Present value of every instrument kind.
///
/// CMS coupons include their convexity adjustment, so they differ from
/// [`PresentValueDiscountingCalculator`] on the same curves.
///
/// [`PresentValueDiscountingCalculator`]: super::PresentValueDiscountingCalculator
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PresentValueVolatilityCalculator {
    cms: CmsSabrReplicationMethod,
    cap_floor_ibor: CapFloorIborVolatilityMethod,
}

impl PresentValueVolatilityCalculator {
    /// Create the calculator with the given numerical settings.
    pub fn new(config: PricingConfig) -> Self {
        Self {
            cms: CmsSabrReplicationMethod::new(config),
            cap_floor_ibor: CapFloorIborVolatilityMethod::new(),
        }
    }

    /// Present value of one instrument.
    pub fn compute<T>(
        &self,
        instrument: &T,
        volatilities: &VolatilityProvider<'_>,
    ) -> Result<MultipleCurrencyAmount>
    where
        T: InstrumentDerivative + ?Sized,
    {
        instrument.accept_with(self, volatilities)
    }
}

with_rate_coupons!(impl_calculator! {
    ['a] PresentValueVolatilityCalculator, VolatilityProvider<'a> => MultipleCurrencyAmount;
    rejected {}
    custom {
        fn visit_coupon_cms(
            &self,
            instrument: &CouponCMS,
            data: &VolatilityProvider<'a>,
        ) -> Result<MultipleCurrencyAmount> {
            self.cms.present_value_coupon(instrument, data)
        }

        fn visit_cap_floor_cms(
            &self,
            instrument: &CapFloorCMS,
            data: &VolatilityProvider<'a>,
        ) -> Result<MultipleCurrencyAmount> {
            self.cms.present_value_cap_floor(instrument, data)
        }

        fn visit_cap_floor_ibor(
            &self,
            instrument: &CapFloorIbor,
            data: &VolatilityProvider<'a>,
        ) -> Result<MultipleCurrencyAmount> {
            self.cap_floor_ibor.present_value(instrument, data)
        }
    }
    priced |_s, i, d| i.present_value(d.multicurve());
    visit_payment_fixed(::ir_cashflows::PaymentFixed),
    visit_coupon_inflation_zero_coupon_monthly(::ir_cashflows::CouponInflationZeroCouponMonthly),
});

// ── Curve sensitivity ─────────────────────────────────────────────────────────

/// Point sensitivities of [`PresentValueVolatilityCalculator`] at fixed
/// volatility parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PresentValueCurveSensitivityVolatilityCalculator {
    cms: CmsSabrReplicationMethod,
    cap_floor_ibor: CapFloorIborVolatilityMethod,
}

impl PresentValueCurveSensitivityVolatilityCalculator {
    /// Create the calculator with the given numerical settings.
    pub fn new(config: PricingConfig) -> Self {
        Self {
            cms: CmsSabrReplicationMethod::new(config),
            cap_floor_ibor: CapFloorIborVolatilityMethod::new(),
        }
    }

    /// Point sensitivities of one instrument.
    pub fn compute<T>(
        &self,
        instrument: &T,
        volatilities: &VolatilityProvider<'_>,
    ) -> Result<MultipleCurrencyMulticurveSensitivity>
    where
        T: InstrumentDerivative + ?Sized,
    {
        instrument.accept_with(self, volatilities)
    }
}

with_rate_coupons!(impl_calculator! {
    ['a] PresentValueCurveSensitivityVolatilityCalculator, VolatilityProvider<'a>
        => MultipleCurrencyMulticurveSensitivity;
    rejected {}
    custom {
        fn visit_coupon_cms(
            &self,
            instrument: &CouponCMS,
            data: &VolatilityProvider<'a>,
        ) -> Result<MultipleCurrencyMulticurveSensitivity> {
            self.cms.present_value_coupon_curve_sensitivity(instrument, data)
        }

        fn visit_cap_floor_cms(
            &self,
            instrument: &CapFloorCMS,
            data: &VolatilityProvider<'a>,
        ) -> Result<MultipleCurrencyMulticurveSensitivity> {
            self.cms.present_value_cap_floor_curve_sensitivity(instrument, data)
        }

        fn visit_cap_floor_ibor(
            &self,
            instrument: &CapFloorIbor,
            data: &VolatilityProvider<'a>,
        ) -> Result<MultipleCurrencyMulticurveSensitivity> {
            self.cap_floor_ibor.present_value_curve_sensitivity(instrument, data)
        }
    }
    priced |_s, i, d| i.present_value_curve_sensitivity(d.multicurve());
    visit_payment_fixed(::ir_cashflows::PaymentFixed),
    visit_coupon_inflation_zero_coupon_monthly(::ir_cashflows::CouponInflationZeroCouponMonthly),
});
