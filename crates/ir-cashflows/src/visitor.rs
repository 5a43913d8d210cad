//! Visitor dispatch over the closed set of instrument kinds.
//!
//! [`InstrumentVisitor`] has one required method per kind and no default
//! bodies, so a new kind cannot be added without every calculator deciding
//! what to do with it. A calculator that does not price a kind returns
//! [`ir_core::Error::UnsupportedInstrument`].
//!
//! The optional data parameter `D` carries the market data for calculators
//! that are not bound to one at construction; it defaults to `()` and may
//! be unsized, e.g. `dyn MulticurveProvider`.

use ir_core::errors::Result;

use crate::cap_floor::CapFloorIbor;
use crate::cashflow::PaymentFixed;
use crate::coupon_cms::{CapFloorCMS, CouponCMS};
use crate::coupon_fixed::{CouponFixed, CouponFixedAccruedCompounding, CouponFixedCompounding};
use crate::coupon_ibor::{CouponIbor, CouponIborGearing, CouponIborSpread};
use crate::coupon_ibor_average::{
    CouponIborAverage, CouponIborAverageCompounding, CouponIborAverageFixingDates,
    CouponIborAverageFlatCompoundingSpread,
};
use crate::coupon_ibor_compounding::{
    CouponIborCompounding, CouponIborCompoundingFlatSpread, CouponIborCompoundingSimpleSpread,
    CouponIborCompoundingSpread,
};
use crate::coupon_on::{CouponON, CouponONCompounded, CouponONSpread};
use crate::coupon_on_average::{
    CouponArithmeticAverageON, CouponArithmeticAverageONSpreadSimplified,
};
use crate::fx_reset::{CouponFixedFxReset, CouponIborFxReset};
use crate::inflation::CouponInflationZeroCouponMonthly;
use crate::interpolated_stub::{IborInterpolatedStubCoupon, OvernightInterpolatedStubCoupon};

/// A calculator over every instrument kind.
pub trait InstrumentVisitor<D: ?Sized = ()> {
    /// What the calculator produces.
    type Output;

    /// Visit a [`PaymentFixed`].
    fn visit_payment_fixed(&self, instrument: &PaymentFixed, data: &D) -> Result<Self::Output>;

    /// Visit a [`CouponFixed`].
    fn visit_coupon_fixed(&self, instrument: &CouponFixed, data: &D) -> Result<Self::Output>;

    /// Visit a [`CouponFixedCompounding`].
    fn visit_coupon_fixed_compounding(
        &self,
        instrument: &CouponFixedCompounding,
        data: &D,
    ) -> Result<Self::Output>;

    /// Visit a [`CouponFixedAccruedCompounding`].
    fn visit_coupon_fixed_accrued_compounding(
        &self,
        instrument: &CouponFixedAccruedCompounding,
        data: &D,
    ) -> Result<Self::Output>;

    /// Visit a [`CouponFixedFxReset`].
    fn visit_coupon_fixed_fx_reset(
        &self,
        instrument: &CouponFixedFxReset,
        data: &D,
    ) -> Result<Self::Output>;

    /// Visit a [`CouponIbor`].
    fn visit_coupon_ibor(&self, instrument: &CouponIbor, data: &D) -> Result<Self::Output>;

    /// Visit a [`CouponIborSpread`].
    fn visit_coupon_ibor_spread(
        &self,
        instrument: &CouponIborSpread,
        data: &D,
    ) -> Result<Self::Output>;

    /// Visit a [`CouponIborGearing`].
    fn visit_coupon_ibor_gearing(
        &self,
        instrument: &CouponIborGearing,
        data: &D,
    ) -> Result<Self::Output>;

    /// Visit a [`CouponIborCompounding`].
    fn visit_coupon_ibor_compounding(
        &self,
        instrument: &CouponIborCompounding,
        data: &D,
    ) -> Result<Self::Output>;

    /// Visit a [`CouponIborCompoundingSpread`].
    fn visit_coupon_ibor_compounding_spread(
        &self,
        instrument: &CouponIborCompoundingSpread,
        data: &D,
    ) -> Result<Self::Output>;

    /// Visit a [`CouponIborCompoundingSimpleSpread`].
    fn visit_coupon_ibor_compounding_simple_spread(
        &self,
        instrument: &CouponIborCompoundingSimpleSpread,
        data: &D,
    ) -> Result<Self::Output>;

    /// Visit a [`CouponIborCompoundingFlatSpread`].
    fn visit_coupon_ibor_compounding_flat_spread(
        &self,
        instrument: &CouponIborCompoundingFlatSpread,
        data: &D,
    ) -> Result<Self::Output>;

    /// Visit a [`CouponIborAverage`].
    fn visit_coupon_ibor_average(
        &self,
        instrument: &CouponIborAverage,
        data: &D,
    ) -> Result<Self::Output>;

    /// Visit a [`CouponIborAverageFixingDates`].
    fn visit_coupon_ibor_average_fixing_dates(
        &self,
        instrument: &CouponIborAverageFixingDates,
        data: &D,
    ) -> Result<Self::Output>;

    /// Visit a [`CouponIborAverageCompounding`].
    fn visit_coupon_ibor_average_compounding(
        &self,
        instrument: &CouponIborAverageCompounding,
        data: &D,
    ) -> Result<Self::Output>;

    /// Visit a [`CouponIborAverageFlatCompoundingSpread`].
    fn visit_coupon_ibor_average_flat_compounding_spread(
        &self,
        instrument: &CouponIborAverageFlatCompoundingSpread,
        data: &D,
    ) -> Result<Self::Output>;

    /// Visit a [`CouponIborFxReset`].
    fn visit_coupon_ibor_fx_reset(
        &self,
        instrument: &CouponIborFxReset,
        data: &D,
    ) -> Result<Self::Output>;

    /// Visit a [`CouponON`].
    fn visit_coupon_on(&self, instrument: &CouponON, data: &D) -> Result<Self::Output>;

    /// Visit a [`CouponONSpread`].
    fn visit_coupon_on_spread(&self, instrument: &CouponONSpread, data: &D) -> Result<Self::Output>;

    /// Visit a [`CouponONCompounded`].
    fn visit_coupon_on_compounded(
        &self,
        instrument: &CouponONCompounded,
        data: &D,
    ) -> Result<Self::Output>;

    /// Visit a [`CouponArithmeticAverageON`].
    fn visit_coupon_arithmetic_average_on(
        &self,
        instrument: &CouponArithmeticAverageON,
        data: &D,
    ) -> Result<Self::Output>;

    /// Visit a [`CouponArithmeticAverageONSpreadSimplified`].
    fn visit_coupon_arithmetic_average_on_spread_simplified(
        &self,
        instrument: &CouponArithmeticAverageONSpreadSimplified,
        data: &D,
    ) -> Result<Self::Output>;

    /// Visit a [`CouponCMS`].
    fn visit_coupon_cms(&self, instrument: &CouponCMS, data: &D) -> Result<Self::Output>;

    /// Visit a [`CapFloorIbor`].
    fn visit_cap_floor_ibor(&self, instrument: &CapFloorIbor, data: &D) -> Result<Self::Output>;

    /// Visit a [`CapFloorCMS`].
    fn visit_cap_floor_cms(&self, instrument: &CapFloorCMS, data: &D) -> Result<Self::Output>;

    /// Visit a [`IborInterpolatedStubCoupon`].
    fn visit_ibor_interpolated_stub_coupon(
        &self,
        instrument: &IborInterpolatedStubCoupon,
        data: &D,
    ) -> Result<Self::Output>;

    /// Visit a [`OvernightInterpolatedStubCoupon`].
    fn visit_overnight_interpolated_stub_coupon(
        &self,
        instrument: &OvernightInterpolatedStubCoupon,
        data: &D,
    ) -> Result<Self::Output>;

    /// Visit a [`CouponInflationZeroCouponMonthly`].
    fn visit_coupon_inflation_zero_coupon_monthly(
        &self,
        instrument: &CouponInflationZeroCouponMonthly,
        data: &D,
    ) -> Result<Self::Output>;
}

/// An instrument that dispatches to the matching [`InstrumentVisitor`]
/// method.
pub trait InstrumentDerivative {
    /// Dispatch with market data.
    fn accept_with<D: ?Sized, V>(&self, visitor: &V, data: &D) -> Result<V::Output>
    where
        V: InstrumentVisitor<D> + ?Sized;

    /// Dispatch to a visitor that needs no data.
    fn accept<V>(&self, visitor: &V) -> Result<V::Output>
    where
        V: InstrumentVisitor + ?Sized,
    {
        self.accept_with(visitor, &())
    }
}
