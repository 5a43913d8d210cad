//! The closed set of instrument kinds as one sum type.
//!
//! [`Payment`] lets heterogeneous legs live in one `Vec` and be priced by
//! any [`InstrumentVisitor`]. Each concrete type also implements
//! [`InstrumentDerivative`] on its own, so typed code can dispatch without
//! wrapping.

use ir_core::{errors::Result, Real, Time};
use ir_currencies::Currency;

use crate::cap_floor::CapFloorIbor;
use crate::cashflow::{CashFlow, PaymentFixed};
use crate::coupon::Coupon;
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
use crate::visitor::{InstrumentDerivative, InstrumentVisitor};

// Generates the `Payment` enum, its delegating accessors, `From` for every
// kind, and the `InstrumentDerivative` impl of every kind and of `Payment`.
macro_rules! payments {
    ($( $(#[$doc:meta])* $variant:ident($ty:ty) => $visit:ident, )*) => {
        /// Any instrument kind.
        #[derive(Debug, Clone, PartialEq, Hash)]
        pub enum Payment {
            $( $(#[$doc])* $variant($ty), )*
        }

        impl Payment {
            /// Name of the concrete kind, e.g. `"CouponIbor"`.
            pub fn kind_name(&self) -> &'static str {
                match self {
                    $( Payment::$variant(_) => stringify!($variant), )*
                }
            }

            /// The same payment with another notional (amount for
            /// [`PaymentFixed`]).
            ///
            /// # Errors
            /// Returns [`ir_core::Error::UnsupportedOperation`] for the
            /// FX-reset coupons.
            pub fn with_notional(&self, notional: Real) -> Result<Payment> {
                match self {
                    $( Payment::$variant(p) => p.with_notional(notional).map(Payment::$variant), )*
                }
            }
        }

        impl CashFlow for Payment {
            fn currency(&self) -> Currency {
                match self {
                    $( Payment::$variant(p) => p.currency(), )*
                }
            }

            fn payment_time(&self) -> Time {
                match self {
                    $( Payment::$variant(p) => p.payment_time(), )*
                }
            }

            fn reference_amount(&self) -> Real {
                match self {
                    $( Payment::$variant(p) => p.reference_amount(), )*
                }
            }
        }

        impl InstrumentDerivative for Payment {
            fn accept_with<D: ?Sized, V>(&self, visitor: &V, data: &D) -> Result<V::Output>
            where
                V: InstrumentVisitor<D> + ?Sized,
            {
                match self {
                    $( Payment::$variant(p) => visitor.$visit(p, data), )*
                }
            }
        }

        $(
            impl InstrumentDerivative for $ty {
                fn accept_with<D: ?Sized, V>(&self, visitor: &V, data: &D) -> Result<V::Output>
                where
                    V: InstrumentVisitor<D> + ?Sized,
                {
                    visitor.$visit(self, data)
                }
            }

            impl From<$ty> for Payment {
                fn from(p: $ty) -> Self {
                    Payment::$variant(p)
                }
            }
        )*
    };
}

payments! {
    /// A known amount.
    PaymentFixed(PaymentFixed) => visit_payment_fixed,
    /// Fixed-rate coupon.
    CouponFixed(CouponFixed) => visit_coupon_fixed,
    /// Fixed rate compounded over sub-periods.
    CouponFixedCompounding(CouponFixedCompounding) => visit_coupon_fixed_compounding,
    /// Fixed rate paying the annually compounded accrued notional.
    CouponFixedAccruedCompounding(CouponFixedAccruedCompounding)
        => visit_coupon_fixed_accrued_compounding,
    /// Fixed coupon with FX-reset notional.
    CouponFixedFxReset(CouponFixedFxReset) => visit_coupon_fixed_fx_reset,
    /// Ibor coupon.
    CouponIbor(CouponIbor) => visit_coupon_ibor,
    /// Ibor coupon with spread.
    CouponIborSpread(CouponIborSpread) => visit_coupon_ibor_spread,
    /// Ibor coupon with gearing factor and spread.
    CouponIborGearing(CouponIborGearing) => visit_coupon_ibor_gearing,
    /// Compounded Ibor coupon.
    CouponIborCompounding(CouponIborCompounding) => visit_coupon_ibor_compounding,
    /// Compounded Ibor coupon with compounded spread.
    CouponIborCompoundingSpread(CouponIborCompoundingSpread)
        => visit_coupon_ibor_compounding_spread,
    /// Compounded Ibor coupon with simple spread.
    CouponIborCompoundingSimpleSpread(CouponIborCompoundingSimpleSpread)
        => visit_coupon_ibor_compounding_simple_spread,
    /// Flat-compounded Ibor coupon with spread.
    CouponIborCompoundingFlatSpread(CouponIborCompoundingFlatSpread)
        => visit_coupon_ibor_compounding_flat_spread,
    /// Weighted average of two Ibor fixings.
    CouponIborAverage(CouponIborAverage) => visit_coupon_ibor_average,
    /// Ibor coupon averaging several fixing dates.
    CouponIborAverageFixingDates(CouponIborAverageFixingDates)
        => visit_coupon_ibor_average_fixing_dates,
    /// Compounded averaged Ibor coupon.
    CouponIborAverageCompounding(CouponIborAverageCompounding)
        => visit_coupon_ibor_average_compounding,
    /// Flat-compounded averaged Ibor coupon with spread.
    CouponIborAverageFlatCompoundingSpread(CouponIborAverageFlatCompoundingSpread)
        => visit_coupon_ibor_average_flat_compounding_spread,
    /// Ibor coupon with FX-reset notional.
    CouponIborFxReset(CouponIborFxReset) => visit_coupon_ibor_fx_reset,
    /// Overnight coupon.
    CouponON(CouponON) => visit_coupon_on,
    /// Overnight coupon with spread.
    CouponONSpread(CouponONSpread) => visit_coupon_on_spread,
    /// Overnight coupon paying the compounded notional.
    CouponONCompounded(CouponONCompounded) => visit_coupon_on_compounded,
    /// Arithmetic-average overnight coupon.
    CouponArithmeticAverageON(CouponArithmeticAverageON) => visit_coupon_arithmetic_average_on,
    /// Simplified arithmetic-average overnight coupon with spread.
    CouponArithmeticAverageONSpreadSimplified(CouponArithmeticAverageONSpreadSimplified)
        => visit_coupon_arithmetic_average_on_spread_simplified,
    /// CMS coupon.
    CouponCMS(CouponCMS) => visit_coupon_cms,
    /// Ibor caplet/floorlet.
    CapFloorIbor(CapFloorIbor) => visit_cap_floor_ibor,
    /// CMS caplet/floorlet.
    CapFloorCMS(CapFloorCMS) => visit_cap_floor_cms,
    /// Ibor stub coupon interpolating two tenors.
    IborInterpolatedStubCoupon(IborInterpolatedStubCoupon) => visit_ibor_interpolated_stub_coupon,
    /// Overnight stub coupon interpolating two tenors.
    OvernightInterpolatedStubCoupon(OvernightInterpolatedStubCoupon)
        => visit_overnight_interpolated_stub_coupon,
    /// Zero-coupon inflation coupon.
    CouponInflationZeroCouponMonthly(CouponInflationZeroCouponMonthly)
        => visit_coupon_inflation_zero_coupon_monthly,
}
