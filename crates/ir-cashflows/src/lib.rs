//! # ir-cashflows
//!
//! Immutable payment and coupon values in time space.
//!
//! Every instrument is built once, validated eagerly by its constructor,
//! and never mutated; `with_*` methods return new values. Shared fields
//! live in small structs ([`CouponData`], [`IborFixing`],
//! [`CompoundingPeriods`], ...) and the accessor contracts are expressed as
//! capability traits ([`CashFlow`], [`Coupon`], [`FloatingCoupon`],
//! [`DepositIndexCoupon`], ...).
//!
//! The closed set of instrument kinds is the [`Payment`] enum. Calculators
//! implement [`InstrumentVisitor`], which has one required method per kind,
//! and are dispatched through [`InstrumentDerivative::accept`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[macro_use]
mod macros;
mod validation;

// ── Modules ───────────────────────────────────────────────────────────────────

/// `CashFlow` trait and fixed payments.
pub mod cashflow;

/// `Coupon` capability traits and shared coupon fields.
pub mod coupon;

/// Fixed-rate coupons.
pub mod coupon_fixed;

/// Ibor coupons: plain, with spread, with gearing.
pub mod coupon_ibor;

/// Ibor coupons compounded over sub-periods.
pub mod coupon_ibor_compounding;

/// Ibor coupons averaging several fixings.
pub mod coupon_ibor_average;

/// Coupons whose notional resets on an FX fixing.
pub mod fx_reset;

/// Overnight coupons.
pub mod coupon_on;

/// Overnight coupons paying an arithmetic average.
pub mod coupon_on_average;

/// Constant-maturity-swap coupons and caps/floors.
pub mod coupon_cms;

/// Ibor caplets/floorlets.
pub mod cap_floor;

/// Stub coupons interpolating two index tenors.
pub mod interpolated_stub;

/// Zero-coupon inflation coupons.
pub mod inflation;

/// Annuities and swaps.
pub mod annuity;

/// Visitor dispatch.
pub mod visitor;

/// The `Payment` sum type.
pub mod payment;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use annuity::{Annuity, Swap, SwapFixedIbor};
pub use cap_floor::CapFloorIbor;
pub use cashflow::{CashFlow, PaymentFixed};
pub use coupon::{
    CapFloor, Coupon, CouponData, DepositIndexCompoundingCoupon, DepositIndexCoupon,
    FloatingCoupon, IborFixing,
};
pub use coupon_cms::{CapFloorCMS, CouponCMS};
pub use coupon_fixed::{CouponFixed, CouponFixedAccruedCompounding, CouponFixedCompounding};
pub use coupon_ibor::{CouponIbor, CouponIborGearing, CouponIborSpread};
pub use coupon_ibor_average::{
    AveragingFixings, CouponIborAverage, CouponIborAverageCompounding,
    CouponIborAverageFixingDates, CouponIborAverageFlatCompoundingSpread,
};
pub use coupon_ibor_compounding::{
    CompoundingPeriods, CouponIborCompounding, CouponIborCompoundingFlatSpread,
    CouponIborCompoundingSimpleSpread, CouponIborCompoundingSpread,
};
pub use coupon_on::{CouponON, CouponONCompounded, CouponONSpread};
pub use coupon_on_average::{CouponArithmeticAverageON, CouponArithmeticAverageONSpreadSimplified};
pub use fx_reset::{CouponFixedFxReset, CouponIborFxReset, FxReset};
pub use inflation::CouponInflationZeroCouponMonthly;
pub use interpolated_stub::{
    IborInterpolatedStubCoupon, InterpolatedStubCoupon, OvernightInterpolatedStubCoupon,
};
pub use payment::Payment;
pub use visitor::{InstrumentDerivative, InstrumentVisitor};
