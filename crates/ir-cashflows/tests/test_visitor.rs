//! Visitor dispatch: every kind reaches exactly its own `visit_*` method.

mod common;

use common::all_payments;
use ir_cashflows::*;
use ir_core::errors::{Error, Result};
use ir_core::Real;

/// Reports which method was called.
struct Spy;

/// Scales the reference amount by the data passed to `accept_with`.
struct Scaled;

/// Prices nothing.
struct Nothing;

macro_rules! spy {
    ($($visit:ident: $ty:ty => $name:literal,)*) => {
        impl InstrumentVisitor for Spy {
            type Output = &'static str;
            $(
                fn $visit(&self, _: &$ty, _: &()) -> Result<&'static str> {
                    Ok($name)
                }
            )*
        }
    };
}

macro_rules! scaled {
    ($($visit:ident: $ty:ty,)*) => {
        impl InstrumentVisitor<Real> for Scaled {
            type Output = Real;
            $(
                fn $visit(&self, instrument: &$ty, factor: &Real) -> Result<Real> {
                    Ok(instrument.reference_amount() * factor)
                }
            )*
        }

        impl InstrumentVisitor for Nothing {
            type Output = ();
            $(
                fn $visit(&self, _: &$ty, _: &()) -> Result<()> {
                    Err(Error::UnsupportedInstrument {
                        calculator: "Nothing",
                        instrument: stringify!($ty),
                    })
                }
            )*
        }
    };
}

spy! {
    visit_payment_fixed: PaymentFixed => "PaymentFixed",
    visit_coupon_fixed: CouponFixed => "CouponFixed",
    visit_coupon_fixed_compounding: CouponFixedCompounding => "CouponFixedCompounding",
    visit_coupon_fixed_accrued_compounding: CouponFixedAccruedCompounding
        => "CouponFixedAccruedCompounding",
    visit_coupon_fixed_fx_reset: CouponFixedFxReset => "CouponFixedFxReset",
    visit_coupon_ibor: CouponIbor => "CouponIbor",
    visit_coupon_ibor_spread: CouponIborSpread => "CouponIborSpread",
    visit_coupon_ibor_gearing: CouponIborGearing => "CouponIborGearing",
    visit_coupon_ibor_compounding: CouponIborCompounding => "CouponIborCompounding",
    visit_coupon_ibor_compounding_spread: CouponIborCompoundingSpread
        => "CouponIborCompoundingSpread",
    visit_coupon_ibor_compounding_simple_spread: CouponIborCompoundingSimpleSpread
        => "CouponIborCompoundingSimpleSpread",
    visit_coupon_ibor_compounding_flat_spread: CouponIborCompoundingFlatSpread
        => "CouponIborCompoundingFlatSpread",
    visit_coupon_ibor_average: CouponIborAverage => "CouponIborAverage",
    visit_coupon_ibor_average_fixing_dates: CouponIborAverageFixingDates
        => "CouponIborAverageFixingDates",
    visit_coupon_ibor_average_compounding: CouponIborAverageCompounding
        => "CouponIborAverageCompounding",
    visit_coupon_ibor_average_flat_compounding_spread: CouponIborAverageFlatCompoundingSpread
        => "CouponIborAverageFlatCompoundingSpread",
    visit_coupon_ibor_fx_reset: CouponIborFxReset => "CouponIborFxReset",
    visit_coupon_on: CouponON => "CouponON",
    visit_coupon_on_spread: CouponONSpread => "CouponONSpread",
    visit_coupon_on_compounded: CouponONCompounded => "CouponONCompounded",
    visit_coupon_arithmetic_average_on: CouponArithmeticAverageON => "CouponArithmeticAverageON",
    visit_coupon_arithmetic_average_on_spread_simplified: CouponArithmeticAverageONSpreadSimplified
        => "CouponArithmeticAverageONSpreadSimplified",
    visit_coupon_cms: CouponCMS => "CouponCMS",
    visit_cap_floor_ibor: CapFloorIbor => "CapFloorIbor",
    visit_cap_floor_cms: CapFloorCMS => "CapFloorCMS",
    visit_ibor_interpolated_stub_coupon: IborInterpolatedStubCoupon => "IborInterpolatedStubCoupon",
    visit_overnight_interpolated_stub_coupon: OvernightInterpolatedStubCoupon
        => "OvernightInterpolatedStubCoupon",
    visit_coupon_inflation_zero_coupon_monthly: CouponInflationZeroCouponMonthly
        => "CouponInflationZeroCouponMonthly",
}

scaled! {
    visit_payment_fixed: PaymentFixed,
    visit_coupon_fixed: CouponFixed,
    visit_coupon_fixed_compounding: CouponFixedCompounding,
    visit_coupon_fixed_accrued_compounding: CouponFixedAccruedCompounding,
    visit_coupon_fixed_fx_reset: CouponFixedFxReset,
    visit_coupon_ibor: CouponIbor,
    visit_coupon_ibor_spread: CouponIborSpread,
    visit_coupon_ibor_gearing: CouponIborGearing,
    visit_coupon_ibor_compounding: CouponIborCompounding,
    visit_coupon_ibor_compounding_spread: CouponIborCompoundingSpread,
    visit_coupon_ibor_compounding_simple_spread: CouponIborCompoundingSimpleSpread,
    visit_coupon_ibor_compounding_flat_spread: CouponIborCompoundingFlatSpread,
    visit_coupon_ibor_average: CouponIborAverage,
    visit_coupon_ibor_average_fixing_dates: CouponIborAverageFixingDates,
    visit_coupon_ibor_average_compounding: CouponIborAverageCompounding,
    visit_coupon_ibor_average_flat_compounding_spread: CouponIborAverageFlatCompoundingSpread,
    visit_coupon_ibor_fx_reset: CouponIborFxReset,
    visit_coupon_on: CouponON,
    visit_coupon_on_spread: CouponONSpread,
    visit_coupon_on_compounded: CouponONCompounded,
    visit_coupon_arithmetic_average_on: CouponArithmeticAverageON,
    visit_coupon_arithmetic_average_on_spread_simplified: CouponArithmeticAverageONSpreadSimplified,
    visit_coupon_cms: CouponCMS,
    visit_cap_floor_ibor: CapFloorIbor,
    visit_cap_floor_cms: CapFloorCMS,
    visit_ibor_interpolated_stub_coupon: IborInterpolatedStubCoupon,
    visit_overnight_interpolated_stub_coupon: OvernightInterpolatedStubCoupon,
    visit_coupon_inflation_zero_coupon_monthly: CouponInflationZeroCouponMonthly,
}

// ───────────────────────── dispatch ─────────────────────────

#[test]
fn test_every_kind_dispatches_to_its_method() {
    let payments = all_payments();
    assert_eq!(payments.len(), 28);
    for (name, payment) in &payments {
        assert_eq!(payment.accept(&Spy).unwrap(), *name);
        assert_eq!(payment.kind_name(), *name);
    }
}

#[test]
fn test_concrete_types_dispatch_without_wrapping() {
    assert_eq!(common::coupon_ibor().accept(&Spy).unwrap(), "CouponIbor");
    assert_eq!(common::coupon_on().accept(&Spy).unwrap(), "CouponON");
    assert_eq!(common::coupon_cms().accept(&Spy).unwrap(), "CouponCMS");
}

#[test]
fn test_data_reaches_the_visitor() {
    for (_, payment) in all_payments() {
        let scaled = payment.accept_with(&Scaled, &2.0).unwrap();
        assert_eq!(scaled, 2.0 * payment.reference_amount());
    }
}

#[test]
fn test_unsupported_kinds_report_an_error() {
    let err = common::coupon_ibor().accept(&Nothing).unwrap_err();
    assert!(matches!(err, Error::UnsupportedInstrument { calculator: "Nothing", .. }));
    assert!(err.to_string().contains("CouponIbor"));
}

#[test]
fn test_visitors_work_behind_dyn() {
    let visitor: &dyn InstrumentVisitor<Output = &'static str> = &Spy;
    assert_eq!(common::coupon_ibor().accept(visitor).unwrap(), "CouponIbor");
}
