//! One instrument of every kind, priced against [`super::market`].

#![allow(dead_code)]

use ir_cashflows::*;
use ir_core::Real;
use ir_currencies::currencies::{BRL, EUR, USD};
use ir_indexes::{cdi, estr, euribor, IndexPrice, IndexSwap};
use ir_time::Period;

pub const NOTIONAL: Real = 1_000_000.0;

pub fn coupon_data(notional: Real) -> CouponData {
    CouponData::new(EUR, 0.5, 0.2514, notional).unwrap()
}

pub fn fixing_3m() -> IborFixing {
    IborFixing::new(euribor(Period::months(3)), 0.2466, 0.25, 0.5, 0.2514).unwrap()
}

pub fn coupon_ibor() -> CouponIbor {
    CouponIbor::new(coupon_data(NOTIONAL), fixing_3m()).unwrap()
}

pub fn coupon_on() -> CouponON {
    CouponON::new(coupon_data(NOTIONAL), estr(), 0.25, 0.5, 0.2514, NOTIONAL).unwrap()
}

pub fn compounding_periods() -> CompoundingPeriods {
    CompoundingPeriods::new(
        euribor(Period::months(1)),
        vec![0.0833, 0.0833, 0.0833],
        vec![0.25, 0.3333, 0.4166],
        vec![0.2555, 0.3388, 0.4221],
        vec![0.3388, 0.4221, 0.5054],
        vec![0.0833, 0.0833, 0.0833],
    )
    .unwrap()
}

pub fn averaging() -> AveragingFixings {
    AveragingFixings::new(
        vec![0.5, 0.5],
        vec![0.25, 0.3],
        vec![0.25, 0.3],
        vec![0.5, 0.55],
        vec![0.25, 0.25],
    )
    .unwrap()
}

pub fn swap_fixed_ibor(start: Real) -> SwapFixedIbor {
    let fixed = (1..=2)
        .map(|i| {
            CouponFixed::new(CouponData::new(EUR, start + i as Real, 1.0, 1.0).unwrap(), 0.0)
                .unwrap()
        })
        .collect();
    let ibor = (1..=4)
        .map(|i| {
            let s = start + 0.5 * (i - 1) as Real;
            let fixing =
                IborFixing::new(euribor(Period::months(6)), s, s, s + 0.5, 0.5).unwrap();
            CouponIbor::new(CouponData::new(EUR, s + 0.5, 0.5, -1.0).unwrap(), fixing).unwrap()
        })
        .collect();
    SwapFixedIbor::fixed_ibor(Annuity::new(fixed).unwrap(), Annuity::new(ibor).unwrap()).unwrap()
}

pub fn coupon_cms() -> CouponCMS {
    let index = IndexSwap::new(
        "EUR-Swap-2Y",
        Period::years(1),
        Period::years(2),
        euribor(Period::months(6)),
    )
    .unwrap();
    CouponCMS::new(
        CouponData::new(EUR, 1.5, 1.0, NOTIONAL).unwrap(),
        0.5,
        index,
        swap_fixed_ibor(0.5),
        0.5,
    )
    .unwrap()
}

/// One value of each of the 28 kinds, with the name `kind_name` reports.
pub fn all_payments() -> Vec<(&'static str, Payment)> {
    let fx_reset = FxReset::new(USD, 0.24, 0.25).unwrap();
    vec![
        ("PaymentFixed", PaymentFixed::new(EUR, 1.0, NOTIONAL).unwrap().into()),
        ("CouponFixed", CouponFixed::new(coupon_data(NOTIONAL), 0.02).unwrap().into()),
        (
            "CouponFixedCompounding",
            CouponFixedCompounding::new(coupon_data(NOTIONAL), 0.02, vec![0.125, 0.125])
                .unwrap()
                .into(),
        ),
        (
            "CouponFixedAccruedCompounding",
            CouponFixedAccruedCompounding::new(
                CouponData::new(BRL, 1.0, 1.0, NOTIONAL).unwrap(),
                0.1,
            )
            .unwrap()
            .into(),
        ),
        (
            "CouponFixedFxReset",
            CouponFixedFxReset::new(coupon_data(NOTIONAL), 0.02, fx_reset.clone())
                .unwrap()
                .into(),
        ),
        ("CouponIbor", coupon_ibor().into()),
        (
            "CouponIborSpread",
            CouponIborSpread::new(coupon_data(NOTIONAL), fixing_3m(), 0.001).unwrap().into(),
        ),
        (
            "CouponIborGearing",
            CouponIborGearing::new(coupon_data(NOTIONAL), fixing_3m(), 0.001, 2.0)
                .unwrap()
                .into(),
        ),
        (
            "CouponIborCompounding",
            CouponIborCompounding::new(coupon_data(NOTIONAL), compounding_periods(), NOTIONAL)
                .unwrap()
                .into(),
        ),
        (
            "CouponIborCompoundingSpread",
            CouponIborCompoundingSpread::new(
                coupon_data(NOTIONAL),
                compounding_periods(),
                NOTIONAL,
                0.001,
            )
            .unwrap()
            .into(),
        ),
        (
            "CouponIborCompoundingSimpleSpread",
            CouponIborCompoundingSimpleSpread::new(
                coupon_data(NOTIONAL),
                compounding_periods(),
                NOTIONAL,
                0.001,
            )
            .unwrap()
            .into(),
        ),
        (
            "CouponIborCompoundingFlatSpread",
            CouponIborCompoundingFlatSpread::new(
                coupon_data(NOTIONAL),
                compounding_periods(),
                0.0,
                0.001,
            )
            .unwrap()
            .into(),
        ),
        (
            "CouponIborAverage",
            CouponIborAverage::new(
                coupon_data(NOTIONAL),
                fixing_3m(),
                IborFixing::new(euribor(Period::months(6)), 0.2466, 0.25, 0.75, 0.5).unwrap(),
                0.5,
                0.5,
            )
            .unwrap()
            .into(),
        ),
        (
            "CouponIborAverageFixingDates",
            CouponIborAverageFixingDates::new(
                coupon_data(NOTIONAL),
                euribor(Period::months(3)),
                averaging(),
                0.0,
            )
            .unwrap()
            .into(),
        ),
        (
            "CouponIborAverageCompounding",
            CouponIborAverageCompounding::new(
                coupon_data(NOTIONAL),
                euribor(Period::months(3)),
                vec![0.125, 0.125],
                vec![averaging(), averaging()],
                NOTIONAL,
                0.0,
            )
            .unwrap()
            .into(),
        ),
        (
            "CouponIborAverageFlatCompoundingSpread",
            CouponIborAverageFlatCompoundingSpread::new(
                coupon_data(NOTIONAL),
                euribor(Period::months(3)),
                vec![0.125, 0.125],
                vec![averaging(), averaging()],
                0.0,
                0.0,
                0.001,
            )
            .unwrap()
            .into(),
        ),
        (
            "CouponIborFxReset",
            CouponIborFxReset::new(coupon_data(NOTIONAL), fixing_3m(), 0.0, fx_reset)
                .unwrap()
                .into(),
        ),
        ("CouponON", coupon_on().into()),
        (
            "CouponONSpread",
            coupon_on().with_spread(0.001).unwrap().into(),
        ),
        (
            "CouponONCompounded",
            CouponONCompounded::new(
                CouponData::new(BRL, 1.0, 1.0, NOTIONAL).unwrap(),
                cdi(),
                vec![0.0, 0.5],
                vec![0.5, 1.0],
                vec![0.5, 0.5],
                NOTIONAL,
            )
            .unwrap()
            .into(),
        ),
        (
            "CouponArithmeticAverageON",
            CouponArithmeticAverageON::new(
                coupon_data(NOTIONAL),
                estr(),
                vec![0.25, 0.375, 0.5],
                vec![0.1257, 0.1257],
                0.0,
            )
            .unwrap()
            .into(),
        ),
        (
            "CouponArithmeticAverageONSpreadSimplified",
            CouponArithmeticAverageONSpreadSimplified::new(
                coupon_data(NOTIONAL),
                estr(),
                0.25,
                0.5,
                0.2514,
                0.001,
            )
            .unwrap()
            .into(),
        ),
        ("CouponCMS", coupon_cms().into()),
        (
            "CapFloorIbor",
            CapFloorIbor::from_coupon(&coupon_ibor(), 0.02, true).unwrap().into(),
        ),
        (
            "CapFloorCMS",
            CapFloorCMS::from_coupon(&coupon_cms(), 0.02, false).unwrap().into(),
        ),
        (
            "IborInterpolatedStubCoupon",
            IborInterpolatedStubCoupon::new(coupon_ibor(), 0.5, 0.2514, 0.75, 0.5)
                .unwrap()
                .into(),
        ),
        (
            "OvernightInterpolatedStubCoupon",
            OvernightInterpolatedStubCoupon::new(coupon_on(), 0.4, 0.15, 0.6, 0.35)
                .unwrap()
                .into(),
        ),
        (
            "CouponInflationZeroCouponMonthly",
            CouponInflationZeroCouponMonthly::new(
                coupon_data(NOTIONAL),
                IndexPrice::new("EUR-HICPxT", EUR),
                100.0,
                0.4,
                false,
            )
            .unwrap()
            .into(),
        ),
    ]
}
