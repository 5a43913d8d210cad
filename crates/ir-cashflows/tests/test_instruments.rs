//! Construction, value semantics and notional rescaling across all kinds.

mod common;

use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};

use approx::assert_relative_eq;
use common::{all_payments, coupon_data, fixing_3m, NOTIONAL};
use ir_cashflows::*;
use ir_core::errors::Error;
use ir_core::Real;
use ir_currencies::currencies::{BRL, EUR, GBP, USD};
use ir_indexes::{cdi, eonia, estr, euribor, IborIndex, IndexPrice, IndexSwap};
use ir_time::Period;
use proptest::prelude::*;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut h = DefaultHasher::new();
    value.hash(&mut h);
    h.finish()
}

// ───────────────────────── construction ─────────────────────────

#[test]
fn test_fixing_period_must_be_ordered() {
    let index = euribor(Period::months(3));
    let err = IborFixing::new(index.clone(), 0.2466, 0.5, 0.25, 0.2514).unwrap_err();
    assert!(matches!(err, Error::Precondition(_)));
    assert!(IborFixing::new(index, 0.3, 0.25, 0.5, 0.2514).is_err());
}

#[test]
fn test_negative_accrual_is_rejected() {
    assert!(CouponData::new(EUR, 0.5, -0.25, NOTIONAL).is_err());
    assert!(IborFixing::new(euribor(Period::months(3)), 0.2466, 0.25, 0.5, -0.2514).is_err());
}

#[test]
fn test_ibor_spread_amount() {
    let coupon = CouponIborSpread::new(
        CouponData::new(EUR, 0.5, 0.2514, 1_000_000.0).unwrap(),
        fixing_3m(),
        0.001,
    )
    .unwrap();
    assert_relative_eq!(coupon.spread_amount(), 251.4, max_relative = 1e-12);
}

#[test]
fn test_cap_floor_ibor_payoffs() {
    let cap = CapFloorIbor::from_coupon(&common::coupon_ibor(), 0.04, true).unwrap();
    assert_relative_eq!(cap.pay_off(0.05), 0.01, max_relative = 1e-12);
    assert_eq!(cap.pay_off(0.03), 0.0);
}

#[test]
fn test_fixed_compounding_accrued_notional() {
    let coupon =
        CouponFixedCompounding::new(coupon_data(NOTIONAL), 0.04, vec![0.25, 0.25, 0.25, 0.25])
            .unwrap();
    assert_relative_eq!(
        coupon.notional_accrued(),
        NOTIONAL * 1.01_f64.powi(4),
        max_relative = 1e-14
    );
}

// ───────────────────────── value semantics ─────────────────────────

#[test]
fn test_equal_values_hash_equally() {
    for ((_, a), (_, b)) in all_payments().into_iter().zip(all_payments()) {
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }
}

#[test]
fn test_kinds_are_distinct() {
    let payments = all_payments();
    for (i, (_, a)) in payments.iter().enumerate() {
        for (_, b) in payments.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
    let hashes: HashSet<u64> = payments.iter().map(|(_, p)| hash_of(p)).collect();
    assert_eq!(hashes.len(), payments.len());
}

#[test]
fn test_signed_zero_hashes_like_zero() {
    let a = PaymentFixed::new(EUR, 1.0, 0.0).unwrap();
    let b = PaymentFixed::new(EUR, 1.0, -0.0).unwrap();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

/// Every variant differs from `base` in one field; each must compare unequal
/// and hash differently.
fn assert_fields_matter<T: PartialEq + Hash + Debug>(base: &T, variants: Vec<(&str, T)>) {
    for (field, variant) in &variants {
        assert_ne!(base, variant, "changing {field} kept equality");
        assert_ne!(hash_of(base), hash_of(variant), "changing {field} kept the hash");
    }
}

fn ibor_fixing(
    index: IborIndex,
    fixing: Real,
    start: Real,
    end: Real,
    accrual: Real,
) -> IborFixing {
    IborFixing::new(index, fixing, start, end, accrual).unwrap()
}

/// Compounding periods with the last entry of vector `which` replaced.
fn periods_with(which: usize, value: Real) -> CompoundingPeriods {
    let mut v = [
        vec![0.0833, 0.0833, 0.0833],
        vec![0.25, 0.3333, 0.4166],
        vec![0.2555, 0.3388, 0.4221],
        vec![0.3388, 0.4221, 0.5054],
        vec![0.0833, 0.0833, 0.0833],
    ];
    v[which][2] = value;
    let [factors, fixings, starts, ends, accruals] = v;
    CompoundingPeriods::new(euribor(Period::months(1)), factors, fixings, starts, ends, accruals)
        .unwrap()
}

/// Averaging fixings with the last entry of vector `which` replaced.
fn averaging_with(which: usize, value: Real) -> AveragingFixings {
    let mut v = [
        vec![0.5, 0.5],
        vec![0.25, 0.3],
        vec![0.25, 0.3],
        vec![0.5, 0.55],
        vec![0.25, 0.25],
    ];
    v[which][1] = value;
    let [weights, fixings, starts, ends, accruals] = v;
    AveragingFixings::new(weights, fixings, starts, ends, accruals).unwrap()
}

#[test]
fn test_field_changes_break_equality() {
    let a = common::coupon_ibor();
    let b = CouponIbor::new(
        coupon_data(NOTIONAL),
        IborFixing::new(euribor(Period::months(3)), 0.2466, 0.25, 0.5, 0.2515).unwrap(),
    )
    .unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_fixed_fields_matter() {
    let fixed = |data: CouponData, rate: Real| CouponFixed::new(data, rate).unwrap();
    assert_fields_matter(
        &fixed(coupon_data(NOTIONAL), 0.02),
        vec![
            ("currency", fixed(CouponData::new(USD, 0.5, 0.2514, NOTIONAL).unwrap(), 0.02)),
            ("payment time", fixed(CouponData::new(EUR, 0.6, 0.2514, NOTIONAL).unwrap(), 0.02)),
            ("year fraction", fixed(CouponData::new(EUR, 0.5, 0.25, NOTIONAL).unwrap(), 0.02)),
            ("notional", fixed(coupon_data(2.0 * NOTIONAL), 0.02)),
            ("rate", fixed(coupon_data(NOTIONAL), 0.021)),
        ],
    );

    let compounding = |rate: Real, factors: Vec<Real>| {
        CouponFixedCompounding::new(coupon_data(NOTIONAL), rate, factors).unwrap()
    };
    assert_fields_matter(
        &compounding(0.02, vec![0.125, 0.125]),
        vec![
            ("rate", compounding(0.021, vec![0.125, 0.125])),
            ("accrual factor", compounding(0.02, vec![0.125, 0.126])),
            ("sub-period count", compounding(0.02, vec![0.125, 0.125, 0.0])),
        ],
    );

    let accrued = |rate: Real| {
        CouponFixedAccruedCompounding::new(CouponData::new(BRL, 1.0, 1.0, NOTIONAL).unwrap(), rate)
            .unwrap()
    };
    assert_fields_matter(&accrued(0.1), vec![("rate", accrued(0.11))]);

    let fx = |reference, fixing, delivery| {
        let reset = FxReset::new(reference, fixing, delivery).unwrap();
        CouponFixedFxReset::new(coupon_data(NOTIONAL), 0.02, reset).unwrap()
    };
    assert_fields_matter(
        &fx(USD, 0.24, 0.25),
        vec![
            ("reference currency", fx(GBP, 0.24, 0.25)),
            ("FX fixing time", fx(USD, 0.23, 0.25)),
            ("FX delivery time", fx(USD, 0.24, 0.26)),
        ],
    );

    let payment = |ccy, t, amount| PaymentFixed::new(ccy, t, amount).unwrap();
    assert_fields_matter(
        &payment(EUR, 1.0, NOTIONAL),
        vec![
            ("currency", payment(USD, 1.0, NOTIONAL)),
            ("payment time", payment(EUR, 1.1, NOTIONAL)),
            ("amount", payment(EUR, 1.0, 2.0 * NOTIONAL)),
        ],
    );
}

#[test]
fn test_ibor_fields_matter() {
    let m3 = || euribor(Period::months(3));
    let ibor = |fixing| CouponIbor::new(coupon_data(NOTIONAL), fixing).unwrap();
    assert_fields_matter(
        &ibor(fixing_3m()),
        vec![
            ("index", ibor(ibor_fixing(euribor(Period::months(6)), 0.2466, 0.25, 0.5, 0.2514))),
            ("fixing time", ibor(ibor_fixing(m3(), 0.24, 0.25, 0.5, 0.2514))),
            ("fixing period start", ibor(ibor_fixing(m3(), 0.2466, 0.26, 0.5, 0.2514))),
            ("fixing period end", ibor(ibor_fixing(m3(), 0.2466, 0.25, 0.51, 0.2514))),
            ("fixing accrual", ibor(ibor_fixing(m3(), 0.2466, 0.25, 0.5, 0.2515))),
            ("notional", CouponIbor::new(coupon_data(2.0 * NOTIONAL), fixing_3m()).unwrap()),
        ],
    );

    let spread = |s| CouponIborSpread::new(coupon_data(NOTIONAL), fixing_3m(), s).unwrap();
    assert_fields_matter(&spread(0.001), vec![("spread", spread(0.002))]);

    let gearing = |s, f| CouponIborGearing::new(coupon_data(NOTIONAL), fixing_3m(), s, f).unwrap();
    assert_fields_matter(
        &gearing(0.001, 2.0),
        vec![("spread", gearing(0.002, 2.0)), ("factor", gearing(0.001, 3.0))],
    );

    let fx = |s, reference| {
        let reset = FxReset::new(reference, 0.24, 0.25).unwrap();
        CouponIborFxReset::new(coupon_data(NOTIONAL), fixing_3m(), s, reset).unwrap()
    };
    assert_fields_matter(
        &fx(0.0, USD),
        vec![("spread", fx(0.001, USD)), ("reference currency", fx(0.0, GBP))],
    );

    let cap = |strike, is_cap| {
        CapFloorIbor::new(coupon_data(NOTIONAL), fixing_3m(), strike, is_cap).unwrap()
    };
    assert_fields_matter(
        &cap(0.02, true),
        vec![("strike", cap(0.025, true)), ("cap or floor", cap(0.02, false))],
    );
}

#[test]
fn test_compounding_fields_matter() {
    let base = common::compounding_periods();
    let nudged = [0.0834, 0.42, 0.43, 0.51, 0.0834];
    let names = [
        "payment accrual factors",
        "fixing times",
        "fixing period starts",
        "fixing period ends",
        "fixing accrual factors",
    ];
    let mut variants: Vec<_> = names
        .iter()
        .zip(nudged)
        .enumerate()
        .map(|(i, (name, value))| (*name, periods_with(i, value)))
        .collect();
    variants.push((
        "index",
        CompoundingPeriods::new(
            euribor(Period::months(3)),
            vec![0.0833, 0.0833, 0.0833],
            vec![0.25, 0.3333, 0.4166],
            vec![0.2555, 0.3388, 0.4221],
            vec![0.3388, 0.4221, 0.5054],
            vec![0.0833, 0.0833, 0.0833],
        )
        .unwrap(),
    ));
    assert_fields_matter(&base, variants);

    let plain = |periods, accrued| {
        CouponIborCompounding::new(coupon_data(NOTIONAL), periods, accrued).unwrap()
    };
    assert_fields_matter(
        &plain(base.clone(), NOTIONAL),
        vec![
            ("periods", plain(periods_with(1, 0.42), NOTIONAL)),
            ("notional accrued", plain(base.clone(), 1.01 * NOTIONAL)),
        ],
    );

    let spread = |accrued, s| {
        CouponIborCompoundingSpread::new(coupon_data(NOTIONAL), base.clone(), accrued, s).unwrap()
    };
    assert_fields_matter(
        &spread(NOTIONAL, 0.001),
        vec![
            ("notional accrued", spread(1.01 * NOTIONAL, 0.001)),
            ("spread", spread(NOTIONAL, 0.002)),
        ],
    );

    let simple = |accrued, s| {
        CouponIborCompoundingSimpleSpread::new(coupon_data(NOTIONAL), base.clone(), accrued, s)
            .unwrap()
    };
    assert_fields_matter(
        &simple(NOTIONAL, 0.001),
        vec![
            ("notional accrued", simple(1.01 * NOTIONAL, 0.001)),
            ("spread", simple(NOTIONAL, 0.002)),
        ],
    );

    let flat = |accumulated, s| {
        CouponIborCompoundingFlatSpread::new(coupon_data(NOTIONAL), base.clone(), accumulated, s)
            .unwrap()
    };
    assert_fields_matter(
        &flat(0.0, 0.001),
        vec![("amount accumulated", flat(100.0, 0.001)), ("spread", flat(0.0, 0.002))],
    );
}

#[test]
fn test_averaging_fields_matter() {
    let base = common::averaging();
    let nudged = [0.6, 0.29, 0.31, 0.56, 0.26];
    let names = [
        "weights",
        "fixing times",
        "fixing period starts",
        "fixing period ends",
        "fixing accrual factors",
    ];
    let variants = names
        .iter()
        .zip(nudged)
        .enumerate()
        .map(|(i, (name, value))| (*name, averaging_with(i, value)))
        .collect();
    assert_fields_matter(&base, variants);

    let m3 = || euribor(Period::months(3));
    let m6_fixing = || ibor_fixing(euribor(Period::months(6)), 0.2466, 0.25, 0.75, 0.5);
    let average = |second, w1, w2| {
        CouponIborAverage::new(coupon_data(NOTIONAL), fixing_3m(), second, w1, w2).unwrap()
    };
    assert_fields_matter(
        &average(m6_fixing(), 0.5, 0.5),
        vec![
            ("second fixing", average(ibor_fixing(m3(), 0.2466, 0.25, 0.75, 0.5), 0.5, 0.5)),
            ("first weight", average(m6_fixing(), 0.4, 0.5)),
            ("second weight", average(m6_fixing(), 0.5, 0.6)),
        ],
    );

    let dates = |fixings, accrued| {
        CouponIborAverageFixingDates::new(coupon_data(NOTIONAL), m3(), fixings, accrued).unwrap()
    };
    assert_fields_matter(
        &dates(base.clone(), 0.0),
        vec![
            ("fixings", dates(averaging_with(3, 0.56), 0.0)),
            ("amount accrued", dates(base.clone(), 10.0)),
        ],
    );

    let compounding = |factors, fixings, accrued, fixed| {
        let data = coupon_data(NOTIONAL);
        CouponIborAverageCompounding::new(data, m3(), factors, fixings, accrued, fixed).unwrap()
    };
    let two = || vec![base.clone(), base.clone()];
    let shifted = vec![base.clone(), averaging_with(0, 0.6)];
    assert_fields_matter(
        &compounding(vec![0.125, 0.125], two(), NOTIONAL, 0.0),
        vec![
            ("payment accrual factors", compounding(vec![0.125, 0.126], two(), NOTIONAL, 0.0)),
            (
                "second period fixings",
                compounding(vec![0.125, 0.125], shifted, NOTIONAL, 0.0),
            ),
            ("notional accrued", compounding(vec![0.125, 0.125], two(), 1.01 * NOTIONAL, 0.0)),
            ("rate fixed", compounding(vec![0.125, 0.125], two(), NOTIONAL, 0.01)),
        ],
    );

    let flat = |accrued, fixed, s| {
        CouponIborAverageFlatCompoundingSpread::new(
            coupon_data(NOTIONAL),
            m3(),
            vec![0.125, 0.125],
            two(),
            accrued,
            fixed,
            s,
        )
        .unwrap()
    };
    assert_fields_matter(
        &flat(0.0, 0.0, 0.001),
        vec![
            ("amount accrued", flat(10.0, 0.0, 0.001)),
            ("rate fixed", flat(0.0, 0.01, 0.001)),
            ("spread", flat(0.0, 0.0, 0.002)),
        ],
    );
}

#[test]
fn test_overnight_fields_matter() {
    let on = |index, start, end, accrual, accrued| {
        CouponON::new(coupon_data(NOTIONAL), index, start, end, accrual, accrued).unwrap()
    };
    assert_fields_matter(
        &common::coupon_on(),
        vec![
            ("index", on(eonia(), 0.25, 0.5, 0.2514, NOTIONAL)),
            ("fixing period start", on(estr(), 0.26, 0.5, 0.2514, NOTIONAL)),
            ("fixing period end", on(estr(), 0.25, 0.51, 0.2514, NOTIONAL)),
            ("fixing accrual", on(estr(), 0.25, 0.5, 0.2515, NOTIONAL)),
            ("notional accrued", on(estr(), 0.25, 0.5, 0.2514, 1.01 * NOTIONAL)),
        ],
    );

    let spread = |s| common::coupon_on().with_spread(s).unwrap();
    assert_fields_matter(&spread(0.001), vec![("spread", spread(0.002))]);

    let compounded = |starts: &[Real], ends: &[Real], accruals: &[Real], accrued| {
        CouponONCompounded::new(
            CouponData::new(BRL, 1.0, 1.0, NOTIONAL).unwrap(),
            cdi(),
            starts.to_vec(),
            ends.to_vec(),
            accruals.to_vec(),
            accrued,
        )
        .unwrap()
    };
    let (starts, ends, accruals) = ([0.0, 0.5], [0.5, 1.0], [0.5, 0.5]);
    assert_fields_matter(
        &compounded(&starts, &ends, &accruals, NOTIONAL),
        vec![
            ("fixing period starts", compounded(&[0.0, 0.55], &ends, &accruals, NOTIONAL)),
            ("fixing period ends", compounded(&starts, &[0.5, 1.1], &accruals, NOTIONAL)),
            ("fixing accrual factors", compounded(&starts, &ends, &[0.5, 0.51], NOTIONAL)),
            ("notional accrued", compounded(&starts, &ends, &accruals, 1.01 * NOTIONAL)),
        ],
    );

    let average = |times, accruals, accrued| {
        CouponArithmeticAverageON::new(coupon_data(NOTIONAL), estr(), times, accruals, accrued)
            .unwrap()
    };
    assert_fields_matter(
        &average(vec![0.25, 0.375, 0.5], vec![0.1257, 0.1257], 0.0),
        vec![
            ("fixing period times", average(vec![0.25, 0.4, 0.5], vec![0.1257, 0.1257], 0.0)),
            ("fixing accrual factors", average(vec![0.25, 0.375, 0.5], vec![0.1257, 0.13], 0.0)),
            ("rate accrued", average(vec![0.25, 0.375, 0.5], vec![0.1257, 0.1257], 0.001)),
        ],
    );

    let simplified = |start, end, accrual, s| {
        CouponArithmeticAverageONSpreadSimplified::new(
            coupon_data(NOTIONAL),
            estr(),
            start,
            end,
            accrual,
            s,
        )
        .unwrap()
    };
    assert_fields_matter(
        &simplified(0.25, 0.5, 0.2514, 0.001),
        vec![
            ("fixing period start", simplified(0.26, 0.5, 0.2514, 0.001)),
            ("fixing period end", simplified(0.25, 0.51, 0.2514, 0.001)),
            ("fixing accrual", simplified(0.25, 0.5, 0.2515, 0.001)),
            ("spread", simplified(0.25, 0.5, 0.2514, 0.002)),
        ],
    );
}

#[test]
fn test_cms_fields_matter() {
    let index = |tenor| {
        IndexSwap::new("EUR-Swap", Period::years(1), tenor, euribor(Period::months(6))).unwrap()
    };
    let cms = |fixing, tenor, swap_start, settlement| {
        CouponCMS::new(
            CouponData::new(EUR, 1.5, 1.0, NOTIONAL).unwrap(),
            fixing,
            index(tenor),
            common::swap_fixed_ibor(swap_start),
            settlement,
        )
        .unwrap()
    };
    let two_years = Period::years(2);
    assert_fields_matter(
        &cms(0.5, two_years, 0.5, 0.5),
        vec![
            ("fixing time", cms(0.4, two_years, 0.5, 0.5)),
            ("index tenor", cms(0.5, Period::years(5), 0.5, 0.5)),
            ("underlying swap", cms(0.5, two_years, 0.6, 0.5)),
            ("settlement time", cms(0.5, two_years, 0.5, 0.6)),
        ],
    );

    let coupon = common::coupon_cms();
    let cap = |strike, is_cap| CapFloorCMS::from_coupon(&coupon, strike, is_cap).unwrap();
    assert_fields_matter(
        &cap(0.02, true),
        vec![("strike", cap(0.025, true)), ("cap or floor", cap(0.02, false))],
    );
}

#[test]
fn test_stub_and_inflation_fields_matter() {
    let stub = |full, t1, yf1, t2, yf2| {
        IborInterpolatedStubCoupon::new(full, t1, yf1, t2, yf2).unwrap()
    };
    let full = common::coupon_ibor;
    let doubled = CouponIbor::new(coupon_data(2.0 * NOTIONAL), fixing_3m()).unwrap();
    assert_fields_matter(
        &stub(full(), 0.5, 0.2514, 0.75, 0.5),
        vec![
            ("full coupon", stub(doubled, 0.5, 0.2514, 0.75, 0.5)),
            ("first tenor end", stub(full(), 0.45, 0.2514, 0.75, 0.5)),
            ("first tenor accrual", stub(full(), 0.5, 0.25, 0.75, 0.5)),
            ("second tenor end", stub(full(), 0.5, 0.2514, 0.8, 0.5)),
            ("second tenor accrual", stub(full(), 0.5, 0.2514, 0.75, 0.51)),
        ],
    );

    let on_stub = |t1, t2| {
        OvernightInterpolatedStubCoupon::new(common::coupon_on(), t1, 0.15, t2, 0.35).unwrap()
    };
    assert_fields_matter(
        &on_stub(0.4, 0.6),
        vec![("first tenor end", on_stub(0.45, 0.6)), ("second tenor end", on_stub(0.4, 0.65))],
    );

    let inflation = |name: &str, start_value, end, pay_notional| {
        CouponInflationZeroCouponMonthly::new(
            coupon_data(NOTIONAL),
            IndexPrice::new(name, EUR),
            start_value,
            end,
            pay_notional,
        )
        .unwrap()
    };
    assert_fields_matter(
        &inflation("EUR-HICPxT", 100.0, 0.4, false),
        vec![
            ("price index", inflation("EUR-HICP", 100.0, 0.4, false)),
            ("index start value", inflation("EUR-HICPxT", 101.0, 0.4, false)),
            ("reference end time", inflation("EUR-HICPxT", 100.0, 0.45, false)),
            ("pays notional", inflation("EUR-HICPxT", 100.0, 0.4, true)),
        ],
    );
}

// ───────────────────────── notional ─────────────────────────

#[test]
fn test_with_notional_round_trip() {
    for (name, payment) in all_payments() {
        match payment.with_notional(2.0 * NOTIONAL) {
            Ok(doubled) => {
                assert_eq!(doubled.reference_amount(), 2.0 * NOTIONAL, "{name}");
                assert_eq!(doubled.with_notional(NOTIONAL).unwrap(), payment, "{name}");
            }
            Err(Error::UnsupportedOperation(_)) => {
                assert!(name.ends_with("FxReset"), "{name}");
            }
            Err(e) => panic!("{name}: {e}"),
        }
    }
}

#[test]
fn test_zero_notional_resets_accrual() {
    let coupon =
        CouponON::new(coupon_data(0.0), ir_indexes::estr(), 0.25, 0.5, 0.2514, 0.0).unwrap();
    let rescaled = coupon.with_notional(NOTIONAL).unwrap();
    assert_eq!(rescaled.notional_accrued(), NOTIONAL);
}

// ───────────────────────── payoff ─────────────────────────

proptest! {
    #[test]
    fn prop_cap_minus_floor_is_forward_minus_strike(
        strike in -0.02f64..0.1,
        fixing in -0.02f64..0.1,
    ) {
        let cap = CapFloorIbor::from_coupon(&common::coupon_ibor(), strike, true).unwrap();
        let floor = cap.with_opposite_side();
        prop_assert!(cap.pay_off(fixing) >= 0.0);
        prop_assert!(floor.pay_off(fixing) >= 0.0);
        let parity = cap.pay_off(fixing) - floor.pay_off(fixing) - (fixing - strike);
        prop_assert!(parity.abs() < 1e-15);
    }
}
