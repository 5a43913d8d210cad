use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use ir_cashflows::{
    Annuity, CapFloorCMS, CouponCMS, CouponData, CouponFixed, CouponIbor, IborFixing, Swap,
    SwapFixedIbor,
};
use ir_currencies::{currencies::EUR, FxMatrix};
use ir_indexes::{euribor, IndexSwap};
use ir_math::SabrParameters;
use ir_pricing::{
    FiniteDifferenceParameterSensitivity, ParameterSensitivity,
    PresentValueCurveSensitivityDiscountingCalculator, PresentValueDiscountingCalculator,
    PresentValueVolatilityCalculator,
};
use ir_termstructures::{
    MulticurveProviderDiscount, SabrSwaptionVolatility, VolatilityProvider, YieldCurve,
};
use ir_time::Period;

fn curve(name: &str, level: f64) -> YieldCurve {
    let rates = [level, level + 0.002, level + 0.004, level + 0.008, level + 0.01];
    YieldCurve::new(name, &[0.5, 1.0, 2.0, 5.0, 10.0], &rates)
        .expect("benchmark curve should be valid")
}

fn market() -> MulticurveProviderDiscount {
    MulticurveProviderDiscount::new(FxMatrix::new())
        .with_discount_curve(EUR, curve("EUR Dsc", 0.01))
        .with_ibor_curve(euribor(Period::months(6)), curve("EUR Euribor 6M", 0.015))
}

/// Receive fixed annually, pay Euribor 6M, over `years` starting at `start`.
fn swap(start: f64, years: usize) -> SwapFixedIbor {
    let fixed = (1..=years)
        .map(|i| {
            let data = CouponData::new(EUR, start + i as f64, 1.0, 1e6).expect("valid coupon");
            CouponFixed::new(data, 0.02).expect("valid coupon")
        })
        .collect();
    let ibor = (0..2 * years)
        .map(|i| {
            let s = start + 0.5 * i as f64;
            let fixing = IborFixing::new(euribor(Period::months(6)), s, s, s + 0.5, 0.5)
                .expect("valid fixing");
            CouponIbor::new(CouponData::new(EUR, s + 0.5, 0.5, -1e6).expect("valid coupon"), fixing)
                .expect("valid coupon")
        })
        .collect();
    Swap::fixed_ibor(
        Annuity::new(fixed).expect("valid leg"),
        Annuity::new(ibor).expect("valid leg"),
    )
    .expect("valid swap")
}

fn bench_swap_present_value(c: &mut Criterion) {
    let mc = market();
    let swap = swap(0.5, 10);
    c.bench_function("swap_10y_present_value", |b| {
        b.iter(|| {
            PresentValueDiscountingCalculator
                .swap(black_box(&swap), black_box(&mc))
                .expect("pricing should succeed")
        })
    });
}

fn bench_swap_sensitivities(c: &mut Criterion) {
    let mc = market();
    let swap = swap(0.5, 10);
    let fd = FiniteDifferenceParameterSensitivity::default();
    let mut group = c.benchmark_group("swap_10y_node_sensitivities");
    group.bench_function("analytic", |b| {
        b.iter(|| {
            let points = swap
                .fixed_leg()
                .payments()
                .iter()
                .map(|p| PresentValueCurveSensitivityDiscountingCalculator.compute(p, &mc))
                .chain(
                    swap.ibor_leg()
                        .payments()
                        .iter()
                        .map(|p| PresentValueCurveSensitivityDiscountingCalculator.compute(p, &mc)),
                )
                .try_fold(ir_pricing::MultipleCurrencyMulticurveSensitivity::new(), |s, p| {
                    p.map(|p| s.plus(&p))
                })
                .expect("sensitivities should succeed");
            ParameterSensitivity::from_point_sensitivities(black_box(&points), &mc)
                .expect("projection should succeed")
        })
    });
    group.bench_function("finite_difference", |b| {
        b.iter(|| {
            fd.compute_with(&mc, |bumped| {
                PresentValueDiscountingCalculator.swap(black_box(&swap), bumped)
            })
            .expect("bumping should succeed")
        })
    });
    group.finish();
}

fn bench_cms_replication(c: &mut Criterion) {
    let mc = market();
    let parameters = SabrParameters::new(0.05, 0.5, 0.5, -0.25).expect("valid SABR");
    let sabr = SabrSwaptionVolatility::new(parameters);
    let vols = VolatilityProvider::new(&mc).with_swaption(&sabr);
    let index = IndexSwap::new(
        "EUR-Swap-5Y",
        Period::years(1),
        Period::years(5),
        euribor(Period::months(6)),
    )
    .expect("valid index");
    let coupon = CouponCMS::new(
        CouponData::new(EUR, 2.0, 1.0, 1e6).expect("valid coupon"),
        1.0,
        index,
        swap(1.0, 5),
        1.0,
    )
    .expect("valid coupon");
    let cap = CapFloorCMS::from_coupon(&coupon, 0.025, true).expect("valid cap");
    let calculator = PresentValueVolatilityCalculator::default();
    let mut group = c.benchmark_group("cms_replication");
    group.bench_function("coupon", |b| {
        b.iter(|| calculator.compute(black_box(&coupon), &vols).expect("pricing should succeed"))
    });
    group.bench_function("cap", |b| {
        b.iter(|| calculator.compute(black_box(&cap), &vols).expect("pricing should succeed"))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_swap_present_value,
    bench_swap_sensitivities,
    bench_cms_replication
);
criterion_main!(benches);
