//! Market data shared by the pricing integration tests.

#![allow(dead_code)]

pub mod instruments;

use ir_currencies::currencies::{BRL, EUR, USD};
use ir_currencies::FxMatrix;
use ir_indexes::{cdi, estr, euribor, IndexPrice};
use ir_math::SabrParameters;
use ir_termstructures::{
    FlatVolatility, MulticurveProviderDiscount, PriceIndexCurve, SabrSwaptionVolatility, YieldCurve,
};
use ir_time::Period;

pub const EUR_USD: f64 = 1.1;
pub const USD_BRL: f64 = 5.0;

fn curve(name: &str, level: f64) -> YieldCurve {
    YieldCurve::new(
        name,
        &[0.25, 0.5, 1.0, 2.0, 5.0],
        &[level, level + 0.001, level + 0.002, level + 0.004, level + 0.008],
    )
    .unwrap()
}

/// Upward sloping curves for EUR, USD and BRL with every index the
/// instrument fixtures reference.
pub fn market() -> MulticurveProviderDiscount {
    let fx = FxMatrix::new()
        .with_rate(EUR, USD, EUR_USD)
        .unwrap()
        .with_rate(USD, BRL, USD_BRL)
        .unwrap();
    MulticurveProviderDiscount::new(fx)
        .with_discount_curve(EUR, curve("EUR Dsc", 0.010))
        .with_discount_curve(USD, curve("USD Dsc", 0.030))
        .with_discount_curve(BRL, curve("BRL Dsc", 0.100))
        .with_ibor_curve(euribor(Period::months(1)), curve("EUR Euribor 1M", 0.012))
        .with_ibor_curve(euribor(Period::months(3)), curve("EUR Euribor 3M", 0.015))
        .with_ibor_curve(euribor(Period::months(6)), curve("EUR Euribor 6M", 0.018))
        .with_overnight_curve(estr(), curve("EUR ESTR", 0.009))
        .with_overnight_curve(cdi(), curve("BRL CDI", 0.105))
        .with_price_index_curve(
            IndexPrice::new("EUR-HICPxT", EUR),
            PriceIndexCurve::new("EUR HICPxT", &[0.0, 1.0, 2.0], &[100.0, 102.0, 104.5]).unwrap(),
        )
}

pub fn caplet_black() -> FlatVolatility {
    FlatVolatility::black(0.35).unwrap()
}

pub fn caplet_normal() -> FlatVolatility {
    FlatVolatility::normal(0.006).unwrap()
}

pub fn swaption_sabr() -> SabrSwaptionVolatility {
    SabrSwaptionVolatility::new(SabrParameters::new(0.05, 0.5, 0.5, -0.25).unwrap())
}
