//! # ir-termstructures
//!
//! Market data consumed by pricing:
//!
//! * [`YieldCurve`]: interpolated zero-rate curve used both for discounting
//!   and, as a pseudo-discount curve, for index forwards;
//! * [`PriceIndexCurve`]: projected price-index levels;
//! * [`MulticurveProvider`]: lookup of discount factors, forwards, price
//!   indexes and FX rates by currency / index;
//! * volatility surfaces and the [`VolatilityProvider`] bundle handed to
//!   option pricing.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Interpolated zero-rate curve.
pub mod yield_curve;

/// Interpolated price-index curve.
pub mod price_index_curve;

/// Multicurve market-data provider.
pub mod multicurve;

/// Cap/floor and swaption volatility surfaces.
pub mod volatility;

/// Multicurve data bundled with volatility surfaces.
pub mod volatility_provider;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use multicurve::{MulticurveProvider, MulticurveProviderDiscount};
pub use price_index_curve::PriceIndexCurve;
pub use volatility::{
    CapletVolatility, FlatVolatility, SabrSwaptionVolatility, SwaptionVolatility,
    VolatilityModel,
};
pub use volatility_provider::VolatilityProvider;
pub use yield_curve::YieldCurve;
