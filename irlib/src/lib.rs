//! # irlib
//!
//! Interest-rate coupon analytics: an immutable hierarchy of payments and
//! coupons, dispatched by visitor to discounting, Black/Bachelier and SABR
//! replication pricing, with curve sensitivities.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on it rather than on the individual
//! `ir-*` crates.
//!
//! ```rust
//! use irlib::cashflows::{CouponData, CouponFixed};
//! use irlib::currencies::{currencies::EUR, FxMatrix};
//! use irlib::pricing::PresentValueDiscountingCalculator;
//! use irlib::termstructures::{MulticurveProviderDiscount, YieldCurve};
//!
//! let mc = MulticurveProviderDiscount::new(FxMatrix::new())
//!     .with_discount_curve(EUR, YieldCurve::flat("EUR Dsc", 0.02).unwrap());
//! let coupon = CouponFixed::new(CouponData::new(EUR, 1.0, 1.0, 1e6).unwrap(), 0.03).unwrap();
//! let pv = PresentValueDiscountingCalculator.compute(&coupon, &mc).unwrap();
//! assert!((pv.amount(&EUR).unwrap() - 3e4 * (-0.02_f64).exp()).abs() < 1e-8);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use ir_core as core;

/// Tenors and frequencies.
pub use ir_time as time;

/// Interpolation, integration, distributions and the SABR formula.
pub use ir_math as math;

/// Currencies, amounts and FX rates.
pub use ir_currencies as currencies;

/// Ibor, overnight, swap and price indexes.
pub use ir_indexes as indexes;

/// Curves, multicurve providers and volatility surfaces.
pub use ir_termstructures as termstructures;

/// Payments, coupons, annuities and the instrument visitor.
pub use ir_cashflows as cashflows;

/// Pricing methods, calculators and sensitivities.
pub use ir_pricing as pricing;
