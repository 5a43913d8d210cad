//! # ir-pricing
//!
//! Pricing of the instruments in `ir-cashflows` against the market data in
//! `ir-termstructures`.
//!
//! ## Layers
//!
//! - [`formulas`]: undiscounted Black and Bachelier option prices with
//!   their forward and volatility derivatives.
//! - [`methods`]: one pricing method per instrument family. Linear
//!   instruments implement [`DiscountingMethod`] and [`ParRateMethod`];
//!   options are priced by [`CapFloorIborVolatilityMethod`] and
//!   [`CmsSabrReplicationMethod`].
//! - [`calculators`]: visitors dispatching every instrument kind to its
//!   method, e.g. [`PresentValueDiscountingCalculator`].
//! - [`sensitivity`] / [`parameter_sensitivity`]: point sensitivities and
//!   their projection on curve nodes; [`FiniteDifferenceParameterSensitivity`]
//!   computes the same by bumping.
//! - [`config`]: numerical settings, loadable from TOML.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Numerical settings for pricing.
pub mod config;

/// Black and Bachelier option formulas.
pub mod formulas;

/// Point sensitivities to discount factors and forwards.
pub mod sensitivity;

/// Sensitivities to curve nodes.
pub mod parameter_sensitivity;

/// Pricing methods per instrument family.
pub mod methods;

/// Visitor calculators over every instrument kind.
pub mod calculators;

/// Node sensitivities by finite difference.
pub mod finite_difference;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calculators::{
    ParRateDiscountingCalculator, PresentValueCurveSensitivityDiscountingCalculator,
    PresentValueCurveSensitivityVolatilityCalculator, PresentValueDiscountingCalculator,
    PresentValueVolatilityCalculator,
};
pub use config::PricingConfig;
pub use finite_difference::FiniteDifferenceParameterSensitivity;
pub use formulas::{bachelier_price, black_price, OptionPrice};
pub use methods::{
    CapFloorIborVolatilityMethod, CmsSabrReplicationMethod, DiscountingMethod, ParRateMethod,
};
pub use parameter_sensitivity::ParameterSensitivity;
pub use sensitivity::{
    ForwardSensitivity, MultipleCurrencyMulticurveSensitivity, MulticurveSensitivity,
};
