//! # ir-math
//!
//! Numerical building blocks for pricing:
//!
//! - the standard normal distribution (delegating to `statrs`),
//! - linear interpolation with node sensitivities,
//! - adaptive Gauss-Kronrod quadrature,
//! - the Hagan SABR implied-volatility approximation.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Standard normal distribution.
pub mod distributions;

/// Numerical integration.
pub mod integrals;

/// 1D interpolation.
pub mod interpolation;

/// SABR implied volatility.
pub mod sabr;

pub use distributions::{normal_cdf, normal_pdf};
pub use integrals::{GaussKronrodAdaptive, Integrator};
pub use interpolation::{Interpolation1D, LinearInterpolation};
pub use sabr::{sabr_volatility, SabrParameters};
