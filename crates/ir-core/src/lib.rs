//! # ir-core
//!
//! Core types and error definitions shared by the interest-rate analytics
//! crates.
//!
//! This crate provides the foundational building blocks used across the
//! workspace: scalar type aliases, the error hierarchy with its `ensure!`
//! macro, and helpers to hash values that carry floating-point
//! fields.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Structural hashing of floating-point fields.
pub mod hashing;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for array sizes / indices.
pub type Size = usize;

/// A rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// A spread over a reference rate.
pub type Spread = Real;

/// A discount factor in [0, 1].
pub type DiscountFactor = Real;

/// A volatility level expressed as a decimal.
pub type Volatility = Real;

/// A time measurement in years from the valuation date.
pub type Time = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use hashing::HashReal;
