//! # ir-currencies
//!
//! Currency definitions, currency-tagged amounts and exchange rates.
//!
//! Present values are reported per currency ([`MultipleCurrencyAmount`]);
//! the [`FxMatrix`] converts them into a single reporting currency and
//! provides the spot rates used by FX-reset coupons.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Currency data and currency-tagged amounts.
pub mod currency;

/// Pre-defined world currencies.
pub mod currencies;

/// Spot exchange rates.
pub mod fx_matrix;

/// Amounts held in several currencies at once.
pub mod multiple_currency_amount;

pub use currency::{Currency, CurrencyAmount};
pub use fx_matrix::FxMatrix;
pub use multiple_currency_amount::MultipleCurrencyAmount;
