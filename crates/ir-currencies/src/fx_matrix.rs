//! Spot FX rates and currency conversion.

use std::collections::HashMap;

use ir_core::errors::{Error, Result};
use ir_core::Real;

use crate::currency::{Currency, CurrencyAmount};
use crate::multiple_currency_amount::MultipleCurrencyAmount;

/// A registry of spot exchange rates.
///
/// Stores quoted rates and derives inverses and one-hop cross rates through
/// any common currency. A rate `source → target` is the number of units of
/// `target` bought by one unit of `source`.
#[derive(Debug, Clone, Default)]
pub struct FxMatrix {
    rates: HashMap<(Currency, Currency), Real>,
}

impl FxMatrix {
    /// Create an empty matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rate, returning the updated matrix.
    ///
    /// # Errors
    /// Returns an error if the rate is not strictly positive.
    pub fn with_rate(mut self, source: Currency, target: Currency, rate: Real) -> Result<Self> {
        ir_core::ensure!(
            rate > 0.0 && rate.is_finite(),
            "FX rate {source}/{target} must be positive, got {rate}"
        );
        self.rates.insert((source, target), rate);
        Ok(self)
    }

    /// Look up the rate `source → target`.
    ///
    /// # Errors
    /// Returns [`Error::MissingMarketData`] when neither a direct, inverse
    /// nor one-hop cross quote is available.
    pub fn rate(&self, source: &Currency, target: &Currency) -> Result<Real> {
        if source == target {
            return Ok(1.0);
        }
        if let Some(direct) = self.quote(source, target) {
            return Ok(direct);
        }

        // One-hop cross: source → X → target
        for (a, b) in self.rates.keys() {
            let x = if a == source {
                b
            } else if b == source {
                a
            } else {
                continue;
            };
            if let (Some(sx), Some(xt)) = (self.quote(source, x), self.quote(x, target)) {
                tracing::trace!(%source, %target, via = %x, "fx cross rate");
                return Ok(sx * xt);
            }
        }

        Err(Error::MissingMarketData(format!(
            "no exchange rate for {source}/{target}"
        )))
    }

    /// Convert every entry of `amount` into `target` and sum.
    pub fn convert(
        &self,
        amount: &MultipleCurrencyAmount,
        target: &Currency,
    ) -> Result<CurrencyAmount> {
        let mut total = 0.0;
        for ca in amount.iter() {
            total += ca.amount * self.rate(&ca.currency, target)?;
        }
        Ok(CurrencyAmount::of(*target, total))
    }

    fn quote(&self, source: &Currency, target: &Currency) -> Option<Real> {
        self.rates
            .get(&(*source, *target))
            .copied()
            .or_else(|| self.rates.get(&(*target, *source)).map(|r| 1.0 / r))
    }
}
