//! `MultipleCurrencyAmount`: a bag of amounts keyed by currency.

use std::collections::BTreeMap;
use std::fmt;

use ir_core::Real;

use crate::currency::{Currency, CurrencyAmount};

/// Amounts in several currencies, at most one entry per currency.
///
/// Present values of cross-currency instruments are reported in this form;
/// conversion to a single currency is left to the caller through an
/// [`FxMatrix`](crate::FxMatrix).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipleCurrencyAmount {
    amounts: BTreeMap<Currency, Real>,
}

impl MultipleCurrencyAmount {
    /// An empty amount.
    pub fn new() -> Self {
        Self::default()
    }

    /// A single-currency amount.
    pub fn of(currency: Currency, amount: Real) -> Self {
        let mut amounts = BTreeMap::new();
        amounts.insert(currency, amount);
        Self { amounts }
    }

    /// The amount held in `currency`, if any.
    pub fn amount(&self, currency: &Currency) -> Option<Real> {
        self.amounts.get(currency).copied()
    }

    /// The amount held in `currency` as a [`CurrencyAmount`], if any.
    pub fn currency_amount(&self, currency: &Currency) -> Option<CurrencyAmount> {
        self.amount(currency).map(|a| CurrencyAmount::of(*currency, a))
    }

    /// Add an amount in a single currency.
    pub fn plus_amount(mut self, currency: Currency, amount: Real) -> Self {
        *self.amounts.entry(currency).or_insert(0.0) += amount;
        self
    }

    /// Add all entries of `other`.
    pub fn plus(mut self, other: &MultipleCurrencyAmount) -> Self {
        for (ccy, amount) in &other.amounts {
            *self.amounts.entry(*ccy).or_insert(0.0) += amount;
        }
        self
    }

    /// Multiply every entry by `factor`.
    pub fn multiplied_by(mut self, factor: Real) -> Self {
        for amount in self.amounts.values_mut() {
            *amount *= factor;
        }
        self
    }

    /// Number of currencies held.
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    /// Return `true` if no currency is held.
    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    /// Iterate over the entries in currency-code order.
    pub fn iter(&self) -> impl Iterator<Item = CurrencyAmount> + '_ {
        self.amounts
            .iter()
            .map(|(ccy, amount)| CurrencyAmount::of(*ccy, *amount))
    }
}

impl From<CurrencyAmount> for MultipleCurrencyAmount {
    fn from(ca: CurrencyAmount) -> Self {
        Self::of(ca.currency, ca.amount)
    }
}

impl fmt::Display for MultipleCurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|ca| ca.to_string()).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}
