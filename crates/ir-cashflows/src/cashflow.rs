//! `CashFlow` trait and [`PaymentFixed`].
//!
//! A cash flow is an amount of money in a currency paid at a time measured
//! in years from the valuation date.

use std::fmt;

use ir_core::{errors::Result, Real, Time};
use ir_currencies::Currency;

use crate::validation;

/// Base trait for every payment.
pub trait CashFlow: fmt::Debug + Send + Sync {
    /// Payment currency.
    fn currency(&self) -> Currency;

    /// Payment time in years from the valuation date.
    fn payment_time(&self) -> Time;

    /// The amount the payment scales with: the notional for coupons, the
    /// paid amount for fixed payments.
    fn reference_amount(&self) -> Real;
}

/// A known amount paid at a given time.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentFixed {
    currency: Currency,
    payment_time: Time,
    amount: Real,
}

impl PaymentFixed {
    /// Create a fixed payment.
    ///
    /// # Errors
    /// Returns an error if `payment_time` is negative.
    pub fn new(currency: Currency, payment_time: Time, amount: Real) -> Result<Self> {
        validation::non_negative("payment time", payment_time)?;
        Ok(Self {
            currency,
            payment_time,
            amount,
        })
    }

    /// The paid amount.
    pub fn amount(&self) -> Real {
        self.amount
    }

    /// The same payment with `amount` as paid amount.
    pub fn with_notional(&self, amount: Real) -> Result<Self> {
        Ok(Self {
            amount,
            ..self.clone()
        })
    }
}

impl CashFlow for PaymentFixed {
    fn currency(&self) -> Currency {
        self.currency
    }

    fn payment_time(&self) -> Time {
        self.payment_time
    }

    fn reference_amount(&self) -> Real {
        self.amount
    }
}

impl_structural_hash!(PaymentFixed { hash: [currency], real: [payment_time, amount] });
