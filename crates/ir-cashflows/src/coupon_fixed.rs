//! Fixed-rate coupons.

use ir_core::{errors::Result, Rate, Real};

use crate::coupon::{Coupon, CouponData};
use crate::validation;

// ── CouponFixed ───────────────────────────────────────────────────────────────

/// A coupon paying `notional · rate · payment_year_fraction`.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponFixed {
    coupon: CouponData,
    fixed_rate: Rate,
    amount: Real,
}

impl CouponFixed {
    /// Create a fixed coupon.
    pub fn new(coupon: CouponData, fixed_rate: Rate) -> Result<Self> {
        let amount = coupon.notional() * fixed_rate * coupon.payment_year_fraction();
        Ok(Self {
            coupon,
            fixed_rate,
            amount,
        })
    }

    /// The fixed rate.
    pub fn fixed_rate(&self) -> Rate {
        self.fixed_rate
    }

    /// The paid amount.
    pub fn amount(&self) -> Real {
        self.amount
    }

    /// The same coupon paying another rate.
    pub fn with_rate(&self, fixed_rate: Rate) -> Result<Self> {
        Self::new(self.coupon.clone(), fixed_rate)
    }

    /// The same coupon with its rate shifted by `spread`.
    pub fn with_rate_shifted(&self, spread: Rate) -> Result<Self> {
        self.with_rate(self.fixed_rate + spread)
    }
}

impl Coupon for CouponFixed {
    fn coupon_data(&self) -> &CouponData {
        &self.coupon
    }

    fn with_notional(&self, notional: Real) -> Result<Self> {
        Self::new(self.coupon.with_notional(notional), self.fixed_rate)
    }
}

impl_coupon_cash_flow!(CouponFixed);
impl_structural_hash!(CouponFixed { hash: [coupon], real: [fixed_rate, amount] });

// ── CouponFixedCompounding ────────────────────────────────────────────────────

/// A fixed rate compounded over sub-periods.
///
/// The accrued notional `N · Π(1 + δᵢ · r)` is computed at construction;
/// the coupon pays the interest `accrued − N`.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponFixedCompounding {
    coupon: CouponData,
    fixed_rate: Rate,
    payment_accrual_factors: Vec<Real>,
    notional_accrued: Real,
}

impl CouponFixedCompounding {
    /// Create a compounded fixed coupon.
    ///
    /// # Errors
    /// Returns an error if no sub-period is given or an accrual factor is
    /// negative.
    pub fn new(
        coupon: CouponData,
        fixed_rate: Rate,
        payment_accrual_factors: Vec<Real>,
    ) -> Result<Self> {
        validation::not_empty("payment accrual factors", payment_accrual_factors.len())?;
        validation::all_non_negative("payment accrual factors", &payment_accrual_factors)?;
        let notional_accrued = payment_accrual_factors
            .iter()
            .fold(coupon.notional(), |acc, af| acc * (1.0 + af * fixed_rate));
        Ok(Self {
            coupon,
            fixed_rate,
            payment_accrual_factors,
            notional_accrued,
        })
    }

    /// The fixed rate.
    pub fn fixed_rate(&self) -> Rate {
        self.fixed_rate
    }

    /// Accrual factors of the compounding sub-periods.
    pub fn payment_accrual_factors(&self) -> &[Real] {
        &self.payment_accrual_factors
    }

    /// Notional compounded over all sub-periods.
    pub fn notional_accrued(&self) -> Real {
        self.notional_accrued
    }

    /// The paid amount, `notional_accrued − notional`.
    pub fn amount(&self) -> Real {
        self.notional_accrued - self.coupon.notional()
    }
}

impl Coupon for CouponFixedCompounding {
    fn coupon_data(&self) -> &CouponData {
        &self.coupon
    }

    fn with_notional(&self, notional: Real) -> Result<Self> {
        Self::new(
            self.coupon.with_notional(notional),
            self.fixed_rate,
            self.payment_accrual_factors.clone(),
        )
    }
}

impl_coupon_cash_flow!(CouponFixedCompounding);
impl_structural_hash!(CouponFixedCompounding {
    hash: [coupon],
    real: [fixed_rate, payment_accrual_factors, notional_accrued]
});

// ── CouponFixedAccruedCompounding ─────────────────────────────────────────────

/// A fixed rate compounded annually over the payment year fraction, paying
/// the accrued notional `N · (1 + r)^δ` (Brazilian-style fixed legs, paired
/// with compounded overnight coupons).
#[derive(Debug, Clone, PartialEq)]
pub struct CouponFixedAccruedCompounding {
    coupon: CouponData,
    fixed_rate: Rate,
    amount: Real,
}

impl CouponFixedAccruedCompounding {
    /// Create the coupon.
    ///
    /// # Errors
    /// Returns an error if `1 + fixed_rate` is not positive.
    pub fn new(coupon: CouponData, fixed_rate: Rate) -> Result<Self> {
        ir_core::ensure!(
            fixed_rate > -1.0,
            "annually compounded rate must exceed -100%, got {fixed_rate}"
        );
        let amount = coupon.notional() * (1.0 + fixed_rate).powf(coupon.payment_year_fraction());
        Ok(Self {
            coupon,
            fixed_rate,
            amount,
        })
    }

    /// The fixed rate.
    pub fn fixed_rate(&self) -> Rate {
        self.fixed_rate
    }

    /// The paid amount.
    pub fn amount(&self) -> Real {
        self.amount
    }
}

impl Coupon for CouponFixedAccruedCompounding {
    fn coupon_data(&self) -> &CouponData {
        &self.coupon
    }

    fn with_notional(&self, notional: Real) -> Result<Self> {
        Self::new(self.coupon.with_notional(notional), self.fixed_rate)
    }
}

impl_coupon_cash_flow!(CouponFixedAccruedCompounding);
impl_structural_hash!(CouponFixedAccruedCompounding {
    hash: [coupon],
    real: [fixed_rate, amount]
});
