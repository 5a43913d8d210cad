//! Coupon capability traits and the fields coupons share.
//!
//! A coupon is a payment accruing interest on a notional over a period of
//! `payment_year_fraction` years. Capabilities beyond that are separate
//! traits, so a calculator can ask for "any coupon referencing an Ibor
//! index" without knowing whether it compounds or averages.

use ir_core::{errors::Result, Rate, Real, Time};
use ir_currencies::Currency;
use ir_indexes::{IborIndex, Index, IndexDeposit};

use crate::cashflow::CashFlow;
use crate::validation;

// ── Shared fields ─────────────────────────────────────────────────────────────

/// Fields common to every coupon.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponData {
    currency: Currency,
    payment_time: Time,
    payment_year_fraction: Real,
    notional: Real,
}

impl CouponData {
    /// Create the shared coupon fields.
    ///
    /// # Errors
    /// Returns an error if `payment_time` or `payment_year_fraction` is
    /// negative.
    pub fn new(
        currency: Currency,
        payment_time: Time,
        payment_year_fraction: Real,
        notional: Real,
    ) -> Result<Self> {
        validation::non_negative("payment time", payment_time)?;
        validation::non_negative("payment year fraction", payment_year_fraction)?;
        Ok(Self {
            currency,
            payment_time,
            payment_year_fraction,
            notional,
        })
    }

    /// Payment currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Payment time.
    pub fn payment_time(&self) -> Time {
        self.payment_time
    }

    /// Accrual factor of the payment period.
    pub fn payment_year_fraction(&self) -> Real {
        self.payment_year_fraction
    }

    /// Notional, signed: negative for paid coupons.
    pub fn notional(&self) -> Real {
        self.notional
    }

    /// The same fields with another notional.
    pub fn with_notional(&self, notional: Real) -> Self {
        Self {
            notional,
            ..self.clone()
        }
    }
}

impl_structural_hash!(CouponData {
    hash: [currency],
    real: [payment_time, payment_year_fraction, notional]
});

/// One Ibor fixing: the index, when it fixes, and the deposit period it
/// refers to.
#[derive(Debug, Clone, PartialEq)]
pub struct IborFixing {
    index: IborIndex,
    fixing_time: Time,
    fixing_period_start_time: Time,
    fixing_period_end_time: Time,
    fixing_accrual_factor: Real,
}

impl IborFixing {
    /// Create a fixing description.
    ///
    /// # Errors
    /// Returns an error unless `0 ≤ fixing_time ≤ start ≤ end` and the
    /// accrual factor is non-negative.
    pub fn new(
        index: IborIndex,
        fixing_time: Time,
        fixing_period_start_time: Time,
        fixing_period_end_time: Time,
        fixing_accrual_factor: Real,
    ) -> Result<Self> {
        validation::fixing_period(fixing_time, fixing_period_start_time, fixing_period_end_time)?;
        validation::non_negative("fixing accrual factor", fixing_accrual_factor)?;
        Ok(Self {
            index,
            fixing_time,
            fixing_period_start_time,
            fixing_period_end_time,
            fixing_accrual_factor,
        })
    }

    /// The index.
    pub fn index(&self) -> &IborIndex {
        &self.index
    }

    /// Fixing time.
    pub fn fixing_time(&self) -> Time {
        self.fixing_time
    }

    /// Start of the deposit period.
    pub fn fixing_period_start_time(&self) -> Time {
        self.fixing_period_start_time
    }

    /// End of the deposit period.
    pub fn fixing_period_end_time(&self) -> Time {
        self.fixing_period_end_time
    }

    /// Accrual factor of the deposit period in the index convention.
    pub fn fixing_accrual_factor(&self) -> Real {
        self.fixing_accrual_factor
    }
}

impl_structural_hash!(IborFixing {
    hash: [index],
    real: [
        fixing_time,
        fixing_period_start_time,
        fixing_period_end_time,
        fixing_accrual_factor
    ]
});

// ── Capability traits ─────────────────────────────────────────────────────────

/// A payment accruing on a notional.
pub trait Coupon: CashFlow {
    /// The shared coupon fields.
    fn coupon_data(&self) -> &CouponData;

    /// Accrual factor of the payment period.
    fn payment_year_fraction(&self) -> Real {
        self.coupon_data().payment_year_fraction()
    }

    /// Notional.
    fn notional(&self) -> Real {
        self.coupon_data().notional()
    }

    /// The same coupon with another notional. Amounts derived from the
    /// notional are rescaled proportionally.
    ///
    /// # Errors
    /// Returns [`ir_core::Error::UnsupportedOperation`] for coupons whose
    /// amount cannot be re-derived from the notional alone.
    fn with_notional(&self, notional: Real) -> Result<Self>
    where
        Self: Sized;
}

/// A coupon whose amount depends on an index fixing.
pub trait FloatingCoupon: Coupon {
    /// Time of the (first) fixing.
    fn fixing_time(&self) -> Time;
}

/// A coupon paying on a single deposit period of an index.
pub trait DepositIndexCoupon<I: IndexDeposit>: Coupon {
    /// The index.
    fn index(&self) -> &I;

    /// Start of the deposit period.
    fn fixing_period_start_time(&self) -> Time;

    /// End of the deposit period.
    fn fixing_period_end_time(&self) -> Time;

    /// Accrual factor of the deposit period.
    fn fixing_accrual_factor(&self) -> Real;
}

/// A coupon compounding an index over several sub-periods.
pub trait DepositIndexCompoundingCoupon<I: IndexDeposit>: Coupon {
    /// The index.
    fn index(&self) -> &I;

    /// Accrual factors of the sub-periods in the payment convention.
    fn payment_accrual_factors(&self) -> &[Real];

    /// Fixing time of each sub-period.
    fn fixing_times(&self) -> &[Time];

    /// Deposit start of each sub-period.
    fn fixing_period_start_times(&self) -> &[Time];

    /// Deposit end of each sub-period.
    fn fixing_period_end_times(&self) -> &[Time];

    /// Deposit accrual factor of each sub-period.
    fn fixing_period_accrual_factors(&self) -> &[Real];
}

/// A cap or floor on a rate.
pub trait CapFloor {
    /// The strike.
    fn strike(&self) -> Rate;

    /// `true` for a cap, `false` for a floor.
    fn is_cap(&self) -> bool;

    /// Payoff for a given fixing: `max(ω·(fixing − strike), 0)` with
    /// `ω = +1` for a cap and `−1` for a floor.
    fn pay_off(&self, fixing: Rate) -> Real {
        let omega = if self.is_cap() { 1.0 } else { -1.0 };
        (omega * (fixing - self.strike())).max(0.0)
    }
}

impl IborFixing {
    /// Check the index currency against the coupon currency.
    pub(crate) fn check_currency(&self, coupon: &CouponData) -> Result<()> {
        validation::same_currency(&coupon.currency(), &self.index.currency())
    }
}
