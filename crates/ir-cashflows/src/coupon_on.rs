//! Overnight coupons: compounded daily over the fixing period.
//!
//! The daily compounding of an overnight index over `[s, e]` telescopes, so
//! the forward-projected payment depends only on `P(s)/P(e)` on the
//! overnight curve. Once the period has started, the known part sits in
//! `notional_accrued` and `s` moves to the next unfixed day.

use ir_core::{errors::Result, Real, Spread, Time};
use ir_indexes::{Index, IndexON};

use crate::coupon::{Coupon, CouponData, DepositIndexCoupon, FloatingCoupon};
use crate::validation;

fn check_period(start: Time, end: Time, accrual: Real) -> Result<()> {
    validation::fixing_period(start, start, end)?;
    validation::non_negative("fixing period accrual factor", accrual)
}

// ── CouponON ──────────────────────────────────────────────────────────────────

/// Pays `notional_accrued · Π(1 + δⱼ·rⱼ) − N` over the overnight fixings of
/// the remaining period.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponON {
    coupon: CouponData,
    index: IndexON,
    fixing_period_start_time: Time,
    fixing_period_end_time: Time,
    fixing_period_accrual_factor: Real,
    notional_accrued: Real,
}

impl CouponON {
    /// Create an overnight coupon.
    ///
    /// # Errors
    /// Returns an error unless `0 ≤ start ≤ end`, the accrual factor is
    /// non-negative and the index currency is the coupon currency.
    pub fn new(
        coupon: CouponData,
        index: IndexON,
        fixing_period_start_time: Time,
        fixing_period_end_time: Time,
        fixing_period_accrual_factor: Real,
        notional_accrued: Real,
    ) -> Result<Self> {
        validation::same_currency(&coupon.currency(), &index.currency())?;
        check_period(
            fixing_period_start_time,
            fixing_period_end_time,
            fixing_period_accrual_factor,
        )?;
        Ok(Self {
            coupon,
            index,
            fixing_period_start_time,
            fixing_period_end_time,
            fixing_period_accrual_factor,
            notional_accrued,
        })
    }

    /// Notional compounded over the fixings already published.
    pub fn notional_accrued(&self) -> Real {
        self.notional_accrued
    }

    /// The same coupon with a simple spread on top.
    pub fn with_spread(&self, spread: Spread) -> Result<CouponONSpread> {
        CouponONSpread::new(
            self.coupon.clone(),
            self.index.clone(),
            self.fixing_period_start_time,
            self.fixing_period_end_time,
            self.fixing_period_accrual_factor,
            self.notional_accrued,
            spread,
        )
    }
}

impl Coupon for CouponON {
    fn coupon_data(&self) -> &CouponData {
        &self.coupon
    }

    fn with_notional(&self, notional: Real) -> Result<Self> {
        let accrued = validation::rescaled_notional_accrued(
            self.notional_accrued,
            self.coupon.notional(),
            notional,
        );
        Self::new(
            self.coupon.with_notional(notional),
            self.index.clone(),
            self.fixing_period_start_time,
            self.fixing_period_end_time,
            self.fixing_period_accrual_factor,
            accrued,
        )
    }
}

impl FloatingCoupon for CouponON {
    fn fixing_time(&self) -> Time {
        self.fixing_period_start_time
    }
}

impl DepositIndexCoupon<IndexON> for CouponON {
    fn index(&self) -> &IndexON {
        &self.index
    }

    fn fixing_period_start_time(&self) -> Time {
        self.fixing_period_start_time
    }

    fn fixing_period_end_time(&self) -> Time {
        self.fixing_period_end_time
    }

    fn fixing_accrual_factor(&self) -> Real {
        self.fixing_period_accrual_factor
    }
}

impl_structural_hash!(CouponON {
    hash: [coupon, index],
    real: [
        fixing_period_start_time,
        fixing_period_end_time,
        fixing_period_accrual_factor,
        notional_accrued
    ]
});

// ── CouponONSpread ────────────────────────────────────────────────────────────

/// [`CouponON`] plus a simple spread paying `spread · δ · N`.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponONSpread {
    coupon: CouponData,
    index: IndexON,
    fixing_period_start_time: Time,
    fixing_period_end_time: Time,
    fixing_period_accrual_factor: Real,
    notional_accrued: Real,
    spread: Spread,
    spread_amount: Real,
}

impl CouponONSpread {
    /// Create the coupon.
    pub fn new(
        coupon: CouponData,
        index: IndexON,
        fixing_period_start_time: Time,
        fixing_period_end_time: Time,
        fixing_period_accrual_factor: Real,
        notional_accrued: Real,
        spread: Spread,
    ) -> Result<Self> {
        validation::same_currency(&coupon.currency(), &index.currency())?;
        check_period(
            fixing_period_start_time,
            fixing_period_end_time,
            fixing_period_accrual_factor,
        )?;
        let spread_amount = spread * coupon.payment_year_fraction() * coupon.notional();
        Ok(Self {
            coupon,
            index,
            fixing_period_start_time,
            fixing_period_end_time,
            fixing_period_accrual_factor,
            notional_accrued,
            spread,
            spread_amount,
        })
    }

    /// The index.
    pub fn index(&self) -> &IndexON {
        &self.index
    }

    /// Start of the remaining fixing period.
    pub fn fixing_period_start_time(&self) -> Time {
        self.fixing_period_start_time
    }

    /// End of the fixing period.
    pub fn fixing_period_end_time(&self) -> Time {
        self.fixing_period_end_time
    }

    /// Accrual factor of the remaining fixing period.
    pub fn fixing_period_accrual_factor(&self) -> Real {
        self.fixing_period_accrual_factor
    }

    /// Notional compounded over the fixings already published.
    pub fn notional_accrued(&self) -> Real {
        self.notional_accrued
    }

    /// The spread.
    pub fn spread(&self) -> Spread {
        self.spread
    }

    /// `spread · δ · N`.
    pub fn spread_amount(&self) -> Real {
        self.spread_amount
    }
}

impl Coupon for CouponONSpread {
    fn coupon_data(&self) -> &CouponData {
        &self.coupon
    }

    fn with_notional(&self, notional: Real) -> Result<Self> {
        let accrued = validation::rescaled_notional_accrued(
            self.notional_accrued,
            self.coupon.notional(),
            notional,
        );
        Self::new(
            self.coupon.with_notional(notional),
            self.index.clone(),
            self.fixing_period_start_time,
            self.fixing_period_end_time,
            self.fixing_period_accrual_factor,
            accrued,
            self.spread,
        )
    }
}

impl FloatingCoupon for CouponONSpread {
    fn fixing_time(&self) -> Time {
        self.fixing_period_start_time
    }
}

impl_structural_hash!(CouponONSpread {
    hash: [coupon, index],
    real: [
        fixing_period_start_time,
        fixing_period_end_time,
        fixing_period_accrual_factor,
        notional_accrued,
        spread,
        spread_amount
    ]
});

// ── CouponONCompounded ────────────────────────────────────────────────────────

/// Overnight coupon compounded on a business-day basis (Brazilian CDI
/// style): pays `notional_accrued · Π P(sᵢ)/P(eᵢ)`, i.e. the accrued
/// notional rather than the interest.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponONCompounded {
    coupon: CouponData,
    index: IndexON,
    fixing_period_start_times: Vec<Time>,
    fixing_period_end_times: Vec<Time>,
    fixing_period_accrual_factors: Vec<Real>,
    notional_accrued: Real,
}

impl CouponONCompounded {
    /// Create the coupon.
    ///
    /// # Errors
    /// Returns an error if the period arrays are empty or of different
    /// lengths, if a period is not ordered, if an accrual factor is
    /// negative, or on a currency mismatch.
    pub fn new(
        coupon: CouponData,
        index: IndexON,
        fixing_period_start_times: Vec<Time>,
        fixing_period_end_times: Vec<Time>,
        fixing_period_accrual_factors: Vec<Real>,
        notional_accrued: Real,
    ) -> Result<Self> {
        validation::same_currency(&coupon.currency(), &index.currency())?;
        let n = fixing_period_start_times.len();
        validation::not_empty("fixing period start times", n)?;
        validation::same_length("fixing period end times", n, fixing_period_end_times.len())?;
        validation::same_length(
            "fixing period accrual factors",
            n,
            fixing_period_accrual_factors.len(),
        )?;
        for i in 0..n {
            check_period(
                fixing_period_start_times[i],
                fixing_period_end_times[i],
                fixing_period_accrual_factors[i],
            )?;
        }
        Ok(Self {
            coupon,
            index,
            fixing_period_start_times,
            fixing_period_end_times,
            fixing_period_accrual_factors,
            notional_accrued,
        })
    }

    /// The index.
    pub fn index(&self) -> &IndexON {
        &self.index
    }

    /// Start of each compounding sub-period.
    pub fn fixing_period_start_times(&self) -> &[Time] {
        &self.fixing_period_start_times
    }

    /// End of each compounding sub-period.
    pub fn fixing_period_end_times(&self) -> &[Time] {
        &self.fixing_period_end_times
    }

    /// Accrual factor of each compounding sub-period.
    pub fn fixing_period_accrual_factors(&self) -> &[Real] {
        &self.fixing_period_accrual_factors
    }

    /// Notional compounded over the fixings already published.
    pub fn notional_accrued(&self) -> Real {
        self.notional_accrued
    }
}

impl Coupon for CouponONCompounded {
    fn coupon_data(&self) -> &CouponData {
        &self.coupon
    }

    fn with_notional(&self, notional: Real) -> Result<Self> {
        let accrued = validation::rescaled_notional_accrued(
            self.notional_accrued,
            self.coupon.notional(),
            notional,
        );
        Self::new(
            self.coupon.with_notional(notional),
            self.index.clone(),
            self.fixing_period_start_times.clone(),
            self.fixing_period_end_times.clone(),
            self.fixing_period_accrual_factors.clone(),
            accrued,
        )
    }
}

impl FloatingCoupon for CouponONCompounded {
    fn fixing_time(&self) -> Time {
        self.fixing_period_start_times[0]
    }
}

impl_structural_hash!(CouponONCompounded {
    hash: [coupon, index],
    real: [
        fixing_period_start_times,
        fixing_period_end_times,
        fixing_period_accrual_factors,
        notional_accrued
    ]
});

impl_coupon_cash_flow!(CouponON, CouponONSpread, CouponONCompounded);
