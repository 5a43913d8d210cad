//! Overnight coupons paying an arithmetic average of the daily fixings.

use ir_core::{errors::Result, Real, Spread, Time};
use ir_indexes::{Index, IndexON};

use crate::coupon::{Coupon, CouponData, FloatingCoupon};
use crate::validation;

// ── CouponArithmeticAverageON ─────────────────────────────────────────────────

/// Pays `N · (rate_accrued + Σ δᵢ·Fᵢ)` over the remaining overnight
/// periods `[tᵢ, tᵢ₊₁]`.
///
/// `rate_accrued` is the sum `Σ δⱼ·rⱼ` over fixings already published, per
/// unit of notional.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponArithmeticAverageON {
    coupon: CouponData,
    index: IndexON,
    fixing_period_times: Vec<Time>,
    fixing_period_accrual_factors: Vec<Real>,
    rate_accrued: Real,
    fixing_period_total_accrual_factor: Real,
}

impl CouponArithmeticAverageON {
    /// Create the coupon.
    ///
    /// # Errors
    /// Returns an error unless there are `n + 1` non-decreasing,
    /// non-negative period times for `n ≥ 1` non-negative accrual factors,
    /// or on a currency mismatch.
    pub fn new(
        coupon: CouponData,
        index: IndexON,
        fixing_period_times: Vec<Time>,
        fixing_period_accrual_factors: Vec<Real>,
        rate_accrued: Real,
    ) -> Result<Self> {
        validation::same_currency(&coupon.currency(), &index.currency())?;
        let n = fixing_period_accrual_factors.len();
        validation::not_empty("fixing period accrual factors", n)?;
        validation::same_length("fixing period times", n + 1, fixing_period_times.len())?;
        validation::all_non_negative(
            "fixing period accrual factors",
            &fixing_period_accrual_factors,
        )?;
        validation::non_negative("first fixing period time", fixing_period_times[0])?;
        for w in fixing_period_times.windows(2) {
            ir_core::ensure!(
                w[1] >= w[0],
                "fixing period times must be non-decreasing, got {} after {}",
                w[1],
                w[0]
            );
        }
        let fixing_period_total_accrual_factor = fixing_period_accrual_factors.iter().sum();
        Ok(Self {
            coupon,
            index,
            fixing_period_times,
            fixing_period_accrual_factors,
            rate_accrued,
            fixing_period_total_accrual_factor,
        })
    }

    /// The index.
    pub fn index(&self) -> &IndexON {
        &self.index
    }

    /// Boundaries of the remaining overnight periods.
    pub fn fixing_period_times(&self) -> &[Time] {
        &self.fixing_period_times
    }

    /// Accrual factor of each remaining overnight period.
    pub fn fixing_period_accrual_factors(&self) -> &[Real] {
        &self.fixing_period_accrual_factors
    }

    /// Sum of accrued rates already published, per unit of notional.
    pub fn rate_accrued(&self) -> Real {
        self.rate_accrued
    }

    /// Sum of the remaining accrual factors.
    pub fn fixing_period_total_accrual_factor(&self) -> Real {
        self.fixing_period_total_accrual_factor
    }
}

impl Coupon for CouponArithmeticAverageON {
    fn coupon_data(&self) -> &CouponData {
        &self.coupon
    }

    fn with_notional(&self, notional: Real) -> Result<Self> {
        Self::new(
            self.coupon.with_notional(notional),
            self.index.clone(),
            self.fixing_period_times.clone(),
            self.fixing_period_accrual_factors.clone(),
            self.rate_accrued,
        )
    }
}

impl FloatingCoupon for CouponArithmeticAverageON {
    fn fixing_time(&self) -> Time {
        self.fixing_period_times[0]
    }
}

impl_structural_hash!(CouponArithmeticAverageON {
    hash: [coupon, index],
    real: [
        fixing_period_times,
        fixing_period_accrual_factors,
        rate_accrued,
        fixing_period_total_accrual_factor
    ]
});

// ── CouponArithmeticAverageONSpreadSimplified ─────────────────────────────────

/// Arithmetic-average overnight coupon with spread, approximated by the
/// log of the compounded forward over the whole period (no fixing yet
/// published).
#[derive(Debug, Clone, PartialEq)]
pub struct CouponArithmeticAverageONSpreadSimplified {
    coupon: CouponData,
    index: IndexON,
    fixing_period_start_time: Time,
    fixing_period_end_time: Time,
    fixing_period_accrual_factor: Real,
    spread: Spread,
    spread_amount: Real,
}

impl CouponArithmeticAverageONSpreadSimplified {
    /// Create the coupon.
    pub fn new(
        coupon: CouponData,
        index: IndexON,
        fixing_period_start_time: Time,
        fixing_period_end_time: Time,
        fixing_period_accrual_factor: Real,
        spread: Spread,
    ) -> Result<Self> {
        validation::same_currency(&coupon.currency(), &index.currency())?;
        validation::fixing_period(
            fixing_period_start_time,
            fixing_period_start_time,
            fixing_period_end_time,
        )?;
        validation::non_negative("fixing period accrual factor", fixing_period_accrual_factor)?;
        let spread_amount = spread * coupon.payment_year_fraction() * coupon.notional();
        Ok(Self {
            coupon,
            index,
            fixing_period_start_time,
            fixing_period_end_time,
            fixing_period_accrual_factor,
            spread,
            spread_amount,
        })
    }

    /// The index.
    pub fn index(&self) -> &IndexON {
        &self.index
    }

    /// Start of the fixing period.
    pub fn fixing_period_start_time(&self) -> Time {
        self.fixing_period_start_time
    }

    /// End of the fixing period.
    pub fn fixing_period_end_time(&self) -> Time {
        self.fixing_period_end_time
    }

    /// Accrual factor of the fixing period.
    pub fn fixing_period_accrual_factor(&self) -> Real {
        self.fixing_period_accrual_factor
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

impl Coupon for CouponArithmeticAverageONSpreadSimplified {
    fn coupon_data(&self) -> &CouponData {
        &self.coupon
    }

    fn with_notional(&self, notional: Real) -> Result<Self> {
        Self::new(
            self.coupon.with_notional(notional),
            self.index.clone(),
            self.fixing_period_start_time,
            self.fixing_period_end_time,
            self.fixing_period_accrual_factor,
            self.spread,
        )
    }
}

impl FloatingCoupon for CouponArithmeticAverageONSpreadSimplified {
    fn fixing_time(&self) -> Time {
        self.fixing_period_start_time
    }
}

impl_structural_hash!(CouponArithmeticAverageONSpreadSimplified {
    hash: [coupon, index],
    real: [
        fixing_period_start_time,
        fixing_period_end_time,
        fixing_period_accrual_factor,
        spread,
        spread_amount
    ]
});

impl_coupon_cash_flow!(CouponArithmeticAverageON, CouponArithmeticAverageONSpreadSimplified);
