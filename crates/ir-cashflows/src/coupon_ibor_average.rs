//! Ibor coupons averaging several fixings.

use ir_core::{errors::Result, Rate, Real, Spread, Time};
use ir_indexes::{IborIndex, Index};

use crate::coupon::{Coupon, CouponData, FloatingCoupon, IborFixing};
use crate::validation;

// ── Averaging layout ──────────────────────────────────────────────────────────

/// Weighted fixings of one index averaged into a single rate.
#[derive(Debug, Clone, PartialEq)]
pub struct AveragingFixings {
    weights: Vec<Real>,
    fixing_times: Vec<Time>,
    fixing_period_start_times: Vec<Time>,
    fixing_period_end_times: Vec<Time>,
    fixing_period_accrual_factors: Vec<Real>,
}

impl AveragingFixings {
    /// Create the averaging layout.
    ///
    /// # Errors
    /// Returns an error if there is no fixing, if the arrays differ in
    /// length, if a fixing is not ordered `fixing ≤ start ≤ end`, or if an
    /// accrual factor is negative.
    pub fn new(
        weights: Vec<Real>,
        fixing_times: Vec<Time>,
        fixing_period_start_times: Vec<Time>,
        fixing_period_end_times: Vec<Time>,
        fixing_period_accrual_factors: Vec<Real>,
    ) -> Result<Self> {
        let n = weights.len();
        validation::not_empty("averaging weights", n)?;
        validation::same_length("fixing times", n, fixing_times.len())?;
        validation::same_length("fixing period start times", n, fixing_period_start_times.len())?;
        validation::same_length("fixing period end times", n, fixing_period_end_times.len())?;
        validation::same_length(
            "fixing period accrual factors",
            n,
            fixing_period_accrual_factors.len(),
        )?;
        validation::all_non_negative(
            "fixing period accrual factors",
            &fixing_period_accrual_factors,
        )?;
        for i in 0..n {
            validation::fixing_period(
                fixing_times[i],
                fixing_period_start_times[i],
                fixing_period_end_times[i],
            )?;
        }
        Ok(Self {
            weights,
            fixing_times,
            fixing_period_start_times,
            fixing_period_end_times,
            fixing_period_accrual_factors,
        })
    }

    /// Number of fixings.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always `false`: construction rejects an empty layout.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Averaging weights.
    pub fn weights(&self) -> &[Real] {
        &self.weights
    }

    /// Fixing times.
    pub fn fixing_times(&self) -> &[Time] {
        &self.fixing_times
    }

    /// Deposit start times.
    pub fn fixing_period_start_times(&self) -> &[Time] {
        &self.fixing_period_start_times
    }

    /// Deposit end times.
    pub fn fixing_period_end_times(&self) -> &[Time] {
        &self.fixing_period_end_times
    }

    /// Deposit accrual factors.
    pub fn fixing_period_accrual_factors(&self) -> &[Real] {
        &self.fixing_period_accrual_factors
    }

    /// Iterate over `(weight, fixing, start, end, accrual)`.
    pub fn iter(&self) -> impl Iterator<Item = (Real, Time, Time, Time, Real)> + '_ {
        (0..self.len()).map(move |i| {
            (
                self.weights[i],
                self.fixing_times[i],
                self.fixing_period_start_times[i],
                self.fixing_period_end_times[i],
                self.fixing_period_accrual_factors[i],
            )
        })
    }
}

impl_structural_hash!(AveragingFixings {
    hash: [],
    real: [
        weights,
        fixing_times,
        fixing_period_start_times,
        fixing_period_end_times,
        fixing_period_accrual_factors
    ]
});

// ── CouponIborAverage ─────────────────────────────────────────────────────────

/// Pays the weighted average `w₁·F₁ + w₂·F₂` of two Ibor indexes fixing
/// on the same date (typically two tenors bracketing a stub).
#[derive(Debug, Clone, PartialEq)]
pub struct CouponIborAverage {
    coupon: CouponData,
    fixing1: IborFixing,
    fixing2: IborFixing,
    weight1: Real,
    weight2: Real,
}

impl CouponIborAverage {
    /// Create the coupon.
    ///
    /// # Errors
    /// Returns an error if the fixings do not share their fixing time or
    /// if either index currency differs from the coupon currency.
    pub fn new(
        coupon: CouponData,
        fixing1: IborFixing,
        fixing2: IborFixing,
        weight1: Real,
        weight2: Real,
    ) -> Result<Self> {
        ir_core::ensure!(
            fixing1.fixing_time() == fixing2.fixing_time(),
            "averaged fixings must share their fixing time, got {} and {}",
            fixing1.fixing_time(),
            fixing2.fixing_time()
        );
        fixing1.check_currency(&coupon)?;
        fixing2.check_currency(&coupon)?;
        Ok(Self {
            coupon,
            fixing1,
            fixing2,
            weight1,
            weight2,
        })
    }

    /// First fixing.
    pub fn fixing1(&self) -> &IborFixing {
        &self.fixing1
    }

    /// Second fixing.
    pub fn fixing2(&self) -> &IborFixing {
        &self.fixing2
    }

    /// Weight of the first fixing.
    pub fn weight1(&self) -> Real {
        self.weight1
    }

    /// Weight of the second fixing.
    pub fn weight2(&self) -> Real {
        self.weight2
    }
}

impl Coupon for CouponIborAverage {
    fn coupon_data(&self) -> &CouponData {
        &self.coupon
    }

    fn with_notional(&self, notional: Real) -> Result<Self> {
        Self::new(
            self.coupon.with_notional(notional),
            self.fixing1.clone(),
            self.fixing2.clone(),
            self.weight1,
            self.weight2,
        )
    }
}

impl FloatingCoupon for CouponIborAverage {
    fn fixing_time(&self) -> Time {
        self.fixing1.fixing_time()
    }
}

impl_structural_hash!(CouponIborAverage {
    hash: [coupon, fixing1, fixing2],
    real: [weight1, weight2]
});

// ── CouponIborAverageFixingDates ──────────────────────────────────────────────

/// Pays `N · δ · Σ wᵢ·Fᵢ + amount_accrued`, where `amount_accrued` carries
/// the fixings already known.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponIborAverageFixingDates {
    coupon: CouponData,
    index: IborIndex,
    fixings: AveragingFixings,
    amount_accrued: Real,
}

impl CouponIborAverageFixingDates {
    /// Create the coupon.
    pub fn new(
        coupon: CouponData,
        index: IborIndex,
        fixings: AveragingFixings,
        amount_accrued: Real,
    ) -> Result<Self> {
        validation::same_currency(&coupon.currency(), &index.currency())?;
        Ok(Self {
            coupon,
            index,
            fixings,
            amount_accrued,
        })
    }

    /// The index.
    pub fn index(&self) -> &IborIndex {
        &self.index
    }

    /// The remaining fixings.
    pub fn fixings(&self) -> &AveragingFixings {
        &self.fixings
    }

    /// Amount accrued from known fixings.
    pub fn amount_accrued(&self) -> Real {
        self.amount_accrued
    }
}

impl Coupon for CouponIborAverageFixingDates {
    fn coupon_data(&self) -> &CouponData {
        &self.coupon
    }

    fn with_notional(&self, notional: Real) -> Result<Self> {
        let ratio = validation::notional_ratio(self.coupon.notional(), notional);
        Self::new(
            self.coupon.with_notional(notional),
            self.index.clone(),
            self.fixings.clone(),
            self.amount_accrued * ratio,
        )
    }
}

impl FloatingCoupon for CouponIborAverageFixingDates {
    fn fixing_time(&self) -> Time {
        self.fixings.fixing_times()[0]
    }
}

impl_structural_hash!(CouponIborAverageFixingDates {
    hash: [coupon, index, fixings],
    real: [amount_accrued]
});

// ── Averaged compounding ──────────────────────────────────────────────────────

fn check_compounding_layout(
    payment_accrual_factors: &[Real],
    fixings: &[AveragingFixings],
) -> Result<()> {
    validation::not_empty("payment accrual factors", payment_accrual_factors.len())?;
    validation::same_length("averaging periods", payment_accrual_factors.len(), fixings.len())?;
    validation::all_non_negative("payment accrual factors", payment_accrual_factors)
}

/// Compounds an averaged rate over sub-periods.
///
/// Pays `notional_accrued · Π_k(1 + δ_k·(r_k + Σⱼ w_kj·F_kj)) − N`, where
/// `r_0 = rate_fixed` is the averaged part already fixed in the current
/// sub-period and `r_k = 0` afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponIborAverageCompounding {
    coupon: CouponData,
    index: IborIndex,
    payment_accrual_factors: Vec<Real>,
    fixings: Vec<AveragingFixings>,
    notional_accrued: Real,
    rate_fixed: Rate,
}

impl CouponIborAverageCompounding {
    /// Create the coupon.
    ///
    /// # Errors
    /// Returns an error if there is no sub-period, if the number of
    /// averaging layouts differs from the number of sub-periods, or on a
    /// currency mismatch.
    pub fn new(
        coupon: CouponData,
        index: IborIndex,
        payment_accrual_factors: Vec<Real>,
        fixings: Vec<AveragingFixings>,
        notional_accrued: Real,
        rate_fixed: Rate,
    ) -> Result<Self> {
        validation::same_currency(&coupon.currency(), &index.currency())?;
        check_compounding_layout(&payment_accrual_factors, &fixings)?;
        Ok(Self {
            coupon,
            index,
            payment_accrual_factors,
            fixings,
            notional_accrued,
            rate_fixed,
        })
    }

    /// The index.
    pub fn index(&self) -> &IborIndex {
        &self.index
    }

    /// Accrual factors of the sub-periods.
    pub fn payment_accrual_factors(&self) -> &[Real] {
        &self.payment_accrual_factors
    }

    /// Averaging layout of each sub-period.
    pub fn fixings(&self) -> &[AveragingFixings] {
        &self.fixings
    }

    /// Notional compounded over completed sub-periods.
    pub fn notional_accrued(&self) -> Real {
        self.notional_accrued
    }

    /// Averaged rate already fixed in the current sub-period.
    pub fn rate_fixed(&self) -> Rate {
        self.rate_fixed
    }
}

impl Coupon for CouponIborAverageCompounding {
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
            self.payment_accrual_factors.clone(),
            self.fixings.clone(),
            accrued,
            self.rate_fixed,
        )
    }
}

impl FloatingCoupon for CouponIborAverageCompounding {
    fn fixing_time(&self) -> Time {
        self.fixings[0].fixing_times()[0]
    }
}

impl_structural_hash!(CouponIborAverageCompounding {
    hash: [coupon, index, fixings],
    real: [payment_accrual_factors, notional_accrued, rate_fixed]
});

/// Flat-compounds an averaged rate plus spread over sub-periods.
///
/// Starting from `amount_accrued`, each sub-period adds
/// `amount·R_k·δ_k + N·(R_k + s)·δ_k` with `R_k = r_k + Σⱼ w_kj·F_kj`, as
/// for [`CouponIborAverageCompounding`].
#[derive(Debug, Clone, PartialEq)]
pub struct CouponIborAverageFlatCompoundingSpread {
    coupon: CouponData,
    index: IborIndex,
    payment_accrual_factors: Vec<Real>,
    fixings: Vec<AveragingFixings>,
    amount_accrued: Real,
    rate_fixed: Rate,
    spread: Spread,
}

impl CouponIborAverageFlatCompoundingSpread {
    /// Create the coupon.
    pub fn new(
        coupon: CouponData,
        index: IborIndex,
        payment_accrual_factors: Vec<Real>,
        fixings: Vec<AveragingFixings>,
        amount_accrued: Real,
        rate_fixed: Rate,
        spread: Spread,
    ) -> Result<Self> {
        validation::same_currency(&coupon.currency(), &index.currency())?;
        check_compounding_layout(&payment_accrual_factors, &fixings)?;
        Ok(Self {
            coupon,
            index,
            payment_accrual_factors,
            fixings,
            amount_accrued,
            rate_fixed,
            spread,
        })
    }

    /// The index.
    pub fn index(&self) -> &IborIndex {
        &self.index
    }

    /// Accrual factors of the sub-periods.
    pub fn payment_accrual_factors(&self) -> &[Real] {
        &self.payment_accrual_factors
    }

    /// Averaging layout of each sub-period.
    pub fn fixings(&self) -> &[AveragingFixings] {
        &self.fixings
    }

    /// Amount accumulated over completed sub-periods.
    pub fn amount_accrued(&self) -> Real {
        self.amount_accrued
    }

    /// Averaged rate already fixed in the current sub-period.
    pub fn rate_fixed(&self) -> Rate {
        self.rate_fixed
    }

    /// The spread.
    pub fn spread(&self) -> Spread {
        self.spread
    }
}

impl Coupon for CouponIborAverageFlatCompoundingSpread {
    fn coupon_data(&self) -> &CouponData {
        &self.coupon
    }

    fn with_notional(&self, notional: Real) -> Result<Self> {
        let ratio = validation::notional_ratio(self.coupon.notional(), notional);
        Self::new(
            self.coupon.with_notional(notional),
            self.index.clone(),
            self.payment_accrual_factors.clone(),
            self.fixings.clone(),
            self.amount_accrued * ratio,
            self.rate_fixed,
            self.spread,
        )
    }
}

impl FloatingCoupon for CouponIborAverageFlatCompoundingSpread {
    fn fixing_time(&self) -> Time {
        self.fixings[0].fixing_times()[0]
    }
}

impl_structural_hash!(CouponIborAverageFlatCompoundingSpread {
    hash: [coupon, index, fixings],
    real: [payment_accrual_factors, amount_accrued, rate_fixed, spread]
});

impl_coupon_cash_flow!(
    CouponIborAverage,
    CouponIborAverageFixingDates,
    CouponIborAverageCompounding,
    CouponIborAverageFlatCompoundingSpread
);
