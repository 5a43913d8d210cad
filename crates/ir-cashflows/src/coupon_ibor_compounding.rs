//! Ibor coupons compounded over sub-periods.
//!
//! All four variants share the [`CompoundingPeriods`] layout: one Ibor
//! fixing per sub-period plus the accrual factor of that sub-period in the
//! payment convention. Fixings already known at valuation are folded into
//! the accrued notional (or accumulated amount) and only the remaining
//! sub-periods are kept.

use ir_core::{errors::Result, Real, Spread, Time};
use ir_indexes::{IborIndex, Index};

use crate::coupon::{Coupon, CouponData, DepositIndexCompoundingCoupon, FloatingCoupon};
use crate::validation;

// ── Sub-period layout ─────────────────────────────────────────────────────────

/// The remaining sub-periods of a compounded Ibor coupon.
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundingPeriods {
    index: IborIndex,
    payment_accrual_factors: Vec<Real>,
    fixing_times: Vec<Time>,
    fixing_period_start_times: Vec<Time>,
    fixing_period_end_times: Vec<Time>,
    fixing_period_accrual_factors: Vec<Real>,
}

impl CompoundingPeriods {
    /// Create the sub-period layout.
    ///
    /// # Errors
    /// Returns an error if there is no sub-period, if the arrays differ in
    /// length, if a sub-period is not ordered `fixing ≤ start ≤ end`, or if
    /// an accrual factor is negative.
    pub fn new(
        index: IborIndex,
        payment_accrual_factors: Vec<Real>,
        fixing_times: Vec<Time>,
        fixing_period_start_times: Vec<Time>,
        fixing_period_end_times: Vec<Time>,
        fixing_period_accrual_factors: Vec<Real>,
    ) -> Result<Self> {
        let n = payment_accrual_factors.len();
        validation::not_empty("payment accrual factors", n)?;
        validation::same_length("fixing times", n, fixing_times.len())?;
        validation::same_length("fixing period start times", n, fixing_period_start_times.len())?;
        validation::same_length("fixing period end times", n, fixing_period_end_times.len())?;
        validation::same_length(
            "fixing period accrual factors",
            n,
            fixing_period_accrual_factors.len(),
        )?;
        validation::all_non_negative("payment accrual factors", &payment_accrual_factors)?;
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
            index,
            payment_accrual_factors,
            fixing_times,
            fixing_period_start_times,
            fixing_period_end_times,
            fixing_period_accrual_factors,
        })
    }

    /// The index.
    pub fn index(&self) -> &IborIndex {
        &self.index
    }

    /// Number of sub-periods.
    pub fn len(&self) -> usize {
        self.payment_accrual_factors.len()
    }

    /// Always `false`: construction rejects an empty layout.
    pub fn is_empty(&self) -> bool {
        self.payment_accrual_factors.is_empty()
    }

    /// Accrual factors in the payment convention.
    pub fn payment_accrual_factors(&self) -> &[Real] {
        &self.payment_accrual_factors
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

    /// Deposit accrual factors in the index convention.
    pub fn fixing_period_accrual_factors(&self) -> &[Real] {
        &self.fixing_period_accrual_factors
    }

    fn check_currency(&self, coupon: &CouponData) -> Result<()> {
        validation::same_currency(&coupon.currency(), &self.index.currency())
    }
}

impl_structural_hash!(CompoundingPeriods {
    hash: [index],
    real: [
        payment_accrual_factors,
        fixing_times,
        fixing_period_start_times,
        fixing_period_end_times,
        fixing_period_accrual_factors
    ]
});

// `DepositIndexCompoundingCoupon` and `FloatingCoupon` for a coupon holding
// its layout in `self.periods`.
macro_rules! impl_compounding_accessors {
    ($($ty:ty),*) => {
        $(
            impl DepositIndexCompoundingCoupon<IborIndex> for $ty {
                fn index(&self) -> &IborIndex {
                    self.periods.index()
                }

                fn payment_accrual_factors(&self) -> &[Real] {
                    self.periods.payment_accrual_factors()
                }

                fn fixing_times(&self) -> &[Time] {
                    self.periods.fixing_times()
                }

                fn fixing_period_start_times(&self) -> &[Time] {
                    self.periods.fixing_period_start_times()
                }

                fn fixing_period_end_times(&self) -> &[Time] {
                    self.periods.fixing_period_end_times()
                }

                fn fixing_period_accrual_factors(&self) -> &[Real] {
                    self.periods.fixing_period_accrual_factors()
                }
            }

            impl FloatingCoupon for $ty {
                fn fixing_time(&self) -> Time {
                    self.periods.fixing_times()[0]
                }
            }

            impl $ty {
                /// The sub-period layout.
                pub fn periods(&self) -> &CompoundingPeriods {
                    &self.periods
                }
            }
        )*
    };
}

// ── CouponIborCompounding ─────────────────────────────────────────────────────

/// Pays `notional_accrued · Π(1 + δᵢ·Fᵢ) − N`.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponIborCompounding {
    coupon: CouponData,
    periods: CompoundingPeriods,
    notional_accrued: Real,
}

impl CouponIborCompounding {
    /// Create the coupon. `notional_accrued` is the notional compounded
    /// over the sub-periods already fixed (equal to the notional when none
    /// has).
    pub fn new(
        coupon: CouponData,
        periods: CompoundingPeriods,
        notional_accrued: Real,
    ) -> Result<Self> {
        periods.check_currency(&coupon)?;
        Ok(Self {
            coupon,
            periods,
            notional_accrued,
        })
    }

    /// Notional compounded over the fixed sub-periods.
    pub fn notional_accrued(&self) -> Real {
        self.notional_accrued
    }
}

impl Coupon for CouponIborCompounding {
    fn coupon_data(&self) -> &CouponData {
        &self.coupon
    }

    fn with_notional(&self, notional: Real) -> Result<Self> {
        let accrued = validation::rescaled_notional_accrued(
            self.notional_accrued,
            self.coupon.notional(),
            notional,
        );
        Self::new(self.coupon.with_notional(notional), self.periods.clone(), accrued)
    }
}

// ── CouponIborCompoundingSpread ───────────────────────────────────────────────

/// Pays `notional_accrued · Π(1 + δᵢ·(Fᵢ + s)) − N`: the spread is
/// compounded with the fixings.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponIborCompoundingSpread {
    coupon: CouponData,
    periods: CompoundingPeriods,
    notional_accrued: Real,
    spread: Spread,
}

impl CouponIborCompoundingSpread {
    /// Create the coupon.
    pub fn new(
        coupon: CouponData,
        periods: CompoundingPeriods,
        notional_accrued: Real,
        spread: Spread,
    ) -> Result<Self> {
        periods.check_currency(&coupon)?;
        Ok(Self {
            coupon,
            periods,
            notional_accrued,
            spread,
        })
    }

    /// Notional compounded over the fixed sub-periods.
    pub fn notional_accrued(&self) -> Real {
        self.notional_accrued
    }

    /// The spread.
    pub fn spread(&self) -> Spread {
        self.spread
    }
}

impl Coupon for CouponIborCompoundingSpread {
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
            self.periods.clone(),
            accrued,
            self.spread,
        )
    }
}

// ── CouponIborCompoundingSimpleSpread ─────────────────────────────────────────

/// Pays `notional_accrued · Π(1 + δᵢ·Fᵢ) − N + N·s·δ`: the spread accrues
/// simply over the whole payment period.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponIborCompoundingSimpleSpread {
    coupon: CouponData,
    periods: CompoundingPeriods,
    notional_accrued: Real,
    spread: Spread,
}

impl CouponIborCompoundingSimpleSpread {
    /// Create the coupon.
    pub fn new(
        coupon: CouponData,
        periods: CompoundingPeriods,
        notional_accrued: Real,
        spread: Spread,
    ) -> Result<Self> {
        periods.check_currency(&coupon)?;
        Ok(Self {
            coupon,
            periods,
            notional_accrued,
            spread,
        })
    }

    /// Notional compounded over the fixed sub-periods.
    pub fn notional_accrued(&self) -> Real {
        self.notional_accrued
    }

    /// The spread.
    pub fn spread(&self) -> Spread {
        self.spread
    }

    /// The simple spread part, `N · s · δ`.
    pub fn spread_amount(&self) -> Real {
        self.coupon.notional() * self.spread * self.coupon.payment_year_fraction()
    }
}

impl Coupon for CouponIborCompoundingSimpleSpread {
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
            self.periods.clone(),
            accrued,
            self.spread,
        )
    }
}

// ── CouponIborCompoundingFlatSpread ───────────────────────────────────────────

/// Flat compounding: interest of each sub-period earns the fixing but not
/// the spread in later sub-periods.
///
/// Starting from `compounding_period_amount_accumulated`, each sub-period
/// adds `cpa·Fᵢ·δᵢ + N·(Fᵢ + s)·δᵢ`; the coupon pays the final amount.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponIborCompoundingFlatSpread {
    coupon: CouponData,
    periods: CompoundingPeriods,
    compounding_period_amount_accumulated: Real,
    spread: Spread,
}

impl CouponIborCompoundingFlatSpread {
    /// Create the coupon.
    pub fn new(
        coupon: CouponData,
        periods: CompoundingPeriods,
        compounding_period_amount_accumulated: Real,
        spread: Spread,
    ) -> Result<Self> {
        periods.check_currency(&coupon)?;
        Ok(Self {
            coupon,
            periods,
            compounding_period_amount_accumulated,
            spread,
        })
    }

    /// Amount accumulated over the fixed sub-periods.
    pub fn compounding_period_amount_accumulated(&self) -> Real {
        self.compounding_period_amount_accumulated
    }

    /// The spread.
    pub fn spread(&self) -> Spread {
        self.spread
    }
}

impl Coupon for CouponIborCompoundingFlatSpread {
    fn coupon_data(&self) -> &CouponData {
        &self.coupon
    }

    fn with_notional(&self, notional: Real) -> Result<Self> {
        let ratio = validation::notional_ratio(self.coupon.notional(), notional);
        Self::new(
            self.coupon.with_notional(notional),
            self.periods.clone(),
            self.compounding_period_amount_accumulated * ratio,
            self.spread,
        )
    }
}

impl_compounding_accessors!(
    CouponIborCompounding,
    CouponIborCompoundingSpread,
    CouponIborCompoundingSimpleSpread,
    CouponIborCompoundingFlatSpread
);

impl_coupon_cash_flow!(
    CouponIborCompounding,
    CouponIborCompoundingSpread,
    CouponIborCompoundingSimpleSpread,
    CouponIborCompoundingFlatSpread
);

impl_structural_hash!(CouponIborCompounding {
    hash: [coupon, periods],
    real: [notional_accrued]
});
impl_structural_hash!(CouponIborCompoundingSpread {
    hash: [coupon, periods],
    real: [notional_accrued, spread]
});
impl_structural_hash!(CouponIborCompoundingSimpleSpread {
    hash: [coupon, periods],
    real: [notional_accrued, spread]
});
impl_structural_hash!(CouponIborCompoundingFlatSpread {
    hash: [coupon, periods],
    real: [compounding_period_amount_accumulated, spread]
});

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ir_currencies::currencies::{EUR, USD};
    use ir_indexes::{euribor, usd_libor};
    use ir_time::Period;

    fn periods() -> CompoundingPeriods {
        CompoundingPeriods::new(
            euribor(Period::months(1)),
            vec![0.0833, 0.0833, 0.0833],
            vec![0.0, 0.0833, 0.1666],
            vec![0.0055, 0.0888, 0.1721],
            vec![0.0888, 0.1721, 0.2554],
            vec![0.0833, 0.0833, 0.0833],
        )
        .unwrap()
    }

    #[test]
    fn layout_validation() {
        let idx = euribor(Period::months(1));
        let new = |factors, fixing, start, end, accrual| {
            CompoundingPeriods::new(idx.clone(), factors, fixing, start, end, accrual)
        };
        assert!(new(vec![], vec![], vec![], vec![], vec![]).is_err());
        assert!(new(vec![0.5, 0.5], vec![0.0], vec![0.0], vec![0.5], vec![0.5]).is_err());
        assert!(new(vec![0.5], vec![0.1], vec![0.0], vec![0.5], vec![0.5]).is_err());
        assert!(new(vec![-0.5], vec![0.0], vec![0.0], vec![0.5], vec![0.5]).is_err());
        assert_eq!(periods().len(), 3);
    }

    #[test]
    fn notional_rescaling() {
        let data = |notional| CouponData::new(EUR, 0.26, 0.25, notional).unwrap();
        let c = CouponIborCompounding::new(data(100.0), periods(), 101.0).unwrap();
        assert_relative_eq!(
            c.with_notional(200.0).unwrap().notional_accrued(),
            202.0,
            max_relative = 1e-15
        );
        assert_eq!(c.fixing_time(), 0.0);

        let zero = CouponIborCompounding::new(data(0.0), periods(), 0.0).unwrap();
        assert_eq!(zero.with_notional(50.0).unwrap().notional_accrued(), 50.0);

        let flat = CouponIborCompoundingFlatSpread::new(
            CouponData::new(EUR, 0.26, 0.25, 100.0).unwrap(),
            periods(),
            0.3,
            0.001,
        )
        .unwrap();
        assert_relative_eq!(
            flat.with_notional(-100.0).unwrap().compounding_period_amount_accumulated(),
            -0.3,
            max_relative = 1e-15
        );
    }

    #[test]
    fn index_currency_checked() {
        let usd_periods = CompoundingPeriods::new(
            usd_libor(Period::months(1)),
            vec![0.0833],
            vec![0.0],
            vec![0.0],
            vec![0.0833],
            vec![0.0833],
        )
        .unwrap();
        assert!(CouponIborCompoundingSpread::new(
            CouponData::new(EUR, 0.1, 0.0833, 1.0).unwrap(),
            usd_periods.clone(),
            1.0,
            0.0
        )
        .is_err());
        assert!(CouponIborCompoundingSpread::new(
            CouponData::new(USD, 0.1, 0.0833, 1.0).unwrap(),
            usd_periods,
            1.0,
            0.0
        )
        .is_ok());
    }
}
