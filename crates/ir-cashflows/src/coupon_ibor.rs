//! Ibor coupons paying a single fixing.

use ir_core::{errors::Result, Real, Spread, Time};
use ir_indexes::IborIndex;

use crate::coupon::{Coupon, CouponData, DepositIndexCoupon, FloatingCoupon, IborFixing};

// ── CouponIbor ────────────────────────────────────────────────────────────────

/// A coupon paying `notional · F · payment_year_fraction`, where `F` is the
/// Ibor fixing over the deposit period.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponIbor {
    coupon: CouponData,
    fixing: IborFixing,
}

impl CouponIbor {
    /// Create an Ibor coupon.
    ///
    /// # Errors
    /// Returns an error if the index currency differs from the coupon
    /// currency.
    pub fn new(coupon: CouponData, fixing: IborFixing) -> Result<Self> {
        fixing.check_currency(&coupon)?;
        Ok(Self { coupon, fixing })
    }

    /// The fixing description.
    pub fn fixing(&self) -> &IborFixing {
        &self.fixing
    }

    /// The same coupon with a spread added to the fixing.
    pub fn with_spread(&self, spread: Spread) -> Result<CouponIborSpread> {
        CouponIborSpread::new(self.coupon.clone(), self.fixing.clone(), spread)
    }
}

impl Coupon for CouponIbor {
    fn coupon_data(&self) -> &CouponData {
        &self.coupon
    }

    fn with_notional(&self, notional: Real) -> Result<Self> {
        Self::new(self.coupon.with_notional(notional), self.fixing.clone())
    }
}

impl FloatingCoupon for CouponIbor {
    fn fixing_time(&self) -> Time {
        self.fixing.fixing_time()
    }
}

impl DepositIndexCoupon<IborIndex> for CouponIbor {
    fn index(&self) -> &IborIndex {
        self.fixing.index()
    }

    fn fixing_period_start_time(&self) -> Time {
        self.fixing.fixing_period_start_time()
    }

    fn fixing_period_end_time(&self) -> Time {
        self.fixing.fixing_period_end_time()
    }

    fn fixing_accrual_factor(&self) -> Real {
        self.fixing.fixing_accrual_factor()
    }
}

impl_coupon_cash_flow!(CouponIbor);
impl_structural_hash!(CouponIbor { hash: [coupon, fixing], real: [] });

// ── CouponIborSpread ──────────────────────────────────────────────────────────

/// An Ibor coupon paying `F + spread`.
///
/// The spread part `spread · payment_year_fraction · notional` is computed
/// at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponIborSpread {
    coupon: CouponData,
    fixing: IborFixing,
    spread: Spread,
    spread_amount: Real,
}

impl CouponIborSpread {
    /// Create an Ibor coupon with spread.
    pub fn new(coupon: CouponData, fixing: IborFixing, spread: Spread) -> Result<Self> {
        fixing.check_currency(&coupon)?;
        let spread_amount = spread * coupon.payment_year_fraction() * coupon.notional();
        Ok(Self {
            coupon,
            fixing,
            spread,
            spread_amount,
        })
    }

    /// The fixing description.
    pub fn fixing(&self) -> &IborFixing {
        &self.fixing
    }

    /// The spread.
    pub fn spread(&self) -> Spread {
        self.spread
    }

    /// The fixed part of the payment, `spread · δ · N`.
    pub fn spread_amount(&self) -> Real {
        self.spread_amount
    }

    /// The coupon without its spread.
    pub fn without_spread(&self) -> Result<CouponIbor> {
        CouponIbor::new(self.coupon.clone(), self.fixing.clone())
    }
}

impl Coupon for CouponIborSpread {
    fn coupon_data(&self) -> &CouponData {
        &self.coupon
    }

    fn with_notional(&self, notional: Real) -> Result<Self> {
        Self::new(self.coupon.with_notional(notional), self.fixing.clone(), self.spread)
    }
}

impl FloatingCoupon for CouponIborSpread {
    fn fixing_time(&self) -> Time {
        self.fixing.fixing_time()
    }
}

impl_coupon_cash_flow!(CouponIborSpread);
impl_structural_hash!(CouponIborSpread {
    hash: [coupon, fixing],
    real: [spread, spread_amount]
});

// ── CouponIborGearing ─────────────────────────────────────────────────────────

/// An Ibor coupon paying `factor · F + spread`.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponIborGearing {
    coupon: CouponData,
    fixing: IborFixing,
    spread: Spread,
    factor: Real,
    spread_amount: Real,
}

impl CouponIborGearing {
    /// Create an Ibor coupon with gearing factor and spread.
    pub fn new(
        coupon: CouponData,
        fixing: IborFixing,
        spread: Spread,
        factor: Real,
    ) -> Result<Self> {
        fixing.check_currency(&coupon)?;
        let spread_amount = spread * coupon.payment_year_fraction() * coupon.notional();
        Ok(Self {
            coupon,
            fixing,
            spread,
            factor,
            spread_amount,
        })
    }

    /// The fixing description.
    pub fn fixing(&self) -> &IborFixing {
        &self.fixing
    }

    /// The spread.
    pub fn spread(&self) -> Spread {
        self.spread
    }

    /// The multiplicative factor applied to the fixing.
    pub fn factor(&self) -> Real {
        self.factor
    }

    /// The fixed part of the payment, `spread · δ · N`.
    pub fn spread_amount(&self) -> Real {
        self.spread_amount
    }
}

impl Coupon for CouponIborGearing {
    fn coupon_data(&self) -> &CouponData {
        &self.coupon
    }

    fn with_notional(&self, notional: Real) -> Result<Self> {
        Self::new(
            self.coupon.with_notional(notional),
            self.fixing.clone(),
            self.spread,
            self.factor,
        )
    }
}

impl FloatingCoupon for CouponIborGearing {
    fn fixing_time(&self) -> Time {
        self.fixing.fixing_time()
    }
}

impl_coupon_cash_flow!(CouponIborGearing);
impl_structural_hash!(CouponIborGearing {
    hash: [coupon, fixing],
    real: [spread, factor, spread_amount]
});
