//! Constant-maturity-swap coupons and CMS caps/floors.
//!
//! A CMS coupon pays the swap rate of `underlying_swap` observed at
//! `fixing_time`. The swap is described from its settlement, which is also
//! the reference for the annuity used in replication.

use ir_core::{errors::Result, Rate, Real, Time};
use ir_indexes::{Index, IndexSwap};

use crate::annuity::SwapFixedIbor;
use crate::coupon::{CapFloor, Coupon, CouponData, FloatingCoupon};
use crate::validation;

fn check_cms(
    coupon: &CouponData,
    index: &IndexSwap,
    underlying_swap: &SwapFixedIbor,
    fixing_time: Time,
    settlement_time: Time,
) -> Result<()> {
    validation::non_negative("fixing time", fixing_time)?;
    ir_core::ensure!(
        settlement_time >= fixing_time,
        "settlement time {settlement_time} is before fixing time {fixing_time}"
    );
    validation::same_currency(&coupon.currency(), &index.currency())?;
    validation::same_currency(&coupon.currency(), &underlying_swap.fixed_leg().currency())
}

// ── CouponCMS ─────────────────────────────────────────────────────────────────

/// Pays `N · δ · S(t_fix)` where `S` is the par rate of the underlying
/// swap.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponCMS {
    coupon: CouponData,
    fixing_time: Time,
    index: IndexSwap,
    underlying_swap: SwapFixedIbor,
    settlement_time: Time,
}

impl CouponCMS {
    /// Create a CMS coupon.
    ///
    /// # Errors
    /// Returns an error unless `0 ≤ fixing_time ≤ settlement_time` and the
    /// index and swap currencies are the coupon currency.
    pub fn new(
        coupon: CouponData,
        fixing_time: Time,
        index: IndexSwap,
        underlying_swap: SwapFixedIbor,
        settlement_time: Time,
    ) -> Result<Self> {
        check_cms(&coupon, &index, &underlying_swap, fixing_time, settlement_time)?;
        Ok(Self {
            coupon,
            fixing_time,
            index,
            underlying_swap,
            settlement_time,
        })
    }

    /// The swap index.
    pub fn index(&self) -> &IndexSwap {
        &self.index
    }

    /// The swap whose rate is paid.
    pub fn underlying_swap(&self) -> &SwapFixedIbor {
        &self.underlying_swap
    }

    /// Settlement (start) time of the underlying swap.
    pub fn settlement_time(&self) -> Time {
        self.settlement_time
    }
}

impl Coupon for CouponCMS {
    fn coupon_data(&self) -> &CouponData {
        &self.coupon
    }

    fn with_notional(&self, notional: Real) -> Result<Self> {
        Self::new(
            self.coupon.with_notional(notional),
            self.fixing_time,
            self.index.clone(),
            self.underlying_swap.clone(),
            self.settlement_time,
        )
    }
}

impl FloatingCoupon for CouponCMS {
    fn fixing_time(&self) -> Time {
        self.fixing_time
    }
}

// ── CapFloorCMS ───────────────────────────────────────────────────────────────

/// A caplet or floorlet on a CMS rate: pays `N · δ · max(ω(S − K), 0)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CapFloorCMS {
    coupon: CouponData,
    fixing_time: Time,
    index: IndexSwap,
    underlying_swap: SwapFixedIbor,
    settlement_time: Time,
    strike: Rate,
    is_cap: bool,
}

impl CapFloorCMS {
    /// Create a CMS cap/floor from its fields.
    pub fn new(
        coupon: CouponData,
        fixing_time: Time,
        index: IndexSwap,
        underlying_swap: SwapFixedIbor,
        settlement_time: Time,
        strike: Rate,
        is_cap: bool,
    ) -> Result<Self> {
        check_cms(&coupon, &index, &underlying_swap, fixing_time, settlement_time)?;
        Ok(Self {
            coupon,
            fixing_time,
            index,
            underlying_swap,
            settlement_time,
            strike,
            is_cap,
        })
    }

    /// Cap or floor on the rate of a CMS coupon.
    pub fn from_coupon(coupon: &CouponCMS, strike: Rate, is_cap: bool) -> Result<Self> {
        Self::new(
            coupon.coupon.clone(),
            coupon.fixing_time,
            coupon.index.clone(),
            coupon.underlying_swap.clone(),
            coupon.settlement_time,
            strike,
            is_cap,
        )
    }

    /// The swap index.
    pub fn index(&self) -> &IndexSwap {
        &self.index
    }

    /// The swap whose rate is capped or floored.
    pub fn underlying_swap(&self) -> &SwapFixedIbor {
        &self.underlying_swap
    }

    /// Settlement (start) time of the underlying swap.
    pub fn settlement_time(&self) -> Time {
        self.settlement_time
    }
}

impl CapFloor for CapFloorCMS {
    fn strike(&self) -> Rate {
        self.strike
    }

    fn is_cap(&self) -> bool {
        self.is_cap
    }
}

impl Coupon for CapFloorCMS {
    fn coupon_data(&self) -> &CouponData {
        &self.coupon
    }

    fn with_notional(&self, notional: Real) -> Result<Self> {
        Self::new(
            self.coupon.with_notional(notional),
            self.fixing_time,
            self.index.clone(),
            self.underlying_swap.clone(),
            self.settlement_time,
            self.strike,
            self.is_cap,
        )
    }
}

impl FloatingCoupon for CapFloorCMS {
    fn fixing_time(&self) -> Time {
        self.fixing_time
    }
}

impl_coupon_cash_flow!(CouponCMS, CapFloorCMS);

impl_structural_hash!(CouponCMS {
    hash: [coupon, index, underlying_swap],
    real: [fixing_time, settlement_time]
});
impl_structural_hash!(CapFloorCMS {
    hash: [coupon, index, underlying_swap, is_cap],
    real: [fixing_time, settlement_time, strike]
});
