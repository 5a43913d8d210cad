//! Ibor caplets and floorlets.

use ir_core::{errors::Result, Rate, Real, Time};

use crate::coupon::{CapFloor, Coupon, CouponData, FloatingCoupon, IborFixing};
use crate::coupon_ibor::CouponIbor;

/// A caplet or floorlet on an Ibor fixing: pays
/// `N · δ · max(ω(F − K), 0)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CapFloorIbor {
    coupon: CouponData,
    fixing: IborFixing,
    strike: Rate,
    is_cap: bool,
}

impl CapFloorIbor {
    /// Create a caplet/floorlet from its fields.
    pub fn new(coupon: CouponData, fixing: IborFixing, strike: Rate, is_cap: bool) -> Result<Self> {
        fixing.check_currency(&coupon)?;
        Ok(Self {
            coupon,
            fixing,
            strike,
            is_cap,
        })
    }

    /// Caplet (`is_cap`) or floorlet on the fixing of an Ibor coupon.
    pub fn from_coupon(coupon: &CouponIbor, strike: Rate, is_cap: bool) -> Result<Self> {
        Self::new(coupon.coupon_data().clone(), coupon.fixing().clone(), strike, is_cap)
    }

    /// The fixing description.
    pub fn fixing(&self) -> &IborFixing {
        &self.fixing
    }

    /// The same option on the other side (cap ↔ floor).
    pub fn with_opposite_side(&self) -> Self {
        Self {
            is_cap: !self.is_cap,
            ..self.clone()
        }
    }

    /// The same option with another strike.
    pub fn with_strike(&self, strike: Rate) -> Self {
        Self {
            strike,
            ..self.clone()
        }
    }
}

impl CapFloor for CapFloorIbor {
    fn strike(&self) -> Rate {
        self.strike
    }

    fn is_cap(&self) -> bool {
        self.is_cap
    }
}

impl Coupon for CapFloorIbor {
    fn coupon_data(&self) -> &CouponData {
        &self.coupon
    }

    fn with_notional(&self, notional: Real) -> Result<Self> {
        Self::new(
            self.coupon.with_notional(notional),
            self.fixing.clone(),
            self.strike,
            self.is_cap,
        )
    }
}

impl FloatingCoupon for CapFloorIbor {
    fn fixing_time(&self) -> Time {
        self.fixing.fixing_time()
    }
}

impl_coupon_cash_flow!(CapFloorIbor);
impl_structural_hash!(CapFloorIbor {
    hash: [coupon, fixing, is_cap],
    real: [strike]
});

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ir_currencies::currencies::EUR;
    use ir_indexes::euribor;
    use ir_time::Period;

    fn caplet(strike: Rate, is_cap: bool) -> CapFloorIbor {
        let fixing = IborFixing::new(euribor(Period::months(3)), 0.9, 1.0, 1.25, 0.25).unwrap();
        let data = CouponData::new(EUR, 1.25, 0.25, 1e6).unwrap();
        let coupon = CouponIbor::new(data, fixing).unwrap();
        CapFloorIbor::from_coupon(&coupon, strike, is_cap).unwrap()
    }

    #[test]
    fn payoffs() {
        let cap = caplet(0.04, true);
        assert_abs_diff_eq!(cap.pay_off(0.05), 0.01, epsilon = 1e-15);
        assert_eq!(cap.pay_off(0.03), 0.0);
        let floor = cap.with_opposite_side();
        assert_eq!(floor.pay_off(0.05), 0.0);
        assert_abs_diff_eq!(floor.pay_off(0.03), 0.01, epsilon = 1e-15);
        assert_eq!(cap.with_strike(0.06).pay_off(0.05), 0.0);
    }

    #[test]
    fn keeps_coupon_fields() {
        let cap = caplet(0.04, true);
        assert_eq!(cap.fixing_time(), 0.9);
        assert_eq!(cap.notional(), 1e6);
        assert_eq!(cap.with_notional(2e6).unwrap().notional(), 2e6);
    }
}
