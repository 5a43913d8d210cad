//! Annuities (legs) and two-leg swaps.

use ir_core::{errors::Result, Rate, Real};
use ir_currencies::Currency;

use crate::cashflow::CashFlow;
use crate::coupon::Coupon;
use crate::coupon_fixed::CouponFixed;
use crate::coupon_ibor::CouponIbor;
use crate::validation;

// ── Annuity ───────────────────────────────────────────────────────────────────

/// A non-empty sequence of payments in one currency.
#[derive(Debug, Clone, PartialEq, Hash)]
pub struct Annuity<P> {
    payments: Vec<P>,
}

impl<P: CashFlow> Annuity<P> {
    /// Create an annuity.
    ///
    /// # Errors
    /// Returns an error if `payments` is empty or the payments are not all
    /// in the same currency.
    pub fn new(payments: Vec<P>) -> Result<Self> {
        validation::not_empty("annuity payments", payments.len())?;
        let currency = payments[0].currency();
        for p in &payments[1..] {
            ir_core::ensure!(
                p.currency() == currency,
                "annuity mixes currencies {currency} and {}",
                p.currency()
            );
        }
        Ok(Self { payments })
    }

    /// The payments in order.
    pub fn payments(&self) -> &[P] {
        &self.payments
    }

    /// Currency of the payments.
    pub fn currency(&self) -> Currency {
        self.payments[0].currency()
    }

    /// `true` when the first payment is paid (negative reference amount).
    pub fn is_payer(&self) -> bool {
        self.payments[0].reference_amount() < 0.0
    }

    /// Number of payments.
    pub fn number_of_payments(&self) -> usize {
        self.payments.len()
    }

    /// The payment at `index`, if any.
    pub fn nth_payment(&self, index: usize) -> Option<&P> {
        self.payments.get(index)
    }
}

impl<P: Coupon + Clone> Annuity<P> {
    /// The same annuity with every coupon notional set to `notional`.
    pub fn with_notional(&self, notional: Real) -> Result<Self> {
        let payments = self
            .payments
            .iter()
            .map(|p| p.with_notional(notional))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { payments })
    }
}

// ── Swap ──────────────────────────────────────────────────────────────────────

/// Two legs exchanged against each other.
#[derive(Debug, Clone, PartialEq, Hash)]
pub struct Swap<P1, P2> {
    first_leg: Annuity<P1>,
    second_leg: Annuity<P2>,
}

impl<P1: CashFlow, P2: CashFlow> Swap<P1, P2> {
    /// Create a swap.
    pub fn new(first_leg: Annuity<P1>, second_leg: Annuity<P2>) -> Self {
        Self {
            first_leg,
            second_leg,
        }
    }

    /// First leg.
    pub fn first_leg(&self) -> &Annuity<P1> {
        &self.first_leg
    }

    /// Second leg.
    pub fn second_leg(&self) -> &Annuity<P2> {
        &self.second_leg
    }
}

/// Fixed against Ibor swap, the underlying of CMS coupons.
pub type SwapFixedIbor = Swap<CouponFixed, CouponIbor>;

impl Swap<CouponFixed, CouponIbor> {
    /// Create a fixed/Ibor swap.
    ///
    /// # Errors
    /// Returns an error if the legs are in different currencies.
    pub fn fixed_ibor(
        fixed_leg: Annuity<CouponFixed>,
        ibor_leg: Annuity<CouponIbor>,
    ) -> Result<Self> {
        validation::same_currency(&fixed_leg.currency(), &ibor_leg.currency())?;
        Ok(Self::new(fixed_leg, ibor_leg))
    }

    /// The fixed leg.
    pub fn fixed_leg(&self) -> &Annuity<CouponFixed> {
        &self.first_leg
    }

    /// The Ibor leg.
    pub fn ibor_leg(&self) -> &Annuity<CouponIbor> {
        &self.second_leg
    }

    /// The same swap with every fixed coupon paying `rate`.
    pub fn with_fixed_rate(&self, rate: Rate) -> Result<Self> {
        let fixed = self
            .first_leg
            .payments()
            .iter()
            .map(|c| c.with_rate(rate))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(Annuity::new(fixed)?, self.second_leg.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coupon::{CouponData, IborFixing};
    use crate::PaymentFixed;
    use ir_currencies::currencies::{EUR, USD};
    use ir_indexes::euribor;
    use ir_time::Period;

    fn fixed_leg(notional: Real) -> Annuity<CouponFixed> {
        let coupons = (1..=3)
            .map(|i| {
                let data = CouponData::new(EUR, i as Real, 1.0, notional).unwrap();
                CouponFixed::new(data, 0.02).unwrap()
            })
            .collect();
        Annuity::new(coupons).unwrap()
    }

    #[test]
    fn construction() {
        assert!(Annuity::<PaymentFixed>::new(vec![]).is_err());
        let mixed = vec![
            PaymentFixed::new(EUR, 1.0, 1.0).unwrap(),
            PaymentFixed::new(USD, 2.0, 1.0).unwrap(),
        ];
        assert!(Annuity::new(mixed).is_err());

        let leg = fixed_leg(-100.0);
        assert!(leg.is_payer());
        assert_eq!(leg.number_of_payments(), 3);
        assert_eq!(leg.nth_payment(2).unwrap().payment_time(), 3.0);
        assert!(leg.nth_payment(3).is_none());
        assert!(!leg.with_notional(100.0).unwrap().is_payer());
    }

    #[test]
    fn fixed_rate_replacement() {
        let fixing = IborFixing::new(euribor(Period::years(1)), 0.0, 0.0, 1.0, 1.0).unwrap();
        let data = CouponData::new(EUR, 1.0, 1.0, 100.0).unwrap();
        let ibor = Annuity::new(vec![CouponIbor::new(data, fixing).unwrap()]).unwrap();
        let swap = SwapFixedIbor::fixed_ibor(fixed_leg(-100.0), ibor).unwrap();
        let repriced = swap.with_fixed_rate(0.03).unwrap();
        assert!(repriced.fixed_leg().payments().iter().all(|c| c.fixed_rate() == 0.03));
        assert_eq!(repriced.ibor_leg(), swap.ibor_leg());
    }
}
