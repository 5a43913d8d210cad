//! Stub coupons whose rate interpolates between two index tenors.
//!
//! A short or long first/last period rarely matches an index tenor. The
//! stub rate is interpolated linearly in end time between the forwards of
//! two deposits starting with the coupon: one ending at
//! `first_interpolated_time`, the other at `second_interpolated_time`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use ir_core::{errors::Result, HashReal, Real, Time};
use ir_currencies::Currency;
use ir_indexes::{IborIndex, IndexDeposit, IndexON};

use crate::cashflow::CashFlow;
use crate::coupon::{Coupon, CouponData, DepositIndexCoupon, FloatingCoupon};
use crate::coupon_ibor::CouponIbor;
use crate::coupon_on::CouponON;
use crate::validation;

/// A coupon of index `I` whose rate is interpolated between two tenors.
pub struct InterpolatedStubCoupon<C, I> {
    full_coupon: C,
    first_interpolated_time: Time,
    first_interpolated_year_fraction: Real,
    second_interpolated_time: Time,
    second_interpolated_year_fraction: Real,
    index: PhantomData<I>,
}

/// Stub on an Ibor index.
pub type IborInterpolatedStubCoupon = InterpolatedStubCoupon<CouponIbor, IborIndex>;

/// Stub on an overnight index.
pub type OvernightInterpolatedStubCoupon = InterpolatedStubCoupon<CouponON, IndexON>;

impl<C, I> InterpolatedStubCoupon<C, I>
where
    C: DepositIndexCoupon<I> + FloatingCoupon + Clone,
    I: IndexDeposit,
{
    /// Wrap `full_coupon` with the two interpolation tenors.
    ///
    /// # Errors
    /// Returns an error unless `start ≤ t₁ ≤ end ≤ t₂` (with `start` and
    /// `end` the fixing period of the coupon) and both year fractions are
    /// non-negative.
    pub fn new(
        full_coupon: C,
        first_interpolated_time: Time,
        first_interpolated_year_fraction: Real,
        second_interpolated_time: Time,
        second_interpolated_year_fraction: Real,
    ) -> Result<Self> {
        let start = full_coupon.fixing_period_start_time();
        ir_core::ensure!(
            first_interpolated_time >= start,
            "first interpolated time {first_interpolated_time} is before fixing period \
             start {start}"
        );
        ir_core::ensure!(
            second_interpolated_time >= first_interpolated_time,
            "second interpolated time {second_interpolated_time} is before first \
             {first_interpolated_time}"
        );
        let end = full_coupon.fixing_period_end_time();
        ir_core::ensure!(
            first_interpolated_time <= end && end <= second_interpolated_time,
            "fixing period end {end} is outside the interpolated tenors \
             [{first_interpolated_time}, {second_interpolated_time}]"
        );
        validation::non_negative(
            "first interpolated year fraction",
            first_interpolated_year_fraction,
        )?;
        validation::non_negative(
            "second interpolated year fraction",
            second_interpolated_year_fraction,
        )?;
        Ok(Self {
            full_coupon,
            first_interpolated_time,
            first_interpolated_year_fraction,
            second_interpolated_time,
            second_interpolated_year_fraction,
            index: PhantomData,
        })
    }

    /// The coupon over the stub period.
    pub fn full_coupon(&self) -> &C {
        &self.full_coupon
    }

    /// End time of the shorter tenor deposit.
    pub fn first_interpolated_time(&self) -> Time {
        self.first_interpolated_time
    }

    /// Accrual factor of the shorter tenor deposit.
    pub fn first_interpolated_year_fraction(&self) -> Real {
        self.first_interpolated_year_fraction
    }

    /// End time of the longer tenor deposit.
    pub fn second_interpolated_time(&self) -> Time {
        self.second_interpolated_time
    }

    /// Accrual factor of the longer tenor deposit.
    pub fn second_interpolated_year_fraction(&self) -> Real {
        self.second_interpolated_year_fraction
    }

    /// Weight of the second forward: `(t_end − t₁)/(t₂ − t₁)`, zero when
    /// both tenors coincide.
    pub fn interpolation_weight(&self) -> Real {
        let span = self.second_interpolated_time - self.first_interpolated_time;
        if span == 0.0 {
            0.0
        } else {
            (self.full_coupon.fixing_period_end_time() - self.first_interpolated_time) / span
        }
    }
}

impl<C: Clone, I> Clone for InterpolatedStubCoupon<C, I> {
    fn clone(&self) -> Self {
        Self {
            full_coupon: self.full_coupon.clone(),
            index: PhantomData,
            ..*self
        }
    }
}

impl<C: fmt::Debug, I> fmt::Debug for InterpolatedStubCoupon<C, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterpolatedStubCoupon")
            .field("full_coupon", &self.full_coupon)
            .field("first_interpolated_time", &self.first_interpolated_time)
            .field("first_interpolated_year_fraction", &self.first_interpolated_year_fraction)
            .field("second_interpolated_time", &self.second_interpolated_time)
            .field("second_interpolated_year_fraction", &self.second_interpolated_year_fraction)
            .finish()
    }
}

impl<C: PartialEq, I> PartialEq for InterpolatedStubCoupon<C, I> {
    fn eq(&self, other: &Self) -> bool {
        self.full_coupon == other.full_coupon
            && self.first_interpolated_time == other.first_interpolated_time
            && self.first_interpolated_year_fraction == other.first_interpolated_year_fraction
            && self.second_interpolated_time == other.second_interpolated_time
            && self.second_interpolated_year_fraction == other.second_interpolated_year_fraction
    }
}

impl<C: Hash, I> Hash for InterpolatedStubCoupon<C, I> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.full_coupon.hash(state);
        self.first_interpolated_time.hash_real(state);
        self.first_interpolated_year_fraction.hash_real(state);
        self.second_interpolated_time.hash_real(state);
        self.second_interpolated_year_fraction.hash_real(state);
    }
}

impl<C, I> CashFlow for InterpolatedStubCoupon<C, I>
where
    C: CashFlow,
    I: Send + Sync,
{
    fn currency(&self) -> Currency {
        self.full_coupon.currency()
    }

    fn payment_time(&self) -> Time {
        self.full_coupon.payment_time()
    }

    fn reference_amount(&self) -> Real {
        self.full_coupon.reference_amount()
    }
}

impl<C, I> Coupon for InterpolatedStubCoupon<C, I>
where
    C: DepositIndexCoupon<I> + FloatingCoupon + Clone,
    I: IndexDeposit,
{
    fn coupon_data(&self) -> &CouponData {
        self.full_coupon.coupon_data()
    }

    fn with_notional(&self, notional: Real) -> Result<Self> {
        Self::new(
            self.full_coupon.with_notional(notional)?,
            self.first_interpolated_time,
            self.first_interpolated_year_fraction,
            self.second_interpolated_time,
            self.second_interpolated_year_fraction,
        )
    }
}

impl<C, I> FloatingCoupon for InterpolatedStubCoupon<C, I>
where
    C: DepositIndexCoupon<I> + FloatingCoupon + Clone,
    I: IndexDeposit,
{
    fn fixing_time(&self) -> Time {
        self.full_coupon.fixing_time()
    }
}

impl<C, I> DepositIndexCoupon<I> for InterpolatedStubCoupon<C, I>
where
    C: DepositIndexCoupon<I> + FloatingCoupon + Clone,
    I: IndexDeposit,
{
    fn index(&self) -> &I {
        self.full_coupon.index()
    }

    fn fixing_period_start_time(&self) -> Time {
        self.full_coupon.fixing_period_start_time()
    }

    fn fixing_period_end_time(&self) -> Time {
        self.full_coupon.fixing_period_end_time()
    }

    fn fixing_accrual_factor(&self) -> Real {
        self.full_coupon.fixing_accrual_factor()
    }
}
