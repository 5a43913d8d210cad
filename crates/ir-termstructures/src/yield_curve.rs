//! `YieldCurve`: continuously compounded zero rates interpolated on times.
//!
//! The same curve object serves two purposes:
//!
//! * **discounting**: `P(t) = exp(-z(t)·t)`;
//! * **forward projection**: treated as a pseudo-discount curve, the simple
//!   forward over `[s, e]` with accrual `δ` is `(P(s)/P(e) - 1)/δ`.
//!
//! The curve parameters are the zero rates at the nodes, so sensitivities to
//! them are the interpolation weights.

use ir_core::{errors::Result, DiscountFactor, Rate, Real, Time};
use ir_math::{Interpolation1D, LinearInterpolation};

/// A named zero-rate curve with linear interpolation and flat extrapolation.
#[derive(Debug, Clone, PartialEq)]
pub struct YieldCurve {
    name: String,
    interpolation: LinearInterpolation,
}

impl YieldCurve {
    /// Build a curve from node times and continuously compounded zero rates.
    ///
    /// # Errors
    /// Returns an error if fewer than two nodes are supplied, the lengths
    /// differ, a time is negative or times are not increasing.
    pub fn new(name: impl Into<String>, times: &[Time], zero_rates: &[Rate]) -> Result<Self> {
        ir_core::ensure!(
            times.iter().all(|&t| t >= 0.0),
            "curve node times must be non-negative"
        );
        Ok(Self {
            name: name.into(),
            interpolation: LinearInterpolation::new(times, zero_rates)?,
        })
    }

    /// A flat curve: the same zero rate at every maturity.
    pub fn flat(name: impl Into<String>, rate: Rate) -> Result<Self> {
        Self::new(name, &[0.0, 1.0], &[rate, rate])
    }

    /// Curve name; sensitivities are reported under it.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Node times.
    pub fn times(&self) -> &[Time] {
        self.interpolation.xs()
    }

    /// Node zero rates.
    pub fn zero_rates(&self) -> &[Rate] {
        self.interpolation.ys()
    }

    /// Number of curve parameters (nodes).
    pub fn number_of_parameters(&self) -> usize {
        self.interpolation.xs().len()
    }

    /// Continuously compounded zero rate for maturity `t`.
    pub fn zero_rate(&self, t: Time) -> Rate {
        self.interpolation.value(t)
    }

    /// Discount factor for maturity `t`.
    pub fn discount_factor(&self, t: Time) -> DiscountFactor {
        if t == 0.0 {
            return 1.0;
        }
        (-self.zero_rate(t) * t).exp()
    }

    /// Sensitivity of the zero rate at `t` to each node rate.
    pub fn zero_rate_parameter_sensitivity(&self, t: Time) -> Vec<Real> {
        self.interpolation.node_sensitivity(t)
    }

    /// Simple forward rate over `[start, end]` with accrual factor `accrual`,
    /// the curve being read as pseudo-discount factors.
    pub fn simple_forward_rate(&self, start: Time, end: Time, accrual: Real) -> Result<Rate> {
        ir_core::ensure!(
            accrual > 0.0,
            "forward accrual factor must be positive, got {accrual}"
        );
        Ok((self.discount_factor(start) / self.discount_factor(end) - 1.0) / accrual)
    }

    /// A copy of the curve with node `index` shifted by `shift`.
    ///
    /// # Errors
    /// Returns an error if `index` is not a node.
    pub fn with_shifted_node(&self, index: usize, shift: Real) -> Result<Self> {
        let n = self.number_of_parameters();
        if index >= n {
            return Err(ir_core::Error::InvalidArgument(format!(
                "node {index} out of range [0, {n}) for curve {}",
                self.name
            )));
        }
        let mut rates = self.zero_rates().to_vec();
        rates[index] += shift;
        Self::new(self.name.clone(), self.times(), &rates)
    }

    /// A copy of the curve with every node shifted by `shift`.
    pub fn with_parallel_shift(&self, shift: Real) -> Result<Self> {
        let rates: Vec<Rate> = self.zero_rates().iter().map(|r| r + shift).collect();
        Self::new(self.name.clone(), self.times(), &rates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn curve() -> YieldCurve {
        YieldCurve::new("EUR Dsc", &[0.5, 1.0, 2.0, 5.0, 10.0], &[0.01, 0.012, 0.015, 0.02, 0.025])
            .unwrap()
    }

    #[test]
    fn discount_factor_from_zero_rate() {
        let c = curve();
        assert_abs_diff_eq!(c.discount_factor(0.0), 1.0);
        assert_abs_diff_eq!(c.discount_factor(2.0), (-0.03_f64).exp(), epsilon = 1e-15);
        assert_abs_diff_eq!(c.zero_rate(3.5), 0.0175, epsilon = 1e-15);
    }

    #[test]
    fn flat_curve_forward() {
        let c = YieldCurve::flat("flat", 0.02).unwrap();
        let fwd = c.simple_forward_rate(1.0, 1.5, 0.5).unwrap();
        assert_abs_diff_eq!(fwd, ((0.02_f64 * 0.5).exp() - 1.0) / 0.5, epsilon = 1e-14);
        assert!(c.simple_forward_rate(1.0, 1.0, 0.0).is_err());
    }

    #[test]
    fn shifted_node() {
        let c = curve();
        let bumped = c.with_shifted_node(2, 1e-4).unwrap();
        assert_eq!(bumped.name(), c.name());
        assert_abs_diff_eq!(bumped.zero_rate(2.0) - c.zero_rate(2.0), 1e-4, epsilon = 1e-15);
        assert_abs_diff_eq!(bumped.zero_rate(0.5), c.zero_rate(0.5));
        assert!(c.with_shifted_node(5, 1e-4).is_err());
    }

    #[test]
    fn parameter_sensitivity_matches_bump() {
        let c = curve();
        let t = 3.0;
        let s = c.zero_rate_parameter_sensitivity(t);
        for (i, si) in s.iter().enumerate() {
            let up = c.with_shifted_node(i, 1e-6).unwrap().zero_rate(t);
            assert_abs_diff_eq!((up - c.zero_rate(t)) / 1e-6, *si, epsilon = 1e-8);
        }
    }

    #[test]
    fn rejects_negative_times() {
        assert!(YieldCurve::new("bad", &[-1.0, 1.0], &[0.01, 0.01]).is_err());
    }
}
