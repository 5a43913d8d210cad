//! 1D interpolation.

use ir_core::{errors::Result, Real};

/// A 1D interpolation function `f: R → R` defined by a set of known points.
pub trait Interpolation1D: std::fmt::Debug {
    /// Evaluate the interpolation at `x`.
    fn value(&self, x: Real) -> Real;

    /// Sensitivity of [`value`](Self::value) at `x` to each node ordinate.
    fn node_sensitivity(&self, x: Real) -> Vec<Real>;

    /// Return the lower bound of the interpolation domain.
    fn x_min(&self) -> Real;

    /// Return the upper bound of the interpolation domain.
    fn x_max(&self) -> Real;

    /// Return `true` if `x` is within the interpolation range.
    fn is_in_range(&self, x: Real) -> bool {
        x >= self.x_min() && x <= self.x_max()
    }
}

// ── Linear ────────────────────────────────────────────────────────────────────

/// Linear interpolation with flat extrapolation on both sides.
///
/// `f(x) = y[i] + (y[i+1] - y[i]) * (x - x[i]) / (x[i+1] - x[i])`
#[derive(Debug, Clone, PartialEq)]
pub struct LinearInterpolation {
    xs: Vec<Real>,
    ys: Vec<Real>,
}

impl LinearInterpolation {
    /// Construct a linear interpolation from strictly increasing `xs` and
    /// corresponding `ys`.
    ///
    /// # Errors
    /// Returns an error if the slices have different lengths, hold fewer
    /// than 2 points, or `xs` is not strictly increasing.
    pub fn new(xs: &[Real], ys: &[Real]) -> Result<Self> {
        ir_core::ensure!(xs.len() >= 2, "need at least 2 points for interpolation");
        ir_core::ensure!(
            xs.len() == ys.len(),
            "xs and ys must have the same length ({} != {})",
            xs.len(),
            ys.len()
        );
        ir_core::ensure!(
            xs.windows(2).all(|w| w[1] > w[0]),
            "abscissae must be strictly increasing"
        );
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        })
    }

    /// Node abscissae.
    pub fn xs(&self) -> &[Real] {
        &self.xs
    }

    /// Node ordinates.
    pub fn ys(&self) -> &[Real] {
        &self.ys
    }

    // Index i such that x lies in [xs[i], xs[i+1]], clamped to the end intervals.
    fn locate(&self, x: Real) -> usize {
        let n = self.xs.len();
        if x <= self.xs[0] {
            return 0;
        }
        if x >= self.xs[n - 1] {
            return n - 2;
        }
        let mut lo = 0;
        let mut hi = n - 1;
        while hi - lo > 1 {
            let mid = (lo + hi) / 2;
            if self.xs[mid] <= x {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        lo
    }

    // (index, weight on index+1), clamped so extrapolation is flat.
    fn weight(&self, x: Real) -> (usize, Real) {
        let i = self.locate(x);
        let w = ((x - self.xs[i]) / (self.xs[i + 1] - self.xs[i])).clamp(0.0, 1.0);
        (i, w)
    }
}

impl Interpolation1D for LinearInterpolation {
    fn x_min(&self) -> Real {
        self.xs[0]
    }

    fn x_max(&self) -> Real {
        self.xs[self.xs.len() - 1]
    }

    fn value(&self, x: Real) -> Real {
        let (i, w) = self.weight(x);
        (1.0 - w) * self.ys[i] + w * self.ys[i + 1]
    }

    fn node_sensitivity(&self, x: Real) -> Vec<Real> {
        let (i, w) = self.weight(x);
        let mut sensitivity = vec![0.0; self.xs.len()];
        sensitivity[i] = 1.0 - w;
        sensitivity[i + 1] += w;
        sensitivity
    }
}
