//! Numerical integration.
//!
//! Replication pricing integrates smooth but strongly curved functions of
//! the strike over a bounded interval, with most of the mass close to one
//! end. [`GaussKronrodAdaptive`] splits the interval into a few panels
//! before adapting, so a wide interval cannot be accepted on one estimate
//! that never samples the peak.

use ir_core::{
    errors::{Error, Result},
    Real,
};

/// A numerical integrator.
pub trait Integrator {
    /// Integrate `f` on `[a, b]`.
    fn integrate<F: Fn(Real) -> Real>(&self, f: F, a: Real, b: Real) -> Result<Real>;
}

// ── Gauss-Kronrod ─────────────────────────────────────────────────────────────

// Kronrod 15-point abscissae on [0, 1], largest first; the odd entries are
// the Gauss 7-point abscissae.
static XGK: [Real; 8] = [
    0.991_455_371_120_812_6,
    0.949_107_912_342_758_5,
    0.864_864_423_359_769_1,
    0.741_531_185_599_394_4,
    0.586_087_235_467_691_1,
    0.405_845_151_377_397_2,
    0.207_784_955_007_898_5,
    0.0,
];
static WGK: [Real; 8] = [
    0.022_935_322_010_529_22,
    0.063_092_092_629_978_55,
    0.104_790_010_322_250_2,
    0.140_653_259_715_525_9,
    0.169_004_726_639_267_9,
    0.190_350_578_064_785_4,
    0.204_432_940_075_298_9,
    0.209_482_141_084_727_8,
];
// Gauss 7-point weights for XGK[1], XGK[3], XGK[5] and the centre.
static WG: [Real; 4] = [
    0.129_484_966_168_869_7,
    0.279_705_391_489_276_7,
    0.381_830_050_505_118_9,
    0.417_959_183_673_469_4,
];

/// Bisection depth reached before any panel may be accepted: `2^3` panels.
const MIN_DEPTH: u32 = 3;

/// Adaptive Gauss-Kronrod integration with a G7/K15 pair, bisecting every
/// panel whose Gauss and Kronrod estimates disagree.
///
/// Nodes are strictly inside each interval, so the integrand is never
/// evaluated at the bounds.
#[derive(Debug, Clone)]
pub struct GaussKronrodAdaptive {
    absolute_accuracy: Real,
    max_evaluations: usize,
}

impl GaussKronrodAdaptive {
    /// Create a new integrator.
    pub fn new(absolute_accuracy: Real, max_evaluations: usize) -> Self {
        Self {
            absolute_accuracy,
            max_evaluations,
        }
    }

    /// Kronrod estimate on `[a, b]` and its distance to the Gauss estimate.
    fn panel<F: Fn(Real) -> Real>(f: &F, a: Real, b: Real) -> (Real, Real) {
        let centre = 0.5 * (a + b);
        let half = 0.5 * (b - a);
        let fc = f(centre);
        let mut kronrod = WGK[7] * fc;
        let mut gauss = WG[3] * fc;
        for (j, (&x, &w)) in XGK[..7].iter().zip(WGK[..7].iter()).enumerate() {
            let pair = f(centre - half * x) + f(centre + half * x);
            kronrod += w * pair;
            if j % 2 == 1 {
                gauss += WG[j / 2] * pair;
            }
        }
        (kronrod * half, ((kronrod - gauss) * half).abs())
    }

    fn integrate_recursive<F: Fn(Real) -> Real>(
        &self,
        f: &F,
        a: Real,
        b: Real,
        tolerance: Real,
        depth: u32,
        evals: &mut usize,
    ) -> Result<Real> {
        if *evals >= self.max_evaluations {
            return Err(Error::Numerical(format!(
                "GaussKronrodAdaptive: max evaluations ({}) exceeded",
                self.max_evaluations
            )));
        }

        let (kronrod, error) = Self::panel(f, a, b);
        *evals += 15;

        if !kronrod.is_finite() {
            return Err(Error::Numerical(format!(
                "GaussKronrodAdaptive: non-finite integrand on [{a}, {b}]"
            )));
        }
        if depth >= MIN_DEPTH && (error < tolerance || (b - a).abs() < 1e-15) {
            return Ok(kronrod);
        }

        let mid = 0.5 * (a + b);
        let left = self.integrate_recursive(f, a, mid, 0.5 * tolerance, depth + 1, evals)?;
        let right = self.integrate_recursive(f, mid, b, 0.5 * tolerance, depth + 1, evals)?;
        Ok(left + right)
    }
}

impl Integrator for GaussKronrodAdaptive {
    fn integrate<F: Fn(Real) -> Real>(&self, f: F, a: Real, b: Real) -> Result<Real> {
        if a == b {
            return Ok(0.0);
        }
        let mut evals = 0;
        let value = self.integrate_recursive(&f, a, b, self.absolute_accuracy, 0, &mut evals)?;
        tracing::trace!(a, b, evals, value, "gauss-kronrod integration");
        Ok(value)
    }
}
