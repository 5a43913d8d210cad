//! SABR (Stochastic Alpha Beta Rho) implied volatility.
//!
//! Hagan et al. (2002) lognormal expansion, used to build the volatility
//! smile that CMS replication integrates over.

use ir_core::{errors::Result, Real};

/// SABR model parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SabrParameters {
    /// Alpha (level of the volatility process).
    pub alpha: Real,
    /// Beta (CEV exponent: 0 = normal, 1 = lognormal).
    pub beta: Real,
    /// Nu (vol-of-vol).
    pub nu: Real,
    /// Rho (correlation between forward and volatility).
    pub rho: Real,
}

impl SabrParameters {
    /// Create a validated parameter set.
    ///
    /// # Errors
    /// Returns an error unless `alpha > 0`, `0 ≤ beta ≤ 1`, `nu ≥ 0` and
    /// `-1 < rho < 1`.
    pub fn new(alpha: Real, beta: Real, nu: Real, rho: Real) -> Result<Self> {
        ir_core::ensure!(alpha > 0.0, "SABR alpha must be positive, got {alpha}");
        ir_core::ensure!(
            (0.0..=1.0).contains(&beta),
            "SABR beta must be in [0, 1], got {beta}"
        );
        ir_core::ensure!(nu >= 0.0, "SABR nu must be non-negative, got {nu}");
        ir_core::ensure!(
            rho > -1.0 && rho < 1.0,
            "SABR rho must be in (-1, 1), got {rho}"
        );
        Ok(Self {
            alpha,
            beta,
            nu,
            rho,
        })
    }
}

/// Implied Black volatility σ_B(K) from the Hagan et al. (2002) formula.
///
/// * `f`: forward rate (positive)
/// * `k`: strike (positive)
/// * `t`: time to expiry in years
pub fn sabr_volatility(f: Real, k: Real, t: Real, p: &SabrParameters) -> Real {
    let SabrParameters {
        alpha,
        beta,
        nu,
        rho,
    } = *p;

    if (f - k).abs() < 1e-12 * f.abs().max(1e-30) {
        return sabr_volatility_atm(f, t, p);
    }

    let one_minus_beta = 1.0 - beta;
    let fk = f * k;
    let fk_beta = fk.powf(one_minus_beta);
    let fk_half_beta = fk.powf(one_minus_beta / 2.0);
    let log_fk = (f / k).ln();

    // z = (nu / alpha) * (f*k)^((1-β)/2) * ln(f/k)
    let z = (nu / alpha) * fk_half_beta * log_fk;
    // x(z) = ln((√(1 - 2ρz + z²) + z - ρ) / (1 - ρ))
    let sqrt_val = (1.0 - 2.0 * rho * z + z * z).max(0.0).sqrt();
    let xz = ((sqrt_val + z - rho) / (1.0 - rho)).ln();

    let ratio = if z.abs() < 1e-12 || xz.abs() < 1e-15 {
        1.0
    } else {
        z / xz
    };

    let a = one_minus_beta * one_minus_beta;
    let denom =
        fk_half_beta * (1.0 + a / 24.0 * log_fk * log_fk + a * a / 1920.0 * log_fk.powi(4));
    let correction = 1.0
        + (a / 24.0 * alpha * alpha / fk_beta
            + 0.25 * rho * beta * nu * alpha / fk_half_beta
            + (2.0 - 3.0 * rho * rho) / 24.0 * nu * nu)
            * t;

    alpha / denom * ratio * correction
}

fn sabr_volatility_atm(f: Real, t: Real, p: &SabrParameters) -> Real {
    let one_minus_beta = 1.0 - p.beta;
    let f_beta = f.powf(one_minus_beta);

    let term1 = one_minus_beta * one_minus_beta / 24.0 * p.alpha * p.alpha / (f_beta * f_beta);
    let term2 = 0.25 * p.rho * p.beta * p.nu * p.alpha / f_beta;
    let term3 = (2.0 - 3.0 * p.rho * p.rho) / 24.0 * p.nu * p.nu;

    p.alpha / f_beta * (1.0 + (term1 + term2 + term3) * t)
}
