//! Undiscounted option formulas on a forward.
//!
//! Both formulas return the price per unit of numeraire together with the
//! derivatives used by the curve-sensitivity methods. Degenerate inputs
//! (expired option, zero volatility, non-positive strike for the
//! lognormal model) fall back to the intrinsic value instead of producing
//! `NaN`.

use ir_core::{Rate, Real, Time, Volatility};
use ir_math::{normal_cdf, normal_pdf};

/// Option price with its first derivatives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionPrice {
    /// Undiscounted price.
    pub price: Real,
    /// Derivative with respect to the forward.
    pub delta: Real,
    /// Derivative with respect to the volatility.
    pub vega: Real,
}

impl OptionPrice {
    fn intrinsic(forward: Rate, strike: Rate, omega: Real) -> Self {
        let value = omega * (forward - strike);
        if value > 0.0 {
            Self {
                price: value,
                delta: omega,
                vega: 0.0,
            }
        } else {
            Self {
                price: 0.0,
                delta: 0.0,
                vega: 0.0,
            }
        }
    }
}

fn sign(is_call: bool) -> Real {
    if is_call {
        1.0
    } else {
        -1.0
    }
}

/// Black (lognormal) price of a call or put on `forward`.
///
/// # Example
/// ```
/// use ir_pricing::black_price;
/// let p = black_price(0.03, 0.03, 1.0, 0.2, true);
/// assert!((p.price - 0.03 * (2.0 * ir_math::normal_cdf(0.1) - 1.0)).abs() < 1e-12);
/// ```
pub fn black_price(
    forward: Rate,
    strike: Rate,
    expiry: Time,
    volatility: Volatility,
    is_call: bool,
) -> OptionPrice {
    let omega = sign(is_call);
    let std_dev = volatility * expiry.max(0.0).sqrt();
    if strike <= 0.0 || forward <= 0.0 || std_dev <= 0.0 {
        return OptionPrice::intrinsic(forward, strike, omega);
    }
    let d1 = (forward / strike).ln() / std_dev + 0.5 * std_dev;
    let d2 = d1 - std_dev;
    let nd1 = normal_cdf(omega * d1);
    let nd2 = normal_cdf(omega * d2);
    OptionPrice {
        price: omega * (forward * nd1 - strike * nd2),
        delta: omega * nd1,
        vega: forward * normal_pdf(d1) * expiry.sqrt(),
    }
}

/// Bachelier (normal) price of a call or put on `forward`.
pub fn bachelier_price(
    forward: Rate,
    strike: Rate,
    expiry: Time,
    volatility: Volatility,
    is_call: bool,
) -> OptionPrice {
    let omega = sign(is_call);
    let sqrt_t = expiry.max(0.0).sqrt();
    let std_dev = volatility * sqrt_t;
    if std_dev <= 0.0 {
        return OptionPrice::intrinsic(forward, strike, omega);
    }
    let d = omega * (forward - strike) / std_dev;
    let nd = normal_cdf(d);
    let pd = normal_pdf(d);
    OptionPrice {
        price: std_dev * (d * nd + pd),
        delta: omega * nd,
        vega: sqrt_t * pd,
    }
}
