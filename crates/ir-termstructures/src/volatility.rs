//! Volatility surfaces for caplets and swaptions.

use std::fmt;

use ir_core::{
    errors::{Error, Result},
    Rate, Time, Volatility,
};
use ir_math::{sabr_volatility, SabrParameters};

/// Dynamics a volatility is quoted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolatilityModel {
    /// Lognormal (Black) volatility.
    Black,
    /// Normal (Bachelier) volatility.
    Normal,
}

impl fmt::Display for VolatilityModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VolatilityModel::Black => write!(f, "Black"),
            VolatilityModel::Normal => write!(f, "Normal"),
        }
    }
}

/// Implied volatility of Ibor caplets by expiry and strike.
pub trait CapletVolatility: fmt::Debug + Send + Sync {
    /// The model the volatilities are quoted in.
    fn model(&self) -> VolatilityModel;

    /// Implied volatility for a caplet fixing at `expiry` struck at `strike`.
    fn volatility(&self, expiry: Time, strike: Rate) -> Result<Volatility>;
}

/// Implied Black volatility of swaptions by expiry, underlying tenor,
/// strike and forward swap rate.
pub trait SwaptionVolatility: fmt::Debug + Send + Sync {
    /// Black volatility of a swaption.
    fn volatility(
        &self,
        expiry: Time,
        tenor: Time,
        strike: Rate,
        forward: Rate,
    ) -> Result<Volatility>;
}

/// The same volatility at every expiry and strike.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatVolatility {
    model: VolatilityModel,
    volatility: Volatility,
}

impl FlatVolatility {
    /// A flat lognormal volatility.
    pub fn black(volatility: Volatility) -> Result<Self> {
        Self::new(VolatilityModel::Black, volatility)
    }

    /// A flat normal volatility.
    pub fn normal(volatility: Volatility) -> Result<Self> {
        Self::new(VolatilityModel::Normal, volatility)
    }

    fn new(model: VolatilityModel, volatility: Volatility) -> Result<Self> {
        ir_core::ensure!(
            volatility >= 0.0 && volatility.is_finite(),
            "volatility must be non-negative, got {volatility}"
        );
        Ok(Self { model, volatility })
    }
}

impl CapletVolatility for FlatVolatility {
    fn model(&self) -> VolatilityModel {
        self.model
    }

    fn volatility(&self, _expiry: Time, _strike: Rate) -> Result<Volatility> {
        Ok(self.volatility)
    }
}

impl SwaptionVolatility for FlatVolatility {
    fn volatility(
        &self,
        _expiry: Time,
        _tenor: Time,
        _strike: Rate,
        _forward: Rate,
    ) -> Result<Volatility> {
        match self.model {
            VolatilityModel::Black => Ok(self.volatility),
            VolatilityModel::Normal => Err(Error::InvalidArgument(
                "swaption volatilities must be quoted as Black volatilities".into(),
            )),
        }
    }
}

/// Swaption smile from a single SABR parameter set (Hagan lognormal
/// expansion).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SabrSwaptionVolatility {
    parameters: SabrParameters,
}

impl SabrSwaptionVolatility {
    /// Create a surface from calibrated parameters.
    pub fn new(parameters: SabrParameters) -> Self {
        Self { parameters }
    }

    /// The SABR parameters.
    pub fn parameters(&self) -> &SabrParameters {
        &self.parameters
    }
}

impl SwaptionVolatility for SabrSwaptionVolatility {
    fn volatility(
        &self,
        expiry: Time,
        _tenor: Time,
        strike: Rate,
        forward: Rate,
    ) -> Result<Volatility> {
        if strike <= 0.0 || forward <= 0.0 {
            return Err(Error::InvalidArgument(format!(
                "SABR lognormal volatility needs positive strike and forward, \
                 got {strike} / {forward}"
            )));
        }
        let vol = sabr_volatility(forward, strike, expiry, &self.parameters);
        if !vol.is_finite() {
            return Err(Error::Numerical(format!(
                "SABR volatility not finite at strike {strike}"
            )));
        }
        Ok(vol)
    }
}
