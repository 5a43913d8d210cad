//! Multicurve data bundled with volatility surfaces.

use ir_core::errors::{Error, Result};

use crate::multicurve::MulticurveProvider;
use crate::volatility::{CapletVolatility, SwaptionVolatility};

/// Borrowed view of the market data needed by option pricing: a multicurve
/// provider plus optional caplet and swaption surfaces.
#[derive(Debug, Clone, Copy)]
pub struct VolatilityProvider<'a> {
    multicurve: &'a dyn MulticurveProvider,
    caplet: Option<&'a dyn CapletVolatility>,
    swaption: Option<&'a dyn SwaptionVolatility>,
}

impl<'a> VolatilityProvider<'a> {
    /// A provider without volatility surfaces.
    pub fn new(multicurve: &'a dyn MulticurveProvider) -> Self {
        Self {
            multicurve,
            caplet: None,
            swaption: None,
        }
    }

    /// Attach a caplet surface.
    pub fn with_caplet(mut self, caplet: &'a dyn CapletVolatility) -> Self {
        self.caplet = Some(caplet);
        self
    }

    /// Attach a swaption surface.
    pub fn with_swaption(mut self, swaption: &'a dyn SwaptionVolatility) -> Self {
        self.swaption = Some(swaption);
        self
    }

    /// The curves.
    pub fn multicurve(&self) -> &'a dyn MulticurveProvider {
        self.multicurve
    }

    /// The caplet surface.
    ///
    /// # Errors
    /// Returns [`Error::MissingMarketData`] if none was attached.
    pub fn caplet(&self) -> Result<&'a dyn CapletVolatility> {
        self.caplet
            .ok_or_else(|| Error::MissingMarketData("no caplet volatility surface".into()))
    }

    /// The swaption surface.
    ///
    /// # Errors
    /// Returns [`Error::MissingMarketData`] if none was attached.
    pub fn swaption(&self) -> Result<&'a dyn SwaptionVolatility> {
        self.swaption
            .ok_or_else(|| Error::MissingMarketData("no swaption volatility surface".into()))
    }
}
