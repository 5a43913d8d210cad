//! Numerical settings shared by the pricing methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use ir_core::{
    errors::{Error, Result},
    Real,
};

/// Numerical settings for pricing.
///
/// Every field has a default, so a TOML document only needs to name the
/// settings it changes:
///
/// ```
/// use ir_pricing::PricingConfig;
/// let config = PricingConfig::from_toml_str("cms_integration_interval = 2.0").unwrap();
/// assert_eq!(config.cms_integration_interval, 2.0);
/// assert_eq!(config.finite_difference_shift, 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricingConfig {
    /// Width of the strike range above the strike integrated over when
    /// replicating a CMS cap.
    pub cms_integration_interval: Real,

    /// Absolute tolerance of the replication integrator.
    pub integration_absolute_tolerance: Real,

    /// Maximum number of integrand evaluations of the replication
    /// integrator.
    pub integration_max_evaluations: usize,

    /// Zero-rate bump used by finite-difference sensitivities.
    pub finite_difference_shift: Real,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            cms_integration_interval: 1.0,
            integration_absolute_tolerance: 1e-8,
            integration_max_evaluations: 10_000,
            finite_difference_shift: 1e-6,
        }
    }
}

impl PricingConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] on malformed TOML or unknown keys,
    /// and [`Error::Precondition`] if a value is out of range.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| Error::InvalidArgument(format!("pricing config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    ///
    /// # Errors
    /// As [`PricingConfig::from_toml_str`], plus [`Error::Runtime`] if the
    /// file cannot be read.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Runtime(format!("reading {}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "loading pricing config");
        Self::from_toml_str(&content)
    }

    /// Check that every setting is usable.
    pub fn validate(&self) -> Result<()> {
        ir_core::ensure!(
            self.cms_integration_interval > 0.0,
            "cms_integration_interval must be positive, got {}",
            self.cms_integration_interval
        );
        ir_core::ensure!(
            self.integration_absolute_tolerance > 0.0,
            "integration_absolute_tolerance must be positive, got {}",
            self.integration_absolute_tolerance
        );
        ir_core::ensure!(
            self.integration_max_evaluations > 0,
            "integration_max_evaluations must be positive"
        );
        ir_core::ensure!(
            self.finite_difference_shift > 0.0,
            "finite_difference_shift must be positive, got {}",
            self.finite_difference_shift
        );
        Ok(())
    }

    /// The same settings with another replication interval.
    pub fn with_cms_integration_interval(mut self, interval: Real) -> Self {
        self.cms_integration_interval = interval;
        self
    }

    /// The same settings with another finite-difference shift.
    pub fn with_finite_difference_shift(mut self, shift: Real) -> Self {
        self.finite_difference_shift = shift;
        self
    }
}
