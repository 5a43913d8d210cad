//! Node sensitivities by symmetric bumping, as a check on the analytic
//! point sensitivities projected by [`ParameterSensitivity`].

use std::collections::BTreeMap;

use ir_cashflows::InstrumentDerivative;
use ir_core::{errors::Result, Real};
use ir_currencies::{Currency, MultipleCurrencyAmount};
use ir_termstructures::{MulticurveProvider, MulticurveProviderDiscount};

use crate::calculators::PresentValueDiscountingCalculator;
use crate::config::PricingConfig;
use crate::parameter_sensitivity::ParameterSensitivity;

/// Bumps each zero-rate node of each curve up and down by `shift` and
/// takes `(PV⁺ − PV⁻) / 2·shift` per currency of the present value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiniteDifferenceParameterSensitivity {
    shift: Real,
}

impl FiniteDifferenceParameterSensitivity {
    /// Create with the given zero-rate bump.
    ///
    /// # Errors
    /// Returns an error unless `shift` is positive and finite.
    pub fn new(shift: Real) -> Result<Self> {
        ir_core::ensure!(
            shift > 0.0 && shift.is_finite(),
            "finite difference shift must be positive, got {shift}"
        );
        Ok(Self { shift })
    }

    /// Use the shift of `config`.
    pub fn from_config(config: &PricingConfig) -> Result<Self> {
        Self::new(config.finite_difference_shift)
    }

    /// The zero-rate bump.
    pub fn shift(&self) -> Real {
        self.shift
    }

    /// Node sensitivities of the value computed by `present_value`.
    ///
    /// # Errors
    /// Propagates the first error of `present_value` on a bumped provider.
    pub fn compute_with<F>(
        &self,
        multicurve: &MulticurveProviderDiscount,
        present_value: F,
    ) -> Result<ParameterSensitivity>
    where
        F: Fn(&MulticurveProviderDiscount) -> Result<MultipleCurrencyAmount>,
    {
        let mut result = ParameterSensitivity::new();
        for name in multicurve.curve_names() {
            let Some(curve) = multicurve.curve(&name) else {
                continue;
            };
            let n = curve.number_of_parameters();
            let mut nodes: BTreeMap<Currency, Vec<Real>> = BTreeMap::new();
            for i in 0..n {
                let bumped = |shift| -> Result<MultipleCurrencyAmount> {
                    let shifted = curve.with_shifted_node(i, shift)?;
                    present_value(&multicurve.with_curve_replaced(&shifted)?)
                };
                let down = bumped(-self.shift)?.multiplied_by(-1.0);
                let difference = bumped(self.shift)?.plus(&down);
                for amount in difference.iter() {
                    nodes.entry(amount.currency).or_insert_with(|| vec![0.0; n])[i] =
                        amount.amount / (2.0 * self.shift);
                }
            }
            for (currency, values) in nodes {
                result = result.plus(&ParameterSensitivity::of(name.clone(), currency, values))?;
            }
        }
        tracing::debug!(
            shift = self.shift,
            entries = result.len(),
            "finite difference sensitivity"
        );
        Ok(result)
    }

    /// Node sensitivities of the discounting present value of `instrument`.
    pub fn compute<T>(
        &self,
        instrument: &T,
        multicurve: &MulticurveProviderDiscount,
    ) -> Result<ParameterSensitivity>
    where
        T: InstrumentDerivative + ?Sized,
    {
        self.compute_with(multicurve, |mc| {
            PresentValueDiscountingCalculator.compute(instrument, mc as &dyn MulticurveProvider)
        })
    }
}

impl Default for FiniteDifferenceParameterSensitivity {
    fn default() -> Self {
        Self {
            shift: PricingConfig::default().finite_difference_shift,
        }
    }
}
