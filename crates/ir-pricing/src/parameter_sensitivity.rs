//! Sensitivities to the zero-rate nodes of each curve.

use std::collections::BTreeMap;

use ir_core::{
    errors::{Error, Result},
    Real,
};
use ir_currencies::Currency;
use ir_termstructures::{MulticurveProvider, YieldCurve};

use crate::sensitivity::{ForwardSensitivity, MultipleCurrencyMulticurveSensitivity};

/// Node sensitivities keyed by `(curve name, currency of the value)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSensitivity {
    sensitivities: BTreeMap<(String, Currency), Vec<Real>>,
}

impl ParameterSensitivity {
    /// No sensitivity.
    pub fn new() -> Self {
        Self::default()
    }

    /// A single curve's node vector.
    pub fn of(curve: impl Into<String>, currency: Currency, nodes: Vec<Real>) -> Self {
        let mut sensitivities = BTreeMap::new();
        sensitivities.insert((curve.into(), currency), nodes);
        Self { sensitivities }
    }

    /// Project point sensitivities on the nodes of the provider's curves.
    ///
    /// A discounting point `(t, v)` contributes `v·w_i(t)` to node `i`,
    /// with `w_i` the interpolation weights. A forward point over
    /// `[s, e]` with accrual `δ` contributes
    /// `v·(1/δ)·(P(s)/P(e))·(−s·w_i(s) + e·w_i(e))`.
    ///
    /// # Errors
    /// Returns [`Error::MissingMarketData`] if a point refers to a curve the
    /// provider does not hold.
    pub fn from_point_sensitivities(
        points: &MultipleCurrencyMulticurveSensitivity,
        multicurve: &dyn MulticurveProvider,
    ) -> Result<Self> {
        let mut result = Self::new();
        for (ccy, sensitivity) in points.iter() {
            for (name, discounting) in sensitivity.yield_discounting() {
                let curve = lookup(multicurve, name)?;
                let mut nodes = vec![0.0; curve.number_of_parameters()];
                for &(t, v) in discounting {
                    for (n, w) in nodes.iter_mut().zip(curve.zero_rate_parameter_sensitivity(t)) {
                        *n += v * w;
                    }
                }
                result = result.plus(&Self::of(name.clone(), *ccy, nodes))?;
            }
            for (name, forwards) in sensitivity.forward() {
                let curve = lookup(multicurve, name)?;
                let mut nodes = vec![0.0; curve.number_of_parameters()];
                for point in forwards {
                    project_forward(curve, point, &mut nodes)?;
                }
                result = result.plus(&Self::of(name.clone(), *ccy, nodes))?;
            }
        }
        Ok(result)
    }

    /// The node vector of `curve` for values in `currency`, if any.
    pub fn get(&self, curve: &str, currency: &Currency) -> Option<&[Real]> {
        self.sensitivities
            .get(&(curve.to_string(), *currency))
            .map(Vec::as_slice)
    }

    /// Iterate over `((curve, currency), nodes)`.
    pub fn iter(&self) -> impl Iterator<Item = (&(String, Currency), &Vec<Real>)> + '_ {
        self.sensitivities.iter()
    }

    /// Number of `(curve, currency)` entries.
    pub fn len(&self) -> usize {
        self.sensitivities.len()
    }

    /// Return `true` if no entry is held.
    pub fn is_empty(&self) -> bool {
        self.sensitivities.is_empty()
    }

    /// Add `other` node by node.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if both hold a vector for the same
    /// key with different lengths.
    pub fn plus(mut self, other: &ParameterSensitivity) -> Result<Self> {
        for (key, nodes) in &other.sensitivities {
            match self.sensitivities.get_mut(key) {
                Some(existing) => {
                    if existing.len() != nodes.len() {
                        return Err(Error::InvalidArgument(format!(
                            "curve {} has {} nodes, cannot add {}",
                            key.0,
                            existing.len(),
                            nodes.len()
                        )));
                    }
                    for (a, b) in existing.iter_mut().zip(nodes) {
                        *a += b;
                    }
                }
                None => {
                    self.sensitivities.insert(key.clone(), nodes.clone());
                }
            }
        }
        Ok(self)
    }

    /// Multiply every node by `factor`.
    pub fn multiplied_by(mut self, factor: Real) -> Self {
        for nodes in self.sensitivities.values_mut() {
            for n in nodes.iter_mut() {
                *n *= factor;
            }
        }
        self
    }

    /// Largest absolute node difference with `other`; a key missing on one
    /// side counts as zeros.
    pub fn max_abs_difference(&self, other: &ParameterSensitivity) -> Real {
        let mut max: Real = 0.0;
        for (key, nodes) in &self.sensitivities {
            let theirs = other.sensitivities.get(key);
            for (i, a) in nodes.iter().enumerate() {
                let b = theirs.and_then(|v| v.get(i)).copied().unwrap_or(0.0);
                max = max.max((a - b).abs());
            }
        }
        for (key, nodes) in &other.sensitivities {
            if !self.sensitivities.contains_key(key) {
                max = nodes.iter().fold(max, |m, n| m.max(n.abs()));
            }
        }
        max
    }
}

fn lookup<'a>(multicurve: &'a dyn MulticurveProvider, name: &str) -> Result<&'a YieldCurve> {
    multicurve
        .curve(name)
        .ok_or_else(|| Error::MissingMarketData(format!("no curve named {name}")))
}

fn project_forward(
    curve: &YieldCurve,
    point: &ForwardSensitivity,
    nodes: &mut [Real],
) -> Result<()> {
    if point.accrual <= 0.0 {
        return Err(Error::Numerical(format!(
            "forward sensitivity over [{}, {}] has accrual {}",
            point.start, point.end, point.accrual
        )));
    }
    let ratio = curve.discount_factor(point.start) / curve.discount_factor(point.end);
    let factor = point.value * ratio / point.accrual;
    let ws = curve.zero_rate_parameter_sensitivity(point.start);
    let we = curve.zero_rate_parameter_sensitivity(point.end);
    for ((n, s), e) in nodes.iter_mut().zip(ws).zip(we) {
        *n += factor * (-point.start * s + point.end * e);
    }
    Ok(())
}
