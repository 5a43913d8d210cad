//! Point sensitivities of a present value.
//!
//! A discounting point `(t, v)` on curve `c` means `v = ∂PV/∂z_c(t)` for
//! the continuously compounded zero rate at `t`, i.e. `v = −t·DF(t)·amount`
//! for an amount paid at `t`. A forward point on curve `c` carries
//! `∂PV/∂F` for the pseudo-discount forward over `[start, end]`. Both are
//! projected on curve nodes by
//! [`ParameterSensitivity`](crate::ParameterSensitivity).

use std::collections::BTreeMap;

use ir_core::{Real, Time};
use ir_currencies::Currency;

/// Sensitivity to the forward rate over one period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForwardSensitivity {
    /// Start of the forward period.
    pub start: Time,
    /// End of the forward period.
    pub end: Time,
    /// Accrual factor of the forward period.
    pub accrual: Real,
    /// `∂PV/∂F`.
    pub value: Real,
}

impl ForwardSensitivity {
    /// A point for the forward over `[start, end]`.
    pub fn new(start: Time, end: Time, accrual: Real, value: Real) -> Self {
        Self {
            start,
            end,
            accrual,
            value,
        }
    }

    fn same_period(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end && self.accrual == other.accrual
    }
}

/// Point sensitivities in one currency, keyed by curve name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MulticurveSensitivity {
    yield_discounting: BTreeMap<String, Vec<(Time, Real)>>,
    forward: BTreeMap<String, Vec<ForwardSensitivity>>,
}

impl MulticurveSensitivity {
    /// No sensitivity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discounting points on a single curve.
    pub fn of_yield_discounting(curve: impl Into<String>, points: Vec<(Time, Real)>) -> Self {
        let mut s = Self::new();
        s.yield_discounting.insert(curve.into(), points);
        s
    }

    /// Forward points on a single curve.
    pub fn of_forward(curve: impl Into<String>, points: Vec<ForwardSensitivity>) -> Self {
        let mut s = Self::new();
        s.forward.insert(curve.into(), points);
        s
    }

    /// Discounting points by curve name.
    pub fn yield_discounting(&self) -> &BTreeMap<String, Vec<(Time, Real)>> {
        &self.yield_discounting
    }

    /// Forward points by curve name.
    pub fn forward(&self) -> &BTreeMap<String, Vec<ForwardSensitivity>> {
        &self.forward
    }

    /// Return `true` if no point is held.
    pub fn is_empty(&self) -> bool {
        self.yield_discounting.values().all(Vec::is_empty)
            && self.forward.values().all(Vec::is_empty)
    }

    /// Concatenate the points of `other`.
    pub fn plus(mut self, other: &MulticurveSensitivity) -> Self {
        for (name, points) in &other.yield_discounting {
            self.yield_discounting
                .entry(name.clone())
                .or_default()
                .extend_from_slice(points);
        }
        for (name, points) in &other.forward {
            self.forward
                .entry(name.clone())
                .or_default()
                .extend_from_slice(points);
        }
        self
    }

    /// Multiply every value by `factor`.
    pub fn multiplied_by(mut self, factor: Real) -> Self {
        for points in self.yield_discounting.values_mut() {
            for (_, v) in points.iter_mut() {
                *v *= factor;
            }
        }
        for points in self.forward.values_mut() {
            for p in points.iter_mut() {
                p.value *= factor;
            }
        }
        self
    }

    /// Sort the points, merge those at the same time (or period) and drop
    /// zero values and empty curves.
    pub fn cleaned(self) -> Self {
        let yield_discounting = self
            .yield_discounting
            .into_iter()
            .map(|(name, mut points)| {
                points.sort_by(|a, b| a.0.total_cmp(&b.0));
                let mut merged: Vec<(Time, Real)> = Vec::with_capacity(points.len());
                for (t, v) in points {
                    match merged.last_mut() {
                        Some(last) if last.0 == t => last.1 += v,
                        _ => merged.push((t, v)),
                    }
                }
                merged.retain(|p| p.1 != 0.0);
                (name, merged)
            })
            .filter(|(_, points)| !points.is_empty())
            .collect();
        let forward = self
            .forward
            .into_iter()
            .map(|(name, mut points)| {
                points.sort_by(|a, b| {
                    a.start
                        .total_cmp(&b.start)
                        .then(a.end.total_cmp(&b.end))
                        .then(a.accrual.total_cmp(&b.accrual))
                });
                let mut merged: Vec<ForwardSensitivity> = Vec::with_capacity(points.len());
                for p in points {
                    match merged.last_mut() {
                        Some(last) if last.same_period(&p) => last.value += p.value,
                        _ => merged.push(p),
                    }
                }
                merged.retain(|p| p.value != 0.0);
                (name, merged)
            })
            .filter(|(_, points)| !points.is_empty())
            .collect();
        Self {
            yield_discounting,
            forward,
        }
    }
}

/// Point sensitivities per currency of the present value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipleCurrencyMulticurveSensitivity {
    sensitivities: BTreeMap<Currency, MulticurveSensitivity>,
}

impl MultipleCurrencyMulticurveSensitivity {
    /// No sensitivity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sensitivity of a present value in a single currency.
    pub fn of(currency: Currency, sensitivity: MulticurveSensitivity) -> Self {
        let mut sensitivities = BTreeMap::new();
        sensitivities.insert(currency, sensitivity);
        Self { sensitivities }
    }

    /// The sensitivity of the value in `currency`, if any.
    pub fn get(&self, currency: &Currency) -> Option<&MulticurveSensitivity> {
        self.sensitivities.get(currency)
    }

    /// Currencies held, sorted.
    pub fn currencies(&self) -> impl Iterator<Item = &Currency> + '_ {
        self.sensitivities.keys()
    }

    /// Iterate over `(currency, sensitivity)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Currency, &MulticurveSensitivity)> + '_ {
        self.sensitivities.iter()
    }

    /// Add a single-currency sensitivity.
    pub fn plus_sensitivity(
        mut self,
        currency: Currency,
        sensitivity: &MulticurveSensitivity,
    ) -> Self {
        let entry = self.sensitivities.entry(currency).or_default();
        *entry = std::mem::take(entry).plus(sensitivity);
        self
    }

    /// Add all entries of `other`.
    pub fn plus(self, other: &MultipleCurrencyMulticurveSensitivity) -> Self {
        other
            .sensitivities
            .iter()
            .fold(self, |acc, (ccy, s)| acc.plus_sensitivity(*ccy, s))
    }

    /// Multiply every value by `factor`.
    pub fn multiplied_by(self, factor: Real) -> Self {
        Self {
            sensitivities: self
                .sensitivities
                .into_iter()
                .map(|(ccy, s)| (ccy, s.multiplied_by(factor)))
                .collect(),
        }
    }

    /// Clean every currency's sensitivity.
    pub fn cleaned(self) -> Self {
        Self {
            sensitivities: self
                .sensitivities
                .into_iter()
                .map(|(ccy, s)| (ccy, s.cleaned()))
                .collect(),
        }
    }
}
