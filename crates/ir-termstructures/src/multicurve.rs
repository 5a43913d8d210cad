//! Multicurve market-data provider.

use std::collections::HashMap;
use std::fmt;

use ir_core::{
    errors::{Error, Result},
    DiscountFactor, Rate, Real, Time,
};
use ir_currencies::{Currency, FxMatrix};
use ir_indexes::{IborIndex, IndexON, IndexPrice};

use crate::price_index_curve::PriceIndexCurve;
use crate::yield_curve::YieldCurve;

/// Market-data lookups needed to price linear interest-rate instruments.
///
/// Every lookup fails with [`Error::MissingMarketData`] when the provider
/// holds no curve for the requested currency or index.
pub trait MulticurveProvider: fmt::Debug + Send + Sync {
    /// Discount factor in `currency` for payment time `t`.
    fn discount_factor(&self, currency: &Currency, t: Time) -> Result<DiscountFactor>;

    /// Name of the discounting curve of `currency`.
    fn discount_curve_name(&self, currency: &Currency) -> Result<&str>;

    /// Simple forward rate of an Ibor index over `[start, end]`.
    fn ibor_forward_rate(
        &self,
        index: &IborIndex,
        start: Time,
        end: Time,
        accrual: Real,
    ) -> Result<Rate>;

    /// Name of the forward curve of an Ibor index.
    fn ibor_curve_name(&self, index: &IborIndex) -> Result<&str>;

    /// Simple forward rate of an overnight index over `[start, end]`.
    fn overnight_forward_rate(
        &self,
        index: &IndexON,
        start: Time,
        end: Time,
        accrual: Real,
    ) -> Result<Rate>;

    /// Name of the forward curve of an overnight index.
    fn overnight_curve_name(&self, index: &IndexON) -> Result<&str>;

    /// Projected level of a price index at reference time `t`.
    fn price_index(&self, index: &IndexPrice, t: Time) -> Result<Real>;

    /// Spot rate: units of `target` for one unit of `source`.
    fn fx_rate(&self, source: &Currency, target: &Currency) -> Result<Real>;

    /// The yield curve registered under `name`, if any.
    fn curve(&self, name: &str) -> Option<&YieldCurve>;

    /// Names of all yield curves held, sorted.
    fn curve_names(&self) -> Vec<String>;
}

/// [`MulticurveProvider`] backed by maps from currency / index to curves.
///
/// The same curve may be registered for several uses (e.g. an overnight
/// curve used both for discounting and for the overnight index); its
/// sensitivities are then aggregated under its name.
#[derive(Debug, Clone, Default)]
pub struct MulticurveProviderDiscount {
    discount_curves: HashMap<Currency, YieldCurve>,
    ibor_curves: HashMap<IborIndex, YieldCurve>,
    overnight_curves: HashMap<IndexON, YieldCurve>,
    price_index_curves: HashMap<IndexPrice, PriceIndexCurve>,
    fx_matrix: FxMatrix,
}

impl MulticurveProviderDiscount {
    /// An empty provider with the given FX matrix.
    pub fn new(fx_matrix: FxMatrix) -> Self {
        Self {
            fx_matrix,
            ..Self::default()
        }
    }

    /// Register the discounting curve of `currency`.
    pub fn with_discount_curve(mut self, currency: Currency, curve: YieldCurve) -> Self {
        self.discount_curves.insert(currency, curve);
        self
    }

    /// Register the forward curve of an Ibor index.
    pub fn with_ibor_curve(mut self, index: IborIndex, curve: YieldCurve) -> Self {
        self.ibor_curves.insert(index, curve);
        self
    }

    /// Register the forward curve of an overnight index.
    pub fn with_overnight_curve(mut self, index: IndexON, curve: YieldCurve) -> Self {
        self.overnight_curves.insert(index, curve);
        self
    }

    /// Register the projection curve of a price index.
    pub fn with_price_index_curve(mut self, index: IndexPrice, curve: PriceIndexCurve) -> Self {
        self.price_index_curves.insert(index, curve);
        self
    }

    /// The FX matrix.
    pub fn fx_matrix(&self) -> &FxMatrix {
        &self.fx_matrix
    }

    /// A copy of the provider where every use of the curve named like
    /// `curve` is replaced by `curve`.
    ///
    /// # Errors
    /// Returns [`Error::MissingMarketData`] if no curve carries that name.
    pub fn with_curve_replaced(&self, curve: &YieldCurve) -> Result<Self> {
        let mut replaced = self.clone();
        let mut found = false;
        let maps = [
            replaced.discount_curves.values_mut().collect::<Vec<_>>(),
            replaced.ibor_curves.values_mut().collect::<Vec<_>>(),
            replaced.overnight_curves.values_mut().collect::<Vec<_>>(),
        ];
        for slot in maps.into_iter().flatten() {
            if slot.name() == curve.name() {
                *slot = curve.clone();
                found = true;
            }
        }
        if !found {
            return Err(Error::MissingMarketData(format!(
                "no curve named {}",
                curve.name()
            )));
        }
        tracing::trace!(curve = curve.name(), "curve replaced in provider");
        Ok(replaced)
    }

    fn discount_curve(&self, currency: &Currency) -> Result<&YieldCurve> {
        self.discount_curves.get(currency).ok_or_else(|| {
            Error::MissingMarketData(format!("no discounting curve for {currency}"))
        })
    }

    fn ibor_curve(&self, index: &IborIndex) -> Result<&YieldCurve> {
        self.ibor_curves
            .get(index)
            .ok_or_else(|| Error::MissingMarketData(format!("no forward curve for {index}")))
    }

    fn overnight_curve(&self, index: &IndexON) -> Result<&YieldCurve> {
        self.overnight_curves
            .get(index)
            .ok_or_else(|| Error::MissingMarketData(format!("no forward curve for {index}")))
    }

    fn all_curves(&self) -> impl Iterator<Item = &YieldCurve> {
        self.discount_curves
            .values()
            .chain(self.ibor_curves.values())
            .chain(self.overnight_curves.values())
    }
}

impl MulticurveProvider for MulticurveProviderDiscount {
    fn discount_factor(&self, currency: &Currency, t: Time) -> Result<DiscountFactor> {
        Ok(self.discount_curve(currency)?.discount_factor(t))
    }

    fn discount_curve_name(&self, currency: &Currency) -> Result<&str> {
        Ok(self.discount_curve(currency)?.name())
    }

    fn ibor_forward_rate(
        &self,
        index: &IborIndex,
        start: Time,
        end: Time,
        accrual: Real,
    ) -> Result<Rate> {
        self.ibor_curve(index)?.simple_forward_rate(start, end, accrual)
    }

    fn ibor_curve_name(&self, index: &IborIndex) -> Result<&str> {
        Ok(self.ibor_curve(index)?.name())
    }

    fn overnight_forward_rate(
        &self,
        index: &IndexON,
        start: Time,
        end: Time,
        accrual: Real,
    ) -> Result<Rate> {
        self.overnight_curve(index)?
            .simple_forward_rate(start, end, accrual)
    }

    fn overnight_curve_name(&self, index: &IndexON) -> Result<&str> {
        Ok(self.overnight_curve(index)?.name())
    }

    fn price_index(&self, index: &IndexPrice, t: Time) -> Result<Real> {
        self.price_index_curves
            .get(index)
            .map(|c| c.price_index(t))
            .ok_or_else(|| {
                Error::MissingMarketData(format!(
                    "no price index curve for {}",
                    ir_indexes::Index::name(index)
                ))
            })
    }

    fn fx_rate(&self, source: &Currency, target: &Currency) -> Result<Real> {
        self.fx_matrix.rate(source, target)
    }

    fn curve(&self, name: &str) -> Option<&YieldCurve> {
        self.all_curves().find(|c| c.name() == name)
    }

    fn curve_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.all_curves().map(|c| c.name().to_string()).collect();
        names.sort();
        names.dedup();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ir_currencies::currencies::{EUR, USD};
    use ir_indexes::{estr, euribor};
    use ir_time::Period;

    fn provider() -> MulticurveProviderDiscount {
        let ois = YieldCurve::flat("EUR OIS", 0.01).unwrap();
        let fwd6m = YieldCurve::flat("EUR Fwd 6M", 0.015).unwrap();
        MulticurveProviderDiscount::new(FxMatrix::new())
            .with_discount_curve(EUR, ois.clone())
            .with_overnight_curve(estr(), ois)
            .with_ibor_curve(euribor(Period::months(6)), fwd6m)
    }

    #[test]
    fn lookups() {
        let p = provider();
        assert_abs_diff_eq!(
            p.discount_factor(&EUR, 2.0).unwrap(),
            (-0.02_f64).exp(),
            epsilon = 1e-15
        );
        let fwd = p
            .ibor_forward_rate(&euribor(Period::months(6)), 1.0, 1.5, 0.5)
            .unwrap();
        assert_abs_diff_eq!(fwd, ((0.015_f64 * 0.5).exp() - 1.0) / 0.5, epsilon = 1e-14);
        assert_eq!(p.ibor_curve_name(&euribor(Period::months(6))).unwrap(), "EUR Fwd 6M");
        assert_eq!(p.curve_names(), vec!["EUR Fwd 6M".to_string(), "EUR OIS".to_string()]);
    }

    #[test]
    fn missing_data() {
        let p = provider();
        assert!(matches!(
            p.discount_factor(&USD, 1.0),
            Err(Error::MissingMarketData(_))
        ));
        assert!(matches!(
            p.ibor_forward_rate(&euribor(Period::months(3)), 1.0, 1.25, 0.25),
            Err(Error::MissingMarketData(_))
        ));
    }

    #[test]
    fn replacing_a_shared_curve() {
        let p = provider();
        let bumped = p.curve("EUR OIS").unwrap().with_parallel_shift(1e-4).unwrap();
        let q = p.with_curve_replaced(&bumped).unwrap();
        assert_abs_diff_eq!(
            q.discount_factor(&EUR, 1.0).unwrap(),
            (-0.0101_f64).exp(),
            epsilon = 1e-15
        );
        let on = q.overnight_forward_rate(&estr(), 0.0, 1.0, 1.0).unwrap();
        assert_abs_diff_eq!(on, 0.0101_f64.exp() - 1.0, epsilon = 1e-14);
        let unknown = YieldCurve::flat("nope", 0.0).unwrap();
        assert!(p.with_curve_replaced(&unknown).is_err());
    }
}
