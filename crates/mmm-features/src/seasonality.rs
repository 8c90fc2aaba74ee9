//! Fourier seasonality features.

use std::collections::BTreeMap;
use std::f64::consts::PI;

use polars::prelude::{NamedFrom, Series};

use mmm_model::Dataset;

use crate::error::FeatureError;
use crate::report::{FeatureReport, FeatureStepReport};
use crate::transformer::FeatureTransformer;

/// Derives sine/cosine features at harmonics of a declared period.
///
/// For each harmonic `k` in `1..=order`, the angle is `2π·k·t/period` where
/// `t` is the zero-based row index. Phase follows row order, not calendar
/// distance, so gaps in the date column do not perturb it. Columns are named
/// `baseline__seasonality__fourier__p{period}__k{k}__{sin,cos}` and added in
/// increasing `k` order, sin before cos.
#[derive(Debug, Clone)]
pub struct SeasonalityTransformer {
    period: u32,
    order: u32,
}

impl SeasonalityTransformer {
    /// Creates a transformer for the given period (> 1) and harmonic order
    /// (>= 1).
    pub fn new(period: u32, order: u32) -> Result<Self, FeatureError> {
        if period <= 1 {
            return Err(FeatureError::InvalidPeriod {
                period: i64::from(period),
            });
        }
        if order < 1 {
            return Err(FeatureError::InvalidOrder {
                order: i64::from(order),
            });
        }
        Ok(Self { period, order })
    }

    fn column_names(&self, k: u32) -> (String, String) {
        let prefix = format!("baseline__seasonality__fourier__p{}__k{k}", self.period);
        (format!("{prefix}__sin"), format!("{prefix}__cos"))
    }
}

impl FeatureTransformer for SeasonalityTransformer {
    /// Stateless; nothing to fit.
    fn fit(&mut self, _dataset: &Dataset) -> Result<(), FeatureError> {
        Ok(())
    }

    fn transform(&self, dataset: &Dataset) -> Result<(Dataset, FeatureReport), FeatureError> {
        let mut df = dataset.data().clone();
        let n = dataset.n_rows();

        let mut added = Vec::with_capacity(2 * self.order as usize);
        for k in 1..=self.order {
            let (sin_col, cos_col) = self.column_names(k);
            for name in [&sin_col, &cos_col] {
                if df.column(name).is_ok() {
                    return Err(FeatureError::DuplicateColumn { name: name.clone() });
                }
            }

            let mut sin_values = Vec::with_capacity(n);
            let mut cos_values = Vec::with_capacity(n);
            for t in 0..n {
                let angle = 2.0 * PI * f64::from(k) * (t as f64) / f64::from(self.period);
                sin_values.push(angle.sin());
                cos_values.push(angle.cos());
            }

            df.with_column(Series::new(sin_col.as_str().into(), sin_values))?;
            df.with_column(Series::new(cos_col.as_str().into(), cos_values))?;
            added.push(sin_col);
            added.push(cos_col);
        }

        tracing::debug!(
            period = self.period,
            order = self.order,
            columns = added.len(),
            "added Fourier seasonality columns"
        );
        let enriched = Dataset::from_frame(&df, dataset.freq().map(String::from))?;

        let mut params = BTreeMap::new();
        params.insert(
            "period".to_string(),
            serde_json::Value::from(self.period),
        );
        params.insert("order".to_string(), serde_json::Value::from(self.order));
        let report = FeatureReport::single(FeatureStepReport {
            transformer: "SeasonalityTransformer".to_string(),
            params,
            added_features: added,
            notes: None,
        });
        Ok((enriched, report))
    }
}
