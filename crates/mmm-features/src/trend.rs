//! Linear time trend feature.

use std::collections::BTreeMap;

use polars::prelude::{NamedFrom, Series};

use mmm_model::{Dataset, is_valid_column_name};

use crate::error::FeatureError;
use crate::report::{FeatureReport, FeatureStepReport};
use crate::transformer::FeatureTransformer;

/// Default output column for the trend feature.
pub const DEFAULT_TREND_COLUMN: &str = "baseline__trend";

/// Derives a linear trend column from the zero-based row index.
///
/// With `normalize` enabled and more than one row, values are divided by
/// `row_count - 1` so the series spans [0, 1] inclusive; otherwise they are
/// the raw indices as floats.
#[derive(Debug, Clone)]
pub struct TrendTransformer {
    normalize: bool,
    column_name: String,
}

impl Default for TrendTransformer {
    fn default() -> Self {
        Self {
            normalize: true,
            column_name: DEFAULT_TREND_COLUMN.to_string(),
        }
    }
}

impl TrendTransformer {
    /// Creates a transformer with normalization enabled and the default
    /// output column.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables [0, 1] normalization.
    #[must_use]
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Overrides the output column name. The name must follow the naming
    /// convention.
    pub fn with_column_name(mut self, name: &str) -> Result<Self, FeatureError> {
        if !is_valid_column_name(name) || name == mmm_model::DATE_COLUMN {
            return Err(FeatureError::InvalidTrendColumnName {
                name: name.to_string(),
            });
        }
        self.column_name = name.to_string();
        Ok(self)
    }
}

impl FeatureTransformer for TrendTransformer {
    /// Stateless; nothing to fit.
    fn fit(&mut self, _dataset: &Dataset) -> Result<(), FeatureError> {
        Ok(())
    }

    fn transform(&self, dataset: &Dataset) -> Result<(Dataset, FeatureReport), FeatureError> {
        let mut df = dataset.data().clone();
        if df.column(&self.column_name).is_ok() {
            return Err(FeatureError::DuplicateColumn {
                name: self.column_name.clone(),
            });
        }

        let n = dataset.n_rows();
        let mut values: Vec<f64> = (0..n).map(|t| t as f64).collect();
        if self.normalize && n > 1 {
            let span = (n - 1) as f64;
            for value in &mut values {
                *value /= span;
            }
        }
        df.with_column(Series::new(self.column_name.as_str().into(), values))?;

        tracing::debug!(column = %self.column_name, normalize = self.normalize, "added trend column");
        let enriched = Dataset::from_frame(&df, dataset.freq().map(String::from))?;

        let mut params = BTreeMap::new();
        params.insert(
            "normalize".to_string(),
            serde_json::Value::from(self.normalize),
        );
        params.insert(
            "col_name".to_string(),
            serde_json::Value::from(self.column_name.clone()),
        );
        let report = FeatureReport::single(FeatureStepReport {
            transformer: "TrendTransformer".to_string(),
            params,
            added_features: vec![self.column_name.clone()],
            notes: None,
        });
        Ok((enriched, report))
    }
}
