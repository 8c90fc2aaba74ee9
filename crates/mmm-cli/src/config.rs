//! JSON preparation config: column mapping plus an ordered feature plan.
//!
//! ```json
//! {
//!   "freq": "W",
//!   "mapping": {
//!     "columns": { "TV Spend (EUR)": "media__tv" },
//!     "normalize_source_columns": false,
//!     "keep_unmapped": true
//!   },
//!   "features": [
//!     { "type": "events", "events": { "promo": ["2023-01-02"] } },
//!     { "type": "seasonality", "period": 52, "order": 2 },
//!     { "type": "trend", "normalize": true }
//!   ]
//! }
//! ```

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use mmm_features::{
    EventTransformer, FeaturePipeline, FeatureTransformer, SeasonalityTransformer,
    TrendTransformer,
};
use mmm_map::ColumnMapper;

/// Top-level preparation config.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrepareConfig {
    /// Declared series frequency (e.g. "D", "W"). Informational.
    pub freq: Option<String>,
    #[serde(default)]
    pub mapping: MappingSection,
    #[serde(default)]
    pub features: Vec<FeatureSpec>,
}

/// Column mapping section.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MappingSection {
    /// Explicit source -> target renames.
    #[serde(default)]
    pub columns: BTreeMap<String, String>,
    /// Normalize source column names before resolving the mapping.
    #[serde(default)]
    pub normalize_source_columns: bool,
    /// Keep columns that have no mapping entry (default) or drop them.
    #[serde(default = "default_true")]
    pub keep_unmapped: bool,
}

impl Default for MappingSection {
    fn default() -> Self {
        Self {
            columns: BTreeMap::new(),
            normalize_source_columns: false,
            keep_unmapped: true,
        }
    }
}

/// One feature step, applied in declaration order.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum FeatureSpec {
    Events {
        /// Single unnamed event date list.
        dates: Option<Vec<String>>,
        /// Named event -> date-list map.
        events: Option<BTreeMap<String, Vec<String>>>,
        /// Column suffix used with `dates` (column is `event__{name}`).
        #[serde(default = "default_event_name")]
        default_event_name: String,
    },
    Seasonality {
        period: u32,
        order: u32,
    },
    Trend {
        #[serde(default = "default_true")]
        normalize: bool,
        col_name: Option<String>,
    },
}

fn default_true() -> bool {
    true
}

fn default_event_name() -> String {
    "event".to_string()
}

impl PrepareConfig {
    /// Loads a config from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("open config {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parse config {}", path.display()))
    }

    /// Builds the column mapper from the mapping section.
    #[must_use]
    pub fn build_mapper(&self) -> ColumnMapper {
        ColumnMapper::new(self.mapping.columns.clone())
            .with_normalization(self.mapping.normalize_source_columns)
            .keep_unmapped(self.mapping.keep_unmapped)
    }

    /// Builds the feature pipeline from the feature plan, in order.
    pub fn build_pipeline(&self) -> Result<FeaturePipeline> {
        let mut transformers: Vec<Box<dyn FeatureTransformer>> = Vec::new();
        for (index, spec) in self.features.iter().enumerate() {
            let transformer: Box<dyn FeatureTransformer> = match spec {
                FeatureSpec::Events {
                    dates,
                    events,
                    default_event_name,
                } => Box::new(
                    EventTransformer::new(dates.clone(), events.clone(), default_event_name)
                        .with_context(|| format!("feature step {index} (events)"))?,
                ),
                FeatureSpec::Seasonality { period, order } => Box::new(
                    SeasonalityTransformer::new(*period, *order)
                        .with_context(|| format!("feature step {index} (seasonality)"))?,
                ),
                FeatureSpec::Trend {
                    normalize,
                    col_name,
                } => {
                    let trend = TrendTransformer::new().with_normalize(*normalize);
                    let trend = match col_name {
                        Some(name) => trend
                            .with_column_name(name)
                            .with_context(|| format!("feature step {index} (trend)"))?,
                        None => trend,
                    };
                    Box::new(trend)
                }
            };
            transformers.push(transformer);
        }
        Ok(FeaturePipeline::new(transformers))
    }
}
