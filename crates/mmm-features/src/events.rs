//! Binary calendar-event features.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use polars::prelude::{NamedFrom, Series};

use mmm_model::{Dataset, dates::parse_day, is_valid_snake_case};

use crate::error::FeatureError;
use crate::report::{FeatureReport, FeatureStepReport};
use crate::transformer::FeatureTransformer;

/// One named event with its parsed calendar days.
#[derive(Debug, Clone)]
struct EventSpec {
    name: String,
    dates: BTreeSet<NaiveDate>,
}

/// Derives binary event indicator columns from configured date lists.
///
/// Configured with exactly one of:
/// - a single date list, producing one column `event__{default_name}`, or
/// - an event-name -> date-list map, producing one column
///   `event__{event_name}` per entry.
///
/// Indicators are 1.0 on the listed days and 0.0 elsewhere. Configured
/// dates absent from the dataset are silently ignored.
#[derive(Debug, Clone)]
pub struct EventTransformer {
    dates: Option<Vec<String>>,
    events: Option<BTreeMap<String, Vec<String>>>,
    default_name: String,
    specs: Vec<EventSpec>,
}

impl EventTransformer {
    /// Creates a transformer from the raw configuration surface.
    ///
    /// Fails unless exactly one of `dates` or `events` is given, or when
    /// `default_name` is not a snake_case token.
    pub fn new(
        dates: Option<Vec<String>>,
        events: Option<BTreeMap<String, Vec<String>>>,
        default_name: &str,
    ) -> Result<Self, FeatureError> {
        match (&dates, &events) {
            (None, None) => return Err(FeatureError::MissingEventSpec),
            (Some(_), Some(_)) => return Err(FeatureError::AmbiguousEventSpec),
            _ => {}
        }
        if !is_valid_snake_case(default_name) {
            return Err(FeatureError::InvalidEventName {
                name: default_name.to_string(),
            });
        }
        Ok(Self {
            dates,
            events,
            default_name: default_name.to_string(),
            specs: Vec::new(),
        })
    }

    /// Single unnamed event list; the column is `event__event`.
    pub fn single(dates: Vec<String>) -> Result<Self, FeatureError> {
        Self::new(Some(dates), None, "event")
    }

    /// One event per map entry; columns are `event__{name}`.
    pub fn named(events: BTreeMap<String, Vec<String>>) -> Result<Self, FeatureError> {
        Self::new(None, Some(events), "event")
    }

    fn build_spec(name: &str, raw_dates: &[String]) -> Result<EventSpec, FeatureError> {
        if !is_valid_snake_case(name) {
            return Err(FeatureError::InvalidEventName {
                name: name.to_string(),
            });
        }
        let mut dates = BTreeSet::new();
        for raw in raw_dates {
            let date = parse_day(raw).ok_or_else(|| FeatureError::UnparseableEventDate {
                value: raw.clone(),
            })?;
            dates.insert(date);
        }
        Ok(EventSpec {
            name: name.to_string(),
            dates,
        })
    }
}

impl FeatureTransformer for EventTransformer {
    /// Parses the configured dates and sorts event specs by name, so the
    /// column and report order is reproducible regardless of input order.
    fn fit(&mut self, _dataset: &Dataset) -> Result<(), FeatureError> {
        let mut specs = Vec::new();
        if let Some(dates) = &self.dates {
            specs.push(Self::build_spec(&self.default_name, dates)?);
        } else if let Some(events) = &self.events {
            for (name, dates) in events {
                specs.push(Self::build_spec(name, dates)?);
            }
        }
        specs.sort_by(|a, b| a.name.cmp(&b.name));
        self.specs = specs;
        Ok(())
    }

    fn transform(&self, dataset: &Dataset) -> Result<(Dataset, FeatureReport), FeatureError> {
        let mut df = dataset.data().clone();
        let dataset_dates = dataset.dates()?;

        let mut added = Vec::with_capacity(self.specs.len());
        for spec in &self.specs {
            let column = format!("event__{}", spec.name);
            if df.column(&column).is_ok() {
                return Err(FeatureError::DuplicateColumn { name: column });
            }

            let indicator: Vec<f64> = dataset_dates
                .iter()
                .map(|date| if spec.dates.contains(date) { 1.0 } else { 0.0 })
                .collect();
            df.with_column(Series::new(column.as_str().into(), indicator))?;
            added.push(column);
        }

        tracing::debug!(events = added.len(), "added event indicator columns");
        let enriched = Dataset::from_frame(&df, dataset.freq().map(String::from))?;

        let mut params = BTreeMap::new();
        params.insert(
            "default_event_name".to_string(),
            serde_json::Value::from(self.default_name.clone()),
        );
        params.insert(
            "events".to_string(),
            serde_json::Value::from(
                self.specs
                    .iter()
                    .map(|spec| spec.name.clone())
                    .collect::<Vec<_>>(),
            ),
        );
        let report = FeatureReport::single(FeatureStepReport {
            transformer: "EventTransformer".to_string(),
            params,
            added_features: added,
            notes: None,
        });
        Ok((enriched, report))
    }
}
