//! Traceability reports for feature engineering.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Immutable record of a single transformer execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureStepReport {
    /// Transformer identifier (e.g. "EventTransformer").
    pub transformer: String,
    /// The parameters the transformer was configured with.
    pub params: BTreeMap<String, serde_json::Value>,
    /// Column names added by this step, in insertion order.
    pub added_features: Vec<String>,
    /// Optional free-text note.
    pub notes: Option<String>,
}

/// Ordered aggregate of step reports from a pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureReport {
    /// Step reports in application order.
    pub steps: Vec<FeatureStepReport>,
}

impl FeatureReport {
    /// A report with a single step.
    #[must_use]
    pub fn single(step: FeatureStepReport) -> Self {
        Self { steps: vec![step] }
    }

    /// Appends a step to the end of the report.
    pub fn add_step(&mut self, step: FeatureStepReport) {
        self.steps.push(step);
    }

    /// Flattened list of all added column names, in application order.
    #[must_use]
    pub fn added_features(&self) -> Vec<String> {
        self.steps
            .iter()
            .flat_map(|step| step.added_features.iter().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(transformer: &str, added: &[&str]) -> FeatureStepReport {
        FeatureStepReport {
            transformer: transformer.to_string(),
            params: BTreeMap::new(),
            added_features: added.iter().map(|s| (*s).to_string()).collect(),
            notes: None,
        }
    }

    #[test]
    fn added_features_flattens_in_order() {
        let mut report = FeatureReport::default();
        report.add_step(step("TrendTransformer", &["baseline__trend"]));
        report.add_step(step("EventTransformer", &["event__launch", "event__promo"]));
        assert_eq!(
            report.added_features(),
            vec!["baseline__trend", "event__launch", "event__promo"]
        );
    }

    #[test]
    fn report_serializes_for_audit_logging() {
        let report = FeatureReport::single(step("TrendTransformer", &["baseline__trend"]));
        let json = serde_json::to_value(&report).expect("serialize report");
        assert_eq!(json["steps"][0]["transformer"], "TrendTransformer");
        assert_eq!(json["steps"][0]["added_features"][0], "baseline__trend");
    }
}
