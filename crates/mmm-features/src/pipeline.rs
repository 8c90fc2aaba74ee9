//! Sequential feature engineering pipeline.

use mmm_model::Dataset;

use crate::error::FeatureError;
use crate::report::FeatureReport;
use crate::transformer::FeatureTransformer;

/// Runs an ordered sequence of feature transformers.
///
/// The dataset output of one step feeds the next, so later transformers see
/// earlier transformers' derived columns (and collide with them if they
/// target the same name). Step reports are concatenated in application
/// order.
#[derive(Default)]
pub struct FeaturePipeline {
    transformers: Vec<Box<dyn FeatureTransformer>>,
}

impl std::fmt::Debug for FeaturePipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeaturePipeline")
            .field("transformers", &self.transformers.len())
            .finish()
    }
}

impl FeaturePipeline {
    /// Creates a pipeline over the given transformers, applied in order.
    #[must_use]
    pub fn new(transformers: Vec<Box<dyn FeatureTransformer>>) -> Self {
        Self { transformers }
    }

    /// Appends a transformer to the end of the pipeline.
    #[must_use]
    pub fn with(mut self, transformer: Box<dyn FeatureTransformer>) -> Self {
        self.transformers.push(transformer);
        self
    }

    /// Number of configured transformers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transformers.len()
    }

    /// True if no transformers are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }

    /// Applies each transformer's `fit_transform` in order and returns the
    /// final dataset with the aggregated report.
    ///
    /// Each transformer already reconstructs through `Dataset::from_frame`;
    /// the pipeline performs one more reconstruction after the last step as
    /// a closing contract check.
    pub fn run(&mut self, dataset: &Dataset) -> Result<(Dataset, FeatureReport), FeatureError> {
        let mut current = dataset.clone();
        let mut report = FeatureReport::default();

        for (index, transformer) in self.transformers.iter_mut().enumerate() {
            let (next, step_report) = transformer.fit_transform(&current)?;
            for step in &step_report.steps {
                tracing::info!(
                    step = index + 1,
                    transformer = %step.transformer,
                    added = step.added_features.len(),
                    "feature step applied"
                );
            }
            report.steps.extend(step_report.steps);
            current = next;
        }

        let finalized = Dataset::from_frame(current.data(), current.freq().map(String::from))?;
        Ok((finalized, report))
    }
}
