//! Shared capability contract for feature transformers.

use mmm_model::Dataset;

use crate::error::FeatureError;
use crate::report::FeatureReport;

/// A feature transformer derives new convention-named columns from a
/// dataset.
///
/// `transform` never mutates its input: it builds a new frame, appends the
/// derived columns, and reconstructs through `Dataset::from_frame` so the
/// result re-passes the full dataset contract. A transformer must fail with
/// [`FeatureError::DuplicateColumn`] when a column it intends to add already
/// exists.
pub trait FeatureTransformer {
    /// Prepares derived state from the dataset. Stateless transformers do
    /// nothing here.
    fn fit(&mut self, dataset: &Dataset) -> Result<(), FeatureError>;

    /// Applies the transformation, returning the enriched dataset and a
    /// single-step report.
    fn transform(&self, dataset: &Dataset) -> Result<(Dataset, FeatureReport), FeatureError>;

    /// Fits, then transforms.
    fn fit_transform(
        &mut self,
        dataset: &Dataset,
    ) -> Result<(Dataset, FeatureReport), FeatureError> {
        self.fit(dataset)?;
        self.transform(dataset)
    }
}
