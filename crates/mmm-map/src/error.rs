//! Error types for mapping operations.
//!
//! Each variant is a distinct, user-facing failure mode of
//! [`crate::ColumnMapper::apply`]. The checks run in a fixed order and the
//! first failure aborts the whole operation, so the variants are mutually
//! exclusive per call.

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors from applying a column mapping.
#[derive(Debug, Error)]
pub enum MapError {
    /// Two distinct original names normalized to the same string.
    /// Each entry reads `'before_a' & 'before_b' -> 'after'`.
    #[error("source normalization produced column collisions: {}", collisions.join(", "))]
    NormalizationCollision { collisions: Vec<String> },

    /// The mapping references source columns absent from the input table.
    #[error("missing source column(s) in dataset: {}", columns.join(", "))]
    SourceMissing { columns: Vec<String> },

    /// Mapping targets that do not follow the naming convention.
    #[error("invalid target column name(s): {}", targets.join(", "))]
    InvalidTargetName { targets: Vec<String> },

    /// Two or more source columns map to the same target.
    #[error("multiple source columns map to the same target: {}", targets.join(", "))]
    TargetCollision { targets: Vec<String> },

    /// A mapping target equals the name of a kept, unmapped column.
    /// Map or rename that column too, or drop unmapped columns.
    #[error("mapping target collides with an existing unmapped column: {}", columns.join(", "))]
    TargetShadowsUnmapped { columns: Vec<String> },

    /// Dataframe engine failure while renaming or dropping columns.
    #[error("dataframe engine error: {0}")]
    Engine(#[from] PolarsError),
}
