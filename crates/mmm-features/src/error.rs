//! Error types for feature transformers and the pipeline.

use polars::prelude::PolarsError;
use thiserror::Error;

use mmm_model::ContractError;

/// Errors from configuring or running feature transformers.
#[derive(Debug, Error)]
pub enum FeatureError {
    /// A transformer's target column already exists in the dataset.
    /// Detected before insertion; columns are never silently overwritten.
    #[error("column already exists: {name}")]
    DuplicateColumn { name: String },

    /// Event transformer configured with neither `dates` nor `events`.
    #[error("provide exactly one of `dates` or `events` (neither given)")]
    MissingEventSpec,

    /// Event transformer configured with both `dates` and `events`.
    #[error("provide exactly one of `dates` or `events` (both given)")]
    AmbiguousEventSpec,

    /// An event name that is not a strict snake_case token.
    #[error("invalid event name (must be snake_case): {name}")]
    InvalidEventName { name: String },

    /// A configured event date that does not parse as a calendar day.
    #[error("event date '{value}' cannot be parsed as a calendar day")]
    UnparseableEventDate { value: String },

    /// Seasonality period must be greater than 1.
    #[error("period must be > 1 (got {period})")]
    InvalidPeriod { period: i64 },

    /// Seasonality order must be at least 1.
    #[error("order must be >= 1 (got {order})")]
    InvalidOrder { order: i64 },

    /// Trend output column name that violates the naming convention.
    #[error("invalid trend column name (must follow '<role>__...'): {name}")]
    InvalidTrendColumnName { name: String },

    /// The re-validation after a transform step found a contract violation.
    #[error(transparent)]
    Contract(#[from] ContractError),

    /// Dataframe engine failure while appending columns.
    #[error("dataframe engine error: {0}")]
    Engine(#[from] PolarsError),
}
