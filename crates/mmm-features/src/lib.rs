//! Feature engineering for MMM datasets.
//!
//! Transformers derive new convention-named columns from a validated
//! dataset and return a new dataset plus a traceable step report:
//!
//! - **events**: binary calendar-event indicators
//! - **seasonality**: Fourier sine/cosine terms at harmonics of a period
//! - **trend**: linear time trend over the row index
//! - **pipeline**: ordered sequential application with report aggregation
//!
//! Every transform reconstructs its output through `Dataset::from_frame`,
//! so the dataset contract holds after each step.

pub mod error;
pub mod events;
pub mod pipeline;
pub mod report;
pub mod seasonality;
pub mod transformer;
pub mod trend;

pub use error::FeatureError;
pub use events::EventTransformer;
pub use pipeline::FeaturePipeline;
pub use report::{FeatureReport, FeatureStepReport};
pub use seasonality::SeasonalityTransformer;
pub use transformer::FeatureTransformer;
pub use trend::{DEFAULT_TREND_COLUMN, TrendTransformer};
