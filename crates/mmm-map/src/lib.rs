//! Column mapping engine for MMM data preparation.
//!
//! Renames client-provided column names into the strict
//! `<role>__<segment>...` naming convention with exhaustive collision
//! detection, and records the full provenance of every rename in a
//! [`MappingReport`].

pub mod error;
pub mod mapper;
pub mod normalize;
pub mod report;

pub use error::MapError;
pub use mapper::ColumnMapper;
pub use normalize::default_normalizer;
pub use report::MappingReport;
