//! Mapping provenance report.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Immutable record of one mapping application.
///
/// Produced once per [`crate::ColumnMapper::apply`] call and intended for
/// audit logging; all fields are plain structured data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingReport {
    /// Column names as presented by the input table, in order.
    pub original_columns: Vec<String>,
    /// Original -> normalized names. Present only if normalization was
    /// requested.
    pub normalized_columns: Option<BTreeMap<String, String>>,
    /// Effective source -> target mapping applied (sources post-normalization
    /// when enabled).
    pub applied_mapping: BTreeMap<String, String>,
    /// Before-rename -> after-rename map.
    pub renamed_columns: BTreeMap<String, String>,
    /// Columns left unmapped and kept, in table order. Empty when unmapped
    /// columns are dropped.
    pub unmapped_columns: Vec<String>,
    /// Columns dropped because they were unmapped, in table order. Empty
    /// when unmapped columns are kept.
    pub dropped_columns: Vec<String>,
}
