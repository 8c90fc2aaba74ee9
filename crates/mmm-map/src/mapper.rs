//! Column mapping engine.
//!
//! [`ColumnMapper`] renames external column names to convention-compliant
//! names using an explicit source -> target mapping, with optional
//! normalization of the source names first. Every apply runs an ordered
//! sequence of collision checks; the first failing check aborts the whole
//! operation, so there is never a partial rename.

use std::collections::{BTreeMap, BTreeSet};

use polars::prelude::DataFrame;

use mmm_model::is_valid_column_name;

use crate::error::MapError;
use crate::normalize::{Normalizer, default_normalizer};
use crate::report::MappingReport;

/// Renames client columns into the MMM naming convention.
pub struct ColumnMapper {
    mapping: BTreeMap<String, String>,
    normalize: bool,
    normalizer: Box<Normalizer>,
    keep_unmapped: bool,
}

impl std::fmt::Debug for ColumnMapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnMapper")
            .field("mapping", &self.mapping)
            .field("normalize", &self.normalize)
            .field("keep_unmapped", &self.keep_unmapped)
            .finish_non_exhaustive()
    }
}

impl ColumnMapper {
    /// Creates a mapper with an explicit source -> target mapping.
    ///
    /// Defaults: no source normalization, unmapped columns are kept.
    #[must_use]
    pub fn new(mapping: BTreeMap<String, String>) -> Self {
        Self {
            mapping,
            normalize: false,
            normalizer: Box::new(default_normalizer),
            keep_unmapped: true,
        }
    }

    /// Enables or disables normalization of source column names before the
    /// mapping is resolved.
    #[must_use]
    pub fn with_normalization(mut self, enable: bool) -> Self {
        self.normalize = enable;
        self
    }

    /// Overrides the normalizer used when normalization is enabled.
    #[must_use]
    pub fn with_normalizer<F>(mut self, normalizer: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.normalizer = Box::new(normalizer);
        self
    }

    /// Controls whether unmapped columns are kept (default) or dropped.
    #[must_use]
    pub fn keep_unmapped(mut self, keep: bool) -> Self {
        self.keep_unmapped = keep;
        self
    }

    /// Applies the mapping to a table, returning the renamed table and a
    /// provenance report. The caller's table is never modified.
    ///
    /// Checks run top-to-bottom and the first failure aborts the whole
    /// operation: normalization collisions, missing sources, invalid target
    /// names, duplicated targets, targets shadowing kept unmapped columns.
    pub fn apply(&self, df: &DataFrame) -> Result<(DataFrame, MappingReport), MapError> {
        let original_columns: Vec<String> = df
            .get_column_names_owned()
            .into_iter()
            .map(|name| name.to_string())
            .collect();

        // 1. Normalization pass (only if enabled).
        let mut normalized_map: Option<BTreeMap<String, String>> = None;
        let (current_columns, working_mapping) = if self.normalize {
            let normalized: Vec<String> = original_columns
                .iter()
                .map(|name| (self.normalizer)(name))
                .collect();
            detect_normalization_collisions(&original_columns, &normalized)?;
            normalized_map = Some(
                original_columns
                    .iter()
                    .cloned()
                    .zip(normalized.iter().cloned())
                    .collect(),
            );
            let mapping = self
                .mapping
                .iter()
                .map(|(source, target)| ((self.normalizer)(source), target.clone()))
                .collect();
            (normalized, mapping)
        } else {
            (original_columns.clone(), self.mapping.clone())
        };

        // 2. Every mapping source must exist in the table.
        let present: BTreeSet<&str> = current_columns.iter().map(String::as_str).collect();
        let missing: Vec<String> = working_mapping
            .keys()
            .filter(|source| !present.contains(source.as_str()))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(MapError::SourceMissing { columns: missing });
        }

        // 3. Every mapping target must satisfy the naming convention.
        let invalid: Vec<String> = working_mapping
            .values()
            .filter(|target| !is_valid_column_name(target))
            .cloned()
            .collect();
        if !invalid.is_empty() {
            return Err(MapError::InvalidTargetName { targets: invalid });
        }

        // 4. No two sources may map to the same target.
        let mut target_counts: BTreeMap<&str, usize> = BTreeMap::new();
        for target in working_mapping.values() {
            *target_counts.entry(target.as_str()).or_default() += 1;
        }
        let duplicated: Vec<String> = target_counts
            .iter()
            .filter(|(_, count)| **count > 1)
            .map(|(target, _)| (*target).to_string())
            .collect();
        if !duplicated.is_empty() {
            return Err(MapError::TargetCollision {
                targets: duplicated,
            });
        }

        // Unmapped columns, in table order.
        let unmapped: Vec<String> = current_columns
            .iter()
            .filter(|name| !working_mapping.contains_key(*name))
            .cloned()
            .collect();

        // 5. A target must not shadow a kept unmapped column. Skipped when
        //    unmapped columns are dropped: the column is removed before the
        //    final table is assembled, so the collision is moot.
        if self.keep_unmapped {
            let targets: BTreeSet<&str> =
                working_mapping.values().map(String::as_str).collect();
            let shadowed: Vec<String> = unmapped
                .iter()
                .filter(|name| targets.contains(name.as_str()))
                .cloned()
                .collect();
            if !shadowed.is_empty() {
                return Err(MapError::TargetShadowsUnmapped { columns: shadowed });
            }
        }

        // 6. Assemble the output frame in one pass: all renames are applied
        //    simultaneously and unmapped columns are kept or dropped.
        let mut columns = Vec::with_capacity(df.width());
        let mut dropped_columns = Vec::new();
        for (column, current_name) in df.get_columns().iter().zip(&current_columns) {
            let final_name = match working_mapping.get(current_name) {
                Some(target) => target.as_str(),
                None if self.keep_unmapped => current_name.as_str(),
                None => {
                    dropped_columns.push(current_name.clone());
                    continue;
                }
            };
            let mut column = column.clone();
            column.rename(final_name.into());
            columns.push(column);
        }
        let out = DataFrame::new(columns)?;

        tracing::debug!(
            renamed = working_mapping.len(),
            unmapped = unmapped.len(),
            dropped = dropped_columns.len(),
            "applied column mapping"
        );

        let report = MappingReport {
            original_columns,
            normalized_columns: normalized_map,
            applied_mapping: working_mapping.clone(),
            renamed_columns: working_mapping,
            unmapped_columns: if self.keep_unmapped {
                unmapped
            } else {
                Vec::new()
            },
            dropped_columns,
        };
        Ok((out, report))
    }
}

/// Fails when two distinct original names normalize to the same string,
/// naming every colliding pair.
fn detect_normalization_collisions(
    originals: &[String],
    normalized: &[String],
) -> Result<(), MapError> {
    let mut seen: BTreeMap<&str, &str> = BTreeMap::new();
    let mut collisions = Vec::new();
    for (before, after) in originals.iter().zip(normalized) {
        match seen.get(after.as_str()) {
            Some(first) if *first != before.as_str() => {
                collisions.push(format!("'{first}' & '{before}' -> '{after}'"));
            }
            Some(_) => {}
            None => {
                seen.insert(after.as_str(), before.as_str());
            }
        }
    }
    if collisions.is_empty() {
        Ok(())
    } else {
        Err(MapError::NormalizationCollision { collisions })
    }
}
