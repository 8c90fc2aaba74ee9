//! Validated, date-sorted MMM dataset.
//!
//! [`Dataset`] wraps a Polars `DataFrame` whose rows are time periods and
//! whose columns are `date` plus convention-named feature columns. It is an
//! immutable value object: every transformation produces a new instance that
//! re-passes the full contract via [`Dataset::from_frame`].

use chrono::NaiveDate;
use polars::prelude::{BooleanChunked, DataFrame, NamedFrom, Series, SortMultipleOptions};

use crate::dates::{format_day, parse_day};
use crate::naming::{DATE_COLUMN, Role, infer_role};
use crate::validate::{ContractError, parse_date_column, validate_frame};

/// A validated tabular time series with an optional declared frequency.
#[derive(Debug, Clone)]
pub struct Dataset {
    data: DataFrame,
    freq: Option<String>,
}

impl Dataset {
    /// Builds a dataset from a raw frame.
    ///
    /// Copies the input, coerces the `date` column to ISO day strings, sorts
    /// rows by date ascending, then enforces the full dataset contract.
    /// The caller's frame is never modified.
    pub fn from_frame(frame: &DataFrame, freq: Option<String>) -> Result<Self, ContractError> {
        let mut df = frame.clone();

        let dates = parse_date_column(&df)?;
        let iso: Vec<String> = dates.iter().map(|date| format_day(*date)).collect();
        df.with_column(Series::new(DATE_COLUMN.into(), iso))?;

        // ISO day strings sort lexicographically in chronological order.
        let df = df.sort([DATE_COLUMN], SortMultipleOptions::default())?;

        validate_frame(&df, freq.as_deref())?;
        Ok(Self { data: df, freq })
    }

    /// The underlying frame, date-sorted and contract-valid.
    #[must_use]
    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    /// Declared frequency label (e.g. "D", "W"), if any.
    #[must_use]
    pub fn freq(&self) -> Option<&str> {
        self.freq.as_deref()
    }

    /// Number of time periods.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.data.height()
    }

    /// Parsed calendar days of the date column, in row order.
    pub fn dates(&self) -> Result<Vec<NaiveDate>, ContractError> {
        parse_date_column(&self.data)
    }

    /// Returns the rows whose date lies in the closed interval
    /// `[start, end]`.
    ///
    /// Sub-selection of an already-valid dataset cannot violate
    /// monotonicity, uniqueness, or per-column range invariants, so the
    /// contract is not re-run.
    pub fn between(&self, start: &str, end: &str) -> Result<Self, ContractError> {
        let start = parse_bound(start)?;
        let end = parse_bound(end)?;

        let dates = self.dates()?;
        let mask: BooleanChunked = dates
            .iter()
            .map(|date| Some(*date >= start && *date <= end))
            .collect();

        Ok(Self {
            data: self.data.filter(&mask)?,
            freq: self.freq.clone(),
        })
    }

    /// Names of the non-date columns whose inferred role matches `role`,
    /// in table column order.
    #[must_use]
    pub fn columns_by_role(&self, role: Role) -> Vec<String> {
        self.data
            .get_column_names_owned()
            .into_iter()
            .filter(|name| name.as_str() != DATE_COLUMN)
            .filter(|name| infer_role(name.as_str()) == Some(role))
            .map(|name| name.to_string())
            .collect()
    }

    /// True if a column with the given name exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.data.column(name).is_ok()
    }
}

fn parse_bound(value: &str) -> Result<NaiveDate, ContractError> {
    parse_day(value).ok_or_else(|| ContractError::UnparseableDate {
        value: value.to_string(),
    })
}
