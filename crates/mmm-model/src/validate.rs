//! Dataset contract enforcement.
//!
//! [`validate_frame`] runs the full contract against a frame whose columns
//! are already named under the convention. Every [`crate::Dataset`]
//! construction goes through this check, so a dataset is never partially
//! valid: either all invariants hold or construction fails with the first
//! violated check.
//!
//! Checks, in order:
//! 1. the `date` column exists
//! 2. every date value parses to a calendar day
//! 3. no duplicate dates
//! 4. dates are strictly increasing
//! 5. every other column name parses under the naming convention
//! 6. every other column is numeric
//! 7. role rules: `target` has no missing values, `media` has no negative
//!    values, `event` values lie in [0, 1]

use std::collections::BTreeSet;

use chrono::NaiveDate;
use polars::prelude::{DataFrame, DataType, PolarsError};
use thiserror::Error;

use crate::dates::{format_day, parse_day};
use crate::naming::{DATE_COLUMN, Role, infer_role};

/// A violated dataset contract check.
#[derive(Debug, Error)]
pub enum ContractError {
    #[error("missing required date column '{DATE_COLUMN}'")]
    MissingDateColumn,
    #[error("date value '{value}' cannot be parsed as a calendar day")]
    UnparseableDate { value: String },
    #[error("duplicate date '{date}' in the date column")]
    DuplicateDate { date: String },
    #[error("date column must be strictly increasing")]
    UnsortedDates,
    #[error("column '{name}' does not follow the naming convention (expected '<role>__...')")]
    UnrecognizedColumn { name: String },
    #[error("column '{name}' must be numeric (role={role})")]
    NonNumericColumn { name: String, role: Role },
    #[error("target column '{name}' contains missing values")]
    TargetWithMissing { name: String },
    #[error("media column '{name}' contains negative values")]
    NegativeMedia { name: String },
    #[error("event column '{name}' contains value {value} outside [0, 1]")]
    EventOutOfRange { name: String, value: f64 },
    #[error("dataframe engine error: {0}")]
    Engine(#[from] PolarsError),
}

/// Validates a frame against the dataset contract.
///
/// `freq` is an opaque declared-frequency label carried for downstream
/// consumers; the contract does not verify that date spacing matches it.
pub fn validate_frame(df: &DataFrame, freq: Option<&str>) -> Result<(), ContractError> {
    tracing::debug!(
        columns = df.width(),
        rows = df.height(),
        freq = freq.unwrap_or("none"),
        "validating dataset contract"
    );

    let dates = parse_date_column(df)?;

    let mut seen = BTreeSet::new();
    for date in &dates {
        if !seen.insert(*date) {
            return Err(ContractError::DuplicateDate {
                date: format_day(*date),
            });
        }
    }
    if dates.windows(2).any(|pair| pair[0] >= pair[1]) {
        return Err(ContractError::UnsortedDates);
    }

    for name in df.get_column_names_owned() {
        if name.as_str() == DATE_COLUMN {
            continue;
        }
        validate_feature_column(df, name.as_str())?;
    }
    Ok(())
}

/// Extracts the date column as parsed calendar days, in row order.
pub(crate) fn parse_date_column(df: &DataFrame) -> Result<Vec<NaiveDate>, ContractError> {
    let column = df
        .column(DATE_COLUMN)
        .map_err(|_| ContractError::MissingDateColumn)?;
    let as_string = column.cast(&DataType::String)?;
    let values = as_string.str()?;

    let mut dates = Vec::with_capacity(df.height());
    for value in values {
        let raw = value.unwrap_or("");
        let date = parse_day(raw).ok_or_else(|| ContractError::UnparseableDate {
            value: raw.to_string(),
        })?;
        dates.push(date);
    }
    Ok(dates)
}

/// Checks one non-date column: naming, numeric dtype, role range rules.
fn validate_feature_column(df: &DataFrame, name: &str) -> Result<(), ContractError> {
    let Some(role) = infer_role(name) else {
        return Err(ContractError::UnrecognizedColumn {
            name: name.to_string(),
        });
    };

    let column = df.column(name)?;
    if !is_numeric_dtype(column.dtype()) {
        return Err(ContractError::NonNumericColumn {
            name: name.to_string(),
            role,
        });
    }

    // Only target, media, and event carry range rules. Control, baseline,
    // and id values are unconstrained beyond being numeric.
    if !matches!(role, Role::Target | Role::Media | Role::Event) {
        return Ok(());
    }

    let as_float = column.cast(&DataType::Float64)?;
    let values = as_float.f64()?;
    for value in values {
        match role {
            Role::Target => {
                if value.is_none_or(f64::is_nan) {
                    return Err(ContractError::TargetWithMissing {
                        name: name.to_string(),
                    });
                }
            }
            Role::Media => {
                if value.is_some_and(|v| v < 0.0) {
                    return Err(ContractError::NegativeMedia {
                        name: name.to_string(),
                    });
                }
            }
            Role::Event => {
                if let Some(v) = value
                    && !(0.0..=1.0).contains(&v)
                {
                    return Err(ContractError::EventOutOfRange {
                        name: name.to_string(),
                        value: v,
                    });
                }
            }
            _ => {}
        }
    }
    Ok(())
}

fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}
