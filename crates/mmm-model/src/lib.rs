//! MMM dataset model.
//!
//! This crate defines the contract-enforcement core shared by the whole
//! workspace:
//!
//! - **naming**: the `<role>__<segment>...` column naming convention
//! - **dates**: calendar-day parsing and ISO formatting
//! - **validate**: the dataset contract run at every construction point
//! - **dataset**: the immutable, validated [`Dataset`] value object

pub mod dataset;
pub mod dates;
pub mod naming;
pub mod validate;

pub use dataset::Dataset;
pub use naming::{
    DATE_COLUMN, ParsedName, ROLE_SEPARATOR, Role, infer_role, is_valid_column_name,
    is_valid_snake_case, parse_column_name,
};
pub use validate::{ContractError, validate_frame};
