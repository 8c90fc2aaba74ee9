//! Column naming convention for MMM datasets.
//!
//! Every non-date column must follow the `<role>__<segment>...` convention:
//! a role tag from the closed set, then one or more `__`-separated snake_case
//! segments (e.g. `media__tv__spend`). The literal name `date` is a reserved
//! sentinel that is always valid and carries no role prefix.
//!
//! Downstream components infer the semantic meaning of a column (target vs.
//! media vs. control) purely from its name; there is no external schema file.

use serde::{Deserialize, Serialize};

/// Separator between the role tag and segments, and between segments.
pub const ROLE_SEPARATOR: &str = "__";

/// Reserved name of the date column.
pub const DATE_COLUMN: &str = "date";

/// Semantic category of a column, inferred from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Dependent variable (e.g. sales). Must not contain missing values.
    Target,
    /// Paid media activity (e.g. spend, impressions). Must be non-negative.
    Media,
    /// Exogenous control variable (e.g. price, distribution).
    Control,
    /// Binary calendar event indicator. Values confined to [0, 1].
    Event,
    /// Baseline/structural feature (trend, seasonality).
    Baseline,
    /// Identifier column (reserved for future multi-series support).
    Id,
    /// The reserved `date` sentinel. Not an allowed mapping role prefix.
    Date,
}

impl Role {
    /// The closed set of roles allowed as a column name prefix.
    pub const ALLOWED: [Role; 6] = [
        Role::Target,
        Role::Media,
        Role::Control,
        Role::Event,
        Role::Baseline,
        Role::Id,
    ];

    /// Parses an allowed role tag. `date` is not a role tag and returns None.
    pub fn from_tag(tag: &str) -> Option<Role> {
        match tag {
            "target" => Some(Role::Target),
            "media" => Some(Role::Media),
            "control" => Some(Role::Control),
            "event" => Some(Role::Event),
            "baseline" => Some(Role::Baseline),
            "id" => Some(Role::Id),
            _ => None,
        }
    }

    /// Returns the lowercase tag used in column names.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Target => "target",
            Role::Media => "media",
            Role::Control => "control",
            Role::Event => "event",
            Role::Baseline => "baseline",
            Role::Id => "id",
            Role::Date => "date",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of parsing a convention-compliant column name.
///
/// A name either parses fully or not at all; there is no partial success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedName {
    /// Role inferred from the name prefix (or [`Role::Date`] for `date`).
    pub role: Role,
    /// Ordered `__`-separated segments after the role. Empty for `date`.
    pub parts: Vec<String>,
}

/// Checks a single segment token: lowercase-letter-led, `[a-z0-9_]*`,
/// no leading or trailing underscore.
fn is_valid_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_lowercase() {
        return false;
    }
    if segment.ends_with('_') {
        return false;
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Returns true if `name` satisfies the naming convention.
#[must_use]
pub fn is_valid_column_name(name: &str) -> bool {
    parse_column_name(name).is_some()
}

/// Parses a column name under the convention.
///
/// Returns `None` when the name is not `date`, contains no `__` separator,
/// the leading token is not an allowed role, or any segment fails the
/// token grammar (including empty tokens from `____` or a trailing `__`).
#[must_use]
pub fn parse_column_name(name: &str) -> Option<ParsedName> {
    if name == DATE_COLUMN {
        return Some(ParsedName {
            role: Role::Date,
            parts: Vec::new(),
        });
    }
    if !name.contains(ROLE_SEPARATOR) {
        return None;
    }
    let mut tokens = name.split(ROLE_SEPARATOR);
    let role = Role::from_tag(tokens.next()?)?;
    let parts: Vec<String> = tokens.map(str::to_string).collect();
    if parts.is_empty() {
        return None;
    }
    if !parts.iter().all(|p| is_valid_segment(p)) {
        return None;
    }
    Some(ParsedName { role, parts })
}

/// Infers the role of a column name, or `None` if the name does not follow
/// the convention.
#[must_use]
pub fn infer_role(name: &str) -> Option<Role> {
    parse_column_name(name).map(|parsed| parsed.role)
}

/// Checks a strict snake_case token: lowercase-letter-led, `[a-z0-9_]*`,
/// and no internal `__` (reserved as the role separator).
#[must_use]
pub fn is_valid_snake_case(name: &str) -> bool {
    if name.contains(ROLE_SEPARATOR) {
        return false;
    }
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_lowercase() {
        return false;
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
