//! Painter configuration
//!
//! Passed from JavaScript as an optional plain object; every field has a
//! default so `{}` and `undefined` are both valid.

use serde::{Deserialize, Serialize};

/// What display-value resolution does when no option matches
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UnmatchedValue {
    /// Report `NoMatchingOption` to the caller
    #[default]
    Error,
    /// Show an empty string and log a warning
    Empty,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PainterConfig {
    /// Prefix for generated control names, joined as `"{prefix}-{key}"`;
    /// empty keeps plain numeric keys
    pub name_prefix: String,

    pub unmatched: UnmatchedValue,
}
