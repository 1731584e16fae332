//! Error types for cell painters
//!
//! Configuration errors (a column without options, an edit type with no
//! painter) are kept apart from lookup failures so the host grid can report
//! misconfigured columns instead of swallowing them.

use thiserror::Error;

/// Errors raised while painting a cell editor or resolving its display value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PainterError {
    /// Column model has no `editOption.list`
    #[error("Column '{column}' has no editOption.list")]
    MissingOptionList { column: String },

    /// No option value matches the cell value
    #[error("No option matches value '{value}'")]
    NoMatchingOption { value: String },

    /// Column edit type has no painter in this module
    #[error("Unsupported edit type: {0}")]
    UnsupportedEditType(String),

    /// Rendered control could not be found under the cell element
    #[error("No element matching '{selector}' in cell")]
    ControlNotFound { selector: String },

    /// Cell data from the host could not be read
    #[error("Invalid cell data: {0}")]
    InvalidCellData(String),
}

impl PainterError {
    /// True for errors caused by column configuration rather than cell values
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            PainterError::MissingOptionList { .. } | PainterError::UnsupportedEditType(_)
        )
    }
}
