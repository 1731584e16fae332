//! Cell input painters
//!
//! An input painter turns a [`CellData`] snapshot into editor markup and into
//! the text shown while the cell is not being edited. The host grid picks a
//! painter per column from its edit type and later finds the rendered
//! control again through [`InputPainter::selector`].

pub mod select;

pub use select::SelectPainter;

use std::str::FromStr;
use std::sync::Arc;

use crate::config::{PainterConfig, UnmatchedValue};
use crate::error::PainterError;
use crate::markup::{escape_html, Element};
use crate::models::{CellData, ColumnModel};
use crate::utils::KeySource;

/// Capability shared by all cell input painters
pub trait InputPainter {
    /// CSS selector locating the rendered control inside the cell element
    fn selector(&self) -> &'static str;

    /// Build the editor control for this cell
    fn build_editor(&self, cell: &CellData) -> Result<Element, PainterError>;

    /// Text shown for the cell value outside of editing
    fn resolve_display_value(&self, cell: &CellData) -> Result<String, PainterError>;

    /// Policy applied by [`InputPainter::display_value`] on lookup failure
    fn unmatched_policy(&self) -> UnmatchedValue {
        UnmatchedValue::Error
    }

    /// Editor markup as an HTML string
    fn render_editor_markup(&self, cell: &CellData) -> Result<String, PainterError> {
        Ok(self.build_editor(cell)?.to_html())
    }

    /// Display value with the unmatched policy applied
    fn display_value(&self, cell: &CellData) -> Result<String, PainterError> {
        match self.resolve_display_value(cell) {
            Err(PainterError::NoMatchingOption { value })
                if self.unmatched_policy() == UnmatchedValue::Empty =>
            {
                log::warn!("No option for value '{}', showing empty cell", value);
                Ok(String::new())
            }
            other => other,
        }
    }

    /// Cell content: the editor while editing an enabled cell, escaped display text otherwise
    fn generate_html(&self, cell: &CellData, editing: bool) -> Result<String, PainterError> {
        if editing && !cell.is_disabled {
            self.render_editor_markup(cell)
        } else {
            Ok(escape_html(&self.display_value(cell)?))
        }
    }
}

/// Edit types a column may declare in `editOption.type`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditType {
    Select,
    Text,
    Password,
    Checkbox,
    Radio,
}

impl EditType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditType::Select => "select",
            EditType::Text => "text",
            EditType::Password => "password",
            EditType::Checkbox => "checkbox",
            EditType::Radio => "radio",
        }
    }
}

impl FromStr for EditType {
    type Err = PainterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "select" => Ok(EditType::Select),
            "text" => Ok(EditType::Text),
            "password" => Ok(EditType::Password),
            "checkbox" => Ok(EditType::Checkbox),
            "radio" => Ok(EditType::Radio),
            other => Err(PainterError::UnsupportedEditType(other.to_string())),
        }
    }
}

/// Pick the painter for a column from its edit type
pub fn painter_for(
    column: &ColumnModel,
    config: &PainterConfig,
    keys: Arc<dyn KeySource>,
) -> Result<Box<dyn InputPainter>, PainterError> {
    let edit_type = column
        .edit_option
        .as_ref()
        .and_then(|option| option.edit_type.as_deref())
        .ok_or_else(|| {
            PainterError::UnsupportedEditType(format!("none (column '{}')", column.column_name))
        })?
        .parse::<EditType>()?;

    match edit_type {
        EditType::Select => Ok(Box::new(SelectPainter::with_config(keys, config.clone()))),
        other => Err(PainterError::UnsupportedEditType(other.as_str().to_string())),
    }
}
