//! Painter for `select` inputs
//!
//! Renders a `<select>` with one `<option>` per column choice and resolves a
//! stored value back to its label. Values are matched by string form, so a
//! numeric option value matches a string cell value and vice versa.

use std::sync::Arc;

use crate::config::{PainterConfig, UnmatchedValue};
use crate::error::PainterError;
use crate::markup::Element;
use crate::models::{display_string, CellData, OptionItem};
use crate::utils::{KeySource, PrefixedKeySource};

use super::InputPainter;

pub struct SelectPainter {
    keys: Arc<dyn KeySource>,
    unmatched: UnmatchedValue,
}

impl SelectPainter {
    pub const SELECTOR: &'static str = "select";

    pub fn new(keys: Arc<dyn KeySource>) -> Self {
        Self {
            keys,
            unmatched: UnmatchedValue::default(),
        }
    }

    /// Painter with configured policy; a non-empty name prefix wraps `keys`
    pub fn with_config(keys: Arc<dyn KeySource>, config: PainterConfig) -> Self {
        let keys: Arc<dyn KeySource> = if config.name_prefix.is_empty() {
            keys
        } else {
            Arc::new(PrefixedKeySource::new(config.name_prefix, keys))
        };
        Self {
            keys,
            unmatched: config.unmatched,
        }
    }

    fn option_element(item: &OptionItem, selected: bool) -> Element {
        Element::new("option")
            .attr("value", display_string(&item.value))
            .flag("selected", selected)
            .text(item.text.clone())
    }
}

impl InputPainter for SelectPainter {
    fn selector(&self) -> &'static str {
        Self::SELECTOR
    }

    fn build_editor(&self, cell: &CellData) -> Result<Element, PainterError> {
        let options = cell.options()?;
        let value = cell.value_string();

        log::debug!(
            "Rendering select for column '{}' with {} options",
            cell.column_model.column_name,
            options.len()
        );

        let option_elements = options
            .iter()
            .map(|item| Self::option_element(item, item.matches(&value)));

        Ok(Element::new("select")
            .attr("name", self.keys.next_key())
            .flag("disabled", cell.is_disabled)
            .children(option_elements))
    }

    fn resolve_display_value(&self, cell: &CellData) -> Result<String, PainterError> {
        let value = cell.value_string();
        cell.options()?
            .iter()
            .find(|item| item.matches(&value))
            .map(|item| item.text.clone())
            .ok_or(PainterError::NoMatchingOption { value })
    }

    fn unmatched_policy(&self) -> UnmatchedValue {
        self.unmatched
    }
}
