//! `SelectCellEditor` JavaScript class

use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, deserialize_or_default, serialize, to_js_error};
use crate::config::PainterConfig;
use crate::models::CellData;
use crate::painter::{InputPainter, SelectPainter};
use crate::utils::global_key_source;

/// Select painter exposed to the host grid
#[wasm_bindgen]
pub struct SelectCellEditor {
    painter: SelectPainter,
}

#[wasm_bindgen]
impl SelectCellEditor {
    /// Create an editor; `config` may be omitted
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<SelectCellEditor, JsValue> {
        let config: PainterConfig = deserialize_or_default(config, "Failed to read painter config")?;
        Ok(SelectCellEditor {
            painter: SelectPainter::with_config(global_key_source(), config),
        })
    }

    /// Selector the host uses to find the rendered control
    #[wasm_bindgen(getter)]
    pub fn selector(&self) -> String {
        self.painter.selector().to_string()
    }

    #[wasm_bindgen(js_name = renderEditorMarkup)]
    pub fn render_editor_markup(&self, cell_data: JsValue) -> Result<String, JsValue> {
        let cell: CellData = deserialize(cell_data, "Failed to read cell data")?;
        self.painter.render_editor_markup(&cell).map_err(to_js_error)
    }

    /// Label for the cell value, with the configured unmatched policy applied
    #[wasm_bindgen(js_name = resolveDisplayValue)]
    pub fn resolve_display_value(&self, cell_data: JsValue) -> Result<String, JsValue> {
        let cell: CellData = deserialize(cell_data, "Failed to read cell data")?;
        self.painter.display_value(&cell).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = generateHtml)]
    pub fn generate_html(&self, cell_data: JsValue, editing: bool) -> Result<String, JsValue> {
        let cell: CellData = deserialize(cell_data, "Failed to read cell data")?;
        self.painter.generate_html(&cell, editing).map_err(to_js_error)
    }

    /// Typed editor tree, for hosts that build DOM nodes themselves
    #[wasm_bindgen(js_name = buildEditor)]
    pub fn build_editor(&self, cell_data: JsValue) -> Result<JsValue, JsValue> {
        let cell: CellData = deserialize(cell_data, "Failed to read cell data")?;
        let editor = self.painter.build_editor(&cell).map_err(to_js_error)?;
        serialize(&editor, "Failed to serialize editor")
    }
}
