//! DOM access to rendered controls
//!
//! After the host inserts editor markup into a cell element, these helpers
//! find the control again through the painter's selector.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlSelectElement};

use super::helpers::to_js_error;
use crate::error::PainterError;
use crate::painter::SelectPainter;

/// First element under `container` matching `selector`
pub fn find_control(container: &Element, selector: &str) -> Result<Element, PainterError> {
    let not_found = || PainterError::ControlNotFound {
        selector: selector.to_string(),
    };

    container
        .query_selector(selector)
        .map_err(|_| not_found())?
        .ok_or_else(not_found)
}

/// Value of the select control rendered inside `container`
#[wasm_bindgen(js_name = readEditorValue)]
pub fn read_editor_value(container: &Element) -> Result<String, JsValue> {
    let control = find_control(container, SelectPainter::SELECTOR).map_err(to_js_error)?;
    let select: HtmlSelectElement = control.dyn_into().map_err(|_| {
        to_js_error(PainterError::ControlNotFound {
            selector: SelectPainter::SELECTOR.to_string(),
        })
    })?;
    Ok(select.value())
}

/// Move focus to the select control rendered inside `container`
#[wasm_bindgen(js_name = focusEditor)]
pub fn focus_editor(container: &Element) -> Result<(), JsValue> {
    let control = find_control(container, SelectPainter::SELECTOR).map_err(to_js_error)?;
    let element: HtmlElement = control.dyn_into().map_err(|_| {
        to_js_error(PainterError::ControlNotFound {
            selector: SelectPainter::SELECTOR.to_string(),
        })
    })?;
    element.focus()
}
