//! WASM binding tests
//!
//! Run in a browser with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use grid_painter_wasm::api::{focus_editor, read_editor_value, SelectCellEditor};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn cell_data(value: &str, disabled: bool) -> JsValue {
    let json = format!(
        r#"{{"value":"{}","isDisabled":{},"columnModel":{{"columnName":"level","editOption":{{"type":"select","list":[{{"value":1,"text":"Low"}},{{"value":2,"text":"High"}}]}}}}}}"#,
        value, disabled
    );
    js_sys::JSON::parse(&json).unwrap()
}

#[wasm_bindgen_test]
fn test_editor_without_config() {
    let editor = SelectCellEditor::new(JsValue::UNDEFINED).unwrap();
    assert_eq!(editor.selector(), "select");
}

#[wasm_bindgen_test]
fn test_render_and_resolve() {
    let editor = SelectCellEditor::new(JsValue::UNDEFINED).unwrap();

    let html = editor.render_editor_markup(cell_data("2", false)).unwrap();
    assert!(html.contains(r#"<option value="2" selected>High</option>"#));
    assert_eq!(editor.resolve_display_value(cell_data("2", false)).unwrap(), "High");
}

#[wasm_bindgen_test]
fn test_unmatched_policies() {
    let strict = SelectCellEditor::new(JsValue::UNDEFINED).unwrap();
    assert!(strict.resolve_display_value(cell_data("7", false)).is_err());

    let config = js_sys::JSON::parse(r#"{"unmatched":"empty"}"#).unwrap();
    let lenient = SelectCellEditor::new(config).unwrap();
    assert_eq!(lenient.resolve_display_value(cell_data("7", false)).unwrap(), "");
}

fn name_of(html: &str) -> String {
    let start = html.find("name=\"").unwrap() + "name=\"".len();
    let end = start + html[start..].find('"').unwrap();
    html[start..end].to_string()
}

#[wasm_bindgen_test]
fn test_prefixed_editors_get_distinct_names() {
    let config = || js_sys::JSON::parse(r#"{"namePrefix":"sel"}"#).unwrap();
    let first = SelectCellEditor::new(config()).unwrap();
    let second = SelectCellEditor::new(config()).unwrap();
    let plain = SelectCellEditor::new(JsValue::UNDEFINED).unwrap();

    let a = name_of(&first.render_editor_markup(cell_data("1", false)).unwrap());
    let b = name_of(&second.render_editor_markup(cell_data("1", false)).unwrap());
    let c = name_of(&plain.render_editor_markup(cell_data("1", false)).unwrap());

    assert!(a.starts_with("sel-"));
    assert!(b.starts_with("sel-"));
    assert_ne!(a, b);
    assert_ne!(a, c);
    assert_ne!(b, c);
}

#[wasm_bindgen_test]
fn test_invalid_cell_data_is_error() {
    let editor = SelectCellEditor::new(JsValue::UNDEFINED).unwrap();
    assert!(editor.render_editor_markup(JsValue::from_str("not a cell")).is_err());
}

#[wasm_bindgen_test]
fn test_read_and_focus_rendered_control() {
    let editor = SelectCellEditor::new(JsValue::UNDEFINED).unwrap();
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    container.set_inner_html(&editor.render_editor_markup(cell_data("2", false)).unwrap());
    document.body().unwrap().append_child(&container).unwrap();

    assert_eq!(read_editor_value(&container).unwrap(), "2");
    assert!(focus_editor(&container).is_ok());

    let empty = document.create_element("div").unwrap();
    assert!(read_editor_value(&empty).is_err());
}
