//! Shared helpers for WASM API operations
//!
//! Common patterns for deserializing host objects and reporting errors
//! back to JavaScript.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::PainterError;

// ============================================================================
// Error Conversion
// ============================================================================

/// Log a painter error and convert it for JavaScript
pub fn to_js_error(err: PainterError) -> JsValue {
    log::error!("[WASM] {}", err);
    JsValue::from_str(&err.to_string())
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        to_js_error(PainterError::InvalidCellData(format!("{}: {}", error_context, e)))
    })
}

/// Deserialize an optional value; `undefined` and `null` give the default
pub fn deserialize_or_default<T: DeserializeOwned + Default>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        Ok(T::default())
    } else {
        deserialize(value, error_context)
    }
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("[WASM] {}", msg);
        JsValue::from_str(&msg)
    })
}
