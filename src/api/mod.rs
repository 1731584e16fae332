//! Grid Painter WASM API
//!
//! JavaScript-facing bindings over the Rust painters.
//!
//! # Module Structure
//!
//! - `helpers`: Serialization and error conversion shared by all bindings
//! - `select`: The `SelectCellEditor` class
//! - `dom`: Locating, reading and focusing rendered controls

pub mod dom;
pub mod helpers;
pub mod select;

pub use dom::{focus_editor, read_editor_value};
pub use select::SelectCellEditor;
