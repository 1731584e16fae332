//! Grid Painter WASM Module
//!
//! Cell input painters for the browser data grid. Painters turn a cell
//! snapshot into editor markup and resolve stored values to display text.

pub mod api;
pub mod config;
pub mod error;
pub mod markup;
pub mod models;
pub mod painter;
pub mod utils;

// Re-export commonly used types
pub use config::{PainterConfig, UnmatchedValue};
pub use error::PainterError;
pub use models::*;
pub use painter::{painter_for, EditType, InputPainter, SelectPainter};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Grid painter WASM module initialized");
}
