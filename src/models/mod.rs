//! Models module for grid cell painters
//!
//! This module contains the per-render cell snapshot handed over by the
//! host grid, and the string-form rules used to compare cell values.

pub mod cell_data;
pub mod value;

// Re-export commonly used types
pub use cell_data::{CellData, ColumnEditOption, ColumnModel, OptionItem};
pub use value::display_string;
