//! Typed HTML markup
//!
//! Painters build an [`Element`] tree and serialize it once, instead of
//! splicing strings into templates. All attribute values and text are
//! escaped during serialization.

pub mod element;

pub use element::{escape_html, Attribute, Element, Node};
