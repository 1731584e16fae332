//! Utility modules for grid painters

pub mod unique_key;

pub use unique_key::{global_key_source, CounterKeySource, KeySource, PrefixedKeySource};
