//! Unique keys for rendered controls
//!
//! Editors rendered into the same form need distinct `name` attributes.
//! Painters take their key source by injection; the process-wide counter is
//! the default, and tests can supply their own.

use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Separator between a configured prefix and the inner key
pub const PREFIX_SEPARATOR: char = '-';

/// Source of keys that never repeat for the lifetime of the source
pub trait KeySource: Send + Sync {
    fn next_key(&self) -> String;
}

/// Monotonic counter producing decimal keys starting at 1
#[derive(Debug, Default)]
pub struct CounterKeySource {
    counter: AtomicU64,
}

impl CounterKeySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys handed out so far
    pub fn issued(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }
}

impl KeySource for CounterKeySource {
    fn next_key(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        n.to_string()
    }
}

/// Wraps another source as `"{prefix}-{key}"`
///
/// Inner keys must not contain [`PREFIX_SEPARATOR`]; the counter's decimal
/// keys never do, so prefixed keys split unambiguously at the last separator
/// and never equal a bare counter key.
pub struct PrefixedKeySource {
    prefix: String,
    inner: Arc<dyn KeySource>,
}

impl PrefixedKeySource {
    pub fn new(prefix: impl Into<String>, inner: Arc<dyn KeySource>) -> Self {
        Self {
            prefix: prefix.into(),
            inner,
        }
    }
}

impl KeySource for PrefixedKeySource {
    fn next_key(&self) -> String {
        format!("{}{}{}", self.prefix, PREFIX_SEPARATOR, self.inner.next_key())
    }
}

static GLOBAL_KEYS: Lazy<Arc<CounterKeySource>> = Lazy::new(|| Arc::new(CounterKeySource::new()));

/// Process-wide key source shared by painters built without their own
pub fn global_key_source() -> Arc<dyn KeySource> {
    GLOBAL_KEYS.clone()
}
