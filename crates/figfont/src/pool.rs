//! Row string interning.
//!
//! Many glyph rows in a font are identical (blank rows, repeated strokes), so the parser
//! hands every row through a [`StringPool`] and stores the shared `Arc<str>` it returns.
use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;

/// Content-keyed deduplication of row strings.
#[derive(Debug, Default)]
pub struct StringPool {
    strings: HashSet<Arc<str>>,
}

impl StringPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the canonical shared instance for `s`, creating it on first sight.
    pub fn pool(&mut self, s: &str) -> Arc<str> {
        if let Some(existing) = self.strings.get(s) {
            return Arc::clone(existing);
        }
        let shared: Arc<str> = Arc::from(s);
        self.strings.insert(Arc::clone(&shared));
        shared
    }

    /// Number of distinct strings held.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

/// A [`StringPool`] that several parses may share across threads.
#[derive(Debug, Default)]
pub struct SharedStringPool {
    inner: Mutex<StringPool>,
}

impl SharedStringPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(&self, s: &str) -> Arc<str> {
        self.inner.lock().pool(s)
    }

    /// Runs `f` with exclusive access to the underlying pool, e.g. for a whole font parse.
    pub fn with<R>(&self, f: impl FnOnce(&mut StringPool) -> R) -> R {
        f(&mut self.inner.lock())
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}
