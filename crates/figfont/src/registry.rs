//! Name-based access to the bundled fonts, parsed lazily and cached.
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use log::debug;
use once_cell::sync::OnceCell;

use crate::{catalog::BundledFont, pool::SharedStringPool, Font, FontError, Result};

/// Resolves bundled font names to parsed fonts.
///
/// Each font is parsed at most once, on first request, even when several threads ask for it
/// at the same time. Row strings are interned in one pool shared by every font the registry
/// parses.
pub struct FontRegistry {
    pool: SharedStringPool,
    cache: HashMap<BundledFont, OnceCell<Arc<Font>>>,
    parses: AtomicUsize,
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FontRegistry {
    pub fn new() -> Self {
        Self {
            pool: SharedStringPool::new(),
            cache: BundledFont::ALL
                .iter()
                .map(|font| (*font, OnceCell::new()))
                .collect(),
            parses: AtomicUsize::new(0),
        }
    }

    /// Returns the font called `name`, parsing it on first use.
    ///
    /// Fails with [`FontError::FontNotFound`] for names outside the catalog, and for catalog
    /// fonts that fail to parse (the parse error is kept as the source).
    pub fn get(&self, name: &str) -> Result<Arc<Font>> {
        let cell = BundledFont::from_name(name)
            .and_then(|font| self.cache.get(&font).map(|cell| (font, cell)));
        let Some((font, cell)) = cell else {
            return Err(FontError::not_found(name));
        };
        cell.get_or_try_init(|| self.parse(font))
            .cloned()
            .map_err(|cause| FontError::FontNotFound {
                name: name.to_string(),
                cause: Some(Box::new(cause)),
            })
    }

    /// Like [`get`](Self::get) but returns `None` instead of an error.
    pub fn try_get(&self, name: &str) -> Option<Arc<Font>> {
        self.get(name).ok()
    }

    /// Names of every font the registry can resolve.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        BundledFont::ALL.iter().map(BundledFont::name)
    }

    pub fn contains(&self, name: &str) -> bool {
        BundledFont::from_name(name).is_some()
    }

    /// Number of fonts parsed so far.
    pub fn parse_count(&self) -> usize {
        self.parses.load(Ordering::Acquire)
    }

    /// Distinct row strings held by the shared interner.
    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    fn parse(&self, font: BundledFont) -> Result<Arc<Font>> {
        let parsed = self
            .pool
            .with(|pool| Font::from_bytes_with_pool(font.name(), font.as_bytes(), pool))?;
        self.parses.fetch_add(1, Ordering::AcqRel);
        debug!(
            "registry: cached {} ({} rows pooled)",
            font.name(),
            self.pool.len()
        );
        Ok(Arc::new(parsed))
    }
}
