use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use figfont::{Font, FontRegistry};
use log::debug;

/// Resolves a catalog name, or failing that a path to a `.flf` (or zipped) font.
pub fn resolve(registry: &FontRegistry, font: &str) -> Result<Arc<Font>> {
    if registry.contains(font) {
        return Ok(registry.get(font)?);
    }
    let path = Path::new(font);
    if !path.exists() {
        bail!(
            "unknown font {font:?}; bundled fonts: {}",
            registry.names().collect::<Vec<_>>().join(", ")
        );
    }
    debug!("loading font from {}", path.display());
    let parsed = Font::load(path).with_context(|| format!("failed to load {}", path.display()))?;
    Ok(Arc::new(parsed))
}
