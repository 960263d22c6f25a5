//! figfont: FIGfont (`.flf`) parsing and banner rendering.
//!
//! Features: header grammar, glyph reader with code-tagged extensions, kerning/smushing layout,
//! zipped fonts (`zip`), a bundled font catalog with a caching registry (`bundled`).
//!
//! ```
//! use figfont::FontRegistry;
//!
//! let registry = FontRegistry::new();
//! let font = registry.get("standard").unwrap();
//! let banner = font.render("Hi");
//! assert_eq!(banner.height(), font.height());
//! println!("{banner}");
//! ```

mod error;
mod font;
mod glyph;
mod header;
pub mod int_literal;
mod layout;
pub mod pool;
mod reader;
mod render;

#[cfg(feature = "bundled")]
mod catalog;
#[cfg(feature = "bundled")]
mod registry;

pub use error::{FontError, Result};
pub use font::Font;
pub use glyph::{Glyph, Row};
pub use header::{FontHeader, PrintDirection, SIGNATURE};
pub use layout::{Layout, LayoutMode};
pub use reader::REQUIRED_CODES;
pub use render::{RenderedBanner, Renderer};

#[cfg(feature = "bundled")]
pub use catalog::BundledFont;
#[cfg(feature = "bundled")]
pub use registry::FontRegistry;

// Test utilities
pub mod test_support;
