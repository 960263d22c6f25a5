#![cfg(feature = "bundled")]

use std::sync::Arc;

use figfont::{BundledFont, FontError, FontRegistry};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn resolves_every_catalog_name() {
    init_logging();
    let registry = FontRegistry::new();
    for font in BundledFont::ALL {
        let parsed = registry.get(font.name()).unwrap();
        assert_eq!(parsed.name(), font.name());
        // standard adds two Latin-1 glyphs through code tags
        let tagged = if *font == BundledFont::Standard { 2 } else { 0 };
        assert_eq!(
            parsed.required_glyph_count(),
            figfont::REQUIRED_CODES.len() + tagged
        );
    }
    assert_eq!(registry.parse_count(), BundledFont::ALL.len());
}

#[test]
fn not_found_for_names_outside_the_catalog() {
    init_logging();
    let registry = FontRegistry::new();
    for name in ["", "STANDARD", "big", "../standard"] {
        assert!(matches!(
            registry.get(name),
            Err(FontError::FontNotFound { .. })
        ));
        assert!(registry.try_get(name).is_none());
    }
}

#[test]
fn shared_between_threads() {
    init_logging();
    let registry = Arc::new(FontRegistry::new());
    let banners: Vec<String> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || registry.get("standard").unwrap().render("42").to_string())
        })
        .collect::<Vec<_>>()
        .into_iter()
        .map(|h| h.join().unwrap())
        .collect();
    assert!(banners.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(registry.parse_count(), 1);
}
