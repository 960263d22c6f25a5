//! Benchmark for parsing the bundled FIGfonts and rendering with them.
//!
//! This benchmark:
//! 1. Parses every bundled font from its embedded bytes
//! 2. Parses the whole catalog through one shared string pool
//! 3. Renders a sentence with each smushing layout

use criterion::{criterion_group, criterion_main, Criterion};
use figfont::{pool::StringPool, BundledFont, Font, FontRegistry, LayoutMode, Renderer};
use std::hint::black_box;

const SENTENCE: &str = "The quick brown fox jumps over the lazy dog, 0123456789!";

fn bench_parsing(c: &mut Criterion) {
    for font in BundledFont::ALL {
        c.bench_function(&format!("parse_{}", font.name()), |b| {
            b.iter(|| black_box(Font::from_bytes(font.name(), black_box(font.as_bytes()))))
        });
    }

    // Benchmark: whole catalog through one pool
    c.bench_function("parse_catalog_shared_pool", |b| {
        b.iter(|| {
            let mut pool = StringPool::new();
            for font in BundledFont::ALL {
                let _ = black_box(Font::from_bytes_with_pool(
                    font.name(),
                    font.as_bytes(),
                    &mut pool,
                ));
            }
            black_box(pool.len())
        })
    });
}

fn bench_rendering(c: &mut Criterion) {
    let registry = FontRegistry::new();
    let Ok(standard) = registry.get("standard") else {
        return;
    };

    for mode in [LayoutMode::FullWidth, LayoutMode::Kerning, LayoutMode::Smushing] {
        let renderer = Renderer::new(&standard).layout_mode(mode);
        c.bench_function(&format!("render_standard_{mode:?}"), |b| {
            b.iter(|| black_box(renderer.render(black_box(SENTENCE))))
        });
    }

    println!(
        "\n{} fonts parsed, {} pooled rows",
        registry.parse_count(),
        registry.pool_size()
    );
}

criterion_group!(benches, bench_parsing, bench_rendering);
criterion_main!(benches);
