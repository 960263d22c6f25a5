//! Test support utilities for figfont.
//!
//! This module provides helpers that are useful for testing font parsing and rendering,
//! but are not part of the public API.
use std::collections::HashMap;
use std::fmt::Write;

use crate::{layout::Layout, reader::REQUIRED_CODES, Font, Result};

/// Builds FIGfont source text in memory.
///
/// Every required glyph that is not given explicitly is drawn as its own character on each
/// row, so a font built with `FontSource::new(1)` renders text as itself.
#[derive(Clone, Debug)]
pub struct FontSource {
    hard_blank: char,
    height: usize,
    legacy_layout: i32,
    layout: Option<Layout>,
    right_to_left: bool,
    comments: Vec<String>,
    glyphs: HashMap<char, Vec<String>>,
    tagged: Vec<(String, Vec<String>)>,
}

impl FontSource {
    pub fn new(height: usize) -> Self {
        Self {
            hard_blank: '$',
            height,
            legacy_layout: -1,
            layout: None,
            right_to_left: false,
            comments: Vec::new(),
            glyphs: HashMap::new(),
            tagged: Vec::new(),
        }
    }

    pub fn hard_blank(mut self, hard_blank: char) -> Self {
        self.hard_blank = hard_blank;
        self
    }

    /// Legacy layout field; used for the layout when no full layout is set.
    pub fn legacy_layout(mut self, legacy: i32) -> Self {
        self.legacy_layout = legacy;
        self
    }

    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn right_to_left(mut self) -> Self {
        self.right_to_left = true;
        self
    }

    pub fn comment(mut self, line: &str) -> Self {
        self.comments.push(line.to_string());
        self
    }

    /// Replaces the drawing of a required character.
    pub fn glyph(mut self, ch: char, rows: &[&str]) -> Self {
        self.glyphs
            .insert(ch, rows.iter().map(|r| r.to_string()).collect());
        self
    }

    /// Appends a code-tagged glyph; `tag` is written verbatim as the tag line.
    pub fn tagged(mut self, tag: &str, rows: &[&str]) -> Self {
        self.tagged
            .push((tag.to_string(), rows.iter().map(|r| r.to_string()).collect()));
        self
    }

    pub fn build(&self) -> String {
        let mut out = String::new();
        let max_width = self
            .glyphs
            .values()
            .chain(self.tagged.iter().map(|(_, rows)| rows))
            .flatten()
            .map(|row| row.chars().count())
            .max()
            .unwrap_or(1);
        let _ = write!(
            out,
            "flf2a{} {} {} {} {} {} {}",
            self.hard_blank,
            self.height,
            self.height,
            max_width + 2,
            self.legacy_layout,
            self.comments.len(),
            u8::from(self.right_to_left),
        );
        if let Some(layout) = self.layout {
            let _ = write!(out, " {}", layout.bits());
        }
        out.push('\n');
        for comment in &self.comments {
            out.push_str(comment);
            out.push('\n');
        }
        for code in REQUIRED_CODES {
            let ch = char::from(code);
            match self.glyphs.get(&ch) {
                Some(rows) => push_glyph(&mut out, rows),
                None => push_glyph(&mut out, &vec![ch.to_string(); self.height]),
            }
        }
        for (tag, rows) in &self.tagged {
            out.push_str(tag);
            out.push('\n');
            push_glyph(&mut out, rows);
        }
        out
    }

    pub fn parse(&self, name: &str) -> Result<Font> {
        Font::parse(name, self.build().as_bytes())
    }
}

fn push_glyph(out: &mut String, rows: &[String]) {
    for (i, row) in rows.iter().enumerate() {
        let mark = if row.ends_with('@') { '#' } else { '@' };
        out.push_str(row);
        out.push(mark);
        if i + 1 == rows.len() {
            out.push(mark);
        }
        out.push('\n');
    }
}
