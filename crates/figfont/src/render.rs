//! Horizontal layout of glyphs: full width, kerning and smushing.
use std::fmt;

use log::trace;

use crate::{
    font::Font,
    glyph::Glyph,
    header::PrintDirection,
    layout::{Layout, LayoutMode},
};

/// Output of a render: exactly `height` lines, hard-blanks already resolved to spaces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderedBanner {
    lines: Vec<String>,
}

impl RenderedBanner {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Width in characters of the longest line.
    pub fn width(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
    }

    pub fn join(&self, separator: &str) -> String {
        self.lines.join(separator)
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl fmt::Display for RenderedBanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// Render configuration for one font. Starts from the font's own layout and direction.
///
/// ```
/// use figfont::{test_support::FontSource, LayoutMode, Renderer};
///
/// let font = FontSource::new(1).parse("demo").unwrap();
/// let banner = Renderer::new(&font)
///     .layout_mode(LayoutMode::FullWidth)
///     .render("hi");
/// assert_eq!(banner.lines(), ["hi"]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Renderer<'f> {
    font: &'f Font,
    layout: Layout,
    direction: PrintDirection,
}

impl<'f> Renderer<'f> {
    pub fn new(font: &'f Font) -> Self {
        Self {
            font,
            layout: font.layout(),
            direction: font.direction(),
        }
    }

    /// Overrides how glyphs are brought together, keeping the font's rule bits.
    pub fn layout_mode(mut self, mode: LayoutMode) -> Self {
        self.layout = self.layout.with_mode(mode);
        self
    }

    /// Replaces the font's controlled smushing rules. Mode bits in `rules` are ignored.
    pub fn smushing_rules(mut self, rules: Layout) -> Self {
        self.layout = self.layout.difference(self.layout.rules()) | rules.rules();
        self
    }

    pub fn print_direction(mut self, direction: PrintDirection) -> Self {
        self.direction = direction;
        self
    }

    /// The layout word this renderer applies.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn render(&self, text: &str) -> RenderedBanner {
        let mut canvas = Canvas::new(self.font.height());
        let chars: Vec<char> = match self.direction {
            PrintDirection::LeftToRight => text.chars().collect(),
            PrintDirection::RightToLeft => text.chars().rev().collect(),
        };
        for ch in chars {
            let Some(glyph) = self.font.glyph_for(ch).or_else(|| self.font.glyph(0)) else {
                trace!("{}: no glyph for {ch:?}, skipped", self.font.name());
                continue;
            };
            let cells = GlyphCells::new(glyph, canvas.rows.len());
            let amount = self.smush_amount(&canvas, &cells);
            trace!(
                "{}: {ch:?} width {} overlaps {amount}",
                self.font.name(),
                cells.width
            );
            self.place(&mut canvas, &cells, amount);
        }
        canvas.finish(self.font.hard_blank())
    }

    /// Columns by which the next glyph may overlap the line: the minimum over all rows.
    fn smush_amount(&self, canvas: &Canvas, cells: &GlyphCells) -> usize {
        if self.layout.mode() == LayoutMode::FullWidth {
            return 0;
        }
        let mut amount = cells.width;
        for (line, (row, edge)) in canvas.rows.iter().zip(cells.rows.iter().zip(&cells.edges)) {
            // last visible column of the line so far, 0 when there is none
            let line_edge = line.iter().rposition(|&c| c != ' ').unwrap_or(0);
            let left = line.get(line_edge).copied();
            let right = row.get(*edge).copied();

            let mut row_amount = edge + canvas.width - line_edge;
            let touching = match (left, right) {
                (None | Some(' '), _) => true,
                (Some(l), Some(r)) => self.smush(l, r, canvas.prev_width, cells.width).is_some(),
                (Some(_), None) => false,
            };
            if !touching {
                row_amount -= 1;
            }
            amount = amount.min(row_amount);
        }
        amount
    }

    /// Merges one pair of overlapping sub-characters, `None` if they may not overlap.
    fn smush(&self, left: char, right: char, prev_width: usize, width: usize) -> Option<char> {
        if left == ' ' {
            return Some(right);
        }
        if right == ' ' {
            return Some(left);
        }
        if prev_width < 2 || width < 2 {
            return None;
        }
        if self.layout.mode() != LayoutMode::Smushing {
            return None;
        }
        let hard_blank = self.font.hard_blank();
        if self.layout.is_universal() {
            return Some(if left == hard_blank {
                right
            } else if right == hard_blank {
                left
            } else {
                match self.direction {
                    PrintDirection::LeftToRight => right,
                    PrintDirection::RightToLeft => left,
                }
            });
        }
        self.layout.smush_rules(left, right, hard_blank)
    }

    fn place(&self, canvas: &mut Canvas, cells: &GlyphCells, amount: usize) {
        let width = canvas.width;
        // columns that would fall before the start of the line are dropped
        let skip = amount.saturating_sub(width);
        for (line, row) in canvas.rows.iter_mut().zip(&cells.rows) {
            for k in skip..amount {
                let col = width + k - amount;
                line[col] = self
                    .smush(line[col], row[k], canvas.prev_width, cells.width)
                    .unwrap_or(row[k]);
            }
            line.extend_from_slice(&row[amount..]);
        }
        canvas.width = width + cells.width - amount;
        canvas.prev_width = cells.width;
    }
}

/// The glyph's rows as characters padded to the glyph width.
struct GlyphCells {
    rows: Vec<Vec<char>>,
    /// First visible column per row, the glyph width for blank rows.
    edges: Vec<usize>,
    width: usize,
}

impl GlyphCells {
    fn new(glyph: &Glyph, height: usize) -> Self {
        let width = glyph.width();
        let mut rows = Vec::with_capacity(height);
        let mut edges = Vec::with_capacity(height);
        for i in 0..height {
            let row = glyph.rows().get(i);
            let mut cells: Vec<char> = row.map(|r| r.text().chars().collect()).unwrap_or_default();
            cells.resize(width, ' ');
            rows.push(cells);
            edges.push(match row {
                Some(r) if !r.is_blank() => r.leading_blanks(),
                _ => width,
            });
        }
        Self { rows, edges, width }
    }
}

struct Canvas {
    rows: Vec<Vec<char>>,
    width: usize,
    prev_width: usize,
}

impl Canvas {
    fn new(height: usize) -> Self {
        Self {
            rows: vec![Vec::new(); height],
            width: 0,
            prev_width: 0,
        }
    }

    fn finish(self, hard_blank: char) -> RenderedBanner {
        let lines = self
            .rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|c| if c == hard_blank { ' ' } else { c })
                    .collect()
            })
            .collect();
        RenderedBanner { lines }
    }
}
