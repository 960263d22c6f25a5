use std::sync::Arc;

/// One row of a glyph with its end-mark removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    text: Arc<str>,
    width: usize,
    leading: usize,
    trailing: usize,
}

impl Row {
    pub fn new(text: Arc<str>) -> Self {
        let width = text.chars().count();
        let leading = text.chars().take_while(|&c| c == ' ').count();
        let trailing = if leading == width {
            width
        } else {
            text.chars().rev().take_while(|&c| c == ' ').count()
        };
        Self {
            text,
            width,
            leading,
            trailing,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Shared handle to the interned row text.
    pub fn shared_text(&self) -> &Arc<str> {
        &self.text
    }

    /// Width in sub-characters.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Blank columns before the first visible sub-character (the whole width if blank).
    pub fn leading_blanks(&self) -> usize {
        self.leading
    }

    /// Blank columns after the last visible sub-character (the whole width if blank).
    pub fn trailing_blanks(&self) -> usize {
        self.trailing
    }

    pub fn is_blank(&self) -> bool {
        self.leading == self.width
    }
}

/// A renderable character cell: exactly `height` rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    rows: Box<[Row]>,
    width: usize,
    description: Option<String>,
}

impl Glyph {
    pub fn new(rows: Vec<Row>) -> Self {
        let width = rows.iter().map(Row::width).max().unwrap_or(0);
        Self {
            rows: rows.into_boxed_slice(),
            width,
            description: None,
        }
    }

    pub(crate) fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Free text that followed the code on a code-tag line, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
