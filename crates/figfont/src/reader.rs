//! Reading a FIGfont body: comments, the 102 required glyphs, then code-tagged glyphs.
use std::collections::{HashMap, VecDeque};
use std::io::BufRead;

use log::{debug, warn};

use crate::{
    font::Font,
    glyph::{Glyph, Row},
    header::FontHeader,
    int_literal::parse_int,
    pool::StringPool,
    FontError, Result,
};

/// Code points every FIGfont defines, in file order: printable ASCII followed by
/// Ä Ö Ü ä ö ü ß from Latin-1.
pub const REQUIRED_CODES: [u8; 102] = *b" !\"#$%&'()*+,-./0123456789:;<=>?@\
                                        ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`\
                                        abcdefghijklmnopqrstuvwxyz{|}~\
                                        \xc4\xd6\xdc\xe4\xf6\xfc\xdf";

/// Forward-only line source accepting `\n`, `\r\n` and bare `\r` terminators.
///
/// Lines that are not valid UTF-8 are decoded as ISO Latin-1.
pub(crate) struct LineReader<R> {
    inner: R,
    pending: VecDeque<String>,
    buf: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self {
            inner,
            pending: VecDeque::new(),
            buf: Vec::new(),
        }
    }

    pub(crate) fn next_line(&mut self) -> Result<Option<String>> {
        if let Some(line) = self.pending.pop_front() {
            return Ok(Some(line));
        }
        self.buf.clear();
        if self.inner.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        }
        if self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }
        let mut pieces = self.buf.split(|&b| b == b'\r').map(decode);
        let first = pieces.next().unwrap_or_default();
        self.pending.extend(pieces);
        Ok(Some(first))
    }
}

fn decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_owned(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}

/// Strips the end-mark run (and any whitespace after it) from a glyph line.
fn strip_end_mark(line: &str) -> &str {
    let line = line.trim_end_matches(|c: char| c.is_ascii_whitespace());
    match line.chars().last() {
        Some(mark) => line.trim_end_matches(mark),
        None => line,
    }
}

pub(crate) struct FontReader<'p, R> {
    lines: LineReader<R>,
    pool: &'p mut StringPool,
}

impl<'p, R: BufRead> FontReader<'p, R> {
    pub(crate) fn new(reader: R, pool: &'p mut StringPool) -> Self {
        Self {
            lines: LineReader::new(reader),
            pool,
        }
    }

    pub(crate) fn read(mut self, name: &str) -> Result<Font> {
        let header_line = self.lines.next_line()?.ok_or(FontError::EmptyFont)?;
        let header = FontHeader::parse(&header_line)?;

        let mut comments = Vec::new();
        for i in 0..header.comment_lines {
            let line = self.lines.next_line()?.ok_or_else(|| {
                FontError::UnexpectedEndOfFont(format!(
                    "comment line {} of {}",
                    i + 1,
                    header.comment_lines
                ))
            })?;
            comments.push(line);
        }

        let mut required: Vec<Option<Glyph>> = vec![None; 256];
        for code in REQUIRED_CODES {
            required[usize::from(code)] = Some(self.read_glyph(i32::from(code), header.height)?);
        }

        let mut tagged = HashMap::new();
        let mut tag_count = 0usize;
        while let Some(line) = self.lines.next_line()? {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let (code_text, description) = match trimmed.split_once(char::is_whitespace) {
                Some((code, rest)) => (code, Some(rest.trim())),
                None => (trimmed, None),
            };
            let code = match parse_int(code_text) {
                Some(-1) | None => return Err(FontError::InvalidCodeTag(trimmed.to_string())),
                Some(code) => code,
            };
            let description = description.filter(|d| !d.is_empty()).map(str::to_owned);
            let glyph = self
                .read_glyph(code, header.height)?
                .with_description(description);
            tag_count += 1;

            let replaced = match u8::try_from(code) {
                Ok(byte) => required[usize::from(byte)].replace(glyph).is_some(),
                Err(_) => tagged.insert(code, glyph).is_some(),
            };
            if replaced {
                debug!("{name}: code {code} redefined by a later code tag");
            }
        }

        if let Some(expected) = header.code_tag_count {
            if expected != tag_count {
                warn!("{name}: header announces {expected} code-tagged glyphs, found {tag_count}");
            }
        }
        debug!(
            "{name}: parsed {} required and {tag_count} code-tagged glyphs",
            REQUIRED_CODES.len()
        );

        Ok(Font::new(name.to_string(), header, comments, required, tagged))
    }

    fn read_glyph(&mut self, code: i32, height: usize) -> Result<Glyph> {
        let mut rows = Vec::with_capacity(height);
        for row in 0..height {
            let line = self.lines.next_line()?.ok_or_else(|| {
                FontError::UnexpectedEndOfFont(format!("row {} of glyph {code}", row + 1))
            })?;
            let text = self.pool.pool(strip_end_mark(&line));
            rows.push(Row::new(text));
        }
        Ok(Glyph::new(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(input: &[u8]) -> Vec<String> {
        let mut reader = LineReader::new(input);
        let mut out = Vec::new();
        while let Some(line) = reader.next_line().unwrap() {
            out.push(line);
        }
        out
    }

    #[test]
    fn line_terminators() {
        assert_eq!(lines(b"a\nb\r\nc\rd"), ["a", "b", "c", "d"]);
        assert_eq!(lines(b"a\n\nb\n"), ["a", "", "b"]);
        assert!(lines(b"").is_empty());
    }

    #[test]
    fn latin1_fallback() {
        assert_eq!(lines(b"\xc4@@\n"), ["\u{c4}@@"]);
        assert_eq!(lines("Ä@@\n".as_bytes()), ["Ä@@"]);
    }

    #[test]
    fn end_marks() {
        assert_eq!(strip_end_mark(" _ @"), " _ ");
        assert_eq!(strip_end_mark("(_)@@"), "(_)");
        assert_eq!(strip_end_mark("@##"), "@");
        assert_eq!(strip_end_mark("|_|@@  "), "|_|");
        assert_eq!(strip_end_mark(""), "");
    }

    #[test]
    fn required_codes_order() {
        assert_eq!(REQUIRED_CODES[0], b' ');
        assert_eq!(REQUIRED_CODES[94], b'~');
        assert_eq!(&REQUIRED_CODES[95..], &[196, 214, 220, 228, 246, 252, 223]);
    }
}
