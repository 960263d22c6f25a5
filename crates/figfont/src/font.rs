use std::collections::HashMap;
use std::io::{BufRead, Cursor};
use std::path::Path;
use std::{fmt, fs};

use crate::{
    glyph::Glyph,
    header::{FontHeader, PrintDirection},
    layout::Layout,
    pool::StringPool,
    reader::FontReader,
    render::{RenderedBanner, Renderer},
    FontError, Result,
};

/// A parsed FIGfont. Immutable once built and safe to share between threads.
pub struct Font {
    name: String,
    header: FontHeader,
    comments: Vec<String>,
    required: Box<[Option<Glyph>]>,
    tagged: HashMap<i32, Glyph>,
}

impl Font {
    pub(crate) fn new(
        name: String,
        header: FontHeader,
        comments: Vec<String>,
        required: Vec<Option<Glyph>>,
        tagged: HashMap<i32, Glyph>,
    ) -> Self {
        Self {
            name,
            header,
            comments,
            required: required.into_boxed_slice(),
            tagged,
        }
    }

    /// Parses a font from a line stream, interning rows in a pool private to this parse.
    pub fn parse<R: BufRead>(name: &str, reader: R) -> Result<Self> {
        let mut pool = StringPool::new();
        Self::parse_with_pool(name, reader, &mut pool)
    }

    /// Parses a font, interning rows in `pool` so that several fonts can share row text.
    pub fn parse_with_pool<R: BufRead>(name: &str, reader: R, pool: &mut StringPool) -> Result<Self> {
        FontReader::new(reader, pool).read(name)
    }

    /// Parses a font from raw bytes, unpacking a zipped font first when the bytes are a ZIP
    /// container.
    pub fn from_bytes(name: &str, bytes: &[u8]) -> Result<Self> {
        let mut pool = StringPool::new();
        Self::from_bytes_with_pool(name, bytes, &mut pool)
    }

    pub fn from_bytes_with_pool(name: &str, bytes: &[u8], pool: &mut StringPool) -> Result<Self> {
        // gzip (1F 8B) would need a second decompression crate
        if bytes.starts_with(&[0x1F, 0x8B]) {
            return Err(FontError::Archive(
                "gzip compressed fonts are not supported; provide a .flf or a zipped font".into(),
            ));
        }
        if bytes.starts_with(b"PK\x03\x04") {
            let content = unzip_font(bytes)?;
            return Self::parse_with_pool(name, Cursor::new(content), pool);
        }
        Self::parse_with_pool(name, bytes, pool)
    }

    /// Reads a font file from disk. The file stem becomes the font name.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_bytes(&name, &bytes)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn header(&self) -> &FontHeader {
        &self.header
    }

    pub fn hard_blank(&self) -> char {
        self.header.hard_blank
    }

    pub fn height(&self) -> usize {
        self.header.height
    }

    pub fn baseline(&self) -> usize {
        self.header.baseline
    }

    pub fn direction(&self) -> PrintDirection {
        self.header.direction
    }

    pub fn layout(&self) -> Layout {
        self.header.layout
    }

    /// Free-text comment lines that follow the header.
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Glyph for an integer code: dense table for 0–255, code-tagged table otherwise.
    pub fn glyph(&self, code: i32) -> Option<&Glyph> {
        match usize::try_from(code) {
            Ok(index) if index < self.required.len() => self.required[index].as_ref(),
            _ => self.tagged.get(&code),
        }
    }

    pub fn glyph_for(&self, ch: char) -> Option<&Glyph> {
        i32::try_from(u32::from(ch))
            .ok()
            .and_then(|code| self.glyph(code))
    }

    pub fn has_char(&self, ch: char) -> bool {
        self.glyph_for(ch).is_some()
    }

    /// Number of filled slots in the 0–255 table.
    pub fn required_glyph_count(&self) -> usize {
        self.required.iter().filter(|g| g.is_some()).count()
    }

    /// Number of glyphs keyed outside 0–255.
    pub fn tagged_glyph_count(&self) -> usize {
        self.tagged.len()
    }

    /// Width of the widest glyph in the font.
    pub fn max_width(&self) -> usize {
        self.required
            .iter()
            .flatten()
            .chain(self.tagged.values())
            .map(Glyph::width)
            .max()
            .unwrap_or(0)
    }

    /// Code-tagged glyph count announced by the header, if present.
    pub fn code_tag_count(&self) -> Option<usize> {
        self.header.code_tag_count
    }

    /// Renders `text` with the font's own layout and direction.
    pub fn render(&self, text: &str) -> RenderedBanner {
        Renderer::new(self).render(text)
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font")
            .field("name", &self.name)
            .field("height", &self.header.height)
            .field("layout", &self.header.layout)
            .field("required", &self.required_glyph_count())
            .field("tagged", &self.tagged.len())
            .finish()
    }
}

#[cfg(feature = "zip")]
fn unzip_font(bytes: &[u8]) -> Result<Vec<u8>> {
    use std::io::Read;
    use zip::ZipArchive;

    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| FontError::Archive(format!("zip open error: {e}")))?;
    for i in 0..archive.len() {
        let mut file = archive
            .by_index(i)
            .map_err(|e| FontError::Archive(format!("zip entry error: {e}")))?;
        if file.name().ends_with(".flf") {
            let mut buf = Vec::new();
            file.read_to_end(&mut buf)?;
            return Ok(buf);
        }
    }
    Err(FontError::Archive("zip archive contained no .flf".into()))
}

#[cfg(not(feature = "zip"))]
fn unzip_font(_bytes: &[u8]) -> Result<Vec<u8>> {
    Err(FontError::Archive(
        "zipped fonts need the `zip` feature".into(),
    ))
}
