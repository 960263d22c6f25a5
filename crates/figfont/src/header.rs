//! The FIGfont header line.
//!
//! ```text
//! flf2a$ 6 5 16 15 11 0 24463 229
//! |  | | | |  |  |  | |  |     |
//! |  | | | |  |  |  | |  |     codetag count
//! |  | | | |  |  |  | |  full layout
//! |  | | | |  |  |  | print direction
//! |  | | | |  |  |  comment lines
//! |  | | | |  |  legacy layout
//! |  | | | |  max length
//! |  | | | baseline
//! |  | | height
//! |  | hard-blank
//! |  format revision
//! signature
//! ```
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::{layout::Layout, FontError, Result};

/// Signature every FIGfont header starts with.
pub const SIGNATURE: &str = "flf2";

static HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^flf2a(?P<hardblank>.)[ \t]+(?P<height>\d+)[ \t]+(?P<baseline>\d+)[ \t]+(?P<maxlength>\d+)[ \t]+(?P<layoutold>-?\d+)[ \t]+(?P<commentlinecount>\d+)(?:[ \t]+(?P<direction>\d+))?(?:[ \t]+(?P<layoutnew>\d+))?(?:[ \t]+(?P<codetagcount>\d+))?(?:[ \t].*)?$",
    )
    .expect("header pattern is a valid regex")
});

/// Left-to-right or right-to-left placement of successive glyphs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrintDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// Decoded header line of a FIGfont.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontHeader {
    pub hard_blank: char,
    /// Rows per glyph, shared by every glyph of the font.
    pub height: usize,
    /// Rows from the top of a glyph to the baseline, descenders excluded.
    pub baseline: usize,
    pub legacy_layout: i32,
    pub comment_lines: usize,
    pub direction: PrintDirection,
    /// Full layout, taken from the header or upgraded from `legacy_layout`.
    pub layout: Layout,
    /// Number of code-tagged glyphs the header announces. Informational only.
    pub code_tag_count: Option<usize>,
}

impl FontHeader {
    /// Parses the first line of a font stream.
    pub fn parse(line: &str) -> Result<Self> {
        if !line.starts_with(SIGNATURE) {
            return Err(FontError::MalformedHeader(format!(
                "missing {SIGNATURE:?} signature in {line:?}"
            )));
        }
        let caps = HEADER_RE
            .captures(line)
            .ok_or_else(|| FontError::MalformedHeader(format!("unrecognised header {line:?}")))?;

        let hard_blank = caps
            .name("hardblank")
            .and_then(|m| m.as_str().chars().next())
            .ok_or_else(|| FontError::MalformedHeader("missing hard-blank".into()))?;
        if matches!(hard_blank, ' ' | '\r' | '\n' | '\0') {
            return Err(FontError::MalformedHeader(format!(
                "{hard_blank:?} cannot be the hard-blank"
            )));
        }

        let height: usize = field(&caps, "height")?;
        if height == 0 {
            return Err(FontError::MalformedHeader("height is 0".into()));
        }
        let baseline: usize = field(&caps, "baseline")?;
        // max length is validated by the grammar but not kept
        let _max_length: usize = field(&caps, "maxlength")?;
        let legacy_layout: i32 = field(&caps, "layoutold")?;
        let comment_lines: usize = field(&caps, "commentlinecount")?;

        let direction = match optional_field::<u8>(&caps, "direction")? {
            None | Some(0) => PrintDirection::LeftToRight,
            Some(1) => PrintDirection::RightToLeft,
            Some(other) => {
                return Err(FontError::MalformedHeader(format!(
                    "print direction {other} is not 0 or 1"
                )))
            }
        };
        let layout = match optional_field::<u32>(&caps, "layoutnew")? {
            Some(bits) => Layout::from_bits_retain(bits),
            None => Layout::from_legacy(legacy_layout),
        };
        let code_tag_count = optional_field(&caps, "codetagcount")?;

        if baseline == 0 || baseline > height {
            warn!("baseline {baseline} outside 1..={height}");
        }
        debug!(
            "header: hard-blank {hard_blank:?}, height {height}, layout {:#x}, {comment_lines} comment lines",
            layout.bits()
        );

        Ok(Self {
            hard_blank,
            height,
            baseline,
            legacy_layout,
            comment_lines,
            direction,
            layout,
            code_tag_count,
        })
    }
}

fn field<T: std::str::FromStr>(caps: &Captures<'_>, name: &str) -> Result<T> {
    optional_field(caps, name)?
        .ok_or_else(|| FontError::MalformedHeader(format!("missing field {name}")))
}

fn optional_field<T: std::str::FromStr>(caps: &Captures<'_>, name: &str) -> Result<Option<T>> {
    caps.name(name)
        .map(|m| {
            m.as_str().parse().map_err(|_| {
                FontError::MalformedHeader(format!("{name} value {:?} is out of range", m.as_str()))
            })
        })
        .transpose()
}
