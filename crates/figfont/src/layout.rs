//! Layout flags and the horizontal smushing rules.
use bitflags::bitflags;

bitflags! {
    /// The resolved ("full") layout word of a font.
    ///
    /// Bits 0–5 select controlled smushing rules, bit 6 requests kerning and bit 7 requests
    /// smushing. Higher bits (vertical layout) are carried through untouched.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Layout: u32 {
        /// Two identical sub-characters smush into one.
        const EQUAL_CHARACTER = 1;
        /// `_` is replaced by any of `|/\[]{}()<>`.
        const UNDERSCORE = 1 << 1;
        /// Classes `|`, `/\`, `[]`, `{}`, `()`, `<>`: the later class wins.
        const HIERARCHY = 1 << 2;
        /// Opposing `[]`, `{}` or `()` become `|`.
        const OPPOSITE_PAIR = 1 << 3;
        /// `/\` becomes `|`, `\/` becomes `Y`, `><` becomes `X`.
        const BIG_X = 1 << 4;
        /// Two hard-blanks smush into one.
        const HARDBLANK = 1 << 5;
        const KERNING = 1 << 6;
        const SMUSHING = 1 << 7;

        const _ = !0;
    }
}

/// Mask of the six controlled smushing rules.
const RULES: u32 = 0x3F;

impl Layout {
    /// Derives the full layout from the legacy header field when the full layout is absent.
    pub fn from_legacy(legacy: i32) -> Self {
        match legacy {
            0 => Layout::KERNING,
            l if l < 0 => Layout::empty(),
            l => Layout::from_bits_retain((l as u32) & 0x1F) | Layout::SMUSHING,
        }
    }

    pub fn mode(self) -> LayoutMode {
        if self.contains(Layout::SMUSHING) {
            LayoutMode::Smushing
        } else if self.contains(Layout::KERNING) {
            LayoutMode::Kerning
        } else {
            LayoutMode::FullWidth
        }
    }

    /// Returns a copy with the mode bits replaced and the rule bits kept.
    pub fn with_mode(self, mode: LayoutMode) -> Self {
        let base = self - (Layout::KERNING | Layout::SMUSHING);
        match mode {
            LayoutMode::FullWidth => base,
            LayoutMode::Kerning => base | Layout::KERNING,
            LayoutMode::Smushing => base | Layout::SMUSHING,
        }
    }

    /// The controlled smushing rules only.
    pub fn rules(self) -> Layout {
        Layout::from_bits_retain(self.bits() & RULES)
    }

    /// Smushing with no controlled rule selected.
    pub fn is_universal(self) -> bool {
        self.mode() == LayoutMode::Smushing && self.rules().is_empty()
    }

    /// Applies the controlled rules to two touching, visible sub-characters.
    ///
    /// `left` belongs to the earlier glyph on the line, `right` to the later one. Returns the
    /// surviving character or `None` if the pair cannot be smushed.
    pub fn smush_rules(self, left: char, right: char, hardblank: char) -> Option<char> {
        if self.contains(Layout::HARDBLANK) && left == hardblank && right == hardblank {
            return Some(left);
        }
        if left == hardblank || right == hardblank {
            return None;
        }
        if self.contains(Layout::EQUAL_CHARACTER) && left == right {
            return Some(left);
        }
        if self.contains(Layout::UNDERSCORE) {
            if let Some(c) = underscore(left, right).or_else(|| underscore(right, left)) {
                return Some(c);
            }
        }
        if self.contains(Layout::HIERARCHY) {
            if let Some(c) = hierarchy(left, right) {
                return Some(c);
            }
        }
        if self.contains(Layout::OPPOSITE_PAIR) && opposite_pair(left, right) {
            return Some('|');
        }
        if self.contains(Layout::BIG_X) {
            match (left, right) {
                ('/', '\\') => return Some('|'),
                ('\\', '/') => return Some('Y'),
                ('>', '<') => return Some('X'),
                _ => {}
            }
        }
        None
    }
}

/// How adjacent glyphs are brought together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutMode {
    /// Each glyph occupies its full declared width.
    FullWidth,
    /// Glyphs slide together until they touch; no characters merge.
    Kerning,
    /// Glyphs slide one column further when the touching pair can be smushed.
    Smushing,
}

const STRONG: &str = "|/\\[]{}()<>";

fn underscore(underscore: char, other: char) -> Option<char> {
    (underscore == '_' && STRONG.contains(other)).then_some(other)
}

/// Tier in the hierarchy rule, higher wins.
fn tier(c: char) -> Option<u8> {
    match c {
        '|' => Some(1),
        '/' | '\\' => Some(2),
        '[' | ']' => Some(3),
        '{' | '}' => Some(4),
        '(' | ')' => Some(5),
        '<' | '>' => Some(6),
        _ => None,
    }
}

fn hierarchy(left: char, right: char) -> Option<char> {
    let (l, r) = (tier(left)?, tier(right)?);
    match l.cmp(&r) {
        std::cmp::Ordering::Less => Some(right),
        std::cmp::Ordering::Greater => Some(left),
        std::cmp::Ordering::Equal => None,
    }
}

fn opposite_pair(left: char, right: char) -> bool {
    matches!(
        (left, right),
        ('[', ']') | (']', '[') | ('{', '}') | ('}', '{') | ('(', ')') | (')', '(')
    )
}
