// Copyright 2026 the Restyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named special Unicode characters used in text layout.
//!
//! These are the invisible or easily-confused code points that show up in
//! styled text: the various widths of space, dashes and hyphens with
//! different breaking behavior, separators, and joiners. [`Special`] gives
//! each one a name; [`human_readable`] makes them visible for debugging and
//! snapshots.

use alloc::string::String;

/// A named special character.
// Keep the variants sorted by code point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Special {
    /// U+0009.
    Tab,
    /// U+000A.
    LineFeed,
    /// U+0020.
    Space,
    /// U+00A0, a space that prevents a line break.
    NoBreakSpace,
    /// U+2002, a space one en wide.
    EnSpace,
    /// U+2003, a space one em wide.
    EmSpace,
    /// U+2007, a space the width of a digit.
    FigureSpace,
    /// U+2009.
    ThinSpace,
    /// U+200A.
    HairSpace,
    /// U+200B, an invisible break opportunity.
    ZeroWidthSpace,
    /// U+2011, a hyphen that prevents a line break.
    NonBreakingHyphen,
    /// U+2012, a dash the width of a digit.
    FigureDash,
    /// U+2013.
    EnDash,
    /// U+2014.
    EmDash,
    /// U+2026.
    HorizontalEllipsis,
    /// U+2028.
    LineSeparator,
    /// U+2029.
    ParagraphSeparator,
    /// U+202F, as used between a value and its unit.
    NarrowNoBreakSpace,
    /// U+2060, an invisible character that prevents a break.
    WordJoiner,
    /// U+2212, the mathematical minus, wider than a hyphen.
    MinusSign,
    /// U+FFFC, the placeholder for an inline attachment.
    ObjectReplacementCharacter,
}

impl Special {
    /// Every special character, sorted by code point.
    pub const ALL: [Self; 21] = [
        Self::Tab,
        Self::LineFeed,
        Self::Space,
        Self::NoBreakSpace,
        Self::EnSpace,
        Self::EmSpace,
        Self::FigureSpace,
        Self::ThinSpace,
        Self::HairSpace,
        Self::ZeroWidthSpace,
        Self::NonBreakingHyphen,
        Self::FigureDash,
        Self::EnDash,
        Self::EmDash,
        Self::HorizontalEllipsis,
        Self::LineSeparator,
        Self::ParagraphSeparator,
        Self::NarrowNoBreakSpace,
        Self::WordJoiner,
        Self::MinusSign,
        Self::ObjectReplacementCharacter,
    ];

    /// Returns the character itself.
    pub const fn as_char(self) -> char {
        match self {
            Self::Tab => '\u{0009}',
            Self::LineFeed => '\u{000A}',
            Self::Space => '\u{0020}',
            Self::NoBreakSpace => '\u{00A0}',
            Self::EnSpace => '\u{2002}',
            Self::EmSpace => '\u{2003}',
            Self::FigureSpace => '\u{2007}',
            Self::ThinSpace => '\u{2009}',
            Self::HairSpace => '\u{200A}',
            Self::ZeroWidthSpace => '\u{200B}',
            Self::NonBreakingHyphen => '\u{2011}',
            Self::FigureDash => '\u{2012}',
            Self::EnDash => '\u{2013}',
            Self::EmDash => '\u{2014}',
            Self::HorizontalEllipsis => '\u{2026}',
            Self::LineSeparator => '\u{2028}',
            Self::ParagraphSeparator => '\u{2029}',
            Self::NarrowNoBreakSpace => '\u{202F}',
            Self::WordJoiner => '\u{2060}',
            Self::MinusSign => '\u{2212}',
            Self::ObjectReplacementCharacter => '\u{FFFC}',
        }
    }

    /// Returns the human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tab => "Tab",
            Self::LineFeed => "Line Feed",
            Self::Space => "Space",
            Self::NoBreakSpace => "No-Break Space",
            Self::EnSpace => "En Space",
            Self::EmSpace => "Em Space",
            Self::FigureSpace => "Figure Space",
            Self::ThinSpace => "Thin Space",
            Self::HairSpace => "Hair Space",
            Self::ZeroWidthSpace => "Zero Width Space",
            Self::NonBreakingHyphen => "Non-Breaking Hyphen",
            Self::FigureDash => "Figure Dash",
            Self::EnDash => "En Dash",
            Self::EmDash => "Em Dash",
            Self::HorizontalEllipsis => "Horizontal Ellipsis",
            Self::LineSeparator => "Line Separator",
            Self::ParagraphSeparator => "Paragraph Separator",
            Self::NarrowNoBreakSpace => "Narrow No-Break Space",
            Self::WordJoiner => "Word Joiner",
            Self::MinusSign => "Minus Sign",
            Self::ObjectReplacementCharacter => "Object Replacement Character",
        }
    }

    /// Looks up the special character for `c`, if it is one.
    pub fn from_char(c: char) -> Option<Self> {
        Self::ALL.iter().copied().find(|special| special.as_char() == c)
    }
}

impl From<Special> for char {
    fn from(special: Special) -> Self {
        special.as_char()
    }
}

/// Rewrites `text` with each special character replaced by its `{Name}`.
///
/// Ordinary spaces are left alone — marking every word gap would drown the
/// characters worth seeing. Intended for debugging output and test
/// snapshots, not display.
///
/// ```
/// use restyle::special::human_readable;
///
/// assert_eq!(human_readable("12\u{2013}15\u{00A0}kg"), "12{En Dash}15{No-Break Space}kg");
/// ```
pub fn human_readable(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match Special::from_char(c) {
            Some(special) if special != Special::Space => {
                out.push('{');
                out.push_str(special.name());
                out.push('}');
            }
            _ => out.push(c),
        }
    }
    out
}
