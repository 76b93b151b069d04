// Copyright 2026 the Restyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

/// A font weight, on the usual 1–1000 scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FontWeight(u16);

impl FontWeight {
    /// Thin weight (100).
    pub const THIN: Self = Self(100);
    /// Light weight (300).
    pub const LIGHT: Self = Self(300);
    /// Normal (regular) weight (400).
    pub const NORMAL: Self = Self(400);
    /// Medium weight (500).
    pub const MEDIUM: Self = Self(500);
    /// Semibold weight (600).
    pub const SEMIBOLD: Self = Self(600);
    /// Bold weight (700).
    pub const BOLD: Self = Self(700);
    /// Black weight (900).
    pub const BLACK: Self = Self(900);

    /// Creates a weight from a raw value, clamped to 1–1000.
    pub const fn new(value: u16) -> Self {
        let value = if value < 1 {
            1
        } else if value > 1000 {
            1000
        } else {
            value
        };
        Self(value)
    }

    /// Returns the raw weight value.
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// A font style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontStyle {
    /// Upright.
    #[default]
    Normal,
    /// Italic.
    Italic,
}

/// A font family: a concrete name, or a generic family for the display layer
/// to map to a platform font.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FontFamily {
    /// The platform's default sans-serif family.
    #[default]
    SansSerif,
    /// The platform's default serif family.
    Serif,
    /// The platform's default monospace family.
    Monospace,
    /// A named family.
    Named(Arc<str>),
}

impl From<&str> for FontFamily {
    fn from(name: &str) -> Self {
        Self::Named(Arc::from(name))
    }
}

/// Paragraph text alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    /// Leading-edge alignment for the text's resolved direction.
    #[default]
    Natural,
    /// Left alignment.
    Left,
    /// Center alignment.
    Center,
    /// Right alignment.
    Right,
    /// Justified.
    Justified,
}

/// Extra spacing between glyphs.
///
/// The two forms are mutually exclusive on a style: setting one replaces the
/// other.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tracking {
    /// Thousandths of an em, as used by design tools; resolved against the
    /// effective point size.
    Adobe(f32),
    /// An absolute value in points.
    Point(f32),
}

impl Tracking {
    /// Resolves this tracking to a kerning value in points for the given
    /// effective point size.
    pub fn kerning(self, point_size: f32) -> f32 {
        match self {
            Self::Adobe(tracking) => point_size * tracking / 1000.0,
            Self::Point(points) => points,
        }
    }
}
