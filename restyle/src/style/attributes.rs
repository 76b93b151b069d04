// Copyright 2026 the Restyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

use crate::adapt::Adaptation;
use crate::style::{Alignment, FontFamily, FontStyle, FontWeight, Tracking};

/// A computed (resolved) set of text attributes.
///
/// This is the attribute type attached to rendered text. Every property is
/// concrete; the defaults follow the reference body text of the platform
/// this was designed against (17 pt regular, no decorations, colors left to
/// the container).
///
/// The authored [`font_size`](Self::font_size) and the effective
/// [`point_size`](Self::point_size) are carried separately: adaptation
/// recomputes the effective size from the authored one, so adapting twice to
/// different environments gives the same result as adapting once to the
/// last.
#[derive(Clone, Debug, PartialEq)]
pub struct TextAttributes {
    pub(crate) font_family: FontFamily,
    pub(crate) font_size: f32,
    pub(crate) point_size: f32,
    pub(crate) font_weight: FontWeight,
    pub(crate) font_style: FontStyle,
    pub(crate) text_color: Option<Color>,
    pub(crate) background_color: Option<Color>,
    pub(crate) tracking: Option<Tracking>,
    pub(crate) line_height_multiple: f32,
    pub(crate) baseline_offset: f32,
    pub(crate) alignment: Alignment,
    pub(crate) underline: bool,
    pub(crate) strikethrough: bool,
    pub(crate) adaptation: Option<Adaptation>,
}

impl Default for TextAttributes {
    fn default() -> Self {
        Self {
            font_family: FontFamily::default(),
            font_size: 17.0,
            point_size: 17.0,
            font_weight: FontWeight::NORMAL,
            font_style: FontStyle::Normal,
            text_color: None,
            background_color: None,
            tracking: None,
            line_height_multiple: 1.0,
            baseline_offset: 0.0,
            alignment: Alignment::Natural,
            underline: false,
            strikethrough: false,
            adaptation: None,
        }
    }
}

impl TextAttributes {
    /// Returns the font family.
    #[inline]
    pub const fn font_family(&self) -> &FontFamily {
        &self.font_family
    }

    /// Returns the authored font size in points, before any adaptation.
    #[inline]
    pub const fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Returns the effective font size in points, after adaptation.
    ///
    /// Equal to [`font_size`](Self::font_size) until an adaptation pass has
    /// run.
    #[inline]
    pub const fn point_size(&self) -> f32 {
        self.point_size
    }

    /// Returns the font weight.
    #[inline]
    pub const fn font_weight(&self) -> FontWeight {
        self.font_weight
    }

    /// Returns the font style.
    #[inline]
    pub const fn font_style(&self) -> FontStyle {
        self.font_style
    }

    /// Returns the text color, if one is set.
    #[inline]
    pub const fn text_color(&self) -> Option<Color> {
        self.text_color
    }

    /// Returns the background color, if one is set.
    #[inline]
    pub const fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    /// Returns the tracking, if set.
    #[inline]
    pub const fn tracking(&self) -> Option<Tracking> {
        self.tracking
    }

    /// Returns the kerning in points implied by the tracking at the
    /// effective point size, or `0.0` when no tracking is set.
    pub fn kerning(&self) -> f32 {
        self.tracking
            .map(|tracking| tracking.kerning(self.point_size))
            .unwrap_or(0.0)
    }

    /// Returns the line height multiple.
    #[inline]
    pub const fn line_height_multiple(&self) -> f32 {
        self.line_height_multiple
    }

    /// Returns the baseline offset in points.
    #[inline]
    pub const fn baseline_offset(&self) -> f32 {
        self.baseline_offset
    }

    /// Returns the paragraph alignment.
    #[inline]
    pub const fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Returns whether underline is enabled.
    #[inline]
    pub const fn underline(&self) -> bool {
        self.underline
    }

    /// Returns whether strikethrough is enabled.
    #[inline]
    pub const fn strikethrough(&self) -> bool {
        self.strikethrough
    }

    /// Returns the adaptation behavior, if one is set.
    #[inline]
    pub const fn adaptation(&self) -> Option<Adaptation> {
        self.adaptation
    }
}
