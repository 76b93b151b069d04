// Copyright 2026 the Restyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

use crate::adapt::Adaptation;
use crate::style::{Alignment, FontFamily, FontStyle, FontWeight, TextAttributes, Tracking};

/// A declarative text style.
///
/// Every property is optional; an unset property inherits the base attribute
/// value when the style is [resolved](Self::resolve). Styles are plain
/// values: cheap to clone, held by any number of containers, and reusable
/// across texts.
///
/// Built with chainable consuming setters:
///
/// ```
/// use restyle::style::{FontWeight, StringStyle};
///
/// let headline = StringStyle::new()
///     .font_size(28.0)
///     .font_weight(FontWeight::BOLD)
///     .tracking_adobe(50.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StringStyle {
    font_family: Option<FontFamily>,
    font_size: Option<f32>,
    font_weight: Option<FontWeight>,
    font_style: Option<FontStyle>,
    text_color: Option<Color>,
    background_color: Option<Color>,
    tracking: Option<Tracking>,
    line_height_multiple: Option<f32>,
    baseline_offset: Option<f32>,
    alignment: Option<Alignment>,
    underline: Option<bool>,
    strikethrough: Option<bool>,
    adaptation: Option<Adaptation>,
}

impl StringStyle {
    /// Creates a style with no properties set.
    ///
    /// Resolving an empty style yields the base attributes unchanged (the
    /// identity style).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font family.
    pub fn font_family(mut self, family: impl Into<FontFamily>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Sets the authored font size in points.
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Sets the font weight.
    pub fn font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    /// Sets the font style.
    pub fn font_style(mut self, style: FontStyle) -> Self {
        self.font_style = Some(style);
        self
    }

    /// Sets the text color.
    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    /// Sets the background color.
    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Sets tracking in thousandths of an em.
    ///
    /// Replaces any point tracking set earlier; the two forms are mutually
    /// exclusive.
    pub fn tracking_adobe(mut self, tracking: f32) -> Self {
        self.tracking = Some(Tracking::Adobe(tracking));
        self
    }

    /// Sets tracking as an absolute value in points.
    ///
    /// Replaces any Adobe tracking set earlier; the two forms are mutually
    /// exclusive.
    pub fn tracking_points(mut self, points: f32) -> Self {
        self.tracking = Some(Tracking::Point(points));
        self
    }

    /// Sets the line height multiple.
    pub fn line_height_multiple(mut self, multiple: f32) -> Self {
        self.line_height_multiple = Some(multiple);
        self
    }

    /// Sets the baseline offset in points.
    pub fn baseline_offset(mut self, offset: f32) -> Self {
        self.baseline_offset = Some(offset);
        self
    }

    /// Sets the paragraph alignment.
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Sets underline.
    pub fn underline(mut self, underline: bool) -> Self {
        self.underline = Some(underline);
        self
    }

    /// Sets strikethrough.
    pub fn strikethrough(mut self, strikethrough: bool) -> Self {
        self.strikethrough = Some(strikethrough);
        self
    }

    /// Sets the adaptation behavior used when rendered text is adapted to a
    /// display environment.
    pub fn adaptation(mut self, adaptation: Adaptation) -> Self {
        self.adaptation = Some(adaptation);
        self
    }

    /// Resolves this style against `base`, producing computed attributes.
    ///
    /// Set properties win; unset properties inherit from `base`. The
    /// effective point size is reset to the resolved authored size — any
    /// adaptation applies in a later pass.
    pub fn resolve(&self, base: &TextAttributes) -> TextAttributes {
        let mut out = base.clone();
        if let Some(family) = &self.font_family {
            out.font_family = family.clone();
        }
        if let Some(size) = self.font_size {
            out.font_size = size;
        }
        // Resolution discards any earlier adaptation of the base.
        out.point_size = out.font_size;
        if let Some(weight) = self.font_weight {
            out.font_weight = weight;
        }
        if let Some(style) = self.font_style {
            out.font_style = style;
        }
        if let Some(color) = self.text_color {
            out.text_color = Some(color);
        }
        if let Some(color) = self.background_color {
            out.background_color = Some(color);
        }
        if let Some(tracking) = self.tracking {
            out.tracking = Some(tracking);
        }
        if let Some(multiple) = self.line_height_multiple {
            out.line_height_multiple = multiple;
        }
        if let Some(offset) = self.baseline_offset {
            out.baseline_offset = offset;
        }
        if let Some(alignment) = self.alignment {
            out.alignment = alignment;
        }
        if let Some(underline) = self.underline {
            out.underline = underline;
        }
        if let Some(strikethrough) = self.strikethrough {
            out.strikethrough = strikethrough;
        }
        if let Some(adaptation) = self.adaptation {
            out.adaptation = Some(adaptation);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::StringStyle;
    use crate::style::{FontStyle, FontWeight, TextAttributes, Tracking};

    #[test]
    fn empty_style_is_identity() {
        let base = TextAttributes::default();
        assert_eq!(StringStyle::new().resolve(&base), base);
    }

    #[test]
    fn set_properties_override_base() {
        let base = TextAttributes::default();
        let attrs = StringStyle::new()
            .font_size(24.0)
            .font_weight(FontWeight::BOLD)
            .resolve(&base);
        assert_eq!(attrs.font_size(), 24.0);
        assert_eq!(attrs.point_size(), 24.0);
        assert_eq!(attrs.font_weight(), FontWeight::BOLD);
        // Unset properties inherit.
        assert_eq!(attrs.font_style(), FontStyle::Normal);
    }

    #[test]
    fn tracking_forms_are_exclusive() {
        let style = StringStyle::new().tracking_adobe(80.0).tracking_points(1.0);
        let attrs = style.resolve(&TextAttributes::default());
        assert_eq!(attrs.tracking(), Some(Tracking::Point(1.0)));

        let style = StringStyle::new().tracking_points(1.0).tracking_adobe(80.0);
        let attrs = style.resolve(&TextAttributes::default());
        assert_eq!(attrs.tracking(), Some(Tracking::Adobe(80.0)));
    }

    #[test]
    fn resolve_layers_over_resolved_base() {
        let base = StringStyle::new()
            .font_size(20.0)
            .underline(true)
            .resolve(&TextAttributes::default());
        let attrs = StringStyle::new().font_size(12.0).resolve(&base);
        assert_eq!(attrs.font_size(), 12.0);
        assert!(attrs.underline());
    }
}
