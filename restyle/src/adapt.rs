// Copyright 2026 the Restyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Environment adaptation for computed attributes.
//!
//! A [`RenderEnvironment`] is a transient snapshot of the display
//! configuration — it is passed at render or adaptation time and never
//! stored by this crate. [`Adaptation`] describes how an authored font size
//! responds to the environment's [`SizeCategory`].
//!
//! Adapted sizes are always computed from the *authored* size, so for any
//! attributes `a`: `a.adapted_to(e1).adapted_to(e2) == a.adapted_to(e2)`.

use attributed_string::AttributedString;

use crate::style::TextAttributes;

/// The user's preferred content size category.
///
/// [`Large`](Self::Large) is the reference category: adaptation deltas are
/// expressed relative to it. The five accessibility categories continue the
/// scale past [`ExtraExtraExtraLarge`](Self::ExtraExtraExtraLarge).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum SizeCategory {
    /// Extra small.
    ExtraSmall,
    /// Small.
    Small,
    /// Medium.
    Medium,
    /// Large, the reference default.
    #[default]
    Large,
    /// Extra large.
    ExtraLarge,
    /// Extra extra large.
    ExtraExtraLarge,
    /// Extra extra extra large.
    ExtraExtraExtraLarge,
    /// Accessibility medium.
    AccessibilityMedium,
    /// Accessibility large.
    AccessibilityLarge,
    /// Accessibility extra large.
    AccessibilityExtraLarge,
    /// Accessibility extra extra large.
    AccessibilityExtraExtraLarge,
    /// Accessibility extra extra extra large.
    AccessibilityExtraExtraExtraLarge,
}

impl SizeCategory {
    /// Returns `true` for the five accessibility categories.
    pub const fn is_accessibility(self) -> bool {
        matches!(
            self,
            Self::AccessibilityMedium
                | Self::AccessibilityLarge
                | Self::AccessibilityExtraLarge
                | Self::AccessibilityExtraExtraLarge
                | Self::AccessibilityExtraExtraExtraLarge
        )
    }

    /// Point delta relative to [`Large`](Self::Large) across the standard
    /// categories; accessibility categories clamp to the largest standard
    /// delta.
    const fn control_delta(self) -> f32 {
        match self {
            Self::ExtraSmall => -3.0,
            Self::Small => -2.0,
            Self::Medium => -1.0,
            Self::Large => 0.0,
            Self::ExtraLarge => 2.0,
            Self::ExtraExtraLarge => 4.0,
            Self::ExtraExtraExtraLarge
            | Self::AccessibilityMedium
            | Self::AccessibilityLarge
            | Self::AccessibilityExtraLarge
            | Self::AccessibilityExtraExtraLarge
            | Self::AccessibilityExtraExtraExtraLarge => 6.0,
        }
    }

    /// Point delta relative to [`Large`](Self::Large), continuing to grow
    /// through the accessibility categories (the platform body-text curve:
    /// 17 pt at Large up to 53 pt at the largest accessibility category).
    const fn body_delta(self) -> f32 {
        match self {
            Self::AccessibilityMedium => 11.0,
            Self::AccessibilityLarge => 16.0,
            Self::AccessibilityExtraLarge => 23.0,
            Self::AccessibilityExtraExtraLarge => 30.0,
            Self::AccessibilityExtraExtraExtraLarge => 36.0,
            _ => self.control_delta(),
        }
    }
}

/// How an authored font size responds to the content size category.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Adaptation {
    /// Scale like control text: follow the standard categories, stop growing
    /// in the accessibility range.
    Control,
    /// Scale like body text: keep growing through the accessibility range.
    Body,
    /// Pin the effective size regardless of category.
    FontSize(f32),
}

impl Adaptation {
    /// Computes the effective point size for `base` under `category`.
    ///
    /// A pure function of the authored base size; sizes never drop below
    /// 1 pt.
    pub fn adapted_size(self, base: f32, category: SizeCategory) -> f32 {
        let size = match self {
            Self::Control => base + category.control_delta(),
            Self::Body => base + category.body_delta(),
            Self::FontSize(size) => size,
        };
        size.max(1.0)
    }
}

/// A transient snapshot of the display configuration, passed at render or
/// adaptation time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderEnvironment {
    /// The user's preferred content size category.
    pub size_category: SizeCategory,
}

impl RenderEnvironment {
    /// Creates an environment for the given size category.
    pub const fn new(size_category: SizeCategory) -> Self {
        Self { size_category }
    }
}

/// Values that can be re-derived for a display environment.
///
/// Adaptation is composable with, and separate from, style resolution:
/// adapting again for a different environment never needs the original
/// style.
pub trait Adaptable {
    /// Returns this value adapted to `environment`.
    #[must_use]
    fn adapted_to(&self, environment: &RenderEnvironment) -> Self;
}

impl Adaptable for TextAttributes {
    fn adapted_to(&self, environment: &RenderEnvironment) -> Self {
        let mut out = self.clone();
        out.point_size = match self.adaptation {
            Some(adaptation) => adaptation.adapted_size(self.font_size, environment.size_category),
            None => self.font_size,
        };
        out
    }
}

impl Adaptable for AttributedString<TextAttributes> {
    fn adapted_to(&self, environment: &RenderEnvironment) -> Self {
        self.map_attributes(|attrs| attrs.adapted_to(environment))
    }
}

#[cfg(test)]
mod tests {
    use super::{Adaptable, Adaptation, RenderEnvironment, SizeCategory};
    use crate::style::{StringStyle, TextAttributes};

    #[test]
    fn control_clamps_in_accessibility_range() {
        let adaptation = Adaptation::Control;
        assert_eq!(adaptation.adapted_size(17.0, SizeCategory::ExtraSmall), 14.0);
        assert_eq!(adaptation.adapted_size(17.0, SizeCategory::Large), 17.0);
        assert_eq!(
            adaptation.adapted_size(17.0, SizeCategory::ExtraExtraExtraLarge),
            23.0
        );
        assert_eq!(
            adaptation.adapted_size(17.0, SizeCategory::AccessibilityExtraExtraExtraLarge),
            23.0
        );
    }

    #[test]
    fn body_keeps_growing() {
        let adaptation = Adaptation::Body;
        assert_eq!(
            adaptation.adapted_size(17.0, SizeCategory::AccessibilityMedium),
            28.0
        );
        assert_eq!(
            adaptation.adapted_size(17.0, SizeCategory::AccessibilityExtraExtraExtraLarge),
            53.0
        );
    }

    #[test]
    fn pinned_size_ignores_category() {
        let adaptation = Adaptation::FontSize(15.0);
        assert_eq!(adaptation.adapted_size(17.0, SizeCategory::ExtraSmall), 15.0);
        assert_eq!(
            adaptation.adapted_size(17.0, SizeCategory::AccessibilityLarge),
            15.0
        );
    }

    #[test]
    fn sizes_never_drop_below_one_point() {
        assert_eq!(
            Adaptation::Control.adapted_size(2.0, SizeCategory::ExtraSmall),
            1.0
        );
    }

    #[test]
    fn adaptation_is_idempotent_per_environment() {
        let attrs = StringStyle::new()
            .font_size(16.0)
            .adaptation(Adaptation::Body)
            .resolve(&TextAttributes::default());
        let e1 = RenderEnvironment::new(SizeCategory::ExtraSmall);
        let e2 = RenderEnvironment::new(SizeCategory::AccessibilityMedium);
        assert_eq!(attrs.adapted_to(&e1).adapted_to(&e2), attrs.adapted_to(&e2));
        assert_eq!(attrs.adapted_to(&e2).adapted_to(&e2), attrs.adapted_to(&e2));
    }

    #[test]
    fn unadapted_attributes_keep_their_size() {
        let attrs = TextAttributes::default();
        let env = RenderEnvironment::new(SizeCategory::AccessibilityExtraLarge);
        assert_eq!(attrs.adapted_to(&env).point_size(), attrs.font_size());
    }
}
