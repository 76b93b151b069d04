// Copyright 2026 the Restyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The render operation: plain text in, attributed text out.

use attributed_string::AttributedString;

use crate::adapt::{Adaptable, RenderEnvironment};
use crate::style::{StringStyle, TextAttributes};

/// Renders `text` into attributed text.
///
/// - `None` text yields `None`; absence propagates, content is never
///   fabricated.
/// - An absent `style` falls back to the identity style, so the output is
///   still well-formed attributed text with default attributes.
/// - When `environment` is present the result is additionally
///   [adapted](Adaptable::adapted_to) to it, as a second, independent pass.
///
/// The produced value carries one span covering the whole text. Its plain
/// text always round-trips: `styled(Some(t), s, e).unwrap().as_str() == t`.
pub fn styled(
    text: Option<&str>,
    style: Option<&StringStyle>,
    environment: Option<&RenderEnvironment>,
) -> Option<AttributedString<TextAttributes>> {
    let text = text?;
    let attributes = match style {
        Some(style) => style.resolve(&TextAttributes::default()),
        None => TextAttributes::default(),
    };
    let mut out = AttributedString::new(text);
    out.apply(0..text.len(), attributes)
        .expect("whole-text range is always valid");
    match environment {
        Some(environment) => Some(out.adapted_to(environment)),
        None => Some(out),
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::styled;
    use crate::adapt::{Adaptation, RenderEnvironment, SizeCategory};
    use crate::style::{StringStyle, TextAttributes};

    #[test]
    fn absent_text_yields_absent_output() {
        let style = StringStyle::new().font_size(30.0);
        let env = RenderEnvironment::default();
        assert!(styled(None, None, None).is_none());
        assert!(styled(None, Some(&style), None).is_none());
        assert!(styled(None, Some(&style), Some(&env)).is_none());
    }

    #[test]
    fn absent_style_renders_defaults() {
        let out = styled(Some("hello"), None, None).unwrap();
        assert_eq!(out.as_str(), "hello");
        let default_attrs = TextAttributes::default();
        let runs: Vec<_> = out.runs(&default_attrs).collect();
        assert_eq!(runs.len(), 1);
        assert_eq!(*runs[0].attribute, TextAttributes::default());
    }

    #[test]
    fn environment_applies_as_second_pass() {
        let style = StringStyle::new().font_size(16.0).adaptation(Adaptation::Control);
        let env = RenderEnvironment::new(SizeCategory::ExtraSmall);

        let out = styled(Some("hi"), Some(&style), Some(&env)).unwrap();
        let (_, attrs) = out.spans().next().unwrap();
        assert_eq!(attrs.font_size(), 16.0);
        assert_eq!(attrs.point_size(), 13.0);
    }

    #[test]
    fn empty_text_is_still_some() {
        let out = styled(Some(""), None, None).unwrap();
        assert!(out.is_empty());
        assert_eq!(out.as_str(), "");
    }
}
