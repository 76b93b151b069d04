// Copyright 2026 the Restyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The style vocabulary.
//!
//! [`StringStyle`] is the declarative form: every property is optional, and
//! an unset property inherits the base attribute value at resolution time.
//! [`TextAttributes`] is the computed form: every property is concrete and
//! the value is ready to attach to rendered text.
//!
//! [`StringStyle::resolve`] connects the two. Resolution is intentionally
//! independent of any display environment; environment adaptation is a
//! separate pass in [`adapt`](crate::adapt).

mod attributes;
mod string_style;
mod values;

pub use attributes::TextAttributes;
pub use string_style::StringStyle;
pub use values::{Alignment, FontFamily, FontStyle, FontWeight, Tracking};

/// Color values attached to text.
///
/// Re-exported from [`peniko`], which the display layer typically already
/// speaks.
pub use peniko::Color;
