// Copyright 2026 the Restyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative, adaptive text styling for UI containers.
//!
//! - [`style`] defines the style vocabulary: declarative [`StringStyle`]
//!   values and the computed [`TextAttributes`] they resolve to.
//! - [`adapt`] adapts computed attributes to a display environment
//!   (content-size categories for accessibility text sizes).
//! - [`render`] turns plain text into an
//!   [`AttributedString`](attributed_string::AttributedString) using an
//!   optional style and an optional environment.
//! - [`registry`] associates styles with container instances by identity,
//!   without the container types carrying a style field.
//! - [`container`] wires the render operation to container text properties
//!   via capability traits.
//! - [`special`] names the special Unicode characters used in text layout.
//!
//! ## Render model
//!
//! Rendering is a pure, total function: absent text produces absent output,
//! an absent style falls back to default attributes, and an absent
//! environment skips the adaptation pass. Adaptation is computed from the
//! *authored* font size every time, so re-adapting to a new environment is
//! equivalent to having rendered with that environment in the first place.
//!
//! ## Threading
//!
//! [`StyleRegistry`] is plain shared mutable state for a single UI thread.
//! Nothing here locks; own one registry per thread that owns containers.
//!
//! ## Example
//!
//! ```
//! use restyle::adapt::{RenderEnvironment, SizeCategory};
//! use restyle::render::styled;
//! use restyle::style::{FontWeight, StringStyle};
//!
//! let style = StringStyle::new().font_size(16.0).font_weight(FontWeight::BOLD);
//! let env = RenderEnvironment::new(SizeCategory::Large);
//!
//! let text = styled(Some("Hello"), Some(&style), Some(&env)).unwrap();
//! assert_eq!(text.as_str(), "Hello");
//! assert!(styled(None, Some(&style), Some(&env)).is_none());
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

pub mod adapt;
pub mod container;
pub mod registry;
pub mod render;
pub mod special;
pub mod style;


pub use adapt::{Adaptable, Adaptation, RenderEnvironment, SizeCategory};
pub use container::{refresh_styled_text, ControlState, StateStyledContainer, StyledTextContainer};
pub use registry::{ContainerId, StyleRegistry, TextContainer};
pub use render::styled;
pub use special::Special;
pub use style::{StringStyle, TextAttributes};

// Re-exported so downstream crates can name the produced value type without
// depending on `attributed_string` directly.
pub use attributed_string::AttributedString;
