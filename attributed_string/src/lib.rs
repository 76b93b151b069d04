// Copyright 2026 the Restyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned text with attribute spans applied to byte ranges.
//!
//! [`AttributedString`] pairs a `String` with an ordered list of
//! `(Range<usize>, A)` spans, where `A` is any attribute type the caller
//! chooses. It is the value type produced by a styling layer and consumed by
//! whatever displays the text; this crate neither defines a style vocabulary
//! nor interprets the attributes it stores.
//!
//! ## Indices
//!
//! All ranges are expressed as **byte indices** into UTF-8 text and are
//! validated on application: bounds, `start <= end`, and UTF-8 character
//! boundaries.
//!
//! ## Overlaps
//!
//! Spans are kept in application order. When spans overlap, [`runs`] reports
//! the last-applied covering span for each segment (last writer wins).
//!
//! [`runs`]: AttributedString::runs
//!
//! ## Example
//!
//! ```
//! use attributed_string::AttributedString;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Emphasis {
//!     None,
//!     Strong,
//! }
//!
//! let mut text = AttributedString::new("Hello world!");
//! text.apply(6..12, Emphasis::Strong)?;
//!
//! let runs: Vec<_> = text.runs(&Emphasis::None).collect();
//! assert_eq!(runs.len(), 2);
//! assert_eq!(runs[1].range, 6..12);
//! assert_eq!(*runs[1].attribute, Emphasis::Strong);
//! assert_eq!(text.as_str(), "Hello world!");
//! # Ok::<(), attributed_string::Error>(())
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

mod error;
mod runs;
mod string;

pub use crate::error::{Error, ErrorKind};
pub use crate::runs::{AttributeRun, Runs};
pub use crate::string::AttributedString;
