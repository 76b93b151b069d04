// Copyright 2026 the Restyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt::Debug;
use core::ops::Range;

use smallvec::SmallVec;

use crate::runs::Runs;
use crate::{Error, ErrorKind};

/// Most strings carry one style span for the whole text; a handful more
/// covers concatenation without spilling to the heap.
pub(crate) const INLINE_SPANS: usize = 4;

/// A block of text with attributes applied to byte ranges within it.
///
/// See the [crate docs](crate) for the span model and index conventions.
#[derive(Debug, Clone)]
pub struct AttributedString<A: Debug> {
    pub(crate) text: String,
    pub(crate) spans: SmallVec<[(Range<usize>, A); INLINE_SPANS]>,
}

impl<A: Debug> AttributedString<A> {
    /// Creates an `AttributedString` with no attributes applied.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            spans: SmallVec::new(),
        }
    }

    /// Returns the underlying text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the length of the underlying text, in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the underlying text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Applies `attribute` to the byte `range` within the text.
    ///
    /// The range is validated (bounds, `start <= end`, UTF-8 character
    /// boundaries) before being recorded. Spans are kept in application
    /// order; overlapping spans are resolved last-writer-wins by [`runs`].
    ///
    /// [`runs`]: Self::runs
    pub fn apply(&mut self, range: Range<usize>, attribute: A) -> Result<(), Error> {
        let len = self.text.len();
        if range.start > range.end {
            return Err(Error::new(ErrorKind::InvalidRange, range.start, range.end, len));
        }
        if range.end > len {
            return Err(Error::new(ErrorKind::InvalidBounds, range.start, range.end, len));
        }
        if !self.text.is_char_boundary(range.start) || !self.text.is_char_boundary(range.end) {
            return Err(Error::new(
                ErrorKind::NotOnCharBoundary,
                range.start,
                range.end,
                len,
            ));
        }
        self.spans.push((range, attribute));
        Ok(())
    }

    /// Iterates over all spans and the ranges they apply to, in application
    /// order.
    pub fn spans(&self) -> impl ExactSizeIterator<Item = (&Range<usize>, &A)> {
        self.spans.iter().map(|(range, attr)| (range, attr))
    }

    /// Iterates over the attributes that apply at the given byte `index`, in
    /// application order.
    pub fn attributes_at(&self, index: usize) -> impl Iterator<Item = &A> {
        self.spans.iter().filter_map(move |(range, attr)| {
            if range.contains(&index) {
                Some(attr)
            } else {
                None
            }
        })
    }

    /// Returns the number of spans applied to the text.
    #[inline]
    pub fn spans_len(&self) -> usize {
        self.spans.len()
    }

    /// Removes all applied spans, retaining allocated storage.
    pub fn clear_spans(&mut self) {
        self.spans.clear();
    }

    /// Replaces the underlying text and clears all spans.
    ///
    /// Span storage is retained so the same value can be reused across
    /// rebuilds.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.spans.clear();
    }

    /// Builds a new `AttributedString` with every span attribute transformed
    /// by `f`.
    ///
    /// Span ranges and the text itself are unchanged. This is the hook used
    /// by styling layers to re-derive attributes, for example when a display
    /// environment changes.
    pub fn map_attributes<B: Debug>(&self, mut f: impl FnMut(&A) -> B) -> AttributedString<B> {
        AttributedString {
            text: self.text.clone(),
            spans: self
                .spans
                .iter()
                .map(|(range, attr)| (range.clone(), f(attr)))
                .collect(),
        }
    }

    /// Iterates over contiguous runs of text with a single effective
    /// attribute each.
    ///
    /// Segments not covered by any span report `base`. Overlapping spans
    /// resolve last-writer-wins. Adjacent runs with equal attributes are
    /// coalesced.
    pub fn runs<'a>(&'a self, base: &'a A) -> Runs<'a, A>
    where
        A: PartialEq,
    {
        Runs::new(self, base)
    }
}

impl<A: Debug + Clone> AttributedString<A> {
    /// Appends `other`, optionally joined by `separator`.
    ///
    /// The separator takes on the attribute of the span that ends at this
    /// string's old end, if there is one; `other`'s spans are shifted to
    /// their new offsets.
    pub fn append(&mut self, other: &Self, separator: Option<&str>) {
        let old_len = self.text.len();
        if let Some(sep) = separator {
            if !sep.is_empty() {
                self.text.push_str(sep);
                let new_len = self.text.len();
                // Last writer wins, so only the most recent trailing span
                // needs to stretch over the separator.
                if let Some((range, _)) = self
                    .spans
                    .iter_mut()
                    .rev()
                    .find(|(range, _)| range.end == old_len && !range.is_empty())
                {
                    range.end = new_len;
                }
            }
        }
        let offset = self.text.len();
        self.text.push_str(&other.text);
        for (range, attr) in &other.spans {
            self.spans
                .push((range.start + offset..range.end + offset, attr.clone()));
        }
    }
}

impl<A: Debug> AsRef<str> for AttributedString<A> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::vec::Vec;

    use crate::{AttributedString, ErrorKind};

    #[derive(Debug, Clone, PartialEq)]
    enum TestAttribute {
        Plain,
        Strong,
        Dim,
    }

    #[test]
    fn attributes_at() {
        let mut at = AttributedString::new("Hello!");
        at.apply(1..3, TestAttribute::Strong).unwrap();
        at.apply(2..5, TestAttribute::Dim).unwrap();

        assert!(at.attributes_at(0).next().is_none());
        let at_two: Vec<_> = at.attributes_at(2).collect();
        assert_eq!(at_two, [&TestAttribute::Strong, &TestAttribute::Dim]);
    }

    #[expect(
        clippy::reversed_empty_ranges,
        reason = "We want an invalid range for testing."
    )]
    #[test]
    fn apply_rejects_bad_ranges() {
        let mut at = AttributedString::new("Hello!");

        assert!(at.apply(0..6, TestAttribute::Plain).is_ok());

        let err = at.apply(4..3, TestAttribute::Plain).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRange);
        assert!(format!("{err}").contains("4..3"));

        let err = at.apply(0..7, TestAttribute::Plain).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBounds);
        assert_eq!(err.len(), 6);
        assert!(format!("{err}").contains("len 6"));

        // Only the valid application above was recorded.
        assert_eq!(at.spans_len(), 1);
    }

    #[test]
    fn apply_rejects_split_codepoints() {
        // "é" is 2 bytes in UTF-8; index 1 is not a boundary.
        let mut at = AttributedString::new("éclair");

        let err = at.apply(1..2, TestAttribute::Plain).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotOnCharBoundary);
        let err = at.apply(0..1, TestAttribute::Plain).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotOnCharBoundary);

        assert!(at.apply(0..2, TestAttribute::Plain).is_ok());
    }

    #[test]
    fn set_text_clears_spans() {
        let mut at = AttributedString::new("Hello");
        at.apply(0..5, TestAttribute::Strong).unwrap();
        at.set_text("Goodbye");
        assert_eq!(at.as_str(), "Goodbye");
        assert_eq!(at.spans_len(), 0);
    }

    #[test]
    fn map_attributes_preserves_ranges() {
        let mut at = AttributedString::new("Hello");
        at.apply(0..5, TestAttribute::Strong).unwrap();
        let mapped = at.map_attributes(|_| 7_u8);
        assert_eq!(mapped.as_str(), "Hello");
        let spans: Vec<_> = mapped.spans().collect();
        assert_eq!(spans, [(&(0..5), &7_u8)]);
    }

    #[test]
    fn append_shifts_spans() {
        let mut left = AttributedString::new("left");
        left.apply(0..4, TestAttribute::Strong).unwrap();
        let mut right = AttributedString::new("right");
        right.apply(0..5, TestAttribute::Dim).unwrap();

        left.append(&right, None);
        assert_eq!(left.as_str(), "leftright");
        let spans: Vec<_> = left.spans().collect();
        assert_eq!(spans[0], (&(0..4), &TestAttribute::Strong));
        assert_eq!(spans[1], (&(4..9), &TestAttribute::Dim));
    }

    #[test]
    fn append_separator_takes_trailing_attribute() {
        let mut left = AttributedString::new("left");
        left.apply(0..4, TestAttribute::Strong).unwrap();
        let right = AttributedString::new("right");

        left.append(&right, Some(" | "));
        assert_eq!(left.as_str(), "left | right");
        // The trailing span stretched over the separator but not the
        // appended text.
        assert_eq!(left.spans().next().unwrap().0, &(0..7));
    }

    #[test]
    fn append_separator_without_trailing_span() {
        let mut left = AttributedString::new("left");
        let mut right = AttributedString::new("right");
        right.apply(0..5, TestAttribute::Dim).unwrap();

        left.append(&right, Some("-"));
        assert_eq!(left.as_str(), "left-right");
        let spans: Vec<_> = left.spans().collect();
        assert_eq!(spans, [(&(5..10), &TestAttribute::Dim)]);
    }
}
