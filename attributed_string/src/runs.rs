// Copyright 2026 the Restyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::Range;

use crate::AttributedString;

/// A contiguous run of text with a single effective attribute.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeRun<'a, A> {
    /// The byte range in the underlying text.
    pub range: Range<usize>,
    /// The effective attribute for this range.
    pub attribute: &'a A,
}

/// An iterator over effective attribute runs.
///
/// Produced by [`AttributedString::runs`]. The text is split at every span
/// boundary; each segment reports its last-applied covering span (or the
/// base attribute where no span covers it), and adjacent segments with equal
/// attributes are merged back together.
#[derive(Clone, Debug)]
pub struct Runs<'a, A: Debug> {
    string: &'a AttributedString<A>,
    base: &'a A,
    boundaries: Vec<usize>,
    index: usize,
}

impl<'a, A: Debug + PartialEq> Runs<'a, A> {
    pub(crate) fn new(string: &'a AttributedString<A>, base: &'a A) -> Self {
        let len = string.len();
        let mut boundaries = Vec::with_capacity(2 + string.spans.len() * 2);
        boundaries.push(0);
        if len > 0 {
            boundaries.push(len);
        }
        for (range, _) in &string.spans {
            if !range.is_empty() {
                boundaries.push(range.start);
                boundaries.push(range.end);
            }
        }
        boundaries.sort_unstable();
        boundaries.dedup();
        Self {
            string,
            base,
            boundaries,
            index: 0,
        }
    }

    /// The effective attribute for the segment starting at `start`.
    ///
    /// Boundary construction guarantees a span either covers the whole
    /// segment or none of it, so checking the start index suffices.
    fn attribute_for(&self, start: usize) -> &'a A {
        self.string
            .spans
            .iter()
            .rev()
            .find(|(range, _)| range.start <= start && start < range.end)
            .map(|(_, attr)| attr)
            .unwrap_or(self.base)
    }
}

impl<'a, A: Debug + PartialEq> Iterator for Runs<'a, A> {
    type Item = AttributeRun<'a, A>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index + 1 >= self.boundaries.len() {
            return None;
        }
        let start = self.boundaries[self.index];
        let attribute = self.attribute_for(start);

        // Swallow subsequent segments whose effective attribute is equal.
        let mut end_index = self.index + 1;
        while end_index + 1 < self.boundaries.len()
            && self.attribute_for(self.boundaries[end_index]) == attribute
        {
            end_index += 1;
        }
        let end = self.boundaries[end_index];
        self.index = end_index;

        Some(AttributeRun {
            range: start..end,
            attribute,
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::AttributedString;

    #[derive(Debug, Clone, PartialEq)]
    enum Tone {
        Plain,
        Loud,
        Quiet,
    }

    fn collect(at: &AttributedString<Tone>) -> Vec<(core::ops::Range<usize>, Tone)> {
        at.runs(&Tone::Plain)
            .map(|run| (run.range, run.attribute.clone()))
            .collect()
    }

    #[test]
    fn splits_at_span_boundaries() {
        let mut at = AttributedString::new("Hello world!");
        at.apply(0..5, Tone::Loud).unwrap();
        assert_eq!(
            collect(&at),
            [(0..5, Tone::Loud), (5..12, Tone::Plain)],
        );
    }

    #[test]
    fn last_writer_wins_on_overlap() {
        let mut at = AttributedString::new("abcdef");
        at.apply(0..6, Tone::Loud).unwrap();
        at.apply(2..4, Tone::Quiet).unwrap();
        assert_eq!(
            collect(&at),
            [(0..2, Tone::Loud), (2..4, Tone::Quiet), (4..6, Tone::Loud)],
        );
    }

    #[test]
    fn equal_adjacent_runs_coalesce() {
        let mut at = AttributedString::new("abcdef");
        at.apply(0..3, Tone::Loud).unwrap();
        at.apply(3..6, Tone::Loud).unwrap();
        assert_eq!(collect(&at), [(0..6, Tone::Loud)]);
    }

    #[test]
    fn uncovered_segments_report_base() {
        let mut at = AttributedString::new("abcdef");
        at.apply(2..4, Tone::Quiet).unwrap();
        assert_eq!(
            collect(&at),
            [(0..2, Tone::Plain), (2..4, Tone::Quiet), (4..6, Tone::Plain)],
        );
    }

    #[test]
    fn zero_length_spans_are_ignored() {
        let mut at = AttributedString::new("abc");
        at.apply(1..1, Tone::Loud).unwrap();
        assert_eq!(collect(&at), [(0..3, Tone::Plain)]);
    }

    #[test]
    fn empty_text_has_no_runs() {
        let at: AttributedString<Tone> = AttributedString::new("");
        assert_eq!(at.runs(&Tone::Plain).count(), 0);
    }

    #[test]
    fn whole_cover_is_one_run() {
        let mut at = AttributedString::new("Hi");
        at.apply(0..2, Tone::Loud).unwrap();
        assert_eq!(collect(&at), [(0..2, Tone::Loud)]);
    }
}
