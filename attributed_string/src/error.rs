// Copyright 2026 the Restyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Error type for span application.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the caller-provided range and
/// the text length at the time of failure, so messages can report exactly
/// what was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    start: usize,
    end: usize,
    len: usize,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`Error::len` reports source text length context; an `is_empty` method would be misleading."
)]
impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The start byte index of the range provided by the caller.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The end byte index of the range provided by the caller.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The length in bytes of the underlying text at the time of the error.
    pub fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn new(kind: ErrorKind, start: usize, end: usize, len: usize) -> Self {
        Self {
            kind,
            start,
            end,
            len,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::InvalidRange => {
                write!(f, "invalid range {}..{}: start > end", self.start, self.end)
            }
            ErrorKind::InvalidBounds => write!(
                f,
                "range {}..{} out of bounds for len {}",
                self.start, self.end, self.len
            ),
            ErrorKind::NotOnCharBoundary => write!(
                f,
                "range {}..{} not aligned to a UTF-8 character boundary",
                self.start, self.end
            ),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The provided range had `start > end`.
    InvalidRange,

    /// Provided range indices were out of bounds relative to the text length.
    InvalidBounds,

    /// Either `start` or `end` was not aligned to a UTF-8 character boundary.
    NotOnCharBoundary,
}
