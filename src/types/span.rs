//! Defines a [`Span`] which is used to represent a region in the template
//! source.

use std::ops::{Index, Range};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub m: usize,
    pub n: usize,
}

impl Span {
    /// Returns the span shrunk by one byte on each side, i.e. the inside of
    /// a `{...}` block.
    pub fn inner(self) -> Self {
        Self {
            m: self.m + 1,
            n: self.n - 1,
        }
    }
}

impl Index<Span> for str {
    type Output = str;

    fn index(&self, span: Span) -> &Self::Output {
        let Span { m, n } = span;
        &self[m..n]
    }
}

impl From<Range<usize>> for Span {
    fn from(r: Range<usize>) -> Self {
        Self {
            m: r.start,
            n: r.end,
        }
    }
}
