//! Exact substring search over sequence bytes.
//!
//! Matching is byte-for-byte and case-sensitive, and overlapping occurrences
//! are counted: each hit restarts the scan one byte past its own start. The
//! search itself is [`memchr::memmem`], so long haystacks get the SIMD
//! prefilter rather than a naive scan.
//!
//! An empty pattern is rejected with [`SequenceError::EmptyPattern`] rather
//! than being given a degenerate match count.

use memchr::memmem;

use crate::error::{Result, SequenceError};
use crate::sequence::Sequence;

/// All 0-based offsets where `pattern` starts in `haystack`, ascending,
/// overlaps included. No match is an empty vector, not an error.
pub fn find_all(haystack: &[u8], pattern: &[u8]) -> Result<Vec<usize>> {
    if pattern.is_empty() {
        return Err(SequenceError::EmptyPattern.into());
    }
    let finder = memmem::Finder::new(pattern);
    let mut hits = Vec::new();
    let mut offset = 0;
    while let Some(pos) = finder.find(&haystack[offset..]) {
        hits.push(offset + pos);
        offset += pos + 1;
    }
    Ok(hits)
}

/// Number of starting positions where `pattern` occurs in `haystack`,
/// overlaps included.
pub fn count(haystack: &[u8], pattern: &[u8]) -> Result<usize> {
    if pattern.is_empty() {
        return Err(SequenceError::EmptyPattern.into());
    }
    let finder = memmem::Finder::new(pattern);
    let mut total = 0;
    let mut offset = 0;
    while let Some(pos) = finder.find(&haystack[offset..]) {
        total += 1;
        offset += pos + 1;
    }
    Ok(total)
}

impl Sequence {
    /// See [`find_all`]
    pub fn find_all(&self, pattern: impl AsRef<[u8]>) -> Result<Vec<usize>> {
        find_all(&self.as_bytes(), pattern.as_ref())
    }

    /// See [`count`]
    pub fn count(&self, pattern: impl AsRef<[u8]>) -> Result<usize> {
        count(&self.as_bytes(), pattern.as_ref())
    }
}
