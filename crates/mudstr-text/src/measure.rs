#![forbid(unsafe_code)]

//! Counting, offset, and prefix helpers built on the walkers.
//!
//! These give truncation and copy helpers their "first N units" semantics:
//! byte lengths of leading units, unit counts, and the break table of
//! cluster start offsets.

use unicode_segmentation::UnicodeSegmentation;

/// Byte length of the first codepoint of `s` (0 for an empty string).
#[inline]
#[must_use]
pub fn cpbytes(s: &str) -> usize {
    s.chars().next().map_or(0, char::len_utf8)
}

/// Byte length of the first grapheme cluster of `s` (0 for an empty string).
#[inline]
#[must_use]
pub fn gcbytes(s: &str) -> usize {
    s.graphemes(true).next().map_or(0, str::len)
}

/// Number of codepoints in `s`.
#[must_use]
pub fn strlen_cp(s: &str) -> usize {
    s.chars().count()
}

/// Number of extended grapheme clusters in `s`.
#[must_use]
pub fn strlen_gc(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Byte length of the first `n` codepoints of `s`, saturating at the end.
#[must_use]
pub fn strnlen_cp(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(offset, _)| offset)
}

/// Byte length of the first `n` grapheme clusters of `s`, saturating at the
/// end.
#[must_use]
pub fn strnlen_gc(s: &str, n: usize) -> usize {
    s.grapheme_indices(true)
        .nth(n)
        .map_or(s.len(), |(offset, _)| offset)
}

/// The prefix of `s` holding its first `n` codepoints.
#[must_use]
pub fn take_codepoints(s: &str, n: usize) -> &str {
    &s[..strnlen_cp(s, n)]
}

/// The prefix of `s` holding its first `n` grapheme clusters.
#[must_use]
pub fn take_graphemes(s: &str, n: usize) -> &str {
    &s[..strnlen_gc(s, n)]
}

/// Ordered byte offsets where each grapheme cluster starts, with the total
/// byte length appended as the final element.
///
/// `grapheme_breaks("aaa")` is `[0, 1, 2, 3]`; an empty string yields `[0]`.
#[must_use]
pub fn grapheme_breaks(s: &str) -> Vec<usize> {
    let mut breaks: Vec<usize> = s.grapheme_indices(true).map(|(offset, _)| offset).collect();
    breaks.push(s.len());
    breaks
}
