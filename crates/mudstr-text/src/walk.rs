#![forbid(unsafe_code)]

//! Forward-only visitors over codepoints and grapheme clusters.
//!
//! Each call walks the string from the start; the visitor receives the unit,
//! its byte offset, and its byte length, and returns `false` to stop early.
//! The walker's return value says whether the whole string was covered.

use unicode_segmentation::UnicodeSegmentation;

/// Visit each codepoint of `s` as `(codepoint, byte_offset, byte_len)`.
///
/// Stops and returns `false` as soon as the visitor does; returns `true`
/// after the final codepoint otherwise.
pub fn for_each_codepoint<F>(s: &str, mut visitor: F) -> bool
where
    F: FnMut(char, usize, usize) -> bool,
{
    for (offset, c) in s.char_indices() {
        if !visitor(c, offset, c.len_utf8()) {
            return false;
        }
    }
    true
}

/// Visit each extended grapheme cluster of `s` as
/// `(cluster, byte_offset, byte_len)`.
///
/// Clusters are borrowed subslices of `s`; same early-exit contract as
/// [`for_each_codepoint`].
pub fn for_each_grapheme<F>(s: &str, mut visitor: F) -> bool
where
    F: FnMut(&str, usize, usize) -> bool,
{
    for (offset, cluster) in s.grapheme_indices(true) {
        if !visitor(cluster, offset, cluster.len()) {
            return false;
        }
    }
    true
}
