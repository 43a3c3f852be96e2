#![forbid(unsafe_code)]

//! Length-preserving in-place case remapping.
//!
//! A codepoint is rewritten only when its straight codepoint-to-codepoint
//! case mapping encodes to the identical number of UTF-8 bytes; anything
//! else is left untouched rather than reflowing the buffer. Multi-codepoint
//! mappings (such as `ß` to `SS`) are therefore skipped. Callers rely on
//! byte offsets staying stable across the call.

use smallvec::SmallVec;
use std::mem;

use crate::walk::for_each_codepoint;

/// Single-codepoint uppercase mapping, or `None` when the mapping expands.
fn single_upper(c: char) -> Option<char> {
    let mut mapped = c.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(u), None) => Some(u),
        _ => None,
    }
}

/// Single-codepoint lowercase mapping, or `None` when the mapping expands.
fn single_lower(c: char) -> Option<char> {
    let mut mapped = c.to_lowercase();
    match (mapped.next(), mapped.next()) {
        (Some(u), None) => Some(u),
        _ => None,
    }
}

/// Rewrite codepoints whose mapped form has the same UTF-8 byte length.
fn remap_in_place<M>(s: &mut String, map: M)
where
    M: Fn(char) -> Option<char>,
{
    // Collect the qualifying edits first; most strings have few or none.
    let mut edits: SmallVec<[(usize, char); 16]> = SmallVec::new();
    for_each_codepoint(s, |c, offset, len| {
        if let Some(mapped) = map(c)
            && mapped != c
            && mapped.len_utf8() == len
        {
            edits.push((offset, mapped));
        }
        true
    });
    if edits.is_empty() {
        return;
    }

    let mut bytes = mem::take(s).into_bytes();
    let mut tmp = [0u8; 4];
    for (offset, mapped) in edits {
        let enc = mapped.encode_utf8(&mut tmp).as_bytes();
        bytes[offset..offset + enc.len()].copy_from_slice(enc);
    }
    *s = String::from_utf8(bytes).expect("same-length remap preserves UTF-8");
}

/// Uppercase `s` in place, skipping codepoints whose uppercase form has a
/// different byte length.
pub fn upcase_in_place(s: &mut String) {
    remap_in_place(s, single_upper);
}

/// Lowercase `s` in place, skipping codepoints whose lowercase form has a
/// different byte length.
pub fn downcase_in_place(s: &mut String) {
    remap_in_place(s, single_lower);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upcased(s: &str) -> String {
        let mut owned = s.to_owned();
        upcase_in_place(&mut owned);
        owned
    }

    fn downcased(s: &str) -> String {
        let mut owned = s.to_owned();
        downcase_in_place(&mut owned);
        owned
    }

    #[test]
    fn ascii_maps_fully() {
        assert_eq!(upcased("aaaa"), "AAAA");
        assert_eq!(downcased("AAAA"), "aaaa");
    }

    #[test]
    fn two_byte_codepoints_map_in_place() {
        assert_eq!(upcased("\u{E1}\u{E2}"), "\u{C1}\u{C2}");
        assert_eq!(downcased("\u{C1}\u{C2}"), "\u{E1}\u{E2}");
    }

    #[test]
    fn expanding_mappings_are_skipped() {
        // ß uppercases to "SS"; the multi-codepoint mapping is skipped and
        // the original bytes stay put.
        assert_eq!(upcased("thi\u{DF}"), "THI\u{DF}");
    }

    #[test]
    fn length_changing_mappings_are_skipped() {
        // ɐ (U+0250, 2 bytes) uppercases to Ɐ (U+2C6F, 3 bytes).
        assert_eq!(upcased("\u{0250}x"), "\u{0250}X");
    }

    #[test]
    fn empty_and_caseless_strings_are_untouched() {
        assert_eq!(upcased(""), "");
        assert_eq!(upcased("123 #!"), "123 #!");
    }
}
