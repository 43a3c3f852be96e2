#![forbid(unsafe_code)]

//! UTF-8 to Latin-1 conversion and UTF-8 validation.
//!
//! The conversion is the legacy output path: application strings go back to
//! single-byte Latin-1 clients, with any codepoint above U+00FF replaced by
//! `?`. The substitution is by design and is never reported to the caller.
//!
//! Validation classifies raw bytes with a continuation-count state machine.
//! It deliberately does not reject overlong encodings or surrogate
//! codepoints; callers depend on the lenient behavior.

use crate::ascii::ascii_run_len;

/// Exact output size of [`utf8_to_latin1`] for `utf8`.
///
/// ASCII and lead bytes each contribute one output byte; continuation bytes
/// are consumed as part of their sequence and contribute nothing. Every
/// decoded codepoint maps to exactly one Latin-1 byte or one `?`.
#[must_use]
pub fn utf8_latin1_len(utf8: &str) -> usize {
    utf8.bytes().filter(|&b| (b & 0xC0) != 0x80).count()
}

/// Convert a UTF-8 string to Latin-1 bytes.
///
/// Codepoints at or below U+00FF map to their Latin-1 byte value; everything
/// else becomes `?`. Two-pass: the output buffer is sized exactly by
/// [`utf8_latin1_len`] before the write pass fills it.
#[must_use]
pub fn utf8_to_latin1(utf8: &str) -> Vec<u8> {
    let s = utf8.as_bytes();
    let mut out = Vec::with_capacity(utf8_latin1_len(utf8));
    let mut n = 0;
    // High bits of a decoded in-range two-byte sequence, waiting for the
    // continuation byte's low six bits.
    let mut stash: u8 = 0;

    while n < s.len() {
        let b = s[n];
        if b < 0x80 {
            let run = ascii_run_len(&s[n..]);
            out.extend_from_slice(&s[n..n + run]);
            n += run;
        } else if (b & 0xE0) == 0xC0 {
            if (b & 0x1F) <= 0x03 {
                // Codepoint fits in Latin-1; keep the shifted high bits.
                stash = b << 6;
                n += 1;
            } else {
                out.push(b'?');
                n += 2;
            }
        } else if (b & 0xC0) == 0x80 {
            out.push(stash | (b & 0x3F));
            stash = 0;
            n += 1;
        } else if (b & 0xF8) == 0xF0 {
            out.push(b'?');
            n += 4;
        } else {
            // 3-byte lead: always above Latin-1 range.
            out.push(b'?');
            n += 3;
        }
    }

    out
}

/// Check whether `bytes` is well-formed UTF-8.
///
/// Tracks the number of continuation bytes still expected. A lead byte while
/// continuations are pending, an orphan continuation byte, a `10xxxxxx`-less
/// truncated tail, or a byte pattern that is neither ASCII, lead, nor
/// continuation all classify as invalid. The function classifies; it never
/// raises.
#[must_use]
pub fn valid_utf8(bytes: &[u8]) -> bool {
    let mut pending = 0u8;

    for &b in bytes {
        if b < 0x80 {
            if pending != 0 {
                return false;
            }
        } else if (b & 0xF8) == 0xF0 {
            if pending != 0 {
                return false;
            }
            pending = 3;
        } else if (b & 0xF0) == 0xE0 {
            if pending != 0 {
                return false;
            }
            pending = 2;
        } else if (b & 0xE0) == 0xC0 {
            if pending != 0 {
                return false;
            }
            pending = 1;
        } else if (b & 0xC0) == 0x80 {
            if pending > 0 {
                pending -= 1;
            } else {
                return false;
            }
        } else {
            return false;
        }
    }

    pending == 0
}
