#![forbid(unsafe_code)]

//! Latin-1 to UTF-8 conversion for network ingress.
//!
//! Input is a fixed-length buffer of raw bytes, possibly with embedded telnet
//! control sequences. Conversion is two-pass: [`latin1_utf8_len`] computes
//! the output size, [`latin1_to_utf8`] writes into a buffer sized by it.
//! Every Latin-1 byte below 128 copies through unchanged; every byte at or
//! above 128 becomes the two-byte UTF-8 sequence for the same codepoint.
//!
//! With the telnet flag set, a byte run starting with [`IAC`] is a control
//! token and its bytes are copied verbatim, never re-encoded, so the output
//! is only guaranteed to be well-formed UTF-8 when the flag is off (or the
//! input carries no control sequences).

use tracing::warn;

use crate::ascii::{CHUNK, ascii_run_len};
use crate::telnet::{IAC, NOP, SB, SE, is_negotiation};

/// Exact output size of [`latin1_to_utf8`] for `latin` without telnet
/// sequences: one byte per ASCII input byte, two per high byte.
///
/// For telnet input this is an upper bound, since control tokens pass
/// through without the two-byte expansion.
#[must_use]
pub fn latin1_utf8_len(latin: &[u8]) -> usize {
    let mut bytes = 0;
    let mut chunks = latin.chunks_exact(CHUNK);
    for chunk in &mut chunks {
        let high = chunk.iter().filter(|&&b| b >= 0x80).count();
        bytes += CHUNK + high;
    }
    for &b in chunks.remainder() {
        bytes += if b < 0x80 { 1 } else { 2 };
    }
    bytes
}

/// Encode a high Latin-1 byte as its two-byte UTF-8 sequence.
#[inline]
fn encode_high(out: &mut Vec<u8>, c: u8) {
    out.push(0xC0 | (c >> 6));
    out.push(0x80 | (c & 0x3F));
}

/// Convert a Latin-1 byte buffer to UTF-8.
///
/// With `telnet` set, telnet control tokens are recognized and passed
/// through verbatim:
///
/// - `IAC IAC` is an escaped literal 0xFF and is encoded as a character
/// - `IAC SB ... SE` is copied unmodified through the terminating `SE`,
///   including payload bytes at or above 128
/// - `IAC DO/DONT/WILL/WONT option` is copied as all three bytes
/// - `IAC NOP` is copied as both bytes
/// - any other byte after `IAC` is a protocol error: it is logged at warn
///   level and skipped, and conversion continues
///
/// Sequences truncated by the end of the input are logged and emitted as
/// far as the input allows; the converter never reads past the buffer.
#[must_use]
pub fn latin1_to_utf8(latin: &[u8], telnet: bool) -> Vec<u8> {
    let mut out = Vec::with_capacity(latin1_utf8_len(latin));
    let mut n = 0;

    while n < latin.len() {
        let c = latin[n];

        if c < 0x80 {
            let run = ascii_run_len(&latin[n..]);
            out.extend_from_slice(&latin[n..n + run]);
            n += run;
        } else if telnet && c == IAC {
            n += 1;
            match latin.get(n) {
                Some(&IAC) => {
                    encode_high(&mut out, IAC);
                    n += 1;
                }
                Some(&SB) => {
                    out.push(IAC);
                    while n < latin.len() && latin[n] != SE {
                        out.push(latin[n]);
                        n += 1;
                    }
                    if n < latin.len() {
                        out.push(SE);
                        n += 1;
                    } else {
                        warn!("unterminated telnet subnegotiation");
                    }
                }
                Some(&verb) if is_negotiation(verb) => {
                    out.push(IAC);
                    out.push(verb);
                    n += 1;
                    if let Some(&option) = latin.get(n) {
                        out.push(option);
                        n += 1;
                    } else {
                        warn!(verb, "telnet option negotiation truncated");
                    }
                }
                Some(&NOP) => {
                    out.push(IAC);
                    out.push(NOP);
                    n += 1;
                }
                Some(&other) => {
                    warn!(byte = other, "invalid telnet sequence character");
                    n += 1;
                }
                None => {
                    warn!("IAC at end of input");
                }
            }
        } else {
            encode_high(&mut out, c);
            n += 1;
        }
    }

    out
}

/// Convert a Latin-1 byte buffer to an owned UTF-8 string.
///
/// Telnet handling is off on this path, so the output is always well-formed.
#[must_use]
pub fn latin1_to_utf8_string(latin: &[u8]) -> String {
    String::from_utf8(latin1_to_utf8(latin, false))
        .expect("latin-1 transcoding always produces well-formed UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_copies_verbatim() {
        assert_eq!(latin1_to_utf8(b"hello", false), b"hello");
        assert_eq!(latin1_utf8_len(b"hello"), 5);
    }

    #[test]
    fn high_byte_encodes_as_two_bytes() {
        // 0xE9 is "é" in Latin-1.
        assert_eq!(latin1_to_utf8(&[0xE9], false), vec![0xC3, 0xA9]);
        assert_eq!(latin1_utf8_len(&[0xE9]), 2);
    }

    #[test]
    fn long_ascii_runs_use_the_chunked_path() {
        let input: Vec<u8> = (0..50).map(|i| b'a' + (i % 26)).collect();
        assert_eq!(latin1_to_utf8(&input, false), input);
        assert_eq!(latin1_utf8_len(&input), 50);
    }

    #[test]
    fn mixed_text_round_trips_through_string() {
        let s = latin1_to_utf8_string(b"caf\xE9 cr\xE8me");
        assert_eq!(s, "caf\u{E9} cr\u{E8}me");
    }

    #[test]
    fn without_telnet_flag_iac_is_a_character() {
        // 0xFF is ÿ in Latin-1; encoded, not interpreted.
        assert_eq!(latin1_to_utf8(&[IAC], false), vec![0xC3, 0xBF]);
    }

    #[test]
    fn escaped_iac_encodes_once() {
        assert_eq!(latin1_to_utf8(&[IAC, IAC], true), vec![0xC3, 0xBF]);
    }

    #[test]
    fn negotiation_passes_through_verbatim() {
        // IAC WILL ECHO: three raw bytes, no UTF-8 re-encoding.
        let out = latin1_to_utf8(&[0xFF, 0xFB, 0x01], true);
        assert_eq!(out, vec![0xFF, 0xFB, 0x01]);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn subnegotiation_payload_is_not_reencoded() {
        // IAC SB 201 0xC3 0xA9 SE, with high payload bytes kept raw.
        let input = [IAC, SB, 201, 0xC3, 0xA9, SE];
        assert_eq!(latin1_to_utf8(&input, true), input.to_vec());
    }

    #[test]
    fn nop_passes_through() {
        let out = latin1_to_utf8(&[b'a', IAC, NOP, b'b'], true);
        assert_eq!(out, vec![b'a', IAC, NOP, b'b']);
    }

    #[test]
    fn invalid_sequence_byte_is_skipped() {
        // 0x42 is not a telnet verb; the IAC pair is dropped, text continues.
        let out = latin1_to_utf8(&[b'a', IAC, 0x42, b'b'], true);
        assert_eq!(out, vec![b'a', b'b']);
    }

    #[test]
    fn truncated_sequences_never_read_past_input() {
        assert_eq!(latin1_to_utf8(&[IAC], true), Vec::<u8>::new());
        assert_eq!(latin1_to_utf8(&[IAC, 0xFB], true), vec![IAC, 0xFB]);
        // Unterminated SB: everything available is emitted, no SE appended.
        assert_eq!(latin1_to_utf8(&[IAC, SB, 1, 2], true), vec![IAC, SB, 1, 2]);
    }

    #[test]
    fn telnet_output_never_exceeds_precomputed_size() {
        let input = [b'x', IAC, 0xFB, 0x01, 0xE9, IAC, IAC];
        let out = latin1_to_utf8(&input, true);
        assert!(out.len() <= latin1_utf8_len(&input));
    }
}
