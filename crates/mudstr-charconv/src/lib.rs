#![forbid(unsafe_code)]

//! Character-set transcoding between Latin-1 (ISO-8859-1) and UTF-8.
//!
//! This crate handles the binary-format edge of the text pipeline:
//! network-origin Latin-1 bytes become UTF-8 on ingress, application UTF-8
//! becomes Latin-1 on the legacy output path, and raw input can be checked
//! for UTF-8 well-formedness. Both transcoders are two-pass: the first pass
//! computes the exact output size, the second writes into a buffer sized by
//! the first.
//!
//! Ingress data may carry embedded telnet control sequences. Those are
//! payload, not protocol, at this layer: with the telnet flag set, the
//! Latin-1 encoder copies control tokens through verbatim instead of
//! treating their bytes as Latin-1 characters. See [`telnet`] for the byte
//! constants.
//!
//! # Example
//! ```
//! use mudstr_charconv::{latin1_to_utf8, utf8_to_latin1, valid_utf8};
//!
//! // "é" in Latin-1 is one byte; in UTF-8 it is two.
//! assert_eq!(latin1_to_utf8(&[0xE9], false), vec![0xC3, 0xA9]);
//!
//! // Codepoints outside Latin-1 degrade to '?'.
//! assert_eq!(utf8_to_latin1("caf\u{00E9} \u{20AC}"), b"caf\xE9 ?");
//!
//! assert!(valid_utf8(b"abc\xC3\xA9"));
//! assert!(!valid_utf8(b"\x80"));
//! ```

mod ascii;
pub mod latin1;
pub mod telnet;
pub mod utf8;

pub use latin1::{latin1_to_utf8, latin1_to_utf8_string, latin1_utf8_len};
pub use utf8::{utf8_latin1_len, utf8_to_latin1, valid_utf8};
