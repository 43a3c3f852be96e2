#![forbid(unsafe_code)]

//! ASCII-run batching for the transcoder hot loops.
//!
//! Both transcoders spend most of their time on pure-ASCII text, so runs of
//! ASCII bytes are classified a 16-byte chunk at a time and copied in one
//! step. This is purely a throughput optimization; per-byte processing must
//! produce identical output and identical size precomputation.

/// Chunk width for batched classification.
pub(crate) const CHUNK: usize = 16;

/// Length of the leading pure-ASCII run of `s`.
///
/// Scans whole chunks first, then finishes byte-by-byte, so the run extends
/// to the first byte with the high bit set (or the end of the slice).
pub(crate) fn ascii_run_len(s: &[u8]) -> usize {
    let mut n = 0;
    while n + CHUNK <= s.len() {
        if s[n..n + CHUNK].iter().any(|&b| b >= 0x80) {
            break;
        }
        n += CHUNK;
    }
    while n < s.len() && s[n] < 0x80 {
        n += 1;
    }
    n
}
