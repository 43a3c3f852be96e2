#![forbid(unsafe_code)]

//! The safe-append write protocol.
//!
//! A [`BoundedWriter`] is a cursor over a caller-owned byte buffer of fixed
//! capacity `C`. The final byte is reserved for a terminator that the caller
//! adds explicitly, so no append ever writes past index `C - 2`. A write that
//! would exceed capacity performs a partial write of as many bytes as fit and
//! returns the count of bytes it could not write; zero means full success.
//! Because overflow is always reported in bytes, a caller that sums the
//! return values of repeated overflowing appends gets a precise total of how
//! much data was dropped.
//!
//! All appends funnel through [`BoundedWriter::append_bytes`], the single
//! routine that implements the overflow accounting. Formatting variants
//! render into scratch storage first and then append the rendered bytes.

use std::fmt;

/// Systems-wide output buffer capacity, in bytes.
///
/// All full-size output buffers in one build share this value; the bounded
/// write operations reserve the final byte for a terminator.
pub const BUFFER_LEN: usize = 8192;

/// Capacity of short scratch buffers (single numbers, tokens, names).
pub const SBUF_LEN: usize = 128;

/// A write cursor over a caller-owned fixed-capacity byte buffer.
///
/// The writer never writes at or past `capacity - 1`; byte `capacity - 1`
/// is reserved for the terminator added by [`terminate`](Self::terminate).
/// Every append operation returns the number of bytes it could *not* write
/// (0 on full success).
#[derive(Debug)]
pub struct BoundedWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> BoundedWriter<'a> {
    /// Create a writer over `buf` with the cursor at the start.
    #[must_use]
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Total capacity of the underlying buffer, including the reserved
    /// terminator byte.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Highest index the cursor may reach (one byte is reserved).
    #[inline]
    fn limit(&self) -> usize {
        self.buf.len().saturating_sub(1)
    }

    /// Current cursor position.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes still writable before the reserved terminator byte.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.limit() - self.pos
    }

    /// The bytes written so far.
    #[inline]
    #[must_use]
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    /// Write a NUL terminator at the cursor without advancing it.
    ///
    /// Always fits: the append operations never consume the final byte.
    pub fn terminate(&mut self) {
        if self.pos < self.buf.len() {
            self.buf[self.pos] = 0;
        }
    }

    /// Rewind the cursor to an earlier position.
    ///
    /// Used by all-or-nothing appends that need to undo a partial write.
    /// Positions past the current cursor are ignored.
    pub fn rewind(&mut self, pos: usize) {
        if pos <= self.pos {
            self.pos = pos;
        }
    }

    /// Append a single byte. Returns 1 if the buffer is full, else 0.
    #[inline]
    pub fn append_byte(&mut self, c: u8) -> usize {
        if self.pos >= self.limit() {
            1
        } else {
            self.buf[self.pos] = c;
            self.pos += 1;
            0
        }
    }

    /// Append as many of `s`'s bytes as fit.
    ///
    /// Returns the number of bytes that did not fit; empty input is a no-op
    /// returning 0. This is the primitive every other append is built on.
    pub fn append_bytes(&mut self, s: &[u8]) -> usize {
        if s.is_empty() {
            return 0;
        }
        let fit = s.len().min(self.remaining());
        self.buf[self.pos..self.pos + fit].copy_from_slice(&s[..fit]);
        self.pos += fit;
        s.len() - fit
    }

    /// Append a UTF-8 string, truncating at the capacity limit if needed.
    ///
    /// Truncation is byte-exact, not codepoint-aligned; use
    /// [`append_codepoint`](Self::append_codepoint) when a partial sequence
    /// must never be written.
    #[inline]
    pub fn append_str(&mut self, s: &str) -> usize {
        self.append_bytes(s.as_bytes())
    }

    /// Append one codepoint as 1-4 UTF-8 bytes, all or nothing.
    ///
    /// On overflow nothing is written and the full encoded length is
    /// returned, keeping the dropped-byte accounting exact.
    pub fn append_codepoint(&mut self, c: char) -> usize {
        let mut tmp = [0u8; 4];
        let enc = c.encode_utf8(&mut tmp).as_bytes();
        if enc.len() > self.remaining() {
            enc.len()
        } else {
            self.append_bytes(enc)
        }
    }

    /// Append `byte` repeated `n` times, partial-filling on overflow.
    ///
    /// Returns the number of repetitions that did not fit.
    pub fn fill(&mut self, byte: u8, n: usize) -> usize {
        let fit = n.min(self.remaining());
        self.buf[self.pos..self.pos + fit].fill(byte);
        self.pos += fit;
        n - fit
    }

    /// Append formatted text.
    ///
    /// The arguments are rendered into a scratch buffer capped at this
    /// writer's usable capacity first, then appended like
    /// [`append_bytes`](Self::append_bytes).
    pub fn append_fmt(&mut self, args: fmt::Arguments) -> usize {
        let mut scratch = Scratch::new(self.limit());
        // Rendering cannot fail; the scratch silently caps at capacity.
        let _ = fmt::Write::write_fmt(&mut scratch, args);
        self.append_bytes(&scratch.buf)
    }
}

/// Capacity-capped render target for [`BoundedWriter::append_fmt`].
struct Scratch {
    buf: Vec<u8>,
    cap: usize,
}

impl Scratch {
    fn new(cap: usize) -> Self {
        Self {
            buf: Vec::new(),
            cap,
        }
    }
}

impl fmt::Write for Scratch {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = self.cap - self.buf.len();
        let take = s.len().min(room);
        self.buf.extend_from_slice(&s.as_bytes()[..take]);
        Ok(())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn written_plus_dropped_equals_input(
            data in proptest::collection::vec(any::<u8>(), 0..64),
            cap in 1usize..32,
        ) {
            let mut buf = vec![0u8; cap];
            let mut w = BoundedWriter::new(&mut buf);
            let dropped = w.append_bytes(&data);
            prop_assert_eq!(w.position() + dropped, data.len());
            prop_assert_eq!(w.written(), &data[..w.position()]);
        }

        #[test]
        fn cursor_never_reaches_reserved_byte(
            chunks in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..16), 0..8),
            cap in 1usize..24,
        ) {
            let mut buf = vec![0u8; cap];
            let mut w = BoundedWriter::new(&mut buf);
            for chunk in &chunks {
                w.append_bytes(chunk);
            }
            prop_assert!(w.position() <= cap.saturating_sub(1));
        }

        #[test]
        fn overflow_totals_are_additive(
            a in proptest::collection::vec(any::<u8>(), 0..32),
            b in proptest::collection::vec(any::<u8>(), 0..32),
            cap in 1usize..16,
        ) {
            let mut buf = vec![0u8; cap];
            let mut w = BoundedWriter::new(&mut buf);
            let dropped = w.append_bytes(&a) + w.append_bytes(&b);
            prop_assert_eq!(w.position() + dropped, a.len() + b.len());
        }
    }
}
