#![forbid(unsafe_code)]

//! Bounded number and token formatting.
//!
//! Integer rendering works digit-by-digit onto a small fixed stack buffer
//! with repeated divmod, most-significant digit landing last, then hands the
//! digits to the writer's byte-append primitive so overflow accounting stays
//! identical across every append flavor.

use crate::writer::BoundedWriter;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Room for a 64-bit value in base 2 plus a sign.
const STACK: usize = 65;

fn clamp_base(base: u32) -> u64 {
    u64::from(base.clamp(2, 36))
}

/// Render `val`'s digits into `stack` back to front; returns the used tail.
fn render_unsigned(val: u64, base: u64, stack: &mut [u8; STACK]) -> usize {
    let mut at = STACK;
    let mut rest = val;
    loop {
        at -= 1;
        stack[at] = DIGITS[(rest % base) as usize];
        rest /= base;
        if rest == 0 {
            break;
        }
    }
    at
}

impl BoundedWriter<'_> {
    /// Append an unsigned integer in the given base (clamped to 2..=36).
    ///
    /// Digits that do not fit are dropped from the tail and counted in the
    /// return value, like any other append.
    pub fn append_unsigned(&mut self, val: u64, base: u32) -> usize {
        let mut stack = [0u8; STACK];
        let at = render_unsigned(val, clamp_base(base), &mut stack);
        self.append_bytes(&stack[at..])
    }

    /// Append a signed integer in the given base (clamped to 2..=36).
    ///
    /// `i64::MIN` cannot be negated, so in bases 10, 16, and 8 it is
    /// formatted via its direct string form; in other bases it writes
    /// nothing and reports success, matching the legacy behavior.
    pub fn append_integer(&mut self, val: i64, base: u32) -> usize {
        let base = clamp_base(base);
        if val == i64::MIN {
            return match base {
                10 => self.append_fmt(format_args!("{val}")),
                16 => self.append_fmt(format_args!("{:x}", val as u64)),
                8 => self.append_fmt(format_args!("{:o}", val as u64)),
                _ => 0,
            };
        }

        let mut stack = [0u8; STACK];
        let mut at = render_unsigned(val.unsigned_abs(), base, &mut stack);
        if val < 0 {
            at -= 1;
            stack[at] = b'-';
        }
        self.append_bytes(&stack[at..])
    }

    /// Append a floating point number in its shortest round-trip form.
    pub fn append_decimal(&mut self, n: f64) -> usize {
        self.append_fmt(format_args!("{n}"))
    }

    /// Append a lowercase hex dump of `bytes`, two digits per input byte.
    pub fn append_hex(&mut self, bytes: &[u8]) -> usize {
        for (i, &b) in bytes.iter().enumerate() {
            let pair = [DIGITS[(b >> 4) as usize], DIGITS[(b & 0x0F) as usize]];
            let dropped = self.append_bytes(&pair);
            if dropped != 0 {
                return dropped + (bytes.len() - i - 1) * 2;
            }
        }
        0
    }

    /// Append a string, wrapping it in double quotes if it contains a space.
    ///
    /// The quoted form is all-or-nothing: on overflow the cursor is restored
    /// and the whole input (plus both quotes) is reported as dropped.
    pub fn append_str_quoted(&mut self, s: &str) -> usize {
        if s.is_empty() {
            return 0;
        }
        if !s.contains(' ') {
            return self.append_str(s);
        }
        let saved = self.position();
        if self.append_byte(b'"') != 0 || self.append_str(s) != 0 || self.append_byte(b'"') != 0 {
            self.rewind(saved);
            return s.len() + 2;
        }
        0
    }
}
