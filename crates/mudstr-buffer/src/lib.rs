#![forbid(unsafe_code)]

//! Bounded-buffer safe-append primitives.
//!
//! Every higher-level text operation in the surrounding system builds output
//! into a fixed-capacity byte buffer. This crate provides the append protocol
//! for those buffers: each operation writes as much as fits, never touches
//! the reserved terminator byte at the end, and reports overflow as a byte
//! count instead of panicking or silently truncating.
//!
//! - [`BoundedWriter`] - cursor over a caller-owned fixed-capacity buffer
//! - [`BUFFER_LEN`] - the systems-wide output buffer capacity
//! - [`SBUF_LEN`] - capacity of short scratch buffers
//!
//! # Example
//! ```
//! use mudstr_buffer::{BoundedWriter, BUFFER_LEN};
//!
//! let mut buf = [0u8; BUFFER_LEN];
//! let mut w = BoundedWriter::new(&mut buf);
//!
//! assert_eq!(w.append_str("hello "), 0);
//! assert_eq!(w.append_integer(42, 10), 0);
//! assert_eq!(w.written(), b"hello 42");
//!
//! // Overflow is reported, not raised.
//! let mut small = [0u8; 5];
//! let mut w = BoundedWriter::new(&mut small);
//! assert_eq!(w.append_str("overrun"), 3);
//! assert_eq!(w.written(), b"over");
//! ```

pub mod format;
pub mod writer;

pub use writer::{BUFFER_LEN, BoundedWriter, SBUF_LEN};
