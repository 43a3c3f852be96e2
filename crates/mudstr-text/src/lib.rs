#![forbid(unsafe_code)]

//! Codepoint and grapheme-cluster primitives for UTF-8 text.
//!
//! Higher-level string helpers (truncation, padding, case folding) need
//! "first N units" semantics where a unit is either a Unicode codepoint or
//! an extended grapheme cluster. This crate provides the forward-only
//! walkers and the counting/offset/prefix helpers built on them. Grapheme
//! segmentation itself comes from `unicode-segmentation`; only cluster
//! boundaries and byte lengths are consumed here.
//!
//! - [`for_each_codepoint`] / [`for_each_grapheme`] - restartable visitors
//! - [`strlen_cp`] / [`strlen_gc`] - unit counts
//! - [`take_codepoints`] / [`take_graphemes`] - prefix slices
//! - [`grapheme_breaks`] - cluster start offsets
//! - [`upcase_in_place`] / [`downcase_in_place`] - length-preserving case
//!   remapping
//!
//! # Example
//! ```
//! use mudstr_text::{strlen_cp, strlen_gc, take_graphemes};
//!
//! // "é" as a combining sequence: two codepoints, one cluster.
//! let s = "xe\u{0301}y";
//! assert_eq!(strlen_cp(s), 4);
//! assert_eq!(strlen_gc(s), 3);
//! assert_eq!(take_graphemes(s, 2), "xe\u{0301}");
//! ```

pub mod case;
pub mod measure;
pub mod walk;

pub use case::{downcase_in_place, upcase_in_place};
pub use measure::{
    cpbytes, gcbytes, grapheme_breaks, strlen_cp, strlen_gc, strnlen_cp, strnlen_gc,
    take_codepoints, take_graphemes,
};
pub use walk::{for_each_codepoint, for_each_grapheme};
