#![no_std]

//! Bounded string operations over caller-provided buffers.
//!
//! Every writing operation takes a destination `&mut [u8]` whose length is
//! the *total* capacity, terminator byte included, and leaves the buffer
//! `0`-terminated no matter what happened. Truncation is never hidden and
//! never a panic: writers return the length the complete result would have
//! needed, so `result >= dst.len()` means the output was cut.
//!
//! ```
//! use boundstr::{cat, content, copy};
//!
//! let mut buf = [0u8; 8];
//! assert_eq!(copy(&mut buf, b"over"), 4);
//! assert_eq!(cat(&mut buf, b"flow!"), 9); // 9 >= 8: truncated
//! assert_eq!(content(&buf), b"overflo");
//! ```
//!
//! Read-side arguments are interpreted up to their first `0` byte, or the
//! whole slice when none is present, so plain Rust slices and terminated
//! buffers mix freely.
//!
//! Formatted output integrates with `core::fmt`:
//!
//! ```
//! use boundstr::{content, format_buf};
//!
//! let mut buf = [0u8; 16];
//! let needed = format_buf!(&mut buf, "{}-{}", "id", 7).unwrap();
//! assert!(needed < buf.len());
//! assert_eq!(content(&buf), b"id-7");
//! ```
//!
//! This crate is `no_std` and performs no allocation; everything works on
//! buffers the caller owns.

mod buf;
mod error;
mod fmt;
mod parse;
mod replace;
mod trim;

pub use crate::buf::{cat, content, content_len, copy, ends_with, is_empty, matches, starts_with};
pub use crate::error::StrError;
pub use crate::fmt::{cat_format, format};
pub use crate::parse::{parse_i128, parse_i128_partial, parse_i64, parse_i64_partial};
pub use crate::replace::replace;
pub use crate::trim::{
    left_cut, left_trim, left_trim_blanks, right_cut, right_trim, right_trim_blanks, trim,
    trim_blanks, BLANKS,
};
