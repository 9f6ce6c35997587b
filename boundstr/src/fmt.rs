//! Formatted writes with the copy/cat truncation contract.

use core::fmt::{self, Write};

use crate::buf::content_len;
use crate::error::StrError;

/// Streams formatted output into a fixed buffer, counting the bytes the
/// complete output would need. Truncation is not a write error here; the
/// counter keeps running past the end of the buffer.
struct TermWriter<'a> {
    buf: &'a mut [u8],
    written: usize,
    needed: usize,
}

impl<'a> TermWriter<'a> {
    fn new(buf: &'a mut [u8]) -> Self {
        TermWriter {
            buf,
            written: 0,
            needed: 0,
        }
    }

    /// Writes the terminator after the streamed bytes and reports the
    /// would-have-been length.
    fn terminate(self) -> usize {
        self.buf[self.written] = 0;
        self.needed
    }
}

impl Write for TermWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        self.needed += bytes.len();

        let room = self.buf.len() - 1 - self.written;
        let n = bytes.len().min(room);
        self.buf[self.written..self.written + n].copy_from_slice(&bytes[..n]);
        self.written += n;

        Ok(())
    }
}

/// Formats into `dst`, truncating to fit, and terminates `dst`.
///
/// `Ok` carries the length the complete output would occupy, so truncation
/// occurred iff it is `>= dst.len()`. The [`format_buf!`](crate::format_buf)
/// macro wraps this with `format_args!`.
///
/// # Errors
///
/// [`StrError::Format`] when a `Display` implementation reports failure;
/// `dst` is forced to the empty string in that case.
///
/// # Panics
///
/// Panics if `dst` is empty.
pub fn format(dst: &mut [u8], args: fmt::Arguments<'_>) -> Result<usize, StrError> {
    assert!(
        !dst.is_empty(),
        "destination must hold at least the terminator"
    );
    let mut writer = TermWriter::new(dst);
    match writer.write_fmt(args) {
        Ok(()) => Ok(writer.terminate()),
        Err(fmt::Error) => {
            dst[0] = 0;
            Err(StrError::Format)
        }
    }
}

/// Appends formatted output to the content already in `dst`.
///
/// Same accumulation contract as [`cat`](crate::cat): the `Ok` value is the
/// existing length plus the complete formatted length. On a formatting
/// failure the existing content is kept and the appended region is cleared.
///
/// # Errors
///
/// [`StrError::Format`], as for [`format`].
///
/// # Panics
///
/// Panics if `dst` is empty or completely full with no terminator.
pub fn cat_format(dst: &mut [u8], args: fmt::Arguments<'_>) -> Result<usize, StrError> {
    let used = content_len(dst);
    format(&mut dst[used..], args).map(|needed| used + needed)
}

/// Formats into a bounded buffer: `format_buf!(&mut buf, "{}", x)` is
/// [`format`] with a `format_args!` payload.
#[macro_export]
macro_rules! format_buf {
    ($dst:expr, $($arg:tt)*) => {
        $crate::format($dst, core::format_args!($($arg)*))
    };
}

/// Appends formatted output to a bounded buffer, the macro form of
/// [`cat_format`].
#[macro_export]
macro_rules! cat_buf {
    ($dst:expr, $($arg:tt)*) => {
        $crate::cat_format($dst, core::format_args!($($arg)*))
    };
}
