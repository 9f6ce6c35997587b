//! Substring replacement built on the accumulation contract of `cat`.

use crate::buf::{cat, content};
use crate::error::StrError;

/// Position of the first occurrence of `needle` in `haystack`. An empty
/// needle occurs nowhere.
fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Replaces every non-overlapping occurrence of `from` in `haystack` with
/// `to`, writing the result to `out`.
///
/// The scan resumes right after each match, so occurrences of `from` inside
/// an inserted `to` are not reprocessed. `Ok` carries the final content
/// length of `out`.
///
/// # Errors
///
/// [`StrError::Truncated`] as soon as one accumulation step does not fit.
/// `out` keeps the prefix built up to that point; it is not rolled back.
///
/// # Panics
///
/// Panics if `out` is empty.
pub fn replace(
    haystack: &[u8],
    from: &[u8],
    to: &[u8],
    out: &mut [u8],
) -> Result<usize, StrError> {
    assert!(
        !out.is_empty(),
        "destination must hold at least the terminator"
    );
    let capacity = out.len();
    out[0] = 0;

    let mut rest = content(haystack);
    let from = content(from);
    let to = content(to);

    while let Some(at) = find(rest, from) {
        let needed = cat(out, &rest[..at]);
        if needed >= capacity {
            return Err(StrError::Truncated { needed, capacity });
        }
        let needed = cat(out, to);
        if needed >= capacity {
            return Err(StrError::Truncated { needed, capacity });
        }
        rest = &rest[at + from.len()..];
    }

    let needed = cat(out, rest);
    if needed >= capacity {
        return Err(StrError::Truncated { needed, capacity });
    }
    Ok(needed)
}
