//! Trimming byte sets and cutting exact words at either end.

use crate::buf::content;

/// The ASCII blank set: space, tab, newline, carriage return, vertical tab.
pub const BLANKS: &[u8] = b" \t\n\r\x0b";

/// Subslice of `s` with every leading byte present in `cutset` skipped.
///
/// The input is not modified; the result is an offset view of its content.
#[must_use]
pub fn left_trim<'a>(s: &'a [u8], cutset: &[u8]) -> &'a [u8] {
    let c = content(s);
    let cut = content(cutset);
    let start = c.iter().position(|b| !cut.contains(b)).unwrap_or(c.len());
    &c[start..]
}

/// Removes trailing bytes present in `cutset` by terminating `s` in place.
///
/// Returns the same buffer, shortened. Bytes past the new terminator are
/// left as they were.
pub fn right_trim<'a>(s: &'a mut [u8], cutset: &[u8]) -> &'a mut [u8] {
    let kept = {
        let c = content(s);
        let cut = content(cutset);
        let mut end = c.len();
        while end > 0 && cut.contains(&c[end - 1]) {
            end -= 1;
        }
        end
    };
    if kept < s.len() {
        s[kept] = 0;
    }
    s
}

/// Trims both ends: right first, in place, then left, so the result is a
/// subslice of the shortened content.
pub fn trim<'a>(s: &'a mut [u8], cutset: &[u8]) -> &'a [u8] {
    left_trim(right_trim(s, cutset), cutset)
}

/// [`left_trim`] with [`BLANKS`].
#[must_use]
pub fn left_trim_blanks(s: &[u8]) -> &[u8] {
    left_trim(s, BLANKS)
}

/// [`right_trim`] with [`BLANKS`].
pub fn right_trim_blanks(s: &mut [u8]) -> &mut [u8] {
    right_trim(s, BLANKS)
}

/// [`trim`] with [`BLANKS`].
pub fn trim_blanks(s: &mut [u8]) -> &[u8] {
    trim(s, BLANKS)
}

/// Content of `haystack` with `word` removed from the front when `word` is
/// an exact prefix; the content unchanged otherwise.
#[must_use]
pub fn left_cut<'a>(haystack: &'a [u8], word: &[u8]) -> &'a [u8] {
    let c = content(haystack);
    let w = content(word);
    if c.starts_with(w) {
        &c[w.len()..]
    } else {
        c
    }
}

/// Removes `word` from the end of `haystack` by terminating in place, when
/// `word` is an exact suffix; the buffer comes back unchanged otherwise.
pub fn right_cut<'a>(haystack: &'a mut [u8], word: &[u8]) -> &'a mut [u8] {
    let kept = {
        let c = content(haystack);
        let w = content(word);
        if !w.is_empty() && c.ends_with(w) {
            Some(c.len() - w.len())
        } else {
            None
        }
    };
    if let Some(kept) = kept {
        haystack[kept] = 0;
    }
    haystack
}
