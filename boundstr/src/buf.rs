//! Copy and concatenate over terminated buffers.

/// Logical length of a byte string: bytes before the first `0`, or the
/// whole slice when no terminator is present.
#[must_use]
pub fn content_len(s: &[u8]) -> usize {
    s.iter().position(|&b| b == 0).unwrap_or(s.len())
}

/// Logical content of a byte string, terminator excluded.
#[must_use]
pub fn content(s: &[u8]) -> &[u8] {
    &s[..content_len(s)]
}

/// True iff the string has no content before its terminator.
#[must_use]
pub fn is_empty(s: &[u8]) -> bool {
    s.first().map_or(true, |&b| b == 0)
}

/// Copies `src` into `dst`, truncating to fit, and terminates `dst`.
///
/// Returns the length `src` would occupy untruncated, so truncation
/// occurred iff the return value is `>= dst.len()`.
///
/// # Panics
///
/// Panics if `dst` is empty: one byte of capacity is the minimum needed to
/// hold the terminator.
pub fn copy(dst: &mut [u8], src: &[u8]) -> usize {
    assert!(
        !dst.is_empty(),
        "destination must hold at least the terminator"
    );
    let src = content(src);
    let n = src.len().min(dst.len() - 1);
    dst[..n].copy_from_slice(&src[..n]);
    dst[n] = 0;
    src.len()
}

/// Appends `src` to the content already in `dst`, truncating to fit.
///
/// The current length is measured from the buffer, not tracked, so `dst`
/// must be terminated before the first call of a chain. Returns the total
/// length the content would have untruncated; across repeated calls the
/// return value grows monotonically, which keeps cumulative truncation
/// detectable with the same `>= dst.len()` test.
///
/// # Panics
///
/// Panics if `dst` is empty or completely full with no terminator.
pub fn cat(dst: &mut [u8], src: &[u8]) -> usize {
    let used = content_len(dst);
    used + copy(&mut dst[used..], src)
}

/// Exact equality between the content of `s` and `word`, length included.
///
/// Unlike [`starts_with`], a longer `s` sharing a prefix does not match.
#[must_use]
pub fn matches(s: &[u8], word: &[u8]) -> bool {
    content(s) == content(word)
}

/// True iff the content of `haystack` begins with the content of `word`.
#[must_use]
pub fn starts_with(haystack: &[u8], word: &[u8]) -> bool {
    content(haystack).starts_with(content(word))
}

/// True iff the content of `haystack` ends with the content of `word`.
///
/// A `word` longer than the haystack is never a suffix; no bytes outside
/// either slice are read.
#[must_use]
pub fn ends_with(haystack: &[u8], word: &[u8]) -> bool {
    content(haystack).ends_with(content(word))
}
