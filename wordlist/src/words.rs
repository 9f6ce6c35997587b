use slotlist::SlotList;

use crate::error::WordListError;

/// An ordered list of owned byte strings.
///
/// Words live in a [`SlotList`], so adding and removing in the middle never
/// moves the other words. The length is tracked, not recounted.
#[derive(Debug)]
pub struct WordList {
    items: SlotList<Box<[u8]>>,
}

impl WordList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> WordList {
        WordList {
            items: SlotList::new(),
        }
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an owned copy of `value`.
    ///
    /// The node slot and the copy are both reserved before anything is
    /// linked, so a failed call leaves the list exactly as it was and leaks
    /// nothing.
    ///
    /// # Errors
    ///
    /// [`WordListError::Alloc`] when the allocator refuses either
    /// reservation.
    pub fn add(&mut self, value: &[u8]) -> Result<(), WordListError> {
        self.items.try_reserve(1)?;

        let mut copy = Vec::new();
        copy.try_reserve_exact(value.len())?;
        copy.extend_from_slice(value);

        self.items.push_back(copy.into_boxed_slice());
        Ok(())
    }

    /// Removes every word byte-equal to `value`.
    ///
    /// Returns the number of words removed, 0 when none matched.
    #[tracing::instrument(skip_all, fields(value_len = value.len(), len = self.len()))]
    pub fn remove_matching(&mut self, value: &[u8]) -> usize {
        let mut removed = 0;

        let mut cursor = self.items.cursor_front_mut();
        while let Some(word) = cursor.value() {
            if &**word == value {
                cursor.remove_current();
                removed += 1;
            } else {
                cursor.advance();
            }
        }

        if removed > 0 {
            tracing::debug!(removed, "dropped matching words");
        }
        removed
    }

    /// Frees every word. The list stays usable and the call is idempotent.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Writes up to `out.len()` borrowed views of the words, in order.
    ///
    /// Returns the number written, `min(self.len(), out.len())`; entries
    /// past that count are untouched. The views borrow the list's own
    /// storage, so they end at the list's next mutation.
    pub fn fill_slice<'a>(&'a self, out: &mut [&'a [u8]]) -> usize {
        let mut filled = 0;
        for word in self.iter() {
            if filled == out.len() {
                break;
            }
            out[filled] = word;
            filled += 1;
        }
        filled
    }

    /// Borrowed in-order traversal of the words.
    pub fn iter(&self) -> WordIter<'_> {
        WordIter {
            inner: self.items.iter(),
        }
    }

    /// Splits `input` on every non-overlapping occurrence of `sep`.
    ///
    /// Every segment between occurrences becomes a word, empty segments
    /// included: `k` occurrences produce exactly `k + 1` words, an empty
    /// input produces one empty word, and each trailing separator adds a
    /// trailing empty word. An empty `sep` never occurs, so the whole input
    /// comes back as a single word.
    ///
    /// # Errors
    ///
    /// [`WordListError::Alloc`]; the partially built list is dropped whole,
    /// so a failed split leaves no words behind.
    #[tracing::instrument(skip_all, fields(input_len = input.len(), sep_len = sep.len()))]
    pub fn split(input: &[u8], sep: &[u8]) -> Result<WordList, WordListError> {
        let mut list = WordList::new();

        let mut rest = input;
        if !sep.is_empty() {
            while let Some(at) = find(rest, sep) {
                list.add(&rest[..at])?;
                rest = &rest[at + sep.len()..];
            }
        }
        list.add(rest)?;

        tracing::trace!(words = list.len(), "split finished");
        Ok(list)
    }
}

impl Default for WordList {
    fn default() -> WordList {
        WordList::new()
    }
}

/// Position of the first occurrence of `needle` in `haystack`. An empty
/// needle occurs nowhere.
fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Iterator over borrowed words, created by [`WordList::iter`].
pub struct WordIter<'a> {
    inner: slotlist::Iter<'a, Box<[u8]>>,
}

impl<'a> Iterator for WordIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        self.inner.next().map(|word| word.as_ref())
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a [u8];
    type IntoIter = WordIter<'a>;

    fn into_iter(self) -> WordIter<'a> {
        self.iter()
    }
}
