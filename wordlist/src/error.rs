use std::collections::TryReserveError;

use thiserror::Error;

/// Error types for `WordList` operations
#[derive(Error, Debug)]
pub enum WordListError {
    /// The allocator could not provide memory for a new word
    #[error("allocation failed while growing the word list")]
    Alloc(#[from] TryReserveError),
}
