use thiserror::Error;

/// Error types for bounded string operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum StrError {
    /// The complete result would not fit the destination buffer
    #[error("truncated: result holds {needed} bytes, capacity is {capacity}")]
    Truncated {
        /// Content bytes the complete result would hold
        needed: usize,
        /// Total capacity of the destination, terminator included
        capacity: usize,
    },
    /// The formatting machinery reported failure mid-write
    #[error("formatting failed, destination cleared")]
    Format,
}
