use thiserror::Error;

/// Result type for positional collection operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the collections in this crate
///
/// Empty-container queries and search misses are not errors; they return
/// `None` or `false`. Only positional operations fail with an `Error`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("index {index} is out of range for a collection of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
