//! Structured error types for the strand toolkit.

use thiserror::Error;

/// Unified error type for all strand operations.
#[derive(Debug, Error)]
pub enum StrandError {
    /// Invalid input (bad arguments, bytes outside an alphabet)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A validity check failed while building a collection.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Lookup of an identifier that is not present.
    #[error("identifier not found: {0}")]
    NotFound(String),

    /// Positional access past the end of a collection.
    #[error("index {index} out of range for collection of {len} sequences")]
    IndexOutOfRange { index: usize, len: usize },

    /// An operation that needs at least one sequence was given none.
    #[error("empty collection: {0}")]
    EmptyCollection(String),

    /// Declared operation without an implementation yet.
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
}

/// Convenience alias used throughout the strand crates.
pub type Result<T> = std::result::Result<T, StrandError>;
