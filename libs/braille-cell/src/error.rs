//! # Cell Errors
//!
//! Error types for cell construction and word-mapping edits.

use thiserror::Error;

/// Errors raised when cell data violates the 6-dot contract.
///
/// These are contract violations from the producing component, not user
/// mistakes, and are reported as soon as the data is seen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CellError {
    /// A raw dot array did not have exactly six entries.
    #[error("braille cell must have {expected} dots, got {got}")]
    InvalidDotCount { expected: usize, got: usize },

    /// A reading correction addressed a word that does not exist.
    #[error("word index {index} out of range for {len} mapped words")]
    UnknownWord { index: usize, len: usize },
}

/// Result type alias for cell operations.
pub type CellResult<T> = Result<T, CellError>;
