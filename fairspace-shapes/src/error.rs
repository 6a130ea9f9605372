//! Vocabulary index error types

use thiserror::Error;

/// Result type for vocabulary index operations
pub type Result<T> = std::result::Result<T, ShapesError>;

/// Errors raised by the vocabulary index
///
/// Data-quality problems in vocabulary or metadata graphs are never errors:
/// they are logged and the affected entries are skipped. Only caller bugs end up here.
#[derive(Debug, Error)]
pub enum ShapesError {
    /// The vocabulary payload is not an array of expanded JSON-LD nodes
    #[error("Invalid vocabulary: {message}")]
    InvalidVocabulary { message: String },
}
