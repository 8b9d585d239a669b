//! Error types for article-extract.
//!
//! This module defines the error types returned by extraction operations.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Neither the primary nor the fallback pass produced any text.
    #[error("No extractable content found")]
    NoContent,

    /// Extraction aborted unexpectedly and was stopped at the entry point.
    #[error("Extraction failed: {0}")]
    ExtractionError(String),
}

impl Error {
    /// True for the "nothing to extract" outcome, as opposed to an aborted run.
    #[must_use]
    pub fn is_no_content(&self) -> bool {
        matches!(self, Self::NoContent)
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
