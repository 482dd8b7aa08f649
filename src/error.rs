//! Error types for article-print.
//!
//! This module defines the error types returned by extraction and rendering.
//! Malformed source nodes never surface here; they only drop the segment they
//! would have produced.

/// Error type for extraction and rendering operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Neither the article view nor the post thread yielded any segment.
    #[error("No article/tweet content found on this page.")]
    NoContent,

    /// A marker selector in `Options` could not be compiled.
    #[error("invalid selector: {0}")]
    InvalidSelector(String),

    /// Reading the source or writing the document failed.
    #[error("I/O failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Serializing the document as JSON failed.
    #[error("JSON serialization failed: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
