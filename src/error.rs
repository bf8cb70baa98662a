//! Custom error types for textor
//!
//! Uses thiserror for ergonomic error definitions with automatic
//! Display and Error trait implementations.

use thiserror::Error;

/// Application-specific errors for textor
#[derive(Error, Debug)]
pub enum TextorError {
    /// IO operations failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// More than one fingerprint record exists for the same path.
    /// Persistent state is corrupt; never silently pick one.
    #[error("Duplicate fingerprint record for file: {0}")]
    DuplicateFingerprint(String),

    /// More than one token entry exists for the same token.
    /// Persistent state is corrupt; never silently pick one.
    #[error("Duplicate token entry: {0}")]
    DuplicateToken(String),

    /// Text extraction failed; the file is skipped this run and
    /// retried on the next one.
    #[error("Extraction failed for {path}: {reason}")]
    Extraction { path: String, reason: String },

    /// File format is on the allow-list but the extractor cannot decode it
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Query submitted with no terms
    #[error("No terms to find")]
    NoTerms,

    /// Invalid file or directory path
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TextorError>;

impl TextorError {
    /// Whether this error is isolated to a single file, meaning the run
    /// should continue with the remaining files.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            TextorError::Extraction { .. } | TextorError::UnsupportedFormat(_)
        )
    }
}
