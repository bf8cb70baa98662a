//! Text extraction from supported document formats
//!
//! The [`TextExtractor`] trait is the seam between the index pipeline and
//! format decoding, so tests can substitute a mock and future container
//! formats can plug in without touching the pipeline.

use crate::error::{Result, TextorError};
use std::path::Path;

/// Extensions the plain-text extractor can decode directly.
///
/// Container formats on the index allow-list (epub, docx, xlsx, ...) are
/// zip archives and need a real decoder; they surface as
/// `UnsupportedFormat` and the file is skipped until one exists.
const TEXT_EXTENSIONS: &[&str] = &[
    "txt", "html", "htm", "atom", "rss", "md", "xml", "xsl", "csv",
];

/// Converts a file of a supported format into raw text
pub trait TextExtractor {
    /// Extract the full text content of the file at `path`.
    ///
    /// Errors are per-file and recoverable: the caller logs them, skips
    /// the file for this run, and leaves its fingerprint uncommitted so
    /// the file is retried on the next run.
    fn extract(&self, path: &Path) -> Result<String>;
}

/// Extractor for text-based formats, reading the file as UTF-8
#[derive(Debug, Default)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    /// Create a new plain-text extractor
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        if !TEXT_EXTENSIONS.contains(&ext.as_str()) {
            return Err(TextorError::UnsupportedFormat(ext));
        }

        std::fs::read_to_string(path).map_err(|e| TextorError::Extraction {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_extract_plain_text() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "hello world").unwrap();

        let extractor = PlainTextExtractor::new();
        let text = extractor.extract(file.path()).unwrap();
        assert_eq!(text, "hello world\n");
    }

    #[test]
    fn test_unsupported_container_format() {
        let file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();

        let extractor = PlainTextExtractor::new();
        let err = extractor.extract(file.path()).unwrap_err();
        assert!(matches!(err, TextorError::UnsupportedFormat(ref ext) if ext == "docx"));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_missing_file_is_recoverable() {
        let extractor = PlainTextExtractor::new();
        let err = extractor
            .extract(Path::new("/nonexistent/file.txt"))
            .unwrap_err();
        assert!(matches!(err, TextorError::Extraction { .. }));
        assert!(err.is_recoverable());
    }
}
