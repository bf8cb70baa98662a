//! Configuration types and constants for textor
//!
//! Defines the run configuration, data-directory layout, and the
//! supported document-format allow-list.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for an indexing + query run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Root directory being indexed
    pub root_path: PathBuf,
    /// Directory where the fingerprint and token collections live
    pub data_dir: PathBuf,
    /// Maximum file size to index (bytes)
    pub max_file_size: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_path: PathBuf::from("."),
            data_dir: PathBuf::from("data"),
            max_file_size: 50 * 1024 * 1024, // 50 MB
        }
    }
}

impl Config {
    /// Create a new config for the given root path
    pub fn new(root_path: PathBuf) -> Self {
        Self {
            root_path,
            ..Default::default()
        }
    }

    /// Set the data directory
    pub fn with_data_dir(mut self, data_dir: PathBuf) -> Self {
        self.data_dir = data_dir;
        self
    }

    /// Get path to the fingerprint collection file
    pub fn fingerprints_path(&self) -> PathBuf {
        self.data_dir.join("fingerprints.json")
    }

    /// Get path to the token collection file
    pub fn tokens_path(&self) -> PathBuf {
        self.data_dir.join("tokens.json")
    }

    /// Create the data directory if it does not exist yet
    pub fn ensure_data_dir(&self) -> crate::error::Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }
}

/// File extensions that should be indexed (case-insensitive)
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    // Plain text and markup
    "txt", "html", "htm", "md", "xml", "xsl",
    // Feeds
    "atom", "rss",
    // Books
    "epub",
    // Office documents
    "docx", "odt", "ott",
    // Spreadsheets
    "xls", "xlsx", "xlsb", "xlsm", "xltx", "csv", "ods", "ots",
    // Presentations
    "pptx", "potx", "odp", "otp",
    // Drawings
    "odg", "otg",
];

/// Check if a file should be indexed based on its extension
pub fn is_supported_file(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_is_supported_file() {
        assert!(is_supported_file(Path::new("notes.txt")));
        assert!(is_supported_file(Path::new("page.HTML")));
        assert!(is_supported_file(Path::new("report.DocX")));
        assert!(is_supported_file(Path::new("sheet.csv")));
        assert!(!is_supported_file(Path::new("image.png")));
        assert!(!is_supported_file(Path::new("binary.exe")));
        assert!(!is_supported_file(Path::new("no_extension")));
    }

    #[test]
    fn test_data_paths() {
        let config = Config::new(PathBuf::from("/tmp/docs"))
            .with_data_dir(PathBuf::from("/tmp/state"));
        assert_eq!(
            config.fingerprints_path(),
            PathBuf::from("/tmp/state/fingerprints.json")
        );
        assert_eq!(config.tokens_path(), PathBuf::from("/tmp/state/tokens.json"));
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.max_file_size, 50 * 1024 * 1024);
    }
}
