//! # textor - incremental full-text index and search
//!
//! Builds an inverted index over a directory tree of documents and
//! answers multi-term AND queries with the set of files containing all
//! terms. Change detection is fingerprint-based: each run re-indexes
//! only files whose content hash changed since the last run.
//!
//! ## Example
//!
//! ```no_run
//! use textor::{Config, FingerprintStore, Indexer, InvertedIndex, PlainTextExtractor, QueryEngine};
//! use std::path::PathBuf;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::new(PathBuf::from("./docs"));
//!     config.ensure_data_dir()?;
//!
//!     let mut fingerprints = FingerprintStore::load(config.fingerprints_path())?;
//!     let mut index = InvertedIndex::load(config.tokens_path())?;
//!
//!     let indexer = Indexer::new(config, PlainTextExtractor::new());
//!     let stats = indexer.run(&mut fingerprints, &mut index)?;
//!     println!("{}", stats);
//!
//!     let engine = QueryEngine::new(&index);
//!     for file in engine.search(&["cat".into(), "mat".into()])? {
//!         println!("{}", file);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod extractor;
pub mod fingerprint;
pub mod index;
pub mod indexer;
pub mod query;
pub mod tokenizer;

// Re-export commonly used types
pub use config::{is_supported_file, Config, SUPPORTED_EXTENSIONS};
pub use error::{Result, TextorError};
pub use extractor::{PlainTextExtractor, TextExtractor};
pub use fingerprint::{hash_file, FileFingerprint, FileStatus, FingerprintStore};
pub use index::{InvertedIndex, TokenEntry};
pub use indexer::{IndexBuilder, Indexer, RunStats};
pub use query::QueryEngine;
