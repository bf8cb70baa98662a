//! File discovery and incremental index updates
//!
//! Walks the document tree, detects new/changed files via content
//! fingerprints, and merges the token contributions of the delta into
//! the inverted index.

use crate::config::{is_supported_file, Config};
use crate::error::{Result, TextorError};
use crate::extractor::TextExtractor;
use crate::fingerprint::{hash_file, FileStatus, FingerprintStore};
use crate::index::InvertedIndex;
use crate::tokenizer::{normalize, tokenize};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// A discovered file with its current content hash
#[derive(Debug)]
struct CandidateFile {
    path: String,
    hash: String,
}

/// Derives a file's token contributions and merges them into the index
pub struct IndexBuilder<E: TextExtractor> {
    extractor: E,
}

impl<E: TextExtractor> IndexBuilder<E> {
    /// Create a builder around the given extractor
    pub fn new(extractor: E) -> Self {
        Self { extractor }
    }

    /// Index a single file classified as New or Modified.
    ///
    /// Extracts the text, uppercases it, tokenizes, and merges each
    /// distinct token with `path` into the index. Merging is idempotent,
    /// so a retry after partial failure cannot duplicate membership.
    /// The caller commits the fingerprint only after this returns Ok.
    pub fn index_file(&self, path: &str, index: &mut InvertedIndex) -> Result<()> {
        let text = self.extractor.extract(Path::new(path))?;
        let tokens = tokenize(&normalize(&text));

        debug!("{}: {} distinct tokens", path, tokens.len());

        for token in &tokens {
            index.merge(token, path)?;
        }

        Ok(())
    }
}

/// Orchestrates one scan-then-commit pass over the document tree
pub struct Indexer<E: TextExtractor> {
    config: Config,
    builder: IndexBuilder<E>,
}

impl<E: TextExtractor> Indexer<E> {
    /// Create an indexer for the configured root directory
    pub fn new(config: Config, extractor: E) -> Self {
        Self {
            config,
            builder: IndexBuilder::new(extractor),
        }
    }

    /// Run one incremental pass: reconcile deleted files, classify every
    /// discovered file against its fingerprint, index the delta, and
    /// commit fingerprints for successfully indexed files.
    pub fn run(
        &self,
        fingerprints: &mut FingerprintStore,
        index: &mut InvertedIndex,
    ) -> Result<RunStats> {
        if !self.config.root_path.is_dir() {
            return Err(TextorError::InvalidPath(format!(
                "{} is not a directory",
                self.config.root_path.display()
            )));
        }

        info!("Indexing {:?}", self.config.root_path);

        let mut stats = RunStats::default();

        // Reconciliation is a single batch completing before any
        // classification, so a stale fingerprint cannot shadow a file
        // re-created mid-run.
        stats.reconciled = fingerprints.reconcile()?.len();

        let candidates = self.discover_files()?;
        if candidates.is_empty() {
            info!("No indexable files found");
            return Ok(stats);
        }

        let pb = ProgressBar::new(candidates.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} files")
                .unwrap()
                .progress_chars("=>-"),
        );

        for candidate in &candidates {
            pb.inc(1);

            let status = fingerprints.classify(&candidate.path, &candidate.hash)?;

            match status {
                FileStatus::Unchanged => {
                    debug!("Up to date: {}", candidate.path);
                    stats.unchanged += 1;
                    continue;
                }
                FileStatus::New => debug!("Indexing new file: {}", candidate.path),
                FileStatus::Modified => debug!("Re-indexing changed file: {}", candidate.path),
            }

            match self.builder.index_file(&candidate.path, index) {
                Ok(()) => {
                    // Token merges are durable before the fingerprint
                    // commit; a crash in between re-indexes the file
                    // next run instead of silently losing tokens.
                    index.save()?;
                    fingerprints.commit(&candidate.path, &candidate.hash)?;
                    if status == FileStatus::New {
                        stats.added += 1;
                    } else {
                        stats.updated += 1;
                    }
                }
                Err(e) if e.is_recoverable() => {
                    // Fingerprint stays uncommitted, so the file is
                    // retried on the next run.
                    warn!("Skipping {}: {}", candidate.path, e);
                    stats.skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        pb.finish_and_clear();
        info!("{}", stats);

        Ok(stats)
    }

    /// Discover supported files under the root and hash their content.
    ///
    /// Symlinks are not followed, which doubles as cycle protection.
    /// Hashing is I/O-bound and independent per file, so it runs in
    /// parallel; everything after classification stays sequential.
    fn discover_files(&self) -> Result<Vec<CandidateFile>> {
        let paths: Vec<PathBuf> = WalkDir::new(&self.config.root_path)
            .follow_links(false)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| is_supported_file(entry.path()))
            .filter(|entry| {
                entry
                    .metadata()
                    .map(|m| m.len() <= self.config.max_file_size)
                    .unwrap_or(false)
            })
            .map(|entry| entry.into_path())
            .collect();

        let mut candidates: Vec<CandidateFile> = paths
            .par_iter()
            .filter_map(|path| match hash_file(path) {
                Ok(hash) => Some(CandidateFile {
                    path: path.display().to_string(),
                    hash,
                }),
                Err(e) => {
                    warn!("Cannot hash {:?}: {}", path, e);
                    None
                }
            })
            .collect();

        // Deterministic processing order across runs.
        candidates.sort_by(|a, b| a.path.cmp(&b.path));

        info!("Discovered {} indexable files", candidates.len());

        Ok(candidates)
    }
}

/// Statistics for one indexing pass
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Number of new files indexed
    pub added: usize,
    /// Number of changed files re-indexed
    pub updated: usize,
    /// Number of files left untouched (hash matched)
    pub unchanged: usize,
    /// Number of files skipped due to extraction failures
    pub skipped: usize,
    /// Number of stale fingerprints purged for deleted files
    pub reconciled: usize,
}

impl std::fmt::Display for RunStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Added: {}, Updated: {}, Unchanged: {}, Skipped: {}, Reconciled: {}",
            self.added, self.updated, self.unchanged, self.skipped, self.reconciled
        )
    }
}
