//! Content fingerprints and change detection
//!
//! One SHA-256 record per known file path, persisted as JSON. Digest
//! equality is the sole staleness signal; mtime and size are ignored.

use crate::error::{Result, TextorError};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Content digest of a file at last successful indexing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileFingerprint {
    /// File path, unique per record
    pub path: String,
    /// SHA-256 digest of the file bytes, hex-encoded
    pub hash: String,
}

/// Outcome of comparing a file's current content against its fingerprint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// No fingerprint exists for this path
    New,
    /// A fingerprint exists with a different hash
    Modified,
    /// A fingerprint exists with the same hash
    Unchanged,
}

/// Persistent collection of file fingerprints
///
/// Invariant: at most one record per path. The on-disk file can
/// physically hold duplicates (e.g. after external corruption), so every
/// keyed read re-checks and fails loudly instead of picking one.
pub struct FingerprintStore {
    records: Vec<FileFingerprint>,
    store_path: PathBuf,
}

impl FingerprintStore {
    /// Load the collection from disk, starting empty if absent
    pub fn load(store_path: PathBuf) -> Result<Self> {
        let records = if store_path.exists() {
            let content = std::fs::read_to_string(&store_path)?;
            serde_json::from_str(&content)?
        } else {
            Vec::new()
        };

        debug!("Loaded {} fingerprints from {:?}", records.len(), store_path);

        Ok(Self {
            records,
            store_path,
        })
    }

    /// Save the collection to disk
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.records)?;
        std::fs::write(&self.store_path, json)?;
        Ok(())
    }

    /// Remove fingerprints for files that no longer exist on disk.
    ///
    /// Runs as a single batch that completes (records removed and
    /// persisted) before any classification starts, so a stale
    /// fingerprint can never shadow a re-created file mid-run.
    pub fn reconcile(&mut self) -> Result<Vec<String>> {
        let mut removed = Vec::new();

        self.records.retain(|record| {
            if Path::new(&record.path).exists() {
                true
            } else {
                removed.push(record.path.clone());
                false
            }
        });

        if !removed.is_empty() {
            info!("Reconciled {} deleted files", removed.len());
            for path in &removed {
                debug!("Removed stale fingerprint: {}", path);
            }
            self.save()?;
        }

        Ok(removed)
    }

    /// Compare `current_hash` against the stored fingerprint for `path`
    pub fn classify(&self, path: &str, current_hash: &str) -> Result<FileStatus> {
        let mut matches = self.records.iter().filter(|r| r.path == path);

        let status = match matches.next() {
            None => FileStatus::New,
            Some(record) => {
                if matches.next().is_some() {
                    return Err(TextorError::DuplicateFingerprint(path.to_string()));
                }
                if record.hash == current_hash {
                    FileStatus::Unchanged
                } else {
                    FileStatus::Modified
                }
            }
        };

        Ok(status)
    }

    /// Upsert the fingerprint for `path` and persist the collection.
    ///
    /// Must be called only after the file's index merges succeeded, so a
    /// crash between extraction and commit re-classifies the file as
    /// New/Modified on the next run.
    pub fn commit(&mut self, path: &str, hash: &str) -> Result<()> {
        match self.records.iter_mut().find(|r| r.path == path) {
            Some(record) => record.hash = hash.to_string(),
            None => self.records.push(FileFingerprint {
                path: path.to_string(),
                hash: hash.to_string(),
            }),
        }
        self.save()
    }

    /// Number of known fingerprints
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no fingerprints are known
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Stored hash for `path`, if any (test and stats visibility)
    pub fn get(&self, path: &str) -> Option<&str> {
        self.records
            .iter()
            .find(|r| r.path == path)
            .map(|r| r.hash.as_str())
    }
}

/// Compute the hex-encoded SHA-256 digest of a file's bytes
pub fn hash_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}
