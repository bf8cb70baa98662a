//! Persistent inverted index mapping tokens to file sets
//!
//! Each token owns the set of file paths known to contain it. Merging is
//! a set-union upsert, so re-indexing a previously-seen file is
//! idempotent and safe to retry after partial failures. The index never
//! subtracts files; stale memberships survive deletion and re-indexing
//! (complete re-derivation is out of scope for the running index).

use crate::error::{Result, TextorError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::debug;

/// One normalized token and the files known to contain it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenEntry {
    /// Normalized term, unique per entry
    pub token: String,
    /// Files containing the token; duplicates forbidden, order irrelevant
    pub files: BTreeSet<String>,
}

/// Persistent collection of token entries
///
/// Invariant: at most one entry per token, checked at every keyed read
/// against the raw record list rather than assumed.
pub struct InvertedIndex {
    entries: Vec<TokenEntry>,
    store_path: PathBuf,
}

impl InvertedIndex {
    /// Load the collection from disk, starting empty if absent
    pub fn load(store_path: PathBuf) -> Result<Self> {
        let entries = if store_path.exists() {
            let content = std::fs::read_to_string(&store_path)?;
            serde_json::from_str(&content)?
        } else {
            Vec::new()
        };

        debug!("Loaded {} token entries from {:?}", entries.len(), store_path);

        Ok(Self {
            entries,
            store_path,
        })
    }

    /// Save the collection to disk
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.store_path, json)?;
        Ok(())
    }

    /// Union `path` into the file set for `token`, creating the entry
    /// with `{path}` if absent. Re-adding a present path is a no-op.
    pub fn merge(&mut self, token: &str, path: &str) -> Result<()> {
        self.check_unique(token)?;

        match self.entries.iter_mut().find(|e| e.token == token) {
            Some(entry) => {
                entry.files.insert(path.to_string());
            }
            None => {
                let mut files = BTreeSet::new();
                files.insert(path.to_string());
                self.entries.push(TokenEntry {
                    token: token.to_string(),
                    files,
                });
            }
        }

        Ok(())
    }

    /// File set for an exact, case-normalized token; empty when absent
    pub fn lookup(&self, token: &str) -> Result<BTreeSet<String>> {
        self.check_unique(token)?;

        Ok(self
            .entries
            .iter()
            .find(|e| e.token == token)
            .map(|e| e.files.clone())
            .unwrap_or_default())
    }

    /// Number of distinct tokens in the index
    pub fn token_count(&self) -> usize {
        self.entries.len()
    }

    fn check_unique(&self, token: &str) -> Result<()> {
        if self.entries.iter().filter(|e| e.token == token).count() > 1 {
            return Err(TextorError::DuplicateToken(token.to_string()));
        }
        Ok(())
    }
}
