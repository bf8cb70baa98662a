//! Multi-term AND queries over the inverted index
//!
//! Resolves a list of terms to the set of files containing all of them
//! via successive set intersection. Pure boolean AND: no ranking, no
//! partial matches.

use crate::error::{Result, TextorError};
use crate::index::InvertedIndex;
use crate::tokenizer::normalize;
use std::collections::BTreeSet;
use tracing::debug;

/// Resolves query terms against an inverted index
pub struct QueryEngine<'a> {
    index: &'a InvertedIndex,
}

impl<'a> QueryEngine<'a> {
    /// Create a query engine over an existing index
    pub fn new(index: &'a InvertedIndex) -> Self {
        Self { index }
    }

    /// Return the set of files containing every supplied term.
    ///
    /// Terms are uppercased and deduplicated first; an empty post-dedup
    /// list is an error. A file qualifies only if it appears in every
    /// term's file set; no matches is an empty set, not an error.
    pub fn search(&self, terms: &[String]) -> Result<BTreeSet<String>> {
        let normalized = normalize_terms(terms);

        if normalized.is_empty() {
            return Err(TextorError::NoTerms);
        }

        let mut result: Option<BTreeSet<String>> = None;

        for term in &normalized {
            let files = self.index.lookup(term)?;
            debug!("Term {} matches {} files", term, files.len());

            result = Some(match result {
                None => files,
                Some(acc) => acc.intersection(&files).cloned().collect(),
            });

            // Intersection with an empty set stays empty.
            if result.as_ref().is_some_and(|r| r.is_empty()) {
                break;
            }
        }

        Ok(result.unwrap_or_default())
    }
}

/// Uppercase and deduplicate query terms, preserving first-seen order
fn normalize_terms(terms: &[String]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    terms
        .iter()
        .map(|t| normalize(t))
        .filter(|t| !t.is_empty())
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_with(entries: &[(&str, &[&str])]) -> (tempfile::TempDir, InvertedIndex) {
        let dir = tempfile::tempdir().unwrap();
        let mut index = InvertedIndex::load(dir.path().join("tokens.json")).unwrap();
        for (token, files) in entries {
            for file in *files {
                index.merge(token, file).unwrap();
            }
        }
        (dir, index)
    }

    fn terms(input: &[&str]) -> Vec<String> {
        input.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_two_term_intersection() {
        let (_dir, index) = index_with(&[
            ("T1", &["A", "B", "C"]),
            ("T2", &["B", "C", "D"]),
        ]);
        let engine = QueryEngine::new(&index);

        let result = engine.search(&terms(&["T1", "T2"])).unwrap();
        let expected: BTreeSet<String> = ["B", "C"].iter().map(|s| s.to_string()).collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_single_term_returns_full_set() {
        let (_dir, index) = index_with(&[("T1", &["A", "B", "C"])]);
        let engine = QueryEngine::new(&index);

        let result = engine.search(&terms(&["T1"])).unwrap();
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_empty_terms_is_an_error() {
        let (_dir, index) = index_with(&[]);
        let engine = QueryEngine::new(&index);

        let err = engine.search(&[]).unwrap_err();
        assert!(matches!(err, TextorError::NoTerms));
    }

    #[test]
    fn test_unknown_term_empties_the_result() {
        let (_dir, index) = index_with(&[("T1", &["A", "B"])]);
        let engine = QueryEngine::new(&index);

        let result = engine.search(&terms(&["T1", "MISSING"])).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_no_matching_files_is_empty_not_error() {
        let (_dir, index) = index_with(&[("T1", &["A"]), ("T2", &["B"])]);
        let engine = QueryEngine::new(&index);

        let result = engine.search(&terms(&["T1", "T2"])).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_terms_are_case_normalized_and_deduped() {
        let (_dir, index) = index_with(&[("CAT", &["A", "B"])]);
        let engine = QueryEngine::new(&index);

        // Lowercase query, repeated terms: one lookup key, full set back.
        let result = engine.search(&terms(&["cat", "Cat", "CAT"])).unwrap();
        assert_eq!(result.len(), 2);
    }
}
