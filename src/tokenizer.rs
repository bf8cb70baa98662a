//! Tokenization and normalization of extracted text
//!
//! Produces the distinct, sorted token set a single document contributes
//! to the inverted index. Matching is case-insensitive because both the
//! indexed text and query terms pass through [`normalize`].

/// Uppercase a term so index keys and query terms compare equal
/// regardless of source casing.
pub fn normalize(term: &str) -> String {
    term.to_uppercase()
}

/// Split normalized text into the distinct tokens the file contributes
/// to the index: alphanumeric word tokens, longer than one character,
/// not purely numeric, deduplicated and sorted.
///
/// Sorting is not required for correctness; it makes batched merges
/// reproducible.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens: Vec<String> = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() > 1)
        .filter(|t| !is_numeric(t))
        .map(|t| t.to_string())
        .collect();

    tokens.sort();
    tokens.dedup();
    tokens
}

/// True if the token consists entirely of ASCII digits
fn is_numeric(token: &str) -> bool {
    token.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_non_alphanumeric() {
        let tokens = tokenize("HELLO, WORLD! FOO-BAR");
        assert_eq!(tokens, vec!["BAR", "FOO", "HELLO", "WORLD"]);
    }

    #[test]
    fn test_drops_single_character_tokens() {
        let tokens = tokenize("A BE C DE");
        assert_eq!(tokens, vec!["BE", "DE"]);
    }

    #[test]
    fn test_drops_purely_numeric_tokens() {
        let tokens = tokenize("YEAR 2024 REVISION 17 V2");
        assert_eq!(tokens, vec!["REVISION", "V2", "YEAR"]);
    }

    #[test]
    fn test_dedup_and_sort() {
        let tokens = tokenize("ZEBRA APPLE ZEBRA APPLE ZEBRA");
        assert_eq!(tokens, vec!["APPLE", "ZEBRA"]);
    }

    #[test]
    fn test_normalize_case_folds() {
        assert_eq!(normalize("Cat"), "CAT");
        assert_eq!(normalize("cat"), "CAT");
        assert_eq!(normalize("CAT"), "CAT");
    }

    #[test]
    fn test_tokenize_normalized_text_matches_query_case() {
        // "cat" in source text and "CAT" as a query term must meet at
        // the same index key.
        let tokens = tokenize(&normalize("the cat sat"));
        assert!(tokens.contains(&normalize("CAT")));
    }

    #[test]
    fn test_empty_text() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \n\t ").is_empty());
    }
}
