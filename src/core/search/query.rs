//! Query preprocessing and shared text normalization.
//!
//! Every string comparison in the pipeline is case-insensitive over
//! trimmed input, so the normalization helpers live here and are used
//! by both the filter engine and the scorer.

use once_cell::sync::Lazy;
use regex::Regex;

/// Queries are truncated to this many characters before tokenization.
pub const MAX_QUERY_CHARS: usize = 100;

/// At most this many whitespace-delimited tokens are scored.
pub const MAX_QUERY_TOKENS: usize = 32;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalize a string for comparison: trimmed and lowercased.
pub fn normalize_str(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Normalize a sequence of strings for comparison.
pub fn normalize_list(values: &[String]) -> Vec<String> {
    values.iter().map(|v| normalize_str(v)).collect()
}

/// Clean and tokenize a search query.
///
/// The query is trimmed, lowercased, and truncated to
/// [`MAX_QUERY_CHARS`] characters (never splitting a code point), then
/// split on whitespace into at most [`MAX_QUERY_TOKENS`] tokens.
///
/// # Examples
///
/// ```
/// use quarry::core::search::preprocess_query;
///
/// assert_eq!(preprocess_query("  Ocean  Temperature "), vec!["ocean", "temperature"]);
/// assert!(preprocess_query("   ").is_empty());
/// ```
pub fn preprocess_query(query: &str) -> Vec<String> {
    let cleaned: String = normalize_str(query).chars().take(MAX_QUERY_CHARS).collect();

    WHITESPACE
        .split(&cleaned)
        .filter(|t| !t.is_empty())
        .take(MAX_QUERY_TOKENS)
        .map(|t| t.to_string())
        .collect()
}
