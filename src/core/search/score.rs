//! Relevance scoring and result ranking.
//!
//! Scores accumulate per token per field: a single token hitting both
//! the name and a keyword contributes both weights (sum, not max).
//! Matching is substring containment over normalized text, not
//! whole-word matching.

use crate::core::search::query::{normalize_list, normalize_str};
use crate::core::types::Record;

/// Field weights, highest-signal first
pub const NAME_WEIGHT: u32 = 7;
pub const KEYWORD_WEIGHT: u32 = 5;
pub const AUTHOR_WEIGHT: u32 = 5;
pub const LOCATION_WEIGHT: u32 = 3;
pub const ABSTRACT_WEIGHT: u32 = 2;
pub const CATEGORY_WEIGHT: u32 = 1;

/// Score assigned to every record when the query has no tokens, so an
/// empty query with active filters still returns the filtered set.
pub const EMPTY_QUERY_SCORE: u32 = 2;

/// Minimum score a record must reach to appear in results. A lone
/// category hit (weight 1) is not enough.
pub const MIN_SCORE: u32 = 2;

/// A record with its relevance score, alive only within one pipeline run.
#[derive(Debug)]
pub struct Scored<'a> {
    pub record: &'a Record,
    pub score: u32,
}

/// Score the filtered candidates against the query tokens.
pub fn score<'a>(records: Vec<&'a Record>, tokens: &[String]) -> Vec<Scored<'a>> {
    if tokens.is_empty() {
        return records
            .into_iter()
            .map(|record| Scored {
                record,
                score: EMPTY_QUERY_SCORE,
            })
            .collect();
    }

    records
        .into_iter()
        .map(|record| Scored {
            record,
            score: score_one(record, tokens),
        })
        .collect()
}

fn score_one(record: &Record, tokens: &[String]) -> u32 {
    let name = normalize_str(&record.name);
    let keywords = normalize_list(&record.keywords);
    let abstract_text = normalize_str(&record.abstract_text);
    let location = normalize_str(&record.location);
    let author = normalize_str(&record.author_name);
    let categories = normalize_list(&record.categories_list);

    let mut total = 0;
    for token in tokens {
        let token = token.as_str();
        if name.contains(token) {
            total += NAME_WEIGHT;
        }
        if keywords.iter().any(|k| k.contains(token)) {
            total += KEYWORD_WEIGHT;
        }
        if author.contains(token) {
            total += AUTHOR_WEIGHT;
        }
        if location.contains(token) {
            total += LOCATION_WEIGHT;
        }
        if abstract_text.contains(token) {
            total += ABSTRACT_WEIGHT;
        }
        if categories.iter().any(|c| c.contains(token)) {
            total += CATEGORY_WEIGHT;
        }
    }
    total
}

/// Apply the score threshold, rank, and strip scores.
///
/// The sort is stable, so records with equal scores keep the relative
/// order they arrived in from the filter engine.
pub fn finalize(scored: Vec<Scored<'_>>) -> Vec<Record> {
    let mut kept: Vec<Scored<'_>> = scored.into_iter().filter(|s| s.score >= MIN_SCORE).collect();
    kept.sort_by(|a, b| b.score.cmp(&a.score));
    kept.into_iter().map(|s| s.record.clone()).collect()
}
