//! Search pipeline: filter, score, rank.
//!
//! [`SearchService`] orchestrates one search request:
//! memoized catalog load -> query preprocessing -> filter engine ->
//! relevance scorer -> finalizer -> limit clamp. The pipeline is a pure
//! function of the request and the loaded catalog; nothing is retained
//! between invocations.

pub mod filter;
pub mod query;
pub mod score;
pub mod snippet;

pub use filter::{parse_date_lenient, BoolFilter, DateFilter, DateFilterKind, FilterSpec};
pub use query::{normalize_list, normalize_str, preprocess_query};
pub use score::{finalize, Scored, EMPTY_QUERY_SCORE, MIN_SCORE};
pub use snippet::{snippet, SNIPPET_LEN};

use std::sync::Arc;
use std::time::Instant;

use crate::core::catalog::CatalogCache;
use crate::core::error::Result;
use crate::core::types::{Record, SearchRequest, SearchResponse};

/// Faceted search service over the cached catalog
pub struct SearchService {
    catalog: Arc<CatalogCache>,
    default_limit: usize,
    max_limit: usize,
}

impl SearchService {
    /// Create a new search service
    pub fn new(catalog: Arc<CatalogCache>, default_limit: usize, max_limit: usize) -> Self {
        Self {
            catalog,
            default_limit,
            max_limit,
        }
    }

    /// Execute a search request
    pub async fn search(&self, request: SearchRequest) -> Result<SearchResponse> {
        let start = Instant::now();

        let catalog = self.catalog.get_or_load().await?;

        let tokens = query::preprocess_query(&request.query);
        let candidates = filter::filter(catalog.records(), &request.filters);
        let scored = score::score(candidates, &tokens);
        let mut results = score::finalize(scored);

        let limit = request.limit.unwrap_or(self.default_limit).min(self.max_limit);
        results.truncate(limit);

        let duration_ms = start.elapsed().as_millis() as u64;
        let count = results.len();

        tracing::debug!(
            query = %request.query,
            tokens = tokens.len(),
            results = count,
            duration_ms,
            "Search completed"
        );

        Ok(SearchResponse {
            query: request.query,
            results,
            count,
            duration_ms,
        })
    }

    /// Run the pure pipeline over an explicit record set.
    ///
    /// This is the filter -> score -> finalize composition without the
    /// catalog cache or limits; the service and the test harness share
    /// it.
    pub fn run_pipeline(records: &[Record], query_text: &str, spec: &FilterSpec) -> Vec<Record> {
        let tokens = query::preprocess_query(query_text);
        let candidates = filter::filter(records, spec);
        score::finalize(score::score(candidates, &tokens))
    }
}
