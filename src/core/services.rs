//! Unified service container for Quarry
//!
//! Provides shared access to all core services.

use crate::core::catalog::{CatalogCache, FileCatalogSource, Vocabulary};
use crate::core::config::Config;
use crate::core::error::{QuarryError, Result};
use crate::core::search::SearchService;
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Memoized catalog cache (at-most-one load per process)
    pub catalog: Arc<CatalogCache>,

    /// Search service running the filter/score/rank pipeline
    pub search: Arc<SearchService>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Self {
        let source = FileCatalogSource::new(config.catalog.index_path.clone());
        let catalog = Arc::new(CatalogCache::new(Box::new(source)));

        let search = Arc::new(SearchService::new(
            Arc::clone(&catalog),
            config.search.default_limit,
            config.search.max_limit,
        ));

        Self {
            catalog,
            search,
            config: Arc::new(config),
        }
    }

    /// Load the filter-option vocabulary, if one is configured.
    ///
    /// The vocabulary is advisory and small, so it is read per call
    /// rather than cached.
    pub async fn load_vocabulary(&self) -> Result<Vocabulary> {
        match &self.config.catalog.vocabulary_path {
            Some(path) => Vocabulary::load(path).await,
            None => Err(QuarryError::VocabularyNotConfigured),
        }
    }
}
