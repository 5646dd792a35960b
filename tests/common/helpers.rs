// Shared helpers for integration tests

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use quarry::core::error::{QuarryError, Result};
use quarry::{CatalogSource, Config, Record, Services};

/// Build services around a catalog file
pub fn create_test_services(catalog_path: &Path) -> Arc<Services> {
    let mut config = Config::default();
    config.catalog.index_path = catalog_path.to_path_buf();
    Arc::new(Services::new(config))
}

/// Catalog source that counts fetches and can be told to fail.
///
/// Used to verify the at-most-one-load contract of the catalog cache.
#[allow(dead_code)] // Used in catalog lifecycle tests
pub struct CountingSource {
    records: Vec<Record>,
    fetches: Arc<AtomicUsize>,
    fail_first: bool,
}

impl CountingSource {
    #[allow(dead_code)] // Used in catalog lifecycle tests
    pub fn new(records: Vec<Record>) -> (Self, Arc<AtomicUsize>) {
        let fetches = Arc::new(AtomicUsize::new(0));
        (
            Self {
                records,
                fetches: Arc::clone(&fetches),
                fail_first: false,
            },
            fetches,
        )
    }

    /// Fail the first fetch, succeed afterwards
    #[allow(dead_code)] // Used in catalog lifecycle tests
    pub fn failing_once(records: Vec<Record>) -> (Self, Arc<AtomicUsize>) {
        let (mut source, fetches) = Self::new(records);
        source.fail_first = true;
        (source, fetches)
    }
}

#[async_trait]
impl CatalogSource for CountingSource {
    async fn fetch(&self) -> Result<Vec<Record>> {
        let attempt = self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_first && attempt == 0 {
            return Err(QuarryError::CatalogLoadFailed(
                "simulated transient failure".to_string(),
            ));
        }
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        "counting-source".to_string()
    }
}
