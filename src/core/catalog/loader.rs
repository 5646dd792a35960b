//! Catalog loading and the process-wide memoized cache.
//!
//! The catalog is read once per process. Concurrent first callers share
//! a single in-flight load; a failed load caches nothing, so a later
//! call retries from scratch rather than serving stale or partial data.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::core::error::{QuarryError, Result};
use crate::core::types::Record;

/// Where raw catalog records come from.
///
/// The pipeline only ever sees the gated [`Catalog`]; sources return
/// the raw record array as stored.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch and parse the raw record array
    async fn fetch(&self) -> Result<Vec<Record>>;

    /// Human-readable description of where records come from
    fn describe(&self) -> String;
}

/// Catalog source backed by a JSON file on disk
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn fetch(&self) -> Result<Vec<Record>> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            QuarryError::CatalogLoadFailed(format!("{}: {e}", self.path.display()))
        })?;

        let records: Vec<Record> = serde_json::from_str(&raw).map_err(|e| {
            QuarryError::CatalogParseFailed(format!("{}: {e}", self.path.display()))
        })?;

        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// The loaded, gated record set for this process.
///
/// Records with `allowed_in_database == false` are dropped here and are
/// invisible to every downstream component.
#[derive(Debug)]
pub struct Catalog {
    records: Vec<Record>,
    total_in_source: usize,
    source: String,
}

impl Catalog {
    /// Apply the allowed gate to a raw record array
    pub fn from_raw(raw: Vec<Record>, source: String) -> Self {
        let total_in_source = raw.len();
        let records: Vec<Record> = raw.into_iter().filter(|r| r.allowed_in_database).collect();

        tracing::info!(
            source = %source,
            total = total_in_source,
            allowed = records.len(),
            "Catalog loaded"
        );

        Self {
            records,
            total_in_source,
            source,
        }
    }

    /// Records visible to search
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records visible to search
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in the source before the gate was applied
    pub fn total_in_source(&self) -> usize {
        self.total_in_source
    }

    /// Where the catalog was loaded from
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Memoized, at-most-one catalog load.
///
/// Lifecycle: uninitialized -> loading (shared in-flight fetch) ->
/// loaded. The catalog is only reachable through [`get_or_load`], so
/// nothing can mutate it after the load completes.
///
/// [`get_or_load`]: CatalogCache::get_or_load
pub struct CatalogCache {
    source: Box<dyn CatalogSource>,
    cell: OnceCell<Arc<Catalog>>,
}

impl CatalogCache {
    pub fn new(source: Box<dyn CatalogSource>) -> Self {
        Self {
            source,
            cell: OnceCell::new(),
        }
    }

    /// Get the cached catalog, loading it on first use.
    ///
    /// Concurrent callers before the first load completes await the
    /// same fetch; exactly one fetch reaches the source. On failure the
    /// cache stays uninitialized and the error propagates to every
    /// waiting caller.
    pub async fn get_or_load(&self) -> Result<Arc<Catalog>> {
        let catalog = self
            .cell
            .get_or_try_init(|| async {
                let raw = self.source.fetch().await?;
                Ok::<_, QuarryError>(Arc::new(Catalog::from_raw(raw, self.source.describe())))
            })
            .await?;

        Ok(Arc::clone(catalog))
    }

    /// Whether the catalog has finished loading
    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }
}
