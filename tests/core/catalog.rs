//! Catalog loading and cache lifecycle tests

use std::sync::atomic::Ordering;
use std::sync::Arc;

use crate::common::{sample_records, CountingSource, TestCatalog};
use quarry::{CatalogCache, FileCatalogSource};

#[tokio::test]
async fn allowed_gate_applied_at_load() {
    let catalog_file = TestCatalog::sample();
    let cache = CatalogCache::new(Box::new(FileCatalogSource::new(catalog_file.path.clone())));

    let catalog = cache.get_or_load().await.unwrap();

    assert_eq!(catalog.total_in_source(), 6);
    assert_eq!(catalog.len(), 5);
    assert!(catalog.records().iter().all(|r| r.allowed_in_database));
    assert!(!catalog.records().iter().any(|r| r.name == "Withheld Survey"));
}

#[tokio::test]
async fn load_happens_at_most_once() {
    let (source, fetches) = CountingSource::new(sample_records());
    let cache = Arc::new(CatalogCache::new(Box::new(source)));

    // Concurrent first callers share one in-flight load
    let (a, b, c) = tokio::join!(
        cache.get_or_load(),
        cache.get_or_load(),
        cache.get_or_load()
    );

    let a = a.unwrap();
    assert!(Arc::ptr_eq(&a, &b.unwrap()));
    assert!(Arc::ptr_eq(&a, &c.unwrap()));
    assert_eq!(fetches.load(Ordering::SeqCst), 1);

    // And later callers hit the cache
    cache.get_or_load().await.unwrap();
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn failed_load_propagates_and_can_retry() {
    let (source, fetches) = CountingSource::failing_once(sample_records());
    let cache = CatalogCache::new(Box::new(source));

    // First load fails and nothing is cached
    assert!(cache.get_or_load().await.is_err());
    assert!(!cache.is_loaded());

    // A later call retries from scratch
    let catalog = cache.get_or_load().await.unwrap();
    assert_eq!(catalog.len(), 5);
    assert_eq!(fetches.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn catalog_survives_source_file_deletion() {
    let catalog_file = TestCatalog::sample();
    let cache = CatalogCache::new(Box::new(FileCatalogSource::new(catalog_file.path.clone())));

    let first = cache.get_or_load().await.unwrap();

    // The cache, not the file, serves subsequent calls
    std::fs::remove_file(&catalog_file.path).unwrap();
    let second = cache.get_or_load().await.unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}
