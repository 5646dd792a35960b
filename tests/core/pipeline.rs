//! End-to-end pipeline contract tests
//!
//! These pin the observable behavior of filter -> score -> finalize:
//! ordering, thresholds, sentinel handling, and conjunction semantics.

use std::collections::HashSet;

use crate::common::{create_test_services, sample_records, TestCatalog};
use quarry::core::search::filter::filter;
use quarry::core::search::{BoolFilter, DateFilter, FilterSpec, SearchService};
use quarry::{RecordId, SearchRequest};

fn spec() -> FilterSpec {
    FilterSpec::default()
}

#[tokio::test]
async fn search_is_idempotent() {
    let catalog_file = TestCatalog::sample();
    let services = create_test_services(&catalog_file.path);

    let request = SearchRequest {
        query: "ocean climate".to_string(),
        filters: FilterSpec {
            category: vec!["environment".to_string()],
            ..spec()
        },
        limit: None,
    };

    let first = services.search.search(request.clone()).await.unwrap();
    let second = services.search.search(request).await.unwrap();

    assert_eq!(first.results, second.results);
}

#[test]
fn filter_is_monotonic() {
    let records = sample_records();
    let all_ids: HashSet<RecordId> = records.iter().map(|r| r.id.clone()).collect();

    let specs = [
        FilterSpec {
            category: vec!["environment".to_string()],
            ..spec()
        },
        FilterSpec {
            publicly_available: BoolFilter::Only(true),
            location: vec!["berlin".to_string()],
            ..spec()
        },
        FilterSpec {
            collection_start: DateFilter::after("2019-01-01"),
            ..spec()
        },
    ];

    for s in specs {
        let kept = filter(&records, &s);
        assert!(kept.iter().all(|r| all_ids.contains(&r.id)));
        assert!(kept.len() <= records.len());
    }
}

#[test]
fn no_constraint_spec_keeps_everything_in_order() {
    let records = sample_records();
    let kept = filter(&records, &spec());

    assert_eq!(kept.len(), records.len());
    for (kept_record, original) in kept.iter().zip(records.iter()) {
        assert_eq!(kept_record.id, original.id);
    }
}

#[tokio::test]
async fn empty_query_returns_filtered_set_in_catalog_order() {
    let catalog_file = TestCatalog::sample();
    let services = create_test_services(&catalog_file.path);

    let response = services
        .search
        .search(SearchRequest {
            query: String::new(),
            filters: FilterSpec {
                location: vec!["berlin".to_string()],
                ..spec()
            },
            limit: None,
        })
        .await
        .unwrap();
    assert_eq!(response.count, 2);
    assert_eq!(response.results[0].name, "Urban Air Quality");
    assert_eq!(response.results[1].name, "Hospital Admissions");
}

#[tokio::test]
async fn worked_example_scores_and_ranks() {
    let catalog_file = TestCatalog::sample();
    let services = create_test_services(&catalog_file.path);

    // "ocean": record 1 hits name (7) + keywords (5) = 12.
    // Coral Bleaching Survey hits keywords (5) + author "M. Ocean" (5) = 10.
    let response = services
        .search
        .search(SearchRequest {
            query: "ocean".to_string(),
            ..SearchRequest::default()
        })
        .await
        .unwrap();

    assert_eq!(response.results[0].name, "Ocean Temperature");
    assert!(response
        .results
        .iter()
        .any(|r| r.name == "Coral Bleaching Survey"));
    // the gated-out record also matches "ocean" but must not appear
    assert!(!response.results.iter().any(|r| r.name == "Withheld Survey"));
}

#[test]
fn threshold_excludes_category_only_match() {
    // "health" appears only in categories_list for Urban Air Quality
    // (score 1) but in keywords + categories for Hospital Admissions (6).
    let records = sample_records();
    let results = SearchService::run_pipeline(&records, "health", &spec());

    assert!(!results.iter().any(|r| r.name == "Urban Air Quality"));
    assert!(results.iter().any(|r| r.name == "Hospital Admissions"));
}

#[test]
fn threshold_includes_location_only_match() {
    // "berlin" hits only the location field (score 3) for both Berlin
    // records: 3 >= 2, so they stay.
    let records = sample_records();
    let results = SearchService::run_pipeline(&records, "berlin", &spec());

    assert_eq!(results.len(), 2);
}

#[test]
fn unparseable_record_date_never_excludes() {
    // Urban Air Quality has collection_start "not-a-date"
    let records = sample_records();
    let s = FilterSpec {
        collection_start: DateFilter::after("2020-01-01"),
        ..spec()
    };

    let kept = filter(&records, &s);
    assert!(kept.iter().any(|r| r.name == "Urban Air Quality"));
    // parseable dates still filter: Glacier Retreat started 2015
    assert!(!kept.iter().any(|r| r.name == "Glacier Retreat"));
}

#[test]
fn conjunction_overrides_score() {
    // Ocean Temperature passes category=environment but fails
    // location=arctic; no score can bring it back.
    let records = sample_records();
    let s = FilterSpec {
        category: vec!["environment".to_string()],
        location: vec!["arctic".to_string()],
        ..spec()
    };

    let results = SearchService::run_pipeline(&records, "ocean", &s);
    assert!(results.is_empty());
}

#[test]
fn mandatory_keywords_require_all() {
    let records = sample_records();

    let s = FilterSpec {
        mandatory_keywords: vec!["ocean".to_string(), "coral".to_string()],
        ..spec()
    };
    let results = SearchService::run_pipeline(&records, "", &s);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Coral Bleaching Survey");

    // OR-style multi-selects would have kept Ocean Temperature too
    let s = FilterSpec {
        mandatory_keywords: vec!["ocean".to_string()],
        ..spec()
    };
    let results = SearchService::run_pipeline(&records, "", &s);
    assert!(results.iter().any(|r| r.name == "Ocean Temperature"));
}

#[tokio::test]
async fn limit_truncates_after_ranking() {
    let catalog_file = TestCatalog::sample();
    let services = create_test_services(&catalog_file.path);

    let response = services
        .search
        .search(SearchRequest {
            query: "ocean".to_string(),
            limit: Some(1),
            ..SearchRequest::default()
        })
        .await
        .unwrap();

    // the best-scoring record survives the cut
    assert_eq!(response.count, 1);
    assert_eq!(response.results[0].name, "Ocean Temperature");
}
