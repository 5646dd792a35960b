//! Search command tests

use crate::common::{create_test_services, TestCatalog};
use quarry::cli::commands::{search, SearchArgs};
use quarry::cli::OutputFormat;

fn args() -> SearchArgs {
    SearchArgs {
        query: String::new(),
        limit: None,
        category: vec![],
        data_type: vec![],
        research_field: vec![],
        location: vec![],
        keyword: vec![],
        file_extensions: None,
        public: None,
        collected_after: None,
        collected_before: None,
        ids_only: false,
    }
}

#[tokio::test]
async fn search_command_runs_with_query() {
    let catalog_file = TestCatalog::sample();
    let services = create_test_services(&catalog_file.path);

    let mut search_args = args();
    search_args.query = "ocean".to_string();

    let result = search::execute(search_args, &services, OutputFormat::Json).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn search_command_runs_with_filters_only() {
    let catalog_file = TestCatalog::sample();
    let services = create_test_services(&catalog_file.path);

    let mut search_args = args();
    search_args.location = vec!["berlin".to_string()];
    search_args.public = Some(true);
    search_args.ids_only = true;

    let result = search::execute(search_args, &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn search_command_fails_without_catalog() {
    let services = create_test_services(std::path::Path::new("/nonexistent/catalog.json"));

    let result = search::execute(args(), &services, OutputFormat::Json).await;
    assert!(result.is_err());
}
