// Test fixtures for integration testing

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use quarry::Record;

/// A small catalog covering every filterable field.
///
/// Record 5 ("Withheld Survey") is gated out by `allowed_in_database`
/// and must stay invisible to every test that goes through the loader.
pub fn sample_catalog_json() -> &'static str {
    r#"[
        {
            "id": "00001",
            "name": "Ocean Temperature",
            "keywords": ["ocean", "climate"],
            "abstract": "deep sea data",
            "author_name": "J. Smith",
            "location": "Pacific",
            "categories_list": ["environment"],
            "data_types": ["tabular"],
            "research_fields": ["oceanography"],
            "file_extensions": ["csv", "nc"],
            "publicly_available": true,
            "collection_start": "2019-04-01",
            "collection_end": "2020-01-01",
            "allowed_in_database": true
        },
        {
            "id": "00002",
            "name": "Glacier Retreat",
            "keywords": ["ice", "climate"],
            "abstract": "annual glacier front positions",
            "author_name": "A. Larsen",
            "location": "Arctic",
            "categories_list": ["environment"],
            "data_types": ["imaging"],
            "research_fields": ["glaciology"],
            "file_extensions": ["tiff"],
            "publicly_available": false,
            "collection_start": "2015-01-01",
            "collection_end": "2018-12-31",
            "allowed_in_database": true
        },
        {
            "id": "00003",
            "name": "Urban Air Quality",
            "keywords": ["air", "pollution"],
            "abstract": "hourly sensor readings across the city",
            "author_name": "B. Keller",
            "location": "Berlin",
            "categories_list": ["environment", "health"],
            "data_types": ["tabular"],
            "research_fields": ["atmospheric science"],
            "file_extensions": ["csv"],
            "publicly_available": true,
            "collection_start": "not-a-date",
            "collection_end": "",
            "allowed_in_database": true
        },
        {
            "id": "00004",
            "name": "Hospital Admissions",
            "keywords": ["health"],
            "abstract": "anonymized admission counts",
            "author_name": "C. Weber",
            "location": "Berlin",
            "categories_list": ["health"],
            "data_types": ["tabular"],
            "research_fields": ["epidemiology"],
            "file_extensions": ["xlsx"],
            "publicly_available": false,
            "collection_start": "2021-01-01",
            "collection_end": "2021-12-31",
            "allowed_in_database": true
        },
        {
            "id": "00005",
            "name": "Withheld Survey",
            "keywords": ["ocean"],
            "abstract": "not cleared for publication",
            "allowed_in_database": false
        },
        {
            "id": "00006",
            "name": "Coral Bleaching Survey",
            "keywords": ["ocean", "coral"],
            "abstract": "reef transect photographs and notes",
            "author_name": "M. Ocean",
            "location": "Pacific",
            "categories_list": ["environment"],
            "data_types": ["imaging"],
            "research_fields": ["marine biology"],
            "file_extensions": ["jpg"],
            "publicly_available": true,
            "collection_start": "2020-06-01",
            "collection_end": "2021-06-01",
            "allowed_in_database": true
        }
    ]"#
}

/// The sample catalog parsed into records (gate NOT applied)
#[allow(dead_code)] // Used in core pipeline tests
pub fn sample_records() -> Vec<Record> {
    serde_json::from_str(sample_catalog_json()).unwrap()
}

/// A catalog JSON file on disk, deleted on drop
pub struct TestCatalog {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl TestCatalog {
    /// Write the sample catalog to a temp file
    pub fn sample() -> Self {
        Self::with_json(sample_catalog_json())
    }

    /// Write custom catalog JSON to a temp file
    pub fn with_json(json: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("database_index.json");
        std::fs::write(&path, json).unwrap();
        Self { dir, path }
    }

    #[allow(dead_code)] // Used in catalog lifecycle tests
    pub fn path(&self) -> &Path {
        &self.path
    }
}
