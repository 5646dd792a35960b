//! Core data types for the Quarry catalog search service.
//!
//! This module defines the dataset record model and the request and
//! response envelopes used by the search pipeline and its adapters.
//!
//! Catalog JSON in the wild is ragged: fields go missing, arrive as
//! `null`, or carry the wrong type. Record deserialization therefore
//! collapses anything unusable to the empty value instead of failing.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::core::search::FilterSpec;

/// Opaque record identifier: catalogs use strings or integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl RecordId {
    fn from_value(value: &Value) -> Self {
        match value {
            Value::Number(n) => match n.as_i64() {
                Some(i) => RecordId::Number(i),
                None => RecordId::Text(n.to_string()),
            },
            Value::String(s) => RecordId::Text(s.clone()),
            _ => RecordId::Text(String::new()),
        }
    }
}

impl Default for RecordId {
    fn default() -> Self {
        RecordId::Text(String::new())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl Serialize for RecordId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RecordId::Number(n) => serializer.serialize_i64(*n),
            RecordId::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(RecordId::from_value(&value))
    }
}

/// One dataset's metadata entry in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub id: RecordId,

    /// Display title
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient_string_vec")]
    pub keywords: Vec<String>,

    #[serde(default, rename = "abstract", deserialize_with = "lenient_string")]
    pub abstract_text: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub author_name: String,

    /// Single value, not a list
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: String,

    #[serde(default, deserialize_with = "lenient_string_vec")]
    pub categories_list: Vec<String>,

    #[serde(default, deserialize_with = "lenient_string_vec")]
    pub data_types: Vec<String>,

    #[serde(default, deserialize_with = "lenient_string_vec")]
    pub research_fields: Vec<String>,

    #[serde(default, deserialize_with = "lenient_string_vec")]
    pub file_extensions: Vec<String>,

    #[serde(default, deserialize_with = "lenient_bool")]
    pub publicly_available: bool,

    #[serde(default, deserialize_with = "lenient_string")]
    pub collection_start: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub collection_end: String,

    /// Records failing this gate are dropped at load time
    #[serde(default, deserialize_with = "lenient_bool")]
    pub allowed_in_database: bool,

    /// Optional URL for the dataset's landing page
    #[serde(default, deserialize_with = "lenient_string")]
    pub link: String,
}

/// Deserialize a string field, tolerating null and mistyped values.
pub(crate) fn lenient_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_string(&value))
}

/// Deserialize a string-sequence field, tolerating null and mistyped values.
pub(crate) fn lenient_string_vec<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_string_vec(&value))
}

/// Deserialize a boolean field, tolerating null, strings, and absence.
pub(crate) fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match &value {
        Value::Bool(b) => *b,
        Value::String(s) => matches!(
            s.trim().to_lowercase().as_str(),
            "true" | "yes" | "y" | "allow" | "allowed"
        ),
        _ => false,
    })
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

fn value_to_string_vec(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Request to search the catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text search query (may be empty)
    #[serde(default)]
    pub query: String,

    /// Structured filters
    #[serde(default)]
    pub filters: FilterSpec,

    /// Number of results to return (optional)
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Response from a search operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Original query string
    pub query: String,

    /// Ranked records
    pub results: Vec<Record>,

    /// Number of results returned
    pub count: usize,

    /// Query duration in milliseconds
    pub duration_ms: u64,
}

/// Catalog summary returned by the info endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogInfo {
    /// Records visible to search (allowed gate applied)
    pub records: usize,

    /// Records in the source file before the gate
    pub total_in_source: usize,

    /// Where the catalog was loaded from
    pub source: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}
