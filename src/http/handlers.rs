//! HTTP request handlers for the Quarry API
//!
//! Implements handlers for the four REST endpoints: health, search,
//! catalog info, and filter vocabulary.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::core::error::QuarryError;
use crate::core::services::Services;
use crate::core::types::{CatalogInfo, HealthResponse, SearchRequest, SearchResponse};

/// Health check handler
///
/// Returns server status and version information.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Search handler
///
/// Runs the filter/score/rank pipeline against the cached catalog.
/// An empty query is valid: the filtered set comes back in catalog
/// order.
///
/// # Errors
///
/// - `CatalogLoadFailed` / `CatalogParseFailed`: first load failed
pub async fn search_handler(
    State(services): State<Arc<Services>>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, QuarryError> {
    let response = services.search.search(req).await?;
    Ok(Json(response))
}

/// Catalog info handler
///
/// Returns record counts and the catalog source. Triggers the catalog
/// load if it has not happened yet.
pub async fn catalog_handler(
    State(services): State<Arc<Services>>,
) -> Result<Json<CatalogInfo>, QuarryError> {
    let catalog = services.catalog.get_or_load().await?;

    Ok(Json(CatalogInfo {
        records: catalog.len(),
        total_in_source: catalog.total_in_source(),
        source: catalog.source().to_string(),
    }))
}

/// Filter vocabulary response
#[derive(Debug, Serialize, Deserialize)]
pub struct VocabularyResponse {
    /// Field name -> selectable values
    pub fields: BTreeMap<String, Vec<String>>,
}

/// Filter vocabulary handler
///
/// Returns the flattened selectable values for the multi-select
/// filters.
///
/// # Errors
///
/// - `VocabularyNotConfigured`: no vocabulary path in the config
/// - `VocabularyError`: vocabulary file unreadable or malformed
pub async fn filters_handler(
    State(services): State<Arc<Services>>,
) -> Result<Json<VocabularyResponse>, QuarryError> {
    let vocabulary = services.load_vocabulary().await?;

    let fields = vocabulary
        .fields()
        .map(|field| {
            let values = vocabulary
                .values(field)
                .map(|set| set.iter().cloned().collect())
                .unwrap_or_default();
            (field.to_string(), values)
        })
        .collect();

    Ok(Json(VocabularyResponse { fields }))
}
