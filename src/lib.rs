//! Quarry - Faceted Dataset Catalog Search
//!
//! A search service over a small, static, pre-built JSON catalog of
//! dataset records. Given a free-text query and a set of structured
//! filters, it returns a ranked subset of records.
//!
//! # Architecture
//!
//! The codebase is organized into three main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, xdg
//!   - catalog (record model, memoized loading, vocabulary)
//!   - search (query preprocessing, filter engine, scorer, finalizer)
//!   - services (unified service container)
//!
//! - **http**: REST API adapter (depends on core)
//!   - handlers, middleware
//!
//! - **cli**: command-line adapter (depends on core)
//!   - commands, output
//!
//! # The pipeline
//!
//! Every search runs the same sequence over the full in-memory
//! catalog: filter (conjunction of independent predicates) -> score
//! (weighted substring matches per token) -> finalize (threshold,
//! stable rank). The catalog is loaded once per process and shared;
//! everything else is recomputed per request.

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP REST adapter
pub mod http;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::catalog::{Catalog, CatalogCache, CatalogSource, FileCatalogSource, Vocabulary};
pub use crate::core::config::Config;
pub use crate::core::error::{QuarryError, Result};
pub use crate::core::search::{FilterSpec, SearchService};
pub use crate::core::services::Services;
pub use crate::core::types::*;
