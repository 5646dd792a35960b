//! Catalog: the record set and where it comes from.
//!
//! - loader: catalog sources, the allowed gate, and the memoized
//!   process-wide cache
//! - vocabulary: selectable filter values for validation and UI

pub mod loader;
pub mod vocabulary;

pub use loader::{Catalog, CatalogCache, CatalogSource, FileCatalogSource};
pub use vocabulary::Vocabulary;
