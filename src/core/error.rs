//! Error types and error handling for the Quarry catalog search service.
//!
//! This module defines the error types used throughout the
//! application. Protocol-specific error handling (HTTP status codes)
//! is handled in the respective adapter modules.

use thiserror::Error;

/// Result type alias for Quarry operations
pub type Result<T> = std::result::Result<T, QuarryError>;

/// Main error type for the Quarry service
#[derive(Error, Debug)]
pub enum QuarryError {
    #[error("Catalog load failed: {0}")]
    CatalogLoadFailed(String),

    #[error("Catalog parse failed: {0}")]
    CatalogParseFailed(String),

    #[error("No filter vocabulary configured (set [catalog].vocabulary_path)")]
    VocabularyNotConfigured,

    #[error("Vocabulary error: {0}")]
    VocabularyError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl QuarryError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, QuarryError::VocabularyNotConfigured)
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(self, QuarryError::ConfigError(_))
    }
}
