//! Configuration management for the Quarry catalog search service.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{QuarryError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Catalog source configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Path to the catalog index JSON (array of records)
    #[serde(default = "default_index_path")]
    pub index_path: PathBuf,

    /// Path to the filter-option vocabulary JSON (optional)
    #[serde(default)]
    pub vocabulary_path: Option<PathBuf>,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Default number of results to return
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Maximum results per query
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
}

// Default value functions
fn default_index_path() -> PathBuf {
    PathBuf::from("./database_index.json")
}

fn default_limit() -> usize {
    50
}

fn default_max_limit() -> usize {
    100
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8484
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            index_path: default_index_path(),
            vocabulary_path: None,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| QuarryError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// This method uses XDG Base Directory specification for file locations.
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. QUARRY_CONFIG env var
    /// 2. XDG config file (~/.config/quarry/config.toml)
    /// 3. ./quarry.toml in the working directory
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("QUARRY_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("quarry.toml").exists() {
                Self::from_file("quarry.toml")?
            } else {
                Self::default()
            }
        };

        // Override with environment variables
        config.merge_env();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Catalog configuration
        if let Ok(index_path) = env::var("QUARRY_CATALOG_PATH") {
            self.catalog.index_path = PathBuf::from(index_path);
        }
        if let Ok(vocab_path) = env::var("QUARRY_VOCABULARY_PATH") {
            self.catalog.vocabulary_path = Some(PathBuf::from(vocab_path));
        }

        // Search configuration
        if let Ok(default_limit) = env::var("QUARRY_DEFAULT_LIMIT") {
            if let Ok(n) = default_limit.parse() {
                self.search.default_limit = n;
            }
        }
        if let Ok(max_limit) = env::var("QUARRY_MAX_LIMIT") {
            if let Ok(n) = max_limit.parse() {
                self.search.max_limit = n;
            }
        }

        // Server configuration
        if let Ok(host) = env::var("QUARRY_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("QUARRY_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.catalog.index_path.as_os_str().is_empty() {
            return Err(QuarryError::ConfigError(
                "Catalog index path must not be empty".to_string(),
            ));
        }

        if self.search.default_limit == 0 {
            return Err(QuarryError::ConfigError(
                "Default limit must be non-zero".to_string(),
            ));
        }

        if self.search.default_limit > self.search.max_limit {
            return Err(QuarryError::ConfigError(
                "Default limit cannot exceed max limit".to_string(),
            ));
        }

        if self.server.host.trim().is_empty() {
            return Err(QuarryError::ConfigError(
                "Server host must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration at startup
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Catalog index: {:?}", self.catalog.index_path);
        match &self.catalog.vocabulary_path {
            Some(path) => tracing::info!("  Vocabulary: {:?}", path),
            None => tracing::info!("  Vocabulary: not configured"),
        }
        tracing::info!("  Default limit: {}", self.search.default_limit);
        tracing::info!("  Max limit: {}", self.search.max_limit);
        tracing::info!("  Server: {}:{}", self.server.host, self.server.port);
    }
}
