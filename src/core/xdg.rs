//! XDG Base Directory Support
//!
//! Implements XDG Base Directory specification for proper file
//! organization on Linux/Unix systems.

use std::env;
use std::fs;
use std::path::PathBuf;

use crate::core::error::Result;

/// XDG directory structure for Quarry
///
/// Implements XDG Base Directory specification with fallbacks and
/// explicit `QUARRY_*` overrides.
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl XdgDirs {
    /// Create new XDG directory structure with proper resolution order
    ///
    /// Priority order (highest to lowest):
    /// 1. Explicit QUARRY_* env vars
    /// 2. XDG_* environment variables
    /// 3. XDG defaults (~/.config, ~/.local/share)
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
            data_dir: Self::resolve_data_dir(),
        }
    }

    /// Resolve config directory
    fn resolve_config_dir() -> PathBuf {
        if let Ok(dir) = env::var("QUARRY_CONFIG_DIR") {
            return PathBuf::from(dir);
        }

        if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("quarry");
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("quarry")
    }

    /// Resolve data directory
    fn resolve_data_dir() -> PathBuf {
        if let Ok(dir) = env::var("QUARRY_DATA_DIR") {
            return PathBuf::from(dir);
        }

        if let Ok(xdg) = env::var("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("quarry");
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".local")
            .join("share")
            .join("quarry")
    }

    /// Get config file path
    pub fn config_file(&self) -> PathBuf {
        // QUARRY_CONFIG_FILE is an explicit override
        if let Ok(file) = env::var("QUARRY_CONFIG_FILE") {
            return PathBuf::from(file);
        }

        self.config_dir.join("config.toml")
    }

    /// Create the directories if they do not exist yet
    pub fn ensure_dirs_exist(&self) -> Result<()> {
        fs::create_dir_all(&self.config_dir)?;
        fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }

    /// Log resolved paths at startup
    pub fn log_paths(&self) {
        tracing::info!("Config dir: {:?}", self.config_dir);
        tracing::info!("Data dir: {:?}", self.data_dir);
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}
