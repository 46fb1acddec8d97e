//! Configuration management for comment-purge

use crate::error::{PurgeError, Result};
use crate::types::RunMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default number of comments fetched per page
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Default prefix for mirrored log lines
pub const DEFAULT_LOG_PREFIX: &str = "purgeRiskyComments";

/// Config file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "purge-comments.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scan settings
    pub scan: ScanConfig,
    /// Storage settings
    pub storage: StorageConfig,
}

/// Scan-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Simulation (report only) or live (delete)
    pub mode: RunMode,
    /// Comments fetched per page
    pub page_size: usize,
    /// Prefix for diagnostic log lines
    pub log_prefix: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            mode: RunMode::Simulation,
            page_size: DEFAULT_PAGE_SIZE,
            log_prefix: DEFAULT_LOG_PREFIX.to_string(),
        }
    }
}

/// Storage-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path of the comment store document
    pub store_path: PathBuf,
    /// Path of the word list file
    pub words_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("comments.json"),
            words_path: PathBuf::from("naughtywords.txt"),
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            PurgeError::Io(e).with_context(format!("Failed to read config {}", path.display()))
        })?;
        debug!("Loaded config from {:?}", path);
        Self::from_toml(&content)
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path must exist. Otherwise `./purge-comments.toml` and then
    /// the platform config directory are tried, falling back to defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.exists() {
            return Self::load(&local);
        }

        if let Some(path) = Self::user_config_path() {
            if path.exists() {
                return Self::load(&path);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Config file location in the platform config directory
    pub fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "comment-purge", "comment-purge")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Serialize to pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        if self.scan.page_size == 0 {
            return Err(PurgeError::Config(
                "scan.page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.scan.mode, RunMode::Simulation);
        assert_eq!(config.scan.page_size, 100);
        assert_eq!(config.scan.log_prefix, "purgeRiskyComments");
        assert_eq!(config.storage.words_path, PathBuf::from("naughtywords.txt"));
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[scan]"));
        assert!(toml.contains("[storage]"));
        assert!(toml.contains("mode = \"simulation\""));

        let config2 = Config::from_toml(&toml).unwrap();
        assert_eq!(config, config2);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::from_toml("[scan]\nmode = \"live\"\n").unwrap();
        assert_eq!(config.scan.mode, RunMode::Live);
        assert_eq!(config.scan.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.storage, StorageConfig::default());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = Config::from_toml("[scan]\npage_size = 0\n").unwrap_err();
        assert!(matches!(err, PurgeError::Config(_)));
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let err = Config::from_toml("[scan]\nmode = \"maybe\"\n").unwrap_err();
        assert!(matches!(err, PurgeError::Toml(_)));
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[storage]\nstore_path = \"/srv/comments.json\"\n").unwrap();

        let config = Config::discover(Some(&path)).unwrap();
        assert_eq!(config.storage.store_path, PathBuf::from("/srv/comments.json"));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = TempDir::new().unwrap();
        let result = Config::discover(Some(&dir.path().join("absent.toml")));
        assert!(result.is_err());
    }
}
