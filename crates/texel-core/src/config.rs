//! Configuration management for Texel.
//!
//! Configuration is loaded from the platform config directory with sensible
//! defaults; a missing file is not an error.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Root configuration structure for Texel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scan settings
    pub scan: ScanConfig,

    /// Report output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Directory traversal settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Follow symbolic links during traversal
    pub follow_links: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self { follow_links: true }
    }
}

/// Report output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default report format ("tsv" or "jsonl")
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "tsv".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level ("error", "warn", "info", "debug", "trace")
    pub level: String,

    /// Log format ("pretty" or "json")
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories (XDG on Linux, Application
    /// Support on macOS). Falls back to ~/.texel/config.toml if directory
    /// detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("org", "texel", "texel")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".texel").join("config.toml")
            })
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), ConfigError> {
        match self.output.format.as_str() {
            "tsv" | "jsonl" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "output.format must be \"tsv\" or \"jsonl\", got \"{other}\""
                )));
            }
        }
        match self.logging.level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "logging.level must be a tracing level, got \"{other}\""
                )));
            }
        }
        match self.logging.format.as_str() {
            "pretty" | "json" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "logging.format must be \"pretty\" or \"json\", got \"{other}\""
                )));
            }
        }
        Ok(())
    }
}
