//! Configuration management.
//!
//! Supports configuration from:
//! - TOML config files
//! - Environment variables
//! - CLI arguments (applied by the binary on top of both)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{DeployError, Result};

/// Env var naming the default score file
pub const ENV_SCORES: &str = "RMSE_DEPLOY_SCORES";

/// Env var with a comma-separated candidate list
pub const ENV_MODELS: &str = "RMSE_DEPLOY_MODELS";

/// Env var overriding the log level
pub const ENV_LOG: &str = "RMSE_DEPLOY_LOG";

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Selection inputs
    #[serde(default)]
    pub selection: SelectionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| DeployError::Config(format!("Failed to read config file: {e}")))?;

        toml::from_str(&content)
            .map_err(|e| DeployError::Config(format!("Failed to parse config: {e}")))
    }

    /// Default config file location (`<config_dir>/rmse-deploy/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("rmse-deploy").join("config.toml"))
    }

    /// Load the default config file if it exists, otherwise defaults
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = std::env::var(ENV_SCORES) {
            if !path.is_empty() {
                config.selection.scores_file = Some(PathBuf::from(path));
            }
        }
        if let Ok(models) = std::env::var(ENV_MODELS) {
            config.selection.models = parse_model_list(&models);
        }
        if let Ok(level) = std::env::var(ENV_LOG) {
            if !level.is_empty() {
                config.logging.level = level;
            }
        }

        config
    }

    /// Merge with another config (other takes precedence where set)
    ///
    /// "Set" means differs from the default: `other.logging.level` only wins
    /// when it is not `"info"`, so it cannot reset a non-default level back
    /// to `"info"`. `logging.json` is OR-ed, so `other` can turn JSON logs on
    /// but never off. An empty `other.selection.models` keeps `self`'s list.
    pub fn merge(self, other: Self) -> Self {
        let defaults = LoggingConfig::default();
        Self {
            selection: SelectionConfig {
                scores_file: other.selection.scores_file.or(self.selection.scores_file),
                models: if other.selection.models.is_empty() {
                    self.selection.models
                } else {
                    other.selection.models
                },
            },
            logging: LoggingConfig {
                level: if other.logging.level != defaults.level {
                    other.logging.level
                } else {
                    self.logging.level
                },
                json: other.logging.json || self.logging.json,
            },
        }
    }
}

/// Selection inputs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Score file (JSON or TOML)
    pub scores_file: Option<PathBuf>,

    /// Candidate models; empty means every model in the score file
    pub models: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset
    pub level: String,

    /// Emit JSON log lines
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Split a comma-separated model list, dropping blanks
pub fn parse_model_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
