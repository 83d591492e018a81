//! Error types for model selection.
//!
//! An empty model collection is not an error: selection simply yields no
//! model. The only selection failure is a model with no recorded score.

use thiserror::Error;

/// Model selection errors.
#[derive(Error, Debug)]
pub enum DeployError {
    /// A candidate model has no entry in the score mapping.
    #[error("Missing score for model: {0}")]
    MissingScore(String),

    /// Configuration or score file could not be loaded.
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for selection operations
pub type Result<T> = std::result::Result<T, DeployError>;

impl From<toml::de::Error> for DeployError {
    fn from(err: toml::de::Error) -> Self {
        DeployError::Config(err.to_string())
    }
}
