//! Error types for item-check.

use item_core::CoreError;
use std::path::PathBuf;

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {var}: '{value}'")]
    InvalidValue { var: &'static str, value: String },

    #[error(transparent)]
    Policy(#[from] CoreError),
}

/// Input document errors.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("{source_name} is not valid JSON: {error}")]
    Json {
        source_name: String,
        #[source]
        error: serde_json::Error,
    },

    #[error("{source_name}[{index}] is not an item: {error}")]
    NotAnItem {
        source_name: String,
        index: usize,
        #[source]
        error: serde_json::Error,
    },

    #[error("{source_name} must hold an item object or an array of items")]
    UnexpectedShape { source_name: String },
}
