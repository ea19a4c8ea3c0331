//! # item-check Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line (highest priority)                                    │
//! │     --format text                                                      │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     ITEM_MIN_PRICE=1000  ITEM_CODE_FORMAT=postfix                      │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config PATH, else                                                │
//! │     ~/.config/item-check/item-check.toml (Linux)                       │
//! │     ~/Library/Application Support/com.itemservice.item-check/...       │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     thresholds 1000 / 1000000 / 9999 / 10000, prefix codes, JSON       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [policy]
//! min_price = 1000
//! max_price = 1000000
//! max_quantity = 9999
//! min_total_price = 10000
//!
//! [codes]
//! format = "prefix"  # prefix | postfix
//!
//! [output]
//! format = "json"    # json | text
//! ```

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use item_core::{CodeFormat, ItemPolicy, ItemValidator};

use crate::error::ConfigError;

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "item-check.toml";

// =============================================================================
// Output Format
// =============================================================================

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Pretty-printed JSON document.
    #[default]
    Json,
    /// One line per item and per error.
    Text,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            other => Err(other.to_string()),
        }
    }
}

// =============================================================================
// Sections
// =============================================================================

/// Message code settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodesSettings {
    #[serde(default)]
    pub format: CodeFormat,
}

/// Report settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Complete item-check configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Item thresholds.
    #[serde(default)]
    pub policy: ItemPolicy,

    /// Message code resolution.
    #[serde(default)]
    pub codes: CodesSettings,

    /// Report rendering.
    #[serde(default)]
    pub output: OutputSettings,
}

impl CheckConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (explicit path must exist; the default path may not)
    /// 3. Environment variables
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Reads one TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        info!(?path, "Loading item-check config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Checks the policy thresholds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.policy.validate()?;
        Ok(())
    }

    /// Builds the validator described by this configuration.
    pub fn validator(&self) -> Result<ItemValidator, ConfigError> {
        Ok(ItemValidator::with_policy(self.policy)?.with_code_format(self.codes.format))
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(value) = env_i64("ITEM_MIN_PRICE")? {
            debug!(value, "Overriding min_price from environment");
            self.policy.min_price = value;
        }

        if let Some(value) = env_i64("ITEM_MAX_PRICE")? {
            debug!(value, "Overriding max_price from environment");
            self.policy.max_price = value;
        }

        if let Some(value) = env_i64("ITEM_MAX_QUANTITY")? {
            debug!(value, "Overriding max_quantity from environment");
            self.policy.max_quantity = value;
        }

        if let Some(value) = env_i64("ITEM_MIN_TOTAL_PRICE")? {
            debug!(value, "Overriding min_total_price from environment");
            self.policy.min_total_price = value;
        }

        if let Ok(value) = std::env::var("ITEM_CODE_FORMAT") {
            self.codes.format = value.parse().map_err(|_| ConfigError::InvalidValue {
                var: "ITEM_CODE_FORMAT",
                value,
            })?;
        }

        if let Ok(value) = std::env::var("ITEM_OUTPUT_FORMAT") {
            self.output.format = value.parse().map_err(|_| ConfigError::InvalidValue {
                var: "ITEM_OUTPUT_FORMAT",
                value,
            })?;
        }

        Ok(())
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "itemservice", "item-check")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

fn env_i64(var: &'static str) -> Result<Option<i64>, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { var, value }),
        Err(_) => Ok(None),
    }
}
