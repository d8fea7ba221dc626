//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `GUITARLA_DATA_DIR` - Directory the cart is persisted in (default: `.guitarla`)
//! - `GUITARLA_CATALOG` - Path to a YAML catalog (default: built-in catalog)
//! - `GUITARLA_LOG_FORMAT` - `pretty` or `json` (default: `pretty`)

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = ".guitarla";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("expected `pretty` or `json`, got `{other}`")),
        }
    }
}

/// Cart application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    /// Directory holding the persisted cart
    pub data_dir: PathBuf,
    /// YAML catalog to sell from; `None` uses the built-in catalog
    pub catalog_path: Option<PathBuf>,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            catalog_path: None,
            log_format: LogFormat::default(),
        }
    }
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = get("GUITARLA_DATA_DIR")
            .filter(|v| !v.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);
        let catalog_path = get("GUITARLA_CATALOG")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let log_format = get("GUITARLA_LOG_FORMAT")
            .map(|v| {
                v.parse::<LogFormat>().map_err(|e| {
                    ConfigError::InvalidEnvVar("GUITARLA_LOG_FORMAT".to_string(), e)
                })
            })
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            data_dir,
            catalog_path,
            log_format,
        })
    }
}
