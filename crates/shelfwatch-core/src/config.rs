//! Configuration for shelfwatch
//!
//! Settings are layered, lowest precedence first:
//! built-in defaults, an optional TOML file, then the `SHELFWATCH_API_URL`
//! environment variable.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::Result;

/// Environment variable overriding the backend base URL
pub const API_URL_ENV: &str = "SHELFWATCH_API_URL";
/// Environment variable pointing at an explicit config file
pub const CONFIG_PATH_ENV: &str = "SHELFWATCH_CONFIG";
/// Backend used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Dashboard configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Backend connection settings
    pub api: ApiConfig,
    /// Log output settings
    pub log: LogConfig,
}

/// Backend connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL; `/latest` is appended
    pub base_url: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
            user_agent: format!("shelfwatch/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
    /// Log file; defaults to the platform data directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            file: None,
        }
    }
}

impl LogConfig {
    /// Where log lines go.
    pub fn resolved_file(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .map(|dir| dir.join("shelfwatch").join("shelfwatch.log"))
                .unwrap_or_else(|| PathBuf::from("shelfwatch.log"))
        })
    }
}

impl DashboardConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location (`<config dir>/shelfwatch/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("shelfwatch").join("config.toml"))
    }

    /// Load from the process environment.
    ///
    /// An explicit `SHELFWATCH_CONFIG` path must exist; the default path is
    /// only read when present.
    pub fn load() -> Result<Self> {
        let file = Self::source_path();
        Self::load_layers(file.as_deref(), std::env::var(API_URL_ENV).ok())
    }

    /// Config file [`DashboardConfig::load`] reads, if any.
    pub fn source_path() -> Option<PathBuf> {
        Self::resolve_source(std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
    }

    fn resolve_source(explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit.or_else(|| Self::default_path().filter(|p| p.exists()))
    }

    /// Merge the file layer and the base URL override onto the defaults.
    pub fn load_layers(file: Option<&Path>, api_url: Option<String>) -> Result<Self> {
        let mut config = match file {
            Some(path) => Self::from_toml(&std::fs::read_to_string(path)?)?,
            None => Self::default(),
        };

        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            config.api.base_url = url;
        }
        config.api.base_url = normalize_base_url(&config.api.base_url);

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Full URL of the snapshot endpoint
    pub fn latest_url(&self) -> String {
        format!("{}/latest", normalize_base_url(&self.api.base_url))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    /// Validate configuration values
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let url = url::Url::parse(&self.api.base_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", self.api.base_url, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl(format!(
                "{}: scheme must be http or https",
                self.api.base_url
            )));
        }

        if self.api.timeout_secs == 0 {
            return Err(ConfigError::OutOfRange(
                "timeout_secs must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Configuration validation error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Base URL is malformed or not http(s)
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
    /// Value is out of valid range
    #[error("Value out of range: {0}")]
    OutOfRange(String),
    /// Config file is not valid TOML
    #[error("Parse error: {0}")]
    Parse(String),
}
