//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.
//!
//! A single `[api] base_url` serves every page, including the dashboard.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::model::Coordinates;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub map: MapConfig,

    #[serde(default)]
    pub notifications: NotificationConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// REST collaborator configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL; the places resource lives at `<base_url>/lugares`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:3001".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Map widget configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MapConfig {
    #[serde(default)]
    pub access_token: String,

    #[serde(default = "default_map_style")]
    pub style: String,

    #[serde(default = "default_zoom")]
    pub zoom: f64,

    /// Used when no place has coordinates
    #[serde(default = "default_center")]
    pub default_center: Coordinates,
}

fn default_map_style() -> String {
    "mapbox://styles/mapbox/streets-v11".to_string()
}

fn default_zoom() -> f64 {
    11.0
}

/// Belo Horizonte
fn default_center() -> Coordinates {
    Coordinates::new(-19.9167, -43.9378)
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            style: default_map_style(),
            zoom: default_zoom(),
            default_center: default_center(),
        }
    }
}

/// Notification surface configuration
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_expiry")]
    pub expiry_secs: u64,
}

fn default_expiry() -> u64 {
    5
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            expiry_secs: default_expiry(),
        }
    }
}

impl NotificationConfig {
    pub fn expiry(&self) -> Duration {
        Duration::from_secs(self.expiry_secs)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Candidate config files, in search order
    pub fn default_paths() -> Vec<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join("lugares").join("config.toml"))
            .into_iter()
            .chain(Some(PathBuf::from("./lugares.toml")))
            .collect()
    }

    /// Load the first existing file in `paths`, or fall back to the
    /// environment when none exists. A file that exists but cannot be read
    /// or parsed is an error.
    pub fn load_first(paths: &[PathBuf]) -> Result<Self, ConfigError> {
        match paths.iter().find(|p| p.exists()) {
            Some(path) => Self::load_with_env(path),
            None => Ok(Self::from_env()),
        }
    }

    /// Load from default locations or environment, ignoring broken files
    pub fn load_default() -> Self {
        Self::load_first(&Self::default_paths()).unwrap_or_else(|e| {
            tracing::warn!("{}, using defaults", e);
            Self::from_env()
        })
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("LUGARES_API_URL") {
            self.api.base_url = url;
        }
        if let Ok(timeout) = std::env::var("LUGARES_API_TIMEOUT_SECS") {
            if let Ok(t) = timeout.parse() {
                self.api.request_timeout_secs = t;
            }
        }

        if let Ok(token) = std::env::var("LUGARES_MAPBOX_TOKEN") {
            self.map.access_token = token;
        }

        if let Ok(level) = std::env::var("LUGARES_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("LUGARES_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Lugares Configuration
#
# Environment variables override these settings:
# - LUGARES_API_URL
# - LUGARES_API_TIMEOUT_SECS
# - LUGARES_MAPBOX_TOKEN
# - LUGARES_LOG_LEVEL
# - LUGARES_LOG_FORMAT

[api]
# REST backend; places are served at <base_url>/lugares
base_url = "http://localhost:3001"

# Request timeout in seconds
request_timeout_secs = 30

[map]
# Mapbox public access token
access_token = ""

# Map style URL
style = "mapbox://styles/mapbox/streets-v11"

# Initial zoom level
zoom = 11.0

# Center used when no place has coordinates (Belo Horizonte)
default_center = { latitude = -19.9167, longitude = -43.9378 }

[notifications]
# Seconds before a message disappears
expiry_secs = 5

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
