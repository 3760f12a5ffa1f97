//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate
//! from an optional TOML file merged with `CHARCAT__*` environment
//! variables. Each sub-module represents a logical configuration section
//! and every field carries a default, so an empty source is valid.

pub mod api;
pub mod logging;
pub mod query;
pub mod viewer;

use serde::{Deserialize, Serialize};

use self::api::ApiConfig;
use self::logging::LoggingConfig;
use self::query::QueryConfig;
use self::viewer::ViewerConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Remote character API settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Query cache and retry settings.
    #[serde(default)]
    pub query: QueryConfig,
    /// Terminal viewer settings.
    #[serde(default)]
    pub viewer: ViewerConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file is not an error. Environment variables prefixed
    /// with `CHARCAT__` override file values, e.g.
    /// `CHARCAT__API__BASE_URL=http://localhost:8080/api`.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("CHARCAT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Check cross-field constraints serde cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.api.base_url.trim().is_empty() {
            return Err(AppError::configuration("api.base_url must not be empty"));
        }
        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://")
        {
            return Err(AppError::configuration(format!(
                "api.base_url must be an http(s) URL, got '{}'",
                self.api.base_url
            )));
        }
        if self.api.timeout_seconds == 0 {
            return Err(AppError::configuration(
                "api.timeout_seconds must be at least 1",
            ));
        }
        if self.query.max_capacity == 0 {
            return Err(AppError::configuration(
                "query.max_capacity must be at least 1",
            ));
        }
        Ok(())
    }
}
