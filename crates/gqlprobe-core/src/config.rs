// SPDX-License-Identifier: Apache-2.0

//! Configuration management for gqlprobe.
//!
//! Provides layered configuration from files and environment variables.
//! Uses XDG-compliant paths with environment variable support.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `GQLPROBE_`)
//! 2. Config file: `~/.config/gqlprobe/config.toml`
//! 3. Built-in defaults
//!
//! # Examples
//!
//! ```bash
//! # Point at a different GraphQL endpoint via environment variable
//! GQLPROBE_ENDPOINT__URL=http://127.0.0.1:4000/graphql gqlprobe ops list
//! ```

use std::path::PathBuf;
use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::GqlProbeError;

/// Endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/graphql";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// GraphQL endpoint settings.
    pub endpoint: EndpointConfig,
    /// UI preferences.
    pub ui: UiConfig,
    /// Batch execution settings.
    pub batch: BatchConfig,
}

/// GraphQL endpoint settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Endpoint URL every operation is POSTed to.
    pub url: String,
    /// Request timeout in seconds. `0` leaves the transport default in place.
    pub timeout_seconds: u64,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: 0,
        }
    }
}

impl EndpointConfig {
    /// Returns the configured timeout, or `None` when the transport default applies.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_seconds > 0).then(|| Duration::from_secs(self.timeout_seconds))
    }
}

/// UI preferences.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable colored output.
    pub color: bool,
    /// Show a spinner while a request is in flight.
    pub progress: bool,
    /// Ask before sending operations marked as destructive.
    pub confirm_mutations: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: true,
            progress: true,
            confirm_mutations: true,
        }
    }
}

/// Batch execution settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Maximum number of requests in flight at once.
    pub concurrency: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { concurrency: 5 }
    }
}

/// Returns the gqlprobe configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to `~/.config/gqlprobe`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return PathBuf::from(xdg_config).join("gqlprobe");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("gqlprobe")
}

/// Returns the path to the configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load application configuration.
///
/// Loads from config file (if exists) and environment variables.
/// Environment variables use the prefix `GQLPROBE_` and double underscore
/// for nested keys (e.g., `GQLPROBE_ENDPOINT__URL`).
///
/// # Errors
///
/// Returns `GqlProbeError::Config` if the config file exists but is invalid,
/// or if the resulting endpoint URL is empty.
pub fn load_config() -> Result<AppConfig, GqlProbeError> {
    let config_path = config_file_path();

    let config = Config::builder()
        // Load from config file (optional - may not exist)
        .add_source(File::with_name(config_path.to_string_lossy().as_ref()).required(false))
        // Override with environment variables
        .add_source(
            Environment::with_prefix("GQLPROBE")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;
    app_config.validate()?;

    Ok(app_config)
}

impl AppConfig {
    /// Checks invariants the deserializer cannot express.
    ///
    /// # Errors
    ///
    /// Returns `GqlProbeError::Config` when the endpoint URL is blank or the
    /// batch concurrency is zero.
    pub fn validate(&self) -> Result<(), GqlProbeError> {
        if self.endpoint.url.trim().is_empty() {
            return Err(GqlProbeError::Config {
                message: "endpoint.url must not be empty".to_string(),
            });
        }
        if self.batch.concurrency == 0 {
            return Err(GqlProbeError::Config {
                message: "batch.concurrency must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
