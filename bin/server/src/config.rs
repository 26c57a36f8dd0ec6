//! Centralized server configuration.
//!
//! This module provides strongly-typed configuration for the server,
//! loaded via the `config` crate from environment variables, for example
//! `LOG_FILTER=debug` or `TELEMETRY__ENABLED=false`.
//!
//! The listen address and bundle locations are not configured here; they
//! come from the Leptos configuration (`[package.metadata.leptos]`).

use serde::Deserialize;

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Sensor telemetry configuration.
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Configuration of the server-side sensor telemetry log.
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// Whether submitted sensor snapshots are accepted and logged.
    #[serde(default = "default_telemetry_enabled")]
    pub enabled: bool,
}

fn default_log_filter() -> String {
    "info,tower_http=debug".to_string()
}

fn default_telemetry_enabled() -> bool {
    true
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: default_telemetry_enabled(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_source(
            config::Environment::default()
                .separator("__")
                .try_parsing(true),
        )
    }

    fn from_source<S>(source: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()
    }
}
