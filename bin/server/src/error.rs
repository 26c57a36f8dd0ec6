//! Domain error types for server operations.
//!
//! Errors carry the detail needed in logs; `into_server_error` turns them
//! into messages that are safe to send to the browser.

use leptos::server_fn::error::ServerFnError;
use std::fmt;

/// Sensor telemetry errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    /// Telemetry logging is switched off in the server configuration.
    Disabled,
    /// The server configuration could not be read from the request.
    Unavailable { details: String },
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => write!(f, "sensor telemetry is disabled"),
            Self::Unavailable { details } => {
                write!(f, "telemetry configuration unavailable: {}", details)
            }
        }
    }
}

impl std::error::Error for TelemetryError {}

impl TelemetryError {
    /// Convert to a user-safe ServerFnError.
    pub fn into_server_error(self) -> ServerFnError {
        match &self {
            TelemetryError::Disabled => ServerFnError::new("Sensor telemetry is disabled"),
            TelemetryError::Unavailable { .. } => ServerFnError::new("Telemetry unavailable"),
        }
    }
}
