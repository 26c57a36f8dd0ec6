//! Sensor telemetry: the server function that logs submitted snapshots and
//! the browser-side sink that calls it.

use glof_ews_core::{SensorReadings, TelemetrySink};
use leptos::prelude::*;

/// Logs a sensor snapshot on the server and returns its submission ID.
#[server]
pub async fn record_sensor_readings(readings: SensorReadings) -> Result<String, ServerFnError> {
    use crate::config::TelemetryConfig;
    use crate::error::TelemetryError;
    use axum::Extension;
    use glof_ews_core::TracingTelemetrySink;

    let Extension(config): Extension<TelemetryConfig> =
        leptos_axum::extract().await.map_err(|e| {
            tracing::error!(error = %e, "Telemetry configuration missing from request");
            TelemetryError::Unavailable {
                details: e.to_string(),
            }
            .into_server_error()
        })?;

    check_enabled(&config).map_err(|e| {
        tracing::debug!(error = %e, "Rejecting sensor submission");
        e.into_server_error()
    })?;

    let submission_id = TracingTelemetrySink.record(readings);
    Ok(submission_id.to_string())
}

/// Fails with [`TelemetryError::Disabled`](crate::error::TelemetryError)
/// when sensor telemetry is switched off.
#[cfg(feature = "ssr")]
pub fn check_enabled(
    config: &crate::config::TelemetryConfig,
) -> Result<(), crate::error::TelemetryError> {
    if config.enabled {
        Ok(())
    } else {
        Err(crate::error::TelemetryError::Disabled)
    }
}

/// Telemetry sink that dispatches [`record_sensor_readings`] without waiting
/// for the result.
#[derive(Clone)]
pub struct ServerTelemetrySink {
    action: ServerAction<RecordSensorReadings>,
}

impl ServerTelemetrySink {
    /// Creates a sink dispatching through `action`.
    pub fn new(action: ServerAction<RecordSensorReadings>) -> Self {
        Self { action }
    }
}

impl TelemetrySink for ServerTelemetrySink {
    fn submit(&self, readings: SensorReadings) {
        self.action.dispatch(RecordSensorReadings { readings });
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::config::{ServerConfig, TelemetryConfig};
    use crate::error::TelemetryError;

    #[test]
    fn enabled_telemetry_accepts_submissions() {
        let config = TelemetryConfig { enabled: true };
        assert_eq!(check_enabled(&config), Ok(()));
    }

    #[test]
    fn disabled_telemetry_rejects_submissions() {
        let config = TelemetryConfig { enabled: false };
        assert_eq!(check_enabled(&config), Err(TelemetryError::Disabled));
    }

    #[test]
    fn default_config_accepts_submissions() {
        assert!(check_enabled(&ServerConfig::default().telemetry).is_ok());
    }

    #[test]
    fn rejection_message_is_user_safe() {
        let err = check_enabled(&TelemetryConfig { enabled: false })
            .expect_err("disabled")
            .into_server_error();
        assert!(err.to_string().contains("Sensor telemetry is disabled"));
    }
}
