//! Collaborators the panels hand their results to.
//!
//! Both are fire-and-forget: there is no acknowledgement, retry or timeout.

use crate::id::SubmissionId;
use crate::route::Destination;
use crate::sensor::SensorReadings;
use tracing::info;

/// Receives sensor snapshots submitted from the sensor panel.
pub trait TelemetrySink {
    /// Accepts one snapshot.
    fn submit(&self, readings: SensorReadings);
}

/// Transfers control to the view chosen by the login panel.
pub trait Navigator {
    /// Requests navigation to `destination`.
    fn navigate(&self, destination: Destination);
}

impl<F> Navigator for F
where
    F: Fn(Destination),
{
    fn navigate(&self, destination: Destination) {
        self(destination)
    }
}

/// Telemetry sink that writes each snapshot as a structured log event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTelemetrySink;

impl TracingTelemetrySink {
    /// Logs `readings` under a fresh submission ID and returns that ID.
    pub fn record(&self, readings: SensorReadings) -> SubmissionId {
        let submission_id = SubmissionId::new();
        info!(
            submission_id = %submission_id,
            water_level = readings.water_level.value(),
            temperature = readings.temperature.value(),
            seismic_shift = readings.seismic_shift.value(),
            "Submitting sensor data"
        );
        submission_id
    }
}

impl TelemetrySink for TracingTelemetrySink {
    fn submit(&self, readings: SensorReadings) {
        self.record(readings);
    }
}
