//! Sensor panel state.
//!
//! The landing screen lets an operator simulate three sensor readings with
//! sliders and submit the snapshot. Every reading lives in `[0, 100]`;
//! anything outside that range is clamped rather than rejected.

use crate::error::{InputError, Result};
use crate::sink::TelemetrySink;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A single sensor value, always within `[Reading::MIN, Reading::MAX]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Reading(u8);

impl Reading {
    /// Lowest accepted value.
    pub const MIN: u8 = 0;
    /// Highest accepted value.
    pub const MAX: u8 = 100;
    /// The initial value of every reading.
    pub const ZERO: Self = Self(Self::MIN);

    /// Creates a reading, clamping `value` into range.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        let clamped = value.clamp(i64::from(Self::MIN), i64::from(Self::MAX));
        // Lossless: clamped is within 0..=100.
        Self(clamped as u8)
    }

    /// Returns the stored value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<i64> for Reading {
    fn from(value: i64) -> Self {
        Self::clamped(value)
    }
}

impl From<Reading> for u8 {
    fn from(reading: Reading) -> Self {
        reading.0
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the three simulated sensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SensorField {
    /// Lake water level.
    WaterLevel,
    /// Temperature.
    Temperature,
    /// Seismic displacement.
    SeismicShift,
}

impl SensorField {
    /// All fields in display order.
    pub const ALL: [Self; 3] = [Self::WaterLevel, Self::Temperature, Self::SeismicShift];

    /// Returns the camelCase key used in forms and serialized snapshots.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::WaterLevel => "waterLevel",
            Self::Temperature => "temperature",
            Self::SeismicShift => "seismicShift",
        }
    }

    /// Returns the human-readable label shown next to the slider.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WaterLevel => "Water Level",
            Self::Temperature => "Temperature",
            Self::SeismicShift => "Seismic Shift",
        }
    }

    /// Parses a field from its camelCase key.
    pub fn from_key(key: &str) -> Result<Self, InputError> {
        key.parse::<Self>().map_err(Into::into)
    }
}

impl fmt::Display for SensorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SensorField {
    type Err = InputError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| InputError::UnknownSensorField { key: s.to_string() })
    }
}

/// Parses the raw text of a slider or number input into an integer.
///
/// The value is not range-checked here; [`SensorReadings::with_reading`]
/// clamps it.
pub fn parse_reading(input: &str) -> Result<i64, InputError> {
    input.trim().parse::<i64>().map_err(|e| {
        InputError::InvalidReading {
            input: input.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// Snapshot of the three simulated sensor readings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorReadings {
    pub water_level: Reading,
    pub temperature: Reading,
    pub seismic_shift: Reading,
}

impl SensorReadings {
    /// All readings at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            water_level: Reading::ZERO,
            temperature: Reading::ZERO,
            seismic_shift: Reading::ZERO,
        }
    }

    /// Returns the reading for `field`.
    #[must_use]
    pub const fn get(&self, field: SensorField) -> Reading {
        match field {
            SensorField::WaterLevel => self.water_level,
            SensorField::Temperature => self.temperature,
            SensorField::SeismicShift => self.seismic_shift,
        }
    }

    /// Returns a copy with `field` set to `value` (clamped) and the other
    /// readings unchanged.
    #[must_use]
    pub fn with_reading(self, field: SensorField, value: i64) -> Self {
        let reading = Reading::clamped(value);
        match field {
            SensorField::WaterLevel => Self {
                water_level: reading,
                ..self
            },
            SensorField::Temperature => Self {
                temperature: reading,
                ..self
            },
            SensorField::SeismicShift => Self {
                seismic_shift: reading,
                ..self
            },
        }
    }
}

/// State holder behind the "Sensor Data Input" section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SensorPanel {
    readings: SensorReadings,
}

impl SensorPanel {
    /// Creates a panel with all readings at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            readings: SensorReadings::new(),
        }
    }

    /// Returns the current snapshot.
    #[must_use]
    pub const fn readings(&self) -> SensorReadings {
        self.readings
    }

    /// Updates one reading, clamping out-of-range values, and returns the
    /// stored value.
    pub fn set_reading(&mut self, field: SensorField, value: i64) -> Reading {
        self.readings = self.readings.with_reading(field, value);
        let stored = self.readings.get(field);
        if i64::from(stored.value()) != value {
            debug!(field = %field, requested = value, stored = %stored, "Clamped sensor reading");
        }
        stored
    }

    /// Hands the current snapshot to `sink`. The panel is left unchanged.
    pub fn submit(&self, sink: &dyn TelemetrySink) {
        sink.submit(self.readings);
    }
}
