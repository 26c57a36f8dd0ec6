//! Error handling foundation for the GLOF early warning system.
//!
//! The panels themselves never fail: readings are clamped and any role
//! resolves to a destination. Errors only come from the input-parsing layer
//! that turns raw form values into typed fields, and are reported with
//! rootcause so callers can attach their own context.

use rootcause::Report;
use std::fmt;

/// A Result type alias using rootcause's Report for error handling.
///
/// Each layer adds its own context via `.context()` as errors propagate.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;

/// Errors from parsing raw form input into typed panel fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The sensor key is not one of the three known readings.
    UnknownSensorField { key: String },
    /// The login field name is not one of role/username/password/department.
    UnknownLoginField { name: String },
    /// The reading text is not an integer.
    InvalidReading { input: String, reason: String },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSensorField { key } => {
                write!(f, "unknown sensor field: {key}")
            }
            Self::UnknownLoginField { name } => {
                write!(f, "unknown login field: {name}")
            }
            Self::InvalidReading { input, reason } => {
                write!(f, "invalid reading '{input}': {reason}")
            }
        }
    }
}

impl std::error::Error for InputError {}
