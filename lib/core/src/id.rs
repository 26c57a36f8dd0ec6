//! Identifiers for logged sensor submissions.
//!
//! Submission IDs use ULID format so that log lines sort by the time the
//! snapshot was handed to the telemetry sink.

use std::fmt;
use ulid::Ulid;

/// Unique identifier for one sensor snapshot handed to a telemetry sink.
///
/// Displayed as `sub_<ulid>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionId(Ulid);

impl SubmissionId {
    const PREFIX: &'static str = "sub";

    /// Creates a new ID with a randomly generated ULID.
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", Self::PREFIX, self.0)
    }
}
