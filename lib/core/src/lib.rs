//! Core domain types and decision logic for the GLOF early warning system.
//!
//! This crate holds the state behind the landing screen, independent of any
//! UI framework:
//! - Sensor panel: three simulated readings (`SensorReadings`) that are
//!   clamped into `[0, 100]` and handed to a `TelemetrySink` on submit
//! - Login panel: role, username, password and a geology-only department
//!   (`LoginCredentials`), plus the role routing decision (`decide_route`)
//!   that is handed to a `Navigator`
//!
//! No credentials are verified anywhere in this crate.
//!
//! # Example
//!
//! ```
//! use glof_ews_core::{Destination, LoginField, LoginPanel, Navigator};
//! use std::cell::RefCell;
//!
//! #[derive(Default)]
//! struct Recorder(RefCell<Vec<Destination>>);
//!
//! impl Navigator for Recorder {
//!     fn navigate(&self, destination: Destination) {
//!         self.0.borrow_mut().push(destination);
//!     }
//! }
//!
//! let mut panel = LoginPanel::new();
//! panel.set_field(LoginField::Role, "rescue");
//! panel.set_field(LoginField::Username, "team-lead");
//!
//! let navigator = Recorder::default();
//! assert_eq!(panel.submit(&navigator), Destination::Authority);
//! assert_eq!(navigator.0.borrow().as_slice(), &[Destination::Authority]);
//! ```

pub mod error;
pub mod id;
pub mod login;
pub mod route;
pub mod sensor;
pub mod sink;

pub use error::{InputError, Result};
pub use id::SubmissionId;
pub use login::{LoginCredentials, LoginField, LoginPanel, LoginState, Role};
pub use route::{Destination, decide_route, decide_route_for};
pub use sensor::{Reading, SensorField, SensorPanel, SensorReadings, parse_reading};
pub use sink::{Navigator, TelemetrySink, TracingTelemetrySink};
