//! Role to destination routing.
//!
//! The login panel never authenticates; submitting it only picks which view
//! to open based on the selected role.

use crate::login::Role;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A role-specific view the login panel can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    /// Administration view.
    Admin,
    /// Rescue authority view.
    Authority,
    /// Geologist view, also the default for any unmatched role.
    Geologist,
}

impl Destination {
    /// All destinations.
    pub const ALL: [Self; 3] = [Self::Admin, Self::Authority, Self::Geologist];

    /// Returns the route path of this destination.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Admin => "/admin",
            Self::Authority => "/authority",
            Self::Geologist => "/geologist",
        }
    }

    /// Returns the page title of this destination.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Admin => "Admin dashboard",
            Self::Authority => "Rescue authority view",
            Self::Geologist => "Geologist view",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Decides where a login with the given role goes.
///
/// `None` covers an unset or unrecognized role. Geology shares the default
/// arm with it and lands on the geologist view rather than a geology view of
/// its own. Whether geology should get its own view is undecided.
#[must_use]
pub const fn decide_route(role: Option<Role>) -> Destination {
    match role {
        Some(Role::Admin) => Destination::Admin,
        Some(Role::Rescue) => Destination::Authority,
        Some(Role::Geology) | None => Destination::Geologist,
    }
}

/// Decides the destination for a raw role identifier.
#[must_use]
pub fn decide_route_for(role: &str) -> Destination {
    decide_route(Role::from_identifier(role))
}
