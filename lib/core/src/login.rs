//! Login panel state.
//!
//! The panel collects a role, a username, a password and, for the geology
//! role only, a department. Submitting it routes by role alone; username and
//! password are never checked.

use crate::error::{InputError, Result};
use crate::route::{Destination, decide_route};
use crate::sink::Navigator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// Role selectable on the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System administrator.
    Admin,
    /// Rescue team member.
    Rescue,
    /// Member of the geology department.
    Geology,
}

impl Role {
    /// All roles in selector order.
    pub const ALL: [Self; 3] = [Self::Admin, Self::Rescue, Self::Geology];

    /// Returns the identifier submitted by the role selector.
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Rescue => "rescue",
            Self::Geology => "geology",
        }
    }

    /// Returns the label shown in the role selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Rescue => "Rescue Team",
            Self::Geology => "Geology Department",
        }
    }

    /// Maps a selector value to a role.
    ///
    /// Matching is exact. Empty or unknown identifiers yield `None`, which is
    /// a valid (unset) selection rather than an error.
    #[must_use]
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|role| role.identifier() == identifier)
    }

    /// Returns true if selecting this role shows the department input.
    #[must_use]
    pub fn has_department(&self) -> bool {
        matches!(self, Self::Geology)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// A single input of the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoginField {
    Role,
    Username,
    Password,
    Department,
}

impl LoginField {
    /// All fields in form order.
    pub const ALL: [Self; 4] = [Self::Role, Self::Username, Self::Password, Self::Department];

    /// Returns the form input name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Role => "role",
            Self::Username => "username",
            Self::Password => "password",
            Self::Department => "department",
        }
    }

    /// Parses a field from its form input name.
    pub fn from_name(name: &str) -> Result<Self, InputError> {
        name.parse::<Self>().map_err(Into::into)
    }
}

impl FromStr for LoginField {
    type Err = InputError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| InputError::UnknownLoginField {
                name: s.to_string(),
            })
    }
}

/// Values entered on the login form.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginCredentials {
    role: Option<Role>,
    username: String,
    password: String,
    department: Option<String>,
}

impl LoginCredentials {
    /// Creates empty credentials with no role selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the selected role, if any.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Returns the entered username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the entered password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns the entered department. Always `None` unless the geology role
    /// is selected.
    #[must_use]
    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }

    /// Returns the current form value of `field`, empty when unset.
    #[must_use]
    pub fn get(&self, field: LoginField) -> &str {
        match field {
            LoginField::Role => self.role.map_or("", Role::identifier),
            LoginField::Username => &self.username,
            LoginField::Password => &self.password,
            LoginField::Department => self.department.as_deref().unwrap_or_default(),
        }
    }

    /// Returns true if the department input is shown for the current role.
    #[must_use]
    pub fn department_visible(&self) -> bool {
        self.role.is_some_and(|role| role.has_department())
    }

    /// Returns where submitting these credentials leads.
    #[must_use]
    pub fn destination(&self) -> Destination {
        decide_route(self.role)
    }

    /// Returns a copy with `field` set to `value`.
    ///
    /// Selecting a role without a department drops any department entered
    /// before, and a department entered while its input is hidden is ignored.
    #[must_use]
    pub fn with_field(mut self, field: LoginField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            LoginField::Role => {
                self.role = Role::from_identifier(&value);
                if !self.department_visible() {
                    self.department = None;
                }
            }
            LoginField::Username => self.username = value,
            LoginField::Password => self.password = value,
            LoginField::Department => {
                if self.department_visible() {
                    self.department = Some(value);
                } else {
                    debug!("Ignoring department for a role without one");
                }
            }
        }
        self
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("role", &self.role)
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .field("department", &self.department)
            .finish()
    }
}

/// Lifecycle of the login panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginState {
    /// Fields are being filled in.
    Editing,
    /// The form was submitted and navigation was requested.
    Submitted { destination: Destination },
}

/// State holder behind the "Login" section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginPanel {
    credentials: LoginCredentials,
    state: LoginState,
}

impl LoginPanel {
    /// Creates an empty panel in the editing state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            credentials: LoginCredentials::new(),
            state: LoginState::Editing,
        }
    }

    /// Returns the values entered so far.
    #[must_use]
    pub fn credentials(&self) -> &LoginCredentials {
        &self.credentials
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> LoginState {
        self.state
    }

    /// Returns true once the panel has been submitted.
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        matches!(self.state, LoginState::Submitted { .. })
    }

    /// Returns true if the department input should be rendered.
    #[must_use]
    pub fn department_visible(&self) -> bool {
        self.credentials.department_visible()
    }

    /// Sets one field, leaving the others as they are.
    ///
    /// Ignored once the panel has been submitted.
    pub fn set_field(&mut self, field: LoginField, value: impl Into<String>) {
        if self.is_submitted() {
            debug!(field = field.name(), "Ignoring edit of submitted login form");
            return;
        }
        self.credentials = std::mem::take(&mut self.credentials).with_field(field, value);
    }

    /// Submits the form: picks the destination for the selected role and
    /// asks `navigator` to go there.
    ///
    /// The entered credentials are discarded. Submitting again returns the
    /// same destination without navigating a second time.
    pub fn submit(&mut self, navigator: &dyn Navigator) -> Destination {
        if let LoginState::Submitted { destination } = self.state {
            debug!(%destination, "Login form already submitted");
            return destination;
        }

        let credentials = std::mem::take(&mut self.credentials);
        let destination = credentials.destination();
        info!(
            role = ?credentials.role(),
            %destination,
            "Login submitted"
        );

        self.state = LoginState::Submitted { destination };
        navigator.navigate(destination);
        destination
    }
}

impl Default for LoginPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            let bytes = self.0.lock().expect("log buffer").clone();
            String::from_utf8(bytes).expect("utf-8 logs")
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("log buffer").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        visited: RefCell<Vec<Destination>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, destination: Destination) {
            self.visited.borrow_mut().push(destination);
        }
    }

    fn submit_with(fields: &[(LoginField, &str)]) -> Vec<Destination> {
        let mut panel = LoginPanel::new();
        for (field, value) in fields {
            panel.set_field(*field, *value);
        }
        let navigator = RecordingNavigator::default();
        panel.submit(&navigator);
        navigator.visited.into_inner()
    }

    #[test]
    fn role_identifiers_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::from_identifier(role.identifier()), Some(role));
        }
        assert_eq!(Role::from_identifier(""), None);
        assert_eq!(Role::from_identifier("Geology"), None);
    }

    #[test]
    fn role_labels() {
        assert_eq!(Role::Admin.label(), "Admin");
        assert_eq!(Role::Rescue.label(), "Rescue Team");
        assert_eq!(Role::Geology.label(), "Geology Department");
    }

    #[test]
    fn role_serialization_format() {
        let json = serde_json::to_string(&Role::Rescue).expect("serialize");
        assert_eq!(json, "\"rescue\"");
    }

    #[test]
    fn login_field_names() {
        for field in LoginField::ALL {
            assert_eq!(field.name().parse::<LoginField>(), Ok(field));
        }
        assert_eq!(
            "otp".parse::<LoginField>(),
            Err(InputError::UnknownLoginField {
                name: "otp".to_string()
            })
        );
        assert!(LoginField::from_name("email").is_err());
    }

    #[test]
    fn credentials_start_empty() {
        let credentials = LoginCredentials::new();
        assert_eq!(credentials.role(), None);
        assert_eq!(credentials.username(), "");
        assert_eq!(credentials.password(), "");
        assert_eq!(credentials.department(), None);
        assert!(!credentials.department_visible());
    }

    #[test]
    fn with_field_sets_only_that_field() {
        let credentials = LoginCredentials::new()
            .with_field(LoginField::Username, "alice")
            .with_field(LoginField::Password, "secret")
            .with_field(LoginField::Role, "admin");

        assert_eq!(credentials.role(), Some(Role::Admin));
        assert_eq!(credentials.username(), "alice");
        assert_eq!(credentials.password(), "secret");

        let updated = credentials.clone().with_field(LoginField::Username, "bob");
        assert_eq!(updated.username(), "bob");
        assert_eq!(updated.password(), credentials.password());
        assert_eq!(updated.role(), credentials.role());
    }

    #[test]
    fn get_returns_form_values() {
        let credentials = LoginCredentials::new()
            .with_field(LoginField::Role, "geology")
            .with_field(LoginField::Username, "pema")
            .with_field(LoginField::Department, "Glaciology");

        assert_eq!(credentials.get(LoginField::Role), "geology");
        assert_eq!(credentials.get(LoginField::Username), "pema");
        assert_eq!(credentials.get(LoginField::Password), "");
        assert_eq!(credentials.get(LoginField::Department), "Glaciology");
        assert_eq!(LoginCredentials::new().get(LoginField::Role), "");
    }

    #[test]
    fn department_visible_only_for_geology() {
        let mut credentials = LoginCredentials::new();
        for (role, visible) in [
            ("geology", true),
            ("admin", false),
            ("rescue", false),
            ("", false),
            ("unknown", false),
            ("geology", true),
        ] {
            credentials = credentials.with_field(LoginField::Role, role);
            assert_eq!(credentials.department_visible(), visible, "role {role:?}");
        }
    }

    #[test]
    fn department_is_not_retained_across_role_toggle() {
        let credentials = LoginCredentials::new()
            .with_field(LoginField::Role, "geology")
            .with_field(LoginField::Department, "Glaciology")
            .with_field(LoginField::Role, "rescue")
            .with_field(LoginField::Role, "geology");

        assert!(credentials.department_visible());
        assert_eq!(credentials.department(), None);
    }

    #[test]
    fn department_kept_while_geology_selected() {
        let credentials = LoginCredentials::new()
            .with_field(LoginField::Role, "geology")
            .with_field(LoginField::Department, "Hydrology")
            .with_field(LoginField::Role, "geology");
        assert_eq!(credentials.department(), Some("Hydrology"));
    }

    #[test]
    fn hidden_department_is_ignored() {
        let credentials = LoginCredentials::new()
            .with_field(LoginField::Role, "admin")
            .with_field(LoginField::Department, "Glaciology");
        assert_eq!(credentials.department(), None);
    }

    #[test]
    fn debug_output_redacts_password() {
        let credentials = LoginCredentials::new().with_field(LoginField::Password, "hunter2");
        let debug = format!("{credentials:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("[redacted]"));
    }

    #[test]
    fn admin_with_empty_password_goes_to_admin() {
        let visited = submit_with(&[
            (LoginField::Role, "admin"),
            (LoginField::Username, "a"),
            (LoginField::Password, ""),
        ]);
        assert_eq!(visited, vec![Destination::Admin]);
        assert_eq!(visited[0].path(), "/admin");
    }

    #[test]
    fn rescue_goes_to_authority() {
        let visited = submit_with(&[(LoginField::Role, "rescue")]);
        assert_eq!(visited, vec![Destination::Authority]);
        assert_eq!(visited[0].path(), "/authority");
    }

    #[test]
    fn geology_goes_to_geologist_like_unset_role() {
        let geology = submit_with(&[
            (LoginField::Role, "geology"),
            (LoginField::Department, "Glaciology"),
        ]);
        let unset = submit_with(&[]);
        assert_eq!(geology, vec![Destination::Geologist]);
        assert_eq!(geology, unset);
    }

    #[test]
    fn routing_uses_latest_role() {
        let visited = submit_with(&[(LoginField::Role, "admin"), (LoginField::Role, "rescue")]);
        assert_eq!(visited, vec![Destination::Authority]);
    }

    #[test]
    fn submit_log_omits_username_and_password() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut panel = LoginPanel::new();
            panel.set_field(LoginField::Role, "admin");
            panel.set_field(LoginField::Username, "pema.sherpa");
            panel.set_field(LoginField::Password, "hunter2");
            panel.submit(&RecordingNavigator::default());
        });

        let output = logs.contents();
        assert!(output.contains("Login submitted"));
        assert!(output.contains("/admin"));
        assert!(!output.contains("pema.sherpa"));
        assert!(!output.contains("hunter2"));
    }

    #[test]
    fn submit_moves_to_submitted_and_discards_credentials() {
        let mut panel = LoginPanel::new();
        assert_eq!(panel.state(), LoginState::Editing);
        panel.set_field(LoginField::Role, "admin");
        panel.set_field(LoginField::Password, "secret");

        let navigator = RecordingNavigator::default();
        let destination = panel.submit(&navigator);

        assert_eq!(destination, Destination::Admin);
        assert_eq!(
            panel.state(),
            LoginState::Submitted {
                destination: Destination::Admin
            }
        );
        assert_eq!(panel.credentials(), &LoginCredentials::new());
    }

    #[test]
    fn submitted_is_terminal() {
        let mut panel = LoginPanel::new();
        panel.set_field(LoginField::Role, "rescue");

        let navigator = RecordingNavigator::default();
        panel.submit(&navigator);
        panel.set_field(LoginField::Role, "admin");
        let again = panel.submit(&navigator);

        assert_eq!(again, Destination::Authority);
        assert_eq!(panel.credentials().role(), None);
        assert_eq!(navigator.visited.borrow().as_slice(), &[Destination::Authority]);
    }
}
