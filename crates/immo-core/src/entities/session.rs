use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The signed-in user, if any.
///
/// This is a plain value handed to the gate by the caller. Persisting it
/// across process runs is the job of a `SessionStore`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Session {
    user: Option<String>,
}

impl Session {
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { user: None }
    }

    #[must_use]
    pub fn authenticated(username: impl Into<String>) -> Self {
        Self::from_stored(Some(username.into()))
    }

    /// Build a session from whatever the session store returned. Blank
    /// values count as signed out.
    #[must_use]
    pub fn from_stored(user: Option<String>) -> Self {
        Self {
            user: user
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty()),
        }
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
