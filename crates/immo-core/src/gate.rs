//! Authorization gate: which actions the current [`Session`] may perform.
//!
//! Listing, filtering and adding properties require a signed-in user. An
//! anonymous listing attempt gets the fixed [`NO_PROPERTIES_MESSAGE`] and the
//! query engine is never run.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::criteria::FilterCriteria;
use crate::entities::{PropertyRecord, Session};
use crate::errors::AccessDenied;
use crate::query;

/// Shown when a listing is refused or yields nothing.
pub const NO_PROPERTIES_MESSAGE: &str = "Aucune propriété disponible.";

/// User-facing actions offered by the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    ListProperties,
    FilterProperties,
    AddProperty,
    Register,
    Login,
    Logout,
    Quit,
}

impl Action {
    #[must_use]
    pub const fn requires_authentication(self) -> bool {
        matches!(
            self,
            Self::ListProperties | Self::FilterProperties | Self::AddProperty
        )
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ListProperties => "list_properties",
            Self::FilterProperties => "filter_properties",
            Self::AddProperty => "add_property",
            Self::Register => "register",
            Self::Login => "login",
            Self::Logout => "logout",
            Self::Quit => "quit",
        }
    }

    /// Menu label, in the application's language.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ListProperties => "Lister les propriétés",
            Self::FilterProperties => "Filtrer les propriétés",
            Self::AddProperty => "Ajouter une propriété",
            Self::Register => "Créer un compte",
            Self::Login => "Connexion",
            Self::Logout => "Déconnexion",
            Self::Quit => "Quitter",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a gated listing or filtering request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingOutcome {
    /// No authenticated user; nothing was queried.
    Refused,
    Matches(Vec<PropertyRecord>),
}

#[must_use]
pub const fn is_authenticated(session: &Session) -> bool {
    session.is_authenticated()
}

/// Check whether `action` is permitted for `session`.
///
/// # Errors
///
/// Returns [`AccessDenied`] when the action needs a signed-in user and the
/// session is anonymous.
pub const fn authorize(session: &Session, action: Action) -> Result<(), AccessDenied> {
    if action.requires_authentication() && !is_authenticated(session) {
        return Err(AccessDenied { action });
    }
    Ok(())
}

/// Menu entries for the current session state, in display order.
#[must_use]
pub fn allowed_actions(session: &Session) -> Vec<Action> {
    if is_authenticated(session) {
        vec![
            Action::ListProperties,
            Action::FilterProperties,
            Action::AddProperty,
            Action::Logout,
            Action::Quit,
        ]
    } else {
        vec![
            Action::ListProperties,
            Action::FilterProperties,
            Action::Register,
            Action::Login,
            Action::Quit,
        ]
    }
}

/// Run [`query::filter`] only if the session may list properties.
///
/// An empty criteria is the "list all" path.
#[must_use]
pub fn guarded_query(
    session: &Session,
    records: &[PropertyRecord],
    criteria: &FilterCriteria,
) -> ListingOutcome {
    let action = if criteria.is_empty() {
        Action::ListProperties
    } else {
        Action::FilterProperties
    };
    match authorize(session, action) {
        Ok(()) => ListingOutcome::Matches(query::filter(records, criteria)),
        Err(_) => ListingOutcome::Refused,
    }
}
