//! Error and refusal types raised by the core.
//!
//! None of these are faults: each one is reported back to the user and the
//! caller carries on. Storage and credential errors live in their own crates.

use thiserror::Error;

use crate::enums::{City, PropertyType};
use crate::gate::Action;

/// A raw user value that failed validation. The display text is the reason
/// shown before re-prompting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Input was not a whole number.
    #[error("Valeur invalide. Veuillez saisir un nombre.")]
    NotANumber { value: String },

    /// Input was a whole number but not strictly positive.
    #[error("Veuillez saisir un nombre positif.")]
    NotPositive { value: i64 },

    #[error("Ville invalide. Choisissez parmi: {}", City::choices())]
    UnknownCity { value: String },

    #[error("Type de propriété invalide. Choisissez parmi: {}", PropertyType::choices())]
    UnknownPropertyType { value: String },

    /// Both price bounds supplied, lower bound above upper bound.
    #[error("Le prix minimum doit être inférieur ou égal au prix maximum ({min} > {max}).")]
    InvertedRange { min: u64, max: u64 },

    /// A required value was left empty.
    #[error("Une valeur est requise.")]
    MissingValue,

    /// Username is empty or contains characters the record store cannot hold.
    #[error("Nom d'utilisateur invalide: {reason}")]
    InvalidUsername { reason: String },
}

/// An action was attempted without the session state it requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Connectez-vous pour accéder à « {} ».", .action.label())]
pub struct AccessDenied {
    pub action: Action,
}

/// Registration collided with an existing username.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Nom d'utilisateur déjà pris: {username}")]
pub struct DuplicateAccount {
    pub username: String,
}
