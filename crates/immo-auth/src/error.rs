use immo_core::{DuplicateAccount, ValidationError};
use immo_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    DuplicateAccount(#[from] DuplicateAccount),

    /// Deliberately vague: does not say which half was wrong.
    #[error("Nom d'utilisateur ou mot de passe incorrect.")]
    InvalidCredentials,

    #[error("Le mot de passe ne peut pas être vide.")]
    EmptyPassword,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("credential storage error: {0}")]
    Store(#[from] StoreError),
}
