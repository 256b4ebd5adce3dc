use anyhow::Context;
use immo_auth::AuthError;
use immo_core::Session;
use immo_core::responses::AuthResponse;
use immo_store::CredentialStore;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CredentialArgs;
use crate::commands::shared::credentials;
use crate::context::AppContext;
use crate::output::output;

pub fn handle(args: &CredentialArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (username, password) = credentials::resolve(args)?;
    let session = ctx.session()?;
    let response = register_account(&mut ctx.store, &session, &username, &password)?;
    output(&response, flags.format)
}

/// Create an account and report the outcome.
///
/// Registering does not sign in, so the response describes `session` as it
/// was. A taken or invalid name comes back as the message; only storage
/// failures are errors.
pub fn register_account<S>(
    store: &mut S,
    session: &Session,
    username: &str,
    password: &str,
) -> anyhow::Result<AuthResponse>
where
    S: CredentialStore + ?Sized,
{
    let message = match immo_auth::register(store, username, password) {
        Ok(()) => "Compte créé avec succès.".to_string(),
        Err(AuthError::Store(error)) => {
            return Err(error).context("failed to save account");
        }
        Err(error) => error.to_string(),
    };

    Ok(AuthResponse {
        authenticated: session.is_authenticated(),
        user: session.current_user().map(str::to_string),
        message,
    })
}

#[cfg(test)]
mod tests {
    use immo_core::Session;
    use immo_store::{CredentialStore, MemoryStore};
    use pretty_assertions::assert_eq;

    use super::register_account;

    #[test]
    fn new_account_is_stored() {
        let mut store = MemoryStore::new();

        let response =
            register_account(&mut store, &Session::anonymous(), "alice", "pw").expect("register");

        assert!(!response.authenticated);
        assert_eq!(response.message, "Compte créé avec succès.");
        assert!(store.load_credentials().expect("load").contains("alice"));
    }

    #[test]
    fn taken_name_is_reported_not_raised() {
        let mut store = MemoryStore::new();
        immo_auth::register(&mut store, "alice", "pw").expect("seed account");
        let session = Session::authenticated("bob");

        let response = register_account(&mut store, &session, "alice", "other").expect("register");

        assert!(response.authenticated);
        assert_eq!(response.user.as_deref(), Some("bob"));
        assert_eq!(response.message, "Nom d'utilisateur déjà pris: alice");
        assert_eq!(store.load_credentials().expect("load").len(), 1);
    }

    #[test]
    fn empty_password_is_reported_not_raised() {
        let mut store = MemoryStore::new();

        let response =
            register_account(&mut store, &Session::anonymous(), "alice", "").expect("register");

        assert_eq!(response.message, "Le mot de passe ne peut pas être vide.");
        assert!(store.load_credentials().expect("load").is_empty());
    }
}
