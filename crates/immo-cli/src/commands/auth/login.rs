use anyhow::Context;
use immo_auth::AuthError;
use immo_core::responses::AuthResponse;
use immo_store::{CredentialStore, SessionStore};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CredentialArgs;
use crate::commands::shared::credentials;
use crate::context::AppContext;
use crate::output::output;

pub fn handle(args: &CredentialArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (username, password) = credentials::resolve(args)?;
    let response = sign_in(&ctx.store, &mut ctx.sessions, &username, &password)?;
    output(&response, flags.format)
}

/// Sign in and report the session that results.
///
/// Wrong credentials leave the session as it was and come back as the
/// message.
pub fn sign_in<C, S>(
    store: &C,
    sessions: &mut S,
    username: &str,
    password: &str,
) -> anyhow::Result<AuthResponse>
where
    C: CredentialStore + ?Sized,
    S: SessionStore + ?Sized,
{
    let (session, message) = match immo_auth::login(store, sessions, username, password) {
        Ok(session) => (session, "Connexion réussie.".to_string()),
        Err(AuthError::Store(error)) => {
            return Err(error).context("failed to sign in");
        }
        Err(error) => {
            let current = immo_auth::current_session(&*sessions)
                .context("failed to read the session file")?;
            (current, error.to_string())
        }
    };

    Ok(AuthResponse {
        authenticated: session.is_authenticated(),
        user: session.current_user().map(str::to_string),
        message,
    })
}
