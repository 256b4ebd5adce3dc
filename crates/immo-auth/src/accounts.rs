//! Registration, sign-in and sign-out.

use immo_core::validation::parse_username;
use immo_core::{Session, UserCredential};
use immo_store::{CredentialStore, SessionStore};

use crate::credential::{digests_match, hash_password};
use crate::error::AuthError;

/// Compared against when the username is unknown, so both failure paths do
/// the same amount of work.
const UNKNOWN_USER_DIGEST: &str =
    "0000000000000000000000000000000000000000000000000000000000000000";

/// Register a new account.
///
/// # Errors
///
/// - `AuthError::Validation` if the username is empty or unstorable
/// - `AuthError::EmptyPassword` if the password is empty
/// - `AuthError::DuplicateAccount` if the name is taken; nothing is written
/// - `AuthError::Store` if the credential store fails
pub fn register<S>(store: &mut S, username: &str, password: &str) -> Result<(), AuthError>
where
    S: CredentialStore + ?Sized,
{
    let username = parse_username(username)?;
    if password.is_empty() {
        return Err(AuthError::EmptyPassword);
    }

    let mut credentials = store.load_credentials()?;
    if let Err(duplicate) = credentials.insert(UserCredential {
        username: username.clone(),
        password_hash: hash_password(password),
    }) {
        tracing::info!(%username, "registration refused: username taken");
        return Err(duplicate.into());
    }

    store.save_credentials(&credentials)?;
    tracing::info!(%username, accounts = credentials.len(), "account registered");
    Ok(())
}

/// Sign in and record the user in the session store.
///
/// Returns the resulting session.
///
/// # Errors
///
/// - `AuthError::InvalidCredentials` for an unknown user or a wrong password
/// - `AuthError::Store` if either store fails
pub fn login<C, S>(
    credentials: &C,
    sessions: &mut S,
    username: &str,
    password: &str,
) -> Result<Session, AuthError>
where
    C: CredentialStore + ?Sized,
    S: SessionStore + ?Sized,
{
    let username = username.trim();
    let known = credentials.load_credentials()?;
    let stored = known
        .get(username)
        .map_or(UNKNOWN_USER_DIGEST, |credential| {
            credential.password_hash.as_str()
        });

    let digest_ok = digests_match(&hash_password(password), stored);
    if !(digest_ok && known.contains(username)) {
        tracing::info!("sign-in refused");
        return Err(AuthError::InvalidCredentials);
    }

    sessions.set_current_user(username)?;
    tracing::info!(%username, "signed in");
    Ok(Session::authenticated(username))
}

/// Sign out. Returns whether someone was signed in; signing out of an empty
/// session succeeds and changes nothing.
///
/// # Errors
///
/// Returns `AuthError::Store` if the session store fails.
pub fn logout<S>(sessions: &mut S) -> Result<bool, AuthError>
where
    S: SessionStore + ?Sized,
{
    let previous = sessions.current_user()?;
    sessions.clear()?;
    if let Some(user) = &previous {
        tracing::info!(%user, "signed out");
    }
    Ok(previous.is_some())
}

/// Read the session store into a [`Session`] value for the gate.
///
/// # Errors
///
/// Returns `AuthError::Store` if the session store fails.
pub fn current_session<S>(sessions: &S) -> Result<Session, AuthError>
where
    S: SessionStore + ?Sized,
{
    Ok(Session::from_stored(sessions.current_user()?))
}
