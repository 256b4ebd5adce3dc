use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::DuplicateAccount;

/// A registered account. The password is only ever held as a digest.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserCredential {
    pub username: String,
    pub password_hash: String,
}

/// Registered accounts in registration order.
///
/// No two entries share a username; [`CredentialSet::insert`] is the only way
/// to add one and it refuses duplicates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CredentialSet {
    entries: Vec<UserCredential>,
}

impl CredentialSet {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a credential.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateAccount`] if the username is already registered; the
    /// set is left unchanged.
    pub fn insert(&mut self, credential: UserCredential) -> Result<(), DuplicateAccount> {
        if self.contains(&credential.username) {
            return Err(DuplicateAccount {
                username: credential.username,
            });
        }
        self.entries.push(credential);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, username: &str) -> Option<&UserCredential> {
        self.entries.iter().find(|entry| entry.username == username)
    }

    #[must_use]
    pub fn contains(&self, username: &str) -> bool {
        self.get(username).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UserCredential> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
