//! In-process backends. Nothing survives the process; used by tests and by
//! callers that embed the engine without files.

use immo_core::{CredentialSet, PropertyRecord};

use crate::error::StoreError;
use crate::{CredentialStore, PropertyStore, SessionStore};

/// Properties and credentials held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    properties: Vec<PropertyRecord>,
    credentials: CredentialSet,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_properties(properties: Vec<PropertyRecord>) -> Self {
        Self {
            properties,
            credentials: CredentialSet::new(),
        }
    }
}

impl PropertyStore for MemoryStore {
    fn load_properties(&self) -> Result<Vec<PropertyRecord>, StoreError> {
        Ok(self.properties.clone())
    }

    fn save_properties(&mut self, records: &[PropertyRecord]) -> Result<(), StoreError> {
        self.properties = records.to_vec();
        Ok(())
    }
}

impl CredentialStore for MemoryStore {
    fn load_credentials(&self) -> Result<CredentialSet, StoreError> {
        Ok(self.credentials.clone())
    }

    fn save_credentials(&mut self, credentials: &CredentialSet) -> Result<(), StoreError> {
        self.credentials = credentials.clone();
        Ok(())
    }
}

/// Session slot held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    user: Option<String>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn signed_in(username: impl Into<String>) -> Self {
        Self {
            user: Some(username.into()),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn current_user(&self) -> Result<Option<String>, StoreError> {
        Ok(self.user.clone())
    }

    fn set_current_user(&mut self, username: &str) -> Result<(), StoreError> {
        self.user = Some(username.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.user = None;
        Ok(())
    }
}
