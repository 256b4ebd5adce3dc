//! # immo-store
//!
//! Persistence capabilities for Solo Immo.
//!
//! The core only ever sees three small traits with load-all / save-all
//! semantics. Saving always replaces the whole collection, so every load
//! returns a complete snapshot.
//!
//! Backends:
//! - [`TextStore`]: comma-delimited text files with a header line
//! - [`FileSessionStore`]: single-line session file
//! - [`MemoryStore`] / [`MemorySessionStore`]: in-process, for tests

pub mod error;
pub mod memory;
pub mod session_file;
pub mod text;

mod atomic;

pub use error::StoreError;
pub use memory::{MemorySessionStore, MemoryStore};
pub use session_file::FileSessionStore;
pub use text::TextStore;

use immo_core::{CredentialSet, PropertyRecord};

/// Durable collection of property records.
pub trait PropertyStore {
    /// Load every record in insertion order. Empty when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing data cannot be read or decoded.
    fn load_properties(&self) -> Result<Vec<PropertyRecord>, StoreError>;

    /// Replace the stored collection with `records`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the collection cannot be written.
    fn save_properties(&mut self, records: &[PropertyRecord]) -> Result<(), StoreError>;

    /// Append one record by rewriting the whole collection. Returns the new
    /// record count.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if loading or saving fails.
    fn append_property(&mut self, record: PropertyRecord) -> Result<usize, StoreError> {
        let mut records = self.load_properties()?;
        records.push(record);
        self.save_properties(&records)?;
        Ok(records.len())
    }
}

/// Durable set of registered accounts.
pub trait CredentialStore {
    /// # Errors
    ///
    /// Returns `StoreError` if the backing data cannot be read or decoded.
    fn load_credentials(&self) -> Result<CredentialSet, StoreError>;

    /// Replace the stored accounts with `credentials`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the set cannot be written.
    fn save_credentials(&mut self, credentials: &CredentialSet) -> Result<(), StoreError>;
}

/// Process-wide "who is signed in" slot, persisted between runs.
pub trait SessionStore {
    /// # Errors
    ///
    /// Returns `StoreError` if the session cannot be read.
    fn current_user(&self) -> Result<Option<String>, StoreError>;

    /// Replace any previous session with `username`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the session cannot be written.
    fn set_current_user(&mut self, username: &str) -> Result<(), StoreError>;

    /// Sign out. Clearing an empty session is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the session cannot be written.
    fn clear(&mut self) -> Result<(), StoreError>;
}
