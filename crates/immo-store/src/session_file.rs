//! File-backed session slot.
//!
//! The file holds the signed-in username on its first line, or nothing. It
//! is written owner-only on Unix.

use std::path::{Path, PathBuf};

use crate::SessionStore;
use crate::atomic::{read_or_empty, write_atomic};
use crate::error::StoreError;

#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn current_user(&self) -> Result<Option<String>, StoreError> {
        let contents = read_or_empty(&self.path)?;
        Ok(contents
            .lines()
            .next()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string))
    }

    fn set_current_user(&mut self, username: &str) -> Result<(), StoreError> {
        if username.contains(['\n', '\r']) {
            return Err(StoreError::InvalidField {
                field: "username",
                reason: "contains a line break".to_string(),
            });
        }
        write_atomic(&self.path, &format!("{username}\n"), true)?;
        tracing::debug!(path = %self.path.display(), "session set");
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        if read_or_empty(&self.path)?.trim().is_empty() {
            return Ok(());
        }
        write_atomic(&self.path, "", true)?;
        tracing::debug!(path = %self.path.display(), "session cleared");
        Ok(())
    }
}
