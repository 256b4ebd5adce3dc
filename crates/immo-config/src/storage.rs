//! Where records and the session live on disk.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_properties_file() -> String {
    "proprietes.txt".to_string()
}

fn default_users_file() -> String {
    "utilisateurs.txt".to_string()
}

fn default_session_file() -> String {
    "session.txt".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding the data files. Empty means the platform data
    /// directory (`~/.local/share/solo-immo` on Linux).
    #[serde(default)]
    pub data_dir: String,

    /// Property records file, relative to `data_dir` unless absolute.
    #[serde(default = "default_properties_file")]
    pub properties_file: String,

    /// Registered accounts file, relative to `data_dir` unless absolute.
    #[serde(default = "default_users_file")]
    pub users_file: String,

    /// Signed-in user file, relative to `data_dir` unless absolute.
    #[serde(default = "default_session_file")]
    pub session_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: String::new(),
            properties_file: default_properties_file(),
            users_file: default_users_file(),
            session_file: default_session_file(),
        }
    }
}

impl StorageConfig {
    /// Resolved data directory.
    ///
    /// Priority: explicit `data_dir` → platform data dir → `./.immo/data`.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        if !self.data_dir.trim().is_empty() {
            return PathBuf::from(self.data_dir.trim());
        }
        dirs::data_dir().map_or_else(
            || PathBuf::from(".immo").join("data"),
            |dir| dir.join("solo-immo"),
        )
    }

    #[must_use]
    pub fn properties_path(&self) -> PathBuf {
        self.resolve(&self.properties_file)
    }

    #[must_use]
    pub fn users_path(&self) -> PathBuf {
        self.resolve(&self.users_file)
    }

    #[must_use]
    pub fn session_path(&self) -> PathBuf {
        self.resolve(&self.session_file)
    }

    /// Reject empty or colliding file names.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("storage.properties_file", &self.properties_file),
            ("storage.users_file", &self.users_file),
            ("storage.session_file", &self.session_file),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: "file name must not be empty".to_string(),
                });
            }
        }

        let paths = [
            self.properties_path(),
            self.users_path(),
            self.session_path(),
        ];
        if paths[0] == paths[1] || paths[0] == paths[2] || paths[1] == paths[2] {
            return Err(ConfigError::InvalidValue {
                field: "storage".to_string(),
                reason: "properties, users and session files must be distinct".to_string(),
            });
        }
        Ok(())
    }

    fn resolve(&self, file: &str) -> PathBuf {
        let file = Path::new(file.trim());
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.data_dir().join(file)
        }
    }
}
