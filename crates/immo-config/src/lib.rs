//! # immo-config
//!
//! Layered configuration loading for Solo Immo using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`IMMO_*` prefix, `__` as separator)
//! 2. Project-level `.immo/config.toml`
//! 3. User-level `~/.config/solo-immo/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `IMMO_STORAGE__DATA_DIR` -> `storage.data_dir`,
//! `IMMO_GENERAL__DEFAULT_LIMIT` -> `general.default_limit`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use immo_config::ImmoConfig;
//!
//! let config = ImmoConfig::load_with_dotenv().expect("config");
//! println!("records: {}", config.storage.properties_path().display());
//! ```

mod error;
mod general;
mod storage;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "IMMO_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ImmoConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl ImmoConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// Load a `.env` file from the current directory (if any), then
    /// [`Self::load`].
    ///
    /// # Errors
    ///
    /// See [`Self::load_dotenv`] and [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv()?;
        Self::load()
    }

    /// Export the variables of the nearest `.env` file into the process
    /// environment. Variables already set are kept.
    ///
    /// Returns the path that was loaded, or `None` when there is no file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Dotenv` if a `.env` file exists but is malformed
    /// or unreadable.
    pub fn load_dotenv() -> Result<Option<PathBuf>, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => Ok(Some(path)),
            Err(error) if error.not_found() => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    /// Extract and validate from an arbitrary figment, for callers that
    /// layer extra providers on top of [`Self::figment`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction or validation fails.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.storage.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".immo/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("solo-immo").join("config.toml"))
    }
}
