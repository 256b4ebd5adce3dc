use anyhow::Context;
use immo_config::ImmoConfig;
use immo_core::Session;
use immo_store::{FileSessionStore, TextStore};

/// Stores and settings shared by every command, opened once at startup.
pub struct AppContext {
    pub config: ImmoConfig,
    pub store: TextStore,
    pub sessions: FileSessionStore,
}

impl AppContext {
    /// Open the record files named by `config`, creating them if needed.
    pub fn init(config: ImmoConfig) -> anyhow::Result<Self> {
        let store = TextStore::new(config.storage.properties_path(), config.storage.users_path());
        store.ensure_files().with_context(|| {
            format!(
                "failed to prepare data files in {}",
                config.storage.data_dir().display()
            )
        })?;

        let sessions = FileSessionStore::new(config.storage.session_path());

        tracing::debug!(
            properties = %store.properties_path().display(),
            users = %store.users_path().display(),
            session = %sessions.path().display(),
            "application context ready"
        );

        Ok(Self {
            config,
            store,
            sessions,
        })
    }

    /// The persisted session, as a value for the gate.
    pub fn session(&self) -> anyhow::Result<Session> {
        immo_auth::current_session(&self.sessions).context("failed to read the session file")
    }
}
