use anyhow::Context;
use figment::providers::Serialized;
use immo_config::ImmoConfig;

use crate::cli::GlobalFlags;

/// Load configuration: `.env`, then the figment layers, then `--data-dir`.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<ImmoConfig> {
    if let Some(path) = ImmoConfig::load_dotenv().context("failed to load .env file")? {
        tracing::debug!(path = %path.display(), "loaded dotenv file");
    }

    let mut figment = ImmoConfig::figment();
    if let Some(data_dir) = &flags.data_dir {
        figment = figment.merge(Serialized::default("storage.data_dir", data_dir));
    }

    let config = ImmoConfig::from_figment(figment).context("failed to load configuration")?;
    tracing::debug!(
        data_dir = %config.storage.data_dir().display(),
        "configuration loaded"
    );
    Ok(config)
}
