//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default result limit; 0 means "show everything".
const fn default_limit() -> u32 {
    0
}

fn default_banner() -> String {
    "Bienvenue sur Solo Immo !".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default cap on listed properties (0 = no cap).
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Greeting printed when the interactive menu starts.
    #[serde(default = "default_banner")]
    pub banner: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            banner: default_banner(),
        }
    }
}
