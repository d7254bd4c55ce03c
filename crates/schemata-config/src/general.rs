//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default tracing filter when neither `SCHEMATA_LOG` nor a CLI flag sets one.
fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// `EnvFilter` directive used by the CLI (e.g. `"info"`, `"schemata_registry=debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}
