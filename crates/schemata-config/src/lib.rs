//! # schemata-config
//!
//! Layered configuration loading for Schemata using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SCHEMATA_*` prefix, `__` as separator)
//! 2. Project-level `.schemata/config.toml`
//! 3. User-level `~/.config/schemata/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SCHEMATA_REGISTRY__VALIDATE` -> `registry.validate` and
//! `SCHEMATA_GENERAL__LOG_LEVEL` -> `general.log_level`.
//!
//! # Usage
//!
//! ```no_run
//! use schemata_config::SchemataConfig;
//! use schemata_registry::ConfigurationRegistry;
//!
//! let config = SchemataConfig::load().expect("config");
//! let registry = ConfigurationRegistry::with_options(config.registry.to_options());
//! ```

mod error;
mod general;
mod registry;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use registry::RegistryConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SchemataConfig {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl SchemataConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and check the result.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed and
    /// `ConfigError::InvalidValue` if a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// Reads the nearest `.env` walking up from the current directory, then
    /// behaves like [`Self::load`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        if let Err(error) = dotenvy::dotenv() {
            if !error.not_found() {
                return Err(ConfigError::InvalidValue {
                    field: ".env".to_string(),
                    reason: error.to_string(),
                });
            }
        }
        Self::load()
    }

    /// Extract and check a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.check()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
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
        let local_path = Path::new(".schemata").join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("SCHEMATA_").split("__"))
    }

    /// Validate cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for the first offending field.
    pub fn check(&self) -> Result<(), ConfigError> {
        self.registry.check()?;
        if self.general.log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "general.log_level".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("schemata").join("config.toml"))
    }
}
