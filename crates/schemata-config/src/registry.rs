//! Registry configuration.

use std::collections::BTreeSet;

use schemata_core::ids::AUXILIARY_RESOURCE_DOMAINS;
use schemata_registry::RegistryOptions;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_validate() -> bool {
    true
}

fn default_resource_domains() -> Vec<String> {
    AUXILIARY_RESOURCE_DOMAINS
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistryConfig {
    /// Whether contributed properties go through the key validator.
    #[serde(default = "default_validate")]
    pub validate: bool,

    /// Resource-scoped domains reported next to registered properties.
    #[serde(default = "default_resource_domains")]
    pub resource_domains: Vec<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            validate: default_validate(),
            resource_domains: default_resource_domains(),
        }
    }
}

impl RegistryConfig {
    /// Reject blank or repeated resource domain names.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending domain.
    pub fn check(&self) -> Result<(), ConfigError> {
        let mut seen = BTreeSet::new();
        for domain in &self.resource_domains {
            if domain.trim().is_empty() {
                return Err(invalid_domain("domain names must not be empty"));
            }
            if !seen.insert(domain.as_str()) {
                return Err(invalid_domain(&format!("'{domain}' is listed twice")));
            }
        }
        Ok(())
    }

    /// Options for `ConfigurationRegistry::with_options`.
    #[must_use]
    pub fn to_options(&self) -> RegistryOptions {
        RegistryOptions {
            resource_domains: self.resource_domains.clone(),
        }
    }
}

fn invalid_domain(reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: "registry.resource_domains".to_string(),
        reason: reason.to_string(),
    }
}
