//! Construction options for [`crate::ConfigurationRegistry`].

use schemata_core::ids::AUXILIARY_RESOURCE_DOMAINS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryOptions {
    /// Resource-scoped domains reported by `scopes()` next to the registered
    /// properties (for example `launch` and `task`).
    pub resource_domains: Vec<String>,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            resource_domains: AUXILIARY_RESOURCE_DOMAINS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}
