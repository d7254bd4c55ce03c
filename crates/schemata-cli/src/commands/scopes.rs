use schemata_config::SchemataConfig;
use schemata_core::ConfigurationScope;
use serde::Serialize;

use crate::cli::{GlobalFlags, ManifestArgs};
use crate::output::output;

#[derive(Debug, Serialize)]
struct ScopeEntry {
    key: String,
    scope: Option<ConfigurationScope>,
}

/// Handle `schemata scopes`.
pub fn handle(args: &ManifestArgs, config: &SchemataConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let loaded = super::load(args, config, flags)?;
    let entries: Vec<ScopeEntry> = loaded
        .registry
        .scopes()
        .into_iter()
        .map(|(key, scope)| ScopeEntry { key, scope })
        .collect();
    output(&entries, flags.format)
}
