use std::collections::BTreeMap;

use schemata_config::SchemataConfig;
use schemata_core::PropertySchema;
use serde::Serialize;

use crate::cli::{GlobalFlags, ManifestArgs};
use crate::output::output;

#[derive(Debug, Serialize)]
struct PropertiesResponse<'a> {
    included: &'a BTreeMap<String, PropertySchema>,
    excluded: &'a BTreeMap<String, PropertySchema>,
}

/// Handle `schemata properties`.
pub fn handle(args: &ManifestArgs, config: &SchemataConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let loaded = super::load(args, config, flags)?;
    let response = PropertiesResponse {
        included: loaded.registry.configuration_properties(),
        excluded: loaded.registry.excluded_configuration_properties(),
    };
    output(&response, flags.format)
}
