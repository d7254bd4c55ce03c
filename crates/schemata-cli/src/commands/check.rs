use anyhow::bail;
use schemata_config::SchemataConfig;
use serde::Serialize;

use crate::cli::{GlobalFlags, ManifestArgs};
use crate::manifest::Rejection;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CheckResponse<'a> {
    manifests: usize,
    registered: usize,
    rejected: &'a [Rejection],
}

/// Handle `schemata check`.
pub fn handle(args: &ManifestArgs, config: &SchemataConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let loaded = super::load(args, config, flags)?;
    let response = CheckResponse {
        manifests: args.manifests.len(),
        registered: loaded.registry.configuration_properties().len(),
        rejected: &loaded.rejections,
    };
    output(&response, flags.format)?;

    let rejected = loaded.rejections.len();
    if rejected > 0 {
        bail!("{rejected} configuration key(s) rejected");
    }
    Ok(())
}
