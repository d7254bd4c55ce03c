use schemata_config::SchemataConfig;

use crate::cli::{BucketArgs, GlobalFlags};
use crate::output::output;

/// Handle `schemata bucket`.
pub fn handle(args: &BucketArgs, config: &SchemataConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let loaded = super::load(&args.input, config, flags)?;
    let registry = &loaded.registry;
    let bucket = match args.kind.kind() {
        Some(kind) => registry.bucket(kind),
        None => registry.resource_language_settings(),
    };
    output(bucket, flags.format)
}
