use schemata_config::SchemataConfig;

use crate::cli::{Commands, GlobalFlags, ManifestArgs};
use crate::manifest::{LoadedRegistry, load_registry};

pub mod bucket;
pub mod check;
pub mod properties;
pub mod scopes;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(
    command: &Commands,
    config: &SchemataConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Bucket(args) => bucket::handle(args, config, flags),
        Commands::Scopes(args) => scopes::handle(args, config, flags),
        Commands::Properties(args) => properties::handle(args, config, flags),
        Commands::Check(args) => check::handle(args, config, flags),
    }
}

/// Build the registry every subcommand inspects.
fn load(
    args: &ManifestArgs,
    config: &SchemataConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<LoadedRegistry> {
    load_registry(
        &args.manifests,
        config.registry.to_options(),
        flags.validate(config.registry.validate),
    )
}
