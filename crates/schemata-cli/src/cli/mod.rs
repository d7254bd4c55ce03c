use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{BucketArgs, BucketTarget, Commands, ManifestArgs};

/// Top-level CLI parser for the `schemata` binary.
#[derive(Debug, Parser)]
#[command(
    name = "schemata",
    version,
    about = "Schemata - configuration schema registry inspector"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Register without key validation (duplicates replace, `[id]` keys accepted)
    #[arg(long, global = true)]
    pub no_validate: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            no_validate: self.no_validate,
        }
    }
}
