use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use schemata_core::BucketKind;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Print one scope bucket.
    Bucket(BucketArgs),
    /// Print `(key, scope)` for every registered property and resource domain.
    Scopes(ManifestArgs),
    /// Print the included and excluded property maps.
    Properties(ManifestArgs),
    /// Report keys the key validator rejects (exit code 1 if any).
    Check(ManifestArgs),
}

/// One or more contribution manifests, registered in argument order.
#[derive(Clone, Debug, Args)]
pub struct ManifestArgs {
    #[arg(required = true)]
    pub manifests: Vec<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct BucketArgs {
    pub kind: BucketTarget,
    #[command(flatten)]
    pub input: ManifestArgs,
}

/// Bucket names accepted on the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum BucketTarget {
    All,
    Application,
    Machine,
    MachineOverridable,
    Window,
    Resource,
    ResourceLanguage,
}

impl BucketTarget {
    /// The aggregate bucket this names, or `None` for the resource-language bucket.
    #[must_use]
    pub const fn kind(self) -> Option<BucketKind> {
        match self {
            Self::All => Some(BucketKind::All),
            Self::Application => Some(BucketKind::Application),
            Self::Machine => Some(BucketKind::Machine),
            Self::MachineOverridable => Some(BucketKind::MachineOverridable),
            Self::Window => Some(BucketKind::Window),
            Self::Resource => Some(BucketKind::Resource),
            Self::ResourceLanguage => None,
        }
    }
}
