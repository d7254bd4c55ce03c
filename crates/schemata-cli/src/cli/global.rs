use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// Single-line JSON.
    Raw,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub no_validate: bool,
}

impl GlobalFlags {
    /// Whether to register with key validation: on unless either the flag or
    /// the configuration turns it off.
    #[must_use]
    pub const fn validate(&self, configured: bool) -> bool {
        configured && !self.no_validate
    }
}
