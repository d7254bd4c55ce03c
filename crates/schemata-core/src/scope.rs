//! Applicability scopes for configuration properties.
//!
//! All scopes use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ConfigurationScope
// ---------------------------------------------------------------------------

/// The tier at which a setting may be configured.
///
/// ```text
/// application          user settings only
/// machine              user/remote settings, never synced
/// window               user/workspace settings (fallback for unscoped properties)
/// resource             user/workspace/folder settings
/// language_overridable resource + may appear under `[identifier]` sections
/// machine_overridable  machine, but workspace/folder may override
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ConfigurationScope {
    Application,
    Machine,
    Window,
    Resource,
    LanguageOverridable,
    MachineOverridable,
}

impl ConfigurationScope {
    /// Scope applied to properties whose node chain declares none.
    pub const FALLBACK: Self = Self::Window;

    /// All scopes in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Application,
        Self::Machine,
        Self::Window,
        Self::Resource,
        Self::LanguageOverridable,
        Self::MachineOverridable,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Application => "application",
            Self::Machine => "machine",
            Self::Window => "window",
            Self::Resource => "resource",
            Self::LanguageOverridable => "language_overridable",
            Self::MachineOverridable => "machine_overridable",
        }
    }

    /// Whether settings of this scope may appear under `[identifier]` sections.
    #[must_use]
    pub const fn is_language_overridable(self) -> bool {
        matches!(self, Self::LanguageOverridable)
    }
}

impl fmt::Display for ConfigurationScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
