//! Registration error types.

use thiserror::Error;

/// Why a single property was refused by the key validator.
///
/// Both variants are non-fatal: the offending property is dropped and the
/// rest of the batch is registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The key is already registered by another contributor.
    #[error("Cannot register '{key}'. This property is already registered.")]
    DuplicateKey { key: String },

    /// The key has the `[identifier]` override form.
    #[error(
        "Cannot register '{key}'. This matches property pattern '\\[.*\\]$' for describing \
         per-identifier settings. Use a default configuration contribution instead."
    )]
    ReservedPattern { key: String },
}

impl RegistryError {
    /// The rejected key.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::DuplicateKey { key } | Self::ReservedPattern { key } => key,
        }
    }
}
