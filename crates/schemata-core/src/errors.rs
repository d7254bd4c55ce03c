//! Cross-cutting error types for Schemata.
//!
//! Registration failures (`RegistryError`) live in `schemata-registry`; this
//! module covers decoding of contribution manifests.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Contributed JSON did not match the node/extension shape.
    #[error("Invalid contribution: {0}")]
    Json(#[from] serde_json::Error),
}
