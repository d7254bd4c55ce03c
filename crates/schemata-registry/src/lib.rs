//! # schemata-registry
//!
//! The configuration schema registry for Schemata.
//!
//! Producers contribute [`ConfigurationNode`](schemata_core::ConfigurationNode)
//! trees; the registry merges them into one key namespace and maintains:
//! - Included and excluded property maps
//! - Six aggregate scope buckets plus the resource-language bucket
//! - Synthesized `[identifier]` fragments for every known override identifier
//! - A default-overrides ledger for per-identifier defaults
//!
//! After every mutation the resource-language schema is republished to the
//! [`SchemaStore`] and listeners are notified through the registry's
//! `on_did_schema_change` / `on_did_update_configuration` subscriptions.
//!
//! ## Architecture
//!
//! Data types live in `schemata-core`. This crate owns the mutable state and
//! the rules that keep it consistent. There is no global instance: callers
//! construct a [`ConfigurationRegistry`] and pass it by reference.

pub mod error;
pub mod events;
pub mod ledger;
pub mod options;
pub mod partition;
pub mod pattern;
pub mod registry;
pub mod store;

pub use error::RegistryError;
pub use events::{Channel, Subscription};
pub use options::RegistryOptions;
pub use partition::ScopeBuckets;
pub use registry::{ConfigurationRegistry, Registration};
pub use store::{MemorySchemaStore, SchemaStore};
