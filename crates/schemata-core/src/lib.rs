//! # schemata-core
//!
//! Core types for Schemata, the configuration schema registry.
//!
//! This crate provides the data model shared by the registry and its consumers:
//! - Configuration nodes, property schemas, and scopes
//! - Scope buckets shaped for JSON-schema publication
//! - Override-identifier key helpers (`[identifier]`)
//! - The default-value synthesizer
//! - Contribution manifests and their error type
//! - Well-known schema and node identifiers

pub mod bucket;
pub mod defaults;
pub mod errors;
pub mod ids;
pub mod manifest;
pub mod node;
pub mod overrides;
pub mod schema;
pub mod scope;

pub use bucket::{BucketKind, SettingsBucket};
pub use defaults::default_for;
pub use errors::CoreError;
pub use manifest::ContributionManifest;
pub use node::{ConfigurationNode, DefaultConfigurationExtension, ExtensionInfo};
pub use schema::{PropertySchema, SchemaType};
pub use scope::ConfigurationScope;
