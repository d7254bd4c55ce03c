//! Loading contribution manifests into a registry.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use schemata_core::{ConfigurationNode, ContributionManifest};
use schemata_registry::{ConfigurationRegistry, RegistryOptions};
use serde::Serialize;

/// A property the key validator refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub manifest: String,
    pub key: String,
    pub reason: String,
}

/// A registry populated from manifests, plus what it refused.
#[derive(Debug)]
pub struct LoadedRegistry {
    pub registry: ConfigurationRegistry,
    pub rejections: Vec<Rejection>,
}

/// Read and parse one manifest file.
pub fn read_manifest(path: &Path) -> anyhow::Result<ContributionManifest> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read manifest {}", path.display()))?;
    ContributionManifest::from_json(&text)
        .with_context(|| format!("failed to parse manifest {}", path.display()))
}

/// Register every manifest in order: override identifiers, then default
/// overrides, then configuration nodes.
pub fn load_registry(
    paths: &[PathBuf],
    options: RegistryOptions,
    validate: bool,
) -> anyhow::Result<LoadedRegistry> {
    let mut registry = ConfigurationRegistry::with_options(options);
    let mut rejections = Vec::new();

    for path in paths {
        let manifest = read_manifest(path)?;
        tracing::debug!(manifest = %manifest.id, path = %path.display(), "registering manifest");

        registry.register_override_identifiers(manifest.override_identifiers.iter().cloned());
        if let Some(extension) = manifest.default_extension() {
            registry.register_default_configurations(&[extension]);
        }

        let nodes: Vec<Arc<ConfigurationNode>> = manifest
            .configuration_nodes()
            .into_iter()
            .map(Arc::new)
            .collect();
        let registration = registry.register_configurations_checked(&nodes, validate);
        rejections.extend(registration.rejected.into_iter().map(|error| Rejection {
            manifest: manifest.id.clone(),
            key: error.key().to_string(),
            reason: error.to_string(),
        }));
    }

    Ok(LoadedRegistry {
        registry,
        rejections,
    })
}
