//! Contribution manifests: one producer's configuration contributions as JSON.
//!
//! ```json
//! {
//!   "id": "vendor.python",
//!   "displayName": "Python",
//!   "configuration": { "title": "Python", "properties": { ... } },
//!   "configurationDefaults": { "[python]": { "editor.tabSize": 4 } },
//!   "overrideIdentifiers": ["python"]
//! }
//! ```
//!
//! `configuration` accepts a single node or a list of nodes.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::CoreError;
use crate::node::{ConfigurationNode, DefaultConfigurationExtension, ExtensionInfo};

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(Box<ConfigurationNode>),
    Many(Vec<ConfigurationNode>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<ConfigurationNode>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(node) => vec![*node],
        OneOrMany::Many(nodes) => nodes,
    })
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContributionManifest {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(
        default,
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    #[schemars(with = "Vec<ConfigurationNode>")]
    pub configuration: Vec<ConfigurationNode>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub configuration_defaults: BTreeMap<String, Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub override_identifiers: Vec<String>,
}

impl ContributionManifest {
    /// Parse a manifest from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Json` if the text is not a valid manifest.
    pub fn from_json(text: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Configuration nodes with provenance filled in from the manifest when
    /// the node does not carry its own.
    #[must_use]
    pub fn configuration_nodes(&self) -> Vec<ConfigurationNode> {
        self.configuration
            .iter()
            .cloned()
            .map(|mut node| {
                if node.extension_info.is_none() {
                    node.extension_info = Some(ExtensionInfo {
                        id: self.id.clone(),
                        display_name: self.display_name.clone(),
                        restricted_configurations: Vec::new(),
                    });
                }
                node
            })
            .collect()
    }

    /// The manifest's default overrides, if it contributes any.
    #[must_use]
    pub fn default_extension(&self) -> Option<DefaultConfigurationExtension> {
        if self.configuration_defaults.is_empty() {
            return None;
        }
        Some(DefaultConfigurationExtension {
            producer_id: self.id.clone(),
            display_name: self.display_name.clone(),
            defaults: self.configuration_defaults.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_node_is_accepted() {
        let manifest = ContributionManifest::from_json(
            r#"{"id": "vendor.a", "configuration": {"properties": {"a.b": {"type": "string"}}}}"#,
        )
        .unwrap();
        assert_eq!(manifest.configuration.len(), 1);
    }

    #[test]
    fn node_list_is_accepted() {
        let manifest = ContributionManifest::from_json(
            r#"{"id": "vendor.a", "configuration": [{"id": "one"}, {"id": "two"}]}"#,
        )
        .unwrap();
        assert_eq!(manifest.configuration.len(), 2);
    }

    #[test]
    fn provenance_is_stamped_only_when_missing() {
        let manifest = ContributionManifest::from_json(
            r#"{
                "id": "vendor.a",
                "displayName": "Vendor A",
                "configuration": [
                    {"id": "plain"},
                    {"id": "own", "extensionInfo": {"id": "other"}}
                ]
            }"#,
        )
        .unwrap();

        let nodes = manifest.configuration_nodes();
        let stamped = nodes[0].extension_info.as_ref().unwrap();
        assert_eq!(stamped.id, "vendor.a");
        assert_eq!(stamped.display_name.as_deref(), Some("Vendor A"));
        assert_eq!(nodes[1].extension_info.as_ref().unwrap().id, "other");
    }

    #[test]
    fn default_extension_only_when_defaults_present() {
        let empty = ContributionManifest::from_json(r#"{"id": "vendor.a"}"#).unwrap();
        assert!(empty.default_extension().is_none());

        let with_defaults = ContributionManifest::from_json(
            r#"{"id": "vendor.a", "configurationDefaults": {"[json]": {"editor.tabSize": 2}}}"#,
        )
        .unwrap();
        let ext = with_defaults.default_extension().unwrap();
        assert_eq!(ext.producer_id, "vendor.a");
        assert_eq!(ext.defaults["[json]"], json!({"editor.tabSize": 2}));
    }

    #[test]
    fn malformed_manifest_is_a_json_error() {
        let result = ContributionManifest::from_json(r#"{"configuration": 3}"#);
        assert!(matches!(result, Err(CoreError::Json(_))));
    }
}
