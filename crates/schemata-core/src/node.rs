//! Configuration nodes and default-configuration extensions.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::{PropertySchema, SchemaType};
use crate::scope::ConfigurationScope;

/// Provenance of a contributed node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionInfo {
    /// Producer identifier (e.g. `publisher.extension`).
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Keys the producer marks as restricted in untrusted contexts.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub restricted_configurations: Vec<String>,
}

/// A declaration unit bundling related property schemas, possibly nested
/// through `allOf`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, PropertySchema>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub all_of: Vec<ConfigurationNode>,

    /// Scope inherited by every property (and nested node) that declares none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<ConfigurationScope>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension_info: Option<ExtensionInfo>,
}

impl ConfigurationNode {
    /// Node with an id and no properties.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Add a property, replacing any previous schema under the same key.
    #[must_use]
    pub fn property(mut self, key: impl Into<String>, schema: PropertySchema) -> Self {
        self.properties.insert(key.into(), schema);
        self
    }

    #[must_use]
    pub fn child(mut self, node: Self) -> Self {
        self.all_of.push(node);
        self
    }

    #[must_use]
    pub const fn scoped(mut self, scope: ConfigurationScope) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Every property key in this node and its `allOf` descendants, depth first.
    #[must_use]
    pub fn property_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.properties.keys().map(String::as_str).collect();
        for child in &self.all_of {
            keys.extend(child.property_keys());
        }
        keys
    }
}

/// A producer's flat map of default values, used to contribute per-identifier
/// default overrides such as `"[json]": { "editor.tabSize": 2 }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DefaultConfigurationExtension {
    pub producer_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default)]
    pub defaults: BTreeMap<String, Value>,
}

impl DefaultConfigurationExtension {
    #[must_use]
    pub fn new(producer_id: impl Into<String>, defaults: BTreeMap<String, Value>) -> Self {
        Self {
            producer_id: producer_id.into(),
            display_name: None,
            defaults,
        }
    }
}
