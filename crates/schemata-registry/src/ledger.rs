//! Default-overrides ledger.
//!
//! A synthetic node holding per-identifier default overrides such as
//! `"[json]": { "editor.tabSize": 2 }`, contributed separately from regular
//! schema declarations. It is always the first entry of the registry's
//! configuration list.

use schemata_core::ids::{
    DEFAULT_OVERRIDES_NODE_ID, DEFAULT_OVERRIDES_NODE_TITLE, RESOURCE_LANGUAGE_SETTINGS_SCHEMA_ID,
};
use schemata_core::overrides::is_override_key;
use schemata_core::{ConfigurationNode, PropertySchema, SchemaType};
use serde_json::Value;

/// Build the ledger schema for one default entry, or `None` when the entry is
/// not an `[identifier]` key with an object value.
#[must_use]
pub fn default_override_schema(key: &str, value: &Value) -> Option<PropertySchema> {
    if !is_override_key(key) || !value.is_object() {
        return None;
    }
    Some(PropertySchema {
        schema_type: Some(SchemaType::from("object")),
        default: Some(value.clone()),
        description: Some(format!("Configure settings to be overridden for {key}.")),
        reference: Some(RESOURCE_LANGUAGE_SETTINGS_SCHEMA_ID.to_string()),
        ..PropertySchema::default()
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct DefaultOverridesLedger {
    node: ConfigurationNode,
}

impl Default for DefaultOverridesLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultOverridesLedger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            node: ConfigurationNode {
                id: Some(DEFAULT_OVERRIDES_NODE_ID.to_string()),
                title: Some(DEFAULT_OVERRIDES_NODE_TITLE.to_string()),
                ..ConfigurationNode::default()
            },
        }
    }

    #[must_use]
    pub const fn node(&self) -> &ConfigurationNode {
        &self.node
    }

    pub fn insert(&mut self, key: &str, schema: PropertySchema) {
        self.node.properties.insert(key.to_string(), schema);
    }

    pub fn remove(&mut self, key: &str) -> Option<PropertySchema> {
        self.node.properties.remove(key)
    }

    #[must_use]
    pub fn schema(&self, key: &str) -> Option<&PropertySchema> {
        self.node.properties.get(key)
    }

    /// The default recorded for `key`, if the ledger holds it.
    #[must_use]
    pub fn default_for(&self, key: &str) -> Option<&Value> {
        self.node
            .properties
            .get(key)
            .and_then(|schema| schema.default.as_ref())
    }
}
