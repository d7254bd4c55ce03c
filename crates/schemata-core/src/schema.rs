//! Property schema: the declarative description of one setting.
//!
//! The shape follows JSON Schema (`type`, `default`, `enum`, `$ref`, ...) with
//! the registry-specific extensions (`scope`, `included`, `tags`, ...). Any
//! keyword not modelled explicitly is preserved verbatim in [`PropertySchema::extra`].

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::scope::ConfigurationScope;

/// Declared JSON type of a property: a single name or a union of names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum SchemaType {
    Single(String),
    Union(Vec<String>),
}

impl SchemaType {
    /// The type that decides the synthesized default (the first one of a union).
    #[must_use]
    pub fn primary(&self) -> Option<&str> {
        match self {
            Self::Single(name) => Some(name),
            Self::Union(names) => names.first().map(String::as_str),
        }
    }
}

impl From<&str> for SchemaType {
    fn from(name: &str) -> Self {
        Self::Single(name.to_string())
    }
}

/// Keeps an explicit `null` distinct from an absent field.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertySchema {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,

    /// Default value. `None` means the contributor did not supply one; an
    /// explicit JSON `null` is kept as `Some(Value::Null)`.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub default: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown_description: Option<String>,

    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_descriptions: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown_deprecation_message: Option<String>,

    /// Message shown by schema validators when a value does not match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Ordering hint for settings UIs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,

    /// `None` after registration only for `[identifier]` override keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<ConfigurationScope>,

    /// Unset means included.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Excludes the setting from settings-sync ignore lists.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disallow_sync_ignore: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restricted: Option<bool>,

    /// Remaining JSON-schema keywords (`minimum`, `items`, `properties`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PropertySchema {
    /// Schema with only a declared type.
    #[must_use]
    pub fn typed(schema_type: &str) -> Self {
        Self {
            schema_type: Some(SchemaType::from(schema_type)),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    #[must_use]
    pub const fn with_scope(mut self, scope: ConfigurationScope) -> Self {
        self.scope = Some(scope);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn excluded(mut self) -> Self {
        self.included = Some(false);
        self
    }

    /// Whether the property takes part in the schema buckets.
    #[must_use]
    pub fn is_included(&self) -> bool {
        self.included.unwrap_or(true)
    }

    /// Declared primary type name, if any.
    #[must_use]
    pub fn primary_type(&self) -> Option<&str> {
        self.schema_type.as_ref().and_then(SchemaType::primary)
    }
}
