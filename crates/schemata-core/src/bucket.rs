//! Scope buckets: derived schema views consumed by schema publishers.

use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::schema::PropertySchema;

/// A `{properties, patternProperties}` pair shaped for JSON-schema consumption.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettingsBucket {
    #[serde(default)]
    pub properties: BTreeMap<String, PropertySchema>,
    #[serde(default)]
    pub pattern_properties: BTreeMap<String, PropertySchema>,
}

impl SettingsBucket {
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PropertySchema> {
        self.properties.get(key)
    }

    /// Property keys in sorted order.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.properties.keys().map(String::as_str).collect()
    }
}

/// The aggregate buckets every registry maintains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BucketKind {
    All,
    Application,
    Machine,
    MachineOverridable,
    Window,
    Resource,
}

impl BucketKind {
    pub const ALL: [Self; 6] = [
        Self::All,
        Self::Application,
        Self::Machine,
        Self::MachineOverridable,
        Self::Window,
        Self::Resource,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Application => "application",
            Self::Machine => "machine",
            Self::MachineOverridable => "machine_overridable",
            Self::Window => "window",
            Self::Resource => "resource",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for BucketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
