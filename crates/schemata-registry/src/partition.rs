//! Scope partitioner: routes property schemas into scope buckets.
//!
//! Every included property lands in the "all" bucket plus the bucket(s) its
//! resolved scope dictates:
//!
//! ```text
//! application          -> application
//! machine              -> machine
//! machine_overridable  -> machine_overridable
//! window               -> window
//! resource             -> resource
//! language_overridable -> resource + resource-language
//! (none)               -> all only
//! ```

use schemata_core::ids::RESOURCE_LANGUAGE_SETTINGS_SCHEMA_ID;
use schemata_core::overrides::OVERRIDE_PROPERTY_PATTERN;
use schemata_core::{BucketKind, ConfigurationScope, PropertySchema, SchemaType, SettingsBucket};

const UNKNOWN_IDENTIFIER_DESCRIPTION: &str = "Configure settings to be overridden for a language.";
const UNKNOWN_IDENTIFIER_MESSAGE: &str = "Unknown identifier. Use language identifiers.";

/// Scope buckets besides "all" that a property of `scope` belongs to.
#[must_use]
pub const fn buckets_for_scope(scope: Option<ConfigurationScope>) -> &'static [BucketKind] {
    match scope {
        Some(ConfigurationScope::Application) => &[BucketKind::Application],
        Some(ConfigurationScope::Machine) => &[BucketKind::Machine],
        Some(ConfigurationScope::MachineOverridable) => &[BucketKind::MachineOverridable],
        Some(ConfigurationScope::Window) => &[BucketKind::Window],
        Some(ConfigurationScope::Resource | ConfigurationScope::LanguageOverridable) => {
            &[BucketKind::Resource]
        }
        None => &[],
    }
}

/// Schema installed under the generic override pattern in every bucket's
/// `patternProperties`.
fn unknown_identifier_schema() -> PropertySchema {
    PropertySchema {
        schema_type: Some(SchemaType::from("object")),
        description: Some(UNKNOWN_IDENTIFIER_DESCRIPTION.to_string()),
        error_message: Some(UNKNOWN_IDENTIFIER_MESSAGE.to_string()),
        reference: Some(RESOURCE_LANGUAGE_SETTINGS_SCHEMA_ID.to_string()),
        ..PropertySchema::default()
    }
}

/// The six aggregate buckets plus the resource-language bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeBuckets {
    buckets: [SettingsBucket; 6],
    resource_language: SettingsBucket,
}

impl Default for ScopeBuckets {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeBuckets {
    #[must_use]
    pub fn new() -> Self {
        let mut buckets: [SettingsBucket; 6] = Default::default();
        for bucket in &mut buckets {
            bucket.pattern_properties.insert(
                OVERRIDE_PROPERTY_PATTERN.to_string(),
                unknown_identifier_schema(),
            );
        }
        Self {
            buckets,
            resource_language: SettingsBucket::default(),
        }
    }

    #[must_use]
    pub const fn get(&self, kind: BucketKind) -> &SettingsBucket {
        &self.buckets[kind.index()]
    }

    const fn get_mut(&mut self, kind: BucketKind) -> &mut SettingsBucket {
        &mut self.buckets[kind.index()]
    }

    #[must_use]
    pub const fn resource_language(&self) -> &SettingsBucket {
        &self.resource_language
    }

    /// Route a property into "all" and its scope bucket(s).
    pub fn add(&mut self, key: &str, property: &PropertySchema) {
        self.add_to_all(key, property);
        for kind in buckets_for_scope(property.scope) {
            self.get_mut(*kind)
                .properties
                .insert(key.to_string(), property.clone());
        }
        if property
            .scope
            .is_some_and(ConfigurationScope::is_language_overridable)
        {
            self.resource_language
                .properties
                .insert(key.to_string(), property.clone());
        }
    }

    /// Remove a property from "all" and the bucket(s) of its recorded scope.
    pub fn remove(&mut self, key: &str, scope: Option<ConfigurationScope>) {
        self.remove_from_all(key);
        for kind in buckets_for_scope(scope) {
            self.get_mut(*kind).properties.remove(key);
        }
        if scope.is_some_and(ConfigurationScope::is_language_overridable) {
            self.resource_language.properties.remove(key);
        }
    }

    pub fn add_to_all(&mut self, key: &str, property: &PropertySchema) {
        self.get_mut(BucketKind::All)
            .properties
            .insert(key.to_string(), property.clone());
    }

    pub fn remove_from_all(&mut self, key: &str) {
        self.get_mut(BucketKind::All).properties.remove(key);
    }

    /// Install `fragment` under `key` in every aggregate bucket, "all" included.
    pub fn install_everywhere(&mut self, key: &str, fragment: &PropertySchema) {
        for bucket in &mut self.buckets {
            bucket
                .properties
                .insert(key.to_string(), fragment.clone());
        }
    }
}
