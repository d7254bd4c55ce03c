//! Resource-language schema publication through the schema store.

use std::rc::Rc;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use schemata_core::ids::RESOURCE_LANGUAGE_SETTINGS_SCHEMA_ID;
use schemata_core::{ConfigurationNode, ConfigurationScope, PropertySchema};
use schemata_registry::{ConfigurationRegistry, MemorySchemaStore, RegistryOptions, SchemaStore};
use serde_json::json;

fn shared_store() -> (Rc<MemorySchemaStore>, ConfigurationRegistry) {
    let store = Rc::new(MemorySchemaStore::new());
    let registry = ConfigurationRegistry::with_store(
        RegistryOptions::default(),
        Rc::clone(&store) as Rc<dyn SchemaStore>,
    );
    (store, registry)
}

fn editor_node() -> Arc<ConfigurationNode> {
    Arc::new(
        ConfigurationNode::with_id("editor")
            .scoped(ConfigurationScope::LanguageOverridable)
            .property(
                "editor.tabSize",
                PropertySchema::typed("number").with_default(json!(4)),
            )
            .property(
                "editor.title",
                PropertySchema::typed("string").with_scope(ConfigurationScope::Window),
            ),
    )
}

#[test]
fn construction_publishes_an_empty_document() {
    let (store, _registry) = shared_store();

    assert_eq!(store.publications(), 1);
    assert_eq!(
        store.get(RESOURCE_LANGUAGE_SETTINGS_SCHEMA_ID),
        Some(json!({
            "properties": {},
            "patternProperties": {},
            "additionalProperties": false,
            "errorMessage": "Unknown editor configuration setting",
            "allowTrailingCommas": true,
            "allowComments": true
        }))
    );
}

#[test]
fn every_mutation_republishes() {
    let (store, mut registry) = shared_store();
    let node = editor_node();

    registry.register_configuration(&node, true);
    registry.register_override_identifiers(["rust"]);
    registry.register_override_identifiers(["rust"]);
    registry.deregister_configurations(&[node]);

    // Construction, register, identifiers, deregister. The repeated
    // identifier call changes nothing and publishes nothing.
    assert_eq!(store.publications(), 4);
    assert_eq!(store.uris(), vec![RESOURCE_LANGUAGE_SETTINGS_SCHEMA_ID.to_string()]);
}

#[test]
fn published_document_matches_accessor() {
    let (store, mut registry) = shared_store();
    registry.register_configuration(&editor_node(), true);

    let published = store
        .get(RESOURCE_LANGUAGE_SETTINGS_SCHEMA_ID)
        .expect("schema should be published");
    assert_eq!(published, registry.resource_language_schema());

    let properties = published["properties"].as_object().unwrap();
    assert_eq!(
        properties.keys().collect::<Vec<_>>(),
        vec!["editor.tabSize"]
    );
}

#[test]
fn resource_language_document_validates_settings() {
    let mut registry = ConfigurationRegistry::new();
    registry.register_configuration(&editor_node(), true);

    let schema = registry.resource_language_schema();
    let validator = jsonschema::validator_for(&schema).expect("schema should compile");

    assert!(validator.is_valid(&json!({"editor.tabSize": 2})));
    assert!(!validator.is_valid(&json!({"editor.tabSize": "two"})));
    // Window-scoped settings cannot be overridden per language.
    assert!(!validator.is_valid(&json!({"editor.title": "x"})));
    assert!(!validator.is_valid(&json!({"unknown.setting": true})));
}

#[test]
fn custom_resource_domains_feed_scopes() {
    let registry = ConfigurationRegistry::with_options(RegistryOptions {
        resource_domains: vec!["debug".into()],
    });
    assert_eq!(
        registry.scopes(),
        vec![("debug".to_string(), Some(ConfigurationScope::Resource))]
    );
    assert_eq!(registry.options().resource_domains, vec!["debug"]);
}
