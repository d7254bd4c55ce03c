//! JsonSchema contract tests for contribution manifests.

use schemars::schema_for;
use schemata_core::{ConfigurationScope, ContributionManifest};

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn manifest_schema() -> serde_json::Value {
    serde_json::to_value(schema_for!(ContributionManifest)).unwrap()
}

#[test]
fn realistic_manifest_matches_generated_schema() {
    let instance = serde_json::json!({
        "id": "vendor.python",
        "displayName": "Python",
        "configuration": [{
            "id": "python",
            "title": "Python",
            "order": 20,
            "scope": "resource",
            "properties": {
                "python.venvPath": { "type": "string", "scope": "machine" },
                "python.lint.enabled": { "type": "boolean", "default": true, "tags": ["lint"] },
                "python.analysis.extraPaths": { "type": "array", "items": { "type": "string" } }
            },
            "allOf": [{
                "properties": {
                    "python.formatting.provider": {
                        "type": ["string", "null"],
                        "enum": ["black", "autopep8", null],
                        "scope": "language_overridable"
                    }
                }
            }]
        }],
        "configurationDefaults": { "[python]": { "editor.tabSize": 4 } },
        "overrideIdentifiers": ["python"]
    });

    let errors = validate_against_schema(&manifest_schema(), &instance);
    assert!(errors.is_empty(), "manifest failed validation: {errors:?}");

    let manifest: ContributionManifest = serde_json::from_value(instance).unwrap();
    let node = &manifest.configuration[0];
    assert_eq!(node.scope, Some(ConfigurationScope::Resource));
    assert_eq!(
        node.properties["python.venvPath"].scope,
        Some(ConfigurationScope::Machine)
    );
}

#[test]
fn unknown_scope_is_rejected_by_schema() {
    let instance = serde_json::json!({
        "id": "vendor.bad",
        "configuration": [{ "scope": "galaxy" }]
    });
    let errors = validate_against_schema(&manifest_schema(), &instance);
    assert!(!errors.is_empty());
}

#[test]
fn serde_roundtrip_preserves_manifest() {
    let text = r#"{
        "id": "vendor.roundtrip",
        "configuration": { "properties": { "a.b": { "type": "number", "default": 5, "minimum": 0 } } },
        "configurationDefaults": { "[json]": { "editor.tabSize": 2 } }
    }"#;
    let manifest = ContributionManifest::from_json(text).unwrap();
    let json = serde_json::to_string(&manifest).unwrap();
    let recovered = ContributionManifest::from_json(&json).unwrap();
    assert_eq!(recovered, manifest);
}
