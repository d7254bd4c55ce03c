//! Override-identifier pattern engine.
//!
//! Owns the set of known override identifiers and builds the `[identifier]`
//! fragment installed into every scope bucket.

use std::collections::BTreeSet;

use schemata_core::ids::RESOURCE_LANGUAGE_SETTINGS_SCHEMA_ID;
use schemata_core::{PropertySchema, SchemaType};
use serde_json::Value;

pub const OVERRIDE_DESCRIPTION: &str = "Configure settings to be overridden for a language.";
pub const OVERRIDE_ERROR_MESSAGE: &str =
    "This setting does not support per-language configuration.";

/// The `[identifier]` schema fragment. `default` comes from the
/// default-overrides ledger and stays absent when the ledger has no entry.
#[must_use]
pub fn override_fragment(default: Option<Value>) -> PropertySchema {
    PropertySchema {
        schema_type: Some(SchemaType::from("object")),
        default,
        description: Some(OVERRIDE_DESCRIPTION.to_string()),
        error_message: Some(OVERRIDE_ERROR_MESSAGE.to_string()),
        reference: Some(RESOURCE_LANGUAGE_SETTINGS_SCHEMA_ID.to_string()),
        ..PropertySchema::default()
    }
}

/// Known override identifiers, kept sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideIdentifiers {
    identifiers: BTreeSet<String>,
}

impl OverrideIdentifiers {
    /// Add identifiers; returns the ones that were not known yet.
    pub fn extend<I, S>(&mut self, identifiers: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        identifiers
            .into_iter()
            .map(Into::into)
            .filter(|identifier| self.identifiers.insert(identifier.clone()))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.identifiers.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn extend_reports_only_new_identifiers() {
        let mut identifiers = OverrideIdentifiers::default();
        assert_eq!(identifiers.extend(["python", "json"]), vec!["python", "json"]);
        assert_eq!(identifiers.extend(["json", "rust"]), vec!["rust"]);
        assert!(identifiers.extend(["rust"]).is_empty());
        assert_eq!(identifiers.iter().collect::<Vec<_>>(), vec!["json", "python", "rust"]);
    }

    #[test]
    fn duplicate_within_one_call_counts_once() {
        let mut identifiers = OverrideIdentifiers::default();
        assert_eq!(identifiers.extend(["go", "go"]), vec!["go"]);
    }

    #[test]
    fn fragment_shape() {
        let fragment = override_fragment(Some(json!({"editor.tabSize": 2})));
        assert_eq!(
            serde_json::to_value(&fragment).unwrap(),
            json!({
                "type": "object",
                "default": {"editor.tabSize": 2},
                "description": OVERRIDE_DESCRIPTION,
                "errorMessage": OVERRIDE_ERROR_MESSAGE,
                "$ref": RESOURCE_LANGUAGE_SETTINGS_SCHEMA_ID
            })
        );
        assert_eq!(override_fragment(None).default, None);
    }
}
