//! Well-known identifiers shared by the registry and its consumers.

/// URI under which the resource-language settings schema is published.
pub const RESOURCE_LANGUAGE_SETTINGS_SCHEMA_ID: &str =
    "schemata://schemas/settings/resourceLanguage";

/// Id of the synthetic node holding default configuration overrides.
pub const DEFAULT_OVERRIDES_NODE_ID: &str = "defaultOverrides";

/// Title of the synthetic default-overrides node.
pub const DEFAULT_OVERRIDES_NODE_TITLE: &str = "Default Configuration Overrides";

/// Resource-scoped configuration domains that live outside the registry's
/// own contributions but are reported alongside them.
pub const AUXILIARY_RESOURCE_DOMAINS: [&str; 2] = ["launch", "task"];
