//! The configuration registry service.
//!
//! `ConfigurationRegistry` collects configuration nodes from many producers,
//! merges them into one key namespace, partitions them into scope buckets, and
//! announces every change through its [`ChangeNotifier`].
//!
//! Every mutating call follows the same protocol:
//! 1. Validate and normalize the contributed data
//! 2. Update the key maps and scope buckets
//! 3. Re-synthesize the `[identifier]` fragments
//! 4. Publish the resource-language schema to the [`SchemaStore`]
//! 5. Fire schema-changed, then properties-changed (where keys changed)

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use schemata_core::ids::RESOURCE_LANGUAGE_SETTINGS_SCHEMA_ID;
use schemata_core::overrides::{is_override_key, override_key};
use schemata_core::{
    BucketKind, ConfigurationNode, ConfigurationScope, DefaultConfigurationExtension,
    ExtensionInfo, PropertySchema, SettingsBucket, default_for,
};
use serde_json::{Value, json};

use crate::error::RegistryError;
use crate::events::{ChangeNotifier, Subscription};
use crate::ledger::{DefaultOverridesLedger, default_override_schema};
use crate::options::RegistryOptions;
use crate::partition::ScopeBuckets;
use crate::pattern::{OverrideIdentifiers, override_fragment};
use crate::store::{MemorySchemaStore, SchemaStore};

const RESOURCE_LANGUAGE_ERROR_MESSAGE: &str = "Unknown editor configuration setting";

/// A registered top-level node: the caller's handle (used for identity) and
/// the normalized tree that was actually registered.
struct Contributor {
    serial: u64,
    handle: Arc<ConfigurationNode>,
    node: ConfigurationNode,
}

/// Resolve a property's default: ledger entry, then the contributor's own
/// default, then the type's zero value.
fn resolve_default(ledger: Option<&Value>, property: &PropertySchema) -> Value {
    ledger
        .cloned()
        .or_else(|| property.default.clone())
        .unwrap_or_else(|| default_for(property.schema_type.as_ref()))
}

/// Outcome of a batch registration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    /// Included keys that were added, in registration order.
    pub added: Vec<String>,
    /// Properties refused by the key validator, in registration order.
    pub rejected: Vec<RegistryError>,
}

/// Process-wide catalog of configuration schemas.
///
/// Create one per process (or one per test) and hand it to collaborators by
/// reference. All operations are synchronous; listeners run before the
/// mutating call returns.
pub struct ConfigurationRegistry {
    options: RegistryOptions,
    ledger: DefaultOverridesLedger,
    contributors: Vec<Contributor>,
    next_serial: u64,
    properties: BTreeMap<String, PropertySchema>,
    excluded: BTreeMap<String, PropertySchema>,
    /// Which contributor registered each regular key.
    owners: HashMap<String, u64>,
    override_identifiers: OverrideIdentifiers,
    buckets: ScopeBuckets,
    store: Rc<dyn SchemaStore>,
    notifier: ChangeNotifier,
}

impl Default for ConfigurationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConfigurationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigurationRegistry")
            .field("contributors", &self.contributors.len())
            .field("properties", &self.properties.len())
            .field("excluded", &self.excluded.len())
            .field("override_identifiers", &self.override_identifiers)
            .finish_non_exhaustive()
    }
}

impl ConfigurationRegistry {
    /// Registry with default options and a private in-memory schema store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(RegistryOptions::default())
    }

    #[must_use]
    pub fn with_options(options: RegistryOptions) -> Self {
        Self::with_store(options, Rc::new(MemorySchemaStore::new()))
    }

    /// Registry publishing into a shared schema store. The resource-language
    /// schema is published once immediately.
    #[must_use]
    pub fn with_store(options: RegistryOptions, store: Rc<dyn SchemaStore>) -> Self {
        let registry = Self {
            options,
            ledger: DefaultOverridesLedger::new(),
            contributors: Vec::new(),
            next_serial: 0,
            properties: BTreeMap::new(),
            excluded: BTreeMap::new(),
            owners: HashMap::new(),
            override_identifiers: OverrideIdentifiers::default(),
            buckets: ScopeBuckets::new(),
            store,
            notifier: ChangeNotifier::default(),
        };
        registry.publish_resource_language_schema();
        registry
    }

    // ── Registrar ──────────────────────────────────────────────────

    /// Register one node. See [`Self::register_configurations`].
    pub fn register_configuration(
        &mut self,
        node: &Arc<ConfigurationNode>,
        validate: bool,
    ) -> Vec<String> {
        self.register_configurations(std::slice::from_ref(node), validate)
    }

    /// Register nodes in argument order and return the included keys that
    /// were added.
    ///
    /// With `validate`, properties rejected by [`Self::validate_key`] are
    /// logged and dropped; the rest of the batch still registers. A handle
    /// that is already registered is skipped.
    pub fn register_configurations(
        &mut self,
        nodes: &[Arc<ConfigurationNode>],
        validate: bool,
    ) -> Vec<String> {
        self.register_configurations_checked(nodes, validate).added
    }

    /// Like [`Self::register_configurations`], but also reports every
    /// property the key validator refused.
    pub fn register_configurations_checked(
        &mut self,
        nodes: &[Arc<ConfigurationNode>],
        validate: bool,
    ) -> Registration {
        let mut registration = Registration::default();
        for handle in nodes {
            if self.position_of(handle).is_some() {
                tracing::warn!(
                    id = ?handle.id,
                    "configuration node is already registered; skipping"
                );
                continue;
            }
            let serial = self.next_serial;
            self.next_serial += 1;
            let node = self.register_node(
                handle,
                serial,
                validate,
                handle.extension_info.as_ref(),
                ConfigurationScope::FALLBACK,
                &mut registration,
            );
            self.contributors.push(Contributor {
                serial,
                handle: Arc::clone(handle),
                node,
            });
        }
        tracing::debug!(
            nodes = nodes.len(),
            properties = registration.added.len(),
            rejected = registration.rejected.len(),
            "registered configurations"
        );

        self.refresh_derived();
        self.notifier.both(&registration.added);
        registration
    }

    /// Remove previously registered nodes, identified by their handle.
    ///
    /// Unknown handles are ignored. Only keys this contributor still owns are
    /// removed; an owned key the default-overrides ledger also holds falls
    /// back to the ledger schema.
    pub fn deregister_configurations(&mut self, nodes: &[Arc<ConfigurationNode>]) {
        let mut keys = Vec::new();
        for handle in nodes {
            let Some(position) = self.position_of(handle) else {
                tracing::debug!(id = ?handle.id, "configuration node is not registered; ignoring");
                continue;
            };
            let contributor = self.contributors.remove(position);
            for key in contributor.node.property_keys() {
                if self.owners.get(key) != Some(&contributor.serial) {
                    continue;
                }
                self.owners.remove(key);
                if let Some(schema) = self.ledger.schema(key).cloned() {
                    self.insert_included(key, &schema);
                    keys.push(key.to_string());
                } else if self.remove_property(key) {
                    keys.push(key.to_string());
                }
            }
        }
        tracing::debug!(
            nodes = nodes.len(),
            properties = keys.len(),
            "deregistered configurations"
        );

        self.refresh_derived();
        self.notifier.both(&keys);
    }

    fn position_of(&self, handle: &Arc<ConfigurationNode>) -> Option<usize> {
        self.contributors
            .iter()
            .position(|contributor| Arc::ptr_eq(&contributor.handle, handle))
    }

    /// Walk `node` and its `allOf` children, registering every accepted
    /// property, and return the normalized copy of the tree.
    fn register_node<'a>(
        &mut self,
        node: &'a ConfigurationNode,
        serial: u64,
        validate: bool,
        info: Option<&'a ExtensionInfo>,
        inherited: ConfigurationScope,
        registration: &mut Registration,
    ) -> ConfigurationNode {
        let info = node.extension_info.as_ref().or(info);
        let scope = node.scope.unwrap_or(inherited);
        let mut normalized = ConfigurationNode {
            id: node.id.clone(),
            order: node.order,
            schema_type: node.schema_type.clone(),
            title: node.title.clone(),
            description: node.description.clone(),
            properties: BTreeMap::new(),
            all_of: Vec::with_capacity(node.all_of.len()),
            scope: node.scope,
            extension_info: node.extension_info.clone(),
        };

        for (key, schema) in &node.properties {
            if validate {
                if let Err(error) = self.validate_key(key) {
                    tracing::warn!(key = %key, %error, "configuration property rejected");
                    registration.rejected.push(error);
                    continue;
                }
            }

            let property = self.normalize_property(key, schema, scope, info);
            if property.is_included() {
                self.insert_included(key, &property);
                registration.added.push(key.clone());
            } else {
                self.insert_excluded(key, &property);
            }
            self.owners.insert(key.clone(), serial);
            normalized.properties.insert(key.clone(), property);
        }

        for child in &node.all_of {
            let child = self.register_node(child, serial, validate, info, scope, registration);
            normalized.all_of.push(child);
        }
        normalized
    }

    fn normalize_property(
        &self,
        key: &str,
        schema: &PropertySchema,
        scope: ConfigurationScope,
        info: Option<&ExtensionInfo>,
    ) -> PropertySchema {
        let mut property = schema.clone();
        property.default = Some(resolve_default(self.ledger.default_for(key), &property));

        if is_override_key(key) {
            property.scope = None;
        } else {
            property.scope = Some(property.scope.unwrap_or(scope));
            if property.restricted.is_none() {
                let restricted = info.is_some_and(|info| {
                    info.restricted_configurations
                        .iter()
                        .any(|restricted| restricted == key)
                });
                property.restricted = Some(restricted);
            }
        }

        if property.deprecation_message.is_none() {
            property
                .deprecation_message
                .clone_from(&property.markdown_deprecation_message);
        }
        property
    }

    fn insert_included(&mut self, key: &str, property: &PropertySchema) {
        if let Some(previous) = self.properties.insert(key.to_string(), property.clone()) {
            self.buckets.remove(key, previous.scope);
        }
        self.excluded.remove(key);
        self.buckets.add(key, property);
    }

    fn insert_excluded(&mut self, key: &str, property: &PropertySchema) {
        if let Some(previous) = self.properties.remove(key) {
            self.buckets.remove(key, previous.scope);
        }
        self.excluded.insert(key.to_string(), property.clone());
    }

    /// Drop `key` from whichever map holds it. Returns `true` if it was an
    /// included property.
    fn remove_property(&mut self, key: &str) -> bool {
        if let Some(previous) = self.properties.remove(key) {
            self.buckets.remove(key, previous.scope);
            true
        } else {
            self.excluded.remove(key);
            false
        }
    }

    // ── Key validator ──────────────────────────────────────────────

    /// Check whether `key` may be registered through the regular path.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::ReservedPattern` for `[identifier]` keys and
    /// `RegistryError::DuplicateKey` for keys that are already registered.
    pub fn validate_key(&self, key: &str) -> Result<(), RegistryError> {
        if is_override_key(key) {
            return Err(RegistryError::ReservedPattern {
                key: key.to_string(),
            });
        }
        if self.properties.contains_key(key) {
            return Err(RegistryError::DuplicateKey {
                key: key.to_string(),
            });
        }
        Ok(())
    }

    // ── Default-overrides ledger ───────────────────────────────────

    /// Register per-identifier default overrides. Only `[identifier]` keys
    /// with object values are taken; other entries are skipped.
    pub fn register_default_configurations(
        &mut self,
        extensions: &[DefaultConfigurationExtension],
    ) {
        let mut keys = Vec::new();
        for extension in extensions {
            for (key, value) in &extension.defaults {
                let Some(schema) = default_override_schema(key, value) else {
                    tracing::trace!(
                        producer = %extension.producer_id,
                        key = %key,
                        "skipping default that is not a per-identifier override"
                    );
                    continue;
                };
                self.owners.remove(key);
                self.insert_included(key, &schema);
                self.ledger.insert(key, schema);
                keys.push(key.clone());
            }
        }
        tracing::debug!(properties = keys.len(), "registered default configurations");

        self.refresh_derived();
        self.notifier.both(&keys);
    }

    /// Reverse [`Self::register_default_configurations`] key by key. Keys the
    /// ledger does not hold are ignored.
    pub fn deregister_default_configurations(
        &mut self,
        extensions: &[DefaultConfigurationExtension],
    ) {
        let mut keys = Vec::new();
        for extension in extensions {
            for (key, value) in &extension.defaults {
                if default_override_schema(key, value).is_none() {
                    continue;
                }
                if self.ledger.remove(key).is_none() {
                    continue;
                }
                if !self.owners.contains_key(key.as_str()) {
                    self.remove_property(key);
                }
                keys.push(key.clone());
            }
        }
        tracing::debug!(properties = keys.len(), "deregistered default configurations");

        self.refresh_derived();
        self.notifier.both(&keys);
    }

    // ── Override-identifier pattern engine ─────────────────────────

    /// Add override identifiers. Known identifiers are no-ops; when nothing
    /// new was added no event fires.
    pub fn register_override_identifiers<I, S>(&mut self, identifiers: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let added = self.override_identifiers.extend(identifiers);
        if added.is_empty() {
            return;
        }
        tracing::debug!(identifiers = ?added, "registered override identifiers");

        self.refresh_derived();
        self.notifier.schema_changed();
    }

    /// Known override identifiers in sorted order.
    #[must_use]
    pub fn override_identifiers(&self) -> Vec<&str> {
        self.override_identifiers.iter().collect()
    }

    fn synthesize_override_fragments(&mut self) {
        for identifier in self.override_identifiers.iter() {
            let key = override_key(identifier);
            let fragment = override_fragment(self.ledger.default_for(&key).cloned());
            self.buckets.install_everywhere(&key, &fragment);
        }
    }

    // ── Publication ────────────────────────────────────────────────

    fn refresh_derived(&mut self) {
        self.synthesize_override_fragments();
        self.publish_resource_language_schema();
    }

    fn publish_resource_language_schema(&self) {
        self.store.register_schema(
            RESOURCE_LANGUAGE_SETTINGS_SCHEMA_ID,
            self.resource_language_schema(),
        );
    }

    /// The full resource-language schema document as published to the store.
    #[must_use]
    pub fn resource_language_schema(&self) -> Value {
        let bucket = self.buckets.resource_language();
        json!({
            "properties": bucket.properties,
            "patternProperties": bucket.pattern_properties,
            "additionalProperties": false,
            "errorMessage": RESOURCE_LANGUAGE_ERROR_MESSAGE,
            "allowTrailingCommas": true,
            "allowComments": true,
        })
    }

    /// Fire schema-changed without touching state, for producers whose schema
    /// content (e.g. enum values) changed in place.
    pub fn notify_configuration_schema_updated(&mut self, nodes: &[Arc<ConfigurationNode>]) {
        tracing::debug!(nodes = nodes.len(), "configuration schema updated externally");
        self.notifier.schema_changed();
    }

    // ── Subscriptions ──────────────────────────────────────────────

    pub fn on_did_schema_change(&mut self, listener: impl FnMut(&()) + 'static) -> Subscription {
        self.notifier.on_schema_changed(listener)
    }

    pub fn on_did_update_configuration(
        &mut self,
        listener: impl FnMut(&[String]) + 'static,
    ) -> Subscription {
        self.notifier.on_properties_changed(listener)
    }

    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.notifier.unsubscribe(subscription)
    }

    // ── Accessors ──────────────────────────────────────────────────

    /// Registered nodes in registration order, preceded by the
    /// default-overrides node.
    #[must_use]
    pub fn configurations(&self) -> Vec<&ConfigurationNode> {
        std::iter::once(self.ledger.node())
            .chain(self.contributors.iter().map(|contributor| &contributor.node))
            .collect()
    }

    #[must_use]
    pub const fn configuration_properties(&self) -> &BTreeMap<String, PropertySchema> {
        &self.properties
    }

    #[must_use]
    pub const fn excluded_configuration_properties(&self) -> &BTreeMap<String, PropertySchema> {
        &self.excluded
    }

    #[must_use]
    pub const fn bucket(&self, kind: BucketKind) -> &SettingsBucket {
        self.buckets.get(kind)
    }

    #[must_use]
    pub const fn resource_language_settings(&self) -> &SettingsBucket {
        self.buckets.resource_language()
    }

    #[must_use]
    pub const fn options(&self) -> &RegistryOptions {
        &self.options
    }

    /// `(key, scope)` for every included property, followed by the
    /// auxiliary resource domains.
    #[must_use]
    pub fn scopes(&self) -> Vec<(String, Option<ConfigurationScope>)> {
        self.properties
            .iter()
            .map(|(key, property)| (key.clone(), property.scope))
            .chain(
                self.options
                    .resource_domains
                    .iter()
                    .map(|domain| (domain.clone(), Some(ConfigurationScope::Resource))),
            )
            .collect()
    }
}
