//! Change notification counts and ordering.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use schemata_core::{ConfigurationNode, DefaultConfigurationExtension, PropertySchema};
use schemata_registry::{Channel, ConfigurationRegistry};
use serde_json::json;

type Log = Rc<RefCell<Vec<String>>>;

/// Registry whose two channels append to a shared log.
fn observed() -> (ConfigurationRegistry, Log) {
    let log: Log = Rc::default();
    let mut registry = ConfigurationRegistry::new();

    let schema_log = Rc::clone(&log);
    registry.on_did_schema_change(move |_| schema_log.borrow_mut().push("schema".into()));
    let properties_log = Rc::clone(&log);
    registry.on_did_update_configuration(move |keys| {
        properties_log
            .borrow_mut()
            .push(format!("properties:{}", keys.join(",")));
    });
    (registry, log)
}

fn node(key: &str) -> Arc<ConfigurationNode> {
    Arc::new(ConfigurationNode::with_id(key).property(key, PropertySchema::typed("string")))
}

#[test]
fn batch_registration_fires_each_event_once() {
    let (mut registry, log) = observed();
    registry.register_configurations(&[node("a.one"), node("a.two")], true);

    assert_eq!(*log.borrow(), vec!["schema", "properties:a.one,a.two"]);
}

#[test]
fn deregistration_reports_removed_keys() {
    let (mut registry, log) = observed();
    let handle = node("d.one");
    registry.register_configuration(&handle, true);
    log.borrow_mut().clear();

    registry.deregister_configurations(&[handle]);
    assert_eq!(*log.borrow(), vec!["schema", "properties:d.one"]);
}

#[test]
fn repeated_identifiers_fire_nothing() {
    let (mut registry, log) = observed();
    registry.register_override_identifiers(["python"]);
    registry.register_override_identifiers(["python"]);

    assert_eq!(*log.borrow(), vec!["schema"]);
}

#[test]
fn default_configurations_fire_both_events() {
    let (mut registry, log) = observed();
    let extension = DefaultConfigurationExtension::new(
        "vendor.json",
        BTreeMap::from([("[json]".to_string(), json!({"editor.tabSize": 2}))]),
    );
    registry.register_default_configurations(std::slice::from_ref(&extension));
    registry.deregister_default_configurations(&[extension]);

    assert_eq!(
        *log.borrow(),
        vec!["schema", "properties:[json]", "schema", "properties:[json]"]
    );
}

#[test]
fn external_schema_update_fires_schema_change_only() {
    let (mut registry, log) = observed();
    let handle = node("e.one");
    registry.register_configuration(&handle, true);
    log.borrow_mut().clear();

    registry.notify_configuration_schema_updated(&[handle]);
    assert_eq!(*log.borrow(), vec!["schema"]);
}

#[test]
fn unsubscribed_listeners_stop_receiving() {
    let mut registry = ConfigurationRegistry::new();
    let count = Rc::new(RefCell::new(0_u32));
    let counter = Rc::clone(&count);
    let subscription = registry.on_did_schema_change(move |_| *counter.borrow_mut() += 1);
    assert_eq!(subscription.channel(), Channel::SchemaChanged);

    registry.register_configuration(&node("u.one"), true);
    assert!(registry.unsubscribe(subscription));
    registry.register_configuration(&node("u.two"), true);

    assert_eq!(*count.borrow(), 1);
    assert!(!registry.unsubscribe(subscription));
}
