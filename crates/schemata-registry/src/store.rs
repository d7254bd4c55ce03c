//! JSON-schema contribution store seam.
//!
//! The registry publishes the resource-language settings schema into a store
//! shared with other schema producers. The store itself is an external
//! collaborator; [`MemorySchemaStore`] is the in-process implementation.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use serde_json::Value;

/// Receives schema documents keyed by URI.
pub trait SchemaStore {
    /// Register or replace the schema published under `uri`.
    fn register_schema(&self, uri: &str, schema: Value);
}

/// Keeps the latest document per URI plus a publication counter.
#[derive(Debug, Default)]
pub struct MemorySchemaStore {
    schemas: RefCell<BTreeMap<String, Value>>,
    publications: Cell<u64>,
}

impl MemorySchemaStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The latest document published under `uri`.
    #[must_use]
    pub fn get(&self, uri: &str) -> Option<Value> {
        self.schemas.borrow().get(uri).cloned()
    }

    /// Published URIs in sorted order.
    #[must_use]
    pub fn uris(&self) -> Vec<String> {
        self.schemas.borrow().keys().cloned().collect()
    }

    /// Total number of `register_schema` calls received.
    #[must_use]
    pub fn publications(&self) -> u64 {
        self.publications.get()
    }
}

impl SchemaStore for MemorySchemaStore {
    fn register_schema(&self, uri: &str, schema: Value) {
        self.schemas.borrow_mut().insert(uri.to_string(), schema);
        self.publications.set(self.publications.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::rc::Rc;

    #[test]
    fn latest_publication_wins() {
        let store = MemorySchemaStore::new();
        store.register_schema("schemata://a", json!({"v": 1}));
        store.register_schema("schemata://a", json!({"v": 2}));

        assert_eq!(store.get("schemata://a"), Some(json!({"v": 2})));
        assert_eq!(store.uris(), vec!["schemata://a".to_string()]);
        assert_eq!(store.publications(), 2);
    }

    #[test]
    fn shared_handle_forwards_to_inner_store() {
        let store = Rc::new(MemorySchemaStore::new());
        let shared: Rc<dyn SchemaStore> = Rc::clone(&store) as Rc<dyn SchemaStore>;
        shared.register_schema("schemata://b", json!(true));
        assert_eq!(store.get("schemata://b"), Some(json!(true)));
    }
}
