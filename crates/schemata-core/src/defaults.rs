//! Type-appropriate zero values for properties that omit a default.

use serde_json::{Map, Value, json};

use crate::schema::SchemaType;

/// Zero value for a declared type. For a union the first type decides;
/// unknown or absent types yield `null`.
#[must_use]
pub fn default_for(schema_type: Option<&SchemaType>) -> Value {
    match schema_type.and_then(SchemaType::primary) {
        Some("boolean") => Value::Bool(false),
        Some("integer" | "number") => json!(0),
        Some("string") => Value::String(String::new()),
        Some("array") => Value::Array(Vec::new()),
        Some("object") => Value::Object(Map::new()),
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(name: &str) -> SchemaType {
        SchemaType::from(name)
    }

    #[test]
    fn zero_values_per_type() {
        assert_eq!(default_for(Some(&single("boolean"))), json!(false));
        assert_eq!(default_for(Some(&single("integer"))), json!(0));
        assert_eq!(default_for(Some(&single("number"))), json!(0));
        assert_eq!(default_for(Some(&single("string"))), json!(""));
        assert_eq!(default_for(Some(&single("array"))), json!([]));
        assert_eq!(default_for(Some(&single("object"))), json!({}));
    }

    #[test]
    fn unknown_and_absent_types_are_null() {
        assert_eq!(default_for(Some(&single("null"))), Value::Null);
        assert_eq!(default_for(Some(&single("color"))), Value::Null);
        assert_eq!(default_for(None), Value::Null);
        assert_eq!(default_for(Some(&SchemaType::Union(Vec::new()))), Value::Null);
    }

    #[test]
    fn union_uses_first_type() {
        let union = SchemaType::Union(vec!["string".into(), "null".into()]);
        assert_eq!(default_for(Some(&union)), json!(""));
    }
}
