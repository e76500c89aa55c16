use crate::Value;
use std::hash::{Hash, Hasher};

/// Name of the JSON kind of `value`, used in error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Feeds `value` into `state` so that equal values hash equally.
///
/// `serde_json::Value` has no `Hash`. Objects are hashed over their sorted keys
/// since object equality ignores key order.
pub fn hash_value<H: Hasher>(value: &Value, state: &mut H) {
    value_kind(value).hash(state);
    match value {
        Value::Null => {}
        Value::Bool(flag) => flag.hash(state),
        Value::Number(number) => number.hash(state),
        Value::String(text) => text.hash(state),
        Value::Array(values) => {
            values.len().hash(state);
            for value in values {
                hash_value(value, state);
            }
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            entries.len().hash(state);
            for (key, value) in entries {
                key.hash(state);
                hash_value(value, state);
            }
        }
    }
}
