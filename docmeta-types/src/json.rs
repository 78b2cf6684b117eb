use serde_json::{Map, Value};

/// A metadata document: string keys in insertion order mapped to JSON values.
pub type Metadata = Map<String, Value>;

/// Removes every null value at any depth.
///
/// Objects and arrays are pruned recursively. A container that ends up empty
/// is kept as an empty container; only nulls themselves are dropped.
#[must_use]
pub fn remove_nulls(metadata: Metadata) -> Metadata {
    metadata
        .into_iter()
        .filter_map(|(key, value)| prune(value).map(|value| (key, value)))
        .collect()
}

fn prune(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::Object(map) => Some(Value::Object(remove_nulls(map))),
        Value::Array(items) => Some(Value::Array(items.into_iter().filter_map(prune).collect())),
        scalar @ (Value::Bool(_) | Value::Number(_) | Value::String(_)) => Some(scalar),
    }
}

/// Returns a copy of the top-level entries whose key starts with none of `prefixes`.
///
/// Nested values are cloned as-is.
#[must_use]
pub fn without_prefixed_keys(metadata: &Metadata, prefixes: &[&str]) -> Metadata {
    metadata
        .iter()
        .filter(|(key, _)| !prefixes.iter().any(|prefix| key.starts_with(prefix)))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
