use crate::value::{Map, Value};
use std::sync::Arc;

/// Creates a deep clone of a value.
///
/// Every nested array and object is rebuilt, so the result shares no
/// container with the input. Primitives are copied as-is.
///
/// **Limitation:** opaque host values cannot be walked and are shared with
/// the input rather than copied.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use value_utils::{clone_deep, Value};
///
/// let original = Value::from(json!({"foo": [1, 2, 3]}));
/// let cloned = clone_deep(&original);
///
/// assert_eq!(original, cloned);
/// assert!(!original.ptr_eq(&cloned));
/// ```
pub fn clone_deep(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(Arc::new(items.iter().map(clone_deep).collect())),
        Value::Object(map) => {
            let mut new_map = Map::with_capacity(map.len());
            for (key, val) in map.iter() {
                new_map.insert(key.clone(), clone_deep(val));
            }
            Value::Object(Arc::new(new_map))
        }
        other => other.clone(),
    }
}
