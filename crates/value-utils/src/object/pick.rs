use crate::value::{Map, Value};

/// Creates a new object holding the listed own keys of `object`.
///
/// Keys that are not own keys of `object` are skipped. Values are shared
/// with `object`, not deep-cloned. A value without own keys yields an
/// empty object.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use value_utils::{pick, Value};
///
/// let object = Value::from(json!({"a": 1, "b": "2", "c": 3}));
/// let picked = Value::from(pick(&object, ["a", "c", "z"]));
///
/// assert_eq!(picked, Value::from(json!({"a": 1, "c": 3})));
/// ```
pub fn pick<I, S>(object: &Value, paths: I) -> Map
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = Map::new();
    for path in paths {
        let key = path.as_ref();
        if let Some(value) = object.get_own(key) {
            result.insert(key.to_string(), value.clone());
        }
    }
    result
}

/// Creates a new object holding every own entry of `object` for which
/// `predicate(value, key)` returns true, in the object's natural order.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use value_utils::{pick_by, Value};
///
/// let object = Value::from(json!({"a": 1, "b": "2", "c": 3}));
/// let numbers = Value::from(pick_by(&object, |value, _| value.as_f64().is_some()));
///
/// assert_eq!(numbers, Value::from(json!({"a": 1, "c": 3})));
/// ```
pub fn pick_by<F>(object: &Value, mut predicate: F) -> Map
where
    F: FnMut(&Value, &str) -> bool,
{
    let mut result = Map::new();
    for (key, value) in object.own_entries() {
        if predicate(value, &key) {
            result.insert(key, value.clone());
        }
    }
    result
}
