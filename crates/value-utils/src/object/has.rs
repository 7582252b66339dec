use crate::path::to_path;
use crate::value::Value;

/// Check whether `path` resolves to a present key inside `object`.
///
/// Each segment of the path is looked up as an own key (membership, not
/// "value is defined"), so a key holding [`Value::Undefined`] counts as
/// present. Returns false if `object` has no own keys to begin with, if an
/// intermediate value is not an array or object, or if a key is missing.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use value_utils::{has, Value};
///
/// let object = Value::from(json!({"a": [{"b": {"c": 3}}]}));
///
/// assert!(has(&object, "a[0].b.c"));
/// assert!(has(&object, "a.0.b"));
/// assert!(!has(&object, "a[0].b.d"));
/// ```
pub fn has(object: &Value, path: &str) -> bool {
    has_path(object, &to_path(path))
}

/// Like [`has`], with the path already split into segments.
pub fn has_path<S: AsRef<str>>(object: &Value, path: &[S]) -> bool {
    if !object.is_object_like() {
        return false;
    }
    let mut current = object;
    for key in path {
        match current.get_own(key.as_ref()) {
            Some(next) => current = next,
            None => return false,
        }
    }
    true
}
