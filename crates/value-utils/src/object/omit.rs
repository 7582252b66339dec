use crate::value::{Map, Value};

/// Creates a shallow copy of `object`'s own entries without the listed keys.
///
/// Keys that are not present are ignored. Nested arrays and objects are
/// shared with `object`, so this is a one-level copy and not a deep clone.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use value_utils::{omit, Value};
///
/// let object = Value::from(json!({"a": 1, "b": "2", "c": 3}));
/// assert_eq!(Value::from(omit(&object, ["a", "c"])), Value::from(json!({"b": "2"})));
/// ```
pub fn omit<I, S>(object: &Value, paths: I) -> Map
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result: Map = object
        .own_entries()
        .map(|(key, value)| (key, value.clone()))
        .collect();
    for path in paths {
        result.shift_remove(path.as_ref());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_omit_specified_properties() {
        let object = Value::from(json!({"a": 1, "b": "2", "c": 3}));
        assert_eq!(Value::from(omit(&object, ["a", "c"])), Value::from(json!({"b": "2"})));
    }

    #[test]
    fn test_omit_nothing_matches() {
        let object = Value::from(json!({"a": 1, "b": 2}));
        let result = Value::from(omit(&object, ["c"]));
        assert_eq!(result, object);
        assert!(!result.ptr_eq(&object));
    }

    #[test]
    fn test_omit_empty_object() {
        assert!(omit(&Value::from(json!({})), ["a", "b"]).is_empty());
    }

    #[test]
    fn test_omit_non_object() {
        assert!(omit(&Value::Undefined, ["a"]).is_empty());
        assert!(omit(&Value::from(3), Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_omit_keeps_order() {
        let object = Value::from(json!({"c": 1, "a": 2, "b": 3}));
        let result = omit(&object, ["a"]);
        assert_eq!(result.keys().collect::<Vec<_>>(), vec!["c", "b"]);
    }

    #[test]
    fn test_omit_is_shallow() {
        let object = Value::from(json!({"a": {"deep": [1]}, "b": 1}));
        let result = omit(&object, ["b"]);
        assert!(result["a"].ptr_eq(object.get_own("a").unwrap()));
    }

    #[test]
    fn test_omit_does_not_mutate_input() {
        let object = Value::from(json!({"a": 1, "b": 2}));
        let _ = omit(&object, ["a"]);
        assert!(object.has_own("a"));
    }
}
