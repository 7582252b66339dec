use crate::identity::IdentityKey;
use crate::value::Value;
use std::collections::HashSet;

/// Returns the first occurrence of each distinct element, in order.
///
/// Primitives are distinct by value, containers by reference.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use value_utils::{uniq, Value};
///
/// let items = Value::from(json!([1, 2, 1, 3]));
/// let unique = uniq(items.as_array().unwrap());
///
/// assert_eq!(Value::from(unique), Value::from(json!([1, 2, 3])));
/// ```
pub fn uniq(array: &[Value]) -> Vec<Value> {
    let mut seen = HashSet::with_capacity(array.len());
    array
        .iter()
        .filter(|item| seen.insert(IdentityKey::new((*item).clone())))
        .cloned()
        .collect()
}

/// Like [`uniq`], but distinctness is decided on `iteratee(element)`.
///
/// The first element producing a given key is kept.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use value_utils::{uniq_by, Value};
///
/// let items = Value::from(json!([{"x": 1}, {"x": 2}, {"x": 1}]));
/// let unique = uniq_by(items.as_array().unwrap(), |o| o.get_own("x").cloned().unwrap_or_default());
///
/// assert_eq!(Value::from(unique), Value::from(json!([{"x": 1}, {"x": 2}])));
/// ```
pub fn uniq_by<F>(array: &[Value], mut iteratee: F) -> Vec<Value>
where
    F: FnMut(&Value) -> Value,
{
    let mut seen = HashSet::with_capacity(array.len());
    array
        .iter()
        .filter(|item| seen.insert(IdentityKey::new(iteratee(*item))))
        .cloned()
        .collect()
}
