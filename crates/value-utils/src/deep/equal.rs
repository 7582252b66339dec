use crate::value::Value;

/// Performs a deep equality check between two values.
///
/// - The same container (see [`Value::ptr_eq`]) is equal to itself.
/// - Primitives use strict equality: numbers compare with IEEE `==`, so
///   `NaN` is never equal and `0` equals `-0`.
/// - Arrays are equal when they have the same length and equal elements.
/// - Objects are equal when they have the same set of own keys, in any
///   order, with equal values.
/// - Anything else, including an array against an object and opaque values
///   that are not the same handle, is not equal.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use value_utils::{is_equal, Value};
///
/// let a = Value::from(json!({"foo": [1, 2, 3], "bar": null}));
/// let b = Value::from(json!({"bar": null, "foo": [1, 2, 3]}));
/// let c = Value::from(json!({"foo": [1, 2, 4], "bar": null}));
///
/// assert!(is_equal(&a, &b));
/// assert!(!is_equal(&a, &c));
/// ```
pub fn is_equal(value: &Value, other: &Value) -> bool {
    if value.ptr_eq(other) {
        return true;
    }
    match (value, other) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,

        // Arrays
        (Value::Array(arr_a), Value::Array(arr_b)) => {
            if arr_a.len() != arr_b.len() {
                return false;
            }
            arr_a.iter().zip(arr_b.iter()).all(|(a, b)| is_equal(a, b))
        }

        // Objects
        (Value::Object(obj_a), Value::Object(obj_b)) => {
            if obj_a.len() != obj_b.len() {
                return false;
            }
            for (key, val_a) in obj_a.iter() {
                match obj_b.get(key) {
                    Some(val_b) => {
                        if !is_equal(val_a, val_b) {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
            true
        }

        _ => false,
    }
}
