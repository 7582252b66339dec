use crate::identity::IdentityKey;
use crate::value::Value;
use std::collections::HashMap;

/// Returns the elements that occur exactly once across all inputs.
///
/// The inputs are flattened in order and every element whose total count is
/// one is kept. An element repeated inside a single input is therefore
/// dropped even when no other input contains it.
///
/// # Examples
///
/// ```
/// use value_utils::{xor, Value};
///
/// let a = [Value::from(2), Value::from(1)];
/// let b = [Value::from(2), Value::from(3)];
/// assert_eq!(xor([&a[..], &b[..]]), vec![Value::from(1), Value::from(3)]);
///
/// let c = [Value::from(1), Value::from(1)];
/// let d = [Value::from(1)];
/// assert!(xor([&c[..], &d[..]]).is_empty());
/// ```
pub fn xor<I, A>(arrays: I) -> Vec<Value>
where
    I: IntoIterator<Item = A>,
    A: AsRef<[Value]>,
{
    let combined: Vec<Value> = arrays
        .into_iter()
        .flat_map(|array| array.as_ref().to_vec())
        .collect();

    let mut counts: HashMap<IdentityKey, usize> = HashMap::with_capacity(combined.len());
    for item in &combined {
        *counts.entry(IdentityKey::new(item.clone())).or_insert(0) += 1;
    }

    combined
        .into_iter()
        .filter(|item| counts.get(&IdentityKey::new(item.clone())) == Some(&1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn values(json: serde_json::Value) -> Vec<Value> {
        Value::from(json).as_array().unwrap().to_vec()
    }

    #[test]
    fn test_elements_in_one_array() {
        let result = xor([values(json!([2, 1])), values(json!([2, 3]))]);
        assert_eq!(result, values(json!([1, 3])));
    }

    #[test]
    fn test_all_shared() {
        assert!(xor([values(json!([1, 2])), values(json!([1, 2]))]).is_empty());
    }

    #[test]
    fn test_duplicate_within_one_array() {
        assert!(xor([values(json!([1, 1])), values(json!([1]))]).is_empty());
        assert_eq!(xor([values(json!([4, 4, 5]))]), values(json!([5])));
    }

    #[test]
    fn test_three_arrays() {
        let result = xor([values(json!([1, 2])), values(json!([2, 3])), values(json!([3, 4]))]);
        assert_eq!(result, values(json!([1, 4])));
    }

    #[test]
    fn test_no_arrays() {
        assert!(xor(Vec::<Vec<Value>>::new()).is_empty());
    }

    #[test]
    fn test_objects_by_reference() {
        let shared = Value::from(json!({"a": 1}));
        let lookalike = Value::from(json!({"a": 1}));
        let result = xor([vec![shared.clone(), lookalike.clone()], vec![shared]]);
        assert_eq!(result.len(), 1);
        assert!(result[0].ptr_eq(&lookalike));
    }
}
