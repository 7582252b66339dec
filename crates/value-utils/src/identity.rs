use crate::value::Value;
use std::hash::{Hash, Hasher};

/// A [`Value`] keyed by set-membership identity.
///
/// Primitives compare by value with SameValueZero semantics (`NaN` equals
/// `NaN`, `0` equals `-0`). Arrays, objects and opaque values compare by
/// reference: two structurally equal objects are still distinct keys.
///
/// This is the equality used by [`crate::uniq`], [`crate::uniq_by`] and
/// [`crate::xor`].
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use serde_json::json;
/// use value_utils::{IdentityKey, Value};
///
/// let obj = Value::from(json!({}));
/// let mut set = HashSet::new();
/// set.insert(IdentityKey::new(obj.clone()));
///
/// assert!(set.contains(&IdentityKey::new(obj)));
/// assert!(!set.contains(&IdentityKey::new(Value::from(json!({})))));
/// assert!(set.insert(IdentityKey::new(Value::from(f64::NAN))));
/// assert!(!set.insert(IdentityKey::new(Value::from(f64::NAN))));
/// ```
#[derive(Debug, Clone)]
pub struct IdentityKey(Value);

impl IdentityKey {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl From<Value> for IdentityKey {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl PartialEq for IdentityKey {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::String(a), Value::String(b)) => a == b,
            (a, b) => a.ptr_eq(b),
        }
    }
}

impl Eq for IdentityKey {}

impl Hash for IdentityKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(&self.0).hash(state);
        match &self.0 {
            Value::Undefined | Value::Null => {}
            Value::Bool(b) => b.hash(state),
            Value::Number(n) => number_bits(*n).hash(state),
            Value::String(s) => s.hash(state),
            other => other.addr().hash(state),
        }
    }
}

// Canonical bits so that keys equal under SameValueZero hash alike.
fn number_bits(n: f64) -> u64 {
    if n.is_nan() {
        f64::NAN.to_bits()
    } else if n == 0.0 {
        0.0f64.to_bits()
    } else {
        n.to_bits()
    }
}
