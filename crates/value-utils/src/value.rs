use indexmap::IndexMap;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Insertion-ordered mapping from own keys to values.
pub type Map = IndexMap<String, Value>;

/// A dynamic value that the helpers in this crate operate on.
///
/// Containers are reference counted: cloning a `Value` shares the nested
/// arrays and objects, exactly like copying a reference in a dynamic
/// language. Use [`crate::clone_deep`] to get a value that shares nothing.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use value_utils::Value;
///
/// let value = Value::from(json!({"a": [1, 2]}));
/// let shared = value.clone();
///
/// assert!(value.ptr_eq(&shared));
/// assert_eq!(value.get_own("a").and_then(|a| a.get_own("1")), Some(&Value::from(2)));
/// ```
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// A key that is present but holds no value.
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Arc<Vec<Value>>),
    Object(Arc<Map>),
    /// A host value that is only ever compared by identity.
    Opaque(OpaqueValue),
}

/// A host value (function, date, class instance...) carried through
/// the helpers without being introspected.
#[derive(Clone)]
pub struct OpaqueValue(Arc<dyn Any + Send + Sync>);

impl OpaqueValue {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }

    /// Returns true if both handles point to the same host value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }

    pub(crate) fn addr(&self) -> usize {
        Arc::as_ptr(&self.0) as *const () as usize
    }
}

impl fmt::Debug for OpaqueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Opaque({:#x})", self.addr())
    }
}

impl Value {
    /// Builds an array value.
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Arc::new(items))
    }

    /// Builds an object value.
    pub fn object(map: Map) -> Self {
        Value::Object(Arc::new(map))
    }

    pub fn opaque<T: Any + Send + Sync>(value: T) -> Self {
        Value::Opaque(OpaqueValue::new(value))
    }

    /// Name of the variant, useful in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Opaque(_) => "opaque",
        }
    }

    /// True for values that have own keys: arrays and objects.
    pub fn is_object_like(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Object(_))
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Mutable access to an array, copying it first if it is shared.
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Some(Arc::make_mut(items)),
            _ => None,
        }
    }

    /// Mutable access to an object, copying it first if it is shared.
    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Object(map) => Some(Arc::make_mut(map)),
            _ => None,
        }
    }

    /// Looks up an own key.
    ///
    /// Objects are looked up by key, arrays by canonical index (`"0"`, `"12"`,
    /// but not `"01"` or `"-1"`). Every other variant has no own keys.
    pub fn get_own(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            Value::Array(items) => parse_index(key).and_then(|i| items.get(i)),
            _ => None,
        }
    }

    /// Membership test for an own key. A key holding [`Value::Undefined`]
    /// is present.
    pub fn has_own(&self, key: &str) -> bool {
        self.get_own(key).is_some()
    }

    /// Own keys in natural order: insertion order for objects, ascending
    /// indices for arrays.
    pub fn own_keys(&self) -> Vec<String> {
        self.own_entries().map(|(key, _)| key).collect()
    }

    /// Own `(key, value)` pairs in natural order.
    pub fn own_entries(&self) -> OwnEntries<'_> {
        match self {
            Value::Object(map) => OwnEntries::Object(map.iter()),
            Value::Array(items) => OwnEntries::Array(items.iter().enumerate()),
            _ => OwnEntries::Empty,
        }
    }

    /// Reference identity: true if both values are the same container or
    /// the same opaque host value. Primitives have no identity.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        match (self.addr(), other.addr()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    pub(crate) fn addr(&self) -> Option<usize> {
        match self {
            Value::Array(items) => Some(Arc::as_ptr(items) as usize),
            Value::Object(map) => Some(Arc::as_ptr(map) as usize),
            Value::Opaque(opaque) => Some(opaque.addr()),
            _ => None,
        }
    }
}

fn parse_index(key: &str) -> Option<usize> {
    let bytes = key.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    key.parse().ok()
}

/// Iterator over the own entries of a value, see [`Value::own_entries`].
pub enum OwnEntries<'a> {
    Object(indexmap::map::Iter<'a, String, Value>),
    Array(std::iter::Enumerate<std::slice::Iter<'a, Value>>),
    Empty,
}

impl<'a> Iterator for OwnEntries<'a> {
    type Item = (String, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            OwnEntries::Object(iter) => iter.next().map(|(key, value)| (key.clone(), value)),
            OwnEntries::Array(iter) => iter.next().map(|(index, value)| (index.to_string(), value)),
            OwnEntries::Empty => None,
        }
    }
}

/// Structural equality, see [`crate::is_equal`].
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        crate::deep::is_equal(self, other)
    }
}

impl From<&serde_json::Value> for Value {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(arr) => Value::array(arr.iter().map(Value::from).collect()),
            serde_json::Value::Object(obj) => {
                let mut map = Map::with_capacity(obj.len());
                for (key, val) in obj {
                    map.insert(key.clone(), Value::from(val));
                }
                Value::object(map)
            }
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        Value::from(&value)
    }
}

impl From<&Value> for serde_json::Value {
    /// Converts back to JSON.
    ///
    /// **Note:** `Undefined`, `Opaque` and non-finite numbers have no JSON
    /// form and become `null`.
    fn from(value: &Value) -> Self {
        match value {
            Value::Undefined | Value::Null | Value::Opaque(_) => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => number_to_json(*n),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            Value::Object(map) => {
                let mut obj = serde_json::Map::with_capacity(map.len());
                for (key, val) in map.iter() {
                    obj.insert(key.clone(), serde_json::Value::from(val));
                }
                serde_json::Value::Object(obj)
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        serde_json::Value::from(&value)
    }
}

// Integral floats are written back as JSON integers so `1.0` round-trips as `1`.
fn number_to_json(n: f64) -> serde_json::Value {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return serde_json::Value::Number((n as i64).into());
    }
    serde_json::Number::from_f64(n)
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null)
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::array(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::object(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::array(iter.into_iter().collect())
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Value::object(iter.into_iter().collect())
    }
}
