//! Value - the tagged data model carried on the VM stack.
//!
//! This module contains:
//! - `Value`: the closed set of values a Watson program can build
//! - `Kind`: the tag of a `Value`, used in diagnostics and type checks
//!
//! Every `Object`/`Array` exclusively owns its entries. There is no shared
//! subtree anywhere in a `Value`, so `Clone` is always a deep copy.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Object payload: byte-string keys mapped to owned values.
pub type Object = HashMap<Vec<u8>, Value>;

#[derive(Debug, Clone)]
pub enum Value {
    Int(i64),
    Uint(u64),
    Float(f64),
    /// Raw bytes; no text encoding is assumed.
    String(Vec<u8>),
    Object(Object),
    Array(Vec<Value>),
    Bool(bool),
    Nil,
}

/// Tag of a [`Value`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Int,
    Uint,
    Float,
    String,
    Object,
    Array,
    Bool,
    Nil,
}

impl Kind {
    pub fn name(self) -> &'static str {
        match self {
            Kind::Int => "Int",
            Kind::Uint => "Uint",
            Kind::Float => "Float",
            Kind::String => "String",
            Kind::Object => "Object",
            Kind::Array => "Array",
            Kind::Bool => "Bool",
            Kind::Nil => "Nil",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Int(_) => Kind::Int,
            Value::Uint(_) => Kind::Uint,
            Value::Float(_) => Kind::Float,
            Value::String(_) => Kind::String,
            Value::Object(_) => Kind::Object,
            Value::Array(_) => Kind::Array,
            Value::Bool(_) => Kind::Bool,
            Value::Nil => Kind::Nil,
        }
    }

    /// Build a `String` value from anything byte-like.
    pub fn string(bytes: impl AsRef<[u8]>) -> Self {
        Value::String(bytes.as_ref().to_vec())
    }

    /// Build an `Object` from `(key, value)` pairs. Later duplicates win.
    pub fn object<K, I>(entries: I) -> Self
    where
        K: AsRef<[u8]>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.as_ref().to_vec(), v))
                .collect(),
        )
    }

    pub fn array(elements: impl IntoIterator<Item = Value>) -> Self {
        Value::Array(elements.into_iter().collect())
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_uint(&self) -> Option<u64> {
        match self {
            Value::Uint(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Look up an object entry by key. `None` for non-objects and missing keys.
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&Value> {
        self.as_object().and_then(|o| o.get(key.as_ref()))
    }
}

// ========== Equality ==========

/// Floats compare by bit pattern, except that every NaN equals every other
/// NaN. `0.0` and `-0.0` stay distinct.
fn float_eq(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Uint(a), Value::Uint(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => float_eq(*a, *b),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Nil, Value::Nil) => true,
            _ => false,
        }
    }
}

impl Eq for Value {}

// ========== From implementations ==========

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Uint(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.as_bytes().to_vec())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v.into_bytes())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Value::Object(v)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Nil
    }
}

// ========== Display implementation ==========

struct DisplayBytes<'a>(&'a [u8]);

impl fmt::Display for DisplayBytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.0.escape_ascii())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Uint(v) => write!(f, "{}u", v),
            Value::Float(v) => {
                if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
                    write!(f, "{}.0", v)
                } else {
                    write!(f, "{}", v)
                }
            }
            Value::String(s) => write!(f, "{}", DisplayBytes(s)),
            Value::Object(obj) => {
                // Sorted so that the rendering is stable across runs.
                let mut entries: Vec<_> = obj.iter().collect();
                entries.sort_by(|a, b| a.0.cmp(b.0));
                write!(f, "{{")?;
                for (i, (k, v)) in entries.into_iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", DisplayBytes(k), v)?;
                }
                write!(f, "}}")
            }
            Value::Array(arr) => {
                write!(f, "[")?;
                for (i, v) in arr.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
            Value::Bool(v) => write!(f, "{}", v),
            Value::Nil => write!(f, "nil"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_kind() {
        assert_eq!(Value::Int(1).kind(), Kind::Int);
        assert_eq!(Value::Uint(1).kind(), Kind::Uint);
        assert_eq!(Value::Float(1.5).kind(), Kind::Float);
        assert_eq!(Value::string("x").kind(), Kind::String);
        assert_eq!(Value::object::<&str, _>([]).kind(), Kind::Object);
        assert_eq!(Value::array([]).kind(), Kind::Array);
        assert_eq!(Value::Bool(true).kind(), Kind::Bool);
        assert_eq!(Value::Nil.kind(), Kind::Nil);
    }

    #[test]
    fn test_kind_serde_uses_name() {
        let json = serde_json::to_string(&Kind::Uint).unwrap();
        assert_eq!(json, r#""Uint""#);
        assert_eq!(serde_json::from_str::<Kind>(&json).unwrap(), Kind::Uint);
    }

    #[test]
    fn test_float_equality_is_bitwise_except_nan() {
        assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
        assert_eq!(Value::Float(f64::NAN), Value::Float(-f64::NAN));
        assert_eq!(
            Value::Float(f64::NAN),
            Value::Float(f64::from_bits(0x7ff0_0000_0000_0001))
        );
        assert_ne!(Value::Float(0.0), Value::Float(-0.0));
        assert_ne!(Value::Float(f64::NAN), Value::Float(f64::INFINITY));
    }

    #[test]
    fn test_object_equality_ignores_insertion_order() {
        let a = Value::object([("a", Value::Int(1)), ("b", Value::Int(2))]);
        let b = Value::object([("b", Value::Int(2)), ("a", Value::Int(1))]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_kinds_never_compare_equal() {
        assert_ne!(Value::Int(1), Value::Uint(1));
        assert_ne!(Value::Nil, Value::Bool(false));
    }

    #[test]
    fn test_clone_is_deep() {
        let original = Value::array([Value::object([("k", Value::string("v"))])]);
        let mut copy = original.clone();
        if let Some(arr) = copy.as_array_mut() {
            arr[0] = Value::Nil;
        }
        assert_eq!(
            original.as_array().map(|a| a[0].kind()),
            Some(Kind::Object)
        );
    }

    #[test]
    fn test_value_display() {
        assert_eq!(format!("{}", Value::Int(-3)), "-3");
        assert_eq!(format!("{}", Value::Uint(3)), "3u");
        assert_eq!(format!("{}", Value::Float(2.0)), "2.0");
        assert_eq!(format!("{}", Value::string("a\n")), "\"a\\n\"");
        assert_eq!(
            format!(
                "{}",
                Value::object([("b", Value::Nil), ("a", Value::Bool(true))])
            ),
            "{\"a\": true, \"b\": nil}"
        );
        assert_eq!(
            format!("{}", Value::array([Value::Int(1), Value::Int(2)])),
            "[1, 2]"
        );
    }
}
