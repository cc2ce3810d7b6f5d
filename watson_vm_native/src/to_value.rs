//! Native -> `Value` conversion table.
//!
//! | Native type | Value |
//! |---|---|
//! | `bool` | `Bool` |
//! | `i8` .. `i64`, `isize` | `Int` |
//! | `u8` .. `u64`, `usize` | `Uint` |
//! | `f32`, `f64` | `Float` |
//! | `str`, `String` | `String` |
//! | `[u8]`, `Vec<u8>` | `String` (bytes copied) |
//! | `[Value]`, `Vec<Value>` | `Array` (deep copy) |
//! | `Option<T>` | `Nil` for `None`, otherwise `T`'s value |
//! | `HashMap<K, T>`, `BTreeMap<K, T>` with `K: AsRef<str>` | `Object` |
//! | `Value` | deep copy |
//!
//! `Option` is matched before anything structural, so a `None` map or list
//! becomes `Nil` rather than an empty container.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use watson_vm::Value;

/// Conversion into a Watson [`Value`].
///
/// Implement this for your own container types; there is no reflective
/// fallback.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

/// Convert any [`ToValue`] type.
pub fn to_value<T: ToValue + ?Sized>(v: &T) -> Value {
    v.to_value()
}

macro_rules! int_to_value {
    ($($t:ty),*) => {
        $(
            impl ToValue for $t {
                fn to_value(&self) -> Value {
                    Value::Int(i64::from(*self))
                }
            }
        )*
    };
}

macro_rules! uint_to_value {
    ($($t:ty),*) => {
        $(
            impl ToValue for $t {
                fn to_value(&self) -> Value {
                    Value::Uint(u64::from(*self))
                }
            }
        )*
    };
}

int_to_value!(i8, i16, i32, i64);
uint_to_value!(u8, u16, u32, u64);

// isize/usize are at most 64 bits on every supported target.
impl ToValue for isize {
    fn to_value(&self) -> Value {
        Value::Int(*self as i64)
    }
}

impl ToValue for usize {
    fn to_value(&self) -> Value {
        Value::Uint(*self as u64)
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl ToValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::String(self.as_bytes().to_vec())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        self.as_str().to_value()
    }
}

impl ToValue for [u8] {
    fn to_value(&self) -> Value {
        Value::String(self.to_vec())
    }
}

impl ToValue for Vec<u8> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl ToValue for [Value] {
    fn to_value(&self) -> Value {
        Value::Array(self.to_vec())
    }
}

impl ToValue for Vec<Value> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            None => Value::Nil,
            Some(v) => v.to_value(),
        }
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<K, T, S> ToValue for HashMap<K, T, S>
where
    K: AsRef<str>,
    T: ToValue,
    S: BuildHasher,
{
    fn to_value(&self) -> Value {
        Value::object(self.iter().map(|(k, v)| (k.as_ref(), v.to_value())))
    }
}

impl<K, T> ToValue for BTreeMap<K, T>
where
    K: AsRef<str>,
    T: ToValue,
{
    fn to_value(&self) -> Value {
        Value::object(self.iter().map(|(k, v)| (k.as_ref(), v.to_value())))
    }
}
