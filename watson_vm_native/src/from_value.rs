//! `Value` -> native conversion.
//!
//! Each target accepts exactly one kind. An `Int` never turns into a `u64`,
//! a `Uint` never into an `i64`, and nothing turns into a `bool`; mismatches
//! are reported as [`ConvertError::UnsupportedType`]. `Option<T>` maps `Nil`
//! to `None` and defers to `T` for everything else.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use watson_vm::{Object, Value};

use crate::error::{ConvertError, ConvertResult};

/// Conversion out of a Watson [`Value`].
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> ConvertResult<Self>;
}

/// Convert `value` into `T`.
pub fn from_value<T: FromValue>(value: &Value) -> ConvertResult<T> {
    T::from_value(value)
}

fn utf8(bytes: &[u8]) -> ConvertResult<String> {
    String::from_utf8(bytes.to_vec())
        .map_err(|_| ConvertError::InvalidUtf8(String::from_utf8_lossy(bytes).into_owned()))
}

fn expect_object<'a>(value: &'a Value, expected: &'static str) -> ConvertResult<&'a Object> {
    value
        .as_object()
        .ok_or_else(|| ConvertError::unsupported(expected, value.kind()))
}

impl FromValue for bool {
    fn from_value(value: &Value) -> ConvertResult<Self> {
        value
            .as_bool()
            .ok_or_else(|| ConvertError::unsupported("bool", value.kind()))
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> ConvertResult<Self> {
        value
            .as_int()
            .ok_or_else(|| ConvertError::unsupported("i64", value.kind()))
    }
}

impl FromValue for u64 {
    fn from_value(value: &Value) -> ConvertResult<Self> {
        value
            .as_uint()
            .ok_or_else(|| ConvertError::unsupported("u64", value.kind()))
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> ConvertResult<Self> {
        value
            .as_float()
            .ok_or_else(|| ConvertError::unsupported("f64", value.kind()))
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> ConvertResult<Self> {
        let bytes = value
            .as_bytes()
            .ok_or_else(|| ConvertError::unsupported("String", value.kind()))?;
        utf8(bytes)
    }
}

impl FromValue for Vec<u8> {
    fn from_value(value: &Value) -> ConvertResult<Self> {
        value
            .as_bytes()
            .map(<[u8]>::to_vec)
            .ok_or_else(|| ConvertError::unsupported("Vec<u8>", value.kind()))
    }
}

impl FromValue for Vec<Value> {
    fn from_value(value: &Value) -> ConvertResult<Self> {
        value
            .as_array()
            .map(<[Value]>::to_vec)
            .ok_or_else(|| ConvertError::unsupported("Vec<Value>", value.kind()))
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> ConvertResult<Self> {
        Ok(value.clone())
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> ConvertResult<Self> {
        if value.is_nil() {
            Ok(None)
        } else {
            T::from_value(value).map(Some)
        }
    }
}

impl<T, S> FromValue for HashMap<String, T, S>
where
    T: FromValue,
    S: BuildHasher + Default,
{
    fn from_value(value: &Value) -> ConvertResult<Self> {
        expect_object(value, "HashMap<String, _>")?
            .iter()
            .map(|(k, v)| Ok((utf8(k)?, T::from_value(v)?)))
            .collect()
    }
}

impl<T: FromValue> FromValue for BTreeMap<String, T> {
    fn from_value(value: &Value) -> ConvertResult<Self> {
        expect_object(value, "BTreeMap<String, _>")?
            .iter()
            .map(|(k, v)| Ok((utf8(k)?, T::from_value(v)?)))
            .collect()
    }
}
