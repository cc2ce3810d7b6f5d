//! Bridge between Watson values and `serde_json::Value`.
//!
//! JSON numbers become `Int` when they fit in an i64, `Uint` when they only
//! fit in a u64, and `Float` otherwise. In the other direction strings and
//! object keys must be UTF-8 and floats must be finite.

use serde_json::{Map, Number, Value as Json};
use watson_vm::Value;

use crate::error::{ConvertError, ConvertResult};

fn number_to_value(n: &Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Int(i)
    } else if let Some(u) = n.as_u64() {
        Value::Uint(u)
    } else {
        Value::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

pub fn json_to_value(json: &Json) -> Value {
    match json {
        Json::Null => Value::Nil,
        Json::Bool(b) => Value::Bool(*b),
        Json::Number(n) => number_to_value(n),
        Json::String(s) => Value::string(s),
        Json::Array(items) => Value::array(items.iter().map(json_to_value)),
        Json::Object(map) => Value::object(map.iter().map(|(k, v)| (k, json_to_value(v)))),
    }
}

fn utf8(bytes: &[u8]) -> ConvertResult<String> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|_| ConvertError::InvalidUtf8(String::from_utf8_lossy(bytes).into_owned()))
}

pub fn value_to_json(value: &Value) -> ConvertResult<Json> {
    Ok(match value {
        Value::Int(i) => Json::from(*i),
        Value::Uint(u) => Json::from(*u),
        Value::Float(x) => Number::from_f64(*x)
            .map(Json::Number)
            .ok_or(ConvertError::NonFiniteFloat(*x))?,
        Value::String(s) => Json::String(utf8(s)?),
        Value::Object(obj) => {
            let mut map = Map::new();
            for (k, v) in obj {
                map.insert(utf8(k)?, value_to_json(v)?);
            }
            Json::Object(map)
        }
        Value::Array(items) => Json::Array(
            items
                .iter()
                .map(value_to_json)
                .collect::<ConvertResult<_>>()?,
        ),
        Value::Bool(b) => Json::Bool(*b),
        Value::Nil => Json::Null,
    })
}
