//! Lenient field decoders for request forms.
//!
//! Clients send loosely typed JSON (numbers as titles, numeric tags, ...).
//! Scalars are coerced to text, composite values are rejected unless the
//! field is a tag list.

use serde::de::{Deserializer, Error};
use serde::Deserialize;
use serde_json::Value;

/// Text form of a JSON value: strings as-is, numbers in decimal,
/// `true` as `"1"` and `false` or null as the empty string, anything else as compact JSON.
pub(crate) fn stringify(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => String::new(),
        other => other.to_string(),
    }
}

fn scalar_to_string<E: Error>(value: Value) -> Result<String, E> {
    match value {
        Value::Array(_) | Value::Object(_) => Err(E::custom("expected a string")),
        other => Ok(stringify(other)),
    }
}

pub(crate) fn scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    scalar_to_string(Value::deserialize(deserializer)?)
}

pub(crate) fn optional_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        other => scalar_to_string(other).map(Some),
    }
}

/// A list keeps its order, an object contributes its values, a scalar becomes a one-element list.
pub(crate) fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags = match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().map(stringify).collect(),
        Value::Object(map) => map.into_iter().map(|(_, v)| stringify(v)).collect(),
        Value::Null => vec![],
        other => vec![stringify(other)],
    };

    Ok(tags)
}
