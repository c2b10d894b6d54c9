//! Lenient field deserializers.
//!
//! The provider is loose about JSON types: ids arrive as numbers on one
//! endpoint and strings on the next, lists arrive bare or wrapped in a
//! single-key object (`{"product": [...]}`), and absent values arrive as
//! `null`. These adapters absorb those differences so that binding a
//! payload never fails. Use them with `deserialize_with` on fields of a
//! `#[serde(default)]` struct.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::binding::FromPayload;

/// A string; numbers and booleans are rendered, anything else is empty.
pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(scalar_to_string(&Value::deserialize(deserializer)?).unwrap_or_default())
}

/// An optional string; `null` and non-scalars become `None`.
pub fn opt_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(scalar_to_string(&Value::deserialize(deserializer)?))
}

/// An integer from a number or a numeric string, otherwise `0`.
pub fn integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(to_integer(&Value::deserialize(deserializer)?).unwrap_or_default())
}

/// An optional integer; unparseable values become `None`.
pub fn opt_integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Ok(to_integer(&Value::deserialize(deserializer)?))
}

/// A boolean from `true`/`false`, `"true"`/`"false"` or `1`/`0`.
pub fn boolean<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::String(s) => s.trim().eq_ignore_ascii_case("true") || s.trim() == "1",
        Value::Number(n) => n.as_i64().is_some_and(|n| n != 0),
        _ => false,
    })
}

/// A list of strings; accepts a bare array, a single-array wrapper object
/// or a single string.
pub fn string_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match unwrap_list(&value) {
        Some(items) => items.iter().filter_map(scalar_to_string).collect(),
        None => scalar_to_string(&value)
            .filter(|s| !s.is_empty())
            .into_iter()
            .collect(),
    })
}

/// A nested record; anything but an object yields the default.
pub fn nested<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(T::from_payload(&Value::deserialize(deserializer)?))
}

/// An optional nested record; anything but an object yields `None`.
pub fn opt_nested<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.is_object().then(|| T::from_payload(&value)))
}

/// A list of records; accepts a bare array or a single-array wrapper
/// object, anything else yields an empty list.
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(unwrap_list(&value)
        .map(|items| items.iter().map(T::from_payload).collect())
        .unwrap_or_default())
}

/// Returns the items of a bare array, or of the only array inside a
/// single-key wrapper object.
pub(crate) fn unwrap_list(value: &Value) -> Option<&Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(map) if map.len() == 1 => map.values().next().and_then(Value::as_array),
        _ => None,
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn to_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f as i64))
        }
        _ => None,
    }
}
