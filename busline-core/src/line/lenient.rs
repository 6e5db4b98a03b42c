//! serde helpers for AMap payloads, which are loosely typed: numbers may arrive
//! as strings or numbers, and empty values are sent as `[]` instead of `""`.
use itertools::Itertools;
use serde::{de::Error, Deserialize, Deserializer};
use serde_json::Value;

/// reads strings, numbers, booleans, null and arrays of those as a String.
/// null and `[]` become the empty string.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    value_to_string(&value).map_err(D::Error::custom)
}

/// as [`string`], but empty values become None.
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let s = value_to_string(&value).map_err(D::Error::custom)?;
    if s.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(s))
    }
}

fn value_to_string(value: &Value) -> Result<String, String> {
    match value {
        Value::Null => Ok(String::new()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => Ok(s.clone()),
        Value::Array(values) => {
            let parts = values
                .iter()
                .map(value_to_string)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(parts.into_iter().filter(|s| !s.is_empty()).join(";"))
        }
        Value::Object(_) => Err(format!("expected a string-like value, found {value}")),
    }
}
