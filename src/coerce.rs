//! Field decoders that accept the loose JSON shapes clients send and turn
//! them into the column types PostgreSQL would coerce them to.

use serde::{de::Error as _, Deserialize, Deserializer};
use serde_json::Value;

/// Integer column: accepts a JSON number or a numeric string. `null`/missing is `None`.
pub fn int<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("integer out of range: {n}"))),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid integer: {s:?}"))),
        Some(other) => Err(D::Error::custom(format!("expected integer, got {other}"))),
    }
}

/// Text column: strings pass through, any other scalar or structure is stored as its JSON text.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
