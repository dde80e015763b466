use chrono::{DateTime, Utc};
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Custom deserializer for timestamp that accepts both integers (ms) and RFC3339 strings
///
/// The result is always epoch milliseconds. `null` reads as 0, the same as an absent field.
pub fn deserialize_timestamp_millis<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Number(n) => n.as_i64().ok_or_else(|| Error::custom("invalid timestamp")),
        Value::String(s) => s
            .parse::<DateTime<Utc>>()
            .map(|dt| dt.timestamp_millis())
            .map_err(|e| Error::custom(format!("invalid RFC3339 timestamp: {}", e))),
        Value::Null => Ok(0),
        _ => Err(Error::custom("timestamp must be a number or string")),
    }
}

/// Custom deserializer for session IDs
///
/// Session IDs are opaque. A missing, null or empty ID means the record has no session.
pub fn deserialize_session_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = Option::<String>::deserialize(deserializer)?;
    Ok(id.filter(|s| !s.is_empty()))
}
