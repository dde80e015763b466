use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One line of `history.jsonl`.
///
/// Only the recognized fields are typed. Every other key (e.g. `pastedContents`)
/// lands in [`HistoryRecord::extra`] and is written back in its original order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    #[serde(default)]
    pub display: String,
    /// Epoch milliseconds; 0 when the line has none
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_timestamp_millis"
    )]
    pub timestamp: i64,
    #[serde(default)]
    pub project: String,
    #[serde(
        rename = "sessionId",
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_session_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub session_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HistoryRecord {
    /// True if this record belongs to the given session
    pub fn is_session(&self, session_id: &str) -> bool {
        self.session_id.as_deref() == Some(session_id)
    }
}
