use std::collections::HashMap;

use crate::models::{HistoryRecord, Session};

/// Maximum characters of a single message preview
const PREVIEW_MAX_CHARS: usize = 80;

/// Group history records of one project into sessions
///
/// Only records whose `project` equals `project_path` exactly are considered;
/// callers normalize the path beforehand. Records without a session ID are
/// ignored.
///
/// # Returns
///
/// Sessions ordered by last activity, newest first. Sessions with the same
/// last timestamp keep the order in which they first appear in the log.
///
/// # Examples
///
/// ```
/// use session_mover::indexer::find_sessions;
/// use session_mover::models::HistoryRecord;
///
/// let records: Vec<HistoryRecord> = [
///     r#"{"display":"hi","timestamp":100,"project":"/p1","sessionId":"A"}"#,
///     r#"{"display":"bye","timestamp":200,"project":"/p1","sessionId":"A"}"#,
/// ]
/// .iter()
/// .map(|line| serde_json::from_str(line).unwrap())
/// .collect();
///
/// let sessions = find_sessions(&records, "/p1");
/// assert_eq!(sessions.len(), 1);
/// assert_eq!(sessions[0].message_count, 2);
/// assert_eq!(sessions[0].first_display, "hi");
/// assert_eq!(sessions[0].last_display, "bye");
/// ```
pub fn find_sessions(records: &[HistoryRecord], project_path: &str) -> Vec<Session> {
    let mut sessions: Vec<Session> = Vec::new();
    let mut by_id: HashMap<&str, usize> = HashMap::new();

    for record in records.iter().filter(|r| r.project == project_path) {
        let Some(session_id) = record.session_id.as_deref() else {
            continue;
        };

        match by_id.get(session_id) {
            Some(&idx) => sessions[idx].push(record.clone()),
            None => {
                by_id.insert(session_id, sessions.len());
                sessions.push(Session::from_record(session_id.to_string(), record.clone()));
            }
        }
    }

    // Stable sort keeps discovery order for equal timestamps
    sessions.sort_by(|a, b| b.last_timestamp.cmp(&a.last_timestamp));
    sessions
}

/// Records of a session in chronological order, ties in log order
fn chronological(session: &Session) -> Vec<&HistoryRecord> {
    let mut sorted: Vec<&HistoryRecord> = session.records.iter().collect();
    sorted.sort_by_key(|r| r.timestamp);
    sorted
}

/// Previews of the `count` earliest messages, oldest first
pub fn first_messages(session: &Session, count: usize) -> Vec<String> {
    chronological(session).into_iter().take(count).filter_map(preview).collect()
}

/// Previews of the `count` latest messages, oldest first
pub fn last_messages(session: &Session, count: usize) -> Vec<String> {
    let sorted = chronological(session);
    let skip = sorted.len().saturating_sub(count);
    sorted.into_iter().skip(skip).filter_map(preview).collect()
}

/// Trimmed, truncated display text; `None` when there is nothing to show
fn preview(record: &HistoryRecord) -> Option<String> {
    let text = record.display.trim();
    if text.is_empty() { None } else { Some(truncate_chars(text, PREVIEW_MAX_CHARS)) }
}

/// Truncate to `max` characters, ending with `...` when shortened
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str("...");
    truncated
}
