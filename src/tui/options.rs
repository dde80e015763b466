//! Text shown for each session in the picker.

use super::timestamps::format_timestamp;
use crate::indexer::{first_messages, last_messages, truncate_chars};
use crate::models::Session;
use crate::utils::strip_ansi_codes;

/// Messages shown at each end of a session
const CONTEXT_MESSAGES: usize = 3;
/// Maximum characters of a joined context line
const CONTEXT_MAX_CHARS: usize = 150;
/// IDs longer than this are shortened to their first and last 8 characters
const SESSION_ID_MAX_CHARS: usize = 20;
const SESSION_ID_KEEP_CHARS: usize = 8;

/// Shorten long session IDs to `abcdefgh...stuvwxyz`
pub fn short_session_id(id: &str) -> String {
    let chars: Vec<char> = id.chars().collect();
    if chars.len() <= SESSION_ID_MAX_CHARS {
        return id.to_string();
    }
    let head: String = chars[..SESSION_ID_KEEP_CHARS].iter().collect();
    let tail: String = chars[chars.len() - SESSION_ID_KEEP_CHARS..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Join previews with arrows on a single sanitized line
fn context_line(messages: &[String]) -> String {
    let joined = messages
        .iter()
        .map(|m| strip_ansi_codes(m).split_whitespace().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join(" → ");
    truncate_chars(&joined, CONTEXT_MAX_CHARS)
}

/// Three-line picker entry for a session
///
/// ```text
/// [1] 550e8400...55440000 | 12 msgs | 2025-01-15 09:30 → 2025-01-15 11:02
///     Start: first prompt → second prompt → third prompt
///     Last:  ... → ... → latest prompt
/// ```
pub fn format_session_option(position: usize, session: &Session) -> String {
    format!(
        "[{}] {} | {} msgs | {} → {}\n    Start: {}\n    Last:  {}",
        position,
        short_session_id(&session.id),
        session.message_count,
        format_timestamp(session.first_timestamp),
        format_timestamp(session.last_timestamp),
        context_line(&first_messages(session, CONTEXT_MESSAGES)),
        context_line(&last_messages(session, CONTEXT_MESSAGES)),
    )
}

/// Picker entries for sessions, numbered from 1
pub fn format_session_options(sessions: &[Session]) -> Vec<String> {
    sessions.iter().enumerate().map(|(i, s)| format_session_option(i + 1, s)).collect()
}

#[cfg(test)]
mod tests {
    use serde_json::Map;

    use super::*;
    use crate::indexer::find_sessions;
    use crate::models::HistoryRecord;

    fn session(id: &str, displays: &[&str]) -> Session {
        let records: Vec<HistoryRecord> = displays
            .iter()
            .enumerate()
            .map(|(i, d)| HistoryRecord {
                display: d.to_string(),
                timestamp: 1_700_000_000_000 + i as i64 * 60_000,
                project: "/p".to_string(),
                session_id: Some(id.to_string()),
                extra: Map::new(),
            })
            .collect();
        find_sessions(&records, "/p").remove(0)
    }

    #[test]
    fn test_short_session_id() {
        assert_eq!(short_session_id("short-id"), "short-id");
        assert_eq!(short_session_id("12345678901234567890"), "12345678901234567890");
        assert_eq!(
            short_session_id("550e8400-e29b-41d4-a716-446655440000"),
            "550e8400...55440000"
        );
    }

    #[test]
    fn test_option_layout() {
        let s = session("A", &["one", "two", "three", "four", "five"]);
        let option = format_session_option(1, &s);
        let lines: Vec<&str> = option.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("[1] A | 5 msgs | "));
        assert_eq!(lines[1], "    Start: one → two → three");
        assert_eq!(lines[2], "    Last:  three → four → five");
    }

    #[test]
    fn test_context_is_single_sanitized_line() {
        let s = session("A", &["multi\nline   prompt", "\x1b[31mred\x1b[0m"]);
        let option = format_session_option(2, &s);
        let lines: Vec<&str> = option.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "    Start: multi line prompt → red");
    }

    #[test]
    fn test_context_truncated() {
        let long = "w".repeat(70);
        let s = session("A", &[&long, &long, &long]);
        let option = format_session_option(1, &s);
        let start = option.lines().nth(1).unwrap().trim_start_matches("    Start: ");

        assert_eq!(start.chars().count(), CONTEXT_MAX_CHARS);
        assert!(start.ends_with("..."));
    }

    #[test]
    fn test_options_numbered_from_one() {
        let sessions = vec![session("A", &["a"]), session("B", &["b"])];
        let options = format_session_options(&sessions);
        assert!(options[0].starts_with("[1] A"));
        assert!(options[1].starts_with("[2] B"));
    }
}
