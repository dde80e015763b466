use tracing::warn;

use crate::parsers::lines::{join_lines, split_lines};
use crate::parsers::parse_history_line;

/// Rewritten log content and how many records were repointed
#[derive(Debug, PartialEq, Eq)]
pub struct RewrittenHistory {
    pub content: Vec<u8>,
    pub updated_records: usize,
}

/// Set `project` to `new_path` on every record of `session_id`.
///
/// Only matching records are re-serialized. Every other line, including blank
/// lines and lines that do not parse, is kept byte-for-byte.
pub fn rewrite_history(content: &[u8], session_id: &str, new_path: &str) -> RewrittenHistory {
    let split = split_lines(content);
    let mut updated_records = 0;

    let lines: Vec<Vec<u8>> = split
        .lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            let Some(mut record) = parse_history_line(line).filter(|r| r.is_session(session_id))
            else {
                return line.to_vec();
            };

            record.project = new_path.to_string();
            match serde_json::to_vec(&record) {
                Ok(updated) => {
                    updated_records += 1;
                    updated
                }
                Err(e) => {
                    warn!(line = idx + 1, error = %e, "keeping history line that failed to serialize");
                    line.to_vec()
                }
            }
        })
        .collect();

    RewrittenHistory { content: join_lines(&lines, split.trailing_newline), updated_records }
}
