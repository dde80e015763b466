use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::errors::HistoryError;
use crate::models::HistoryRecord;

/// Parse one history line, returning `None` for blank or malformed lines
pub fn parse_history_line(line: &[u8]) -> Option<HistoryRecord> {
    if super::lines::is_blank(line) {
        return None;
    }
    serde_json::from_slice::<HistoryRecord>(line).ok()
}

/// Parse history.jsonl file and return all records
///
/// Lines that do not have the expected shape are skipped without being reported:
/// other tools append records to the same log and those must not break loading.
pub fn parse_history_file(path: &Path) -> Result<Vec<HistoryRecord>, HistoryError> {
    let file = File::open(path).map_err(|e| HistoryError::from_read(path.to_path_buf(), e))?;

    let mut reader = BufReader::new(file);
    let mut records = Vec::new();
    let mut skipped_count = 0;
    let mut line = Vec::new();
    let mut line_num = 0;

    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .map_err(|e| HistoryError::from_read(path.to_path_buf(), e))?;
        if read == 0 {
            break;
        }
        line_num += 1;

        let trimmed = line.strip_suffix(b"\n").unwrap_or(&line);
        let trimmed = trimmed.strip_suffix(b"\r").unwrap_or(trimmed);
        if super::lines::is_blank(trimmed) {
            continue;
        }

        match parse_history_line(trimmed) {
            Some(record) => records.push(record),
            None => {
                debug!(line = line_num, path = %path.display(), "skipping unrecognized history line");
                skipped_count += 1;
            }
        }
    }

    debug!(records = records.len(), skipped = skipped_count, "loaded history file");
    Ok(records)
}
