use super::HistoryRecord;

/// A conversation grouped from history records sharing one `sessionId`.
///
/// Sessions are a view over the metadata log and are never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: String,
    pub message_count: usize,
    pub first_timestamp: i64,
    pub first_display: String,
    pub last_timestamp: i64,
    pub last_display: String,
    /// Contributing records in the order they appear in the log
    pub records: Vec<HistoryRecord>,
}

impl Session {
    /// Start a session from its first discovered record
    pub fn from_record(id: String, record: HistoryRecord) -> Self {
        Self {
            id,
            message_count: 1,
            first_timestamp: record.timestamp,
            first_display: record.display.clone(),
            last_timestamp: record.timestamp,
            last_display: record.display.clone(),
            records: vec![record],
        }
    }

    /// Add a record, widening the timestamp bounds.
    ///
    /// Ties keep the earlier-discovered record as the bound.
    pub fn push(&mut self, record: HistoryRecord) {
        if record.timestamp > self.last_timestamp {
            self.last_timestamp = record.timestamp;
            self.last_display = record.display.clone();
        }
        if record.timestamp < self.first_timestamp {
            self.first_timestamp = record.timestamp;
            self.first_display = record.display.clone();
        }
        self.message_count += 1;
        self.records.push(record);
    }
}
