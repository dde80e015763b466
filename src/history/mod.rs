//! Access to `history.jsonl`, the append-only metadata log.
//!
//! Loading is tolerant of foreign record shapes (see [`crate::parsers`]).
//! Rewriting always snapshots the current log to `history.jsonl.backup`
//! before the new content is written. The backup is overwritten on every
//! rewrite; it is a recovery copy of the latest run, not a version history.

pub mod rewrite;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

pub use rewrite::{RewrittenHistory, rewrite_history};

use crate::config::backup_path;
use crate::errors::HistoryError;
use crate::models::HistoryRecord;
use crate::parsers::parse_history_file;

/// Outcome of [`HistoryStore::rewrite_project_path`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteSummary {
    pub updated_records: usize,
    pub backup_file: PathBuf,
}

#[derive(Debug, Clone)]
pub struct HistoryStore {
    history_file: PathBuf,
    backup_file: PathBuf,
}

impl HistoryStore {
    pub fn new(history_file: impl Into<PathBuf>) -> Self {
        let history_file = history_file.into();
        let backup_file = backup_path(&history_file);
        Self { history_file, backup_file }
    }

    pub fn history_file(&self) -> &Path {
        &self.history_file
    }

    pub fn backup_file(&self) -> &Path {
        &self.backup_file
    }

    /// Load every record that parses; other lines are skipped
    pub fn load_all(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        parse_history_file(&self.history_file)
    }

    /// Point every record of `session_id` at `new_path`.
    ///
    /// The pre-rewrite bytes are written to the backup file first. If the backup
    /// cannot be written the live log is left untouched. If the final write
    /// fails the backup remains as recovery material.
    pub fn rewrite_project_path(
        &self,
        session_id: &str,
        new_path: &str,
    ) -> Result<RewriteSummary, HistoryError> {
        let original = fs::read(&self.history_file)
            .map_err(|e| HistoryError::from_read(self.history_file.clone(), e))?;

        let rewritten = rewrite_history(&original, session_id, new_path);
        debug!(
            session_id,
            updated = rewritten.updated_records,
            "prepared history rewrite"
        );

        fs::write(&self.backup_file, &original)
            .map_err(|source| HistoryError::Backup { path: self.backup_file.clone(), source })?;

        fs::write(&self.history_file, &rewritten.content)
            .map_err(|source| HistoryError::Write { path: self.history_file.clone(), source })?;

        info!(
            session_id,
            new_path,
            updated = rewritten.updated_records,
            backup = %self.backup_file.display(),
            "history rewritten"
        );

        Ok(RewriteSummary {
            updated_records: rewritten.updated_records,
            backup_file: self.backup_file.clone(),
        })
    }
}
