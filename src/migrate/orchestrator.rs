use std::path::Path;

use tracing::info;

use super::transcripts::{MigrationReport, TranscriptMigrator};
use crate::config::ClaudePaths;
use crate::errors::MigrationError;
use crate::history::{HistoryStore, RewriteSummary};
use crate::models::Session;

/// Result of a complete migration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationOutcome {
    pub history: RewriteSummary,
    pub transcripts: MigrationReport,
}

/// Moves a session from one project path to another: history first, transcripts second
#[derive(Debug, Clone)]
pub struct Migrator {
    history: HistoryStore,
    transcripts: TranscriptMigrator,
}

impl Migrator {
    pub fn new(history: HistoryStore, transcripts: TranscriptMigrator) -> Self {
        Self { history, transcripts }
    }

    pub fn from_paths(paths: &ClaudePaths) -> Self {
        Self::new(
            HistoryStore::new(&paths.history_file),
            TranscriptMigrator::new(&paths.projects_dir),
        )
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn transcripts(&self) -> &TranscriptMigrator {
        &self.transcripts
    }

    /// Repoint `session` from `old_path` to `new_path`.
    ///
    /// Paths that share a transcript directory are refused before anything is
    /// written. A history failure aborts before any transcript is touched. A transcript
    /// failure after a successful history rewrite is reported as
    /// [`MigrationError::Transcripts`]; nothing is rolled back, the history
    /// backup and the untouched original transcripts allow manual recovery.
    pub fn migrate_session(
        &self,
        session: &Session,
        old_path: &Path,
        new_path: &Path,
    ) -> Result<MigrationOutcome, MigrationError> {
        self.transcripts.ensure_distinct(old_path, new_path).map_err(MigrationError::Refused)?;

        let history = self
            .history
            .rewrite_project_path(&session.id, &new_path.to_string_lossy())
            .map_err(MigrationError::History)?;

        let transcripts = self
            .transcripts
            .migrate(session, old_path, new_path)
            .map_err(|source| MigrationError::Transcripts {
                backup: history.backup_file.clone(),
                source,
            })?;

        info!(
            session_id = %session.id,
            from = %old_path.display(),
            to = %new_path.display(),
            "session migrated"
        );
        Ok(MigrationOutcome { history, transcripts })
    }
}
