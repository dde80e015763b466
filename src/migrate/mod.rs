//! Session migration between project paths.
//!
//! # Failure Model
//!
//! Migration runs two steps in order and never rolls back:
//!
//! 1. **History rewrite** via [`HistoryStore`](crate::history::HistoryStore). A
//!    backup of `history.jsonl` is written first. Failure here leaves every
//!    transcript file untouched.
//! 2. **Transcript copy** via [`TranscriptMigrator`]. Files are copied, never
//!    moved, so re-running a migration is safe. Failure here leaves
//!    `history.jsonl` pointing at the new path while the transcripts are only
//!    partly copied; [`MigrationError::Transcripts`](crate::errors::MigrationError)
//!    names the backup to restore from.

pub mod orchestrator;
pub mod transcripts;

pub use orchestrator::{MigrationOutcome, Migrator};
pub use transcripts::{MigrationReport, TranscriptMigrator, discover_transcripts};
