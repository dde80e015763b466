use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::errors::TranscriptError;
use crate::models::Session;
use crate::parsers::rewrite_transcript;
use crate::utils::encode_path;

const TRANSCRIPT_EXTENSION: &str = ".jsonl";
const AGENT_PREFIX: &str = "agent-";

/// What a transcript copy did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub source_dir: PathBuf,
    pub target_dir: PathBuf,
    /// Files written under the target directory
    pub copied: Vec<PathBuf>,
    /// Source files that could not be read
    pub skipped: Vec<PathBuf>,
    /// Lines whose `cwd` was rewritten, across all files
    pub patched_lines: usize,
}

/// Copies a session's transcript files to the directory of a new project path
#[derive(Debug, Clone)]
pub struct TranscriptMigrator {
    projects_dir: PathBuf,
}

impl TranscriptMigrator {
    pub fn new(projects_dir: impl Into<PathBuf>) -> Self {
        Self { projects_dir: projects_dir.into() }
    }

    /// Transcript directory for a project path
    pub fn project_dir(&self, project_path: &Path) -> PathBuf {
        self.projects_dir.join(encode_path(project_path))
    }

    /// Fails with [`TranscriptError::SameDirectory`] when both paths encode to one directory
    pub fn ensure_distinct(&self, old_path: &Path, new_path: &Path) -> Result<(), TranscriptError> {
        if encode_path(old_path) == encode_path(new_path) {
            return Err(TranscriptError::SameDirectory(self.project_dir(old_path)));
        }
        Ok(())
    }

    /// Copy the session's transcripts from `old_path`'s directory to `new_path`'s.
    ///
    /// Files named `<session id>*.jsonl` are copied together with every
    /// `agent-*.jsonl` file of the old project, since agent files carry no
    /// link to the session that spawned them. Each top-level `cwd` is set to
    /// `new_path`. Source files are never modified.
    ///
    /// # Errors
    ///
    /// - [`TranscriptError::SourceNotFound`] if the old directory is missing (nothing written)
    /// - [`TranscriptError::SameDirectory`] if both paths encode to the same directory
    /// - [`TranscriptError::NoFiles`] if no candidate exists; the new directory
    ///   has already been created at that point and is left in place
    /// - [`TranscriptError::Write`] on the first file that cannot be written;
    ///   files copied before it stay in place
    ///
    /// Source files that cannot be read are skipped and listed in the report.
    pub fn migrate(
        &self,
        session: &Session,
        old_path: &Path,
        new_path: &Path,
    ) -> Result<MigrationReport, TranscriptError> {
        self.ensure_distinct(old_path, new_path)?;
        let source_dir = self.project_dir(old_path);
        let target_dir = self.project_dir(new_path);

        if !source_dir.is_dir() {
            return Err(TranscriptError::SourceNotFound(source_dir));
        }

        fs::create_dir_all(&target_dir)
            .map_err(|source| TranscriptError::CreateDir { path: target_dir.clone(), source })?;

        let candidates = discover_transcripts(&source_dir, &session.id)?;
        if candidates.is_empty() {
            return Err(TranscriptError::NoFiles { session_id: session.id.clone(), dir: source_dir });
        }

        let new_cwd = new_path.to_string_lossy();
        let mut report = MigrationReport {
            source_dir: source_dir.clone(),
            target_dir: target_dir.clone(),
            ..MigrationReport::default()
        };

        for src in candidates {
            let content = match fs::read(&src) {
                Ok(content) => content,
                Err(e) => {
                    warn!(file = %src.display(), error = %e, "skipping unreadable transcript");
                    report.skipped.push(src);
                    continue;
                }
            };

            let Some(file_name) = src.file_name() else {
                continue;
            };
            let dst = target_dir.join(file_name);

            let rewritten = rewrite_transcript(&content, &new_cwd);
            fs::write(&dst, &rewritten.content)
                .map_err(|source| TranscriptError::Write { path: dst.clone(), source })?;

            debug!(file = %dst.display(), patched = rewritten.patched_lines, "copied transcript");
            report.patched_lines += rewritten.patched_lines;
            report.copied.push(dst);
        }

        info!(
            session_id = %session.id,
            copied = report.copied.len(),
            skipped = report.skipped.len(),
            target = %target_dir.display(),
            "transcripts migrated"
        );
        Ok(report)
    }
}

/// Session files first, then agent files, each in file name order
pub fn discover_transcripts(dir: &Path, session_id: &str) -> Result<Vec<PathBuf>, TranscriptError> {
    let mut session_files = Vec::new();
    let mut agent_files = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry =
            entry.map_err(|source| TranscriptError::ListDir { path: dir.to_path_buf(), source })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if !name.ends_with(TRANSCRIPT_EXTENSION) {
            continue;
        }

        if name.starts_with(session_id) {
            session_files.push(path.to_path_buf());
        } else if name.starts_with(AGENT_PREFIX) {
            agent_files.push(path.to_path_buf());
        }
    }

    session_files.extend(agent_files);
    Ok(session_files)
}

#[cfg(test)]
mod tests {
    use serde_json::Map;
    use tempfile::TempDir;

    use super::*;
    use crate::models::HistoryRecord;

    fn session(id: &str) -> Session {
        let record = HistoryRecord {
            display: "hi".to_string(),
            timestamp: 1,
            project: "/p1".to_string(),
            session_id: Some(id.to_string()),
            extra: Map::new(),
        };
        Session::from_record(id.to_string(), record)
    }

    fn setup(files: &[(&str, &str)]) -> (TempDir, TranscriptMigrator, PathBuf) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let projects = dir.path().join("projects");
        let old_dir = projects.join("-p1");
        fs::create_dir_all(&old_dir).unwrap();
        for (name, content) in files {
            fs::write(old_dir.join(name), content).unwrap();
        }
        (dir, TranscriptMigrator::new(projects), old_dir)
    }

    #[test]
    fn test_migrate_rewrites_cwd_and_keeps_original() {
        let (dir, migrator, old_dir) = setup(&[("A-x.jsonl", "{\"cwd\":\"/p1\",\"msg\":\"hi\"}\n")]);

        let report = migrator.migrate(&session("A"), Path::new("/p1"), Path::new("/p2")).unwrap();
        assert_eq!(report.copied.len(), 1);
        assert_eq!(report.patched_lines, 1);

        let new_file = dir.path().join("projects/-p2/A-x.jsonl");
        assert_eq!(fs::read_to_string(new_file).unwrap(), "{\"cwd\":\"/p2\",\"msg\":\"hi\"}\n");
        assert_eq!(
            fs::read_to_string(old_dir.join("A-x.jsonl")).unwrap(),
            "{\"cwd\":\"/p1\",\"msg\":\"hi\"}\n"
        );
    }

    #[test]
    fn test_migrate_copies_agent_files_unconditionally() {
        let (dir, migrator, _) = setup(&[
            ("A.jsonl", "{\"cwd\":\"/p1\"}"),
            ("agent-1.jsonl", "{\"cwd\":\"/p1\",\"agentId\":\"1\"}"),
            ("agent-2.jsonl", "{\"type\":\"summary\"}"),
            ("B.jsonl", "{\"cwd\":\"/p1\"}"),
            ("A-notes.txt", "ignored"),
        ]);

        let report = migrator.migrate(&session("A"), Path::new("/p1"), Path::new("/p2")).unwrap();
        let names: Vec<String> = report
            .copied
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["A.jsonl", "agent-1.jsonl", "agent-2.jsonl"]);
        assert!(!dir.path().join("projects/-p2/B.jsonl").exists());
        assert_eq!(
            fs::read_to_string(dir.path().join("projects/-p2/agent-2.jsonl")).unwrap(),
            "{\"type\":\"summary\"}"
        );
    }

    #[test]
    fn test_migrate_source_missing_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let projects = dir.path().join("projects");
        let migrator = TranscriptMigrator::new(&projects);

        let err = migrator.migrate(&session("A"), Path::new("/p1"), Path::new("/p2")).unwrap_err();
        assert!(matches!(err, TranscriptError::SourceNotFound(_)));
        assert!(err.is_not_found());
        assert!(!projects.exists());
    }

    #[test]
    fn test_migrate_no_files_leaves_created_dir() {
        let (dir, migrator, _) = setup(&[("B.jsonl", "{}")]);

        let err = migrator.migrate(&session("A"), Path::new("/p1"), Path::new("/p2")).unwrap_err();
        assert!(matches!(err, TranscriptError::NoFiles { .. }));
        assert!(dir.path().join("projects/-p2").is_dir());
    }

    #[test]
    fn test_migrate_same_directory_rejected() {
        let (_dir, migrator, _) = setup(&[("A.jsonl", "{}")]);

        let err = migrator.migrate(&session("A"), Path::new("/p1"), Path::new("/p1")).unwrap_err();
        assert!(matches!(err, TranscriptError::SameDirectory(_)));
    }

    #[test]
    fn test_migrate_colliding_paths_rejected() {
        let dir = TempDir::new().unwrap();
        let projects = dir.path().join("projects");
        fs::create_dir_all(projects.join("-p-1")).unwrap();
        let migrator = TranscriptMigrator::new(&projects);

        // `/p/1` and `/p.1` encode to the same directory name
        let err = migrator.migrate(&session("A"), Path::new("/p/1"), Path::new("/p.1")).unwrap_err();
        assert!(matches!(err, TranscriptError::SameDirectory(_)));
    }

    #[test]
    fn test_migrate_is_rerunnable() {
        let (dir, migrator, _) = setup(&[("A.jsonl", "{\"cwd\":\"/p1\"}\n")]);

        migrator.migrate(&session("A"), Path::new("/p1"), Path::new("/p2")).unwrap();
        migrator.migrate(&session("A"), Path::new("/p1"), Path::new("/p2")).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("projects/-p2/A.jsonl")).unwrap(),
            "{\"cwd\":\"/p2\"}\n"
        );
    }

    #[test]
    fn test_migrate_write_failure_is_fatal() {
        let (dir, migrator, _) = setup(&[("A.jsonl", "{}"), ("agent-1.jsonl", "{}")]);
        // A directory in place of the destination file blocks the write
        fs::create_dir_all(dir.path().join("projects/-p2/A.jsonl")).unwrap();

        let err = migrator.migrate(&session("A"), Path::new("/p1"), Path::new("/p2")).unwrap_err();
        assert!(matches!(err, TranscriptError::Write { .. }));
        assert!(!dir.path().join("projects/-p2/agent-1.jsonl").exists());
    }

    #[test]
    fn test_discover_skips_directories() {
        let (_dir, _, old_dir) = setup(&[("A.jsonl", "{}")]);
        fs::create_dir(old_dir.join("A-sub.jsonl")).unwrap();

        let found = discover_transcripts(&old_dir, "A").unwrap();
        assert_eq!(found.len(), 1);
    }
}
