//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for creating test .claude directory structures
pub struct ClaudeDirBuilder {
    temp_dir: TempDir,
}

impl ClaudeDirBuilder {
    /// Create a new builder with an empty .claude directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the .claude directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a history.jsonl file with the given content
    pub fn with_history(self, content: &str) -> Self {
        fs::write(self.temp_dir.path().join("history.jsonl"), content)
            .expect("Failed to write history.jsonl");
        self
    }

    /// Add history entries programmatically, one per line with a trailing newline
    pub fn with_history_entries(self, entries: &[HistoryEntryBuilder]) -> Self {
        let content: String = entries.iter().map(|e| format!("{}\n", e.to_json())).collect();
        self.with_history(&content)
    }

    /// Add a transcript file under the project directory of `encoded_name`
    pub fn with_transcript(self, encoded_name: &str, filename: &str, content: &str) -> Self {
        let project_dir = self.temp_dir.path().join("projects").join(encoded_name);
        fs::create_dir_all(&project_dir).expect("Failed to create project dir");
        fs::write(project_dir.join(filename), content).expect("Failed to write transcript");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ClaudeDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for history.jsonl entries
pub struct HistoryEntryBuilder {
    display: String,
    timestamp: i64,
    session_id: Option<String>,
    project: String,
}

impl HistoryEntryBuilder {
    /// Create a new history entry with default values
    pub fn new() -> Self {
        Self {
            display: "Test entry".to_string(),
            timestamp: 1234567890,
            session_id: Some("550e8400-e29b-41d4-a716-446655440000".to_string()),
            project: "/p1".to_string(),
        }
    }

    pub fn display(mut self, display: &str) -> Self {
        self.display = display.to_string();
        self
    }

    pub fn timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn session_id(mut self, session_id: &str) -> Self {
        self.session_id = Some(session_id.to_string());
        self
    }

    /// Entry written before session IDs existed
    pub fn without_session(mut self) -> Self {
        self.session_id = None;
        self
    }

    pub fn project(mut self, project: &str) -> Self {
        self.project = project.to_string();
        self
    }

    /// Convert to JSON string, field order as Claude writes it
    pub fn to_json(&self) -> String {
        let session_field = self
            .session_id
            .as_ref()
            .map(|id| format!(r#","sessionId":"{}""#, id))
            .unwrap_or_default();

        format!(
            r#"{{"display":"{}","pastedContents":{{}},"timestamp":{},"project":"{}"{}}}"#,
            self.display, self.timestamp, self.project, session_field
        )
    }
}

impl Default for HistoryEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Path of a transcript file in a test directory
pub fn transcript_path(claude_dir: &Path, encoded_name: &str, filename: &str) -> PathBuf {
    claude_dir.join("projects").join(encoded_name).join(filename)
}

pub fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).expect("Failed to read file")
}
