use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;

use super::output;
use super::prompts::{confirm, prompt_line};
use super::resume::resume_command;
use crate::clipboard::copy_to_clipboard;
use crate::config::ClaudePaths;
use crate::indexer::find_sessions;
use crate::migrate::{MigrationOutcome, Migrator};
use crate::models::Session;
use crate::tui::timestamps::format_timestamp;
use crate::tui::{Selection, SessionSelector, TerminalSelector, format_session_options};
use crate::utils::{current_dir, format_path_with_tilde, normalize_path};

#[derive(Parser, Debug, Default)]
#[command(name = "session-mover")]
#[command(version)]
#[command(about = "Move a Claude session to a different project directory", long_about = None)]
pub struct Cli {
    /// Project path to find sessions in (default: current directory)
    #[arg(long, value_name = "PATH")]
    pub from: Option<String>,

    /// New project directory (skips the prompt)
    #[arg(long, value_name = "PATH")]
    pub to: Option<String>,

    /// Session ID to migrate (skips the picker)
    #[arg(long, value_name = "ID")]
    pub session: Option<String>,

    /// Answer yes to every confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Claude data directory (default: ~/.claude)
    #[arg(long, value_name = "DIR")]
    pub claude_dir: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let paths = match &cli.claude_dir {
        Some(dir) => ClaudePaths::from_claude_dir(dir),
        None => ClaudePaths::discover()?,
    };
    let stdin = io::stdin();
    let flow = MoveFlow {
        cwd: current_dir()?,
        home: dirs::home_dir(),
        offer_clipboard: stdin.is_terminal() && !cli.yes,
        paths,
        cli,
    };

    flow.execute(&mut TerminalSelector::default(), &mut stdin.lock(), &mut io::stdout())
}

/// One interactive migration run, with its inputs resolved up front
struct MoveFlow {
    cli: Cli,
    paths: ClaudePaths,
    cwd: PathBuf,
    home: Option<PathBuf>,
    offer_clipboard: bool,
}

impl MoveFlow {
    fn execute<R: BufRead, W: Write>(
        &self,
        selector: &mut dyn SessionSelector,
        input: &mut R,
        out: &mut W,
    ) -> Result<()> {
        output::banner(out)?;

        let mut project = match &self.cli.from {
            Some(from) => self.normalize(from),
            None => self.normalize(&self.cwd.to_string_lossy()),
        };
        output::info(out, &format!("Looking for sessions in: {}", project.display()))?;
        writeln!(out)?;

        let migrator = Migrator::from_paths(&self.paths);
        let records = migrator.history().load_all().context("Failed to load history")?;

        let sessions = find_sessions(&records, &project.to_string_lossy());
        if sessions.is_empty() {
            output::warn(out, &format!("No sessions found for path: {}", project.display()))?;
            return Ok(());
        }
        output::success(out, &format!("Found {} session(s)", sessions.len()))?;
        writeln!(out)?;

        let Some(session) = self.select(&sessions, selector)? else {
            output::info(out, "Cancelled")?;
            return Ok(());
        };

        output::section(out, "Session Details", &session_details(session, &project))?;

        let target = match &self.cli.to {
            Some(to) => to.trim().to_string(),
            None => prompt_line(
                input,
                out,
                "Enter NEW directory path (or press Enter to just get resume command)",
            )?,
        };

        if !target.is_empty() {
            let target = self.normalize(&target);
            writeln!(out)?;
            output::section(
                out,
                "Migration Plan",
                &[
                    format!("From: {}", format_path_with_tilde(&project)),
                    format!("  To: {}", format_path_with_tilde(&target)),
                ],
            )?;

            if !self.cli.yes && !confirm(input, out, "Migrate session to new directory?")? {
                output::info(out, "Cancelled")?;
                return Ok(());
            }

            output::info(out, "Migrating session...")?;
            let outcome = migrator
                .migrate_session(session, &project, &target)
                .context("Migration failed")?;
            output::success(out, "✓ Session migrated!")?;
            report_outcome(out, &outcome)?;

            project = target;
        }

        writeln!(out)?;
        let command = resume_command(&project, &session.id);
        output::section(
            out,
            "Resume Session",
            &["Run this:".to_string(), String::new(), format!("  {}", command)],
        )?;

        if self.offer_clipboard && confirm(input, out, "Copy command to clipboard?")? {
            match copy_to_clipboard(&command) {
                Ok(()) => output::success(out, "✓ Copied! Paste and run.")?,
                Err(e) => output::warn(out, &format!("Could not copy to clipboard: {:#}", e))?,
            }
        }

        Ok(())
    }

    fn normalize(&self, input: &str) -> PathBuf {
        normalize_path(input, &self.cwd, self.home.as_deref())
    }

    fn select<'s>(
        &self,
        sessions: &'s [Session],
        selector: &mut dyn SessionSelector,
    ) -> Result<Option<&'s Session>> {
        if let Some(id) = &self.cli.session {
            return match sessions.iter().find(|s| &s.id == id) {
                Some(session) => Ok(Some(session)),
                None => bail!("Session {} has no records for this project", id),
            };
        }

        match selector.select(&format_session_options(sessions))? {
            Selection::Chosen(index) => Ok(sessions.get(index)),
            Selection::Cancelled => Ok(None),
        }
    }
}

fn session_details(session: &Session, project: &Path) -> Vec<String> {
    vec![
        format!("ID:       {}", session.id),
        format!("Messages: {}", session.message_count),
        format!("Started:  {}", format_timestamp(session.first_timestamp)),
        format!("Last:     {}", format_timestamp(session.last_timestamp)),
        format!("Current:  {}", format_path_with_tilde(project)),
    ]
}

fn report_outcome(out: &mut impl Write, outcome: &MigrationOutcome) -> Result<()> {
    let transcripts = &outcome.transcripts;
    output::info(
        out,
        &format!(
            "Updated {} history record(s), backup at {}",
            outcome.history.updated_records,
            outcome.history.backup_file.display()
        ),
    )?;
    output::info(
        out,
        &format!(
            "Copied {} file(s) to {} ({} cwd line(s) rewritten)",
            transcripts.copied.len(),
            transcripts.target_dir.display(),
            transcripts.patched_lines
        ),
    )?;
    for skipped in &transcripts.skipped {
        output::warn(out, &format!("Skipped unreadable file: {}", skipped.display()))?;
    }
    Ok(())
}

/// Print a failed run's error with its cause chain
pub fn report_error(err: &anyhow::Error) {
    let _ = output::error(&mut io::stderr(), &format!("{:#}", err));
}
