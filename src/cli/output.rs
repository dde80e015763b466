//! Operator-facing output: colored status lines and titled sections.

use std::io::{self, Write};

use crossterm::style::Stylize;

pub fn banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "╔══════════════════════════════════════════╗".cyan())?;
    writeln!(out, "{}", "║   Session Mover                          ║".cyan())?;
    writeln!(out, "{}", "╚══════════════════════════════════════════╝".cyan())?;
    writeln!(out)
}

pub fn info(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{} {}", "ℹ".blue(), message)
}

pub fn success(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message.green())
}

pub fn warn(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{} {}", "⚠".yellow(), message.yellow())
}

pub fn error(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{} {}", "✗".red(), message.red())
}

/// Title followed by indented body lines
pub fn section(out: &mut impl Write, title: &str, lines: &[String]) -> io::Result<()> {
    writeln!(out, "{}", format!("── {} ──", title).bold().cyan())?;
    for line in lines {
        writeln!(out, "  {}", line)?;
    }
    writeln!(out)
}
