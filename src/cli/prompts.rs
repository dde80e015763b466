use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use crossterm::style::Stylize;

/// Ask for a line of input; returns it trimmed, empty on end of input
pub fn prompt_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<String> {
    write!(out, "{} ", format!("{}:", label).cyan())?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read input")?;
    Ok(line.trim().to_string())
}

/// Yes/no question; an empty answer means yes
pub fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<bool> {
    let answer = prompt_line(input, out, &format!("{} [Y/n]", question))?;
    Ok(matches!(answer.to_lowercase().as_str(), "" | "y" | "yes"))
}
