use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::app::Picker;
use super::rendering::render_picker;

/// Alternate screen owned by the picker for as long as it is open
pub struct PickerScreen {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl PickerScreen {
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e).context("Failed to enter alternate screen");
        }

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    pub fn draw(&mut self, picker: &Picker, title: &str) -> Result<()> {
        self.terminal.draw(|f| render_picker(f, picker, title))?;
        Ok(())
    }
}

// Runs on every exit path, panics and `?` returns included
impl Drop for PickerScreen {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
