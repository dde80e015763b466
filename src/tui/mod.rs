//! Interactive session picker.
//!
//! Selection is a contract from a list of option strings to a [`Selection`].
//! [`SessionSelector`] is the seam: [`TerminalSelector`] drives the pure
//! [`Picker`] state machine with crossterm key events and renders it with
//! ratatui, while tests plug in scripted selectors.

mod app;
mod events;
mod layout;
pub mod options;
mod rendering;
mod terminal;
pub mod timestamps;

use std::io::{self, IsTerminal};

use anyhow::{Result, bail};
pub use app::Picker;
pub use events::Action;
pub use options::{format_session_option, format_session_options};
use terminal::PickerScreen;

/// Outcome of a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Index into the offered options
    Chosen(usize),
    Cancelled,
}

pub trait SessionSelector {
    fn select(&mut self, options: &[String]) -> Result<Selection>;
}

/// Full-screen picker on the controlling terminal
pub struct TerminalSelector {
    title: String,
}

impl TerminalSelector {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }
}

impl Default for TerminalSelector {
    fn default() -> Self {
        Self::new("Select session to migrate")
    }
}

impl SessionSelector for TerminalSelector {
    fn select(&mut self, options: &[String]) -> Result<Selection> {
        if options.is_empty() {
            return Ok(Selection::Cancelled);
        }
        if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
            bail!("Interactive selection needs a terminal; pass --session <ID> instead");
        }

        let mut picker = Picker::new(options.to_vec());
        let mut screen = PickerScreen::enter()?;

        loop {
            screen.draw(&picker, &self.title)?;
            let action = events::read_action()?;
            if let Some(selection) = picker.handle(action) {
                return Ok(selection);
            }
        }
    }
}

/// Feeds a fixed list of actions to the picker, for tests and scripted runs
pub struct ScriptedSelector {
    actions: Vec<Action>,
}

impl ScriptedSelector {
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }
}

impl SessionSelector for ScriptedSelector {
    fn select(&mut self, options: &[String]) -> Result<Selection> {
        let mut picker = Picker::new(options.to_vec());
        for action in self.actions.drain(..) {
            if let Some(selection) = picker.handle(action) {
                return Ok(selection);
            }
        }
        Ok(Selection::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec!["[1] a".to_string(), "[2] b".to_string()]
    }

    #[test]
    fn test_scripted_selection() {
        let mut selector = ScriptedSelector::new(vec![Action::MoveDown, Action::Confirm]);
        assert_eq!(selector.select(&options()).unwrap(), Selection::Chosen(1));
    }

    #[test]
    fn test_scripted_runs_out_of_input() {
        let mut selector = ScriptedSelector::new(vec![Action::MoveDown]);
        assert_eq!(selector.select(&options()).unwrap(), Selection::Cancelled);
    }

    #[test]
    fn test_terminal_selector_empty_options_cancels_without_terminal() {
        let mut selector = TerminalSelector::default();
        assert_eq!(selector.select(&[]).unwrap(), Selection::Cancelled);
    }
}
