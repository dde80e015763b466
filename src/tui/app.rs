//! Picker state and key handling.
//!
//! [`Picker`] is a pure state machine: it owns the option strings, the fuzzy
//! query and the cursor, and turns [`Action`]s into an eventual
//! [`Selection`]. It never touches the terminal, so the selection contract is
//! tested headless; the terminal adapter in [`super`] only feeds it key
//! presses and renders it.
//!
//! Typing narrows the list with nucleo's fuzzy pattern matcher. Matching
//! options keep their original order (most recently active session first)
//! rather than being re-ranked by score.

use nucleo::pattern::{CaseMatching, Normalization, Pattern};
use nucleo::{Config, Matcher, Utf32Str};

use super::Selection;
use super::events::Action;

/// Options skipped by PageUp/PageDown
const PAGE_SIZE: isize = 5;
/// Longest accepted filter query
const MAX_QUERY_CHARS: usize = 256;

pub struct Picker {
    options: Vec<String>,
    query: String,
    /// Indices into `options` that match the query, in option order
    visible: Vec<usize>,
    cursor: usize,
    matcher: Matcher,
}

impl Picker {
    pub fn new(options: Vec<String>) -> Self {
        let visible = (0..options.len()).collect();
        Self {
            options,
            query: String::new(),
            visible,
            cursor: 0,
            matcher: Matcher::new(Config::DEFAULT),
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    /// Position of the highlighted option within [`Picker::visible`]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Apply one action; returns the outcome once the operator has decided
    pub fn handle(&mut self, action: Action) -> Option<Selection> {
        match action {
            Action::Quit => return Some(Selection::Cancelled),
            Action::ClearOrCancel => {
                if self.query.is_empty() {
                    return Some(Selection::Cancelled);
                }
                self.query.clear();
                self.refilter();
            }
            Action::MoveUp => self.move_cursor(-1),
            Action::MoveDown => self.move_cursor(1),
            Action::PageUp => self.move_cursor(-PAGE_SIZE),
            Action::PageDown => self.move_cursor(PAGE_SIZE),
            Action::Confirm => {
                if let Some(&idx) = self.visible.get(self.cursor) {
                    return Some(Selection::Chosen(idx));
                }
            }
            Action::UpdateQuery(c) => {
                if self.query.chars().count() < MAX_QUERY_CHARS {
                    self.query.push(c);
                    self.refilter();
                }
            }
            Action::DeleteChar => {
                if self.query.pop().is_some() {
                    self.refilter();
                }
            }
            Action::None => {}
        }
        None
    }

    fn move_cursor(&mut self, delta: isize) {
        if self.visible.is_empty() {
            self.cursor = 0;
            return;
        }
        let new_idx = (self.cursor as isize + delta).max(0) as usize;
        self.cursor = new_idx.min(self.visible.len() - 1);
    }

    fn refilter(&mut self) {
        let pattern = Pattern::parse(&self.query, CaseMatching::Smart, Normalization::Smart);
        let matcher = &mut self.matcher;
        let mut buf = Vec::new();

        self.visible = self
            .options
            .iter()
            .enumerate()
            .filter(|(_, option)| pattern.score(Utf32Str::new(option, &mut buf), matcher).is_some())
            .map(|(idx, _)| idx)
            .collect();
        self.cursor = 0;
    }
}
