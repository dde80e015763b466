use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Picker screen areas
pub struct PickerLayout {
    pub header_area: Rect,
    pub list_area: Rect,
    pub status_area: Rect,
}

impl PickerLayout {
    /// Create the picker layout:
    /// - Header: title and filter query (3 rows including borders)
    /// - Session list: remaining rows
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        Self { header_area: chunks[0], list_area: chunks[1], status_area: chunks[2] }
    }
}
