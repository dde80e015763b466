use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use super::app::Picker;
use super::layout::PickerLayout;

const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const ACCENT: Color = Color::Rgb(16, 185, 129);
const STATUS_BG: Color = Color::Rgb(24, 24, 27);

/// Render the whole picker
pub fn render_picker(frame: &mut Frame, picker: &Picker, title: &str) {
    let layout = PickerLayout::new(frame.area());

    render_header(frame, layout.header_area, picker, title);
    render_list(frame, layout.list_area, picker);
    render_status_bar(frame, layout.status_area, picker);
}

fn render_header(frame: &mut Frame, area: Rect, picker: &Picker, title: &str) {
    let line = if picker.query().is_empty() {
        Line::from(Span::styled("Type to filter sessions", Style::default().fg(MUTED)))
    } else {
        Line::from(vec![
            Span::styled("Filter: ", Style::default().fg(MUTED)),
            Span::raw(picker.query().to_string()),
        ])
    };

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED))
            .title(format!(" {} ", title)),
    );
    frame.render_widget(header, area);
}

fn render_list(frame: &mut Frame, area: Rect, picker: &Picker) {
    let items: Vec<ListItem> = picker
        .visible()
        .iter()
        .filter_map(|&idx| picker.options().get(idx))
        .map(|option| ListItem::new(Text::raw(option.clone())))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(" Sessions "),
        )
        .style(Style::default().fg(MUTED))
        .highlight_style(Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD));

    let mut state = ListState::default();
    if !picker.visible().is_empty() {
        state.select(Some(picker.cursor()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_status_bar(frame: &mut Frame, area: Rect, picker: &Picker) {
    let shown = picker.visible().len();
    let total = picker.options().len();

    let text = if shown == 0 {
        " No matching sessions | Backspace: edit filter | Esc: clear | Ctrl+C: cancel ".to_string()
    } else {
        format!(
            " session {}/{} ({} total) | ↑/↓: move | Enter: select | Esc: {} ",
            picker.cursor() + 1,
            shown,
            total,
            if picker.query().is_empty() { "cancel" } else { "clear filter" }
        )
    };

    let status = Paragraph::new(text).style(Style::default().fg(BRIGHT).bg(STATUS_BG));
    frame.render_widget(status, area);
}
