//! Top-level frame layout and status bar

use crate::app::App;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Height of the bordered header/nav bar
pub const HEADER_HEIGHT: u16 = 3;
/// Height of the bottom status bar
pub const STATUS_HEIGHT: u16 = 1;

/// Split the frame into header, page content, and status bar
pub fn split(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Page content height for a terminal of the given total height
pub fn content_height(total: u16) -> u16 {
    total.saturating_sub(HEADER_HEIGHT + STATUS_HEIGHT)
}

/// Draw the bottom status bar: key hints, transient status, theme label
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let mut spans = vec![
        Span::styled("1-3", Style::default().fg(theme.accent)),
        Span::raw(": pages  "),
        Span::styled("m", Style::default().fg(theme.accent)),
        Span::raw(": menu  "),
        Span::styled("t", Style::default().fg(theme.accent)),
        Span::raw(": theme  "),
        Span::styled("q", Style::default().fg(theme.accent)),
        Span::raw(": quit"),
    ];

    if let Some(message) = &app.state.status_message {
        spans.push(Span::raw("  |  "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(theme.muted),
        ));
    }

    spans.push(Span::raw("  |  "));
    spans.push(Span::styled(
        app.state.theme_mode.label(),
        Style::default().fg(theme.muted),
    ));

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().fg(theme.muted));
    frame.render_widget(bar, area);
}
