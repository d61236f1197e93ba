//! Contact page: intro sections, the form, and its annotations

use crate::app::App;
use crate::state::{ContactForm, FormField};
use crate::ui::components::button::{render_button, BUTTON_HEIGHT};
use crate::ui::page;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const FIELD_HEIGHT: u16 = 3;
/// One reserved line under each field for its error annotation
const ANNOTATION_HEIGHT: u16 = 1;

/// Draw the contact page
pub fn draw(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let form = &app.state.contact_form;
    let intro = app.state.site.page(app.state.current_page);
    let intro_height = intro.total_height().min(area.height);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(intro_height),
            Constraint::Length(FIELD_HEIGHT + ANNOTATION_HEIGHT), // name
            Constraint::Length(FIELD_HEIGHT + ANNOTATION_HEIGHT), // email
            Constraint::Min(FIELD_HEIGHT + ANNOTATION_HEIGHT),    // message
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1), // success notice
            Constraint::Length(1), // help
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(page::content_lines(intro, theme)),
        chunks[0],
    );

    draw_field(frame, chunks[1], &form.name, form.active_index() == 0, theme);
    draw_field(frame, chunks[2], &form.email, form.active_index() == 1, theme);
    draw_field(frame, chunks[3], &form.message, form.active_index() == 2, theme);

    let button_area = Rect {
        width: chunks[4].width.min(12),
        ..chunks[4]
    };
    render_button(frame, button_area, "Send", form.is_button_active(), theme);

    if let Some(notice) = &app.state.success_notice {
        let confirmation = Paragraph::new(Line::from(Span::styled(
            format!("✅ {}", notice.message),
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(confirmation, chunks[5]);
    }

    draw_help(frame, chunks[6], form, theme);
}

/// Draw one field: bordered value with cursor, error annotation underneath.
/// Error styling wins over focus styling, like the red border of the site.
fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(FIELD_HEIGHT), Constraint::Length(ANNOTATION_HEIGHT)])
        .split(area);

    let border_style = if field.error().is_some() {
        Style::default().fg(theme.error)
    } else if is_active {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.border)
    };

    let value_style = if is_active {
        Style::default().fg(theme.fg)
    } else {
        Style::default().fg(theme.muted)
    };

    let cursor = if is_active { "▌" } else { "" };
    let content = if field.is_multiline() {
        let mut lines: Vec<Line> = field
            .value
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(theme.accent)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(theme.accent),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(field.value.clone(), value_style),
            Span::styled(cursor, Style::default().fg(theme.accent)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), chunks[0]);

    if let Some(message) = field.error() {
        let annotation = Paragraph::new(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(theme.error),
        )));
        frame.render_widget(annotation, chunks[1]);
    }
}

fn draw_help(frame: &mut Frame, area: Rect, form: &ContactForm, theme: &Theme) {
    let mut spans = vec![
        Span::styled("Tab", Style::default().fg(theme.accent)),
        Span::raw(": next field  "),
        Span::styled("Ctrl+S", Style::default().fg(theme.accent)),
        Span::raw(": send"),
    ];
    if form.is_button_active() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("Enter", Style::default().fg(theme.accent)));
        spans.push(Span::raw(": send"));
    }
    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(theme.muted));
    frame.render_widget(help, area);
}
