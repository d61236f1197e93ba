//! Header bar and nav menu overlay

use crate::app::App;
use crate::state::Page;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Draw the header: site title, page links with the active one highlighted,
/// menu and theme toggles
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));

    let mut spans = vec![
        Span::styled(
            " Marlo Quint ",
            Style::default()
                .fg(theme.fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ];

    for page in Page::ALL {
        let style = if page == app.state.current_page {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted)
        };
        spans.push(Span::styled(format!("{} ", page.shortcut()), style));
        spans.push(Span::styled(page.label(), style));
        spans.push(Span::raw("   "));
    }

    let menu_glyph = if app.state.nav_open { "✕" } else { "☰" };
    spans.push(Span::styled(
        format!("[{menu_glyph}]"),
        Style::default().fg(theme.muted),
    ));
    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        app.state.theme_mode.toggle_glyph(),
        Style::default().fg(theme.muted),
    ));

    let bar = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(bar, area);
}

/// Draw the nav menu overlay near the top-right, mirroring the collapsed
/// mobile menu of the site
pub fn draw_menu(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let menu_area = menu_rect(area);
    frame.render_widget(Clear, menu_area);

    let lines: Vec<Line> = Page::ALL
        .iter()
        .enumerate()
        .map(|(i, page)| {
            let selected = i == app.state.nav_cursor;
            let active = *page == app.state.current_page;
            let mut style = Style::default().fg(theme.fg);
            if active {
                style = style.fg(theme.accent).add_modifier(Modifier::BOLD);
            }
            if selected {
                style = style.add_modifier(Modifier::REVERSED);
            }
            let marker = if selected { ">" } else { " " };
            Line::from(Span::styled(format!("{marker} {}", page.label()), style))
        })
        .collect();

    let block = Block::default()
        .title(" Menu ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent));
    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().bg(theme.bg))
            .block(block),
        menu_area,
    );
}

/// Small box anchored under the header on the right edge
fn menu_rect(area: Rect) -> Rect {
    let width = 16.min(area.width);
    let height = (Page::ALL.len() as u16 + 2).min(area.height);
    Rect::new(area.right().saturating_sub(width), area.y, width, height)
}
