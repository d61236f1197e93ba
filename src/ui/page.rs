//! Section rendering for content pages

use crate::app::App;
use crate::site::{PageContent, Section};
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the current page's sections with the active scroll offset
pub fn draw(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let content = app.state.site.page(app.state.current_page);
    let paragraph =
        Paragraph::new(content_lines(content, theme)).scroll((app.state.scroll.offset(), 0));
    frame.render_widget(paragraph, area);
}

/// Render a page to lines. One line per line of `PageContent` geometry, so
/// scroll anchors and the viewport watcher line up with what is on screen.
pub fn content_lines<'a>(content: &'a PageContent, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = Vec::with_capacity(content.total_height() as usize);
    for section in &content.sections {
        push_section(&mut lines, section, theme);
    }
    lines
}

fn push_section<'a>(lines: &mut Vec<Line<'a>>, section: &'a Section, theme: &Theme) {
    // Unrevealed sections sit dimmed until the viewport watcher delivers
    // them, the terminal take on the fade-in animation
    let (heading_style, body_style) = if section.revealed {
        (
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(theme.fg),
        )
    } else {
        let dimmed = Style::default()
            .fg(theme.muted)
            .add_modifier(Modifier::DIM);
        (dimmed, dimmed)
    };

    lines.push(Line::from(Span::styled(section.heading, heading_style)));
    lines.push(Line::default());
    for body_line in section.body {
        lines.push(Line::from(Span::styled(*body_line, body_style)));
    }

    if let Some(image) = &section.image {
        if image.loaded {
            for row in image.art {
                lines.push(Line::from(Span::styled(*row, body_style)));
            }
        } else {
            // Placeholder fills the art's exact footprint
            let width = image.art.first().map(|r| r.chars().count()).unwrap_or(0);
            for _ in image.art {
                lines.push(Line::from(Span::styled(
                    "░".repeat(width),
                    Style::default().fg(theme.muted).add_modifier(Modifier::DIM),
                )));
            }
        }
    }

    lines.push(Line::default());
}
