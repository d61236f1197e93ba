//! UI module for rendering the TUI

mod components;
mod contact;
mod layout;
mod nav;
mod page;
pub mod theme;

pub use layout::content_height;

use crate::app::App;
use crate::state::Page;
use ratatui::{style::Style, widgets::Block, Frame};
use theme::Theme;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let theme = Theme::of(app.state.theme_mode);
    let area = frame.area();

    // Paint the themed background before anything else
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg).fg(theme.fg)),
        area,
    );

    let (header_area, content_area, status_area) = layout::split(area);

    nav::draw_header(frame, header_area, app, &theme);

    match app.state.current_page {
        Page::Home | Page::About => page::draw(frame, content_area, app, &theme),
        Page::Contact => contact::draw(frame, content_area, app, &theme),
    }

    layout::draw_status_bar(frame, status_area, app, &theme);

    // The nav menu floats above everything when open
    if app.state.nav_open {
        nav::draw_menu(frame, content_area, app, &theme);
    }
}
