//! Application state definitions

use crate::site::{self, Site};
use crate::state::{ContactForm, Element, ScrollState, SuccessNotice, ViewportWatcher};
use crate::ui::theme::ThemeMode;

/// Current page of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    About,
    Contact,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::About, Page::Contact];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Self::Home => '1',
            Self::About => '2',
            Self::Contact => '3',
        }
    }
}

/// Everything the renderer needs to draw a frame
#[derive(Debug)]
pub struct AppState {
    pub current_page: Page,
    pub theme_mode: ThemeMode,
    /// Whether the nav menu overlay is open
    pub nav_open: bool,
    /// Highlighted entry inside the open nav menu
    pub nav_cursor: usize,
    pub site: Site,
    pub scroll: ScrollState,
    pub contact_form: ContactForm,
    pub success_notice: Option<SuccessNotice>,
    pub watcher: ViewportWatcher,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(theme_mode: ThemeMode) -> Self {
        let site = site::portfolio();
        let mut watcher = ViewportWatcher::default();

        // Register every section and image of every page for its one-shot
        // visibility notification
        for page in Page::ALL {
            let content = site.page(page);
            for (i, section) in content.sections.iter().enumerate() {
                watcher.watch(page, Element::Section(i), content.section_offset(i), section.height());
                if let Some(image) = &section.image {
                    if let Some(top) = content.image_offset(i) {
                        watcher.watch(page, Element::Image(i), top, image.height());
                    }
                }
            }
        }

        Self {
            current_page: Page::default(),
            theme_mode,
            nav_open: false,
            nav_cursor: 0,
            site,
            scroll: ScrollState::default(),
            contact_form: ContactForm::new(),
            success_notice: None,
            watcher,
            status_message: None,
        }
    }

    /// Switch pages: scroll back to the top and close the nav menu
    pub fn navigate(&mut self, page: Page) {
        self.current_page = page;
        self.scroll.reset();
        self.close_nav();
    }

    pub fn toggle_nav(&mut self) {
        self.nav_open = !self.nav_open;
        if self.nav_open {
            self.nav_cursor = Page::ALL
                .iter()
                .position(|p| *p == self.current_page)
                .unwrap_or(0);
        }
    }

    pub fn close_nav(&mut self) {
        self.nav_open = false;
    }

    pub fn nav_cursor_up(&mut self) {
        if self.nav_cursor == 0 {
            self.nav_cursor = Page::ALL.len() - 1;
        } else {
            self.nav_cursor -= 1;
        }
    }

    pub fn nav_cursor_down(&mut self) {
        self.nav_cursor = (self.nav_cursor + 1) % Page::ALL.len();
    }

    pub fn nav_selected(&self) -> Page {
        Page::ALL[self.nav_cursor]
    }

    /// Show the post-submission confirmation, superseding any live notice
    /// (at most one exists per form)
    pub fn show_success_notice(&mut self) {
        self.success_notice = Some(SuccessNotice::new());
    }

    /// Drop the notice once its lifetime has elapsed; a no-op when there is
    /// none
    pub fn expire_notice(&mut self) {
        if self
            .success_notice
            .as_ref()
            .is_some_and(SuccessNotice::is_expired)
        {
            self.success_notice = None;
        }
    }

    /// Largest valid scroll offset for the given viewport height
    pub fn max_scroll(&self, view_height: u16) -> u16 {
        self.site
            .page(self.current_page)
            .total_height()
            .saturating_sub(view_height)
    }

    /// Deliver visibility notifications for the current scroll position:
    /// newly visible sections reveal, newly visible images load
    pub fn observe_viewport(&mut self, view_height: u16) {
        let page = self.current_page;
        let visible = self
            .watcher
            .drain_visible(page, self.scroll.offset(), view_height);
        if visible.is_empty() {
            return;
        }

        let content = self.site.page_mut(page);
        for element in visible {
            match element {
                Element::Section(i) => {
                    if let Some(section) = content.sections.get_mut(i) {
                        section.revealed = true;
                    }
                }
                Element::Image(i) => {
                    if let Some(image) = content
                        .sections
                        .get_mut(i)
                        .and_then(|s| s.image.as_mut())
                    {
                        image.load();
                    }
                }
            }
        }
    }
}
