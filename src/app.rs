//! Application logic and event handling

use crate::prefs::PreferenceStore;
use crate::state::{AppState, Page, SubmitOutcome};
use crate::ui;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};

/// Main application
pub struct App {
    pub state: AppState,
    prefs: Box<dyn PreferenceStore>,
    /// Height of the page content area, updated each frame
    content_height: u16,
    should_quit: bool,
}

impl App {
    pub fn new(prefs: Box<dyn PreferenceStore>) -> Self {
        let theme_mode = prefs.theme().unwrap_or_default();
        Self {
            state: AppState::new(theme_mode),
            prefs,
            content_height: 0,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether a frame is due soon regardless of input (running animation)
    pub fn is_animating(&self) -> bool {
        self.state.scroll.is_animating()
    }

    /// Per-frame housekeeping: advance the scroll animation, drop expired
    /// notices, and deliver visibility notifications for the current offset
    pub fn tick(&mut self, terminal_height: u16) {
        self.content_height = ui::content_height(terminal_height);
        self.state.scroll.update();
        self.state.expire_notice();
        self.state.observe_viewport(self.content_height);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.state.status_message = None;

        if self.state.nav_open {
            self.handle_menu_key(key);
            return;
        }

        match self.state.current_page {
            Page::Home | Page::About => self.handle_page_key(key),
            Page::Contact => self.handle_contact_key(key),
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll_line_down(),
            MouseEventKind::ScrollUp => self.state.scroll.line_up(),
            _ => {}
        }
    }

    /// Keys shared by every page: quit, page shortcuts, menu, theme
    fn handle_global_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('m') => self.state.toggle_nav(),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char(c) => {
                if let Some(page) = Page::ALL.iter().find(|p| p.shortcut() == c) {
                    self.state.navigate(*page);
                }
            }
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('m') => self.state.close_nav(),
            KeyCode::Up | KeyCode::Char('k') => self.state.nav_cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.nav_cursor_down(),
            KeyCode::Enter => {
                let page = self.state.nav_selected();
                self.state.navigate(page);
            }
            KeyCode::Char(c) => {
                // Page shortcuts work with the menu open and close it
                if let Some(page) = Page::ALL.iter().find(|p| p.shortcut() == c) {
                    self.state.navigate(*page);
                }
            }
            _ => {}
        }
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.scroll_line_down(),
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll.line_up(),
            KeyCode::Char(']') => self.jump_to_anchor(true),
            KeyCode::Char('[') => self.jump_to_anchor(false),
            KeyCode::Home | KeyCode::Char('g') => {
                let max = self.state.max_scroll(self.content_height);
                self.state.scroll.scroll_to(0, max);
            }
            KeyCode::End | KeyCode::Char('G') => {
                let max = self.state.max_scroll(self.content_height);
                self.state.scroll.scroll_to(max, max);
            }
            _ => self.handle_global_key(key),
        }
    }

    /// Contact page: text input wins over global shortcuts while a field has
    /// focus, so typing "quit me a line" does not quit
    fn handle_contact_key(&mut self, key: KeyEvent) {
        use crossterm::event::KeyModifiers;

        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.submit_contact_form();
            return;
        }

        let form = &mut self.state.contact_form;
        match key.code {
            KeyCode::Tab => form.focus_next(),
            KeyCode::BackTab => form.focus_prev(),
            KeyCode::Enter => {
                if form.is_button_active() {
                    self.submit_contact_form();
                } else if form.field(form.active_index()).is_some_and(|f| f.is_multiline()) {
                    form.input_char('\n');
                } else {
                    self.submit_contact_form();
                }
            }
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c) if !form.is_button_active() => form.input_char(c),
            _ => self.handle_global_key(key),
        }
    }

    /// Run a submit attempt; an accepted one raises the timed confirmation
    fn submit_contact_form(&mut self) {
        match self.state.contact_form.submit() {
            SubmitOutcome::Accepted => {
                tracing::info!("contact form submitted");
                self.state.show_success_notice();
            }
            SubmitOutcome::Rejected => {
                tracing::debug!("contact form rejected");
                self.state.status_message = Some("Please fix the highlighted fields".to_string());
            }
        }
    }

    /// Flip the theme and persist the choice; a failed write keeps the new
    /// theme for this session
    fn toggle_theme(&mut self) {
        let mode = self.state.theme_mode.toggle();
        self.state.theme_mode = mode;
        if let Err(err) = self.prefs.set_theme(mode) {
            tracing::warn!("failed to save theme preference: {err}");
            self.state.status_message = Some("Could not save theme preference".to_string());
        }
    }

    fn scroll_line_down(&mut self) {
        let max = self.state.max_scroll(self.content_height);
        self.state.scroll.line_down(max);
    }

    /// Animated jump to the nearest section heading in the given direction
    fn jump_to_anchor(&mut self, forward: bool) {
        let content = self.state.site.page(self.state.current_page);
        let offset = self.state.scroll.offset();
        let target = if forward {
            content.next_anchor(offset)
        } else {
            content.prev_anchor(offset)
        };
        if let Some(target) = target {
            let max = self.state.max_scroll(self.content_height);
            self.state.scroll.scroll_to(target, max);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MockPreferenceStore;
    use crate::state::SUCCESS_MESSAGE;
    use crate::ui::theme::ThemeMode;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    fn app() -> App {
        let mut prefs = MockPreferenceStore::new();
        prefs.expect_theme().return_const(None);
        prefs.expect_set_theme().returning(|_| Ok(()));
        App::new(Box::new(prefs))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    mod global_keys {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_q_quits_from_a_content_page() {
            let mut app = app();
            app.handle_key(key(KeyCode::Char('q')));
            assert!(app.should_quit());
        }

        #[test]
        fn test_digit_shortcuts_switch_pages() {
            let mut app = app();
            app.handle_key(key(KeyCode::Char('2')));
            assert_eq!(app.state.current_page, Page::About);
            app.handle_key(key(KeyCode::Char('3')));
            assert_eq!(app.state.current_page, Page::Contact);
        }

        #[test]
        fn test_theme_toggle_flips_and_persists() {
            let mut prefs = MockPreferenceStore::new();
            prefs.expect_theme().return_const(Some(ThemeMode::Light));
            prefs
                .expect_set_theme()
                .withf(|mode| *mode == ThemeMode::Dark)
                .times(1)
                .returning(|_| Ok(()));

            let mut app = App::new(Box::new(prefs));
            app.handle_key(key(KeyCode::Char('t')));
            assert_eq!(app.state.theme_mode, ThemeMode::Dark);
        }

        #[test]
        fn test_theme_survives_a_failed_save() {
            let mut prefs = MockPreferenceStore::new();
            prefs.expect_theme().return_const(None);
            prefs.expect_set_theme().returning(|_| {
                Err(crate::prefs::PrefsError::Io(std::io::Error::other("disk")))
            });

            let mut app = App::new(Box::new(prefs));
            app.handle_key(key(KeyCode::Char('t')));
            assert_eq!(app.state.theme_mode, ThemeMode::Dark);
            assert!(app.state.status_message.is_some());
        }

        #[test]
        fn test_saved_theme_is_restored_on_startup() {
            let mut prefs = MockPreferenceStore::new();
            prefs.expect_theme().return_const(Some(ThemeMode::Dark));
            let app = App::new(Box::new(prefs));
            assert_eq!(app.state.theme_mode, ThemeMode::Dark);
        }
    }

    mod menu {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_m_opens_menu_and_esc_closes_it() {
            let mut app = app();
            app.handle_key(key(KeyCode::Char('m')));
            assert!(app.state.nav_open);
            app.handle_key(key(KeyCode::Esc));
            assert!(!app.state.nav_open);
        }

        #[test]
        fn test_selecting_an_entry_navigates_and_closes() {
            let mut app = app();
            app.handle_key(key(KeyCode::Char('m')));
            app.handle_key(key(KeyCode::Down));
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.state.current_page, Page::About);
            assert!(!app.state.nav_open);
        }

        #[test]
        fn test_open_menu_swallows_page_keys() {
            let mut app = app();
            app.handle_key(key(KeyCode::Char('m')));
            app.handle_key(key(KeyCode::Char('q')));
            assert!(!app.should_quit());
        }
    }

    mod scrolling {
        use super::*;
        use pretty_assertions::assert_eq;

        fn tall_app() -> App {
            let mut app = app();
            app.tick(12); // small viewport so home overflows
            app
        }

        #[test]
        fn test_arrow_keys_scroll_by_line() {
            let mut app = tall_app();
            app.handle_key(key(KeyCode::Down));
            app.handle_key(key(KeyCode::Down));
            assert_eq!(app.state.scroll.offset(), 2);
            app.handle_key(key(KeyCode::Up));
            assert_eq!(app.state.scroll.offset(), 1);
        }

        #[test]
        fn test_bracket_starts_an_anchor_animation() {
            let mut app = tall_app();
            app.handle_key(key(KeyCode::Char(']')));
            assert!(app.state.scroll.is_animating());
        }

        #[test]
        fn test_prev_anchor_from_the_top_does_nothing() {
            let mut app = tall_app();
            app.handle_key(key(KeyCode::Char('[')));
            assert!(!app.state.scroll.is_animating());
            assert_eq!(app.state.scroll.offset(), 0);
        }

        #[test]
        fn test_mouse_wheel_scrolls() {
            let mut app = tall_app();
            let wheel = MouseEvent {
                kind: MouseEventKind::ScrollDown,
                column: 0,
                row: 0,
                modifiers: KeyModifiers::NONE,
            };
            app.handle_mouse(wheel);
            assert_eq!(app.state.scroll.offset(), 1);
        }
    }

    mod contact {
        use super::*;
        use pretty_assertions::assert_eq;

        fn on_contact() -> App {
            let mut app = app();
            app.handle_key(key(KeyCode::Char('3')));
            app
        }

        #[test]
        fn test_typing_q_into_a_field_does_not_quit() {
            let mut app = on_contact();
            type_text(&mut app, "quint");
            assert!(!app.should_quit());
            assert_eq!(app.state.contact_form.name.value, "quint");
        }

        #[test]
        fn test_tab_moves_focus_and_backspace_edits() {
            let mut app = on_contact();
            type_text(&mut app, "Ma");
            app.handle_key(key(KeyCode::Backspace));
            assert_eq!(app.state.contact_form.name.value, "M");
            app.handle_key(key(KeyCode::Tab));
            assert_eq!(app.state.contact_form.active_index(), 1);
        }

        #[test]
        fn test_enter_in_message_inserts_a_newline() {
            let mut app = on_contact();
            app.handle_key(key(KeyCode::Tab));
            app.handle_key(key(KeyCode::Tab));
            type_text(&mut app, "hi");
            app.handle_key(key(KeyCode::Enter));
            type_text(&mut app, "there");
            assert_eq!(app.state.contact_form.message.value, "hi\nthere");
        }

        #[test]
        fn test_enter_in_a_single_line_field_submits() {
            let mut app = on_contact();
            app.handle_key(key(KeyCode::Enter));
            // Empty form: rejected, every required field annotated
            assert!(app.state.contact_form.name.error().is_some());
            assert!(app.state.success_notice.is_none());
        }

        #[test]
        fn test_accepted_submission_shows_the_confirmation() {
            let mut app = on_contact();
            type_text(&mut app, "Marlo Quint");
            app.handle_key(key(KeyCode::Tab));
            type_text(&mut app, "marlo@quint.dev");
            app.handle_key(key(KeyCode::Tab));
            type_text(&mut app, "Hello!");
            app.handle_key(ctrl('s'));

            let notice = app.state.success_notice.as_ref().expect("notice");
            assert_eq!(notice.message, SUCCESS_MESSAGE);
            assert_eq!(app.state.contact_form.name.value, "");
        }

        #[test]
        fn test_rejected_submission_sets_a_status_message() {
            let mut app = on_contact();
            app.handle_key(ctrl('s'));
            assert!(app.state.success_notice.is_none());
            assert!(app.state.status_message.is_some());
        }

        #[test]
        fn test_repeat_submissions_keep_one_notice() {
            let mut app = on_contact();
            for _ in 0..2 {
                type_text(&mut app, "Marlo");
                app.handle_key(key(KeyCode::Tab));
                type_text(&mut app, "m@q.dev");
                app.handle_key(key(KeyCode::Tab));
                type_text(&mut app, "hi");
                app.handle_key(ctrl('s'));
                app.handle_key(key(KeyCode::BackTab));
                app.handle_key(key(KeyCode::BackTab));
            }
            assert!(app.state.success_notice.is_some());
        }

        #[test]
        fn test_enter_on_the_send_button_submits() {
            let mut app = on_contact();
            app.handle_key(key(KeyCode::BackTab)); // wrap onto the button
            app.handle_key(key(KeyCode::Enter));
            assert!(app.state.contact_form.email.error().is_some());
        }

        #[test]
        fn test_global_keys_work_from_the_button_row() {
            let mut app = on_contact();
            app.handle_key(key(KeyCode::BackTab));
            app.handle_key(key(KeyCode::Char('1')));
            assert_eq!(app.state.current_page, Page::Home);
        }
    }
}
