//! One-shot viewport visibility notifications
//!
//! Stand-in for the browser's IntersectionObserver: elements are registered
//! with their line extents, and each is delivered exactly once, the first
//! time it intersects the visible line range. Delivery unregisters the
//! element, so consumers never see it again.

use crate::state::Page;

/// A watchable page element, identified by its section index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// A section awaiting its reveal animation
    Section(usize),
    /// A lazy image inside the given section
    Image(usize),
}

#[derive(Debug, Clone)]
struct Watched {
    page: Page,
    element: Element,
    top: u16,
    height: u16,
}

/// Registry of elements still waiting to become visible
#[derive(Debug, Default)]
pub struct ViewportWatcher {
    watched: Vec<Watched>,
}

impl ViewportWatcher {
    pub fn watch(&mut self, page: Page, element: Element, top: u16, height: u16) {
        self.watched.push(Watched {
            page,
            element,
            top,
            height,
        });
    }

    /// Elements of `page` intersecting the visible range
    /// `[view_top, view_top + view_height)`, removed from the watch set as
    /// they are returned.
    pub fn drain_visible(&mut self, page: Page, view_top: u16, view_height: u16) -> Vec<Element> {
        let view_bottom = view_top.saturating_add(view_height);
        let mut visible = Vec::new();
        self.watched.retain(|w| {
            let hit = w.page == page
                && w.top < view_bottom
                && w.top.saturating_add(w.height) > view_top;
            if hit {
                visible.push(w.element);
            }
            !hit
        });
        visible
    }

    pub fn pending(&self) -> usize {
        self.watched.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn watcher() -> ViewportWatcher {
        let mut w = ViewportWatcher::default();
        w.watch(Page::Home, Element::Section(0), 0, 4);
        w.watch(Page::Home, Element::Section(1), 4, 5);
        w.watch(Page::Home, Element::Image(1), 6, 2);
        w.watch(Page::About, Element::Section(0), 0, 4);
        w
    }

    #[test]
    fn test_elements_in_view_at_start_are_delivered_first_pass() {
        let mut w = watcher();
        let visible = w.drain_visible(Page::Home, 0, 10);
        assert_eq!(
            visible,
            vec![Element::Section(0), Element::Section(1), Element::Image(1)]
        );
    }

    #[test]
    fn test_delivery_is_one_shot() {
        let mut w = watcher();
        w.drain_visible(Page::Home, 0, 10);
        assert!(w.drain_visible(Page::Home, 0, 10).is_empty());
        assert_eq!(w.pending(), 1); // the About section is still watched
    }

    #[test]
    fn test_elements_below_the_fold_are_not_delivered() {
        let mut w = watcher();
        let visible = w.drain_visible(Page::Home, 0, 4);
        assert_eq!(visible, vec![Element::Section(0)]);
        assert_eq!(w.pending(), 3);
    }

    #[test]
    fn test_partial_overlap_counts_as_visible() {
        let mut w = watcher();
        // Viewport [5, 7): section 1 spans [4, 9), image spans [6, 8)
        let visible = w.drain_visible(Page::Home, 5, 2);
        assert_eq!(visible, vec![Element::Section(1), Element::Image(1)]);
    }

    #[test]
    fn test_scrolled_past_element_is_not_delivered() {
        let mut w = watcher();
        let visible = w.drain_visible(Page::Home, 9, 10);
        assert!(visible.is_empty());
    }

    #[test]
    fn test_other_pages_elements_are_untouched() {
        let mut w = watcher();
        let visible = w.drain_visible(Page::About, 0, 10);
        assert_eq!(visible, vec![Element::Section(0)]);
        assert_eq!(w.pending(), 3);
    }

    #[test]
    fn test_zero_height_viewport_delivers_nothing() {
        let mut w = watcher();
        assert!(w.drain_visible(Page::Home, 0, 0).is_empty());
    }
}
