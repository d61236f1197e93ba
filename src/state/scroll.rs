//! Page scrolling with eased anchor jumps

use std::time::{Duration, Instant};

/// A running scroll-to animation
#[derive(Debug, Clone)]
struct ScrollAnimation {
    from: u16,
    to: u16,
    started: Instant,
}

/// Vertical scroll position for the current page.
///
/// Line scrolling is immediate and cancels any running animation; anchor
/// jumps animate toward their target with a cubic ease-out, updated from the
/// tick loop.
#[derive(Debug, Default)]
pub struct ScrollState {
    offset: u16,
    animation: Option<ScrollAnimation>,
}

impl ScrollState {
    /// Duration of an animated anchor jump
    const ANIMATION_DURATION: Duration = Duration::from_millis(300);

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Immediate one-line scroll down, clamped to `max`
    pub fn line_down(&mut self, max: u16) {
        self.animation = None;
        self.offset = self.offset.saturating_add(1).min(max);
    }

    /// Immediate one-line scroll up
    pub fn line_up(&mut self) {
        self.animation = None;
        self.offset = self.offset.saturating_sub(1);
    }

    /// Start an animated jump to `target`, clamped to `max`
    pub fn scroll_to(&mut self, target: u16, max: u16) {
        let to = target.min(max);
        if to == self.offset {
            self.animation = None;
            return;
        }
        self.animation = Some(ScrollAnimation {
            from: self.offset,
            to,
            started: Instant::now(),
        });
    }

    /// Jump home without animation (page change)
    pub fn reset(&mut self) {
        self.offset = 0;
        self.animation = None;
    }

    /// Advance the animation based on elapsed time
    pub fn update(&mut self) {
        let Some(anim) = &self.animation else {
            return;
        };

        let progress =
            anim.started.elapsed().as_secs_f32() / Self::ANIMATION_DURATION.as_secs_f32();
        if progress >= 1.0 {
            self.offset = anim.to;
            self.animation = None;
            return;
        }

        let eased = simple_easing::cubic_out(progress);
        let from = anim.from as f32;
        let to = anim.to as f32;
        self.offset = (from + (to - from) * eased).round() as u16;
    }
}
