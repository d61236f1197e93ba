//! Success notice shown after an accepted submission

use std::time::{Duration, Instant};

pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";

/// A transient confirmation with a fixed lifetime.
///
/// Created on an accepted submission, removed by the tick loop once expired
/// or replaced outright by the next notice (which is what keeps at most one
/// alive per form).
#[derive(Debug, Clone)]
pub struct SuccessNotice {
    created_at: Instant,
    pub message: &'static str,
}

impl SuccessNotice {
    /// How long a notice stays on screen
    const LIFETIME: Duration = Duration::from_millis(5000);

    pub fn new() -> Self {
        Self {
            created_at: Instant::now(),
            message: SUCCESS_MESSAGE,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= Self::LIFETIME
    }
}

impl Default for SuccessNotice {
    fn default() -> Self {
        Self::new()
    }
}
