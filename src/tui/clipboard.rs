//! Clipboard export and the transient "copied" confirmation state.
//!
//! Writing to the system clipboard is best-effort: if the host denies it,
//! nothing is surfaced. The confirmation state is cleared by the event-loop
//! tick after a fixed delay, restarted by another copy, and cancelled by a
//! selection change.

use std::time::{Duration, Instant};

/// How long the "copied" confirmation stays visible.
pub const CLEAR_DELAY: Duration = Duration::from_millis(1500);

/// A pending copy confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CopyFeedback {
    text: String,
    expires_at: Instant,
}

/// Confirmation state for the most recent copy action.
#[derive(Debug, Clone, Default)]
pub struct CopyState {
    feedback: Option<CopyFeedback>,
}

impl CopyState {
    /// Creates an empty state.
    #[must_use]
    pub const fn new() -> Self {
        Self { feedback: None }
    }

    /// Records a copy, (re)starting the confirmation timer.
    pub fn record(&mut self, text: impl Into<String>, now: Instant) {
        self.feedback = Some(CopyFeedback {
            text: text.into(),
            expires_at: now + CLEAR_DELAY,
        });
    }

    /// Cancels any pending confirmation (e.g. on a new selection).
    pub fn cancel(&mut self) {
        self.feedback = None;
    }

    /// Clears the confirmation once its delay has passed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(feedback) = &self.feedback {
            if now >= feedback.expires_at {
                self.feedback = None;
            }
        }
    }

    /// The copied text, while the confirmation is visible.
    #[must_use]
    pub fn copied_text(&self) -> Option<&str> {
        self.feedback.as_ref().map(|f| f.text.as_str())
    }
}

/// Writes text to the system clipboard, ignoring failure.
///
/// The host may deny clipboard access (e.g. headless sessions); matching the
/// observed behavior, nothing is reported.
pub fn copy_text(text: &str) {
    let _ = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.to_owned()));
}
