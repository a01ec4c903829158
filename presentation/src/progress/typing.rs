//! Typing indicator for one-shot mode

use assistant_application::ConversationNotifier;
use assistant_domain::Message;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Shows a spinner while a reply is pending.
pub struct TypingSpinner {
    bar: Mutex<Option<ProgressBar>>,
}

impl TypingSpinner {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Whether the spinner is currently shown
    pub fn is_active(&self) -> bool {
        self.bar
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl Default for TypingSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationNotifier for TypingSpinner {
    fn on_message_appended(&self, _message: &Message) {}

    fn on_reply_pending(&self, pending: bool) {
        let mut bar = self.bar.lock().unwrap_or_else(PoisonError::into_inner);
        if pending {
            let pb = ProgressBar::new_spinner();
            pb.set_style(Self::spinner_style());
            pb.set_message("Assistant is typing...");
            pb.enable_steady_tick(Duration::from_millis(100));
            *bar = Some(pb);
        } else if let Some(pb) = bar.take() {
            pb.finish_and_clear();
        }
    }
}
