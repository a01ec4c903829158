//! Bridge from controller notifications to the TUI event channel

use super::event::TuiEvent;
use assistant_application::ConversationNotifier;
use assistant_domain::Message;
use tokio::sync::mpsc;

/// Forwards [`ConversationNotifier`] callbacks as [`TuiEvent`]s.
///
/// Sends never block; if the TUI has already shut down the event is dropped.
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<TuiEvent>,
}

impl ChannelNotifier {
    pub fn new(tx: mpsc::UnboundedSender<TuiEvent>) -> Self {
        Self { tx }
    }

    /// Create a notifier together with the receiving end for [`TuiApp`].
    ///
    /// [`TuiApp`]: super::TuiApp
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<TuiEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

impl ConversationNotifier for ChannelNotifier {
    fn on_message_appended(&self, message: &Message) {
        let _ = self.tx.send(TuiEvent::MessageAppended(message.clone()));
    }

    fn on_reply_pending(&self, pending: bool) {
        let _ = self.tx.send(TuiEvent::ReplyPending(pending));
    }
}
