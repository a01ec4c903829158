//! Conversation notification port
//!
//! Lets the presentation layer follow the conversation as it changes.

use assistant_domain::Message;

/// Callback for conversation state changes
///
/// Implementations live in the presentation layer. Every call corresponds to
/// exactly one state change, so a view can scroll to the latest entry on
/// each of them.
pub trait ConversationNotifier: Send + Sync {
    /// Called after a message was appended
    fn on_message_appended(&self, message: &Message);

    /// Called after the "awaiting reply" flag changed
    fn on_reply_pending(&self, pending: bool);
}

/// No-op notifier for when nobody is watching
pub struct NoConversationNotifier;

impl ConversationNotifier for NoConversationNotifier {
    fn on_message_appended(&self, _message: &Message) {}
    fn on_reply_pending(&self, _pending: bool) {}
}
