//! TUI event types
//!
//! Controller notifications forwarded to the render loop.

use assistant_domain::Message;

/// Events sent from the controller task to the TUI event loop
#[derive(Debug, Clone)]
pub enum TuiEvent {
    /// A message was appended to the conversation
    MessageAppended(Message),
    /// The pending flag changed
    ReplyPending(bool),
}
