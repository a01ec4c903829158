//! Conversation aggregate

use super::message::{Message, MessageId, Role};
use crate::core::error::DomainError;
use crate::reply;
use chrono::Utc;

/// The messages of one chat session plus the "awaiting reply" flag (Aggregate)
///
/// Messages are append-only. The flag is raised by [`begin_exchange`] and
/// cleared by [`complete_exchange`], so it is true exactly while one
/// assistant reply is outstanding.
///
/// [`begin_exchange`]: Conversation::begin_exchange
/// [`complete_exchange`]: Conversation::complete_exchange
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
    awaiting_reply: bool,
}

impl Conversation {
    /// Start a conversation seeded with the default assistant greeting.
    pub fn new() -> Self {
        Self::with_greeting(reply::GREETING)
    }

    /// Start a conversation seeded with a custom assistant greeting.
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        let mut conversation = Self {
            messages: Vec::new(),
            awaiting_reply: false,
        };
        conversation.append(Role::Assistant, greeting.into());
        conversation
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    /// Append the user's message and mark a reply as pending.
    ///
    /// Blank text and a reply already in flight are rejected without
    /// touching the conversation.
    pub fn begin_exchange(&mut self, text: &str) -> Result<Message, DomainError> {
        if text.trim().is_empty() {
            return Err(DomainError::EmptyMessage);
        }
        if self.awaiting_reply {
            return Err(DomainError::ReplyPending);
        }
        let message = self.append(Role::User, text.to_string());
        self.awaiting_reply = true;
        Ok(message)
    }

    /// Append the assistant's reply and clear the pending flag.
    pub fn complete_exchange(&mut self, content: impl Into<String>) -> Result<Message, DomainError> {
        if !self.awaiting_reply {
            return Err(DomainError::NoReplyPending);
        }
        let message = self.append(Role::Assistant, content.into());
        self.awaiting_reply = false;
        Ok(message)
    }

    fn append(&mut self, role: Role, content: String) -> Message {
        let now = Utc::now();
        let id = MessageId::after(self.messages.last().map(Message::id), now);
        let message = Message::new(id, role, content, now);
        self.messages.push(message.clone());
        message
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
