//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Raised by [`Conversation`](crate::Conversation) when an operation would
/// break the "at most one reply in flight" invariant or append a blank
/// message. The conversation is left untouched in every case.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Message is empty")]
    EmptyMessage,

    #[error("A reply is already pending")]
    ReplyPending,

    #[error("No reply is pending")]
    NoReplyPending,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(DomainError::EmptyMessage.to_string(), "Message is empty");
        assert_eq!(
            DomainError::ReplyPending.to_string(),
            "A reply is already pending"
        );
    }
}
