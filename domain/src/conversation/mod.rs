//! Conversation domain.
//!
//! - [`message::Message`] — a single immutable chat entry
//! - [`state::Conversation`] — the ordered message list and the pending flag

pub mod message;
pub mod state;
