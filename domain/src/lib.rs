//! Domain layer for storefront-assistant
//!
//! This crate contains the conversation entities and the rules that decide
//! how a user message is answered. It has no dependencies on infrastructure
//! or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Conversation**: ordered, append-only list of [`Message`]s plus the
//!   "awaiting reply" flag. At most one reply is in flight at a time.
//! - **Intent**: which external service answers a message, decided by
//!   keyword matching ([`Intent::classify`]).
//! - **Replies**: the fixed assistant texts used for greetings, fallbacks and
//!   failures ([`reply`]).

pub mod conversation;
pub mod core;
pub mod reply;
pub mod routing;
pub mod util;

// Re-export commonly used types
pub use conversation::{
    message::{Message, MessageId, Role},
    state::Conversation,
};
pub use core::error::DomainError;
pub use routing::intent::Intent;
