//! Application layer for storefront-assistant
//!
//! This crate contains the chat controller use case and the port
//! definitions its adapters implement. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    completion_gateway::{CompletionGateway, GatewayError, Service},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    conversation_notifier::{ConversationNotifier, NoConversationNotifier},
    listing_gateway::ListingGateway,
};
pub use use_cases::chat_controller::{ChatController, IgnoreReason, SubmitOutcome};
