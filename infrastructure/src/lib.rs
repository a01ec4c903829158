//! Infrastructure layer for storefront-assistant
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the HTTP gateways, the JSONL transcript writer, and
//! configuration file loading.

pub mod completion;
pub mod config;
pub mod error;
mod http;
pub mod listing;
pub mod logging;

// Re-export commonly used types
pub use completion::OpenAiCompletionGateway;
pub use config::{
    ConfigLoader, ConfigValidationError, FileChatConfig, FileCompletionConfig, FileConfig,
    FileListingConfig, FileLoggingConfig,
};
pub use error::InfraError;
pub use listing::RapidApiListingGateway;
pub use logging::JsonlConversationLogger;
