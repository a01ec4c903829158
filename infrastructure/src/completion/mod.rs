//! Chat-completions adapter for the [`CompletionGateway`] port.
//!
//! [`CompletionGateway`]: assistant_application::CompletionGateway

mod gateway;
mod wire;

pub use gateway::OpenAiCompletionGateway;
