//! Completion Gateway port
//!
//! Defines the interface for asking a remote language model to answer a
//! user message, plus the error type shared by every outbound gateway.

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// External service a gateway talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Completion,
    Listing,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Service::Completion => f.write_str("completion service"),
            Service::Listing => f.write_str("listing service"),
        }
    }
}

/// Errors that can occur during gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("{0} API key is not configured")]
    NotConfigured(Service),

    #[error("{service} rejected the API key (status {status})")]
    Unauthorized { service: Service, status: u16 },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("{message} (status {status})")]
    Status { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl GatewayError {
    /// Whether the failure is a credential problem (missing or rejected)
    /// rather than a transport or service fault.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            GatewayError::NotConfigured(_) | GatewayError::Unauthorized { .. }
        )
    }
}

/// Gateway to a text-completion endpoint
///
/// Implementations (adapters) live in the infrastructure layer and carry the
/// model parameters and credential themselves; the application only hands
/// over the raw user text.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Whether a credential is available. When false, [`complete`] fails with
    /// [`GatewayError::NotConfigured`] without sending anything.
    ///
    /// [`complete`]: CompletionGateway::complete
    fn is_configured(&self) -> bool;

    /// Send `prompt` and return the first choice's text.
    ///
    /// `Ok(None)` means the service answered but produced no usable text.
    async fn complete(&self, prompt: &str) -> Result<Option<String>, GatewayError>;
}
