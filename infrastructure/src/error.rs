//! Infrastructure setup errors

use thiserror::Error;

/// Failures while constructing adapters (not while using them)
#[derive(Debug, Error)]
pub enum InfraError {
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] crate::config::ConfigValidationError),
}
