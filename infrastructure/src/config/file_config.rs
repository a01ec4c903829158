//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section has defaults, so an empty file (or no file) yields a
//! working configuration apart from the two API keys.

use assistant_domain::reply;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable consulted for the completion key by default
pub const DEFAULT_COMPLETION_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable consulted for the listing key by default
pub const DEFAULT_LISTING_KEY_ENV: &str = "RAPIDAPI_KEY";

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("{section}.endpoint must be an http(s) URL, got {value:?}")]
    InvalidEndpoint { section: &'static str, value: String },

    #[error("completion.model cannot be empty")]
    EmptyModel,

    #[error("completion.temperature must be within 0.0..=2.0, got {0}")]
    TemperatureOutOfRange(f64),

    #[error("completion.max_tokens cannot be 0")]
    ZeroMaxTokens,

    #[error("listing.host cannot be empty")]
    EmptyHost,
}

/// Raw chat configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Seeded assistant greeting
    pub greeting: String,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            greeting: reply::GREETING.to_string(),
        }
    }
}

/// Raw completion endpoint configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCompletionConfig {
    /// Chat completions URL
    pub endpoint: String,
    /// Model name sent with every request
    pub model: String,
    /// Sampling temperature
    pub temperature: f64,
    /// Maximum tokens in the reply
    pub max_tokens: u32,
    /// Inline API key (takes precedence over `api_key_env`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Environment variable holding the API key
    pub api_key_env: String,
}

impl Default for FileCompletionConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-4".to_string(),
            temperature: 0.7,
            max_tokens: 150,
            api_key: None,
            api_key_env: DEFAULT_COMPLETION_KEY_ENV.to_string(),
        }
    }
}

impl FileCompletionConfig {
    /// Resolve the API key from the config or the process environment.
    pub fn resolve_api_key(&self) -> Option<String> {
        resolve_key(&self.api_key, &self.api_key_env, |name| {
            std::env::var(name).ok()
        })
    }
}

/// Raw listing endpoint configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileListingConfig {
    /// Catalog URL
    pub endpoint: String,
    /// Value of the `X-RapidAPI-Host` header
    pub host: String,
    /// Inline API key (takes precedence over `api_key_env`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Environment variable holding the API key
    pub api_key_env: String,
}

impl Default for FileListingConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://mobile-phones2.p.rapidapi.com/brands".to_string(),
            host: "mobile-phones2.p.rapidapi.com".to_string(),
            api_key: None,
            api_key_env: DEFAULT_LISTING_KEY_ENV.to_string(),
        }
    }
}

impl FileListingConfig {
    /// Resolve the API key from the config or the process environment.
    pub fn resolve_api_key(&self) -> Option<String> {
        resolve_key(&self.api_key, &self.api_key_env, |name| {
            std::env::var(name).ok()
        })
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL transcript of the session
    pub conversation_log: Option<PathBuf>,
    /// Diagnostic log file (used while the TUI owns the terminal)
    pub log_file: Option<PathBuf>,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub chat: FileChatConfig,
    pub completion: FileCompletionConfig,
    pub listing: FileListingConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        check_endpoint("completion", &self.completion.endpoint)?;
        check_endpoint("listing", &self.listing.endpoint)?;

        if self.completion.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModel);
        }
        if !(0.0..=2.0).contains(&self.completion.temperature) {
            return Err(ConfigValidationError::TemperatureOutOfRange(
                self.completion.temperature,
            ));
        }
        if self.completion.max_tokens == 0 {
            return Err(ConfigValidationError::ZeroMaxTokens);
        }
        if self.listing.host.trim().is_empty() {
            return Err(ConfigValidationError::EmptyHost);
        }
        Ok(())
    }

    /// Copy with inline secrets masked, for display.
    pub fn redacted(&self) -> Self {
        let mask = |key: &Option<String>| key.as_ref().map(|_| "********".to_string());
        let mut copy = self.clone();
        copy.completion.api_key = mask(&self.completion.api_key);
        copy.listing.api_key = mask(&self.listing.api_key);
        copy
    }
}

fn check_endpoint(section: &'static str, value: &str) -> Result<(), ConfigValidationError> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigValidationError::InvalidEndpoint {
            section,
            value: value.to_string(),
        })
    }
}

/// Inline key first, then the named variable. Blank values count as absent.
fn resolve_key(
    inline: &Option<String>,
    env_name: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> Option<String> {
    let present = |v: &String| !v.trim().is_empty();
    inline
        .clone()
        .filter(present)
        .or_else(|| lookup(env_name).filter(present))
}
