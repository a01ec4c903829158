//! Configuration file loading for storefront-assistant
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `STOREFRONT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./assistant.toml` or `./.assistant.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/storefront-assistant/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_COMPLETION_KEY_ENV, DEFAULT_LISTING_KEY_ENV, FileChatConfig,
    FileCompletionConfig, FileConfig, FileListingConfig, FileLoggingConfig,
};
pub use loader::ConfigLoader;
