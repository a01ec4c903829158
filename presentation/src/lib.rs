//! Presentation layer for storefront-assistant
//!
//! This crate contains the CLI definition, the full-screen chat TUI,
//! the one-shot transcript formatter and the typing spinner.

pub mod cli;
pub mod output;
pub mod progress;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::typing::TypingSpinner;
pub use tui::{ChannelNotifier, TuiApp, TuiEvent};
