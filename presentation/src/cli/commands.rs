//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for one-shot mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Coloured transcript
    Text,
    /// JSON array of messages
    Json,
}

/// CLI arguments for storefront-assistant
#[derive(Parser, Debug)]
#[command(name = "storefront-assistant")]
#[command(author, version, about = "AI customer assistant for a phone store")]
#[command(long_about = r#"
Storefront Assistant answers customer questions in a chat window.

Messages mentioning "inventory" or "products" list the store catalog;
everything else is answered by a language model.

Credentials are read from OPENAI_API_KEY and RAPIDAPI_KEY unless set in
a configuration file. Configuration files are loaded from (in priority order):
1. --config <path>          Explicit config file
2. ./assistant.toml         Project-level config
3. ~/.config/storefront-assistant/config.toml   Global config

Example:
  storefront-assistant
  storefront-assistant "Which products do you have?"
  storefront-assistant --output json "Do you ship overseas?"
"#)]
pub struct Cli {
    /// Send a single message and print the transcript instead of opening the chat window
    pub message: Option<String>,

    /// Output format for a single message
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the typing indicator
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and the merged configuration, then exit
    #[arg(long)]
    pub show_config: bool,

    /// Write a JSONL transcript of the session to this file
    #[arg(long, value_name = "PATH")]
    pub conversation_log: Option<PathBuf>,

    /// Write diagnostic logs to this file while the chat window is open
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_open_chat_window() {
        let cli = Cli::parse_from(["storefront-assistant"]);
        assert!(cli.message.is_none());
        assert_eq!(cli.output, OutputFormat::Text);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.no_config);
    }

    #[test]
    fn test_one_shot_flags() {
        let cli = Cli::parse_from([
            "storefront-assistant",
            "-vv",
            "--output",
            "json",
            "--conversation-log",
            "session.jsonl",
            "Show me your inventory",
        ]);
        assert_eq!(cli.message.as_deref(), Some("Show me your inventory"));
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.conversation_log, Some(PathBuf::from("session.jsonl")));
    }
}
