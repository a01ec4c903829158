//! Console output formatter for conversation transcripts

use assistant_domain::{Message, Role};
use colored::Colorize;

/// Formats a conversation for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format every message, oldest first
    pub fn format(messages: &[Message]) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("AI Customer Assistant"));
        output.push('\n');

        for message in messages {
            output.push('\n');
            output.push_str(&Self::format_message(message));
            output.push('\n');
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format a single message with a role label and local time
    pub fn format_message(message: &Message) -> String {
        let time = message
            .timestamp()
            .with_timezone(&chrono::Local)
            .format("%H:%M");
        let label = match message.role() {
            Role::User => "You".cyan().bold(),
            Role::Assistant => "Assistant".green().bold(),
        };
        format!(
            "{} {}\n{}",
            label,
            time.to_string().dimmed(),
            Self::indent(message.content(), "  ")
        )
    }

    /// Format as JSON
    pub fn format_json(messages: &[Message]) -> String {
        serde_json::to_string_pretty(messages).unwrap_or_else(|_| "[]".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
