//! CLI entrypoint for Storefront Assistant
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use assistant_application::{
    ChatController, CompletionGateway, IgnoreReason, ListingGateway, SubmitOutcome,
};
use assistant_infrastructure::{
    ConfigLoader, FileConfig, JsonlConversationLogger, OpenAiCompletionGateway,
    RapidApiListingGateway,
};
use assistant_presentation::{
    ChannelNotifier, Cli, ConsoleFormatter, OutputFormat, TuiApp, TypingSpinner,
};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli)?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        println!();
        println!("{}", toml::to_string_pretty(&config.redacted())?);
        return Ok(());
    }

    config.validate().context("Invalid configuration")?;

    // The chat window owns the terminal, so its logs go to a file
    let log_file = match cli.message {
        Some(_) => None,
        None => Some(
            cli.log_file
                .clone()
                .or_else(|| config.logging.log_file.clone())
                .unwrap_or_else(default_log_file),
        ),
    };
    let _log_guard = init_logging(cli.verbose, log_file.as_deref())?;

    info!("Starting Storefront Assistant");

    let controller = build_controller(&cli, &config)?;

    match cli.message.as_deref() {
        Some(message) => run_once(controller, message, &cli).await,
        None => {
            let (notifier, event_rx) = ChannelNotifier::channel();
            let controller = Arc::new(controller.with_notifier(Arc::new(notifier)));
            TuiApp::new(controller, event_rx).run().await?;
            Ok(())
        }
    }
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }
    ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")
}

/// Initialize logging based on verbosity level.
///
/// Logs go to stderr unless `log_file` is given. The returned guard flushes
/// the file writer on drop.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("Log file path has no file name: {}", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Could not create log directory {}", dir.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

fn default_log_file() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(std::env::temp_dir)
        .join("storefront-assistant")
        .join("storefront-assistant.log")
}

// === Dependency Injection ===
fn build_controller(cli: &Cli, config: &FileConfig) -> Result<ChatController> {
    let completion = OpenAiCompletionGateway::from_config(&config.completion)?;
    let listing = RapidApiListingGateway::from_config(&config.listing)?;

    if !completion.is_configured() {
        warn!(
            "No completion API key (set {} or completion.api_key)",
            config.completion.api_key_env
        );
    }
    if !listing.is_configured() {
        warn!(
            "No listing API key (set {} or listing.api_key)",
            config.listing.api_key_env
        );
    }

    let mut controller = ChatController::new(Arc::new(completion), Arc::new(listing))
        .with_greeting(config.chat.greeting.clone());

    let transcript = cli
        .conversation_log
        .clone()
        .or_else(|| config.logging.conversation_log.clone());
    if let Some(path) = transcript
        && let Some(logger) = JsonlConversationLogger::new(&path)
    {
        info!("Writing transcript to {}", logger.path().display());
        controller = controller.with_conversation_logger(Arc::new(logger));
    }

    Ok(controller)
}

async fn run_once(controller: ChatController, message: &str, cli: &Cli) -> Result<()> {
    let controller = if cli.quiet {
        controller
    } else {
        controller.with_notifier(Arc::new(TypingSpinner::new()))
    };

    match controller.submit(message).await {
        SubmitOutcome::Replied(_) => {}
        SubmitOutcome::Ignored(IgnoreReason::Blank) => bail!("Message is empty"),
        SubmitOutcome::Ignored(IgnoreReason::ReplyPending) => bail!("A reply is already pending"),
    }

    let messages = controller.messages();
    let output = match cli.output {
        OutputFormat::Text => ConsoleFormatter::format(&messages),
        OutputFormat::Json => ConsoleFormatter::format_json(&messages),
    };
    println!("{}", output);

    Ok(())
}
