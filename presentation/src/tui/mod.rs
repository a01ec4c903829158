//! TUI (Text User Interface) for storefront-assistant
//!
//! A full-screen chat window built on ratatui: header, conversation pane,
//! typing indicator, input box and status bar.

mod app;
mod event;
mod keys;
mod notifier;
mod state;
mod widgets;

pub use app::TuiApp;
pub use event::TuiEvent;
pub use keys::{Action, KeyHandler};
pub use notifier::ChannelNotifier;
pub use state::TuiState;
pub use widgets::{
    MainLayout, conversation::ConversationWidget, header::HeaderWidget, input::InputWidget,
    status_bar::StatusBarWidget, typing::TypingWidget,
};
