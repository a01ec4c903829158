//! TUI application — main loop
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)                  submit task (tokio::spawn)
//!   ├─ crossterm EventStream               └─ controller.submit(text)
//!   ├─ event_rx (TuiEvent)  <── ChannelNotifier ──┘
//!   └─ tick_interval
//! ```

use super::event::TuiEvent;
use super::keys::{Action, KeyHandler};
use super::state::TuiState;
use super::widgets::{
    MainLayout, conversation::ConversationWidget, header::HeaderWidget, input::InputWidget,
    status_bar::StatusBarWidget, typing::TypingWidget,
};
use assistant_application::{ChatController, SubmitOutcome};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Full-screen chat window
pub struct TuiApp {
    controller: Arc<ChatController>,
    event_rx: mpsc::UnboundedReceiver<TuiEvent>,
}

impl TuiApp {
    /// `event_rx` must be the receiving end of the [`ChannelNotifier`]
    /// installed on `controller`.
    ///
    /// [`ChannelNotifier`]: super::ChannelNotifier
    pub fn new(controller: Arc<ChatController>, event_rx: mpsc::UnboundedReceiver<TuiEvent>) -> Self {
        Self {
            controller,
            event_rx,
        }
    }

    /// Run the TUI main loop until the user quits
    pub async fn run(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let mut state = TuiState::new(self.controller.messages());
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(400));
        info!("Chat window opened");

        loop {
            terminal.draw(|frame| render(frame, &state))?;

            if state.should_quit {
                break;
            }

            tokio::select! {
                // Terminal events (keyboard, resize)
                Some(Ok(term_event)) = event_stream.next() => {
                    self.handle_terminal_event(&mut state, term_event);
                }

                // Controller notifications
                Some(event) = self.event_rx.recv() => {
                    state.apply(event);
                }

                // Typing animation
                _ = tick.tick() => {
                    state.tick();
                }
            }
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        info!("Chat window closed");

        Ok(())
    }

    fn handle_terminal_event(&self, state: &mut TuiState, event: Event) {
        let Event::Key(key) = event else {
            return;
        };

        match KeyHandler::handle(key) {
            Action::Submit => {
                if let Some(text) = state.take_submission() {
                    self.spawn_submit(text);
                }
            }
            action => state.perform(action),
        }
    }

    fn spawn_submit(&self, text: String) {
        let controller = Arc::clone(&self.controller);
        tokio::spawn(async move {
            if let SubmitOutcome::Ignored(reason) = controller.submit(&text).await {
                debug!("Submission ignored: {:?}", reason);
            }
        });
    }
}

/// Render all widgets
fn render(frame: &mut ratatui::Frame, state: &TuiState) {
    let layout = MainLayout::compute(frame.area());

    frame.render_widget(HeaderWidget::new(state), layout.header);
    frame.render_widget(ConversationWidget::new(state), layout.conversation);
    frame.render_widget(TypingWidget::new(state), layout.typing);
    frame.render_widget(InputWidget::new(state), layout.input);
    frame.render_widget(StatusBarWidget::new(state), layout.status_bar);
}
