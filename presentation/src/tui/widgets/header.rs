//! Header widget — title and connection state

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderWidget<'a> {
    state: &'a TuiState,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (status, status_color) = if self.state.awaiting_reply {
            ("Typing…", Color::Yellow)
        } else {
            ("Online", Color::Green)
        };

        let count = self.state.messages.len();
        let noun = if count == 1 { "message" } else { "messages" };

        let line = Line::from(vec![
            Span::styled("◉ ", Style::default().fg(status_color)),
            Span::styled(
                status,
                Style::default()
                    .fg(status_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(
                format!("{count} {noun}"),
                Style::default().fg(Color::White),
            ),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" AI Customer Assistant ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(line).block(block).render(area, buf);
    }
}
