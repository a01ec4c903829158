//! Typing indicator — shown only while a reply is pending

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Paragraph, Widget},
};

pub struct TypingWidget<'a> {
    state: &'a TuiState,
}

impl<'a> TypingWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for TypingWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.state.awaiting_reply {
            return;
        }

        let dots = ".".repeat(self.state.typing_frame + 1);
        let text = Span::styled(
            format!(" Assistant is typing{}", dots),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        );
        Paragraph::new(text).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::test_support::contains;

    #[test]
    fn test_visible_only_while_pending() {
        let mut state = TuiState::new(Vec::new());
        let area = Rect::new(0, 0, 40, 1);

        let mut buf = Buffer::empty(area);
        TypingWidget::new(&state).render(area, &mut buf);
        assert!(!contains(&buf, "typing"));

        state.awaiting_reply = true;
        state.typing_frame = 2;
        let mut buf = Buffer::empty(area);
        TypingWidget::new(&state).render(area, &mut buf);
        assert!(contains(&buf, "Assistant is typing..."));
    }
}
