//! Input widget — single-line text box
//!
//! Greyed out with a hint and no cursor while a reply is pending.

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const PROMPT: &str = "> ";
const PLACEHOLDER: &str = "Type your message...";
const DISABLED_HINT: &str = "Waiting for the assistant to reply...";

pub struct InputWidget<'a> {
    state: &'a TuiState,
}

impl<'a> InputWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn active_line(&self) -> Line<'a> {
        let color = Color::Green;
        let cursor_style = Style::default().fg(Color::Black).bg(color);
        let prompt = Span::styled(
            PROMPT,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        );

        let text = self.state.input.as_str();
        if text.is_empty() {
            return Line::from(vec![
                prompt,
                Span::styled(" ", cursor_style),
                Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)),
            ]);
        }

        let cursor = self.state.cursor_pos.min(text.len());
        let (before, after) = text.split_at(cursor);
        let mut spans = vec![prompt, Span::raw(before)];

        match after.chars().next() {
            // Cursor at end of line: block cursor on a space
            None => spans.push(Span::styled(" ", cursor_style)),
            Some(ch) => {
                let (under, rest) = after.split_at(ch.len_utf8());
                spans.push(Span::styled(under, cursor_style));
                if !rest.is_empty() {
                    spans.push(Span::raw(rest));
                }
            }
        }

        Line::from(spans)
    }

    fn disabled_line(&self) -> Line<'a> {
        let style = Style::default().fg(Color::DarkGray);
        Line::from(vec![
            Span::styled(PROMPT, style),
            Span::styled(DISABLED_HINT, style.add_modifier(Modifier::ITALIC)),
        ])
    }
}

impl<'a> Widget for InputWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let enabled = self.state.input_enabled();

        let border_style = if enabled {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Message ")
            .style(border_style);

        let line = if enabled {
            self.active_line()
        } else {
            self.disabled_line()
        };

        // Keep the cursor inside the box for long input (display columns)
        let inner_width = usize::from(area.width.saturating_sub(2));
        let before = &self.state.input[..self.state.cursor_pos.min(self.state.input.len())];
        let cursor_col = Span::raw(PROMPT).width() + Span::raw(before).width();
        let scroll_x = if enabled && cursor_col >= inner_width {
            cursor_col + 1 - inner_width
        } else {
            0
        };

        Paragraph::new(line)
            .block(block)
            .scroll((0, u16::try_from(scroll_x).unwrap_or(u16::MAX)))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::keys::Action;
    use crate::tui::widgets::test_support::contains;

    fn render(state: &TuiState, width: u16) -> Buffer {
        let area = Rect::new(0, 0, width, 3);
        let mut buf = Buffer::empty(area);
        InputWidget::new(state).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_placeholder_when_empty() {
        let state = TuiState::new(Vec::new());
        let buf = render(&state, 50);
        assert!(contains(&buf, "> "));
        assert!(contains(&buf, PLACEHOLDER));
    }

    #[test]
    fn test_shows_text_with_cursor() {
        let mut state = TuiState::new(Vec::new());
        for c in "hello".chars() {
            state.perform(Action::InsertChar(c));
        }
        state.perform(Action::CursorLeft);

        let buf = render(&state, 50);
        assert!(contains(&buf, "> hello"));
        // cursor cell is highlighted: 1 border + 2 prompt + 4 chars
        assert_eq!(buf[(7, 1)].symbol(), "o");
        assert_eq!(buf[(7, 1)].bg, Color::Green);
    }

    #[test]
    fn test_disabled_while_pending() {
        let mut state = TuiState::new(Vec::new());
        for c in "draft".chars() {
            state.perform(Action::InsertChar(c));
        }
        state.awaiting_reply = true;

        let buf = render(&state, 60);
        assert!(contains(&buf, DISABLED_HINT));
        assert!(!contains(&buf, "draft"));
        assert!(
            (0..60).all(|x| buf[(x, 1)].bg != Color::Green),
            "no cursor while disabled"
        );
    }

    #[test]
    fn test_long_input_scrolls_to_cursor() {
        let mut state = TuiState::new(Vec::new());
        for c in "abcdefghijklmnopqrstuvwxyz".chars() {
            state.perform(Action::InsertChar(c));
        }

        let buf = render(&state, 20);
        assert!(contains(&buf, "xyz"));
        assert!(!contains(&buf, "> abc"));
    }

    #[test]
    fn test_wide_input_keeps_cursor_in_box() {
        let mut state = TuiState::new(Vec::new());
        for c in "日本語の商品を見せてね".chars() {
            state.perform(Action::InsertChar(c));
        }

        // 11 double-width chars overflow an 18-column inner area
        let buf = render(&state, 20);
        assert!(
            (1..19).any(|x| buf[(x, 1)].bg == Color::Green),
            "cursor visible inside the borders"
        );
        assert!(contains(&buf, "ね"));
    }
}
