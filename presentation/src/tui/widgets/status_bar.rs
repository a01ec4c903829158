//! Status bar widget — state indicator + key hints

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

const HINTS: &str = "Enter:send  ↑/↓ PgUp/PgDn:scroll  Esc:quit";

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let (indicator, color) = if self.state.awaiting_reply {
            ("WAITING", Color::Yellow)
        } else {
            ("READY", Color::Green)
        };
        let indicator_text = format!(" {} ", indicator);
        let indicator_width = indicator_text.chars().count() as u16;
        let indicator_line = Line::from(Span::styled(
            indicator_text,
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        ));
        buf.set_line(area.x, area.y, &indicator_line, indicator_width);

        let mut right = HINTS.to_string();
        if self.state.scroll_offset > 0 {
            right = format!("↑{}  {}", self.state.scroll_offset, right);
        }
        let right_width = right.chars().count() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        if right_x > area.x + indicator_width {
            let right_line = Line::from(Span::styled(right, bg_style));
            buf.set_line(right_x, area.y, &right_line, right_width + 1);
        }
    }
}
