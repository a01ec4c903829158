//! Conversation widget — message history
//!
//! Each message is one rendering unit ([`MessageView`]): a role label with
//! the local time, then the content. User messages sit on the right,
//! assistant messages on the left.

use crate::tui::state::TuiState;
use assistant_domain::{Message, Role};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Rendering unit for a single message
pub struct MessageView<'a> {
    message: &'a Message,
}

impl<'a> MessageView<'a> {
    pub fn new(message: &'a Message) -> Self {
        Self { message }
    }

    fn color(&self) -> Color {
        match self.message.role() {
            Role::User => Color::Cyan,
            Role::Assistant => Color::Green,
        }
    }

    fn label(&self) -> &'static str {
        match self.message.role() {
            Role::User => "You",
            Role::Assistant => "Assistant",
        }
    }

    pub fn lines(&self) -> Vec<Line<'a>> {
        let alignment = if self.message.is_user() {
            Alignment::Right
        } else {
            Alignment::Left
        };
        let time = self
            .message
            .timestamp()
            .with_timezone(&chrono::Local)
            .format("%H:%M")
            .to_string();

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    self.label(),
                    Style::default()
                        .fg(self.color())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" {}", time), Style::default().fg(Color::DarkGray)),
            ])
            .alignment(alignment),
        ];

        for content_line in self.message.content().lines() {
            lines.push(Line::from(content_line).alignment(alignment));
        }
        lines.push(Line::from(""));
        lines
    }
}

pub struct ConversationWidget<'a> {
    state: &'a TuiState,
}

impl<'a> ConversationWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn format_messages(&self) -> Text<'a> {
        let lines: Vec<Line> = self
            .state
            .messages
            .iter()
            .flat_map(|message| MessageView::new(message).lines())
            .collect();
        Text::from(lines)
    }
}

impl<'a> Widget for ConversationWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = self.format_messages();
        let visible_height = area.height.saturating_sub(2); // borders
        let content_width = area.width.saturating_sub(2); // borders

        // Measured without the block so line_count is pure content lines.
        let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });
        let total_lines = u16::try_from(paragraph.line_count(content_width)).unwrap_or(u16::MAX);

        // scroll_offset=0 means "show bottom"
        let scroll = if total_lines > visible_height {
            let max_scroll = total_lines - visible_height;
            let offset = u16::try_from(self.state.scroll_offset)
                .unwrap_or(u16::MAX)
                .min(max_scroll);
            max_scroll - offset
        } else {
            0
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Conversation ")
            .style(Style::default().fg(Color::White));

        paragraph.block(block).scroll((scroll, 0)).render(area, buf);
    }
}
