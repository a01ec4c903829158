//! TUI state
//!
//! Everything the widgets render. Mutated only by the event loop.

use super::event::TuiEvent;
use super::keys::Action;
use assistant_domain::Message;

/// Lines moved by PageUp/PageDown
const PAGE_LINES: usize = 10;
const TYPING_FRAMES: usize = 4;

pub struct TuiState {
    /// Conversation snapshot, oldest first
    pub messages: Vec<Message>,
    pub input: String,
    /// Byte offset into `input`, always on a char boundary
    pub cursor_pos: usize,
    pub awaiting_reply: bool,
    /// Lines scrolled up from the bottom (0 = latest entry visible)
    pub scroll_offset: usize,
    pub typing_frame: usize,
    pub should_quit: bool,
}

impl TuiState {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            input: String::new(),
            cursor_pos: 0,
            awaiting_reply: false,
            scroll_offset: 0,
            typing_frame: 0,
            should_quit: false,
        }
    }

    pub fn input_enabled(&self) -> bool {
        !self.awaiting_reply
    }

    /// Apply a controller notification and jump back to the latest entry.
    pub fn apply(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::MessageAppended(message) => {
                if !self.messages.iter().any(|m| m.id() == message.id()) {
                    self.messages.push(message);
                }
            }
            TuiEvent::ReplyPending(pending) => {
                self.awaiting_reply = pending;
                self.typing_frame = 0;
            }
        }
        self.scroll_offset = 0;
    }

    /// Apply every action except [`Action::Submit`], which needs the
    /// controller (see [`take_submission`](Self::take_submission)).
    pub fn perform(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ScrollUp => self.scroll_up(1),
            Action::ScrollDown => self.scroll_down(1),
            Action::PageUp => self.scroll_up(PAGE_LINES),
            Action::PageDown => self.scroll_down(PAGE_LINES),
            Action::Submit | Action::None => {}
            edit if self.input_enabled() => self.edit(edit),
            _ => {}
        }
    }

    fn edit(&mut self, action: Action) {
        match action {
            Action::InsertChar(c) => {
                self.input.insert(self.cursor_pos, c);
                self.cursor_pos += c.len_utf8();
            }
            Action::DeleteBackward => {
                if let Some((idx, _)) = self.input[..self.cursor_pos].char_indices().next_back() {
                    self.input.remove(idx);
                    self.cursor_pos = idx;
                }
            }
            Action::DeleteForward => {
                if self.cursor_pos < self.input.len() {
                    self.input.remove(self.cursor_pos);
                }
            }
            Action::CursorLeft => {
                if let Some((idx, _)) = self.input[..self.cursor_pos].char_indices().next_back() {
                    self.cursor_pos = idx;
                }
            }
            Action::CursorRight => {
                if let Some(c) = self.input[self.cursor_pos..].chars().next() {
                    self.cursor_pos += c.len_utf8();
                }
            }
            Action::CursorStart => self.cursor_pos = 0,
            Action::CursorEnd => self.cursor_pos = self.input.len(),
            _ => {}
        }
    }

    /// Take the input box contents for sending.
    ///
    /// Returns `None` (leaving the input untouched) while a reply is pending
    /// or when the input is blank.
    pub fn take_submission(&mut self) -> Option<String> {
        if !self.input_enabled() || self.input.trim().is_empty() {
            return None;
        }
        self.cursor_pos = 0;
        self.awaiting_reply = true;
        self.scroll_offset = 0;
        Some(std::mem::take(&mut self.input))
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    /// Advance the typing animation.
    pub fn tick(&mut self) {
        if self.awaiting_reply {
            self.typing_frame = (self.typing_frame + 1) % TYPING_FRAMES;
        }
    }
}
