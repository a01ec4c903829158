//! TUI widgets — ratatui components for the main layout
//!
//! Layout:
//! ┌── Header (3) ────────────────────────────────────┐
//! ├── Conversation (flex) ───────────────────────────┤
//! ├── Typing indicator (1) ──────────────────────────┤
//! ├── Input (3) ─────────────────────────────────────┤
//! └── StatusBar (1) ─────────────────────────────────┘

pub mod conversation;
pub mod header;
pub mod input;
pub mod status_bar;
pub mod typing;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

const HEADER_HEIGHT: u16 = 3;
const TYPING_HEIGHT: u16 = 1;
const INPUT_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 1;

/// Main layout regions computed from a terminal area
pub struct MainLayout {
    pub header: Rect,
    pub conversation: Rect,
    pub typing: Rect,
    pub input: Rect,
    pub status_bar: Rect,
}

impl MainLayout {
    pub fn compute(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Fill(1),
                Constraint::Length(TYPING_HEIGHT),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(area);

        Self {
            header: vertical[0],
            conversation: vertical[1],
            typing: vertical[2],
            input: vertical[3],
            status_bar: vertical[4],
        }
    }
}
