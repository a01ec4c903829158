//! Key bindings
//!
//! The chat window has a single input mode: printable keys edit the input
//! box, navigation keys scroll the conversation.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User action derived from key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Insert character at the cursor
    InsertChar(char),
    /// Delete character before the cursor (Backspace)
    DeleteBackward,
    /// Delete character under the cursor (Delete)
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorStart,
    CursorEnd,
    /// Send the input box contents
    Submit,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    /// Quit application
    Quit,
    /// No action
    None,
}

/// Maps key events to actions
pub struct KeyHandler;

impl KeyHandler {
    pub fn handle(key: KeyEvent) -> Action {
        if key.kind == KeyEventKind::Release {
            return Action::None;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => Action::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

            (KeyCode::Enter, _) => Action::Submit,

            (KeyCode::Backspace, _) => Action::DeleteBackward,
            (KeyCode::Delete, _) => Action::DeleteForward,
            (KeyCode::Left, _) => Action::CursorLeft,
            (KeyCode::Right, _) => Action::CursorRight,
            (KeyCode::Home, _) => Action::CursorStart,
            (KeyCode::End, _) => Action::CursorEnd,
            (KeyCode::Char('a'), KeyModifiers::CONTROL) => Action::CursorStart,
            (KeyCode::Char('e'), KeyModifiers::CONTROL) => Action::CursorEnd,

            (KeyCode::Up, _) => Action::ScrollUp,
            (KeyCode::Down, _) => Action::ScrollDown,
            (KeyCode::PageUp, _) => Action::PageUp,
            (KeyCode::PageDown, _) => Action::PageDown,

            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::InsertChar(c),

            _ => Action::None,
        }
    }
}
