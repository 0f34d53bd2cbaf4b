//! Terminal input types.
//!
//! Key events are flattened into [`AppKeyEvent`] so keybinding matching does
//! not depend on crossterm's modifier bitflags, and mouse events are reduced
//! to the few gestures the list panel reacts to.

pub use crossterm::event::KeyCode;
use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Unified key event.
#[derive(Debug, Clone)]
pub struct AppKeyEvent {
    pub code: KeyCode,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl AppKeyEvent {
    /// Plain key press with no modifiers.
    pub fn plain(code: KeyCode) -> Self {
        Self {
            code,
            ctrl: false,
            alt: false,
            shift: false,
        }
    }
}

impl From<crossterm::event::KeyEvent> for AppKeyEvent {
    fn from(event: crossterm::event::KeyEvent) -> Self {
        Self {
            code: event.code,
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            alt: event.modifiers.contains(KeyModifiers::ALT),
            shift: event.modifiers.contains(KeyModifiers::SHIFT),
        }
    }
}

/// Mouse gestures the UI handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMouseEvent {
    Click { column: u16, row: u16 },
    ScrollUp { column: u16, row: u16 },
    ScrollDown { column: u16, row: u16 },
}

impl AppMouseEvent {
    /// Convert a crossterm mouse event, dropping gestures we ignore.
    pub fn from_crossterm(event: MouseEvent) -> Option<Self> {
        let (column, row) = (event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Self::Click { column, row }),
            MouseEventKind::ScrollUp => Some(Self::ScrollUp { column, row }),
            MouseEventKind::ScrollDown => Some(Self::ScrollDown { column, row }),
            _ => None,
        }
    }

    pub fn position(&self) -> (u16, u16) {
        match *self {
            Self::Click { column, row }
            | Self::ScrollUp { column, row }
            | Self::ScrollDown { column, row } => (column, row),
        }
    }
}
