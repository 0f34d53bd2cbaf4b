pub mod list_view;
pub mod lists;
pub mod location_detail;
pub mod spinner;
pub mod status_bar;

use ratatui::Frame;

use crate::event::{AppKeyEvent, AppMouseEvent};
use crate::state::AppState;

/// Result of handling an event
#[derive(Debug, Clone, PartialEq)]
pub enum EventResult {
    /// Event was handled, continue
    Handled,
    /// Event was not handled, pass to parent
    NotHandled,
}

/// Trait for components that can handle input and render
pub trait Component {
    /// Handle a key event
    fn handle_key(&mut self, key: &AppKeyEvent, state: &mut AppState) -> EventResult;

    /// Handle a mouse gesture
    fn handle_mouse(&mut self, _mouse: AppMouseEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    /// Render the component
    fn render(&mut self, frame: &mut Frame, area: ratatui::layout::Rect, state: &AppState);
}
