use super::{Component, EventResult};
use crate::event::AppKeyEvent;
use crate::keybindings::KeyBinding;
use crate::state::AppState;
use crate::util::styles::{HELP_COLOR, NEGATIVE_COLOR};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

#[derive(Debug, Default)]
pub struct StatusBar;

fn first(bindings: &[KeyBinding]) -> &str {
    bindings.first().map_or("", KeyBinding::text)
}

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn help_text(state: &AppState) -> String {
        let kb = &state.keybindings;
        format!(
            "{}/{}: move | {}: select | {}: clear | {}/{}: panel | {}: reload | {}: quit",
            first(&kb.navigation.down),
            first(&kb.navigation.up),
            first(&kb.navigation.confirm),
            first(&kb.list.deselect),
            first(&kb.list.toggle_tablet),
            first(&kb.list.toggle_desktop),
            first(&kb.global.reload),
            first(&kb.global.quit),
        )
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: &AppKeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let content = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(NEGATIVE_COLOR)),
                Span::raw(error),
            ])
        } else {
            Line::from(Span::styled(
                Self::help_text(state),
                Style::default().fg(HELP_COLOR),
            ))
        };

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_text_uses_bindings() {
        let mut state = AppState::default();
        state.keybindings.global.reload = vec!["f5".into()];
        let text = StatusBar::help_text(&state);
        assert!(text.starts_with("j/k: move"));
        assert!(text.contains("f5: reload"));
        assert!(text.contains("t/d: panel"));
    }
}
