//! Loading placeholder.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::util::styles::HELP_COLOR;

const FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Glyph for animation step `tick`.
pub fn spinner_frame(tick: usize) -> &'static str {
    FRAMES[tick % FRAMES.len()]
}

/// A centered spinning glyph with a short label.
#[derive(Debug, Clone, Copy)]
pub struct Spinner<'a> {
    tick: usize,
    label: &'a str,
}

impl<'a> Spinner<'a> {
    pub fn new(tick: usize) -> Self {
        Self {
            tick,
            label: "Loading",
        }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }
}

impl Widget for Spinner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        // Vertically center the single line
        let line_area = Rect {
            y: area.y + area.height / 2,
            height: 1,
            ..area
        };
        let line = Line::from(vec![
            Span::raw(spinner_frame(self.tick)).bold(),
            Span::raw(" "),
            Span::styled(self.label, Style::default().fg(HELP_COLOR)),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(line_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_cycle() {
        assert_eq!(spinner_frame(0), spinner_frame(FRAMES.len()));
        assert_ne!(spinner_frame(0), spinner_frame(1));
    }

    #[test]
    fn test_renders_label_centered() {
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        Spinner::new(0).render(area, &mut buf);

        let middle: String = (0..area.width)
            .map(|x| buf[(x, 1)].symbol().to_string())
            .collect();
        assert!(middle.contains("Loading"));
        assert!(middle.contains(spinner_frame(0)));
    }
}
