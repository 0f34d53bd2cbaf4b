//! Common styling utilities for TUI components

use covid_tracker_core::Metric;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Standard color for the selected row and active switches
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Standard color for help and secondary text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for headers
pub const HEADER_COLOR: Color = Color::Cyan;

/// Color for recovered counts
pub const POSITIVE_COLOR: Color = Color::Green;

/// Color for death counts and errors
pub const NEGATIVE_COLOR: Color = Color::Red;

/// Color for hyperlinks
pub const LINK_COLOR: Color = Color::Blue;

/// Get the label color for a metric (recovered green, deaths red, confirmed plain).
pub fn metric_color(metric: Metric) -> Option<Color> {
    match metric {
        Metric::Confirmed => None,
        Metric::Recovered => Some(POSITIVE_COLOR),
        Metric::Deaths => Some(NEGATIVE_COLOR),
    }
}

/// Bold label style for a metric.
pub fn metric_title_style(metric: Metric) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    match metric_color(metric) {
        Some(color) => style.fg(color),
        None => style,
    }
}

/// Style for a location row.
pub fn row_style(selected: bool, under_cursor: bool) -> Style {
    let mut style = Style::default();
    if selected {
        style = style.fg(FOCUS_COLOR).add_modifier(Modifier::BOLD);
    }
    if under_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}

/// Create a bordered block with a header-coloured title.
///
/// # Example
/// ```ignore
/// let block = titled_block(" Total ");
/// frame.render_widget(Paragraph::new("...").block(block), area);
/// ```
pub fn titled_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(Line::from(title.to_string()).fg(HEADER_COLOR).bold())
}
