//! Main view: statistics for the selected location, or worldwide totals.

use covid_tracker_core::{Location, Metric, Totals, format_count};
use jiff::{Timestamp, fmt::strtime};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Padding, Paragraph},
};

use super::list_view::aligned_row;
use super::spinner::Spinner;
use super::{Component, EventResult};
use crate::event::AppKeyEvent;
use crate::state::AppState;
use crate::util::styles::{HELP_COLOR, metric_title_style, titled_block};

/// Width of the metric table inside the panel.
const TABLE_WIDTH: u16 = 36;

#[derive(Debug, Default)]
pub struct LocationDetail;

impl LocationDetail {
    pub fn new() -> Self {
        Self
    }

    /// Share of `part` in `whole` as a percentage string.
    fn share(part: u64, whole: u64) -> String {
        if whole == 0 {
            return "-".to_string();
        }
        format!("{:.1}%", part as f64 / whole as f64 * 100.0)
    }

    /// `updated` as a minute-precision UTC time.
    fn updated_label(updated: Timestamp) -> String {
        strtime::format("%Y-%m-%d %H:%M UTC", updated).unwrap_or_else(|_| updated.to_string())
    }

    fn location_lines(location: &Location, worldwide: &Totals, width: u16) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        if !location.country_code.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("Country code: {}", location.country_code),
                Style::default().fg(HELP_COLOR),
            )));
        }
        lines.push(Line::default());

        for metric in Metric::ALL {
            let count = location.latest.get(metric);
            let value = format!(
                "{}  ({} of world)",
                format_count(count),
                Self::share(count, worldwide.get(metric))
            );
            lines.push(aligned_row(
                metric.title(),
                metric_title_style(metric),
                value,
                Style::default(),
                width,
            ));
        }

        if let Some(updated) = location.last_updated {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("Last updated: {}", Self::updated_label(updated)),
                Style::default().fg(HELP_COLOR),
            )));
        }
        lines
    }

    fn worldwide_lines(totals: &Totals, count: usize, width: u16) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                format!("{} locations", format_count(count as u64)),
                Style::default().fg(HELP_COLOR),
            )),
            Line::default(),
        ];
        lines.extend(totals.iter().map(|(metric, value)| {
            aligned_row(
                metric.title(),
                metric_title_style(metric),
                format_count(value),
                Style::default(),
                width,
            )
        }));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Select a location from the list for details.",
            Style::default().fg(HELP_COLOR),
        )));
        lines
    }
}

impl Component for LocationDetail {
    fn handle_key(&mut self, _key: &AppKeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        if state.is_loading {
            frame.render_widget(Spinner::new(state.tick).label("Loading locations"), area);
            return;
        }

        let worldwide = Totals::from_locations(&state.locations);
        let (title, lines) = match &state.selected {
            Some(location) => (
                format!(" {} ", location.title()),
                Self::location_lines(location, &worldwide, TABLE_WIDTH),
            ),
            None => (
                " Worldwide ".to_string(),
                Self::worldwide_lines(&worldwide, state.locations.len(), TABLE_WIDTH),
            ),
        };

        let block = titled_block(&title).padding(Padding::uniform(1));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use covid_tracker_core::{Latest, LocationId, SelectionHandler};
    use ratatui::{Terminal, backend::TestBackend};

    fn render(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 20)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                LocationDetail::new().render(frame, area, state);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn state() -> AppState {
        let mut state = AppState::default();
        let mut italy = Location::new(
            1,
            "Italy",
            "",
            Latest {
                confirmed: 750,
                recovered: 50,
                deaths: 40,
            },
        );
        italy.country_code = "IT".to_string();
        italy.last_updated = Some("2020-03-21T06:59:11Z".parse().unwrap());
        state.finish_loading(vec![
            italy,
            Location::new(
                2,
                "Spain",
                "",
                Latest {
                    confirmed: 250,
                    recovered: 50,
                    deaths: 10,
                },
            ),
        ]);
        state
    }

    #[test]
    fn test_share() {
        assert_eq!(LocationDetail::share(1, 4), "25.0%");
        assert_eq!(LocationDetail::share(5, 0), "-");
    }

    #[test]
    fn test_updated_label() {
        let ts: Timestamp = "2020-03-21T06:59:11.315422Z".parse().unwrap();
        assert_eq!(LocationDetail::updated_label(ts), "2020-03-21 06:59 UTC");
    }

    #[test]
    fn test_worldwide_when_nothing_selected() {
        let screen = render(&state());
        assert!(screen.contains("Worldwide"));
        assert!(screen.contains("2 locations"));
        assert!(screen.contains("1,000"));
    }

    #[test]
    fn test_selected_location_details() {
        let mut state = state();
        state.on_select_item(LocationId::from(1));
        let screen = render(&state);
        assert!(screen.contains("Italy"));
        assert!(screen.contains("Country code: IT"));
        assert!(screen.contains("750  (75.0% of world)"));
        assert!(screen.contains("Last updated: 2020-03-21 06:59 UTC"));
    }

    #[test]
    fn test_loading_shows_spinner_only() {
        let mut state = state();
        state.begin_loading();
        let screen = render(&state);
        assert!(screen.contains("Loading locations"));
        assert!(!screen.contains("Worldwide"));
    }
}
