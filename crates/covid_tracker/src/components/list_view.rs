//! The location list panel.
//!
//! Shows the brand header, the aggregate totals, one row per location and the
//! credit links. The panel never owns the data or the selection: both arrive
//! as [`ListViewProps`] every frame, and clicks are reported back through
//! [`SelectionHandler`]. What it does own is its visibility per breakpoint,
//! the keyboard cursor and the scroll offset of the rows.

use covid_tracker_core::{
    Breakpoint, Location, LocationId, ResponsiveFlags, RowIndex, ScrollState, Totals,
    format_count, is_selected, scroll_to_selected, toggle,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};

use super::lists::{apply_list_move, list_move_for_key};
use super::spinner::Spinner;
use super::{Component, EventResult};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::data::settings_data::Settings;
use crate::event::{AppKeyEvent, AppMouseEvent};
use crate::state::AppState;
use crate::util::styles::{
    FOCUS_COLOR, HELP_COLOR, LINK_COLOR, metric_title_style, row_style, titled_block,
};

pub const BRAND_TITLE: &str = "COVID-19 Tracker";
pub const BRAND_SUBTITLE: &str = "by Zinglecode";
pub const CREDIT_LINKS: [(&str, &str); 2] = [
    (
        "Project Github",
        "https://github.com/potchangelo/covid-19-tracker",
    ),
    (
        "Data API Github",
        "https://github.com/ExpDev07/coronavirus-tracker-api",
    ),
];
pub const COPYRIGHT: &str = "© 2020 Zinglecode";

/// Columns taken by the show/hide switch.
const SWITCH_WIDTH: u16 = 3;
/// Rows moved per mouse wheel notch.
const WHEEL_STEP: isize = 3;

/// Inputs handed down by the owner of the data.
#[derive(Debug, Clone, Copy)]
pub struct ListViewProps<'a> {
    pub locations: &'a [Location],
    pub selected: Option<&'a Location>,
    pub is_loading: bool,
    /// Animation step for the spinner
    pub tick: usize,
}

impl<'a> From<&'a AppState> for ListViewProps<'a> {
    fn from(state: &'a AppState) -> Self {
        Self {
            locations: &state.locations,
            selected: state.selected.as_ref(),
            is_loading: state.is_loading,
            tick: state.tick,
        }
    }
}

/// Where the panel, its switch and the main view went in the last frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Arrangement {
    breakpoint: Breakpoint,
    panel: Option<Rect>,
    switch: Rect,
}

/// What a key press asks the panel to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    ToggleTablet,
    ToggleDesktop,
    Deselect,
    Confirm,
    Move(super::lists::ListMove),
}

#[derive(Debug, Default)]
pub struct ListView {
    flags: ResponsiveFlags,
    scroll: ScrollState,
    cursor: usize,
    /// Selection the scroll step last ran for; `None` before the first frame
    scrolled_for: Option<Option<LocationId>>,
    arrangement: Option<Arrangement>,
    /// Row area of the list, set only while rows are on screen
    list_area: Option<Rect>,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flags(&self) -> ResponsiveFlags {
        self.flags
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll.offset
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True if the panel was on screen in the last frame.
    pub fn is_panel_shown(&self) -> bool {
        self.arrangement.is_some_and(|a| a.panel.is_some())
    }

    /// Split `area` between the panel and the main view for this frame.
    ///
    /// Returns the area left for the main view. On tablets an open panel
    /// floats over the main view instead of taking space from it.
    pub fn arrange(&mut self, area: Rect, settings: &Settings) -> Rect {
        let breakpoint = Breakpoint::for_width(area.width, settings.tablet_breakpoint);
        let open = self.flags.is_open(breakpoint);

        let (panel, switch_column, main) = if breakpoint == Breakpoint::Desktop && open {
            let [panel, switch_column, main] = Layout::horizontal([
                Constraint::Length(settings.panel_width),
                Constraint::Length(SWITCH_WIDTH),
                Constraint::Min(0),
            ])
            .areas(area);
            (Some(panel), switch_column, main)
        } else {
            let [switch_column, main] =
                Layout::horizontal([Constraint::Length(SWITCH_WIDTH), Constraint::Min(0)])
                    .areas(area);
            let overlay = (breakpoint == Breakpoint::Tablet && open).then(|| Rect {
                width: settings.panel_width.min(main.width),
                ..main
            });
            (overlay, switch_column, main)
        };

        self.arrangement = Some(Arrangement {
            breakpoint,
            panel,
            switch: Rect {
                height: switch_column.height.min(3),
                ..switch_column
            },
        });
        main
    }

    /// A click on a location row.
    ///
    /// Always closes the tablet overlay, then selects, switches or clears the
    /// selection depending on what was selected before.
    fn click_item(&mut self, id: LocationId, state: &mut AppState) {
        self.flags.close_tablet();
        toggle(state.selected.as_ref(), &id).dispatch(state);
    }

    fn viewport_height(&self) -> usize {
        self.list_area.map_or(1, |a| usize::from(a.height).max(1))
    }

    fn key_action(key: &AppKeyEvent, kb: &KeybindingsConfig) -> Option<KeyAction> {
        if KeybindingsConfig::matches(key, &kb.list.toggle_tablet) {
            Some(KeyAction::ToggleTablet)
        } else if KeybindingsConfig::matches(key, &kb.list.toggle_desktop) {
            Some(KeyAction::ToggleDesktop)
        } else if KeybindingsConfig::matches(key, &kb.list.deselect) {
            Some(KeyAction::Deselect)
        } else if KeybindingsConfig::matches(key, &kb.navigation.confirm) {
            Some(KeyAction::Confirm)
        } else {
            list_move_for_key(key, &kb.navigation).map(KeyAction::Move)
        }
    }

    /// Runs once per selection change, after the rows are laid out.
    fn scroll_selection_into_view(
        &mut self,
        selected: Option<&Location>,
        rows: &RowIndex,
        height: usize,
        margin: usize,
    ) {
        let current = selected.map(|l| l.id.clone());
        if self.scrolled_for.as_ref() == Some(&current) {
            return;
        }

        if scroll_to_selected(selected, rows, height, &mut self.scroll, margin) {
            tracing::debug!(offset = self.scroll.offset, "Scrolled selection into view");
        }
        self.scrolled_for = Some(current);
    }

    fn render_switch(frame: &mut Frame, area: Rect, open: bool) {
        // Points at the panel when it is open, away from it when closed
        let (glyph, style) = if open {
            ("«", Style::default().fg(FOCUS_COLOR).bold())
        } else {
            ("»", Style::default().fg(HELP_COLOR))
        };
        let switch = Paragraph::new(Span::styled(glyph, style))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(style));
        frame.render_widget(switch, area);
    }

    fn render_panel(&mut self, frame: &mut Frame, area: Rect, props: &ListViewProps, margin: usize) {
        let [brand, stat, list, credit] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(3),
            Constraint::Length(6),
        ])
        .areas(area);

        frame.render_widget(Clear, area);
        Self::render_brand(frame, brand);
        Self::render_totals(frame, stat, props);
        self.render_locations(frame, list, props, margin);
        Self::render_credit(frame, credit);
    }

    fn render_brand(frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                BRAND_TITLE,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(BRAND_SUBTITLE, Style::default().fg(HELP_COLOR))),
        ];
        let brand = Paragraph::new(lines).block(Block::default().padding(Padding::new(1, 1, 1, 0)));
        frame.render_widget(brand, area);
    }

    fn render_totals(frame: &mut Frame, area: Rect, props: &ListViewProps) {
        let block = titled_block(" Total ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if props.is_loading {
            frame.render_widget(Spinner::new(props.tick), inner);
            return;
        }

        let totals = Totals::from_locations(props.locations);
        let lines: Vec<Line> = totals
            .iter()
            .map(|(metric, count)| {
                aligned_row(
                    metric.title(),
                    metric_title_style(metric),
                    format_count(count),
                    Style::default(),
                    inner.width,
                )
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_locations(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        props: &ListViewProps,
        margin: usize,
    ) {
        let block = titled_block(" Locations ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if props.is_loading {
            self.list_area = None;
            self.scroll_selection_into_view(props.selected, &RowIndex::default(), 0, margin);
            frame.render_widget(Spinner::new(props.tick), inner);
            return;
        }

        let rows = RowIndex::build(props.locations);
        let height = usize::from(inner.height);
        self.scroll.clamp(rows.len(), height);
        self.cursor = self.cursor.min(rows.len().saturating_sub(1));
        self.scroll_selection_into_view(props.selected, &rows, height, margin);
        self.list_area = Some(inner);

        if props.locations.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "No locations loaded.",
                Style::default().fg(HELP_COLOR),
            )));
            frame.render_widget(empty, inner);
            return;
        }

        let lines: Vec<Line> = props
            .locations
            .iter()
            .enumerate()
            .skip(self.scroll.offset)
            .take(height)
            .map(|(idx, location)| {
                let style = row_style(is_selected(props.selected, location), idx == self.cursor);
                aligned_row(
                    location.title(),
                    style.add_modifier(Modifier::BOLD),
                    format_count(location.latest.confirmed),
                    style,
                    inner.width,
                )
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_credit(frame: &mut Frame, area: Rect) {
        let link_style = Style::default()
            .fg(LINK_COLOR)
            .add_modifier(Modifier::UNDERLINED);
        let mut lines = Vec::new();
        for (label, url) in CREDIT_LINKS {
            lines.push(Line::from(Span::styled(label, link_style)));
            lines.push(Line::from(Span::styled(
                url.trim_start_matches("https://"),
                Style::default().fg(HELP_COLOR),
            )));
        }
        lines.push(Line::from(Span::raw(COPYRIGHT)));

        let credit = Paragraph::new(lines).block(Block::default().padding(Padding::new(1, 1, 1, 0)));
        frame.render_widget(credit, area);
    }
}

impl Component for ListView {
    fn handle_key(&mut self, key: &AppKeyEvent, state: &mut AppState) -> EventResult {
        let Some(action) = Self::key_action(key, &state.keybindings) else {
            return EventResult::NotHandled;
        };

        match action {
            KeyAction::ToggleTablet => self.flags.toggle_tablet(),
            KeyAction::ToggleDesktop => self.flags.toggle_desktop(),
            KeyAction::Deselect => match state.selected.as_ref().map(|s| s.id.clone()) {
                Some(id) => self.click_item(id, state),
                None => return EventResult::NotHandled,
            },
            _ if !self.is_panel_shown() || state.is_loading => return EventResult::NotHandled,
            KeyAction::Confirm => {
                if let Some(id) = state.locations.get(self.cursor).map(|l| l.id.clone()) {
                    self.click_item(id, state);
                }
            }
            KeyAction::Move(mv) => {
                let height = self.viewport_height();
                if apply_list_move(mv, &mut self.cursor, state.locations.len(), height) {
                    self.scroll.ensure_visible(self.cursor, height);
                }
            }
        }
        EventResult::Handled
    }

    fn handle_mouse(&mut self, mouse: AppMouseEvent, state: &mut AppState) -> EventResult {
        let Some(arrangement) = self.arrangement else {
            return EventResult::NotHandled;
        };
        let (column, row) = mouse.position();
        let position = Position::new(column, row);
        let in_list = self.list_area.filter(|a| a.contains(position));

        match mouse {
            AppMouseEvent::Click { .. } => {
                if arrangement.switch.contains(position) {
                    self.flags.toggle(arrangement.breakpoint);
                    return EventResult::Handled;
                }
                if let Some(list) = in_list {
                    let idx = self.scroll.offset + usize::from(row - list.y);
                    if let Some(id) = state.locations.get(idx).map(|l| l.id.clone()) {
                        self.cursor = idx;
                        self.click_item(id, state);
                    }
                    return EventResult::Handled;
                }
                if arrangement.panel.is_some_and(|p| p.contains(position)) {
                    return EventResult::Handled;
                }
                EventResult::NotHandled
            }
            AppMouseEvent::ScrollUp { .. } | AppMouseEvent::ScrollDown { .. } => {
                if in_list.is_none() {
                    return EventResult::NotHandled;
                }
                let delta = if matches!(mouse, AppMouseEvent::ScrollUp { .. }) {
                    -WHEEL_STEP
                } else {
                    WHEEL_STEP
                };
                self.scroll
                    .scroll_by(delta, state.locations.len(), self.viewport_height());
                EventResult::Handled
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        self.arrange(area, &state.settings);
        let Some(arrangement) = self.arrangement else {
            return;
        };

        let open = arrangement.panel.is_some();
        Self::render_switch(frame, arrangement.switch, open);

        match arrangement.panel {
            Some(panel) => {
                let props = ListViewProps::from(state);
                self.render_panel(frame, panel, &props, state.settings.scroll_margin);
            }
            None => self.list_area = None,
        }
    }
}

/// A line with `title` on the left and `value` flush right across `width` columns.
///
/// The title is truncated so at least one space separates it from the value.
pub fn aligned_row(
    title: String,
    title_style: Style,
    value: String,
    value_style: Style,
    width: u16,
) -> Line<'static> {
    let width = usize::from(width);
    let value_len = value.chars().count();
    let title: String = title
        .chars()
        .take(width.saturating_sub(value_len + 1))
        .collect();
    let pad = width
        .saturating_sub(title.chars().count() + value_len)
        .max(1);

    Line::from(vec![
        Span::styled(title, title_style),
        Span::styled(" ".repeat(pad), value_style),
        Span::styled(value, value_style),
    ])
}
