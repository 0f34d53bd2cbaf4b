use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::components::{
    Component, list_view::ListView, location_detail::LocationDetail,
    status_bar::StatusBar,
};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::{AppKeyEvent, AppMouseEvent};
use crate::state::AppState;
use crate::worker::{LoadRequest, LoadResponse, LoadWorker};

pub struct App {
    state: AppState,
    list_view: ListView,
    detail: LocationDetail,
    status_bar: StatusBar,
    worker: LoadWorker,
    /// When the spinner last advanced
    last_tick: Instant,
}

impl App {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            list_view: ListView::new(),
            detail: LocationDetail::new(),
            status_bar: StatusBar::new(),
            worker: LoadWorker::new(),
            last_tick: Instant::now(),
        }
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.request_load();
        let tick_rate = Duration::from_millis(self.state.settings.tick_rate_ms.max(10));

        while !self.state.exit {
            self.poll_worker();
            terminal.draw(|frame| self.draw(frame))?;

            let timeout = tick_rate.saturating_sub(self.last_tick.elapsed());
            if event::poll(timeout)? {
                self.handle_event(event::read()?);
            }
            self.on_tick(Instant::now(), tick_rate);
        }

        self.worker.shutdown();
        Ok(())
    }

    /// Advance the spinner once `tick_rate` has passed since the last step,
    /// however many input events arrived in between.
    fn on_tick(&mut self, now: Instant, tick_rate: Duration) {
        if now.saturating_duration_since(self.last_tick) < tick_rate {
            return;
        }
        self.last_tick = now;
        if self.state.is_loading {
            self.state.tick = self.state.tick.wrapping_add(1);
        }
    }

    /// Ask the worker for a fresh copy of the payload.
    fn request_load(&mut self) {
        let path = self.state.data_file.clone();
        if self.worker.send(LoadRequest::Load { path }) {
            self.state.begin_loading();
        } else {
            self.state.set_error("Background loader is not running");
        }
    }

    /// Apply any finished loads.
    fn poll_worker(&mut self) {
        while let Some(response) = self.worker.try_recv() {
            self.apply_response(response);
        }
    }

    fn apply_response(&mut self, response: LoadResponse) {
        match response {
            LoadResponse::Loaded { locations } => self.state.finish_loading(locations),
            LoadResponse::Error(msg) => self.state.fail_loading(msg),
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Panels
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        // The main view goes first so a tablet overlay can draw on top of it
        let main = self.list_view.arrange(chunks[0], &self.state.settings);
        self.detail.render(frame, main, &self.state);
        self.list_view.render(frame, chunks[0], &self.state);

        self.status_bar.render(frame, chunks[1], &self.state);
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(&AppKeyEvent::from(key_event));
            }
            Event::Mouse(mouse_event) => {
                if let Some(mouse) = AppMouseEvent::from_crossterm(mouse_event) {
                    self.list_view.handle_mouse(mouse, &mut self.state);
                }
            }
            _ => {}
        }
    }

    fn handle_key_event(&mut self, key: &AppKeyEvent) {
        let kb = &self.state.keybindings;
        let quit = KeybindingsConfig::matches(key, &kb.global.quit);
        let reload = KeybindingsConfig::matches(key, &kb.global.reload);
        let dismiss = KeybindingsConfig::matches(key, &kb.list.deselect);

        if quit {
            self.state.exit = true;
            return;
        }
        if reload {
            if !self.state.is_loading {
                self.request_load();
            }
            return;
        }
        if dismiss {
            self.state.clear_error();
        }

        self.list_view.handle_key(key, &mut self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyCode;
    use covid_tracker_core::{Latest, Location};
    use std::path::PathBuf;

    fn test_app() -> App {
        let mut state = AppState::default();
        state.data_file = PathBuf::from("unused.json");
        App::new(state)
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        app.handle_key_event(&AppKeyEvent::plain(KeyCode::Char('q')));
        assert!(app.state.exit);

        let mut app = test_app();
        let ctrl_c = AppKeyEvent {
            ctrl: true,
            ..AppKeyEvent::plain(KeyCode::Char('c'))
        };
        app.handle_key_event(&ctrl_c);
        assert!(app.state.exit);
    }

    #[test]
    fn test_responses_update_loading_state() {
        let mut app = test_app();
        app.state.begin_loading();

        app.apply_response(LoadResponse::Loaded {
            locations: vec![Location::new(1, "Japan", "", Latest::default())],
        });
        assert!(!app.state.is_loading);
        assert_eq!(app.state.locations.len(), 1);

        app.state.begin_loading();
        app.apply_response(LoadResponse::Error("bad payload".into()));
        assert!(!app.state.is_loading);
        assert_eq!(app.state.locations.len(), 1);
        assert_eq!(app.state.error_message.as_deref(), Some("bad payload"));
    }

    #[test]
    fn test_spinner_advances_on_elapsed_time() {
        let mut app = test_app();
        let rate = Duration::from_millis(100);
        let start = app.last_tick;
        app.state.begin_loading();

        // A burst of input inside one tick does not move the spinner
        for ms in [10, 40, 90] {
            app.handle_key_event(&AppKeyEvent::plain(KeyCode::Char('j')));
            app.on_tick(start + Duration::from_millis(ms), rate);
        }
        assert_eq!(app.state.tick, 0);

        app.on_tick(start + Duration::from_millis(100), rate);
        assert_eq!(app.state.tick, 1);
        app.on_tick(start + Duration::from_millis(150), rate);
        assert_eq!(app.state.tick, 1);
        app.on_tick(start + Duration::from_millis(200), rate);
        assert_eq!(app.state.tick, 2);
    }

    #[test]
    fn test_spinner_idle_when_not_loading() {
        let mut app = test_app();
        let start = app.last_tick;
        app.on_tick(start + Duration::from_secs(1), Duration::from_millis(100));
        assert_eq!(app.state.tick, 0);
    }

    #[test]
    fn test_esc_clears_error() {
        let mut app = test_app();
        app.state.set_error("oops");
        app.handle_key_event(&AppKeyEvent::plain(KeyCode::Esc));
        assert!(app.state.error_message.is_none());
    }
}
