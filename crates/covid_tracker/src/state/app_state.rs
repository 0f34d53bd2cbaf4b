use std::path::PathBuf;

use covid_tracker_core::{Location, LocationId, SelectionHandler};

use crate::data::keybindings_data::KeybindingsConfig;
use crate::data::settings_data::Settings;

/// Everything the panels read, owned by the app.
///
/// The list view receives the locations, the selection and the loading flag
/// from here and reports clicks back through [`SelectionHandler`].
#[derive(Debug, Default)]
pub struct AppState {
    pub locations: Vec<Location>,
    pub selected: Option<Location>,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub exit: bool,
    pub settings: Settings,
    pub keybindings: KeybindingsConfig,
    /// Payload the loader reads
    pub data_file: PathBuf,
    /// Frames drawn while loading; drives the spinner
    pub tick: usize,
}

impl AppState {
    pub fn new(settings: Settings, keybindings: KeybindingsConfig, data_file: PathBuf) -> Self {
        Self {
            settings,
            keybindings,
            data_file,
            ..Self::default()
        }
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Mark a load as in flight.
    pub fn begin_loading(&mut self) {
        self.is_loading = true;
        self.tick = 0;
    }

    /// Install freshly loaded locations.
    ///
    /// A selection survives the reload only if its id is still present, and it
    /// is refreshed with the new counts.
    pub fn finish_loading(&mut self, locations: Vec<Location>) {
        self.locations = locations;
        self.is_loading = false;
        self.clear_error();

        if let Some(id) = self.selected.as_ref().map(|s| s.id.clone()) {
            self.selected = self.find(&id).cloned();
        }
    }

    /// A load failed; keep whatever was shown before.
    pub fn fail_loading(&mut self, msg: impl Into<String>) {
        self.is_loading = false;
        self.set_error(msg);
    }

    pub fn find(&self, id: &LocationId) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == *id)
    }
}

impl SelectionHandler for AppState {
    fn on_select_item(&mut self, id: LocationId) {
        match self.find(&id).cloned() {
            Some(location) => {
                tracing::debug!(id = %id, title = %location.title(), "Location selected");
                self.selected = Some(location);
            }
            None => tracing::warn!(id = %id, "Ignoring selection of unknown location"),
        }
    }

    fn on_deselect_item(&mut self) {
        tracing::debug!("Selection cleared");
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use covid_tracker_core::Latest;

    fn loc(id: u64, country: &str, confirmed: u64) -> Location {
        Location::new(
            id,
            country,
            "",
            Latest {
                confirmed,
                ..Latest::default()
            },
        )
    }

    #[test]
    fn test_select_and_deselect() {
        let mut state = AppState::default();
        state.finish_loading(vec![loc(1, "Japan", 10), loc(2, "Italy", 20)]);

        state.on_select_item(LocationId::from(2));
        assert_eq!(state.selected.as_ref().map(|l| l.country.as_str()), Some("Italy"));

        state.on_deselect_item();
        assert!(state.selected.is_none());
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut state = AppState::default();
        state.finish_loading(vec![loc(1, "Japan", 10)]);
        state.on_select_item(LocationId::from(9));
        assert!(state.selected.is_none());
    }

    #[test]
    fn test_reload_refreshes_selection() {
        let mut state = AppState::default();
        state.finish_loading(vec![loc(1, "Japan", 10), loc(2, "Italy", 20)]);
        state.on_select_item(LocationId::from(1));

        state.begin_loading();
        assert!(state.is_loading);
        state.finish_loading(vec![loc(1, "Japan", 15)]);
        assert!(!state.is_loading);
        assert_eq!(state.selected.as_ref().map(|l| l.latest.confirmed), Some(15));

        state.finish_loading(vec![loc(2, "Italy", 25)]);
        assert!(state.selected.is_none());
    }

    #[test]
    fn test_failed_load_keeps_data() {
        let mut state = AppState::default();
        state.finish_loading(vec![loc(1, "Japan", 10)]);
        state.begin_loading();
        state.fail_loading("boom");

        assert!(!state.is_loading);
        assert_eq!(state.locations.len(), 1);
        assert_eq!(state.error_message.as_deref(), Some("boom"));
    }
}
