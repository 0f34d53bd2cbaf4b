//! Click-to-select / click-to-deselect logic.
//!
//! The list view never mutates the selection itself. It computes a
//! [`SelectionChange`] from the clicked id and the current selection and
//! hands it to whoever owns the selection through [`SelectionHandler`].

use crate::model::{Location, LocationId};

/// Outcome of clicking a location row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    /// Make this id the selection (replacing any previous one)
    Select(LocationId),
    /// Clear the selection
    Deselect,
}

impl SelectionChange {
    /// Forward the change to the selection owner.
    pub fn dispatch<H: SelectionHandler + ?Sized>(self, handler: &mut H) {
        match self {
            SelectionChange::Select(id) => handler.on_select_item(id),
            SelectionChange::Deselect => handler.on_deselect_item(),
        }
    }
}

/// Callbacks implemented by the owner of the selection.
pub trait SelectionHandler {
    fn on_select_item(&mut self, id: LocationId);
    fn on_deselect_item(&mut self);
}

/// Decide how a click on `clicked` changes `selected`.
///
/// Membership is tested by id only.
pub fn toggle(selected: Option<&Location>, clicked: &LocationId) -> SelectionChange {
    match selected {
        Some(location) if location.id == *clicked => SelectionChange::Deselect,
        _ => SelectionChange::Select(clicked.clone()),
    }
}

/// True if `location` is the current selection.
pub fn is_selected(selected: Option<&Location>, location: &Location) -> bool {
    selected.is_some_and(|s| s.id == location.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Latest;

    #[derive(Default)]
    struct Recorder {
        selected: Option<LocationId>,
        deselects: usize,
    }

    impl SelectionHandler for Recorder {
        fn on_select_item(&mut self, id: LocationId) {
            self.selected = Some(id);
        }

        fn on_deselect_item(&mut self) {
            self.selected = None;
            self.deselects += 1;
        }
    }

    fn loc(id: &str) -> Location {
        Location::new(id, "Country", "", Latest::default())
    }

    #[test]
    fn test_click_with_nothing_selected_selects() {
        let change = toggle(None, &LocationId::from("a"));
        assert_eq!(change, SelectionChange::Select(LocationId::from("a")));
    }

    #[test]
    fn test_click_other_replaces_selection() {
        let current = loc("a");
        let change = toggle(Some(&current), &LocationId::from("b"));
        assert_eq!(change, SelectionChange::Select(LocationId::from("b")));
    }

    #[test]
    fn test_click_selected_deselects() {
        let current = loc("a");
        let change = toggle(Some(&current), &LocationId::from("a"));
        assert_eq!(change, SelectionChange::Deselect);
    }

    #[test]
    fn test_membership_by_id_only() {
        let mut current = loc("a");
        current.country = "Elsewhere".to_string();
        assert!(is_selected(Some(&current), &loc("a")));
        assert!(!is_selected(Some(&current), &loc("b")));
        assert!(!is_selected(None, &loc("a")));
    }

    #[test]
    fn test_dispatch_reaches_handler() {
        let mut recorder = Recorder::default();
        SelectionChange::Select(LocationId::from("x")).dispatch(&mut recorder);
        assert_eq!(recorder.selected, Some(LocationId::from("x")));

        SelectionChange::Deselect.dispatch(&mut recorder);
        assert_eq!(recorder.selected, None);
        assert_eq!(recorder.deselects, 1);
    }
}
