use super::SAMPLE_PAYLOAD;
use crate::{
    Location, LocationId, ResponsiveFlags, RowIndex, ScrollState, SelectionHandler,
    parse_locations, scroll_to_selected, toggle,
};

/// Minimal stand-in for the selection owner.
struct Parent {
    locations: Vec<Location>,
    selected: Option<Location>,
}

impl SelectionHandler for Parent {
    fn on_select_item(&mut self, id: LocationId) {
        self.selected = self.locations.iter().find(|l| l.id == id).cloned();
    }

    fn on_deselect_item(&mut self) {
        self.selected = None;
    }
}

fn click(parent: &mut Parent, flags: &mut ResponsiveFlags, id: &LocationId) {
    flags.close_tablet();
    toggle(parent.selected.as_ref(), id).dispatch(parent);
}

#[test]
fn test_select_switch_deselect() {
    let locations = parse_locations(SAMPLE_PAYLOAD).unwrap();
    let mut parent = Parent {
        locations: locations.clone(),
        selected: None,
    };
    let mut flags = ResponsiveFlags::default();

    click(&mut parent, &mut flags, &locations[3].id);
    assert_eq!(parent.selected.as_ref().map(|l| &l.id), Some(&locations[3].id));

    click(&mut parent, &mut flags, &locations[5].id);
    assert_eq!(parent.selected.as_ref().map(|l| &l.id), Some(&locations[5].id));

    click(&mut parent, &mut flags, &locations[5].id);
    assert!(parent.selected.is_none());
}

#[test]
fn test_click_closes_tablet_panel() {
    let locations = parse_locations(SAMPLE_PAYLOAD).unwrap();
    let mut parent = Parent {
        locations: locations.clone(),
        selected: None,
    };
    let mut flags = ResponsiveFlags::default();
    flags.toggle_tablet();

    click(&mut parent, &mut flags, &locations[0].id);
    assert!(!flags.is_on_tablet);
    assert!(flags.is_on_desktop);
}

#[test]
fn test_selection_change_scrolls_only_when_clipped() {
    let locations = parse_locations(SAMPLE_PAYLOAD).unwrap();
    let rows = RowIndex::build(&locations);
    let mut state = ScrollState::default();

    assert!(!scroll_to_selected(Some(&locations[2]), &rows, 5, &mut state, 2));
    assert_eq!(state.offset, 0);

    assert!(scroll_to_selected(Some(&locations[12]), &rows, 5, &mut state, 2));
    assert_eq!(state.offset, 10);

    assert!(!scroll_to_selected(None, &rows, 5, &mut state, 2));
    assert_eq!(state.offset, 10);
}
