//! Cursor movement for keyboard-driven lists.

use crate::data::keybindings_data::{KeybindingsConfig, NavigationBindings};
use crate::event::AppKeyEvent;

/// A cursor movement requested by the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMove {
    Up,
    Down,
    PageUp,
    PageDown,
    First,
    Last,
}

/// Map a key to a cursor movement using the navigation bindings.
pub fn list_move_for_key(key: &AppKeyEvent, nav: &NavigationBindings) -> Option<ListMove> {
    let table = [
        (&nav.up, ListMove::Up),
        (&nav.down, ListMove::Down),
        (&nav.page_up, ListMove::PageUp),
        (&nav.page_down, ListMove::PageDown),
        (&nav.first, ListMove::First),
        (&nav.last, ListMove::Last),
    ];
    table
        .into_iter()
        .find(|(bindings, _)| KeybindingsConfig::matches(key, bindings))
        .map(|(_, mv)| mv)
}

/// Apply `mv` to `selected`.
///
/// Single steps wrap at the ends; page and jump moves clamp.
///
/// # Arguments
/// * `mv` - The requested movement
/// * `selected` - Mutable reference to the cursor index
/// * `total` - Total number of items in the list
/// * `page` - Number of rows a page move covers
///
/// # Returns
/// `true` if the list was non-empty and the move applied
pub fn apply_list_move(mv: ListMove, selected: &mut usize, total: usize, page: usize) -> bool {
    if total == 0 {
        return false;
    }

    let last = total - 1;
    *selected = match mv {
        ListMove::Down => (*selected + 1) % total,
        ListMove::Up => {
            if *selected == 0 {
                last
            } else {
                *selected - 1
            }
        }
        ListMove::PageDown => selected.saturating_add(page.max(1)).min(last),
        ListMove::PageUp => selected.saturating_sub(page.max(1)),
        ListMove::First => 0,
        ListMove::Last => last,
    };
    true
}
