//! List input handling utilities.

mod selectable_list;

pub use selectable_list::{ListMove, apply_list_move, list_move_for_key};
