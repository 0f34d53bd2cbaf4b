//! Display logic for the COVID-19 tracker location list.
//!
//! This crate holds everything the list panel computes without touching a
//! terminal:
//! - Location records and payload parsing
//! - Aggregate totals and count formatting
//! - The select/deselect toggle and its callback trait
//! - Scroll geometry for keeping the selected row visible
//! - Per-breakpoint panel visibility flags

pub mod format;
pub mod model;
pub mod responsive;
pub mod scroll;
pub mod selection;
pub mod source;
pub mod totals;

#[cfg(test)]
mod tests;

pub use format::{capitalize, format_count};
pub use model::{Latest, Location, LocationId, Metric};
pub use responsive::{Breakpoint, DEFAULT_TABLET_BREAKPOINT, ResponsiveFlags};
pub use scroll::{Bounds, RowIndex, ScrollState, scroll_to_selected};
pub use selection::{SelectionChange, SelectionHandler, is_selected, toggle};
pub use source::{SourceError, load_locations, parse_locations};
pub use totals::Totals;
