//! User settings stored in `settings.yaml`.

use std::path::PathBuf;

use covid_tracker_core::DEFAULT_TABLET_BREAKPOINT;
use serde::{Deserialize, Serialize};

/// Tunables for layout, scrolling and the event loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Locations payload to load; `None` means `locations.json` in the data dir
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
    /// Terminal widths below this many columns use the tablet layout
    pub tablet_breakpoint: u16,
    /// Width of the list panel in columns
    pub panel_width: u16,
    /// Rows kept above a row scrolled into view
    pub scroll_margin: usize,
    /// Event poll interval; also paces the loading spinner
    pub tick_rate_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: None,
            tablet_breakpoint: DEFAULT_TABLET_BREAKPOINT,
            panel_width: 46,
            scroll_margin: 2,
            tick_rate_ms: 100,
        }
    }
}
