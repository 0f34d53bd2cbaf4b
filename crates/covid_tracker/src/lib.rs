//! Terminal dashboard for COVID-19 case counts.
//!
//! The list panel shows worldwide totals and one row per location; selecting
//! a row fills the detail panel. Data is read from a saved
//! coronavirus-tracker-api payload on a background thread.

pub mod app;
pub mod components;
pub mod data;
pub mod event;
pub mod keybindings;
pub mod logging;
pub mod state;
pub mod util;
pub mod worker;

pub use app::App;
pub use logging::init_logging;
