//! Keybindings configuration data structures.
//!
//! Defines the structure for customizable keyboard shortcuts that can be
//! serialized to/from `~/.covid-tracker/keybindings.yaml`.

use serde::{Deserialize, Serialize};

use crate::keybindings::KeyBinding;

/// Root keybindings configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindingsConfig {
    /// Global keybindings (work everywhere)
    pub global: GlobalBindings,
    /// Cursor and scroll keybindings for the location list
    pub navigation: NavigationBindings,
    /// List panel keybindings
    pub list: ListBindings,
}

/// Global keybindings that work everywhere in the app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalBindings {
    pub quit: Vec<KeyBinding>,
    pub reload: Vec<KeyBinding>,
}

impl Default for GlobalBindings {
    fn default() -> Self {
        Self {
            quit: vec!["q".into(), "ctrl+c".into()],
            reload: vec!["r".into()],
        }
    }
}

/// Navigation keybindings for the location list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationBindings {
    pub up: Vec<KeyBinding>,
    pub down: Vec<KeyBinding>,
    pub page_up: Vec<KeyBinding>,
    pub page_down: Vec<KeyBinding>,
    pub first: Vec<KeyBinding>,
    pub last: Vec<KeyBinding>,
    pub confirm: Vec<KeyBinding>,
}

impl Default for NavigationBindings {
    fn default() -> Self {
        Self {
            up: vec!["k".into(), "up".into()],
            down: vec!["j".into(), "down".into()],
            page_up: vec!["pageup".into()],
            page_down: vec!["pagedown".into()],
            first: vec!["g".into(), "home".into()],
            last: vec!["shift+g".into(), "end".into()],
            confirm: vec!["enter".into()],
        }
    }
}

/// Keybindings for the list panel itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListBindings {
    /// Open/close the panel on narrow terminals
    pub toggle_tablet: Vec<KeyBinding>,
    /// Open/close the panel on wide terminals
    pub toggle_desktop: Vec<KeyBinding>,
    pub deselect: Vec<KeyBinding>,
}

impl Default for ListBindings {
    fn default() -> Self {
        Self {
            toggle_tablet: vec!["t".into()],
            toggle_desktop: vec!["d".into()],
            deselect: vec!["esc".into()],
        }
    }
}
