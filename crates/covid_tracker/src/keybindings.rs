//! Key chords and binding lookup.
//!
//! Bindings are stored as strings such as `"j"`, `"ctrl+c"` or `"shift+g"`.
//! Each one is parsed into a [`KeyChord`] when the configuration is read, so
//! key events are compared against ready chords.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::{AppKeyEvent, KeyCode};

/// A key plus the modifiers that must be held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub code: KeyCode,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl KeyChord {
    /// True if `key` is this chord being pressed.
    ///
    /// Letters compare case-insensitively; an upper-case letter counts as
    /// shift even when the terminal does not report the modifier. Shift is
    /// ignored for other characters since it is part of typing them.
    pub fn accepts(&self, key: &AppKeyEvent) -> bool {
        if key.ctrl != self.ctrl || key.alt != self.alt {
            return false;
        }
        match (self.code, key.code) {
            (KeyCode::Char(want), KeyCode::Char(got)) => {
                let shift_ok =
                    !got.is_alphabetic() || (got.is_uppercase() || key.shift) == self.shift;
                want.to_lowercase().eq(got.to_lowercase()) && shift_ok
            }
            (want, got) => want == got && key.shift == self.shift,
        }
    }
}

fn named_key(name: &str) -> Option<KeyCode> {
    let code = match name {
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        _ => {
            let mut chars = name.chars();
            return match (chars.next(), chars.next()) {
                (Some(c), None) => Some(KeyCode::Char(c)),
                (Some('f'), Some(_)) => name[1..].parse().ok().map(KeyCode::F),
                _ => None,
            };
        }
    };
    Some(code)
}

impl FromStr for KeyChord {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let (mods, key) = match lowered.rsplit_once('+') {
            // "+" on its own, or "ctrl++"
            Some((mods, "")) => (mods.strip_suffix('+').unwrap_or(mods), "+"),
            Some((mods, key)) => (mods, key),
            None => ("", lowered.as_str()),
        };

        let mut chord = KeyChord {
            code: named_key(key).ok_or_else(|| format!("unknown key '{key}' in '{s}'"))?,
            ctrl: false,
            alt: false,
            shift: false,
        };
        for m in mods.split('+').filter(|m| !m.is_empty()) {
            match m {
                "ctrl" => chord.ctrl = true,
                "alt" => chord.alt = true,
                "shift" => chord.shift = true,
                other => return Err(format!("unknown modifier '{other}' in '{s}'")),
            }
        }
        Ok(chord)
    }
}

/// One configured binding: the text as written plus its parsed chord.
///
/// Serialized as the plain string. Text that does not parse is kept so it
/// round-trips and can be reported, but it never matches a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct KeyBinding {
    text: String,
    chord: Result<KeyChord, String>,
}

impl KeyBinding {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn chord(&self) -> Option<&KeyChord> {
        self.chord.as_ref().ok()
    }

    pub fn accepts(&self, key: &AppKeyEvent) -> bool {
        self.chord().is_some_and(|chord| chord.accepts(key))
    }
}

impl From<String> for KeyBinding {
    fn from(text: String) -> Self {
        let chord = text.parse();
        Self { text, chord }
    }
}

impl From<&str> for KeyBinding {
    fn from(text: &str) -> Self {
        Self::from(text.to_string())
    }
}

impl From<KeyBinding> for String {
    fn from(binding: KeyBinding) -> Self {
        binding.text
    }
}

impl KeybindingsConfig {
    /// True if `key` is any of `bindings`.
    pub fn matches(key: &AppKeyEvent, bindings: &[KeyBinding]) -> bool {
        bindings.iter().any(|b| b.accepts(key))
    }

    /// Every configured binding, in no particular order.
    fn all_bindings(&self) -> impl Iterator<Item = &KeyBinding> {
        let g = &self.global;
        let n = &self.navigation;
        let l = &self.list;
        [
            &g.quit,
            &g.reload,
            &n.up,
            &n.down,
            &n.page_up,
            &n.page_down,
            &n.first,
            &n.last,
            &n.confirm,
            &l.toggle_tablet,
            &l.toggle_desktop,
            &l.deselect,
        ]
        .into_iter()
        .flatten()
    }

    /// Messages for bindings that can never match.
    pub fn invalid_bindings(&self) -> Vec<String> {
        self.all_bindings()
            .filter_map(|b| b.chord.as_ref().err().cloned())
            .collect()
    }

    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join("keybindings.yaml")
    }

    /// Load keybindings from `data_dir`.
    ///
    /// A missing or unreadable file gives the defaults. Invalid entries are
    /// logged and kept; they simply never match.
    pub fn load_or_default(data_dir: &Path) -> Self {
        let path = Self::path(data_dir);
        let Ok(content) = std::fs::read_to_string(&path) else {
            return Self::default();
        };

        let config: Self = serde_saphyr::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("Ignoring invalid {}: {e}", path.display());
            Self::default()
        });
        for problem in config.invalid_bindings() {
            tracing::warn!("Keybinding {problem}");
        }
        config
    }
}
