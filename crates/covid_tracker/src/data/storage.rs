//! Data directory layout
//!
//! Directory structure:
//! ~/.covid-tracker/
//!   settings.yaml        # Layout and loop tunables
//!   keybindings.yaml     # Keyboard shortcuts
//!   locations.json       # Default locations payload
//!   covid-tracker.log    # Application log

use std::fs;
use std::path::{Path, PathBuf};

use super::keybindings_data::KeybindingsConfig;
use super::settings_data::Settings;

/// Error types for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
}

/// Manages the application data directory
#[derive(Debug, Clone)]
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.covid-tracker/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".covid-tracker")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn settings_path(&self) -> PathBuf {
        self.root.join("settings.yaml")
    }

    /// Default location of the locations payload
    pub fn default_data_file(&self) -> PathBuf {
        self.root.join("locations.json")
    }

    /// Create the directory and write default settings if none exist
    pub fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| StorageError::Io(format!("Failed to create data directory: {}", e)))?;

        if !self.settings_path().exists() {
            self.save_settings(&Settings::default())?;
        }
        Ok(())
    }

    /// Load settings.yaml, falling back to defaults if the file is missing
    pub fn load_settings(&self) -> Result<Settings, StorageError> {
        let path = self.settings_path();
        if !path.exists() {
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| StorageError::Io(format!("Failed to read settings: {}", e)))?;

        serde_saphyr::from_str(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse settings: {}", e)))
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<(), StorageError> {
        let yaml = serde_saphyr::to_string(settings)
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize settings: {}", e)))?;

        fs::write(self.settings_path(), yaml)
            .map_err(|e| StorageError::Io(format!("Failed to write settings: {}", e)))
    }

    /// Load keybindings from keybindings.yaml
    pub fn load_keybindings(&self) -> KeybindingsConfig {
        KeybindingsConfig::load_or_default(&self.root)
    }

    /// Resolve which payload to load: explicit override, then settings, then default
    pub fn resolve_data_file(&self, explicit: Option<PathBuf>, settings: &Settings) -> PathBuf {
        explicit
            .or_else(|| settings.data_file.clone())
            .unwrap_or_else(|| self.default_data_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_default_settings() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DataDirectory::new(dir.path().join("tracker"));
        storage.init().unwrap();

        assert!(dir.path().join("tracker/settings.yaml").exists());
        assert_eq!(storage.load_settings().unwrap(), Settings::default());
    }

    #[test]
    fn test_settings_roundtrip_custom_values() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DataDirectory::new(dir.path().to_path_buf());
        let settings = Settings {
            tablet_breakpoint: 120,
            scroll_margin: 4,
            ..Settings::default()
        };
        storage.save_settings(&settings).unwrap();
        assert_eq!(storage.load_settings().unwrap(), settings);
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("settings.yaml"), "panel_width: 50\n").unwrap();
        let storage = DataDirectory::new(dir.path().to_path_buf());

        let settings = storage.load_settings().unwrap();
        assert_eq!(settings.panel_width, 50);
        assert_eq!(settings.scroll_margin, Settings::default().scroll_margin);
    }

    #[test]
    fn test_invalid_settings_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("settings.yaml"), "panel_width: [wide\n").unwrap();
        let storage = DataDirectory::new(dir.path().to_path_buf());

        assert!(matches!(
            storage.load_settings(),
            Err(StorageError::Parse(_))
        ));
    }

    #[test]
    fn test_resolve_data_file_precedence() {
        let storage = DataDirectory::new(PathBuf::from("/data"));
        let mut settings = Settings::default();
        assert_eq!(
            storage.resolve_data_file(None, &settings),
            PathBuf::from("/data/locations.json")
        );

        settings.data_file = Some(PathBuf::from("/from/settings.json"));
        assert_eq!(
            storage.resolve_data_file(None, &settings),
            PathBuf::from("/from/settings.json")
        );
        assert_eq!(
            storage.resolve_data_file(Some(PathBuf::from("/cli.json")), &settings),
            PathBuf::from("/cli.json")
        );
    }
}
