/// Persisted user settings
///
/// Stored as JSON in the user's config directory:
/// - Linux: ~/.config/splash-finder/settings.json
/// - macOS: ~/Library/Application Support/splash-finder/settings.json
/// - Windows: %APPDATA%\splash-finder\settings.json
///
/// A default file is written on first launch so the user has something to edit.
/// Keys:
/// - `root_path`: the game's `Character` folder, one sub-folder per champion.
///   Point it at your own install; the default is a placeholder.
/// - `theme`: `"dark"` or `"light"`.
/// - `show_placeholder`: `true` also shows skins whose tile is missing or is
///   20 KB or smaller (unreleased skins ship such placeholders). Default `false`.
/// - `reverse_order`: `true` lists the highest skin number first. Default `true`.
///
/// Any key left out takes its default.
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use super::data::DisplayPrefs;

/// Shown in place of a real path until the user sets one
pub const UNSET_ROOT: &str = "Replace with your own path";

/// Errors reading or writing the settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Could not determine user config directory")]
    NoConfigDir,

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Window colour scheme
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppTheme {
    #[default]
    Dark,
    Light,
}

/// Everything the user can configure.
///
/// Fields missing from the file fall back to their defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// The game's `Character` folder (one sub-folder per champion)
    pub root_path: PathBuf,
    pub theme: AppTheme,
    /// Show skins whose tile is missing or 20 KB or smaller
    pub show_placeholder: bool,
    /// Highest skin number first
    pub reverse_order: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let prefs = DisplayPrefs::default();
        Self {
            root_path: PathBuf::from(UNSET_ROOT),
            theme: AppTheme::default(),
            show_placeholder: prefs.show_placeholder,
            reverse_order: prefs.reverse_order,
        }
    }
}

impl Settings {
    /// Where the settings file lives for this user
    pub fn default_path() -> Result<PathBuf, SettingsError> {
        let mut path = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
        path.push("splash-finder");
        path.push("settings.json");
        Ok(path)
    }

    /// Load settings from `path`, writing the defaults there first if the
    /// file does not exist yet
    pub fn load_or_init(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            let settings = Self::default();
            settings.save(path)?;
            info!(path = %path.display(), "wrote default settings");
            return Ok(settings);
        }
        Self::load(path)
    }

    /// Load settings from an existing file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json).map_err(|source| SettingsError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write settings to `path`, creating its directory if needed
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let io_err = |source: std::io::Error| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let json = self.to_json().map_err(|source| SettingsError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(io_err)
    }

    /// Convert to pretty JSON for the settings file
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse from JSON (from the settings file)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The subset of settings the skin scanner needs
    pub fn display_prefs(&self) -> DisplayPrefs {
        DisplayPrefs {
            show_placeholder: self.show_placeholder,
            reverse_order: self.reverse_order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.root_path, PathBuf::from(UNSET_ROOT));
        assert_eq!(settings.theme, AppTheme::Dark);
        assert_eq!(settings.display_prefs(), DisplayPrefs::default());
        assert!(!settings.show_placeholder);
        assert!(settings.reverse_order);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings = Settings::from_json(r#"{ "root_path": "C:/LoL/Character", "theme": "light" }"#).unwrap();
        assert_eq!(settings.root_path, PathBuf::from("C:/LoL/Character"));
        assert_eq!(settings.theme, AppTheme::Light);
        assert!(!settings.show_placeholder);
        assert!(settings.reverse_order);
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        assert!(Settings::from_json(r#"{ "theme": "solarized" }"#).is_err());
    }

    #[test]
    fn test_load_or_init_writes_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("settings.json");

        let settings = Settings::load_or_init(&path).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(path.is_file());

        // Second call reads what the first one wrote
        assert_eq!(Settings::load_or_init(&path).unwrap(), settings);
    }

    #[test]
    fn test_written_file_lists_every_key() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.json");
        Settings::load_or_init(&path).unwrap();

        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["root_path"], UNSET_ROOT);
        assert_eq!(json["theme"], "dark");
        assert_eq!(json["show_placeholder"], false);
        assert_eq!(json["reverse_order"], true);
    }

    #[test]
    fn test_save_then_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.json");
        let settings = Settings {
            root_path: PathBuf::from("/games/lol/Character"),
            theme: AppTheme::Light,
            show_placeholder: true,
            reverse_order: false,
        };

        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();

        assert_eq!(loaded, settings);
        assert_eq!(
            loaded.display_prefs(),
            DisplayPrefs {
                show_placeholder: true,
                reverse_order: false,
            }
        );
    }

    #[test]
    fn test_malformed_file_is_reported() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.json");
        fs::write(&path, "root_path = nope").unwrap();

        assert!(matches!(Settings::load(&path), Err(SettingsError::Json { .. })));
    }
}
