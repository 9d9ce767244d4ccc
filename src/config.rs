/// User configuration
///
/// Stored as JSON in the user's config directory:
/// - Linux: ~/.config/air-assets/config.json
/// - macOS: ~/Library/Application Support/air-assets/config.json
/// - Windows: %APPDATA%\air-assets\config.json
///
/// Set `AIR_ASSETS_CONFIG` to point at a different file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::state::data::ViewMode;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "AIR_ASSETS_CONFIG";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Display mode on startup
    pub view_mode: ViewMode,
    pub theme: ThemeChoice,
    /// Start with the demo library instead of an empty one
    pub load_sample_library: bool,
    /// Initials shown in the header badge
    pub owner_initials: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::Grid,
            theme: ThemeChoice::Light,
            load_sample_library: true,
            owner_initials: "JD".to_string(),
        }
    }
}

impl AppConfig {
    /// Resolve where the config file lives
    pub fn path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }

        let mut path = dirs::config_dir().ok_or(AppError::NoConfigDir)?;
        path.push("air-assets");
        path.push("config.json");
        Ok(path)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(AppError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_str(&contents).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write to `path`, creating the parent directory if needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| AppError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })?;

        std::fs::write(path, json).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the user's config, falling back to defaults on any problem
    pub fn load_or_default() -> Self {
        let path = match Self::path() {
            Ok(path) => path,
            Err(e) => {
                log::warn!("{e}; using default settings");
                return Self::default();
            }
        };

        match Self::load(&path) {
            Ok(config) if !path.exists() => {
                // First run: write the defaults so users have a file to edit
                match config.save(&path) {
                    Ok(()) => log::info!("Default settings written to {}", path.display()),
                    Err(e) => log::warn!("{e}"),
                }
                config
            }
            Ok(config) => {
                log::info!("Settings loaded from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.load_sample_library);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = AppConfig {
            view_mode: ViewMode::List,
            theme: ThemeChoice::Dark,
            load_sample_library: false,
            owner_initials: "AR".to_string(),
        };
        config.save(&path).unwrap();

        assert_eq!(AppConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "view_mode": "list" }"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.view_mode, ViewMode::List);
        assert_eq!(config.theme, ThemeChoice::Light);
        assert_eq!(config.owner_initials, "JD");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, AppError::Config { .. }));
        assert!(err.to_string().contains("config.json"));
    }
}
