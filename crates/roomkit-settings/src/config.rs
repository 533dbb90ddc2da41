//! Configuration and settings management for roomkit
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in the platform config directory.
//!
//! Configuration is organized into logical sections:
//! - Editor settings (grid, default furniture size, image assets)
//! - Room defaults (the room shown before any configuration is applied)
//! - Preview settings (headless render size)

use crate::error::{ConfigError, SettingsError, SettingsResult};
use roomkit_core::{RoomShape, Rgb, MAX_ROOM_METERS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Number of entries kept in the recent files list
const MAX_RECENT_FILES: usize = 10;

/// Editor behaviour settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Grid spacing in pixels used when a drag is released
    pub grid_size: i32,
    /// Width in pixels of newly placed furniture
    pub default_item_width: i32,
    /// Height in pixels of newly placed furniture
    pub default_item_height: i32,
    /// Directory holding `<kind>.png` furniture images
    pub asset_dir: Option<PathBuf>,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            grid_size: 10,
            default_item_width: 80,
            default_item_height: 60,
            asset_dir: None,
        }
    }
}

/// Room shown when a new design is started
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomDefaults {
    /// Width in meters
    pub width: f64,
    /// Height in meters
    pub height: f64,
    pub shape: RoomShape,
    pub wall_color: Rgb,
}

impl Default for RoomDefaults {
    fn default() -> Self {
        Self {
            width: 5.0,
            height: 3.0,
            shape: RoomShape::Rectangle,
            wall_color: Rgb::WHITE,
        }
    }
}

/// Headless preview render settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewSettings {
    pub width: u32,
    pub height: u32,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 800,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Recent design files, most recent first
    pub recent_files: Vec<PathBuf>,
    /// Editor settings
    pub editor: EditorSettings,
    /// Default room
    pub room: RoomDefaults,
    /// Preview settings
    pub preview: PreviewSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location: `<config dir>/roomkit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("roomkit").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match extension(path).as_deref() {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or_default().to_string(),
                )
                .into())
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Load config from `path`, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path).as_deref() {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or_default().to_string(),
                )
                .into())
            }
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.editor.grid_size <= 0 {
            return Err(SettingsError::invalid(
                "editor.grid_size",
                "must be > 0",
            ));
        }

        if !(20..=500).contains(&self.editor.default_item_width)
            || !(20..=500).contains(&self.editor.default_item_height)
        {
            return Err(SettingsError::invalid(
                "editor.default_item_size",
                "width and height must be within 20..=500 pixels",
            ));
        }

        let room_dimension_ok = |v: f64| v.is_finite() && v > 0.0 && v <= MAX_ROOM_METERS;
        if !room_dimension_ok(self.room.width) || !room_dimension_ok(self.room.height) {
            return Err(SettingsError::invalid(
                "room",
                "width and height must be more than 0 and at most 50 meters",
            ));
        }

        if self.preview.width == 0 || self.preview.height == 0 {
            return Err(SettingsError::invalid(
                "preview",
                "dimensions must be > 0",
            ));
        }

        Ok(())
    }

    /// Add file to recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        self.recent_files.retain(|f| f != &path);
        self.recent_files.insert(0, path);
        self.recent_files.truncate(MAX_RECENT_FILES);
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}
