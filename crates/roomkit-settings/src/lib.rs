//! roomkit Settings Crate
//!
//! Handles editor configuration and settings persistence.

pub mod config;
pub mod error;

pub use config::{Config, EditorSettings, PreviewSettings, RoomDefaults};
pub use error::{ConfigError, SettingsError, SettingsResult};
