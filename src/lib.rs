//! # roomkit
//!
//! A room layout editor core: place, drag, rotate, resize and delete
//! furniture inside a configurable room, then save the arrangement and load
//! it back later.
//!
//! ## Architecture
//!
//! roomkit is organized as a workspace with multiple crates:
//!
//! 1. **roomkit-core** - Errors, units, shared data types, type aliases
//! 2. **roomkit-settings** - Configuration file handling
//! 3. **roomkit-designer** - Furniture model, scene, interaction, persistence, rendering
//! 4. **roomkit** - Headless binary that integrates all crates

use anyhow::Context;
use std::path::{Path, PathBuf};

// Re-export modules for main.rs
pub use roomkit_core::data;
pub use roomkit_designer as designer;

pub use roomkit_core::{
    Error, PersistenceError, Result, RoomError, RoomShape, Rgb, SubscriptionId,
    PIXELS_PER_METER,
};

pub use roomkit_designer::{
    render_scene, ContextAction, ContextMenu, DesignFile, DesignSnapshot, DesignerState,
    FurnitureItem, FurnitureKind, InteractionController, ItemId, Key, Point, PointerButton,
    Response, RoomConfig, Scene, Size, Visual, VisualCache,
};

pub use roomkit_settings::{Config, EditorSettings, PreviewSettings, RoomDefaults, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
/// - UTF timestamps
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(())
}

/// Room described by the configured defaults.
///
/// Falls back to the built-in room when the stored values are unusable.
pub fn default_room(config: &Config) -> RoomConfig {
    let room = &config.room;
    RoomConfig::new(room.width, room.height, room.shape, room.wall_color).unwrap_or_else(|err| {
        tracing::warn!("Ignoring configured room: {}", err);
        RoomConfig::default()
    })
}

/// Builds an editing session from the editor configuration.
pub fn designer_from_config(config: &Config) -> DesignerState {
    let editor = &config.editor;
    let visuals = VisualCache::new(editor.asset_dir.clone());
    let default_size = Size::new(editor.default_item_width, editor.default_item_height);

    let mut state = DesignerState::with_options(visuals, default_size, editor.grid_size);
    state.scene.apply_room_config(default_room(config));
    state
}

/// Path of the preview image written next to a design file.
pub fn preview_path(design: &Path) -> PathBuf {
    design.with_extension("png")
}

/// Renders the session's scene to a PNG at `output`.
pub fn write_preview(
    state: &DesignerState,
    preview: &PreviewSettings,
    output: &Path,
) -> anyhow::Result<()> {
    let image = render_scene(&state.scene, preview.width, preview.height);
    image
        .save(output)
        .with_context(|| format!("Failed to write preview to {}", output.display()))?;
    tracing::info!(
        "Wrote {}x{} preview to {}",
        preview.width,
        preview.height,
        output.display()
    );
    Ok(())
}
