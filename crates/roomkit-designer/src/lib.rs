//! # roomkit Designer
//!
//! This crate provides the room layout editor: a configurable room outline
//! and the furniture placed inside it, with the interaction, persistence and
//! rendering layers built on top.
//!
//! ## Core Components
//!
//! - **Model**: furniture kinds, placed items, the room configuration
//! - **Visuals**: per-kind image cache and fallback shapes
//! - **Scene**: ordered items, selection, placement and edits
//! - **Interaction**: pointer/keyboard state machine driving the scene
//! - **Serialization**: JSON design files
//! - **Renderer**: headless raster preview
//! - **Designer State**: the editing session and its open file
//!
//! ## Architecture
//!
//! ```text
//! DesignerState
//!   ├── InteractionController (gestures, keys, context menu)
//!   └── Scene
//!         ├── RoomConfig
//!         ├── FurnitureItem* (z-ordered)
//!         └── VisualCache (shared, process lifetime)
//!
//! Serialization (DesignSnapshot <-> JSON)
//! Renderer (Scene -> RgbImage)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use roomkit_designer::{FurnitureKind, Point, PointerButton, Scene, InteractionController};
//!
//! let mut scene = Scene::default();
//! let mut controller = InteractionController::new();
//!
//! scene.begin_placement(Some(FurnitureKind::Chair));
//! controller.pointer_down(&mut scene, PointerButton::Primary, Point::new(100, 100));
//! controller.pointer_up(&mut scene, PointerButton::Primary, Point::new(100, 100));
//! ```

pub mod designer_state;
pub mod interaction;
pub mod model;
pub mod renderer;
pub mod scene;
pub mod serialization;
pub mod visuals;

pub use designer_state::DesignerState;
pub use interaction::{
    AlwaysConfirm, ContextAction, ContextMenu, DeleteConfirmation, GestureState,
    InteractionController, Key, PointerButton, Response, GROW_FACTOR, ROTATE_STEP, SHRINK_FACTOR,
};
pub use model::{
    FurnitureItem, FurnitureKind, FurnitureRecord, ItemId, KindProfile, PixelRect, Point,
    RoomConfig, Size, MAX_ITEM_SIDE, MIN_ITEM_SIDE, ROOM_ORIGIN,
};
pub use renderer::render_scene;
pub use scene::{Scene, DEFAULT_GRID_SIZE, DEFAULT_ITEM_SIZE};
pub use serialization::{DesignFile, DesignMetadata, DesignSnapshot};
pub use visuals::{FallbackVisual, Visual, VisualCache};
