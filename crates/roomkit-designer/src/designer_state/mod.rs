//! Editing session: the scene, its controller and the open file.

mod file_io;

use std::path::PathBuf;

use crate::interaction::{ContextAction, DeleteConfirmation, InteractionController, Key, PointerButton, Response};
use crate::model::{FurnitureKind, ItemId, Point, RoomConfig, Size};
use crate::scene::{Scene, DEFAULT_GRID_SIZE, DEFAULT_ITEM_SIZE};
use crate::visuals::VisualCache;

const UNTITLED: &str = "Untitled";

/// Designer state holding the scene and session bookkeeping.
///
/// Input events are forwarded to the [`InteractionController`]; any
/// response that reports a content change marks the design as modified.
#[derive(Debug)]
pub struct DesignerState {
    pub scene: Scene,
    pub controller: InteractionController,
    pub current_file_path: Option<PathBuf>,
    pub is_modified: bool,
    pub design_name: String,
}

impl DesignerState {
    /// Creates a new designer state with no image directory.
    pub fn new() -> Self {
        Self::with_options(VisualCache::default(), DEFAULT_ITEM_SIZE, DEFAULT_GRID_SIZE)
    }

    /// Creates a designer state with explicit editor options.
    ///
    /// # Arguments
    ///
    /// * `visuals` - Image cache shared with every scene this session builds
    /// * `default_size` - Size of newly placed items
    /// * `grid_size` - Grid the controller snaps dragged items to
    pub fn with_options(visuals: VisualCache, default_size: Size, grid_size: i32) -> Self {
        Self {
            scene: Scene::new(visuals, default_size),
            controller: InteractionController::with_grid_size(grid_size),
            current_file_path: None,
            is_modified: false,
            design_name: UNTITLED.to_string(),
        }
    }

    /// Installs the prompt consulted before deleting an item.
    pub fn set_delete_confirmation(&mut self, confirmation: impl DeleteConfirmation + 'static) {
        self.controller.set_confirmation(confirmation);
    }

    /// Applies a room configuration event.
    pub fn apply_room_config(&mut self, room: RoomConfig) {
        if *self.scene.room() != room {
            self.scene.apply_room_config(room);
            self.mark_modified();
        }
    }

    /// Arms (or with `None` cancels) placement of a furniture kind.
    ///
    /// A drag in progress is rolled back to where it started.
    pub fn begin_placement(&mut self, kind: Option<FurnitureKind>) {
        let response = self.controller.focus_lost(&mut self.scene);
        self.track(response);
        self.scene.begin_placement(kind);
    }

    pub fn pointer_down(&mut self, button: PointerButton, point: Point) -> Response {
        let response = self.controller.pointer_down(&mut self.scene, button, point);
        self.track(response)
    }

    pub fn pointer_moved(&mut self, point: Point) -> Response {
        let response = self.controller.pointer_moved(&mut self.scene, point);
        self.track(response)
    }

    pub fn pointer_up(&mut self, button: PointerButton, point: Point) -> Response {
        let response = self.controller.pointer_up(&mut self.scene, button, point);
        self.track(response)
    }

    pub fn key_pressed(&mut self, key: Key) -> Response {
        let response = self.controller.key_pressed(&mut self.scene, key);
        self.track(response)
    }

    pub fn apply_context_action(&mut self, target: ItemId, action: ContextAction) -> Response {
        let response = self
            .controller
            .apply_context_action(&mut self.scene, target, action);
        self.track(response)
    }

    pub fn focus_lost(&mut self) -> Response {
        let response = self.controller.focus_lost(&mut self.scene);
        self.track(response)
    }

    /// Mark design as modified.
    pub fn mark_modified(&mut self) {
        self.is_modified = true;
    }

    /// Get display name for the design.
    pub fn display_name(&self) -> String {
        let name = self
            .current_file_path
            .as_ref()
            .and_then(|path| path.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or(&self.design_name);

        if self.is_modified {
            format!("{}*", name)
        } else {
            name.to_string()
        }
    }

    fn track(&mut self, response: Response) -> Response {
        if response.changed {
            self.mark_modified();
        }
        response
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}
