//! Interaction controller - turns pointer and keyboard input into scene operations.
//!
//! One gesture is active at a time.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging      (primary down with placement armed: new item)
//! Idle -> Dragging      (primary down on an item: select + bring to front)
//! Idle -> Idle          (primary down on empty floor: select none)
//! Dragging -> Idle      (pointer up: snap the target to the grid)
//! Dragging -> Idle      (Escape or focus loss: restore the start position)
//! ```
//!
//! Secondary clicks never start or end a drag; they select the item under
//! the pointer and open its context menu.

use std::fmt;

use crate::model::{FurnitureItem, ItemId, Point};
use crate::scene::{Scene, DEFAULT_GRID_SIZE};

/// Rotation applied by the `R` key and the context menu.
pub const ROTATE_STEP: i32 = 90;
/// Factor applied by the grow key and menu entry.
pub const GROW_FACTOR: f64 = 1.1;
/// Factor applied by the shrink key and menu entry.
pub const SHRINK_FACTOR: f64 = 0.9;

/// Pointer buttons the controller distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Keys the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Delete,
    Escape,
    Char(char),
}

/// Entries of the per-item context menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContextAction {
    Rotate(i32),
    Resize(f64),
    Delete,
}

impl ContextAction {
    pub fn label(&self) -> &'static str {
        match self {
            ContextAction::Rotate(_) => "Rotate 90°",
            ContextAction::Resize(factor) if *factor >= 1.0 => "Increase Size",
            ContextAction::Resize(_) => "Decrease Size",
            ContextAction::Delete => "Delete",
        }
    }
}

/// Context menu opened by a secondary click, bound to one item.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextMenu {
    pub target: ItemId,
    pub position: Point,
    pub actions: Vec<ContextAction>,
}

impl ContextMenu {
    fn for_item(target: ItemId, position: Point) -> Self {
        Self {
            target,
            position,
            actions: vec![
                ContextAction::Rotate(ROTATE_STEP),
                ContextAction::Resize(GROW_FACTOR),
                ContextAction::Resize(SHRINK_FACTOR),
                ContextAction::Delete,
            ],
        }
    }
}

/// What an input event did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    /// The scene must be drawn again
    pub redraw: bool,
    /// The saved design would differ
    pub changed: bool,
    /// A context menu to show, if the event opened one
    pub context_menu: Option<ContextMenu>,
}

impl Response {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn redraw() -> Self {
        Self {
            redraw: true,
            ..Self::default()
        }
    }

    pub fn changed() -> Self {
        Self {
            redraw: true,
            changed: true,
            context_menu: None,
        }
    }

    fn from_applied(applied: bool) -> Self {
        if applied {
            Self::changed()
        } else {
            Self::none()
        }
    }
}

/// Asks the user whether the selected item may be deleted.
pub trait DeleteConfirmation {
    fn confirm_delete(&mut self, item: &FurnitureItem) -> bool;
}

impl<F> DeleteConfirmation for F
where
    F: FnMut(&FurnitureItem) -> bool,
{
    fn confirm_delete(&mut self, item: &FurnitureItem) -> bool {
        self(item)
    }
}

/// Confirms every delete; used when no shell is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl DeleteConfirmation for AlwaysConfirm {
    fn confirm_delete(&mut self, _item: &FurnitureItem) -> bool {
        true
    }
}

/// Active gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    /// No gesture in progress
    Idle,

    /// Moving an item with the primary button held
    Dragging {
        /// Item being moved
        target: ItemId,
        /// Last pointer position for delta calculation
        last: Point,
        /// Item position when the drag started
        origin: Point,
    },
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }
}

/// Pointer/keyboard state machine driving a [`Scene`].
pub struct InteractionController {
    state: GestureState,
    grid_size: i32,
    confirmation: Box<dyn DeleteConfirmation>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::with_grid_size(DEFAULT_GRID_SIZE)
    }

    pub fn with_grid_size(grid_size: i32) -> Self {
        Self {
            state: GestureState::Idle,
            grid_size,
            confirmation: Box::new(AlwaysConfirm),
        }
    }

    /// Installs the prompt consulted before a delete.
    pub fn set_confirmation(&mut self, confirmation: impl DeleteConfirmation + 'static) {
        self.confirmation = Box::new(confirmation);
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn grid_size(&self) -> i32 {
        self.grid_size
    }

    pub fn set_grid_size(&mut self, grid_size: i32) {
        self.grid_size = grid_size;
    }

    /// Handles a button press at `point`.
    pub fn pointer_down(&mut self, scene: &mut Scene, button: PointerButton, point: Point) -> Response {
        match button {
            PointerButton::Primary => self.primary_down(scene, point),
            PointerButton::Secondary => self.secondary_down(scene, point),
        }
    }

    fn primary_down(&mut self, scene: &mut Scene, point: Point) -> Response {
        if let Some(id) = scene.place_at(point) {
            self.start_drag(scene, id, point);
            return Response::changed();
        }

        match scene.pick(point) {
            Some(id) => {
                scene.select(Some(id));
                let reordered = scene.items().last().map(FurnitureItem::id) != Some(id);
                scene.bring_to_front(id);
                self.start_drag(scene, id, point);
                Response {
                    redraw: true,
                    changed: reordered,
                    context_menu: None,
                }
            }
            None => {
                scene.select(None);
                self.state = GestureState::Idle;
                Response::redraw()
            }
        }
    }

    fn secondary_down(&mut self, scene: &mut Scene, point: Point) -> Response {
        let hit = scene.pick(point);
        scene.select(hit);
        Response {
            redraw: true,
            changed: false,
            context_menu: hit.map(|id| ContextMenu::for_item(id, point)),
        }
    }

    fn start_drag(&mut self, scene: &Scene, target: ItemId, point: Point) {
        let origin = scene
            .get(target)
            .map(FurnitureItem::position)
            .unwrap_or(point);
        tracing::debug!("Drag started on {}", target);
        self.state = GestureState::Dragging {
            target,
            last: point,
            origin,
        };
    }

    /// Handles pointer motion; only a drag reacts.
    pub fn pointer_moved(&mut self, scene: &mut Scene, point: Point) -> Response {
        match self.state {
            GestureState::Dragging {
                target,
                last,
                origin,
            } => {
                let (dx, dy) = point.delta_from(last);
                self.state = GestureState::Dragging {
                    target,
                    last: point,
                    origin,
                };
                if dx == 0 && dy == 0 {
                    return Response::none();
                }
                Response::from_applied(scene.move_item(target, dx, dy))
            }
            GestureState::Idle => Response::none(),
        }
    }

    /// Handles a button release; ends a drag by snapping its target.
    pub fn pointer_up(&mut self, scene: &mut Scene, _button: PointerButton, _point: Point) -> Response {
        match self.state {
            GestureState::Dragging { target, .. } => {
                self.state = GestureState::Idle;
                let before = scene.get(target).map(FurnitureItem::position);
                scene.snap_to_grid(target, self.grid_size);
                let after = scene.get(target).map(FurnitureItem::position);
                tracing::debug!("Drag finished on {}", target);
                Response {
                    redraw: true,
                    changed: before != after,
                    context_menu: None,
                }
            }
            GestureState::Idle => Response::none(),
        }
    }

    /// Handles a key press.
    ///
    /// Editing keys act only on a selection: Delete asks for confirmation,
    /// `R` rotates, `+`/`=` grows and `-` shrinks. Escape cancels a drag or
    /// disarms placement.
    pub fn key_pressed(&mut self, scene: &mut Scene, key: Key) -> Response {
        if key == Key::Escape {
            return self.cancel(scene);
        }
        if scene.selected_id().is_none() {
            return Response::none();
        }

        match key {
            Key::Delete => self.delete_selected(scene),
            Key::Char('r') | Key::Char('R') => {
                Response::from_applied(scene.rotate_selected(ROTATE_STEP))
            }
            Key::Char('+') | Key::Char('=') => {
                Response::from_applied(scene.resize_selected(GROW_FACTOR))
            }
            Key::Char('-') => Response::from_applied(scene.resize_selected(SHRINK_FACTOR)),
            _ => Response::none(),
        }
    }

    /// Applies a context menu entry to the menu's target.
    pub fn apply_context_action(
        &mut self,
        scene: &mut Scene,
        target: ItemId,
        action: ContextAction,
    ) -> Response {
        match action {
            ContextAction::Rotate(delta) => Response::from_applied(scene.rotate_item(target, delta)),
            ContextAction::Resize(factor) => {
                Response::from_applied(scene.resize_item(target, factor))
            }
            ContextAction::Delete => {
                if !scene.is_selected(target) {
                    scene.select(Some(target));
                }
                self.delete_selected(scene)
            }
        }
    }

    /// Window focus was lost; an active drag is rolled back.
    pub fn focus_lost(&mut self, scene: &mut Scene) -> Response {
        self.abort_drag(scene)
    }

    /// Escape: roll back a drag, or disarm placement when idle.
    pub fn cancel(&mut self, scene: &mut Scene) -> Response {
        if !self.state.is_idle() {
            return self.abort_drag(scene);
        }
        if scene.placement().is_some() {
            scene.begin_placement(None);
            return Response::redraw();
        }
        Response::none()
    }

    /// Drops any gesture without touching the scene.
    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
    }

    fn abort_drag(&mut self, scene: &mut Scene) -> Response {
        match self.state {
            GestureState::Dragging { target, origin, .. } => {
                self.state = GestureState::Idle;
                tracing::debug!("Drag on {} cancelled", target);
                let moved = scene.get(target).map(FurnitureItem::position) != Some(origin);
                scene.set_item_position(target, origin);
                Response {
                    redraw: true,
                    changed: moved,
                    context_menu: None,
                }
            }
            GestureState::Idle => Response::none(),
        }
    }

    fn delete_selected(&mut self, scene: &mut Scene) -> Response {
        let confirmation = &mut self.confirmation;
        match scene.delete_selected(|item| confirmation.confirm_delete(item)) {
            Some(removed) => {
                if matches!(self.state, GestureState::Dragging { target, .. } if target == removed.id())
                {
                    self.state = GestureState::Idle;
                }
                Response::changed()
            }
            None => Response::none(),
        }
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InteractionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionController")
            .field("state", &self.state)
            .field("grid_size", &self.grid_size)
            .finish()
    }
}
