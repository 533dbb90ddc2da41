//! The editable scene: room, ordered furniture and the current selection.

mod listeners;
mod operations;

use roomkit_core::SubscriptionId;

use self::listeners::SelectionListeners;
use crate::model::{FurnitureItem, FurnitureKind, ItemId, Point, RoomConfig, Size};
use crate::visuals::VisualCache;

/// Default width and height of a newly placed item.
pub const DEFAULT_ITEM_SIZE: Size = Size::new(80, 60);

/// Default grid used to snap an item after a drag.
pub const DEFAULT_GRID_SIZE: i32 = 10;

/// Scene state mediating every mutation of the design.
///
/// # Ordering
///
/// `items` is kept in z-order: later items are drawn on top and are
/// hit-tested first. [`Scene::bring_to_front`] moves an item to the end.
///
/// # Selection
///
/// At most one item is selected, referenced by its [`ItemId`]. Removing the
/// selected item clears the selection. Every call to [`Scene::select`]
/// notifies the registered observers, even when the selection is unchanged.
#[derive(Debug)]
pub struct Scene {
    room: RoomConfig,
    items: Vec<FurnitureItem>,
    selected: Option<ItemId>,
    placement: Option<FurnitureKind>,
    next_id: u64,
    visuals: VisualCache,
    default_size: Size,
    listeners: SelectionListeners,
}

impl Scene {
    /// Creates an empty scene with the default room.
    ///
    /// # Arguments
    ///
    /// * `visuals` - Shared cache used to derive item visuals
    /// * `default_size` - Size given to items created by [`Scene::place_at`]
    pub fn new(visuals: VisualCache, default_size: Size) -> Self {
        Self {
            room: RoomConfig::default(),
            items: Vec::new(),
            selected: None,
            placement: None,
            next_id: 1,
            visuals,
            default_size,
            listeners: SelectionListeners::default(),
        }
    }

    pub fn room(&self) -> &RoomConfig {
        &self.room
    }

    /// Replaces the room configuration. Items and selection are untouched.
    pub fn apply_room_config(&mut self, room: RoomConfig) {
        tracing::debug!("Applying room configuration {}", room.caption());
        self.room = room;
    }

    pub fn visuals(&self) -> &VisualCache {
        &self.visuals
    }

    pub fn default_size(&self) -> Size {
        self.default_size
    }

    /// Arms placement for `kind`, or cancels it with `None`.
    ///
    /// Arming clears the current selection so the next click reads as a
    /// placement rather than an edit of the old selection.
    pub fn begin_placement(&mut self, kind: Option<FurnitureKind>) {
        self.placement = kind;
        if kind.is_some() {
            self.select(None);
        }
    }

    /// The kind armed for placement, if any.
    pub fn placement(&self) -> Option<FurnitureKind> {
        self.placement
    }

    /// Creates an item of the armed kind with its top-left at `point`.
    ///
    /// The new item is appended on top, selected, and placement is disarmed.
    /// Returns `None` without changing anything when placement is not armed.
    pub fn place_at(&mut self, point: Point) -> Option<ItemId> {
        let kind = self.placement.take()?;
        let id = self.add_item(kind, point, self.default_size);
        tracing::debug!("Placed {} {} at ({}, {})", kind, id, point.x, point.y);
        self.select(Some(id));
        Some(id)
    }

    /// Appends a new item without touching selection or placement.
    pub fn add_item(&mut self, kind: FurnitureKind, position: Point, size: Size) -> ItemId {
        let id = self.generate_id();
        self.items
            .push(FurnitureItem::new(id, kind, position, size, &self.visuals));
        id
    }

    /// Returns the topmost item containing `point`.
    pub fn pick(&self, point: Point) -> Option<ItemId> {
        self.items
            .iter()
            .rev()
            .find(|item| item.contains_point(point))
            .map(FurnitureItem::id)
    }

    /// Sets the selection and notifies observers.
    ///
    /// An id that is not in the scene selects nothing.
    pub fn select(&mut self, id: Option<ItemId>) {
        self.selected = id.filter(|id| self.index_of(*id).is_some());
        self.listeners.notify(self.selected_item());
    }

    pub fn selected_id(&self) -> Option<ItemId> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&FurnitureItem> {
        self.selected.and_then(|id| self.get(id))
    }

    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selected == Some(id)
    }

    /// Moves an item to the top of the z-order. Geometry is unchanged.
    ///
    /// Returns `false` when the id is not in the scene.
    pub fn bring_to_front(&mut self, id: ItemId) -> bool {
        match self.index_of(id) {
            Some(index) => {
                let item = self.items.remove(index);
                self.items.push(item);
                true
            }
            None => false,
        }
    }

    /// Items in z-order, bottom first.
    pub fn items(&self) -> &[FurnitureItem] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&FurnitureItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Registers a selection observer.
    ///
    /// The callback runs synchronously inside every [`Scene::select`] with
    /// the newly selected item.
    pub fn subscribe_selection<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(Option<&FurnitureItem>) + 'static,
    {
        self.listeners.subscribe(callback)
    }

    /// Removes a selection observer. Returns `false` for an unknown id.
    pub fn unsubscribe_selection(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn generate_id(&mut self) -> ItemId {
        let id = ItemId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn index_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    fn get_mut(&mut self, id: ItemId) -> Option<&mut FurnitureItem> {
        self.items.iter_mut().find(|item| item.id() == id)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(VisualCache::default(), DEFAULT_ITEM_SIZE)
    }
}
