//! Item manipulation and whole-scene operations for Scene.

use roomkit_core::PersistenceError;

use super::Scene;
use crate::model::{FurnitureItem, ItemId, Point};
use crate::serialization::{self, DesignSnapshot};

impl Scene {
    /// Deletes the selected item after `confirm` agrees.
    ///
    /// Nothing happens when there is no selection or the confirmation is
    /// declined. On success the selection is cleared and the removed item
    /// is returned.
    pub fn delete_selected<F>(&mut self, confirm: F) -> Option<FurnitureItem>
    where
        F: FnOnce(&FurnitureItem) -> bool,
    {
        let item = self.selected_item()?;
        if !confirm(item) {
            tracing::debug!("Delete of {} {} declined", item.kind(), item.id());
            return None;
        }

        let index = self.index_of(item.id())?;
        let removed = self.items.remove(index);
        tracing::debug!("Deleted {} {}", removed.kind(), removed.id());
        self.select(None);
        Some(removed)
    }

    /// Removes every item and clears the selection.
    pub fn clear(&mut self) {
        self.items.clear();
        self.select(None);
    }

    /// Truncates an item's position to a multiple of `grid` on each axis.
    ///
    /// Integer division rounds toward zero, so negative coordinates move
    /// right/down. A non-positive grid leaves the item alone.
    pub fn snap_to_grid(&mut self, id: ItemId, grid: i32) -> bool {
        if grid <= 0 {
            return false;
        }
        match self.get_mut(id) {
            Some(item) => {
                let Point { x, y } = item.position();
                item.set_position(Point::new(grid * (x / grid), grid * (y / grid)));
                true
            }
            None => false,
        }
    }

    /// Rotates the selected item. No selection is a no-op.
    pub fn rotate_selected(&mut self, delta: i32) -> bool {
        match self.selected {
            Some(id) => self.rotate_item(id, delta),
            None => false,
        }
    }

    /// Resizes the selected item. No selection is a no-op.
    pub fn resize_selected(&mut self, factor: f64) -> bool {
        match self.selected {
            Some(id) => self.resize_item(id, factor),
            None => false,
        }
    }

    pub fn rotate_item(&mut self, id: ItemId, delta: i32) -> bool {
        match self.get_mut(id) {
            Some(item) => {
                item.rotate(delta);
                true
            }
            None => false,
        }
    }

    pub fn resize_item(&mut self, id: ItemId, factor: f64) -> bool {
        let visuals = self.visuals.clone();
        match self.get_mut(id) {
            Some(item) => {
                item.resize(factor, &visuals);
                true
            }
            None => false,
        }
    }

    pub fn move_item(&mut self, id: ItemId, dx: i32, dy: i32) -> bool {
        match self.get_mut(id) {
            Some(item) => {
                item.move_by(dx, dy);
                true
            }
            None => false,
        }
    }

    /// Sets an item's top-left corner directly.
    pub fn set_item_position(&mut self, id: ItemId, position: Point) -> bool {
        match self.get_mut(id) {
            Some(item) => {
                item.set_position(position);
                true
            }
            None => false,
        }
    }

    /// Captures the persisted part of the scene.
    pub fn snapshot(&self) -> DesignSnapshot {
        serialization::save(self)
    }

    /// Replaces room and items with the contents of `snapshot`.
    ///
    /// The snapshot is validated first; on error the scene is untouched.
    /// Items get fresh ids and visuals, placement is disarmed and the
    /// selection is cleared.
    pub fn restore(&mut self, snapshot: DesignSnapshot) -> Result<(), PersistenceError> {
        snapshot.validate()?;

        let DesignSnapshot { room, furniture } = snapshot;
        let mut items = Vec::with_capacity(furniture.len());
        for record in furniture {
            let id = self.generate_id();
            items.push(FurnitureItem::from_record(id, record, &self.visuals));
        }

        self.room = room;
        self.items = items;
        self.placement = None;
        self.select(None);
        Ok(())
    }

    /// Decodes a saved design and replaces the scene with it.
    ///
    /// All-or-nothing: a decode error leaves the scene untouched.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<(), PersistenceError> {
        let snapshot = serialization::decode(bytes)?;
        self.restore(snapshot)
    }
}
