//! Scene model: geometry primitives, furniture kinds, the room, and placed items.

use serde::{Deserialize, Serialize};

mod item;
mod kind;
mod room;

pub use item::{FurnitureItem, FurnitureRecord, ItemId, MAX_ITEM_SIDE, MIN_ITEM_SIDE};
pub use kind::{FurnitureKind, KindProfile};
pub use room::{PixelRect, RoomConfig, ROOM_ORIGIN};

/// A point in scene pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise offset from `other` to `self`.
    pub fn delta_from(&self, other: Point) -> (i32, i32) {
        (self.x.saturating_sub(other.x), self.y.saturating_sub(other.y))
    }
}

/// A width/height pair in scene pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn swapped(&self) -> Self {
        Self::new(self.height, self.width)
    }
}
