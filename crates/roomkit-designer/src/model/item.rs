use serde::{Deserialize, Serialize};
use std::fmt;

use super::{FurnitureKind, Point, Size};
use crate::visuals::{Visual, VisualCache};

/// Smallest width or height a resize may produce.
pub const MIN_ITEM_SIDE: i32 = 20;
/// Largest width or height a resize may produce.
pub const MAX_ITEM_SIDE: i32 = 500;

/// Scene-unique handle of a placed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The persisted part of a placed item.
///
/// `position` is the top-left corner of the unrotated rectangle; the item is
/// drawn rotated by `rotation` degrees about [`FurnitureRecord::center`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FurnitureRecord {
    pub kind: FurnitureKind,
    pub position: Point,
    pub size: Size,
    /// Degrees, always within `0..360`
    pub rotation: i32,
}

impl FurnitureRecord {
    pub fn new(kind: FurnitureKind, position: Point, size: Size) -> Self {
        let mut record = Self {
            kind,
            position,
            size,
            rotation: 0,
        };
        record.keep_in_range();
        record
    }

    /// Rotation pivot, with integer halves.
    pub fn center(&self) -> Point {
        Point::new(
            self.position.x.saturating_add(self.size.width / 2),
            self.position.y.saturating_add(self.size.height / 2),
        )
    }

    /// Hit test against the rotated rectangle.
    ///
    /// The point is rotated back by `rotation` about the center and tested
    /// against the half-open rectangle `[position, position + size)`.
    pub fn contains_point(&self, p: Point) -> bool {
        let c = self.center();
        let (sin, cos) = sin_cos_degrees(self.rotation);
        let dx = f64::from(p.x) - f64::from(c.x);
        let dy = f64::from(p.y) - f64::from(c.y);
        let local_x = f64::from(c.x) + dx * cos + dy * sin;
        let local_y = f64::from(c.y) - dx * sin + dy * cos;

        let left = f64::from(self.position.x);
        let top = f64::from(self.position.y);
        local_x >= left
            && local_x < left + f64::from(self.size.width)
            && local_y >= top
            && local_y < top + f64::from(self.size.height)
    }

    /// Adds `delta` degrees. Any delta that is not a multiple of 180 swaps
    /// width and height; the center stays where it was.
    pub fn rotate(&mut self, delta: i32) {
        let center = self.center();
        self.rotation = (self.rotation + delta.rem_euclid(360)).rem_euclid(360);
        if delta % 180 != 0 {
            self.size = self.size.swapped();
            self.recenter(center);
        }
    }

    /// Scales both sides by `factor`, truncating and clamping each to
    /// `MIN_ITEM_SIDE..=MAX_ITEM_SIDE`, keeping the center fixed.
    pub fn resize(&mut self, factor: f64) {
        let center = self.center();
        self.size = Size::new(
            scale_side(self.size.width, factor),
            scale_side(self.size.height, factor),
        );
        self.recenter(center);
    }

    /// Moves by a delta, stopping where the far edge would leave `i32` range.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.position = Point::new(
            self.position.x.saturating_add(dx),
            self.position.y.saturating_add(dy),
        );
        self.keep_in_range();
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
        self.keep_in_range();
    }

    /// Checks the invariants a decoded record must hold.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if !(0..360).contains(&self.rotation) {
            return Err(format!(
                "{} rotation {} is outside 0..360",
                self.kind, self.rotation
            ));
        }
        if self.size.width <= 0 || self.size.height <= 0 {
            return Err(format!(
                "{} size {}x{} is not positive",
                self.kind, self.size.width, self.size.height
            ));
        }
        if self.position.x.checked_add(self.size.width).is_none()
            || self.position.y.checked_add(self.size.height).is_none()
        {
            return Err(format!(
                "{} at ({}, {}) extends past the coordinate range",
                self.kind, self.position.x, self.position.y
            ));
        }
        Ok(())
    }

    fn recenter(&mut self, center: Point) {
        self.position = Point::new(
            center.x.saturating_sub(self.size.width / 2),
            center.y.saturating_sub(self.size.height / 2),
        );
        self.keep_in_range();
    }

    fn keep_in_range(&mut self) {
        self.position = Point::new(
            self.position.x.min(i32::MAX - self.size.width.max(0)),
            self.position.y.min(i32::MAX - self.size.height.max(0)),
        );
    }
}

fn scale_side(side: i32, factor: f64) -> i32 {
    // `as` saturates out-of-range values and maps NaN to 0
    let scaled = (f64::from(side) * factor) as i32;
    scaled.clamp(MIN_ITEM_SIDE, MAX_ITEM_SIDE)
}

/// Exact values for quarter turns so axis-aligned poses hit-test without drift.
fn sin_cos_degrees(degrees: i32) -> (f64, f64) {
    match degrees.rem_euclid(360) {
        0 => (0.0, 1.0),
        90 => (1.0, 0.0),
        180 => (0.0, -1.0),
        270 => (-1.0, 0.0),
        other => f64::from(other).to_radians().sin_cos(),
    }
}

/// A placed piece of furniture: its persisted record plus the derived visual.
#[derive(Debug, Clone)]
pub struct FurnitureItem {
    id: ItemId,
    record: FurnitureRecord,
    visual: Visual,
}

impl FurnitureItem {
    pub(crate) fn new(
        id: ItemId,
        kind: FurnitureKind,
        position: Point,
        size: Size,
        visuals: &VisualCache,
    ) -> Self {
        Self::from_record(id, FurnitureRecord::new(kind, position, size), visuals)
    }

    pub(crate) fn from_record(id: ItemId, record: FurnitureRecord, visuals: &VisualCache) -> Self {
        let visual = visuals.derive(record.kind, record.size);
        Self { id, record, visual }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn kind(&self) -> FurnitureKind {
        self.record.kind
    }

    pub fn position(&self) -> Point {
        self.record.position
    }

    pub fn size(&self) -> Size {
        self.record.size
    }

    pub fn rotation(&self) -> i32 {
        self.record.rotation
    }

    pub fn center(&self) -> Point {
        self.record.center()
    }

    pub fn record(&self) -> &FurnitureRecord {
        &self.record
    }

    pub fn visual(&self) -> &Visual {
        &self.visual
    }

    pub fn contains_point(&self, p: Point) -> bool {
        self.record.contains_point(p)
    }

    pub fn rotate(&mut self, delta: i32) {
        self.record.rotate(delta);
    }

    /// Resizes and re-derives the visual at the new size.
    pub fn resize(&mut self, factor: f64, visuals: &VisualCache) {
        self.record.resize(factor);
        self.visual = visuals.derive(self.record.kind, self.record.size);
    }

    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.record.translate(dx, dy);
    }

    pub fn set_position(&mut self, position: Point) {
        self.record.set_position(position);
    }
}
