use roomkit_core::{meters_to_pixels, RoomError, RoomShape, Rgb, MAX_ROOM_METERS};
use serde::{Deserialize, Serialize};

use super::Point;

/// Scene pixel position of the room's top-left corner.
pub const ROOM_ORIGIN: Point = Point::new(50, 50);

/// Axis-aligned rectangle in scene pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Room configuration: dimensions in meters, outline shape and wall color.
///
/// Replaced wholesale by a configuration event; there are no setters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomConfig {
    width: f64,
    height: f64,
    shape: RoomShape,
    wall_color: Rgb,
}

impl RoomConfig {
    pub fn new(width: f64, height: f64, shape: RoomShape, wall_color: Rgb) -> Result<Self, RoomError> {
        check_dimension("width", width)?;
        check_dimension("height", height)?;
        Ok(Self {
            width,
            height,
            shape,
            wall_color,
        })
    }

    /// Builds a configuration from the text of the room form's number fields.
    pub fn from_form(
        width: &str,
        height: &str,
        shape: RoomShape,
        wall_color: Rgb,
    ) -> Result<Self, RoomError> {
        let width = parse_dimension("width", width)?;
        let height = parse_dimension("height", height)?;
        Self::new(width, height, shape, wall_color)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn shape(&self) -> RoomShape {
        self.shape
    }

    pub fn wall_color(&self) -> Rgb {
        self.wall_color
    }

    /// Checks a deserialized configuration.
    pub(crate) fn validate(&self) -> Result<(), RoomError> {
        check_dimension("width", self.width)?;
        check_dimension("height", self.height)
    }

    /// Floor area of the room as scene rectangles anchored at [`ROOM_ORIGIN`].
    pub fn outline(&self) -> Vec<PixelRect> {
        let w = meters_to_pixels(self.width);
        let h = meters_to_pixels(self.height);
        let Point { x, y } = ROOM_ORIGIN;

        match self.shape {
            RoomShape::Rectangle => vec![PixelRect::new(x, y, w, h)],
            RoomShape::Square => {
                let side = w.min(h);
                vec![PixelRect::new(x, y, side, side)]
            }
            RoomShape::LShaped => {
                let upper_h = h / 2;
                vec![
                    PixelRect::new(x, y, w, upper_h),
                    PixelRect::new(x, y.saturating_add(upper_h), w / 2, h / 2),
                ]
            }
        }
    }

    /// Summary line drawn in the room's corner, e.g. `5.0m x 3.0m (Rectangle)`.
    pub fn caption(&self) -> String {
        format!("{:.1}m x {:.1}m ({})", self.width, self.height, self.shape)
    }
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            width: 5.0,
            height: 3.0,
            shape: RoomShape::Rectangle,
            wall_color: Rgb::WHITE,
        }
    }
}

fn check_dimension(field: &'static str, value: f64) -> Result<(), RoomError> {
    if value.is_finite() && value > 0.0 && value <= MAX_ROOM_METERS {
        Ok(())
    } else {
        Err(RoomError::InvalidDimension { field, value })
    }
}

fn parse_dimension(field: &'static str, input: &str) -> Result<f64, RoomError> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| RoomError::MalformedNumber {
            field,
            input: input.to_string(),
        })
}
