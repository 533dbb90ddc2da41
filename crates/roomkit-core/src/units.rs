//! Unit conversion utilities
//!
//! Rooms are configured in meters while the 2D scene works in pixels at a
//! fixed scale.

/// Fixed room-to-pixel scale of the 2D scene
pub const PIXELS_PER_METER: f64 = 50.0;

/// Largest room width or height, in meters
pub const MAX_ROOM_METERS: f64 = 50.0;

/// Convert meters to whole scene pixels, truncating toward zero.
pub fn meters_to_pixels(meters: f64) -> i32 {
    (meters * PIXELS_PER_METER) as i32
}

/// Convert scene pixels to meters.
pub fn pixels_to_meters(pixels: i32) -> f64 {
    f64::from(pixels) / PIXELS_PER_METER
}
