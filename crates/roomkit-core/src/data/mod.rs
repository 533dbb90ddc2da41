//! Shared data types used by the settings and designer crates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outline shape of the room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomShape {
    /// Full width × height rectangle
    Rectangle,
    /// Square with side min(width, height)
    Square,
    /// Full-width upper half plus a half-width lower-left extension
    LShaped,
}

impl Default for RoomShape {
    fn default() -> Self {
        Self::Rectangle
    }
}

impl fmt::Display for RoomShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rectangle => write!(f, "Rectangle"),
            Self::Square => write!(f, "Square"),
            Self::LShaped => write!(f, "L-Shape"),
        }
    }
}

impl FromStr for RoomShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rectangle" => Ok(Self::Rectangle),
            "square" => Ok(Self::Square),
            "l-shape" | "lshaped" | "l-shaped" => Ok(Self::LShaped),
            _ => Err(format!("Unknown room shape: {}", s)),
        }
    }
}

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const LIGHT_GRAY: Rgb = Rgb::new(192, 192, 192);
    pub const RED: Rgb = Rgb::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
