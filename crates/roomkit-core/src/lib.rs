//! # roomkit Core
//!
//! Core types, errors, and utilities for roomkit.
//! Provides the fundamental abstractions shared by the settings and
//! designer crates: room/color data, unit conversion, listener handles,
//! and the error hierarchy.

pub mod data;
pub mod error;
pub mod listener;
pub mod types;
pub mod units;

pub use data::{RoomShape, Rgb};

pub use error::{Error, PersistenceError, Result, RoomError};

pub use listener::SubscriptionId;

pub use types::{
    shared, shared_vec, thread_safe_rw_map, Shared, SharedVec, ThreadSafeRwMap,
};

pub use units::{meters_to_pixels, pixels_to_meters, MAX_ROOM_METERS, PIXELS_PER_METER};
