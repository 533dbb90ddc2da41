//! Error handling for roomkit
//!
//! Provides error types for the layers of the editor:
//! - Room errors (configuration values coming from the room form)
//! - Persistence errors (decoding saved designs)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Room configuration error type
///
/// Raised when a room configuration event carries values that cannot
/// describe a room. The event is dropped and the scene stays unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoomError {
    /// A dimension is not a finite value in `(0, MAX_ROOM_METERS]`
    #[error("Invalid room {field}: {value} (must be more than 0 and at most 50 meters)")]
    InvalidDimension {
        /// The dimension name ("width" or "height").
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A dimension could not be parsed from user text
    #[error("Malformed room {field}: '{input}' is not a number")]
    MalformedNumber {
        /// The dimension name ("width" or "height").
        field: &'static str,
        /// The text that failed to parse.
        input: String,
    },
}

/// Persistence error type
///
/// Represents failures while decoding a saved design. A load that fails
/// with any of these leaves the current scene untouched.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// The byte stream does not have the shape of a saved design
    #[error("Corrupt design data: {reason}")]
    CorruptData {
        /// What did not match.
        reason: String,
    },

    /// A furniture record names a kind this build does not know
    #[error("Unknown furniture kind '{tag}'")]
    UnknownKind {
        /// The unrecognized tag.
        tag: String,
    },

    /// The design could not be encoded
    #[error("Failed to encode design: {reason}")]
    Encode {
        /// The reason encoding failed.
        reason: String,
    },
}

impl PersistenceError {
    /// Create a corrupt-data error from any displayable reason
    pub fn corrupt(reason: impl Into<String>) -> Self {
        PersistenceError::CorruptData {
            reason: reason.into(),
        }
    }
}

/// Main error type for roomkit
///
/// A unified error type that can represent any error from the library layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Room configuration error
    #[error(transparent)]
    Room(#[from] RoomError),

    /// Persistence error
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this error came from decoding a design
    pub fn is_persistence_error(&self) -> bool {
        matches!(self, Error::Persistence(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
