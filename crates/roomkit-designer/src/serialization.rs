//! Serialization and deserialization for saved designs.
//!
//! A design is stored as JSON:
//!
//! ```text
//! {
//!   "metadata": { "name": ..., "created": ..., "modified": ... },   (optional)
//!   "room": { "width": 5.0, "height": 3.0, "shape": "Rectangle", "wall_color": {...} },
//!   "furniture": [ { "kind": "Chair", "position": {...}, "size": {...}, "rotation": 0 } ]
//! }
//! ```
//!
//! Visuals and item ids are never written; they are derived again on load.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use roomkit_core::PersistenceError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

use crate::model::{FurnitureKind, FurnitureRecord, RoomConfig, Size};
use crate::scene::Scene;
use crate::visuals::VisualCache;

/// Persisted projection of a scene: the room and the ordered item records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSnapshot {
    pub room: RoomConfig,
    pub furniture: Vec<FurnitureRecord>,
}

impl DesignSnapshot {
    /// Checks the invariants every loaded design must satisfy.
    pub fn validate(&self) -> Result<(), PersistenceError> {
        self.room
            .validate()
            .map_err(|e| PersistenceError::corrupt(e.to_string()))?;
        for (index, record) in self.furniture.iter().enumerate() {
            record
                .validate()
                .map_err(|reason| PersistenceError::corrupt(format!("item {}: {}", index, reason)))?;
        }
        Ok(())
    }
}

/// Design metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl DesignMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            created: now,
            modified: now,
        }
    }
}

/// Complete design file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DesignMetadata>,
    #[serde(flatten)]
    pub design: DesignSnapshot,
}

impl DesignFile {
    /// Wraps a snapshot with fresh metadata.
    pub fn new(name: impl Into<String>, design: DesignSnapshot) -> Self {
        Self {
            metadata: Some(DesignMetadata::new(name)),
            design,
        }
    }

    /// Save design to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize design")?;

        std::fs::write(path.as_ref(), json).context("Failed to write design file")?;

        Ok(())
    }

    /// Load design from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path.as_ref()).context("Failed to read design file")?;

        decode_file(&bytes).context("Failed to parse design file")
    }
}

/// Projects a scene onto its persisted form.
pub fn save(scene: &Scene) -> DesignSnapshot {
    DesignSnapshot {
        room: scene.room().clone(),
        furniture: scene.items().iter().map(|item| *item.record()).collect(),
    }
}

/// Encodes a snapshot as pretty-printed JSON.
pub fn encode(snapshot: &DesignSnapshot) -> Result<Vec<u8>, PersistenceError> {
    serde_json::to_vec_pretty(snapshot).map_err(|e| PersistenceError::Encode {
        reason: e.to_string(),
    })
}

/// Decodes and validates a saved design. Metadata, if present, is ignored.
pub fn decode(bytes: &[u8]) -> Result<DesignSnapshot, PersistenceError> {
    decode_file(bytes).map(|file| file.design)
}

/// Decodes and validates a saved design together with its metadata.
///
/// Unknown furniture tags are reported as [`PersistenceError::UnknownKind`];
/// any other mismatch in shape or invariants as
/// [`PersistenceError::CorruptData`].
pub fn decode_file(bytes: &[u8]) -> Result<DesignFile, PersistenceError> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| PersistenceError::corrupt(e.to_string()))?;

    check_kind_tags(&value)?;

    let file: DesignFile =
        serde_json::from_value(value).map_err(|e| PersistenceError::corrupt(e.to_string()))?;
    file.design.validate()?;
    Ok(file)
}

/// Decodes a saved design into a new scene.
pub fn load(
    bytes: &[u8],
    visuals: VisualCache,
    default_size: Size,
) -> Result<Scene, PersistenceError> {
    let snapshot = decode(bytes)?;
    let mut scene = Scene::new(visuals, default_size);
    scene.restore(snapshot)?;
    Ok(scene)
}

fn check_kind_tags(value: &Value) -> Result<(), PersistenceError> {
    let Some(records) = value.get("furniture").and_then(Value::as_array) else {
        return Ok(());
    };

    for tag in records
        .iter()
        .filter_map(|record| record.get("kind"))
        .filter_map(Value::as_str)
    {
        if FurnitureKind::from_tag(tag).is_none() {
            return Err(PersistenceError::UnknownKind {
                tag: tag.to_string(),
            });
        }
    }
    Ok(())
}
