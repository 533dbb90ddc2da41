//! File I/O operations (save, load, new) for designer state.

use anyhow::Context;
use std::path::Path;

use super::{DesignerState, UNTITLED};
use crate::serialization::DesignFile;

impl DesignerState {
    /// Save design to file.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let design = DesignFile::new(&self.design_name, self.scene.snapshot());

        design
            .save_to_file(path)
            .with_context(|| format!("Failed to save design to {}", path.display()))?;

        tracing::info!(
            "Saved {} items to {}",
            design.design.furniture.len(),
            path.display()
        );

        // Update state
        self.current_file_path = Some(path.to_path_buf());
        self.is_modified = false;

        Ok(())
    }

    /// Load design from file.
    ///
    /// The current design is only replaced when the whole file decodes.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let design = DesignFile::load_from_file(path)
            .with_context(|| format!("Failed to load design from {}", path.display()))?;

        let name = design.metadata.as_ref().map(|m| m.name.clone());
        self.scene
            .restore(design.design)
            .with_context(|| format!("Failed to restore design from {}", path.display()))?;
        self.controller.reset();

        tracing::info!(
            "Loaded {} items from {}",
            self.scene.item_count(),
            path.display()
        );

        // Update state
        self.design_name = name.unwrap_or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or(UNTITLED)
                .to_string()
        });
        self.current_file_path = Some(path.to_path_buf());
        self.is_modified = false;

        Ok(())
    }

    /// Create new design (clear all).
    pub fn new_design(&mut self) {
        self.controller.reset();
        self.scene.begin_placement(None);
        self.scene.clear();
        self.current_file_path = None;
        self.is_modified = false;
        self.design_name = UNTITLED.to_string();
    }
}
