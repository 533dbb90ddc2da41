//! Visual resources for placed furniture.
//!
//! Each kind may have a source image `<asset_dir>/<kind>.png`. The
//! [`VisualCache`] loads a source at most once per kind (misses are cached
//! too) and lives for the rest of the process. Clones of a cache share the
//! same table, so one cache handle is created by the designer session and
//! handed to every scene it builds.
//!
//! Deriving a visual never touches the cached source: every call scales a
//! fresh bitmap, so items of the same kind resized independently never share
//! pixel data.

use image::imageops::{self, FilterType};
use image::RgbaImage;
use roomkit_core::{thread_safe_rw_map, Rgb, ThreadSafeRwMap};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::model::{FurnitureKind, Size};

/// Corner radius of the fallback rounded rectangle, in pixels.
pub const FALLBACK_CORNER_RADIUS: f32 = 5.0;

/// What to draw for a placed item.
#[derive(Clone)]
pub enum Visual {
    /// Kind image scaled to the item's size
    Bitmap(Arc<RgbaImage>),
    /// No image available: colored rounded rectangle with the kind's label centered
    Fallback(FallbackVisual),
}

impl Visual {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Visual::Fallback(_))
    }

    pub fn bitmap(&self) -> Option<&RgbaImage> {
        match self {
            Visual::Bitmap(image) => Some(image),
            Visual::Fallback(_) => None,
        }
    }
}

impl fmt::Debug for Visual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visual::Bitmap(image) => write!(f, "Bitmap({}x{})", image.width(), image.height()),
            Visual::Fallback(fallback) => f.debug_tuple("Fallback").field(fallback).finish(),
        }
    }
}

/// Deterministic stand-in drawn when a kind has no image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallbackVisual {
    pub fill: Rgb,
    pub outline: Rgb,
    pub label: &'static str,
    pub corner_radius: f32,
}

impl FallbackVisual {
    pub fn for_kind(kind: FurnitureKind) -> Self {
        let profile = kind.profile();
        Self {
            fill: profile.color,
            outline: Rgb::BLACK,
            label: profile.label,
            corner_radius: FALLBACK_CORNER_RADIUS,
        }
    }
}

/// Process-lifetime cache of per-kind source images.
#[derive(Clone)]
pub struct VisualCache {
    asset_dir: Option<PathBuf>,
    sources: ThreadSafeRwMap<FurnitureKind, Option<Arc<RgbaImage>>>,
}

impl VisualCache {
    /// Creates a cache that looks for `<kind>.png` files in `asset_dir`.
    pub fn new(asset_dir: Option<PathBuf>) -> Self {
        Self {
            asset_dir,
            sources: thread_safe_rw_map(),
        }
    }

    /// Creates a cache with no image directory; every kind uses the fallback.
    pub fn without_assets() -> Self {
        Self::new(None)
    }

    pub fn asset_dir(&self) -> Option<&Path> {
        self.asset_dir.as_deref()
    }

    /// Derives a fresh visual for an item of `kind` at `size`.
    pub fn derive(&self, kind: FurnitureKind, size: Size) -> Visual {
        match self.source(kind) {
            Some(source) => {
                let width = size.width.max(1) as u32;
                let height = size.height.max(1) as u32;
                let scaled = imageops::resize(&*source, width, height, FilterType::Triangle);
                Visual::Bitmap(Arc::new(scaled))
            }
            None => Visual::Fallback(FallbackVisual::for_kind(kind)),
        }
    }

    /// Number of kinds looked up so far, hits and misses alike.
    pub fn cached_kinds(&self) -> usize {
        self.sources.read().len()
    }

    fn source(&self, kind: FurnitureKind) -> Option<Arc<RgbaImage>> {
        if let Some(entry) = self.sources.read().get(&kind) {
            return entry.clone();
        }

        let loaded = self.load(kind);
        self.sources.write().entry(kind).or_insert(loaded).clone()
    }

    fn load(&self, kind: FurnitureKind) -> Option<Arc<RgbaImage>> {
        let dir = self.asset_dir.as_ref()?;
        let path = dir.join(format!("{}.png", kind.profile().asset_name));
        match image::open(&path) {
            Ok(image) => {
                tracing::debug!("Loaded {} image from {}", kind, path.display());
                Some(Arc::new(image.to_rgba8()))
            }
            Err(err) => {
                tracing::debug!(
                    "No image for {} at {} ({}), using fallback",
                    kind,
                    path.display(),
                    err
                );
                None
            }
        }
    }
}

impl Default for VisualCache {
    fn default() -> Self {
        Self::without_assets()
    }
}

impl fmt::Debug for VisualCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisualCache")
            .field("asset_dir", &self.asset_dir)
            .field("cached_kinds", &self.cached_kinds())
            .finish()
    }
}
