use roomkit_core::Rgb;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Furniture kinds offered by the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FurnitureKind {
    Chair,
    Table,
    Sofa,
    Bed,
    Cabinet,
    Lamp,
    Other,
}

/// Per-kind defaults looked up from [`FurnitureKind::profile`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindProfile {
    /// Text shown on the fallback visual
    pub label: &'static str,
    /// Image file stem; `chair` resolves to `chair.png`
    pub asset_name: &'static str,
    /// Fill used by the fallback visual
    pub color: Rgb,
    /// Width × height × depth in meters for the 3D view
    pub footprint_3d: (f32, f32, f32),
}

const PROFILES: [KindProfile; 7] = [
    KindProfile {
        label: "Chair",
        asset_name: "chair",
        color: Rgb::new(204, 51, 51),
        footprint_3d: (0.5, 0.8, 0.5),
    },
    KindProfile {
        label: "Table",
        asset_name: "table",
        color: Rgb::new(153, 102, 51),
        footprint_3d: (1.2, 0.7, 1.2),
    },
    KindProfile {
        label: "Sofa",
        asset_name: "sofa",
        color: Rgb::new(51, 51, 204),
        footprint_3d: (1.8, 0.7, 0.8),
    },
    KindProfile {
        label: "Bed",
        asset_name: "bed",
        color: Rgb::new(230, 230, 230),
        footprint_3d: (2.0, 0.5, 1.5),
    },
    KindProfile {
        label: "Cabinet",
        asset_name: "cabinet",
        color: Rgb::new(128, 77, 26),
        footprint_3d: (0.8, 1.5, 0.5),
    },
    KindProfile {
        label: "Lamp",
        asset_name: "lamp",
        color: Rgb::new(230, 230, 26),
        footprint_3d: (0.3, 1.0, 0.3),
    },
    KindProfile {
        label: "Other",
        asset_name: "other",
        color: Rgb::new(128, 128, 128),
        footprint_3d: (0.5, 0.5, 0.5),
    },
];

impl FurnitureKind {
    /// Every kind, in palette order.
    pub const ALL: [FurnitureKind; 7] = [
        FurnitureKind::Chair,
        FurnitureKind::Table,
        FurnitureKind::Sofa,
        FurnitureKind::Bed,
        FurnitureKind::Cabinet,
        FurnitureKind::Lamp,
        FurnitureKind::Other,
    ];

    pub fn profile(self) -> &'static KindProfile {
        let index = match self {
            FurnitureKind::Chair => 0,
            FurnitureKind::Table => 1,
            FurnitureKind::Sofa => 2,
            FurnitureKind::Bed => 3,
            FurnitureKind::Cabinet => 4,
            FurnitureKind::Lamp => 5,
            FurnitureKind::Other => 6,
        };
        &PROFILES[index]
    }

    pub fn label(self) -> &'static str {
        self.profile().label
    }

    /// Width, height and depth in meters of the kind's 3D model.
    pub fn footprint_3d(self) -> (f32, f32, f32) {
        self.profile().footprint_3d
    }

    /// Tag used in saved designs.
    pub fn tag(self) -> &'static str {
        self.label()
    }

    /// Looks up a kind by its exact saved-design tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        FurnitureKind::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

impl fmt::Display for FurnitureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FurnitureKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FurnitureKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == s || kind.profile().asset_name == s)
            .ok_or_else(|| format!("Unknown furniture kind: {}", s))
    }
}
