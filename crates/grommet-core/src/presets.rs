// File: crates/grommet-core/src/presets.rs
// Summary: Reference panels with their published grommet counts.
// Notes:
// - The published figures were worked out with a 33 mm target spacing,
//   so they reproduce with `catalogue_config()` rather than the 30..35 mm default.

use crate::types::{Rectangle, SpacingConfig};

/// Spacing window whose midpoint (33 mm) matches the published figures.
pub fn catalogue_config() -> SpacingConfig {
    SpacingConfig::new(31.0, 35.0).unwrap_or_default()
}

#[derive(Clone, Copy, Debug)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub rect: Rectangle,
    pub published_count: usize,
    pub published_spacing: f64,
}

pub fn standard_banner() -> Preset {
    Preset {
        name: "standard-banner",
        description: "Standard advertising banner with even load distribution",
        rect: Rectangle::from_trusted(3000.0, 2000.0),
        published_count: 303,
        published_spacing: 33.0,
    }
}

pub fn truck_tarp() -> Preset {
    Preset {
        name: "truck-tarp",
        description: "Reinforced truck tarp for industrial loads",
        rect: Rectangle::from_trusted(5000.0, 2500.0),
        published_count: 455,
        published_spacing: 33.0,
    }
}

pub fn small_panel() -> Preset {
    Preset {
        name: "small-panel",
        description: "Compact panel for indoor or point-of-sale use",
        rect: Rectangle::from_trusted(500.0, 700.0),
        published_count: 73,
        published_spacing: 32.9,
    }
}

pub fn large_awning() -> Preset {
    Preset {
        name: "large-awning",
        description: "Large awning or shelter with maximum fastening strength",
        rect: Rectangle::from_trusted(8000.0, 6000.0),
        published_count: 848,
        published_spacing: 33.0,
    }
}

/// Return the built-in reference panels.
pub fn presets() -> Vec<Preset> {
    vec![standard_banner(), truck_tarp(), small_panel(), large_awning()]
}

/// Find a preset by its `name`.
pub fn find(name: &str) -> Option<Preset> {
    presets().into_iter().find(|p| p.name.eq_ignore_ascii_case(name))
}
