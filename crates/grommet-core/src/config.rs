// File: crates/grommet-core/src/config.rs
// Summary: TOML settings file (spacing window, sample panel, report and render options).
// Notes:
// - Every table and field is optional; missing values fall back to `Default`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;

use crate::types::{AdjustmentPolicy, Rectangle, SpacingConfig, DEFAULT_MAX_SPACING, DEFAULT_MIN_SPACING};

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub spacing: SpacingSettings,
    pub panel: PanelSettings,
    pub report: ReportSettings,
    pub render: RenderSettings,
    pub output: OutputSettings,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpacingSettings {
    pub min: f64,
    pub max: f64,
    pub policy: AdjustmentPolicy,
}

impl Default for SpacingSettings {
    fn default() -> Self {
        Self { min: DEFAULT_MIN_SPACING, max: DEFAULT_MAX_SPACING, policy: AdjustmentPolicy::default() }
    }
}

/// Panel used when no dimensions are given on the command line.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanelSettings {
    pub width: f64,
    pub height: f64,
}

impl Default for PanelSettings {
    fn default() -> Self { Self { width: 1000.0, height: 2000.0 } }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportSettings {
    pub grommet_type: String,
}

impl Default for ReportSettings {
    fn default() -> Self { Self { grommet_type: "10 mm steel".into() } }
}

/// Raster layout options, in pixels.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSettings {
    pub width: i32,
    pub height: i32,
    pub margin: u32,
    pub theme: String,
    pub draw_labels: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self { width: 1024, height: 768, margin: 56, theme: "light".into(), draw_labels: true }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSettings {
    pub dir: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self { Self { dir: PathBuf::from("target/out") } }
}

impl Settings {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(text).context("parsing settings")?;
        // fail early on a bad window rather than at the first calculation
        settings.spacing_config()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings {}", path.display()))?;
        let settings = Self::from_toml_str(&text)
            .with_context(|| format!("in {}", path.display()))?;
        debug!("loaded settings from {}: {:?}", path.display(), settings);
        Ok(settings)
    }

    pub fn spacing_config(&self) -> Result<SpacingConfig> {
        let cfg = SpacingConfig::new(self.spacing.min, self.spacing.max)?;
        Ok(cfg.with_policy(self.spacing.policy))
    }

    pub fn panel(&self) -> Result<Rectangle> {
        Ok(Rectangle::new(self.panel.width, self.panel.height)?)
    }
}
