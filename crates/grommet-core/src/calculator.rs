// File: crates/grommet-core/src/calculator.rs
// Summary: Owned calculator state (panel, spacing window, latest result) with a single recalculate step.

use crate::error::GrommetError;
use crate::perimeter::{locate, locate_all, PlacedPoint};
use crate::solver::{solve, SpacingResult};
use crate::types::{Rectangle, SpacingConfig};

/// Holds the current inputs and the result of the last calculation.
/// Changing an input drops the stale result until `recalculate` runs again.
#[derive(Clone, Debug)]
pub struct Calculator {
    rect: Rectangle,
    config: SpacingConfig,
    result: Option<SpacingResult>,
}

impl Calculator {
    pub fn new(rect: Rectangle, config: SpacingConfig) -> Self {
        Self { rect, config, result: None }
    }

    pub fn rectangle(&self) -> &Rectangle { &self.rect }
    pub fn config(&self) -> &SpacingConfig { &self.config }

    /// Latest result, if one was computed for the current inputs.
    pub fn result(&self) -> Option<&SpacingResult> { self.result.as_ref() }

    pub fn set_rectangle(&mut self, rect: Rectangle) {
        self.rect = rect;
        self.result = None;
    }

    /// Replace the panel from user-entered text. On error the previous panel and result are kept.
    pub fn set_dimensions(&mut self, width: &str, height: &str) -> Result<(), GrommetError> {
        let rect = Rectangle::parse(width, height)?;
        self.set_rectangle(rect);
        Ok(())
    }

    pub fn set_config(&mut self, config: SpacingConfig) {
        self.config = config;
        self.result = None;
    }

    /// Run the solver for the current inputs and keep the result.
    pub fn recalculate(&mut self) -> &SpacingResult {
        self.result.insert(solve(&self.rect, &self.config))
    }

    /// Placed points for the latest result, empty when nothing was calculated yet.
    pub fn placed_points(&self) -> Vec<PlacedPoint> {
        match &self.result {
            Some(r) => locate_all(&self.rect, r.positions()),
            None => Vec::new(),
        }
    }

    /// Placed point `index` (0-based) of the latest result.
    pub fn point(&self, index: usize) -> Option<PlacedPoint> {
        let r = self.result.as_ref()?;
        r.positions().get(index).map(|&d| locate(&self.rect, d))
    }
}

impl Default for Calculator {
    fn default() -> Self {
        // Sample panel the form starts with.
        Self::new(Rectangle::from_trusted(1000.0, 2000.0), SpacingConfig::default())
    }
}
