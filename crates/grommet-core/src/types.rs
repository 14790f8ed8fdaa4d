// File: crates/grommet-core/src/types.rs
// Summary: Shared input types (panel rectangle, spacing window) and defaults.

use serde::{Deserialize, Serialize};

use crate::error::GrommetError;

/// Default lower bound of the spacing window, in millimeters.
pub const DEFAULT_MIN_SPACING: f64 = 30.0;
/// Default upper bound of the spacing window, in millimeters.
pub const DEFAULT_MAX_SPACING: f64 = 35.0;
/// Smallest number of grommets ever placed (one per corner region).
pub const MIN_COUNT: usize = 4;
/// Largest accepted panel side, in millimeters (100 m).
pub const MAX_DIMENSION: f64 = 100_000.0;
/// Smallest accepted lower spacing bound, in millimeters.
/// With `MAX_DIMENSION` this caps a layout at 400 000 grommets.
pub const MIN_SPACING_LIMIT: f64 = 1.0;

/// Panel outline in millimeters.
/// Contract: both sides are finite, strictly positive and at most `MAX_DIMENSION`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    /// Validate and build a rectangle.
    pub fn new(width: f64, height: f64) -> Result<Self, GrommetError> {
        let width = check_dimension("width", width)?;
        let height = check_dimension("height", height)?;
        Ok(Self { width, height })
    }

    /// Parse user-entered text (form fields, CLI args).
    pub fn parse(width: &str, height: &str) -> Result<Self, GrommetError> {
        let w = parse_dimension("width", width)?;
        let h = parse_dimension("height", height)?;
        Self::new(w, h)
    }

    /// Caller guarantees the contract; used for built-in constants.
    pub(crate) const fn from_trusted(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub const fn width(&self) -> f64 { self.width }
    pub const fn height(&self) -> f64 { self.height }

    /// Full perimeter length, unrounded.
    pub fn perimeter(&self) -> f64 { 2.0 * (self.width + self.height) }
}

fn check_dimension(name: &'static str, v: f64) -> Result<f64, GrommetError> {
    if v.is_finite() && v > 0.0 && v <= MAX_DIMENSION { Ok(v) } else { Err(GrommetError::dimension(name, v)) }
}

fn parse_dimension(name: &'static str, raw: &str) -> Result<f64, GrommetError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| GrommetError::dimension(name, raw))
}

/// How the solver treats a spacing that falls outside the window after rounding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentPolicy {
    /// Keep the count derived from the window midpoint as-is.
    Simple,
    /// Step the count until the spacing lands inside the window.
    #[default]
    Corrective,
}

impl AdjustmentPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Corrective => "corrective",
        }
    }
}

/// Allowed spacing window between neighbouring grommets.
/// Contract: `MIN_SPACING_LIMIT <= min <= max`, both finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpacingConfig {
    min: f64,
    max: f64,
    policy: AdjustmentPolicy,
}

impl SpacingConfig {
    pub fn new(min: f64, max: f64) -> Result<Self, GrommetError> {
        if !(min.is_finite() && max.is_finite()) || min < MIN_SPACING_LIMIT || max < min {
            return Err(GrommetError::InvalidSpacing { min, max });
        }
        Ok(Self { min, max, policy: AdjustmentPolicy::default() })
    }

    pub fn with_policy(mut self, policy: AdjustmentPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub const fn min(&self) -> f64 { self.min }
    pub const fn max(&self) -> f64 { self.max }
    pub const fn policy(&self) -> AdjustmentPolicy { self.policy }

    /// Midpoint of the window; the solver aims for this spacing first.
    pub fn target(&self) -> f64 { (self.min + self.max) / 2.0 }

    pub fn contains(&self, spacing: f64) -> bool { spacing >= self.min && spacing <= self.max }
}

impl Default for SpacingConfig {
    fn default() -> Self {
        Self { min: DEFAULT_MIN_SPACING, max: DEFAULT_MAX_SPACING, policy: AdjustmentPolicy::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_dimensions() {
        assert!(Rectangle::new(0.0, 10.0).is_err());
        assert!(Rectangle::new(10.0, -1.0).is_err());
        assert!(Rectangle::new(f64::NAN, 10.0).is_err());
        assert!(Rectangle::new(10.0, f64::INFINITY).is_err());
        assert!(Rectangle::new(MAX_DIMENSION + 1.0, 10.0).is_err());
        assert!(Rectangle::new(MAX_DIMENSION, MAX_DIMENSION).is_ok());
        assert!(Rectangle::parse("abc", "10").is_err());
        assert!(Rectangle::parse("", "10").is_err());
    }

    #[test]
    fn parses_trimmed_text() {
        let r = Rectangle::parse(" 1000 ", "2000.5").unwrap();
        assert_eq!(r.width(), 1000.0);
        assert_eq!(r.height(), 2000.5);
    }

    #[test]
    fn invalid_dimension_names_the_field() {
        let err = Rectangle::parse("12", "x").unwrap_err();
        assert_eq!(err, GrommetError::InvalidDimension { name: "height", value: "x".into() });
    }

    #[test]
    fn spacing_window_validation() {
        assert!(SpacingConfig::new(30.0, 35.0).is_ok());
        assert!(SpacingConfig::new(33.0, 33.0).is_ok());
        assert!(SpacingConfig::new(0.0, 35.0).is_err());
        assert!(SpacingConfig::new(0.5, 35.0).is_err());
        assert!(SpacingConfig::new(1.0, 1.0).is_ok());
        assert!(SpacingConfig::new(35.0, 30.0).is_err());
        assert!(SpacingConfig::new(30.0, f64::NAN).is_err());
    }
}
