// File: crates/grommet-core/src/error.rs
// Summary: Error taxonomy for input validation.

use thiserror::Error;

/// Errors raised while validating calculator inputs.
/// Everything after validation is total, so these are the only failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GrommetError {
    /// Width or height is non-positive, non-finite, longer than 100 m or not a number.
    #[error("invalid {name}: {value:?} (expected a positive number of millimeters, at most 100000)")]
    InvalidDimension { name: &'static str, value: String },

    /// Spacing window starts below 1 mm, is non-finite or has max below min.
    #[error("invalid spacing window {min}..{max} mm")]
    InvalidSpacing { min: f64, max: f64 },
}

impl GrommetError {
    pub(crate) fn dimension(name: &'static str, value: impl ToString) -> Self {
        Self::InvalidDimension { name, value: value.to_string() }
    }
}
