// File: crates/grommet-core/src/solver.rs
// Summary: Spacing solver; derives grommet count and perimeter offsets for a panel.

use log::{debug, warn};

use crate::error::GrommetError;
use crate::types::{AdjustmentPolicy, Rectangle, SpacingConfig, MIN_COUNT};

/// Outcome of one calculation. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct SpacingResult {
    count: usize,
    exact_spacing: f64,
    exact_perimeter: f64,
    positions: Vec<f64>,
}

impl SpacingResult {
    /// Number of grommets, never below 4.
    pub fn count(&self) -> usize { self.count }

    /// Spacing rounded to 0.1 mm for display.
    pub fn spacing(&self) -> f64 { round_to(self.exact_spacing, 1) }

    /// Perimeter rounded to whole millimeters for display.
    pub fn perimeter(&self) -> f64 { self.exact_perimeter.round() }

    pub fn exact_spacing(&self) -> f64 { self.exact_spacing }
    pub fn exact_perimeter(&self) -> f64 { self.exact_perimeter }

    /// Clockwise offsets from the top-left corner, starting at 0.
    pub fn positions(&self) -> &[f64] { &self.positions }

    /// Arc distance from point `i` to the next one, wrapping from the last back to the first.
    ///
    /// # Panics
    /// Panics if `i >= count()`.
    pub fn gap_to_next(&self, i: usize) -> f64 {
        let here = self.positions[i];
        let next = self.positions[(i + 1) % self.count];
        let gap = next - here;
        if gap < 0.0 { gap + self.exact_perimeter } else { gap }
    }
}

/// Compute count, spacing and offsets for `rect` within the window of `config`.
pub fn solve(rect: &Rectangle, config: &SpacingConfig) -> SpacingResult {
    let perimeter = rect.perimeter();
    let target = config.target();

    let mut count = ((perimeter / target).round() as usize).max(MIN_COUNT);
    let mut spacing = perimeter / count as f64;
    debug!("solve {}x{}: perimeter={perimeter} target={target} initial count={count}", rect.width(), rect.height());

    if config.policy() == AdjustmentPolicy::Corrective {
        while spacing < config.min() && count > MIN_COUNT {
            count -= 1;
            spacing = perimeter / count as f64;
        }
        // max >= 1 mm and the panel is bounded, so this stops within a few hundred thousand steps
        while spacing > config.max() {
            count += 1;
            spacing = perimeter / count as f64;
        }
        debug!("corrected count={count} spacing={spacing}");
    }

    if !config.contains(spacing) {
        warn!(
            "spacing {:.1} mm outside {}..{} mm (count {count}, policy {})",
            spacing,
            config.min(),
            config.max(),
            config.policy().as_str()
        );
    }

    let positions = (0..count).map(|i| i as f64 * spacing).collect();
    SpacingResult { count, exact_spacing: spacing, exact_perimeter: perimeter, positions }
}

/// Validate raw dimensions and solve. Fails with `InvalidDimension` and produces no partial result.
pub fn solve_raw(width: f64, height: f64, config: &SpacingConfig) -> Result<SpacingResult, GrommetError> {
    let rect = Rectangle::new(width, height)?;
    Ok(solve(&rect, config))
}

/// Round half away from zero to `decimals` places.
pub fn round_to(v: f64, decimals: i32) -> f64 {
    let f = 10f64.powi(decimals);
    (v * f).round() / f
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_one_decimal() {
        assert_eq!(round_to(32.4675, 1), 32.5);
        assert_eq!(round_to(32.876, 1), 32.9);
        assert_eq!(round_to(33.0033, 1), 33.0);
    }

    #[test]
    fn gap_wraps_on_last_point() {
        let r = Rectangle::new(100.0, 50.0).unwrap();
        let res = solve(&r, &SpacingConfig::new(10.0, 20.0).unwrap());
        let last = res.count() - 1;
        assert!((res.gap_to_next(last) - res.exact_spacing()).abs() < 1e-9);
    }

    #[test]
    #[should_panic]
    fn gap_past_last_point_panics() {
        let r = Rectangle::new(100.0, 50.0).unwrap();
        let res = solve(&r, &SpacingConfig::new(10.0, 20.0).unwrap());
        res.gap_to_next(res.count());
    }
}
