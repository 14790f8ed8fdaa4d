// File: crates/grommet-core/src/report.rs
// Summary: Position report (one row per grommet) and parameters summary, with CSV export.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use log::info;
use serde::Serialize;

use crate::fsutil::create_parent_dir;
use crate::perimeter::{locate, ReferenceEdge, Side};
use crate::solver::{round_to, SpacingResult};
use crate::types::{Rectangle, SpacingConfig};

/// One marking row. Distances are display-rounded.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PositionRow {
    /// 1-based grommet number as drawn on the layout.
    pub index: usize,
    pub side: Side,
    pub reference_edge: ReferenceEdge,
    /// Distance from `reference_edge`, whole millimeters.
    pub reference_distance_mm: f64,
    /// Arc distance to the next grommet, 0.1 mm.
    pub distance_to_next_mm: f64,
}

impl PositionRow {
    /// Marking instruction, e.g. `⭢ 33 mm from left edge`.
    pub fn instruction(&self) -> String {
        format!(
            "{} {} mm from {} edge",
            self.side.arrow(),
            self.reference_distance_mm,
            self.reference_edge.as_str()
        )
    }
}

#[derive(Clone, Debug)]
pub struct PositionReport {
    rows: Vec<PositionRow>,
}

impl PositionReport {
    pub fn new(rect: &Rectangle, result: &SpacingResult) -> Self {
        let rows = result
            .positions()
            .iter()
            .enumerate()
            .map(|(i, &d)| {
                let p = locate(rect, d);
                PositionRow {
                    index: i + 1,
                    side: p.side,
                    reference_edge: p.reference_edge(),
                    reference_distance_mm: p.reference_distance(rect).round(),
                    distance_to_next_mm: round_to(result.gap_to_next(i), 1),
                }
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[PositionRow] { &self.rows }

    /// First `n` rows; the quick-start list shows four.
    pub fn first_positions(&self, n: usize) -> &[PositionRow] {
        &self.rows[..n.min(self.rows.len())]
    }

    pub fn write_csv_to<W: Write>(&self, out: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(out);
        for row in &self.rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn to_csv_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_csv_to(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        create_parent_dir(path)?;
        let file = std::fs::File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        self.write_csv_to(file)
            .with_context(|| format!("writing position report {}", path.display()))?;
        info!("wrote {} position rows to {}", self.rows.len(), path.display());
        Ok(())
    }
}

/// Calculation parameters as shown next to the layout.
#[derive(Clone, Debug)]
pub struct ParametersSummary {
    pub width: f64,
    pub height: f64,
    pub grommet_type: String,
    pub perimeter: f64,
    pub count: usize,
    pub spacing: f64,
    pub min_spacing: f64,
    pub max_spacing: f64,
    pub policy: &'static str,
    pub generated_at: DateTime<Local>,
}

impl ParametersSummary {
    pub fn new(
        rect: &Rectangle,
        config: &SpacingConfig,
        result: &SpacingResult,
        grommet_type: impl Into<String>,
    ) -> Self {
        Self {
            width: rect.width(),
            height: rect.height(),
            grommet_type: grommet_type.into(),
            perimeter: result.perimeter(),
            count: result.count(),
            spacing: result.spacing(),
            min_spacing: config.min(),
            max_spacing: config.max(),
            policy: config.policy().as_str(),
            generated_at: Local::now(),
        }
    }

    pub fn with_generated_at(mut self, at: DateTime<Local>) -> Self {
        self.generated_at = at;
        self
    }

    /// Ordered key/value pairs; values carry their unit.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("width", format!("{} mm", self.width)),
            ("height", format!("{} mm", self.height)),
            ("grommet type", self.grommet_type.clone()),
            ("perimeter", format!("{} mm", self.perimeter)),
            ("count", self.count.to_string()),
            ("spacing", format!("{:.1} mm", self.spacing)),
            ("spacing window", format!("{}-{} mm", self.min_spacing, self.max_spacing)),
            ("policy", self.policy.to_string()),
            ("generated", self.generated_at.format("%Y-%m-%d %H:%M").to_string()),
        ]
    }

    pub fn write_csv_to<W: Write>(&self, out: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(out);
        wtr.write_record(["parameter", "value"])?;
        for (k, v) in self.entries() {
            wtr.write_record([k, v.as_str()])?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        create_parent_dir(path)?;
        let file = std::fs::File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        self.write_csv_to(file)
            .with_context(|| format!("writing parameters summary {}", path.display()))?;
        info!("wrote parameters summary to {}", path.display());
        Ok(())
    }
}
