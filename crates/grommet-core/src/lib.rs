// File: crates/grommet-core/src/lib.rs
// Summary: Core library entry point; exports the spacing solver, perimeter mapping, reports and layout API.

pub mod calculator;
pub mod config;
pub mod error;
pub mod fsutil;
pub mod perimeter;
pub mod presets;
pub mod report;
pub mod solver;
pub mod svg;
pub mod types;

pub use calculator::Calculator;
pub use config::Settings;
pub use error::GrommetError;
pub use perimeter::{locate, locate_all, PlacedPoint, ReferenceEdge, Side};
pub use report::{ParametersSummary, PositionReport, PositionRow};
pub use solver::{solve, solve_raw, SpacingResult};
pub use svg::{render_svg, SvgOptions};
pub use types::{AdjustmentPolicy, Rectangle, SpacingConfig};
