// File: crates/grommet-core/src/svg.rs
// Summary: SVG layout drawing of the panel outline and numbered grommets, in millimeter units.

use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::fsutil::create_parent_dir;
use crate::perimeter::locate_all;
use crate::solver::SpacingResult;
use crate::types::Rectangle;

/// Drawing parameters, in millimeters of the viewBox.
#[derive(Clone, Debug)]
pub struct SvgOptions {
    pub padding: f64,
    pub marker_radius: f64,
    pub outline_color: String,
    pub marker_fill: String,
    pub marker_text: String,
    pub label_color: String,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            padding: 50.0,
            marker_radius: 8.0,
            outline_color: "#1f2937".into(),
            marker_fill: "#2563eb".into(),
            marker_text: "#ffffff".into(),
            label_color: "#6b7280".into(),
        }
    }
}

/// Build the SVG document as a string.
pub fn render_svg(rect: &Rectangle, result: &SpacingResult, opts: &SvgOptions) -> String {
    let (w, h) = (rect.width(), rect.height());
    let pad = opts.padding;

    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\">\n",
        -pad,
        -pad,
        w + 2.0 * pad,
        h + 2.0 * pad
    );
    svg.push_str(&format!(
        "  <rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\" stroke-dasharray=\"10,5\"/>\n",
        opts.outline_color
    ));

    for (i, p) in locate_all(rect, result.positions()).iter().enumerate() {
        svg.push_str(&format!(
            "  <g><circle cx=\"{x:.2}\" cy=\"{y:.2}\" r=\"{r}\" fill=\"{fill}\" stroke=\"{text}\" stroke-width=\"2\"/><text x=\"{x:.2}\" y=\"{y:.2}\" fill=\"{text}\" font-size=\"10\" font-weight=\"bold\" text-anchor=\"middle\" dominant-baseline=\"central\">{n}</text></g>\n",
            x = p.x,
            y = p.y,
            r = opts.marker_radius,
            fill = opts.marker_fill,
            text = opts.marker_text,
            n = i + 1,
        ));
    }

    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"-20\" fill=\"{}\" font-size=\"14\" text-anchor=\"middle\" font-weight=\"500\">{w} mm</text>\n",
        w / 2.0,
        opts.label_color
    ));
    svg.push_str(&format!(
        "  <text x=\"-20\" y=\"{cy}\" fill=\"{}\" font-size=\"14\" text-anchor=\"middle\" font-weight=\"500\" transform=\"rotate(-90, -20, {cy})\">{h} mm</text>\n",
        opts.label_color,
        cy = h / 2.0
    ));
    svg.push_str("</svg>\n");
    svg
}

pub fn write_svg(
    rect: &Rectangle,
    result: &SpacingResult,
    opts: &SvgOptions,
    path: impl AsRef<Path>,
) -> Result<()> {
    let path = path.as_ref();
    create_parent_dir(path)?;
    std::fs::write(path, render_svg(rect, result, opts))
        .with_context(|| format!("writing {}", path.display()))?;
    info!("wrote layout {}", path.display());
    Ok(())
}
