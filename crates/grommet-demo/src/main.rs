// File: crates/grommet-demo/src/main.rs
// Summary: Computes grommet positions for one panel and writes the layout (PNG, SVG) and reports (CSV).
// Usage: grommet-demo [WIDTH HEIGHT] [--preset NAME] [--config FILE] [--out DIR]

use anyhow::{Context, Result};
use grommet_core::presets::{self, catalogue_config};
use grommet_core::svg::write_svg;
use grommet_core::{Calculator, ParametersSummary, PositionReport, Rectangle, Settings, SvgOptions};
use grommet_render_skia::{LayoutRenderer, RenderOptions};
use log::{info, warn};
use std::path::PathBuf;

#[derive(Debug, Default)]
struct CliArgs {
    dims: Option<(String, String)>,
    preset: Option<String>,
    config: Option<PathBuf>,
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args(std::env::args().skip(1))?;
    let settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    let mut spacing = settings.spacing_config()?;
    let rect = match (&args.dims, &args.preset) {
        (Some((w, h)), _) => Rectangle::parse(w, h).context("panel dimensions")?,
        (None, Some(name)) => {
            let preset = presets::find(name)
                .with_context(|| format!("unknown preset '{name}'"))?;
            println!("Preset {}: {}", preset.name, preset.description);
            // published figures assume the catalogue window
            if args.config.is_none() {
                spacing = catalogue_config();
            }
            preset.rect
        }
        (None, None) => settings.panel()?,
    };

    let mut calc = Calculator::new(rect, spacing);
    let result = calc.recalculate().clone();
    let rect = *calc.rectangle();
    let spacing = *calc.config();

    println!("Panel: {} x {} mm", rect.width(), rect.height());
    println!("Perimeter: {} mm", result.perimeter());
    println!("Grommets: {}", result.count());
    println!("Spacing: {:.1} mm (window {}-{} mm)", result.spacing(), spacing.min(), spacing.max());
    if !spacing.contains(result.exact_spacing()) {
        warn!("panel too small for the spacing window; spacing left at {:.1} mm", result.spacing());
    }

    let report = PositionReport::new(&rect, &result);
    println!("First positions:");
    for row in report.first_positions(4) {
        println!("  #{}: {}", row.index, row.instruction());
    }

    let out_dir = args.out.unwrap_or_else(|| settings.output.dir.clone());
    let stem = format!("grommets_{}x{}", rect.width(), rect.height());

    let png = out_dir.join(format!("{stem}.png"));
    let opts = RenderOptions::from(&settings.render);
    LayoutRenderer::new(&rect, &result).render_to_png(&opts, &png)?;
    println!("Wrote {}", png.display());

    let svg = out_dir.join(format!("{stem}.svg"));
    write_svg(&rect, &result, &SvgOptions::default(), &svg)?;
    println!("Wrote {}", svg.display());

    let positions = out_dir.join(format!("{stem}_positions.csv"));
    report.write_csv(&positions)?;
    println!("Wrote {}", positions.display());

    let summary = out_dir.join(format!("{stem}_parameters.csv"));
    ParametersSummary::new(&rect, &spacing, &result, settings.report.grommet_type.as_str())
        .write_csv(&summary)?;
    println!("Wrote {}", summary.display());

    info!("done: {} grommets", result.count());
    Ok(())
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<CliArgs> {
    let mut args = CliArgs::default();
    let mut positional = Vec::new();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--preset" => args.preset = Some(it.next().context("--preset needs a name")?),
            "--config" => args.config = Some(it.next().context("--config needs a path")?.into()),
            "--out" => args.out = Some(it.next().context("--out needs a directory")?.into()),
            "-h" | "--help" => {
                println!("usage: grommet-demo [WIDTH HEIGHT] [--preset NAME] [--config FILE] [--out DIR]");
                println!("presets: {}", presets::presets().iter().map(|p| p.name).collect::<Vec<_>>().join(", "));
                std::process::exit(0);
            }
            _ => positional.push(a),
        }
    }
    match positional.len() {
        0 => {}
        2 => {
            let h = positional.pop().unwrap_or_default();
            let w = positional.pop().unwrap_or_default();
            args.dims = Some((w, h));
        }
        n => anyhow::bail!("expected WIDTH HEIGHT, got {n} positional argument(s)"),
    }
    Ok(args)
}
