// File: crates/grommet-render-skia/src/lib.rs
// Summary: Headless layout rendering using Skia CPU raster surfaces (PNG files/bytes and RGBA buffers).

pub mod layout;
pub mod theme;

use anyhow::{Context, Result};
use grommet_core::config::RenderSettings;
use grommet_core::fsutil::create_parent_dir;
use grommet_core::{locate_all, Rectangle, SpacingResult};
use log::info;
use skia_safe as skia;

pub use layout::{Insets, Viewport};
pub use theme::Theme;

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 768;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Grommet numbers and dimension labels; off gives font-independent output.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

impl From<&RenderSettings> for RenderOptions {
    fn from(s: &RenderSettings) -> Self {
        Self {
            width: s.width.max(1),
            height: s.height.max(1),
            insets: Insets::uniform(s.margin),
            theme: theme::find(&s.theme),
            draw_labels: s.draw_labels,
        }
    }
}

/// Draws one calculated layout: panel outline plus numbered grommets.
pub struct LayoutRenderer<'a> {
    rect: &'a Rectangle,
    result: &'a SpacingResult,
}

impl<'a> LayoutRenderer<'a> {
    pub fn new(rect: &'a Rectangle, result: &'a SpacingResult) -> Self {
        Self { rect, result }
    }

    /// Render the layout to a PNG at `output_png_path`.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        create_parent_dir(path)?;
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        info!("wrote layout {}", path.display());
        Ok(())
    }

    /// Render the layout and encode it as PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.draw(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render into an unpremultiplied RGBA8 buffer. Returns (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.draw(opts)?;
        let (w, h) = (opts.width, opts.height);
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading surface pixels failed");
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    fn draw(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let vp = Viewport::fit(opts.width, opts.height, opts.insets, self.rect.width(), self.rect.height());
        draw_panel(canvas, &vp, self.rect, theme);
        let radius = marker_radius(&vp, self.result);
        draw_markers(canvas, &vp, self.rect, self.result, radius, theme, opts.draw_labels);
        if opts.draw_labels {
            draw_dimension_labels(canvas, &vp, self.rect, theme);
        }
        Ok(surface)
    }
}

// ---- helpers ----------------------------------------------------------------

/// Marker size follows the on-screen spacing so neighbours never overlap.
fn marker_radius(vp: &Viewport, result: &SpacingResult) -> f32 {
    layout::clamp(vp.len_px(result.exact_spacing()) * 0.4, 1.5, 8.0)
}

fn draw_panel(canvas: &skia::Canvas, vp: &Viewport, rect: &Rectangle, theme: &Theme) {
    let (l, t) = vp.to_px(0.0, 0.0);
    let (r, b) = vp.to_px(rect.width(), rect.height());
    let bounds = skia::Rect::from_ltrb(l, t, r, b);

    let mut fill = skia::Paint::default();
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.panel_fill);
    canvas.draw_rect(bounds, &fill);

    let mut outline = skia::Paint::default();
    outline.set_anti_alias(true);
    outline.set_style(skia::paint::Style::Stroke);
    outline.set_stroke_width(2.0);
    outline.set_color(theme.outline);
    outline.set_path_effect(skia::PathEffect::dash(&[10.0, 5.0], 0.0));
    canvas.draw_rect(bounds, &outline);
}

fn draw_markers(
    canvas: &skia::Canvas,
    vp: &Viewport,
    rect: &Rectangle,
    result: &SpacingResult,
    radius: f32,
    theme: &Theme,
    draw_numbers: bool,
) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.marker_fill);

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width((radius * 0.25).max(1.0));
    stroke.set_color(theme.marker_stroke);

    let mut text_paint = skia::Paint::default();
    text_paint.set_anti_alias(true);
    text_paint.set_color(theme.marker_text);
    let mut font = skia::Font::default();
    font.set_size(radius * 1.1);

    // numbers are unreadable below this radius
    let numbered = draw_numbers && radius >= 6.0;

    for (i, p) in locate_all(rect, result.positions()).iter().enumerate() {
        let center = vp.to_px(p.x, p.y);
        canvas.draw_circle(center, radius, &fill);
        canvas.draw_circle(center, radius, &stroke);
        if numbered {
            let label = (i + 1).to_string();
            let (text_w, _) = font.measure_str(&label, Some(&text_paint));
            let baseline = center.1 + font.size() * 0.35;
            canvas.draw_str(&label, (center.0 - text_w * 0.5, baseline), &font, &text_paint);
        }
    }
}

fn draw_dimension_labels(canvas: &skia::Canvas, vp: &Viewport, rect: &Rectangle, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(theme.label);
    let mut font = skia::Font::default();
    font.set_size(14.0);

    let width_label = format!("{} mm", rect.width());
    let (w_px, _) = font.measure_str(&width_label, Some(&paint));
    let (cx, top) = vp.to_px(rect.width() / 2.0, 0.0);
    canvas.draw_str(&width_label, (cx - w_px * 0.5, top - 20.0), &font, &paint);

    let height_label = format!("{} mm", rect.height());
    let (h_px, _) = font.measure_str(&height_label, Some(&paint));
    let (left, cy) = vp.to_px(0.0, rect.height() / 2.0);
    let anchor = skia::Point::new(left - 20.0, cy);
    canvas.save();
    canvas.rotate(-90.0, Some(anchor));
    canvas.draw_str(&height_label, (anchor.x - h_px * 0.5, anchor.y), &font, &paint);
    canvas.restore();
}
