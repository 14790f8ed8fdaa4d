// File: crates/grommet-render-skia/tests/determinism.rs
// Purpose: Repeat renders are pixel-identical; themes change the pixels.

use grommet_core::{solve, Rectangle, SpacingConfig};
use grommet_render_skia::{LayoutRenderer, RenderOptions, Theme};

fn render_pixels(theme: Theme) -> Vec<u8> {
    let rect = Rectangle::new(500.0, 700.0).unwrap();
    let result = solve(&rect, &SpacingConfig::default());
    let mut opts = RenderOptions::default();
    opts.width = 480;
    opts.height = 640;
    opts.theme = theme;
    opts.draw_labels = false; // deterministic
    let bytes = LayoutRenderer::new(&rect, &result).render_to_png_bytes(&opts).expect("render bytes");
    image::load_from_memory(&bytes).expect("decode png").to_rgba8().into_raw()
}

#[test]
fn same_inputs_render_identically() {
    assert_eq!(render_pixels(Theme::light()), render_pixels(Theme::light()));
}

#[test]
fn dark_theme_differs_from_light() {
    assert_ne!(render_pixels(Theme::light()), render_pixels(Theme::dark()));
}
