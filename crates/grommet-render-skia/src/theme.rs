// File: crates/grommet-render-skia/src/theme.rs
// Summary: Light/Dark theming for layout rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub panel_fill: skia::Color,
    pub outline: skia::Color,
    pub marker_fill: skia::Color,
    pub marker_stroke: skia::Color,
    pub marker_text: skia::Color,
    pub label: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            panel_fill: skia::Color::from_argb(255, 255, 255, 255),
            outline: skia::Color::from_argb(255, 31, 41, 55),
            marker_fill: skia::Color::from_argb(255, 37, 99, 235),
            marker_stroke: skia::Color::from_argb(255, 255, 255, 255),
            marker_text: skia::Color::from_argb(255, 255, 255, 255),
            label: skia::Color::from_argb(255, 107, 114, 128),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            panel_fill: skia::Color::from_argb(255, 28, 28, 32),
            outline: skia::Color::from_argb(255, 180, 180, 190),
            marker_fill: skia::Color::from_argb(255, 64, 160, 255),
            marker_stroke: skia::Color::from_argb(255, 18, 18, 20),
            marker_text: skia::Color::from_argb(255, 18, 18, 20),
            label: skia::Color::from_argb(255, 210, 210, 220),
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            background: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            panel_fill: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            outline: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            marker_fill: skia::Color::from_argb(255, 0xd0, 0x00, 0x00),
            marker_stroke: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            marker_text: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            label: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    log::warn!("unknown theme {name:?}, using light");
    Theme::light()
}
