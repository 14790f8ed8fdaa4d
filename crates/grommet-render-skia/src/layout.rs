// File: crates/grommet-render-skia/src/layout.rs
// Summary: Fits the panel (millimeters) into the pixel surface with margins; uniform scale, centered.

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    pub const fn uniform(v: u32) -> Self { Self::new(v, v, v, v) }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(56)
    }
}

/// Millimeter-to-pixel transform for one panel on one surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub origin_x: f32,
    pub origin_y: f32,
    /// Pixels per millimeter.
    pub scale: f32,
}

impl Viewport {
    /// Largest uniform scale that fits `panel_w x panel_h` inside the inset area, centered.
    pub fn fit(surface_w: i32, surface_h: i32, insets: Insets, panel_w: f64, panel_h: f64) -> Self {
        let avail_w = (surface_w as f32 - insets.hsum() as f32).max(1.0);
        let avail_h = (surface_h as f32 - insets.vsum() as f32).max(1.0);
        let scale = (avail_w / panel_w as f32).min(avail_h / panel_h as f32);
        let used_w = panel_w as f32 * scale;
        let used_h = panel_h as f32 * scale;
        Self {
            origin_x: insets.left as f32 + (avail_w - used_w) * 0.5,
            origin_y: insets.top as f32 + (avail_h - used_h) * 0.5,
            scale,
        }
    }

    #[inline]
    pub fn to_px(&self, x_mm: f64, y_mm: f64) -> (f32, f32) {
        (self.origin_x + x_mm as f32 * self.scale, self.origin_y + y_mm as f32 * self.scale)
    }

    #[inline]
    pub fn len_px(&self, mm: f64) -> f32 { mm as f32 * self.scale }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
