// File: crates/highlight-core/src/transform.rs
// Summary: Data-to-pixel transform for a chart's content area.

use crate::geometry::Point;
use crate::viewport::ViewPortHandler;

/// Affine map from chart values to pixels: `px = x * sx + tx`, `py = y * sy + ty`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transformer {
    sx: f32,
    sy: f32,
    tx: f32,
    ty: f32,
}

impl Default for Transformer {
    fn default() -> Self { Self { sx: 1.0, sy: 1.0, tx: 0.0, ty: 0.0 } }
}

fn finite_scale(extent: f32, delta: f32) -> f32 {
    let s = extent / delta;
    if s.is_finite() { s } else { 0.0 }
}

impl Transformer {
    /// Identity transform.
    pub fn new() -> Self { Self::default() }

    /// Map `[x_min, x_min + delta_x] × [y_min, y_min + delta_y]` onto the viewport's content rect.
    /// When `inverted`, larger values are drawn lower on screen.
    pub fn prepare(
        viewport: &ViewPortHandler,
        x_min: f32,
        delta_x: f32,
        delta_y: f32,
        y_min: f32,
        inverted: bool,
    ) -> Self {
        let sx = finite_scale(viewport.content_width(), delta_x);
        let sy = finite_scale(viewport.content_height(), delta_y);
        let tx = viewport.content_left() - x_min * sx;
        if inverted {
            Self { sx, sy, tx, ty: viewport.content_top() - y_min * sy }
        } else {
            Self { sx, sy: -sy, tx, ty: viewport.content_bottom() + y_min * sy }
        }
    }

    /// Transform interleaved `[x0, y0, x1, y1, ...]` values to pixels in place.
    pub fn point_values_to_pixel(&self, pts: &mut [f32]) {
        for pair in pts.chunks_exact_mut(2) {
            pair[0] = pair[0] * self.sx + self.tx;
            pair[1] = pair[1] * self.sy + self.ty;
        }
    }

    pub fn value_to_pixel(&self, x: f32, y: f32) -> Point {
        Point::new(x * self.sx + self.tx, y * self.sy + self.ty)
    }

    /// Inverse mapping. A collapsed axis maps every pixel to 0.
    pub fn pixel_to_value(&self, px: f32, py: f32) -> Point {
        let x = if self.sx != 0.0 { (px - self.tx) / self.sx } else { 0.0 };
        let y = if self.sy != 0.0 { (py - self.ty) / self.sy } else { 0.0 };
        Point::new(x, y)
    }
}
