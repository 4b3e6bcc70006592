// File: crates/highlight-render-skia/src/surface.rs
// Summary: `DrawSurface` over a Skia canvas and conversions from core paint attributes.

use highlight_core::{BackgroundPaint, Color, DashPattern, DrawSurface, Outline, PaintStyle};
use skia_safe as skia;

use crate::path::SkiaPath;

pub fn skia_color(c: Color) -> skia::Color {
    skia::Color::new(c.to_argb())
}

pub fn skia_style(style: PaintStyle) -> skia::paint::Style {
    match style {
        PaintStyle::Fill => skia::paint::Style::Fill,
        PaintStyle::Stroke => skia::paint::Style::Stroke,
        PaintStyle::FillAndStroke => skia::paint::Style::StrokeAndFill,
    }
}

pub fn dash_effect(dash: Option<&DashPattern>) -> Option<skia::PathEffect> {
    dash.and_then(|d| skia::PathEffect::dash(&d.intervals, d.phase))
}

/// Skia paint for a background draw. Corner rounding takes precedence over dashing.
pub fn skia_paint(bp: &BackgroundPaint) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia_style(bp.style));
    p.set_color(skia_color(bp.color));
    p.set_stroke_width(bp.stroke_width);

    let corner = if bp.corner_radius > 0.0 { skia::PathEffect::corner_path(bp.corner_radius) } else { None };
    p.set_path_effect(corner.or_else(|| dash_effect(bp.dash.as_ref())));
    p
}

pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas) -> Self { Self { canvas } }
}

impl DrawSurface for SkiaSurface<'_> {
    fn draw_path(&mut self, path: &Outline, paint: &BackgroundPaint) {
        let sk = SkiaPath::from_outline(path);
        self.canvas.draw_path(sk.as_path(), &skia_paint(paint));
    }
}
