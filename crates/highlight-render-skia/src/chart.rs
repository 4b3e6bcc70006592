// File: crates/highlight-render-skia/src/chart.rs
// Summary: Chart struct and headless rendering pipeline (PNG/RGBA) with highlight areas and limit lines.

use anyhow::{Context, Result};
use highlight_core::layout::{area_label_anchor, highlight_band, limit_label_anchor};
use highlight_core::types::{Insets, HEIGHT, WIDTH};
use highlight_core::{
    BackgroundPaint, Color, Component, HighlightArea, LimitLine, LimitLineLabelBackgroundRenderer, PaintStyle,
    Point, TextAlign, TextMeasure, Transformer, ViewPortHandler,
};
use skia_safe as skia;
use tracing::debug;

use crate::axis::Axis;
use crate::grid::linspace;
use crate::surface::{dash_effect, skia_color, SkiaSurface};
use crate::text::SkiaTextMeasure;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub background: skia::Color,
    /// Draw axis labels, annotation labels and label backgrounds.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            background: skia::Color::from_argb(255, 18, 18, 20), // near-black
            draw_labels: true,
        }
    }
}

/// Polyline series in chart values.
#[derive(Clone, Debug)]
pub struct Series {
    pub data: Vec<(f64, f64)>,
    pub color: Color,
}

impl Series {
    pub fn new(data: Vec<(f64, f64)>) -> Self {
        Self { data, color: Color::from_argb(255, 64, 160, 255) }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub highlight_areas: Vec<HighlightArea>,
    pub limit_lines: Vec<LimitLine>,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            highlight_areas: Vec::new(),
            limit_lines: Vec::new(),
        }
    }

    pub fn add_series(&mut self, series: Series) { self.series.push(series); }
    pub fn add_highlight_area(&mut self, area: HighlightArea) { self.highlight_areas.push(area); }
    pub fn add_limit_line(&mut self, line: LimitLine) { self.limit_lines.push(line); }

    /// Fit both axes to series data, limit values and highlight ranges, padding Y by `margin` (fraction of span).
    pub fn autoscale_axes(&mut self, margin: f64) {
        let mut x = (f64::INFINITY, f64::NEG_INFINITY);
        let mut y = (f64::INFINITY, f64::NEG_INFINITY);
        let grow = |r: &mut (f64, f64), v: f64| {
            r.0 = r.0.min(v);
            r.1 = r.1.max(v);
        };
        for &(px, py) in self.series.iter().flat_map(|s| s.data.iter()) {
            grow(&mut x, px);
            grow(&mut y, py);
        }
        for l in &self.limit_lines {
            grow(&mut y, l.limit() as f64);
        }
        for a in &self.highlight_areas {
            grow(&mut y, a.start_point() as f64);
            grow(&mut y, a.end_point() as f64);
        }

        if x.0.is_finite() && x.1.is_finite() {
            if (x.1 - x.0).abs() < 1e-9 { x.1 = x.0 + 1.0; }
            self.x_axis.min = x.0;
            self.x_axis.max = x.1;
        }
        if y.0.is_finite() && y.1.is_finite() {
            if (y.1 - y.0).abs() < 1e-9 { y.1 = y.0 + 1.0; }
            let m = (y.1 - y.0) * margin;
            self.y_axis.min = y.0 - m;
            self.y_axis.max = y.1 + m;
        }
    }

    pub fn viewport(&self, opts: &RenderOptions) -> ViewPortHandler {
        ViewPortHandler::from_insets(opts.width, opts.height, &opts.insets)
    }

    pub fn transformer(&self, viewport: &ViewPortHandler) -> Transformer {
        Transformer::prepare(
            viewport,
            self.x_axis.min as f32,
            self.x_axis.span() as f32,
            self.y_axis.span() as f32,
            self.y_axis.min as f32,
            false,
        )
    }

    /// Draw the whole chart into `canvas`.
    pub fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        debug!(
            width = opts.width,
            height = opts.height,
            series = self.series.len(),
            highlight_areas = self.highlight_areas.len(),
            limit_lines = self.limit_lines.len(),
            "rendering chart"
        );
        let vp = self.viewport(opts);
        let tr = self.transformer(&vp);
        let text = SkiaTextMeasure::new();

        canvas.clear(opts.background);
        draw_grid(canvas, &vp);

        let content = vp.content_rect();
        let clip = skia::Rect::from_ltrb(content.left, content.top, content.right, content.bottom);
        canvas.save();
        canvas.clip_rect(clip, skia::ClipOp::Intersect, true);

        for area in self.highlight_areas.iter().filter(|a| a.is_enabled()) {
            draw_highlight_area(canvas, area, &tr, &vp, &text, opts.draw_labels);
        }
        for s in &self.series {
            draw_line_series(canvas, &tr, s);
        }
        let mut bg_paint = BackgroundPaint::default();
        for line in self.limit_lines.iter().filter(|l| l.is_enabled()) {
            draw_limit_line(canvas, line, &tr, &vp, &text, &mut bg_paint, opts.draw_labels);
        }

        canvas.restore();
        draw_axes(canvas, &vp, &self.x_axis, &self.y_axis, &text, opts.draw_labels);
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = raster_surface(opts)?;
        self.draw(surface.canvas(), opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to tightly packed, unpremultiplied RGBA8. Returns `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = raster_surface(opts)?;
        self.draw(surface.canvas(), opts);

        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back {}x{} pixels failed", opts.width, opts.height);
        }
        Ok((pixels, opts.width, opts.height, stride))
    }
}

fn raster_surface(opts: &RenderOptions) -> Result<skia::Surface> {
    skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, vp: &ViewPortHandler) {
    let mut paint = skia::Paint::default();
    paint.set_color(skia::Color::from_argb(255, 40, 40, 45));
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (l, t, r, b) = (vp.content_left(), vp.content_top(), vp.content_right(), vp.content_bottom());
    // verticals
    for x in linspace(l as f64, r as f64, 10) {
        canvas.draw_line((x as f32, t), (x as f32, b), &paint);
    }
    // horizontals
    for y in linspace(t as f64, b as f64, 6) {
        canvas.draw_line((l, y as f32), (r, y as f32), &paint);
    }
}

fn draw_axes(
    canvas: &skia::Canvas,
    vp: &ViewPortHandler,
    x: &Axis,
    y: &Axis,
    text: &SkiaTextMeasure,
    draw_labels: bool,
) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(skia::Color::from_argb(255, 180, 180, 190));
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    let (l, t, r, b) = (vp.content_left(), vp.content_top(), vp.content_right(), vp.content_bottom());
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);

    if !draw_labels {
        return;
    }
    let color = Color::from_argb(255, 210, 210, 220);
    let style = PaintStyle::Fill;
    text.draw(canvas, &x.label, Point::new(r, b + 24.0), TextAlign::Right, 14.0, color, style);
    text.draw(canvas, &y.label, Point::new(l - 56.0, t + 14.0), TextAlign::Left, 14.0, color, style);
}

fn draw_line_series(canvas: &skia::Canvas, tr: &Transformer, series: &Series) {
    if series.data.len() < 2 {
        return;
    }
    let mut path = skia::Path::new();
    let mut points = series.data.iter().map(|&(x, y)| tr.value_to_pixel(x as f32, y as f32));
    if let Some(p0) = points.next() {
        path.move_to((p0.x, p0.y));
    }
    for p in points {
        path.line_to((p.x, p.y));
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(skia_color(series.color));
    canvas.draw_path(&path, &stroke);
}

fn draw_highlight_area(
    canvas: &skia::Canvas,
    area: &HighlightArea,
    tr: &Transformer,
    vp: &ViewPortHandler,
    text: &SkiaTextMeasure,
    draw_labels: bool,
) {
    let Some(band) = highlight_band(area, tr, vp) else { return };

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(skia_color(area.area_color()));
    canvas.draw_rect(skia::Rect::from_ltrb(band.left, band.top, band.right, band.bottom), &fill);

    // width 0 strokes a hairline
    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(area.border_width());
    border.set_color(skia_color(area.border_color()));
    border.set_path_effect(dash_effect(area.dash_pattern()));
    for y in [band.top, band.bottom] {
        canvas.draw_line((band.left, y), (band.right, y), &border);
    }

    if draw_labels && !area.label().is_empty() {
        let h = text.text_height(area.label(), area.text_size());
        let (anchor, align) = area_label_anchor(area, &band, h, vp);
        text.draw(canvas, area.label(), anchor, align, area.text_size(), area.text_color(), area.text_style());
    }
}

fn draw_limit_line(
    canvas: &skia::Canvas,
    line: &LimitLine,
    tr: &Transformer,
    vp: &ViewPortHandler,
    text: &SkiaTextMeasure,
    bg_paint: &mut BackgroundPaint,
    draw_labels: bool,
) {
    let y = tr.value_to_pixel(0.0, line.limit()).y;

    let mut path = skia::Path::new();
    path.move_to((vp.content_left(), y));
    path.line_to((vp.content_right(), y));

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(line.line_width());
    stroke.set_color(skia_color(line.line_color()));
    stroke.set_path_effect(dash_effect(line.dash_pattern()));
    canvas.draw_path(&path, &stroke);

    if !draw_labels || line.label().is_empty() {
        return;
    }
    LimitLineLabelBackgroundRenderer::new(vp, tr, text, line).render(&mut SkiaSurface::new(canvas), bg_paint);

    let h = text.text_height(line.label(), line.text_size());
    let (anchor, align) = limit_label_anchor(line, y, h, vp);
    text.draw(canvas, line.label(), anchor, align, line.text_size(), line.text_color(), line.text_style());
}
