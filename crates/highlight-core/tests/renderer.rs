// File: crates/highlight-core/tests/renderer.rs
// Purpose: Label background renderer drives the surface and paint as expected per background style.

use highlight_core::{
    BackgroundPaint, Color, Component, DrawSurface, LabelBackground, LimitLabelPosition, LimitLine,
    LimitLineLabelBackgroundRenderer, Outline, PaintStyle, TextMeasure, Transformer, ViewPortHandler,
};
use highlight_core::types::Insets;

/// Fixed-size glyph box regardless of text.
struct FixedMeasure {
    width: f32,
    height: f32,
}

impl TextMeasure for FixedMeasure {
    fn text_width(&self, _text: &str, _size: f32) -> f32 { self.width }
    fn text_height(&self, _text: &str, _size: f32) -> f32 { self.height }
}

#[derive(Default)]
struct Recorder {
    calls: Vec<(Outline, BackgroundPaint)>,
}

impl DrawSurface for Recorder {
    fn draw_path(&mut self, path: &Outline, paint: &BackgroundPaint) {
        self.calls.push((path.clone(), *paint));
    }
}

fn setup() -> (ViewPortHandler, Transformer) {
    // content: x 100..500, y 50..450; values 0..100 on y
    let vp = ViewPortHandler::from_insets(600, 500, &Insets::new(100, 100, 50, 50));
    let tr = Transformer::prepare(&vp, 0.0, 10.0, 100.0, 0.0, false);
    (vp, tr)
}

fn line(background: LabelBackground, pos: LimitLabelPosition) -> LimitLine {
    let mut l = LimitLine::with_label(25.0, "limit");
    l.set_x_offset(0.0);
    l.set_label_background(background);
    l.set_label_position(pos);
    l.set_label_background_style(PaintStyle::Stroke);
    l.set_label_background_color(Color::from_argb(200, 10, 20, 30));
    l
}

const MEASURE: FixedMeasure = FixedMeasure { width: 40.0, height: 10.0 };

#[test]
fn rectangle_is_drawn_rounded_and_paint_is_reset() {
    let (vp, tr) = setup();
    let l = line(LabelBackground::Rectangle, LimitLabelPosition::RightTop);
    let renderer = LimitLineLabelBackgroundRenderer::new(&vp, &tr, &MEASURE, &l);

    let mut surface = Recorder::default();
    let mut paint = BackgroundPaint::default();
    renderer.render(&mut surface, &mut paint);

    assert_eq!(surface.calls.len(), 1);
    let (path, used) = &surface.calls[0];
    assert_eq!(used.corner_radius, 20.0);
    assert_eq!(used.style, PaintStyle::Stroke);
    assert_eq!(used.color, Color::from_argb(200, 10, 20, 30));

    // y(25) = 450 - 25 * 4 = 350; width = 40 * 1.5 = 60; height = 10 * 2 = 20
    let v = path.vertices();
    assert_eq!(v.len(), 4);
    assert_eq!((v[0].x, v[0].y), (500.0, 370.0));
    assert_eq!((v[1].x, v[1].y), (440.0, 370.0));
    assert_eq!((v[2].x, v[2].y), (440.0, 330.0));
    assert_eq!((v[3].x, v[3].y), (500.0, 330.0));

    assert_eq!(paint.corner_radius, 0.0);
    assert_eq!(paint.style, PaintStyle::Stroke);
}

#[test]
fn polygon_is_drawn_with_sharp_corners() {
    let (vp, tr) = setup();
    let l = line(LabelBackground::Polygon, LimitLabelPosition::LeftBottom);
    let renderer = LimitLineLabelBackgroundRenderer::new(&vp, &tr, &MEASURE, &l);

    let mut surface = Recorder::default();
    let mut paint = BackgroundPaint::default();
    renderer.render(&mut surface, &mut paint);

    assert_eq!(surface.calls.len(), 1);
    let (path, used) = &surface.calls[0];
    assert_eq!(used.corner_radius, 0.0);
    let v = path.vertices();
    assert_eq!(v.len(), 6);
    assert_eq!((v[0].x, v[0].y), (100.0 + 60.0 + 25.0, 350.0));
    assert_eq!((v[2].x, v[2].y), (100.0, 370.0));
    assert_eq!(v[0], v[5]);
}

#[test]
fn x_offset_widens_the_box() {
    let (vp, tr) = setup();
    let mut l = line(LabelBackground::Rectangle, LimitLabelPosition::RightBottom);
    l.set_x_offset(10.0);
    let renderer = LimitLineLabelBackgroundRenderer::new(&vp, &tr, &MEASURE, &l);
    let e = renderer.extents();
    assert!((e.width - (40.0 + l.x_offset()) * 1.5).abs() < 1e-4);
    assert_eq!(e.height, 20.0);
}

#[test]
fn no_background_means_no_draw_calls() {
    let (vp, tr) = setup();
    let l = line(LabelBackground::None, LimitLabelPosition::RightTop);
    let renderer = LimitLineLabelBackgroundRenderer::new(&vp, &tr, &MEASURE, &l);

    let mut surface = Recorder::default();
    let mut paint = BackgroundPaint { corner_radius: 3.0, ..BackgroundPaint::default() };
    let before = paint;
    renderer.render(&mut surface, &mut paint);

    assert!(surface.calls.is_empty());
    assert_eq!(paint, before);
    assert!(renderer.outline().is_none());
}

#[test]
fn top_and_bottom_variants_share_geometry() {
    let (vp, tr) = setup();
    for (a, b) in [
        (LimitLabelPosition::RightTop, LimitLabelPosition::RightBottom),
        (LimitLabelPosition::LeftTop, LimitLabelPosition::LeftBottom),
    ] {
        let la = line(LabelBackground::Polygon, a);
        let lb = line(LabelBackground::Polygon, b);
        let oa = LimitLineLabelBackgroundRenderer::new(&vp, &tr, &MEASURE, &la).outline();
        let ob = LimitLineLabelBackgroundRenderer::new(&vp, &tr, &MEASURE, &lb).outline();
        assert_eq!(oa, ob);
    }
}
