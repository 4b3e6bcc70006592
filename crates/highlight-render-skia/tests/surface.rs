// File: crates/highlight-render-skia/tests/surface.rs
// Purpose: Skia surface fills outlines with the requested paint, rounding corners only when asked.

use highlight_core::label_background::rectangle_outline;
use highlight_core::{
    BackgroundPaint, Color, DashPattern, DrawSurface, LabelExtents, Outline, PaintStyle, Side,
};
use highlight_render_skia::{SkiaPath, SkiaSurface};
use skia_safe as skia;

const W: i32 = 200;
const H: i32 = 100;

fn rect_outline() -> Outline {
    // right edge at 190, box 180 wide, y 10..90
    let mut o = Outline::new();
    rectangle_outline(&mut o, Side::Right, 50.0, LabelExtents::new(180.0, 40.0), 10.0, 190.0);
    o
}

fn draw(paint: &BackgroundPaint) -> Vec<u8> {
    let mut surface = skia::surfaces::raster_n32_premul((W, H)).expect("surface");
    surface.canvas().clear(skia::Color::WHITE);
    SkiaSurface::new(surface.canvas()).draw_path(&rect_outline(), paint);

    let info = skia::ImageInfo::new((W, H), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let mut px = vec![0u8; (W * H * 4) as usize];
    assert!(surface.read_pixels(&info, &mut px, (W * 4) as usize, (0, 0)));
    px
}

fn rgba(px: &[u8], x: i32, y: i32) -> [u8; 4] {
    let i = ((y * W + x) * 4) as usize;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn path_bounds_follow_outline() {
    let p = SkiaPath::from_outline(&rect_outline());
    let b = p.as_path().bounds();
    assert_eq!((b.left, b.top, b.right, b.bottom), (10.0, 10.0, 190.0, 90.0));
}

#[test]
fn sharp_rectangle_fills_corners() {
    let paint = BackgroundPaint { color: Color::from_argb(255, 255, 0, 0), ..BackgroundPaint::default() };
    let px = draw(&paint);
    assert_eq!(rgba(&px, 100, 50), [255, 0, 0, 255]);
    assert_eq!(rgba(&px, 11, 11), [255, 0, 0, 255]);
    assert_eq!(rgba(&px, 5, 5), [255, 255, 255, 255]);
}

#[test]
fn rounded_rectangle_leaves_corners_empty() {
    let paint = BackgroundPaint {
        color: Color::from_argb(255, 255, 0, 0),
        corner_radius: 20.0,
        style: PaintStyle::Fill,
        ..BackgroundPaint::default()
    };
    let px = draw(&paint);
    assert_eq!(rgba(&px, 100, 50), [255, 0, 0, 255]);
    assert_eq!(rgba(&px, 11, 11), [255, 255, 255, 255]);
}

#[test]
fn dashed_stroke_leaves_gaps() {
    // first edge runs leftwards from (190, 90): on 190..182, off 182..174
    let paint = BackgroundPaint {
        color: Color::from_argb(255, 255, 0, 0),
        style: PaintStyle::Stroke,
        stroke_width: 4.0,
        dash: Some(DashPattern::new(8.0, 8.0, 0.0)),
        ..BackgroundPaint::default()
    };
    let px = draw(&paint);
    assert_eq!(rgba(&px, 186, 90), [255, 0, 0, 255]);
    assert_eq!(rgba(&px, 178, 90), [255, 255, 255, 255]);
}

#[test]
fn corner_rounding_wins_over_dash() {
    let paint = BackgroundPaint {
        color: Color::from_argb(255, 255, 0, 0),
        style: PaintStyle::Fill,
        corner_radius: 20.0,
        dash: Some(DashPattern::new(8.0, 8.0, 0.0)),
        ..BackgroundPaint::default()
    };
    let px = draw(&paint);
    assert_eq!(rgba(&px, 100, 50), [255, 0, 0, 255]);
    assert_eq!(rgba(&px, 11, 11), [255, 255, 255, 255]);
}
