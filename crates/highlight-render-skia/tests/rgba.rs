// File: crates/highlight-render-skia/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and pixels inside/outside a highlight band.

use highlight_core::{Color, HighlightArea};
use highlight_render_skia::{Axis, Chart, RenderOptions};

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    let mut area = HighlightArea::new(1.0, 3.0);
    area.set_area_color(Color::from_argb(255, 200, 30, 30));
    chart.add_highlight_area(area);

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Background alpha in top-left pixel
    assert_eq!(px[3], 255);

    // Content is x 72..1000, y 24..584; value 2.0 maps to y = 304, inside the opaque band.
    let at = |x: usize, y: usize| &px[y * stride + x * 4..y * stride + x * 4 + 4];
    assert_eq!(at(500, 310), &[200, 30, 30, 255]);
    // Value 3.5 maps to y = 94, above the band.
    assert_ne!(at(500, 94)[..3], [200, 30, 30]);
}
