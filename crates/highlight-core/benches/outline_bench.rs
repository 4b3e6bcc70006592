use criterion::{black_box, criterion_group, criterion_main, Criterion};
use highlight_core::types::Insets;
use highlight_core::{
    label_background_outline, LabelBackground, LabelExtents, LimitLabelPosition, LimitLine,
    LimitLineLabelBackgroundRenderer, Side, TextMeasure, Transformer, ViewPortHandler,
};

struct CharMeasure;

impl TextMeasure for CharMeasure {
    fn text_width(&self, text: &str, size: f32) -> f32 { text.chars().count() as f32 * size * 0.55 }
    fn text_height(&self, _text: &str, size: f32) -> f32 { size * 0.72 }
}

fn bench_outline(c: &mut Criterion) {
    let vp = ViewPortHandler::from_insets(1024, 640, &Insets::default());
    let content = vp.content_rect();
    let ext = LabelExtents::measure(48.0, 9.0, 5.0);

    let mut group = c.benchmark_group("label_background");
    for bg in [LabelBackground::Rectangle, LabelBackground::Polygon] {
        group.bench_function(format!("outline_{bg}"), |b| {
            b.iter(|| label_background_outline(black_box(bg), Side::Right, black_box(300.0), ext, content))
        });
    }

    let tr = Transformer::prepare(&vp, 0.0, 100.0, 100.0, 0.0, false);
    let mut line = LimitLine::with_label(42.0, "upper bound");
    line.set_label_background(LabelBackground::Polygon);
    line.set_label_position(LimitLabelPosition::LeftTop);
    group.bench_function("renderer_outline", |b| {
        let r = LimitLineLabelBackgroundRenderer::new(&vp, &tr, &CharMeasure, &line);
        b.iter(|| black_box(r.outline()))
    });
    group.finish();
}

criterion_group!(benches, bench_outline);
criterion_main!(benches);
