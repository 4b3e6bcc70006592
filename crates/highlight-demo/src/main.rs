// File: crates/highlight-demo/src/main.rs
// Summary: Demo renders a synthetic series with highlight bands and labelled limit lines to PNG.
//
// Usage: highlight-demo [OUT.png] [LABEL_POSITION] [LABEL_BACKGROUND] [DENSITY]
//   LABEL_POSITION   left-top | left-bottom | right-top | right-bottom (default right-top)
//   LABEL_BACKGROUND none | rectangle | polygon (default polygon)
//   DENSITY          pixels per dp (default 1.0)

use std::path::PathBuf;

use anyhow::{Context, Result};
use highlight_core::{
    units, AreaLabelPosition, Color, Component, HighlightArea, LabelBackground, LimitLabelPosition, LimitLine,
};
use highlight_render_skia::{Axis, Chart, RenderOptions, Series};
use tracing::info;
use tracing_subscriber::EnvFilter;

struct DemoArgs {
    out: PathBuf,
    position: LimitLabelPosition,
    background: LabelBackground,
    density: f32,
}

fn parse_args() -> Result<DemoArgs> {
    let mut args = std::env::args().skip(1);
    let out = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("target/out/highlight_demo.png"));
    let position = match args.next() {
        Some(s) => s.parse().context("parsing label position")?,
        None => LimitLabelPosition::RightTop,
    };
    let background = match args.next() {
        Some(s) => s.parse().context("parsing label background")?,
        None => LabelBackground::Polygon,
    };
    let density = match args.next() {
        Some(s) => s.parse::<f32>().with_context(|| format!("parsing density '{s}'"))?,
        None => 1.0,
    };
    Ok(DemoArgs { out, position, background, density })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = parse_args()?;
    units::init(args.density);

    // Noisy sine around 50
    let data: Vec<(f64, f64)> = (0..400)
        .map(|i| {
            let x = i as f64 * 0.05;
            (x, 50.0 + 25.0 * (x * 0.9).sin() + 6.0 * (x * 4.3).cos())
        })
        .collect();

    let mut chart = Chart::new();
    chart.x_axis = Axis::new("Time", 0.0, 20.0);
    chart.y_axis = Axis::new("Value", 0.0, 100.0);
    chart.add_series(Series::new(data));

    let mut band = HighlightArea::with_label(40.0, 60.0, "target range");
    band.set_border_width(1.0);
    band.set_border_color(Color::from_argb(160, 120, 220, 140));
    band.set_area_color(Color::from_argb(48, 120, 220, 140));
    band.enable_dashed_border(8.0, 6.0, 0.0);
    band.set_text_color(Color::from_argb(255, 180, 240, 190));
    band.set_label_position(match args.position {
        LimitLabelPosition::LeftTop => AreaLabelPosition::LeftTop,
        LimitLabelPosition::LeftBottom => AreaLabelPosition::LeftBottom,
        LimitLabelPosition::RightTop => AreaLabelPosition::RightTop,
        LimitLabelPosition::RightBottom => AreaLabelPosition::RightBottom,
    });
    chart.add_highlight_area(band);

    for (value, label) in [(80.0, "upper limit"), (20.0, "lower limit")] {
        let mut line = LimitLine::with_label(value, label);
        line.set_line_width(1.5);
        line.enable_dashed_line(10.0, 5.0, 0.0);
        line.set_text_size(12.0);
        line.set_text_color(Color::from_argb(255, 20, 20, 24));
        line.set_label_position(args.position);
        line.set_label_background(args.background);
        line.set_label_background_color(Color::from_argb(230, 255, 210, 90));
        chart.add_limit_line(line);
    }

    let opts = RenderOptions::default();
    chart.render_to_png(&opts, &args.out)?;
    info!(
        out = %args.out.display(),
        position = %args.position,
        background = %args.background,
        "wrote chart"
    );
    Ok(())
}
