// File: crates/highlight-render-skia/src/lib.rs
// Summary: Skia backend for highlight annotations: path sink, drawing surface, text and chart pipeline.

pub mod axis;
pub mod chart;
pub mod grid;
pub mod path;
pub mod surface;
pub mod text;

pub use axis::Axis;
pub use chart::{Chart, RenderOptions, Series};
pub use path::SkiaPath;
pub use surface::{skia_color, skia_paint, skia_style, SkiaSurface};
pub use text::SkiaTextMeasure;
