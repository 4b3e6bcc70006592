// File: crates/highlight-render-skia/src/path.rs
// Summary: `PathSink` that builds a `skia::Path`.

use highlight_core::{Outline, PathSink};
use skia_safe as skia;

#[derive(Clone, Debug, Default)]
pub struct SkiaPath {
    path: skia::Path,
}

impl SkiaPath {
    pub fn new() -> Self { Self { path: skia::Path::new() } }

    pub fn from_outline(outline: &Outline) -> Self {
        let mut p = Self::new();
        outline.replay(&mut p);
        p
    }

    pub fn as_path(&self) -> &skia::Path { &self.path }
}

impl PathSink for SkiaPath {
    fn move_to(&mut self, x: f32, y: f32) { self.path.move_to((x, y)); }
    fn line_to(&mut self, x: f32, y: f32) { self.path.line_to((x, y)); }
    fn close(&mut self) { self.path.close(); }
}
