// File: crates/highlight-core/src/paint.rs
// Summary: Backend-neutral paint attributes (style, dash pattern, text alignment).

/// How a shape or glyph run is painted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaintStyle {
    #[default]
    Fill,
    Stroke,
    FillAndStroke,
}

/// Two-interval dash pattern: `intervals[0]` drawn, `intervals[1]` blank.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DashPattern {
    pub intervals: [f32; 2],
    pub phase: f32,
}

impl DashPattern {
    pub const fn new(line_length: f32, space_length: f32, phase: f32) -> Self {
        Self { intervals: [line_length, space_length], phase }
    }
    pub const fn line_length(&self) -> f32 { self.intervals[0] }
    pub const fn space_length(&self) -> f32 { self.intervals[1] }
}

/// Horizontal anchoring of a label relative to its anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Right,
}
