// File: crates/highlight-render-skia/src/axis.rs
// Summary: Axis model with label and value range.

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn default_x() -> Self { Self::new("X", 0.0, 10.0) }
    pub fn default_y() -> Self { Self::new("Value", 0.0, 100.0) }

    /// Span guarded against a collapsed range.
    pub fn span(&self) -> f64 { (self.max - self.min).max(1e-9) }
}
