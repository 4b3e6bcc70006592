// File: crates/highlight-core/src/lib.rs
// Summary: Core library entry point; exports annotation models, viewport/transform and label geometry.

pub mod color;
pub mod component;
pub mod error;
pub mod geometry;
pub mod highlight_area;
pub mod label_background;
pub mod layout;
pub mod limit_line;
pub mod paint;
pub mod renderer;
pub mod text;
pub mod transform;
pub mod types;
pub mod units;
pub mod viewport;

pub use color::Color;
pub use component::{Component, ComponentBase};
pub use error::ParseError;
pub use geometry::{Outline, PathCommand, PathSink, Point, RectF};
pub use highlight_area::{AreaLabelPosition, HighlightArea};
pub use label_background::{label_background_outline, LabelExtents, Side};
pub use limit_line::{LabelBackground, LimitLabelPosition, LimitLine};
pub use paint::{DashPattern, PaintStyle, TextAlign};
pub use renderer::{BackgroundPaint, DrawSurface, LimitLineLabelBackgroundRenderer};
pub use text::TextMeasure;
pub use transform::Transformer;
pub use types::Insets;
pub use viewport::ViewPortHandler;
