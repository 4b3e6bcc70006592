// File: crates/highlight-core/src/viewport.rs
// Summary: Chart dimensions and the content rectangle (plot area without axis margins).

use crate::geometry::RectF;
use crate::types::Insets;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewPortHandler {
    chart_width: f32,
    chart_height: f32,
    content: RectF,
}

impl ViewPortHandler {
    pub fn new() -> Self { Self::default() }

    /// Viewport for a `width × height` surface with the given margins.
    pub fn from_insets(width: i32, height: i32, insets: &Insets) -> Self {
        let mut vp = Self::new();
        vp.set_chart_dimens(width as f32, height as f32);
        vp.restrain_view_port(insets.left as f32, insets.top as f32, insets.right as f32, insets.bottom as f32);
        vp
    }

    /// Resize the chart, keeping the current offsets.
    pub fn set_chart_dimens(&mut self, width: f32, height: f32) {
        let (l, t, r, b) = (self.offset_left(), self.offset_top(), self.offset_right(), self.offset_bottom());
        self.chart_width = width;
        self.chart_height = height;
        self.restrain_view_port(l, t, r, b);
    }

    pub fn restrain_view_port(&mut self, offset_left: f32, offset_top: f32, offset_right: f32, offset_bottom: f32) {
        self.content = RectF::from_ltrb(
            offset_left,
            offset_top,
            self.chart_width - offset_right,
            self.chart_height - offset_bottom,
        );
    }

    pub fn chart_width(&self) -> f32 { self.chart_width }
    pub fn chart_height(&self) -> f32 { self.chart_height }

    pub fn content_rect(&self) -> RectF { self.content }
    pub fn content_left(&self) -> f32 { self.content.left }
    pub fn content_right(&self) -> f32 { self.content.right }
    pub fn content_top(&self) -> f32 { self.content.top }
    pub fn content_bottom(&self) -> f32 { self.content.bottom }
    pub fn content_width(&self) -> f32 { self.content.width() }
    pub fn content_height(&self) -> f32 { self.content.height() }

    pub fn offset_left(&self) -> f32 { self.content.left }
    pub fn offset_right(&self) -> f32 { self.chart_width - self.content.right }
    pub fn offset_top(&self) -> f32 { self.content.top }
    pub fn offset_bottom(&self) -> f32 { self.chart_height - self.content.bottom }

    pub fn is_in_bounds_y(&self, y: f32) -> bool {
        y >= self.content.top && y <= self.content.bottom
    }
}
