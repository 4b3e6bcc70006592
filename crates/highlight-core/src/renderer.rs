// File: crates/highlight-core/src/renderer.rs
// Summary: Limit-line label background renderer over a backend-neutral drawing surface.

use tracing::debug;

use crate::color::Color;
use crate::component::Component;
use crate::geometry::Outline;
use crate::label_background::{label_background_outline, LabelExtents, Side, RECTANGLE_CORNER_RADIUS};
use crate::limit_line::{LabelBackground, LimitLine};
use crate::paint::{DashPattern, PaintStyle};
use crate::text::TextMeasure;
use crate::transform::Transformer;
use crate::viewport::ViewPortHandler;

/// Paint handed to `DrawSurface::draw_path`.
///
/// Owned by the caller and reused across draws; the renderer mutates it while drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundPaint {
    pub style: PaintStyle,
    pub color: Color,
    /// Radius used to round path corners; 0 leaves corners sharp.
    pub corner_radius: f32,
    pub stroke_width: f32,
    pub dash: Option<DashPattern>,
}

impl Default for BackgroundPaint {
    fn default() -> Self {
        Self {
            style: PaintStyle::Fill,
            color: Color::BLACK,
            corner_radius: 0.0,
            stroke_width: 1.0,
            dash: None,
        }
    }
}

/// Anything that can fill/stroke a closed outline.
pub trait DrawSurface {
    fn draw_path(&mut self, path: &Outline, paint: &BackgroundPaint);
}

/// Draws the shape behind a limit line's label.
pub struct LimitLineLabelBackgroundRenderer<'a, M: TextMeasure + ?Sized> {
    viewport: &'a ViewPortHandler,
    transformer: &'a Transformer,
    measure: &'a M,
    line: &'a LimitLine,
}

impl<'a, M: TextMeasure + ?Sized> LimitLineLabelBackgroundRenderer<'a, M> {
    pub fn new(
        viewport: &'a ViewPortHandler,
        transformer: &'a Transformer,
        measure: &'a M,
        line: &'a LimitLine,
    ) -> Self {
        Self { viewport, transformer, measure, line }
    }

    /// Scaled label extents for the current label text.
    pub fn extents(&self) -> LabelExtents {
        let label = self.line.label();
        let size = self.line.text_size();
        LabelExtents::measure(
            self.measure.text_width(label, size),
            self.measure.text_height(label, size),
            self.line.x_offset(),
        )
    }

    /// Background outline in pixel space, or `None` if the line has no background.
    pub fn outline(&self) -> Option<Outline> {
        let mut pts = [0.0, self.line.limit()];
        self.transformer.point_values_to_pixel(&mut pts);
        label_background_outline(
            self.line.label_background(),
            Side::from(self.line.label_position()),
            pts[1],
            self.extents(),
            self.viewport.content_rect(),
        )
    }

    /// Fill/stroke the background with `bg_paint`.
    ///
    /// Corner rounding is only applied for rectangles and is reset to 0 afterwards.
    /// Lines without a background leave both `surface` and `bg_paint` untouched.
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S, bg_paint: &mut BackgroundPaint) {
        let background = self.line.label_background();
        let Some(path) = self.outline() else {
            debug!(limit = self.line.limit(), ?background, "no label background");
            return;
        };
        if background == LabelBackground::Rectangle {
            bg_paint.corner_radius = RECTANGLE_CORNER_RADIUS;
        }

        bg_paint.style = self.line.label_background_style();
        bg_paint.color = self.line.label_background_color();

        surface.draw_path(&path, bg_paint);

        bg_paint.corner_radius = 0.0;
    }
}
