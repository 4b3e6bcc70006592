// File: crates/highlight-core/src/label_background.rs
// Summary: Outline geometry for limit-line label backgrounds (rectangle and speech-bubble polygon).
//
// All shapes hug the left or right content edge and span `y ± extents.height`.
// Left-edge shapes are the mirror image of right-edge shapes about the content area.

use tracing::trace;

use crate::geometry::{Outline, PathSink, RectF};
use crate::highlight_area::AreaLabelPosition;
use crate::limit_line::{LabelBackground, LimitLabelPosition};

/// Extra horizontal reach of the polygon's tail beyond the label box.
pub const TAIL_LENGTH: f32 = 25.0;
/// Corner rounding applied when the rectangle background is painted.
pub const RECTANGLE_CORNER_RADIUS: f32 = 20.0;
pub const WIDTH_FACTOR: f32 = 1.5;
pub const HEIGHT_FACTOR: f32 = 2.0;

/// Content edge a label background is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl From<LimitLabelPosition> for Side {
    fn from(pos: LimitLabelPosition) -> Self {
        if pos.is_right() { Side::Right } else { Side::Left }
    }
}

impl From<AreaLabelPosition> for Side {
    fn from(pos: AreaLabelPosition) -> Self {
        if pos.is_right() { Side::Right } else { Side::Left }
    }
}

/// Half-extents of the background box, already scaled from the measured text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelExtents {
    /// Distance from the content edge to the inner side of the box.
    pub width: f32,
    /// Distance from the reference line to the top/bottom of the box.
    pub height: f32,
}

impl LabelExtents {
    pub const fn new(width: f32, height: f32) -> Self { Self { width, height } }

    /// `width = (text_width + x_offset) * 1.5`, `height = text_height * 2`.
    pub fn measure(text_width: f32, text_height: f32, x_offset: f32) -> Self {
        Self {
            width: (text_width + x_offset) * WIDTH_FACTOR,
            height: text_height * HEIGHT_FACTOR,
        }
    }
}

/// Edge coordinate and the direction pointing into the content area.
fn anchor(side: Side, content_left: f32, content_right: f32) -> (f32, f32) {
    match side {
        Side::Right => (content_right, -1.0),
        Side::Left => (content_left, 1.0),
    }
}

/// Closed 4-vertex box from the content edge inwards by `extents.width`.
pub fn rectangle_outline<S: PathSink + ?Sized>(
    sink: &mut S,
    side: Side,
    y: f32,
    extents: LabelExtents,
    content_left: f32,
    content_right: f32,
) {
    let (edge, dir) = anchor(side, content_left, content_right);
    let inner = edge + dir * extents.width;
    let h = extents.height;

    sink.move_to(edge, y + h);
    sink.line_to(inner, y + h);
    sink.line_to(inner, y - h);
    sink.line_to(edge, y - h);
    sink.close();
}

/// Closed 6-vertex callout: the box plus a tail pointing away from the edge at height `y`.
/// The tail tip is emitted first and last.
pub fn polygon_outline<S: PathSink + ?Sized>(
    sink: &mut S,
    side: Side,
    y: f32,
    extents: LabelExtents,
    content_left: f32,
    content_right: f32,
) {
    let (edge, dir) = anchor(side, content_left, content_right);
    let inner = edge + dir * extents.width;
    let tip = edge + dir * (extents.width + TAIL_LENGTH);
    let h = extents.height;

    sink.move_to(tip, y);
    sink.line_to(inner, y + h);
    sink.line_to(edge, y + h);
    sink.line_to(edge, y - h);
    sink.line_to(inner, y - h);
    sink.line_to(tip, y);
    sink.close();
}

/// Outline for `background` at reference height `y`, or `None` when no background is drawn.
pub fn label_background_outline(
    background: LabelBackground,
    side: Side,
    y: f32,
    extents: LabelExtents,
    content: RectF,
) -> Option<Outline> {
    let mut outline = Outline::new();
    match background {
        LabelBackground::Rectangle => {
            rectangle_outline(&mut outline, side, y, extents, content.left, content.right)
        }
        LabelBackground::Polygon => {
            polygon_outline(&mut outline, side, y, extents, content.left, content.right)
        }
        LabelBackground::None => return None,
    }
    trace!(?background, ?side, vertices = ?outline.vertices(), "label background outline");
    Some(outline)
}
