// File: crates/highlight-core/src/layout.rs
// Summary: Pixel placement of highlight bands and of limit-line / highlight-area labels.

use tracing::debug;

use crate::component::Component;
use crate::geometry::{Point, RectF};
use crate::highlight_area::HighlightArea;
use crate::limit_line::LimitLine;
use crate::paint::TextAlign;
use crate::transform::Transformer;
use crate::units::dp_to_px;
use crate::viewport::ViewPortHandler;

/// Horizontal gap between a label and the content edge, before the component's own x offset.
pub const LABEL_EDGE_PADDING_DP: f32 = 4.0;

/// Baseline anchor for a limit line label at pixel height `y`.
///
/// Top variants sit above the line, bottom variants below it; the line width and
/// label height keep the glyphs clear of the stroke.
pub fn limit_label_anchor(
    line: &LimitLine,
    y: f32,
    label_height: f32,
    viewport: &ViewPortHandler,
) -> (Point, TextAlign) {
    let x_off = dp_to_px(LABEL_EDGE_PADDING_DP) + line.x_offset();
    let y_off = line.line_width() + label_height + line.y_offset();
    let pos = line.label_position();

    let baseline = if pos.is_top() { y - y_off + label_height } else { y + y_off };
    if pos.is_right() {
        (Point::new(viewport.content_right() - x_off, baseline), TextAlign::Right)
    } else {
        (Point::new(viewport.content_left() + x_off, baseline), TextAlign::Left)
    }
}

/// Pixel band covered by `area`, spanning the content width and clipped to the content rect.
pub fn highlight_band(
    area: &HighlightArea,
    transformer: &Transformer,
    viewport: &ViewPortHandler,
) -> Option<RectF> {
    let mut pts = [0.0, area.start_point(), 0.0, area.end_point()];
    transformer.point_values_to_pixel(&mut pts);

    let content = viewport.content_rect();
    let band = RectF::from_ltrb(
        content.left,
        pts[1].min(pts[3]).max(content.top),
        content.right,
        pts[1].max(pts[3]).min(content.bottom),
    );
    if band.is_empty() {
        debug!(start = area.start_point(), end = area.end_point(), "highlight band outside content area");
        return None;
    }
    Some(band)
}

/// Baseline anchor for an area label, inside the band at its top or bottom edge.
pub fn area_label_anchor(
    area: &HighlightArea,
    band: &RectF,
    label_height: f32,
    viewport: &ViewPortHandler,
) -> (Point, TextAlign) {
    let x_off = dp_to_px(LABEL_EDGE_PADDING_DP) + area.x_offset();
    let pos = area.label_position();

    let baseline = if pos.is_top() {
        band.top + area.y_offset() + label_height
    } else {
        band.bottom - area.y_offset()
    };
    if pos.is_right() {
        (Point::new(viewport.content_right() - x_off, baseline), TextAlign::Right)
    } else {
        (Point::new(viewport.content_left() + x_off, baseline), TextAlign::Left)
    }
}
