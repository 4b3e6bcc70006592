// File: crates/highlight-core/src/highlight_area.rs
// Summary: Highlight area model: a shaded band between two axis values with border and label.

use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::component::{Component, ComponentBase};
use crate::error::ParseError;
use crate::geometry::clamp;
use crate::paint::{DashPattern, PaintStyle};
use crate::units::dp_to_px;

/// Corner of the band the label attaches to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AreaLabelPosition {
    LeftTop,
    LeftBottom,
    #[default]
    RightTop,
    RightBottom,
}

impl AreaLabelPosition {
    pub const ALL: [AreaLabelPosition; 4] = [Self::LeftTop, Self::LeftBottom, Self::RightTop, Self::RightBottom];

    pub const fn is_right(self) -> bool { matches!(self, Self::RightTop | Self::RightBottom) }
    pub const fn is_top(self) -> bool { matches!(self, Self::LeftTop | Self::RightTop) }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LeftTop => "left-top",
            Self::LeftBottom => "left-bottom",
            Self::RightTop => "right-top",
            Self::RightBottom => "right-bottom",
        }
    }
}

impl fmt::Display for AreaLabelPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for AreaLabelPosition {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::LabelPosition(s.to_string()))
    }
}

/// Band between `start_point` and `end_point` on the value axis.
///
/// Setters never fail: the border width is clamped, everything else is stored as given.
#[derive(Clone, Debug, PartialEq)]
pub struct HighlightArea {
    base: ComponentBase,
    start_point: f32,
    end_point: f32,
    border_width: f32,
    area_color: Color,
    border_color: Color,
    text_style: PaintStyle,
    label: String,
    dash: Option<DashPattern>,
    label_position: AreaLabelPosition,
}

impl HighlightArea {
    pub fn new(start_point: f32, end_point: f32) -> Self {
        Self::with_label(start_point, end_point, "")
    }

    /// Pass `""` when no label is needed.
    pub fn with_label(start_point: f32, end_point: f32, label: impl Into<String>) -> Self {
        Self {
            base: ComponentBase::default(),
            start_point,
            end_point,
            border_width: 0.0,
            area_color: Color::from_argb(50, 237, 91, 91),
            border_color: Color::from_argb(100, 255, 255, 255),
            text_style: PaintStyle::FillAndStroke,
            label: label.into(),
            dash: None,
            label_position: AreaLabelPosition::RightTop,
        }
    }

    pub fn start_point(&self) -> f32 { self.start_point }
    pub fn end_point(&self) -> f32 { self.end_point }

    pub fn area_color(&self) -> Color { self.area_color }
    pub fn set_area_color(&mut self, color: Color) { self.area_color = color; }

    /// Border width in pixels.
    pub fn border_width(&self) -> f32 { self.border_width }
    /// Width in dp, clamped to [0.2, 12.0] before conversion.
    pub fn set_border_width(&mut self, width: f32) {
        self.border_width = dp_to_px(clamp(width, 0.2, 12.0));
    }

    pub fn border_color(&self) -> Color { self.border_color }
    pub fn set_border_color(&mut self, color: Color) { self.border_color = color; }

    pub fn enable_dashed_border(&mut self, line_length: f32, space_length: f32, phase: f32) {
        self.dash = Some(DashPattern::new(line_length, space_length, phase));
    }
    pub fn disable_dashed_border(&mut self) { self.dash = None; }
    pub fn is_dashed_border_enabled(&self) -> bool { self.dash.is_some() }
    pub fn dash_pattern(&self) -> Option<&DashPattern> { self.dash.as_ref() }

    pub fn text_style(&self) -> PaintStyle { self.text_style }
    pub fn set_text_style(&mut self, style: PaintStyle) { self.text_style = style; }

    pub fn label(&self) -> &str { &self.label }
    pub fn set_label(&mut self, label: impl Into<String>) { self.label = label.into(); }

    pub fn label_position(&self) -> AreaLabelPosition { self.label_position }
    pub fn set_label_position(&mut self, pos: AreaLabelPosition) { self.label_position = pos; }

    /// `(low, high)` regardless of the order the points were given in.
    pub fn value_range(&self) -> (f32, f32) {
        (self.start_point.min(self.end_point), self.start_point.max(self.end_point))
    }
}

impl Component for HighlightArea {
    fn base(&self) -> &ComponentBase { &self.base }
    fn base_mut(&mut self) -> &mut ComponentBase { &mut self.base }
}
