// File: crates/highlight-core/src/limit_line.rs
// Summary: Limit line model: a horizontal reference line with an optional label background.

use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::component::{Component, ComponentBase};
use crate::error::ParseError;
use crate::geometry::clamp;
use crate::paint::{DashPattern, PaintStyle};
use crate::units::dp_to_px;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LimitLabelPosition {
    LeftTop,
    LeftBottom,
    #[default]
    RightTop,
    RightBottom,
}

impl LimitLabelPosition {
    pub const ALL: [LimitLabelPosition; 4] = [Self::LeftTop, Self::LeftBottom, Self::RightTop, Self::RightBottom];

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

impl fmt::Display for LimitLabelPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for LimitLabelPosition {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::LabelPosition(s.to_string()))
    }
}

/// Shape drawn behind the limit line label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelBackground {
    #[default]
    None,
    Rectangle,
    Polygon,
}

impl LabelBackground {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Rectangle => "rectangle",
            Self::Polygon => "polygon",
        }
    }
}

impl fmt::Display for LabelBackground {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for LabelBackground {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::None, Self::Rectangle, Self::Polygon]
            .into_iter()
            .find(|b| b.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::LabelBackground(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LimitLine {
    base: ComponentBase,
    limit: f32,
    line_width: f32,
    line_color: Color,
    text_style: PaintStyle,
    label: String,
    dash: Option<DashPattern>,
    label_position: LimitLabelPosition,
    label_background: LabelBackground,
    label_background_style: PaintStyle,
    label_background_color: Color,
}

impl LimitLine {
    pub fn new(limit: f32) -> Self {
        Self::with_label(limit, "")
    }

    pub fn with_label(limit: f32, label: impl Into<String>) -> Self {
        Self {
            base: ComponentBase::default(),
            limit,
            line_width: dp_to_px(2.0),
            line_color: Color::from_argb(255, 237, 91, 91),
            text_style: PaintStyle::FillAndStroke,
            label: label.into(),
            dash: None,
            label_position: LimitLabelPosition::RightTop,
            label_background: LabelBackground::None,
            label_background_style: PaintStyle::Fill,
            label_background_color: Color::WHITE,
        }
    }

    pub fn limit(&self) -> f32 { self.limit }

    pub fn line_width(&self) -> f32 { self.line_width }
    /// Width in dp, clamped to [0.2, 12.0] before conversion.
    pub fn set_line_width(&mut self, width: f32) {
        self.line_width = dp_to_px(clamp(width, 0.2, 12.0));
    }

    pub fn line_color(&self) -> Color { self.line_color }
    pub fn set_line_color(&mut self, color: Color) { self.line_color = color; }

    pub fn enable_dashed_line(&mut self, line_length: f32, space_length: f32, phase: f32) {
        self.dash = Some(DashPattern::new(line_length, space_length, phase));
    }
    pub fn disable_dashed_line(&mut self) { self.dash = None; }
    pub fn is_dashed_line_enabled(&self) -> bool { self.dash.is_some() }
    pub fn dash_pattern(&self) -> Option<&DashPattern> { self.dash.as_ref() }

    pub fn text_style(&self) -> PaintStyle { self.text_style }
    pub fn set_text_style(&mut self, style: PaintStyle) { self.text_style = style; }

    pub fn label(&self) -> &str { &self.label }
    pub fn set_label(&mut self, label: impl Into<String>) { self.label = label.into(); }

    pub fn label_position(&self) -> LimitLabelPosition { self.label_position }
    pub fn set_label_position(&mut self, pos: LimitLabelPosition) { self.label_position = pos; }

    pub fn label_background(&self) -> LabelBackground { self.label_background }
    pub fn set_label_background(&mut self, background: LabelBackground) { self.label_background = background; }

    pub fn label_background_style(&self) -> PaintStyle { self.label_background_style }
    pub fn set_label_background_style(&mut self, style: PaintStyle) { self.label_background_style = style; }

    pub fn label_background_color(&self) -> Color { self.label_background_color }
    pub fn set_label_background_color(&mut self, color: Color) { self.label_background_color = color; }
}

impl Component for LimitLine {
    fn base(&self) -> &ComponentBase { &self.base }
    fn base_mut(&mut self) -> &mut ComponentBase { &mut self.base }
}
