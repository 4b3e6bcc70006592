// File: crates/highlight-core/src/component.rs
// Summary: Attributes shared by every chart component (offsets, text size/color, enabled flag).

use crate::color::Color;
use crate::geometry::clamp;
use crate::units::dp_to_px;

#[derive(Clone, Debug, PartialEq)]
pub struct ComponentBase {
    enabled: bool,
    x_offset: f32,
    y_offset: f32,
    text_size: f32,
    text_color: Color,
}

impl Default for ComponentBase {
    fn default() -> Self {
        Self {
            enabled: true,
            x_offset: dp_to_px(5.0),
            y_offset: dp_to_px(5.0),
            text_size: dp_to_px(10.0),
            text_color: Color::BLACK,
        }
    }
}

/// Accessors for the shared component attributes.
///
/// Offsets and text size are given in dp and stored in pixels.
pub trait Component {
    fn base(&self) -> &ComponentBase;
    fn base_mut(&mut self) -> &mut ComponentBase;

    fn is_enabled(&self) -> bool { self.base().enabled }
    fn set_enabled(&mut self, enabled: bool) { self.base_mut().enabled = enabled; }

    fn x_offset(&self) -> f32 { self.base().x_offset }
    fn set_x_offset(&mut self, dp: f32) { self.base_mut().x_offset = dp_to_px(dp); }

    fn y_offset(&self) -> f32 { self.base().y_offset }
    fn set_y_offset(&mut self, dp: f32) { self.base_mut().y_offset = dp_to_px(dp); }

    fn text_size(&self) -> f32 { self.base().text_size }
    /// Clamped to [6, 24] dp.
    fn set_text_size(&mut self, dp: f32) {
        self.base_mut().text_size = dp_to_px(clamp(dp, 6.0, 24.0));
    }

    fn text_color(&self) -> Color { self.base().text_color }
    fn set_text_color(&mut self, color: Color) { self.base_mut().text_color = color; }
}
