// File: crates/highlight-core/tests/limit_line.rs
// Purpose: Limit line defaults, width clamping, dashing and component attributes.

use highlight_core::units::dp_to_px;
use highlight_core::{Color, Component, LabelBackground, LimitLabelPosition, LimitLine, PaintStyle, ParseError};

#[test]
fn defaults() {
    let line = LimitLine::with_label(42.0, "max");
    assert_eq!(line.limit(), 42.0);
    assert_eq!(line.label(), "max");
    assert_eq!(line.line_width(), dp_to_px(2.0));
    assert_eq!(line.label_position(), LimitLabelPosition::RightTop);
    assert_eq!(line.label_background(), LabelBackground::None);
    assert_eq!(line.label_background_style(), PaintStyle::Fill);
    assert_eq!(line.label_background_color(), Color::WHITE);
    assert_eq!(line.x_offset(), dp_to_px(5.0));
    assert_eq!(line.y_offset(), dp_to_px(5.0));
    assert_eq!(line.text_size(), dp_to_px(10.0));
    assert_eq!(line.text_color(), Color::BLACK);
}

#[test]
fn line_width_clamps() {
    let mut line = LimitLine::new(0.0);
    line.set_line_width(0.0);
    assert_eq!(line.line_width(), dp_to_px(0.2));
    line.set_line_width(99.0);
    assert_eq!(line.line_width(), dp_to_px(12.0));
    line.set_line_width(3.0);
    assert_eq!(line.line_width(), dp_to_px(3.0));
}

#[test]
fn dashed_line_toggles() {
    let mut line = LimitLine::new(0.0);
    line.enable_dashed_line(4.0, 2.0, 1.0);
    assert!(line.is_dashed_line_enabled());
    assert_eq!(line.dash_pattern().map(|d| (d.line_length(), d.space_length(), d.phase)), Some((4.0, 2.0, 1.0)));
    line.disable_dashed_line();
    assert!(!line.is_dashed_line_enabled());
}

#[test]
fn text_size_clamps_to_supported_range() {
    let mut line = LimitLine::new(0.0);
    line.set_text_size(2.0);
    assert_eq!(line.text_size(), dp_to_px(6.0));
    line.set_text_size(30.0);
    assert_eq!(line.text_size(), dp_to_px(24.0));
    line.set_x_offset(0.0);
    assert_eq!(line.x_offset(), 0.0);
    line.set_enabled(false);
    assert!(!line.is_enabled());
}

#[test]
fn background_parses() {
    assert_eq!("polygon".parse::<LabelBackground>(), Ok(LabelBackground::Polygon));
    assert_eq!("RECTANGLE".parse::<LabelBackground>(), Ok(LabelBackground::Rectangle));
    assert_eq!("none".parse::<LabelBackground>(), Ok(LabelBackground::None));
    let err = "bubble".parse::<LabelBackground>().unwrap_err();
    assert_eq!(err, ParseError::LabelBackground("bubble".into()));
    assert!(err.to_string().contains("bubble"));
}
