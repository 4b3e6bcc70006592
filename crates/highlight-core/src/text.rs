// File: crates/highlight-core/src/text.rs
// Summary: Text measurement seam implemented by drawing backends.

/// Measures a label at a given text size in pixels.
pub trait TextMeasure {
    /// Advance width of `text`.
    fn text_width(&self, text: &str, text_size: f32) -> f32;
    /// Height of the glyph bounds of `text`.
    fn text_height(&self, text: &str, text_size: f32) -> f32;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn text_width(&self, text: &str, text_size: f32) -> f32 { (**self).text_width(text, text_size) }
    fn text_height(&self, text: &str, text_size: f32) -> f32 { (**self).text_height(text, text_size) }
}
