// File: crates/highlight-render-skia/src/text.rs
// Summary: Text measurement and left/right aligned label drawing with the system default typeface.

use highlight_core::{Color, PaintStyle, Point, TextAlign, TextMeasure};
use skia_safe as skia;

use crate::surface::{skia_color, skia_style};

pub struct SkiaTextMeasure {
    typeface: Option<skia::Typeface>,
}

impl Default for SkiaTextMeasure {
    fn default() -> Self { Self::new() }
}

impl SkiaTextMeasure {
    pub fn new() -> Self {
        let typeface = skia::FontMgr::default().legacy_make_typeface(None, skia::FontStyle::default());
        if typeface.is_none() {
            tracing::warn!("no default typeface; labels use Skia's empty font");
        }
        Self { typeface }
    }

    fn font(&self, size: f32) -> skia::Font {
        match &self.typeface {
            Some(tf) => skia::Font::from_typeface(tf.clone(), size),
            None => {
                let mut f = skia::Font::default();
                f.set_size(size);
                f
            }
        }
    }

    /// Draw `text` with its baseline at `anchor.y`, starting (Left) or ending (Right) at `anchor.x`.
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        anchor: Point,
        align: TextAlign,
        size: f32,
        color: Color,
        style: PaintStyle,
    ) {
        let font = self.font(size);
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(skia_color(color));
        paint.set_style(skia_style(style));

        let x = match align {
            TextAlign::Left => anchor.x,
            TextAlign::Right => anchor.x - font.measure_str(text, Some(&paint)).0,
        };
        canvas.draw_str(text, (x, anchor.y), &font, &paint);
    }
}

impl TextMeasure for SkiaTextMeasure {
    fn text_width(&self, text: &str, text_size: f32) -> f32 {
        self.font(text_size).measure_str(text, None).0
    }

    fn text_height(&self, text: &str, text_size: f32) -> f32 {
        self.font(text_size).measure_str(text, None).1.height()
    }
}
