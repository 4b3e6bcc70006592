// File: crates/highlight-core/src/color.rs
// Summary: Packed ARGB color value shared by all annotation models.

/// 32-bit color packed as `0xAARRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    pub const BLACK: Color = Color::from_argb(255, 0, 0, 0);
    pub const WHITE: Color = Color::from_argb(255, 255, 255, 255);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn to_argb(self) -> u32 { self.0 }
    pub const fn alpha(self) -> u8 { (self.0 >> 24) as u8 }
    pub const fn red(self) -> u8 { (self.0 >> 16) as u8 }
    pub const fn green(self) -> u8 { (self.0 >> 8) as u8 }
    pub const fn blue(self) -> u8 { self.0 as u8 }
}

impl Default for Color {
    fn default() -> Self { Color::BLACK }
}
