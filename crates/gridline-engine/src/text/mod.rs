//! Text rasterization.
//!
//! The engine only needs "render this string to pixels and tell me how big it
//! is". `TextRasterizer` is that seam; `FontFace` implements it with fontdue.

mod error;
mod font;
mod mask;

pub use error::FontLoadError;
pub use font::FontFace;
pub use mask::TextMask;

/// Renders strings into single-channel coverage masks.
///
/// The mask's size is the string's bounding box: advance width by line height.
/// Implementations own glyph shaping, kerning and antialiasing.
pub trait TextRasterizer {
    fn rasterize(&self, text: &str) -> TextMask;
}

impl<T: TextRasterizer + ?Sized> TextRasterizer for &T {
    fn rasterize(&self, text: &str) -> TextMask {
        (**self).rasterize(text)
    }
}

impl<T: TextRasterizer + ?Sized> TextRasterizer for Box<T> {
    fn rasterize(&self, text: &str) -> TextMask {
        (**self).rasterize(text)
    }
}
