use std::path::Path;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::coords::Size;

use super::{FontLoadError, TextMask, TextRasterizer};

/// A single font at a fixed pixel size.
///
/// The font is immutable after loading; every `rasterize` call lays the string
/// out from scratch, so the face can be shared by reference.
pub struct FontFace {
    font: fontdue::Font,
    px: f32,
}

impl FontFace {
    /// Loads a TrueType or OpenType file and fixes the render size to `px`.
    pub fn from_file(path: impl AsRef<Path>, px: f32) -> Result<Self, FontLoadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| FontLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&bytes, px).map_err(|reason| FontLoadError::Parse {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Parses font bytes held in memory.
    pub fn from_bytes(bytes: &[u8], px: f32) -> Result<Self, String> {
        let settings = fontdue::FontSettings {
            scale: px,
            ..fontdue::FontSettings::default()
        };
        let font = fontdue::Font::from_bytes(bytes, settings).map_err(str::to_string)?;
        Ok(Self { font, px })
    }

    /// Render size in pixels.
    #[inline]
    pub fn px(&self) -> f32 {
        self.px
    }

    /// Line height (ascent to descent) in whole pixels.
    pub fn line_height(&self) -> u32 {
        let h = self
            .font
            .horizontal_line_metrics(self.px)
            .map_or(self.px * 1.2, |m| m.ascent - m.descent);
        h.ceil().max(1.0) as u32
    }

    fn layout(&self, text: &str) -> Layout<()> {
        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[&self.font], &TextStyle::new(text, self.px, 0));
        layout
    }

    fn advance_width(&self, layout: &Layout<()>) -> u32 {
        // Pen position *after* each glyph rather than the bitmap's right edge, so
        // trailing spaces and side bearings count like they do when typesetting.
        let w = layout
            .glyphs()
            .iter()
            .map(|g| {
                let m = self.font.metrics_indexed(g.key.glyph_index, self.px);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max);
        w.ceil() as u32
    }
}

impl TextRasterizer for FontFace {
    fn rasterize(&self, text: &str) -> TextMask {
        let layout = self.layout(text);
        let size = Size::new(self.advance_width(&layout), self.line_height());
        let mut mask = TextMask::new(size);

        for g in layout.glyphs() {
            if !g.char_data.rasterize() || g.width == 0 || g.height == 0 {
                continue;
            }
            let (metrics, bitmap) = self.font.rasterize_config(g.key);
            mask.stamp(
                g.x.round() as i32,
                g.y.round() as i32,
                metrics.width,
                metrics.height,
                &bitmap,
            );
        }

        log::trace!("rasterized {text:?} to {}x{}", size.width, size.height);
        mask
    }
}
