use crate::coords::{Point, Rect, Size};
use crate::paint::{Bgra8, Color};
use crate::text::TextMask;

/// CPU-owned 2D surface of `Bgra8` pixels, rows top to bottom.
///
/// Allocated once and repainted in place every frame; nothing carries over
/// between frames unless the caller skips `clear`.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    size: Size,
    pixels: Vec<Bgra8>,
}

impl PixelBuffer {
    /// Creates a buffer of `size` filled with transparent black.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: vec![Bgra8::default(); size.area()],
        }
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.size.height
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.size)
    }

    /// Raw texel bytes in B,G,R,A order, `4 * width` bytes per row.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Bytes per row of [`as_bytes`](Self::as_bytes).
    #[inline]
    pub fn stride(&self) -> u32 {
        self.size.width * std::mem::size_of::<Bgra8>() as u32
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.size.width as usize + x as usize
    }

    /// Reads a pixel; `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)].to_color())
    }

    /// Writes a pixel; writes outside the buffer are ignored.
    pub fn put(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.size.width || y >= self.size.height {
            return;
        }
        let i = self.index(x, y);
        self.pixels[i] = color.to_bgra8();
    }

    /// Fills the whole buffer.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color.to_bgra8());
    }

    /// Fills the part of `rect` that lies inside the buffer.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(clip) = self.bounds().intersect(rect) else {
            return;
        };
        let texel = color.to_bgra8();
        let x0 = clip.origin.x as usize;
        let x1 = x0 + clip.size.width as usize;
        for y in clip.origin.y as u32..clip.origin.y as u32 + clip.size.height {
            let row = self.index(0, y);
            self.pixels[row + x0..row + x1].fill(texel);
        }
    }

    /// One-pixel vertical line spanning the full height.
    pub fn vline(&mut self, x: u32, color: Color) {
        self.fill_rect(Rect::new(x as i32, 0, 1, self.size.height), color);
    }

    /// One-pixel horizontal line spanning the full width.
    pub fn hline(&mut self, y: u32, color: Color) {
        self.fill_rect(Rect::new(0, y as i32, self.size.width, 1), color);
    }

    /// Composites a coverage mask in `color` with its top-left corner at `origin`.
    ///
    /// Coverage 255 replaces the pixel, 0 leaves it, values between blend.
    /// Parts of the mask outside the buffer are clipped.
    pub fn blend_mask(&mut self, origin: Point, mask: &TextMask, color: Color) {
        let dst = Rect::from_origin_size(origin, mask.size());
        let Some(clip) = self.bounds().intersect(dst) else {
            return;
        };

        for y in 0..clip.size.height {
            let by = clip.origin.y as u32 + y;
            let my = (clip.origin.y - origin.y) as u32 + y;
            for x in 0..clip.size.width {
                let bx = clip.origin.x as u32 + x;
                let mx = (clip.origin.x - origin.x) as u32 + x;

                let coverage = mask.coverage(mx, my);
                if coverage == 0 {
                    continue;
                }

                let i = self.index(bx, by);
                let under = self.pixels[i].to_color();
                self.pixels[i] = under.mix(color, coverage).to_bgra8();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(w: u32, h: u32) -> PixelBuffer {
        let mut b = PixelBuffer::new(Size::new(w, h));
        b.fill(Color::BLACK);
        b
    }

    #[test]
    fn bytes_layout_matches_size() {
        let b = PixelBuffer::new(Size::new(3, 2));
        assert_eq!(b.as_bytes().len(), 3 * 2 * 4);
        assert_eq!(b.stride(), 12);
    }

    #[test]
    fn fill_then_read_back() {
        let mut b = buffer(4, 4);
        b.fill(Color::rgb(10, 20, 30));
        assert_eq!(b.pixel(3, 3), Some(Color::rgb(10, 20, 30)));
        assert_eq!(b.pixel(4, 0), None);
    }

    #[test]
    fn rows_are_top_to_bottom() {
        let mut b = buffer(2, 2);
        b.put(1, 0, Color::WHITE);
        // Second texel of the first row.
        assert_eq!(&b.as_bytes()[4..8], &[255, 255, 255, 255]);
    }

    #[test]
    fn lines_span_edge_to_edge() {
        let mut b = buffer(5, 4);
        let gray = Color::rgb(200, 200, 200);
        b.vline(2, gray);
        b.hline(3, gray);
        for y in 0..4 {
            assert_eq!(b.pixel(2, y), Some(gray));
        }
        for x in 0..5 {
            assert_eq!(b.pixel(x, 3), Some(gray));
        }
        assert_eq!(b.pixel(0, 0), Some(Color::BLACK));
    }

    #[test]
    fn out_of_range_lines_are_ignored() {
        let mut b = buffer(3, 3);
        b.vline(3, Color::WHITE);
        b.hline(7, Color::WHITE);
        assert!((0..3).all(|y| (0..3).all(|x| b.pixel(x, y) == Some(Color::BLACK))));
    }

    #[test]
    fn blend_mask_clips_and_blends() {
        let mut b = buffer(4, 4);
        let mask = TextMask::from_coverage(Size::new(2, 2), vec![255, 0, 128, 255]);
        b.blend_mask(Point::new(-1, 3), &mask, Color::rgb(200, 0, 0));

        // Only the mask's right column, top row lands at (0, 3): coverage 0.
        assert_eq!(b.pixel(0, 3), Some(Color::BLACK));

        b.blend_mask(Point::new(0, 0), &mask, Color::rgb(200, 0, 0));
        assert_eq!(b.pixel(0, 0), Some(Color::rgb(200, 0, 0)));
        assert_eq!(b.pixel(1, 0), Some(Color::BLACK));
        assert_eq!(b.pixel(0, 1), Some(Color::rgb(100, 0, 0)));
    }
}
