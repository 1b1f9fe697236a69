use crate::coords::Size;

/// Row-major 8-bit coverage bitmap of a rendered string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextMask {
    size: Size,
    coverage: Vec<u8>,
}

impl TextMask {
    /// Fully transparent mask.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            coverage: vec![0; size.area()],
        }
    }

    /// Wraps existing coverage data. Short input is zero-padded, extra bytes dropped.
    pub fn from_coverage(size: Size, mut coverage: Vec<u8>) -> Self {
        coverage.resize(size.area(), 0);
        Self { size, coverage }
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

    /// Coverage at `(x, y)`; 0 outside the mask.
    #[inline]
    pub fn coverage(&self, x: u32, y: u32) -> u8 {
        if x >= self.size.width || y >= self.size.height {
            return 0;
        }
        self.coverage[y as usize * self.size.width as usize + x as usize]
    }

    /// Max-combines a glyph bitmap of `w × h` at `(x, y)`, clipping to the mask.
    pub fn stamp(&mut self, x: i32, y: i32, w: usize, h: usize, bitmap: &[u8]) {
        for gy in 0..h {
            let ty = y + gy as i32;
            if ty < 0 || ty >= self.size.height as i32 {
                continue;
            }
            for gx in 0..w {
                let tx = x + gx as i32;
                if tx < 0 || tx >= self.size.width as i32 {
                    continue;
                }
                let Some(&value) = bitmap.get(gy * w + gx) else {
                    continue;
                };
                let i = ty as usize * self.size.width as usize + tx as usize;
                self.coverage[i] = self.coverage[i].max(value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamp_clips_and_keeps_max() {
        let mut m = TextMask::new(Size::new(3, 2));
        m.stamp(-1, 0, 2, 2, &[9, 100, 9, 50]);
        m.stamp(0, 0, 1, 1, &[40]);
        assert_eq!(m.coverage(0, 0), 100);
        assert_eq!(m.coverage(0, 1), 50);
        assert_eq!(m.coverage(1, 0), 0);
        assert_eq!(m.coverage(5, 5), 0);
    }

    #[test]
    fn from_coverage_pads_short_input() {
        let m = TextMask::from_coverage(Size::new(2, 2), vec![1]);
        assert_eq!(m.coverage(1, 1), 0);
        assert_eq!(m.coverage(0, 0), 1);
    }
}
