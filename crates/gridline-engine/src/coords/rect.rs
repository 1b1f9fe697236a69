use super::{Point, Size};

/// Axis-aligned pixel rectangle (top-left origin, half-open on the far edges).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Rectangle at the origin covering `size`.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::from_origin_size(Point::zero(), size)
    }

    /// Exclusive far corner, computed in i64 so huge sizes cannot overflow.
    #[inline]
    fn max_i64(self) -> (i64, i64) {
        (
            self.origin.x as i64 + self.size.width as i64,
            self.origin.y as i64 + self.size.height as i64,
        )
    }

    #[inline]
    pub fn top(self) -> i32 {
        self.origin.y
    }

    #[inline]
    pub fn bottom(self) -> i64 {
        self.max_i64().1
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.is_empty()
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        let (x1, y1) = self.max_i64();
        p.x >= self.origin.x && p.y >= self.origin.y && (p.x as i64) < x1 && (p.y as i64) < y1
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let (ax1, ay1) = self.max_i64();
        let (bx1, by1) = other.max_i64();

        let x0 = self.origin.x.max(other.origin.x);
        let y0 = self.origin.y.max(other.origin.y);
        let x1 = ax1.min(bx1);
        let y1 = ay1.min(by1);

        let w = x1 - x0 as i64;
        let h = y1 - y0 as i64;

        if w <= 0 || h <= 0 {
            None
        } else {
            Some(Rect::new(x0, y0, w as u32, h as u32))
        }
    }
}
