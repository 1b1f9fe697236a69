//! Software-rendered overlay: coordinate grid plus three status labels.
//!
//! Everything here paints into a `PixelBuffer` on the CPU; the GPU never sees
//! the grid or the text as geometry.

use gridline_engine::coords::{Point, Rect, Size};
use gridline_engine::paint::Color;
use gridline_engine::raster::PixelBuffer;
use gridline_engine::text::TextRasterizer;

use crate::config::{GRID_COLOR, GRID_LABEL_COLOR, MOUSE_LABEL_COLOR, SCREEN_LABEL_COLOR};

/// Grid line positions, one independent range per axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLines {
    /// x of every vertical line: `0, cell.w, 2·cell.w, … < screen.w`.
    pub xs: Vec<u32>,
    /// y of every horizontal line: `0, cell.h, 2·cell.h, … < screen.h`.
    pub ys: Vec<u32>,
}

pub fn grid_lines(screen: Size, cell: Size) -> GridLines {
    let axis = |extent: u32, step: u32| -> Vec<u32> {
        (0..extent).step_by(step.max(1) as usize).collect()
    };
    GridLines {
        xs: axis(screen.width, cell.width),
        ys: axis(screen.height, cell.height),
    }
}

/// Fills the whole buffer with opaque black.
pub fn clear(buffer: &mut PixelBuffer) {
    buffer.fill(Color::BLACK);
}

/// Draws one-pixel, edge-to-edge grid lines.
pub fn draw_grid(buffer: &mut PixelBuffer, screen: Size, cell: Size) {
    let lines = grid_lines(screen, cell);
    for &x in &lines.xs {
        buffer.vline(x, GRID_COLOR);
    }
    for &y in &lines.ys {
        buffer.hline(y, GRID_COLOR);
    }
}

/// Where a label ended up, in buffer pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelPlacement {
    pub text: String,
    pub rect: Rect,
    pub color: Color,
}

/// Stacks label boxes of `sizes`: each one horizontally centred, the first at
/// `screen.h / 3` and every following one two of its predecessor's heights lower.
pub fn layout_labels<const N: usize>(screen: Size, sizes: [Size; N]) -> [Rect; N] {
    let center_x = (screen.width / 2) as i32;
    let mut y = (screen.height / 3) as i32;

    sizes.map(|size| {
        let rect = Rect::new(center_x - (size.width / 2) as i32, y, size.width, size.height);
        y = y.saturating_add(size.height.saturating_mul(2) as i32);
        rect
    })
}

/// Label text for the three status lines, paired with their colours.
pub fn label_lines(mouse: Point, screen: Size, grid: Size) -> [(String, Color); 3] {
    [
        (format!("mouse_coords:{mouse}"), MOUSE_LABEL_COLOR),
        (format!("screen_size:{screen}"), SCREEN_LABEL_COLOR),
        (format!("grid_size:{grid}"), GRID_LABEL_COLOR),
    ]
}

/// Paints the full overlay with a fixed screen and cell size.
pub struct Overlay<R: TextRasterizer> {
    rasterizer: R,
    screen: Size,
    cell: Size,
}

impl<R: TextRasterizer> Overlay<R> {
    pub fn new(rasterizer: R, screen: Size, cell: Size) -> Self {
        Self {
            rasterizer,
            screen,
            cell,
        }
    }

    /// Renders the three status labels over whatever the buffer holds.
    pub fn draw_text(
        &self,
        buffer: &mut PixelBuffer,
        mouse: Point,
        screen: Size,
        grid: Size,
    ) -> [LabelPlacement; 3] {
        let lines = label_lines(mouse, screen, grid);
        let masks = lines.each_ref().map(|(text, _)| self.rasterizer.rasterize(text));
        let rects = layout_labels(screen, masks.each_ref().map(|m| m.size()));

        for ((mask, rect), (_, color)) in masks.iter().zip(&rects).zip(&lines) {
            buffer.blend_mask(rect.origin, mask, *color);
        }

        let mut rects = rects.into_iter();
        lines.map(|(text, color)| LabelPlacement {
            text,
            rect: rects.next().unwrap_or_default(),
            color,
        })
    }

    /// One full frame: clear, grid, labels.
    pub fn paint(&self, buffer: &mut PixelBuffer, mouse: Point) -> [LabelPlacement; 3] {
        clear(buffer);
        draw_grid(buffer, self.screen, self.cell);
        let placements = self.draw_text(buffer, mouse, self.screen, self.cell);
        log::trace!("painted overlay for pointer {mouse}");
        placements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridline_engine::text::TextMask;

    // ── fixtures ──────────────────────────────────────────────────────────

    const GLYPH_W: u32 = 10;
    const LINE_H: u32 = 20;

    /// Monospace stand-in: every char is a solid `GLYPH_W × LINE_H` block.
    struct BlockFont;

    impl TextRasterizer for BlockFont {
        fn rasterize(&self, text: &str) -> TextMask {
            let size = Size::new(text.chars().count() as u32 * GLYPH_W, LINE_H);
            TextMask::from_coverage(size, vec![255; size.area()])
        }
    }

    fn demo_overlay() -> Overlay<BlockFont> {
        Overlay::new(BlockFont, Size::new(1600, 900), Size::new(100, 100))
    }

    fn buffer(size: Size) -> PixelBuffer {
        PixelBuffer::new(size)
    }

    // ── grid ──────────────────────────────────────────────────────────────

    #[test]
    fn line_counts_round_up_partial_cells() {
        for (screen, cell) in [
            (Size::new(1000, 700), Size::new(300, 300)),
            (Size::new(1600, 900), Size::new(100, 100)),
            (Size::new(7, 3), Size::new(2, 1)),
            (Size::new(1, 1), Size::new(1, 1)),
        ] {
            let lines = grid_lines(screen, cell);
            assert_eq!(lines.xs.len() as u32, screen.width.div_ceil(cell.width));
            assert_eq!(lines.ys.len() as u32, screen.height.div_ceil(cell.height));
            assert_eq!(lines.xs[0], 0);
            assert_eq!(lines.ys[0], 0);
        }
    }

    #[test]
    fn degenerate_cell_leaves_only_origin_lines() {
        let lines = grid_lines(Size::new(1600, 900), Size::new(2000, 2000));
        assert_eq!(lines.xs, vec![0]);
        assert_eq!(lines.ys, vec![0]);
    }

    #[test]
    fn grid_is_stable_across_frames() {
        let a = grid_lines(Size::new(1600, 900), Size::new(100, 100));
        let b = grid_lines(Size::new(1600, 900), Size::new(100, 100));
        assert_eq!(a, b);
    }

    #[test]
    fn grid_lines_are_drawn_edge_to_edge() {
        let size = Size::new(30, 20);
        let mut b = buffer(size);
        clear(&mut b);
        draw_grid(&mut b, size, Size::new(10, 10));

        assert_eq!(b.pixel(10, 19), Some(GRID_COLOR));
        assert_eq!(b.pixel(29, 10), Some(GRID_COLOR));
        assert_eq!(b.pixel(0, 0), Some(GRID_COLOR));
        assert_eq!(b.pixel(5, 5), Some(Color::BLACK));
        assert_eq!(b.pixel(29, 19), Some(Color::BLACK));
    }

    // ── labels ────────────────────────────────────────────────────────────

    #[test]
    fn layout_stacks_by_twice_previous_height() {
        let rects = layout_labels(
            Size::new(100, 90),
            [Size::new(10, 5), Size::new(20, 7), Size::new(30, 3)],
        );
        assert_eq!(rects[0], Rect::new(45, 30, 10, 5));
        assert_eq!(rects[1], Rect::new(40, 40, 20, 7));
        assert_eq!(rects[2], Rect::new(35, 54, 30, 3));
    }

    #[test]
    fn layout_uses_integer_halves() {
        let rects = layout_labels(Size::new(101, 10), [Size::new(7, 1)]);
        assert_eq!(rects[0].origin, Point::new(50 - 3, 3));
    }

    #[test]
    fn labels_never_overlap_vertically() {
        let overlay = demo_overlay();
        let mut b = buffer(overlay.screen);
        let labels = overlay.paint(&mut b, Point::new(12, 34));

        for pair in labels.windows(2) {
            let (upper, lower) = (&pair[0].rect, &pair[1].rect);
            assert!(lower.top() as i64 >= upper.bottom());
        }
    }

    #[test]
    fn wide_text_is_clipped_not_panicking() {
        let overlay = Overlay::new(BlockFont, Size::new(50, 30), Size::new(10, 10));
        let mut b = buffer(overlay.screen);
        let labels = overlay.paint(&mut b, Point::new(1, 2));

        assert!(labels[0].rect.origin.x < 0);
        assert_eq!(b.pixel(0, 10), Some(MOUSE_LABEL_COLOR));
    }

    // ── frame ─────────────────────────────────────────────────────────────

    #[test]
    fn off_grid_and_off_text_is_black() {
        let overlay = demo_overlay();
        let mut b = buffer(overlay.screen);
        let labels = overlay.paint(&mut b, Point::new(800, 450));

        for (x, y) in [(50, 50), (1550, 850), (150, 250), (1599, 899)] {
            let p = Point::new(x as i32, y as i32);
            assert!(labels.iter().all(|l| !l.rect.contains(p)));
            assert_eq!(b.pixel(x, y), Some(Color::BLACK), "pixel ({x}, {y})");
        }
    }

    #[test]
    fn repaint_does_not_carry_over() {
        let overlay = demo_overlay();

        let mut reused = buffer(overlay.screen);
        overlay.paint(&mut reused, Point::new(10, 10));
        overlay.paint(&mut reused, Point::new(800, 450));

        let mut fresh = buffer(overlay.screen);
        overlay.paint(&mut fresh, Point::new(800, 450));

        assert_eq!(reused.as_bytes(), fresh.as_bytes());
    }

    #[test]
    fn end_to_end_demo_frame() {
        let overlay = demo_overlay();
        let mut b = buffer(overlay.screen);
        let labels = overlay.paint(&mut b, Point::new(800, 450));

        let lines = grid_lines(overlay.screen, overlay.cell);
        assert_eq!(lines.xs, (0..16).map(|i| i * 100).collect::<Vec<_>>());
        assert_eq!(lines.ys, (0..9).map(|i| i * 100).collect::<Vec<_>>());

        let mouse = &labels[0];
        assert_eq!(mouse.text, "mouse_coords:(800, 450)");
        assert_eq!(mouse.color, Color::rgb(225, 0, 0));
        assert_eq!(mouse.rect.top(), 300);
        let width = 23 * GLYPH_W;
        assert_eq!(mouse.rect.origin.x, 800 - (width / 2) as i32);

        assert_eq!(labels[1].text, "screen_size:(1600, 900)");
        assert_eq!(labels[1].rect.top(), 340);
        assert_eq!(labels[2].text, "grid_size:(100, 100)");
        assert_eq!(labels[2].rect.top(), 380);

        // Solid block glyphs land in the label colour.
        let o = mouse.rect.origin;
        assert_eq!(b.pixel(o.x as u32 + 1, o.y as u32 + 1), Some(MOUSE_LABEL_COLOR));
        let o = labels[2].rect.origin;
        assert_eq!(b.pixel(o.x as u32 + 1, o.y as u32 + 1), Some(GRID_LABEL_COLOR));
    }
}
