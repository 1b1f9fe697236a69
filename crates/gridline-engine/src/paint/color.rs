use bytemuck::{Pod, Zeroable};

/// Straight-alpha 8-bit sRGB color.
///
/// Values are stored exactly as they should reach the screen; no color-space
/// conversion happens on the CPU side.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Packs into the pixel-buffer texel layout.
    #[inline]
    pub const fn to_bgra8(self) -> Bgra8 {
        Bgra8 { b: self.b, g: self.g, r: self.r, a: self.a }
    }

    /// Linear interpolation `self → other` weighted by `coverage / 255`, per channel.
    ///
    /// Used for antialiased glyph edges. The result is opaque when both inputs are.
    #[inline]
    pub fn mix(self, other: Color, coverage: u8) -> Color {
        #[inline]
        fn lerp(a: u8, b: u8, t: u32) -> u8 {
            // Rounded (a * (255 - t) + b * t) / 255.
            ((a as u32 * (255 - t) + b as u32 * t + 127) / 255) as u8
        }
        let t = coverage as u32;
        Color {
            r: lerp(self.r, other.r, t),
            g: lerp(self.g, other.g, t),
            b: lerp(self.b, other.b, t),
            a: lerp(self.a, other.a, t),
        }
    }
}

/// One pixel of a `PixelBuffer` as it sits in memory: blue, green, red, alpha.
///
/// This is the packed-ARGB layout of classic software surfaces. The GPU texture
/// receiving these bytes is RGBA, so the channel swap happens exactly once, in
/// the blit shader (see `render::Swizzle`).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Bgra8 {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl Bgra8 {
    #[inline]
    pub const fn to_color(self) -> Color {
        Color::rgba(self.r, self.g, self.b, self.a)
    }
}

impl From<Color> for Bgra8 {
    #[inline]
    fn from(c: Color) -> Self {
        c.to_bgra8()
    }
}

impl From<Bgra8> for Color {
    #[inline]
    fn from(p: Bgra8) -> Self {
        p.to_color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn texel_bytes_are_blue_first() {
        let red = Color::rgb(255, 0, 0).to_bgra8();
        assert_eq!(bytemuck::bytes_of(&red), &[0, 0, 255, 255]);
    }

    #[test]
    fn texel_round_trip_preserves_color() {
        let c = Color::rgba(1, 2, 3, 4);
        assert_eq!(Color::from(Bgra8::from(c)), c);
    }

    #[test]
    fn mix_endpoints() {
        let a = Color::BLACK;
        let b = Color::rgb(225, 0, 0);
        assert_eq!(a.mix(b, 0), a);
        assert_eq!(a.mix(b, 255), b);
    }

    #[test]
    fn mix_half_coverage_rounds() {
        let m = Color::BLACK.mix(Color::rgb(200, 100, 0), 128);
        assert_eq!(m, Color::rgb(100, 50, 0));
        assert_eq!(m.a, 255);
    }
}
