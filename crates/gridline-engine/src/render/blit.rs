/// Channel reordering applied by the blit fragment shader.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Swizzle {
    /// Output the sampled texel unchanged.
    Identity,
    /// Exchange red and blue (`.bgra`).
    SwapRedBlue,
}

impl Swizzle {
    /// Fragment entry point in `shaders/blit.wgsl` implementing this swizzle.
    pub const fn fragment_entry(self) -> &'static str {
        match self {
            Swizzle::Identity => "fs_passthrough",
            Swizzle::SwapRedBlue => "fs_swap_red_blue",
        }
    }

    /// What the shader does to a sampled `rgba` texel.
    pub fn apply<T: Copy>(self, [r, g, b, a]: [T; 4]) -> [T; 4] {
        match self {
            Swizzle::Identity => [r, g, b, a],
            Swizzle::SwapRedBlue => [b, g, r, a],
        }
    }
}

/// Static description of the fullscreen blit.
///
/// One texture + one sampler, a 4-vertex triangle strip with no vertex/index
/// buffers, no blending, no depth/stencil. Built into a pipeline once and never
/// changed.
///
/// Entry points must name functions in `shaders/blit.wgsl`; the texture and
/// sampler slots are fixed by that shader.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BlitPipelineDesc {
    pub label: &'static str,
    pub vertex_entry: &'static str,
    pub swizzle: Swizzle,
    pub topology: wgpu::PrimitiveTopology,
    pub vertex_count: u32,
    /// Used for both minification and magnification.
    pub filter: wgpu::FilterMode,
}

impl BlitPipelineDesc {
    #[inline]
    pub const fn fragment_entry(&self) -> &'static str {
        self.swizzle.fragment_entry()
    }
}

/// The pipeline used to put a `PixelBuffer` on screen.
///
/// `PixelBuffer` texels are B,G,R,A and are uploaded byte-for-byte into an RGBA
/// texture, so the swap happens here and nowhere else.
pub const FULLSCREEN_BLIT: BlitPipelineDesc = BlitPipelineDesc {
    label: "gridline fullscreen blit",
    vertex_entry: "vs_main",
    swizzle: Swizzle::SwapRedBlue,
    topology: wgpu::PrimitiveTopology::TriangleStrip,
    vertex_count: 4,
    filter: wgpu::FilterMode::Nearest,
};

/// Bind group 0 slots declared in `shaders/blit.wgsl`.
pub(crate) const TEXTURE_BINDING: u32 = 0;
pub(crate) const SAMPLER_BINDING: u32 = 1;

/// Format of the frame texture drawn onto a target of `target_format`.
///
/// sRGB targets get an sRGB texture (decode on sample, encode on write) so the
/// CPU bytes arrive on screen unchanged regardless of the surface's color space.
pub fn frame_texture_format(target_format: wgpu::TextureFormat) -> wgpu::TextureFormat {
    if target_format.is_srgb() {
        wgpu::TextureFormat::Rgba8UnormSrgb
    } else {
        wgpu::TextureFormat::Rgba8Unorm
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    #[test]
    fn fullscreen_blit_is_a_four_vertex_strip_with_nearest_sampling() {
        assert_eq!(FULLSCREEN_BLIT.topology, wgpu::PrimitiveTopology::TriangleStrip);
        assert_eq!(FULLSCREEN_BLIT.vertex_count, 4);
        assert_eq!(FULLSCREEN_BLIT.filter, wgpu::FilterMode::Nearest);
    }

    #[test]
    fn binding_slots_match_shader_declarations() {
        let src = include_str!("shaders/blit.wgsl");
        assert!(src.contains(&format!(
            "@group(0) @binding({TEXTURE_BINDING}) var frame_texture: texture_2d<f32>;"
        )));
        assert!(src.contains(&format!(
            "@group(0) @binding({SAMPLER_BINDING}) var frame_sampler: sampler;"
        )));
    }

    #[test]
    fn entry_points_exist_in_shader() {
        let src = include_str!("shaders/blit.wgsl");
        for entry in [
            FULLSCREEN_BLIT.vertex_entry,
            Swizzle::Identity.fragment_entry(),
            Swizzle::SwapRedBlue.fragment_entry(),
        ] {
            assert!(src.contains(&format!("fn {entry}(")), "missing {entry}");
        }
    }

    #[test]
    fn single_swizzle_restores_buffer_color() {
        // A red pixel as uploaded: bytes B,G,R,A read back by an RGBA texture.
        let texel = Color::rgb(255, 0, 0).to_bgra8();
        let sampled = [texel.b, texel.g, texel.r, texel.a];
        assert_eq!(sampled, [0, 0, 255, 255]);

        assert_eq!(FULLSCREEN_BLIT.swizzle.apply(sampled), [255, 0, 0, 255]);
        // Correcting twice would undo the fix.
        let twice = FULLSCREEN_BLIT.swizzle.apply(FULLSCREEN_BLIT.swizzle.apply(sampled));
        assert_eq!(twice, sampled);
    }

    #[test]
    fn texture_format_follows_target_color_space() {
        use wgpu::TextureFormat as F;
        assert_eq!(frame_texture_format(F::Bgra8UnormSrgb), F::Rgba8UnormSrgb);
        assert_eq!(frame_texture_format(F::Bgra8Unorm), F::Rgba8Unorm);
    }
}
