//! GPU rendering subsystem.
//!
//! The only GPU work this engine does is compositing a CPU `PixelBuffer` onto
//! the window: upload it into a texture, then draw one fullscreen triangle strip
//! that samples it.
//!
//! Convention:
//! - CPU pixels are top-left origin, +Y down, rows top to bottom.
//! - The vertex shader generates clip-space corners from `vertex_index`; no
//!   vertex or index buffers are bound.

mod blit;
mod compositor;
mod ctx;

pub use blit::{frame_texture_format, BlitPipelineDesc, Swizzle, FULLSCREEN_BLIT};
pub use compositor::Compositor;
pub use ctx::{RenderCtx, RenderTarget};
