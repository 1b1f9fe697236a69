//! Color model shared between the CPU rasterizer and the GPU upload path.
//!
//! Scope:
//! - `Color`: straight-alpha 8-bit sRGB, what callers paint with
//! - `Bgra8`: the in-memory texel of a `PixelBuffer`
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::{Bgra8, Color};
