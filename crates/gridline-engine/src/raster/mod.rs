//! CPU-side rasterization target.
//!
//! A `PixelBuffer` is painted on the CPU each frame and handed to the GPU layer
//! as raw bytes for upload.

mod pixel_buffer;

pub use pixel_buffer::PixelBuffer;
