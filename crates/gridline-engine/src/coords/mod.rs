//! Integer pixel geometry shared by the CPU rasterizer, the demo and the GPU layer.
//!
//! Canonical space:
//! - whole pixels
//! - origin top-left
//! - +X right, +Y down

mod point;
mod rect;
mod size;

pub use point::Point;
pub use rect::Rect;
pub use size::Size;
