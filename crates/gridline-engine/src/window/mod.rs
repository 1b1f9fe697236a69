//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, and wires them to the GPU layer.

mod runtime;
mod slot;

pub use runtime::{Runtime, RuntimeConfig};
pub use slot::WindowSlot;
