//! Gridline engine crate.
//!
//! Owns the platform + GPU runtime pieces and the CPU raster layer that
//! applications draw into before the frame is composited on screen.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod paint;
pub mod raster;
pub mod render;
pub mod text;
