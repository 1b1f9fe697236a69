//! Time subsystem.
//!
//! Provides stable, testable frame timing utilities without coupling to the runtime.
//! Intended usage:
//! - one `FrameClock` per window, `tick()` once per presented frame to obtain `FrameTime`
//! - one `FrameLimiter` per loop, deciding when the next frame is due

mod frame_clock;
mod frame_limiter;

pub use frame_clock::{FrameClock, FrameTime};
pub use frame_limiter::FrameLimiter;
