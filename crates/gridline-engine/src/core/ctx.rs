use anyhow::Result;
use winit::window::Window;

use crate::coords::{Point, Size};
use crate::device::{Gpu, SurfaceErrorAction};
use crate::input::InputState;
use crate::render::{RenderCtx, RenderTarget};
use crate::time::FrameTime;

/// Window handle and immutable window metadata.
pub struct WindowCtx<'a> {
    pub window: &'a Window,
}

/// Whether [`FrameCtx::present`] put a frame on screen.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PresentOutcome {
    Presented,
    /// The surface texture could not be acquired (reconfigured swapchain or a
    /// transient timeout); nothing was drawn.
    Skipped,
}

/// Outcome of a failed acquire: `Some(Skipped)` when the loop can carry on,
/// `None` when the error must stop it.
fn recover_from(action: SurfaceErrorAction) -> Option<PresentOutcome> {
    match action {
        SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {
            Some(PresentOutcome::Skipped)
        }
        SurfaceErrorAction::Fatal => None,
    }
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub input: &'a mut InputState,
    pub time: FrameTime,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Samples the pointer once for this frame, clamped into `bounds`.
    pub fn pointer_position(&self, bounds: Size) -> Point {
        self.input.pointer_position(bounds)
    }

    /// Number of input events drained since the previous frame.
    pub fn drained_events(&mut self) -> u32 {
        self.input.take_event_count()
    }

    /// Runs one GPU frame: acquire, let `draw` record into the surface view,
    /// submit, present.
    ///
    /// Errors from `draw` and out-of-memory on acquire are returned; a lost or
    /// outdated surface is reconfigured, and it and a timed-out acquire are
    /// reported as [`PresentOutcome::Skipped`].
    pub fn present<F>(&mut self, draw: F) -> Result<PresentOutcome>
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>) -> Result<()>,
    {
        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                let action = self.gpu.handle_surface_error(&err);
                return match recover_from(action) {
                    Some(outcome) => {
                        log::debug!("surface texture unavailable ({err}); frame skipped");
                        Ok(outcome)
                    }
                    None => {
                        Err(anyhow::Error::new(err).context("failed to acquire surface texture"))
                    }
                };
            }
        };

        let size = self.gpu.size();
        let rctx = RenderCtx::new(
            self.gpu.device(),
            self.gpu.queue(),
            self.gpu.surface_format(),
            Size::new(size.width, size.height),
        );

        // RenderTarget borrows frame.encoder; dropped before present() takes frame.
        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            draw(&rctx, &mut target)?;
        }

        self.window.window.pre_present_notify();
        self.gpu.present(frame);

        Ok(PresentOutcome::Presented)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recoverable_acquire_errors_skip_the_frame() {
        assert_eq!(
            recover_from(SurfaceErrorAction::Reconfigured),
            Some(PresentOutcome::Skipped)
        );
        assert_eq!(
            recover_from(SurfaceErrorAction::SkipFrame),
            Some(PresentOutcome::Skipped)
        );
    }

    #[test]
    fn fatal_acquire_error_is_not_recovered() {
        assert_eq!(recover_from(SurfaceErrorAction::Fatal), None);
    }
}
