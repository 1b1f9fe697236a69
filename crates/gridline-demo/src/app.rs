use anyhow::{Context, Result};

use gridline_engine::core::{App, AppControl, FrameCtx, PresentOutcome};
use gridline_engine::raster::PixelBuffer;
use gridline_engine::render::Compositor;
use gridline_engine::text::TextRasterizer;

use crate::config::DisplayConfig;
use crate::overlay::Overlay;

/// Per-frame orchestration: sample the pointer, paint the overlay on the CPU,
/// then upload and blit it through the compositor.
pub struct GridApp<R: TextRasterizer> {
    config: DisplayConfig,
    overlay: Overlay<R>,
    buffer: PixelBuffer,
    /// Built on the first frame, once the surface format is known.
    compositor: Option<Compositor>,
    fps: FpsMeter,
}

impl<R: TextRasterizer> GridApp<R> {
    pub fn new(config: DisplayConfig, rasterizer: R) -> Self {
        let overlay = Overlay::new(rasterizer, config.screen, config.cell);
        let buffer = PixelBuffer::new(config.screen);
        let fps = FpsMeter::new(config.target_fps);
        Self {
            config,
            overlay,
            buffer,
            compositor: None,
            fps,
        }
    }
}

impl<R: TextRasterizer> App for GridApp<R> {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl> {
        let drained = ctx.drained_events();
        let mouse = ctx.pointer_position(self.config.screen);
        log::trace!(
            "frame {}: {drained} input events, pointer {mouse}",
            ctx.time.frame_index
        );

        self.overlay.paint(&mut self.buffer, mouse);

        if self.compositor.is_none() {
            let format = ctx.gpu.surface_format();
            log::debug!("creating compositor for {} buffer, target {format:?}", self.buffer.size());
            self.compositor = Some(Compositor::new(ctx.gpu.device(), format, self.buffer.size()));
        }
        let Some(compositor) = self.compositor.as_ref() else {
            return Ok(AppControl::Continue);
        };

        let buffer = &self.buffer;
        let outcome = ctx.present(|rctx, target| {
            compositor
                .upload(rctx.queue, buffer)
                .context("failed to upload pixel buffer")?;
            compositor.draw(target, rctx.viewport);
            Ok(())
        })?;

        if outcome == PresentOutcome::Skipped {
            log::debug!("frame {} skipped: no surface texture", ctx.time.frame_index);
        }

        if let Some(rate) = self.fps.record(ctx.time.dt) {
            log::debug!("{rate:.1} fps");
        }

        Ok(AppControl::Continue)
    }
}

/// Averages frame rate over windows of `window` frames.
#[derive(Debug, Clone)]
struct FpsMeter {
    window: u32,
    frames: u32,
    elapsed: f32,
}

impl FpsMeter {
    fn new(window: u32) -> Self {
        Self {
            window: window.max(1),
            frames: 0,
            elapsed: 0.0,
        }
    }

    /// Adds one frame of `dt` seconds; yields the average rate when a window completes.
    fn record(&mut self, dt: f32) -> Option<f32> {
        self.frames += 1;
        self.elapsed += dt;
        if self.frames < self.window {
            return None;
        }

        let rate = if self.elapsed > 0.0 {
            self.frames as f32 / self.elapsed
        } else {
            0.0
        };
        self.frames = 0;
        self.elapsed = 0.0;
        Some(rate)
    }
}
