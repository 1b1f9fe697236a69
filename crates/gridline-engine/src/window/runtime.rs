use anyhow::{Context, Result};
use ouroboros::self_referencing;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use super::WindowSlot;
use crate::coords::Size;
use crate::core::{App, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::platform::translate_window_event;
use crate::input::InputState;
use crate::time::{FrameClock, FrameLimiter, FrameTime};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    /// Initial client area in logical pixels.
    pub size: Size,
    pub resizable: bool,
    /// Frame rate cap; `0` renders as fast as the event loop allows.
    pub target_fps: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "gridline".to_string(),
            size: Size::new(1600, 900),
            resizable: false,
            target_fps: 60,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens a single window and drives `app` until the window closes.
    ///
    /// Returns the first fatal error raised by initialization or by a frame.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + App,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        log::info!("event loop finished after {} frames", state.frames);

        match state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    input_state: InputState,
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    window: WindowSlot<WindowEntry>,
    limiter: FrameLimiter,
    frames: u64,
    fatal: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        let limiter = FrameLimiter::new(config.target_fps);
        Self {
            config,
            gpu_init,
            app,
            window: WindowSlot::new(),
            limiter,
            frames: 0,
            fatal: None,
        }
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(
                self.config.size.width as f64,
                self.config.size.height as f64,
            ))
            .with_resizable(self.config.resizable);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();

        WindowEntryTryBuilder {
            input_state: InputState::default(),
            clock: FrameClock::default(),
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w, gpu_init))
                    .context("GPU initialization failed for window")
            },
        }
        .try_build()
    }

    /// Releases the window and GPU context (once) and stops the loop.
    fn shutdown(&mut self, event_loop: &ActiveEventLoop, reason: &str) {
        if self.window.close() {
            log::info!("{reason}: window and GPU resources released");
        }
        event_loop.exit();
    }

    /// Records the first fatal error, then shuts down.
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        if self.fatal.is_none() {
            self.fatal = Some(err);
        }
        self.shutdown(event_loop, "fatal error");
    }

    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        // Split borrows to avoid `self` capture inside `ouroboros` closures.
        let (app, slot) = (&mut self.app, &mut self.window);

        let Some(entry) = slot.get_mut() else {
            return;
        };

        self.limiter.begin_frame(Instant::now());

        let result = entry.with_mut(|fields| {
            let ft: FrameTime = fields.clock.tick();

            let mut ctx = FrameCtx {
                window: WindowCtx {
                    window: fields.window,
                },
                gpu: fields.gpu,
                input: fields.input_state,
                time: ft,
            };

            app.on_frame(&mut ctx)
        });

        self.frames += 1;

        match result {
            Ok(AppControl::Continue) => {}
            Ok(AppControl::Exit) => self.shutdown(event_loop, "application requested exit"),
            Err(err) => self.fail(event_loop, err.context("frame failed")),
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Only the first resume creates the window; a closed slot stays closed.
        if !self.window.is_empty() {
            return;
        }

        match self.create_window_entry(event_loop) {
            Ok(entry) => {
                self.window.open(entry);
                if let Some(entry) = self.window.get() {
                    let (size, adapter) = entry.with_gpu(|gpu| (gpu.size(), gpu.adapter_info()));
                    log::info!(
                        "window \"{}\" opened at {}x{} physical pixels on {}",
                        self.config.title,
                        size.width,
                        size.height,
                        adapter.name
                    );
                    entry.with_window(|w| w.request_redraw());
                }
            }
            Err(err) => self.fail(event_loop, err.context("failed to initialize window")),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.fatal.is_some() || self.window.is_closed() {
            event_loop.exit();
            return;
        }

        let Some(entry) = self.window.get() else {
            return;
        };

        // Sleep until the next frame is due; a late frame starts right away.
        let now = Instant::now();
        match self.limiter.next_deadline() {
            Some(deadline) if deadline > now => {
                event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
            }
            _ => {
                event_loop.set_control_flow(ControlFlow::Wait);
                entry.with_window(|w| w.request_redraw());
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let (app, slot) = (&mut self.app, &mut self.window);

        let Some(entry) = slot.get_mut() else {
            return;
        };

        let mut control = AppControl::Continue;

        entry.with_mut(|fields| {
            if let Some(ev) = translate_window_event(fields.window, &event) {
                fields.input_state.apply_event(ev);
            }

            control = app.on_window_event(&event);
        });

        if control == AppControl::Exit {
            self.shutdown(event_loop, "application requested exit");
            return;
        }

        match &event {
            WindowEvent::CloseRequested => self.shutdown(event_loop, "close requested"),

            WindowEvent::Resized(new_size) => {
                if let Some(entry) = self.window.get_mut() {
                    entry.with_gpu_mut(|gpu| gpu.resize(*new_size));
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.window.get_mut() {
                    let new_size = entry.with_window(|w| w.inner_size());
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                }
            }

            WindowEvent::RedrawRequested => self.render_frame(event_loop),

            _ => {}
        }
    }
}
