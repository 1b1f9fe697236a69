//! `gridline`: a coordinate grid and live pointer readout, painted on the CPU
//! and composited to the window through a single GPU blit.

mod app;
mod config;
mod overlay;

use anyhow::{Context, Result};

use gridline_engine::device::GpuInit;
use gridline_engine::logging::{init_logging, LoggingConfig};
use gridline_engine::text::FontFace;
use gridline_engine::window::{Runtime, RuntimeConfig};

use crate::app::GridApp;
use crate::config::{DisplayConfig, GRID_SIZE, SCREEN_SIZE};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = DisplayConfig::new(SCREEN_SIZE, GRID_SIZE)?;

    let font = FontFace::from_file(&config.font_path, config.font_px)
        .with_context(|| format!("failed to load font {}", config.font_path.display()))?;
    log::info!("loaded font {} at {}px", config.font_path.display(), font.px());

    let runtime = RuntimeConfig {
        title: config.title.clone(),
        size: config.screen,
        resizable: false,
        target_fps: config.target_fps,
    };

    Runtime::run(runtime, GpuInit::default(), GridApp::new(config, font))
}
