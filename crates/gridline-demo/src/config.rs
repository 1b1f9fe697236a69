//! Compile-time display configuration.

use std::path::PathBuf;

use anyhow::Result;
use gridline_engine::coords::Size;
use gridline_engine::paint::Color;

pub const TITLE: &str = "gridline";
pub const SCREEN_SIZE: Size = Size::new(1600, 900);
pub const GRID_SIZE: Size = Size::new(100, 100);
pub const FONT_PATH: &str = "assets/RobotoMono-Bold.ttf";
pub const TARGET_FPS: u32 = 60;

/// Font pixel size as a fraction of the screen height.
pub const FONT_HEIGHT_DIVISOR: u32 = 12;

pub const GRID_COLOR: Color = Color::rgb(200, 200, 200);
pub const MOUSE_LABEL_COLOR: Color = Color::rgb(225, 0, 0);
pub const SCREEN_LABEL_COLOR: Color = Color::rgb(0, 255, 0);
pub const GRID_LABEL_COLOR: Color = Color::rgb(0, 255, 255);

/// Immutable settings for the lifetime of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    pub title: String,
    pub screen: Size,
    pub cell: Size,
    pub font_px: f32,
    pub font_path: PathBuf,
    pub target_fps: u32,
}

impl DisplayConfig {
    /// Builds a config for `screen` split into `cell`-sized grid cells.
    ///
    /// Both sizes must be non-zero on each axis. Cells need not divide the
    /// screen evenly.
    pub fn new(screen: Size, cell: Size) -> Result<Self> {
        anyhow::ensure!(!screen.is_empty(), "screen size must be non-zero, got {screen}");
        anyhow::ensure!(!cell.is_empty(), "grid cell size must be non-zero, got {cell}");

        Ok(Self {
            title: TITLE.to_string(),
            screen,
            cell,
            font_px: (screen.height / FONT_HEIGHT_DIVISOR).max(1) as f32,
            font_path: PathBuf::from(FONT_PATH),
            target_fps: TARGET_FPS,
        })
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: TITLE.to_string(),
            screen: SCREEN_SIZE,
            cell: GRID_SIZE,
            font_px: (SCREEN_SIZE.height / FONT_HEIGHT_DIVISOR) as f32,
            font_path: PathBuf::from(FONT_PATH),
            target_fps: TARGET_FPS,
        }
    }
}
