pub mod json;
pub mod png;
pub mod svg;

use crate::error::Result;
use crate::heat::CalendarGrid;
use crate::model::{OutputFormat, RenderConfig, Theme, GRID_ROWS, GRID_WEEKS};
use crate::palette::{Palette, Rgb};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

pub const CELL: u32 = 12;
pub const GAP: u32 = 2;
pub const STEP: u32 = CELL + GAP;
pub const LEFT_MARGIN: u32 = 36;
pub const RIGHT_MARGIN: u32 = 12;
pub const TITLE_BAND: u32 = 32;
pub const TOP_PADDING: u32 = 12;
pub const BOTTOM_BAND: u32 = 24;

pub const LIGHT_BACKGROUND: Rgb = Rgb(0xff, 0xff, 0xff);
pub const DARK_BACKGROUND: Rgb = Rgb(0x0d, 0x11, 0x17);

/// Pixel geometry shared by the image backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub grid_left: u32,
    pub grid_top: u32,
}

impl Layout {
    pub fn new(has_title: bool) -> Self {
        let grid_top = if has_title { TITLE_BAND } else { TOP_PADDING };
        Self {
            width: LEFT_MARGIN + GRID_WEEKS as u32 * STEP + RIGHT_MARGIN,
            height: grid_top + GRID_ROWS as u32 * STEP + BOTTOM_BAND,
            grid_left: LEFT_MARGIN,
            grid_top,
        }
    }

    /// Top-left corner of a cell.
    pub fn cell_origin(&self, weekday: usize, week: usize) -> (u32, u32) {
        (
            self.grid_left + week as u32 * STEP,
            self.grid_top + weekday as u32 * STEP,
        )
    }
}

pub fn foreground(theme: Theme) -> Rgb {
    if theme.is_dark() {
        Rgb(0xff, 0xff, 0xff)
    } else {
        Rgb(0, 0, 0)
    }
}

pub fn background(theme: Theme) -> Rgb {
    if theme.is_dark() {
        DARK_BACKGROUND
    } else {
        LIGHT_BACKGROUND
    }
}

/// Color of every cell, normalised against the grid's own range.
pub fn cell_colors(grid: &CalendarGrid, palette: &Palette) -> Vec<Vec<Rgb>> {
    let (min, max) = (grid.min(), grid.max());
    grid.rows()
        .iter()
        .map(|row| row.iter().map(|&v| palette.color_for(v, min, max)).collect())
        .collect()
}

/// Writes the heatmap to `config.output`, creating parent directories as
/// needed. The format follows the file extension.
pub fn render(grid: &CalendarGrid, palette: &Palette, config: &RenderConfig) -> Result<PathBuf> {
    let format = config.format()?;
    ensure_parent_dir(&config.output)?;

    match format {
        OutputFormat::Svg => fs::write(&config.output, svg::to_svg(grid, palette, config))?,
        OutputFormat::Png => png::write_png(grid, palette, config)?,
        OutputFormat::Json => fs::write(&config.output, json::to_json(grid, config)?)?,
    }

    info!("wrote {:?} heatmap to {}", format, config.output.display());
    Ok(config.output.clone())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
