use super::{background, cell_colors, Layout, CELL};
use crate::error::Result;
use crate::heat::CalendarGrid;
use crate::model::RenderConfig;
use crate::palette::{Palette, Rgb};
use image::{Rgba, RgbaImage};

/// Rasterizes the cell grid. Labels and the title are not drawn.
pub fn rasterize(grid: &CalendarGrid, palette: &Palette, config: &RenderConfig) -> RgbaImage {
    let layout = Layout::new(!config.title.trim().is_empty());
    let fill = if config.transparent {
        Rgba([0, 0, 0, 0])
    } else {
        opaque(background(config.theme))
    };
    let mut img = RgbaImage::from_pixel(layout.width, layout.height, fill);

    for (row, cells) in cell_colors(grid, palette).iter().enumerate() {
        for (week, &color) in cells.iter().enumerate() {
            let (x0, y0) = layout.cell_origin(row, week);
            let pixel = opaque(color);
            for y in y0..y0 + CELL {
                for x in x0..x0 + CELL {
                    img.put_pixel(x, y, pixel);
                }
            }
        }
    }

    img
}

pub fn write_png(grid: &CalendarGrid, palette: &Palette, config: &RenderConfig) -> Result<()> {
    rasterize(grid, palette, config).save_with_format(&config.output, image::ImageFormat::Png)?;
    Ok(())
}

fn opaque(Rgb(r, g, b): Rgb) -> Rgba<u8> {
    Rgba([r, g, b, 0xff])
}
