use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::error::Result;
use crate::render::RenderedRaster;

/// Save a rendered raster as 8-bit RGBA PNG.
pub fn save_png(rendered: &RenderedRaster, path: &Path) -> Result<()> {
    let mut img = RgbaImage::new(rendered.width as u32, rendered.height as u32);
    for row in 0..rendered.height {
        for col in 0..rendered.width {
            img.put_pixel(col as u32, row as u32, Rgba(rendered.pixel(row, col)));
        }
    }

    img.save_with_format(path, ImageFormat::Png)?;
    tracing::info!(path = %path.display(), "Saved render");
    Ok(())
}
