use std::path::Path;

use anyhow::{Context, Result};
use image::RgbImage;
use log::info;

use whitted::Image;

/// Writes an 8-bit PNG, clamping every channel into [0, 1] first.
pub fn save_image_as_png(image: &Image, path: &Path) -> Result<()> {
    let buffer = RgbImage::from_raw(image.width as u32, image.height as u32, image.to_rgb8())
        .context("pixel buffer does not match the image dimensions")?;

    buffer.save(path).with_context(|| format!("failed to write {}", path.display()))?;
    info!("saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}
