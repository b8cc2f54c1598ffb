//! Layout source image loading with resampling and grayscale conversion

use crate::io::error::{LayoutError, Result};
use image::imageops::FilterType;
use image::{DynamicImage, GrayImage, Luma, Rgba};
use std::path::Path;

/// Gray level of a color pixel
///
/// Uses integer weights of 11/32 red, 16/32 green and 5/32 blue. Alpha is
/// ignored.
pub fn gray_value(pixel: Rgba<u8>) -> u8 {
    let [r, g, b, _] = pixel.0;
    let weighted = u32::from(r) * 11 + u32::from(g) * 16 + u32::from(b) * 5;
    (weighted / 32) as u8
}

/// Resample an image to exactly `width × height` and convert it to grayscale
///
/// Nearest-neighbour filtering keeps hard region edges intact, so a label-like
/// source image quantizes into the same regions at any grid size.
pub fn fit_to_grid(source: &DynamicImage, width: usize, height: usize) -> GrayImage {
    let resized = source
        .resize_exact(width as u32, height as u32, FilterType::Nearest)
        .to_rgba8();

    let mut gray = GrayImage::new(resized.width(), resized.height());
    for (x, y, pixel) in resized.enumerate_pixels() {
        gray.put_pixel(x, y, Luma([gray_value(*pixel)]));
    }
    gray
}

/// Load a layout source image and fit it to the grid
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_layout_image(path: &Path, width: usize, height: usize) -> Result<GrayImage> {
    let source = image::open(path).map_err(|e| LayoutError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(fit_to_grid(&source, width, height))
}
