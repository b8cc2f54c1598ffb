//! Intensity binning of grayscale rasters into class indices

use image::GrayImage;

use crate::io::error::{LayoutError, Result};
use crate::layout::grid::LayoutGrid;

/// Class for a gray intensity
///
/// The 256 intensity levels are split into equal bins of `256 / num_classes`
/// levels. When 256 is not a multiple of the class count the top levels would
/// land one past the last class, so the result is clamped to `num_classes - 1`.
/// `num_classes` must be at least one.
pub fn intensity_class(intensity: u8, num_classes: usize) -> u32 {
    let bin_width = (256 / num_classes).max(1);
    let class_index = usize::from(intensity) / bin_width;
    class_index.min(num_classes - 1) as u32
}

/// Assign every pixel the class of the raster intensity at the same position
///
/// The raster must already be resampled to the grid dimensions.
///
/// # Errors
///
/// Returns `RasterSizeMismatch` if the raster and grid dimensions differ
pub fn quantize_raster(grid: &mut LayoutGrid, num_classes: usize, raster: &GrayImage) -> Result<()> {
    let actual = (raster.width() as usize, raster.height() as usize);
    let expected = (grid.width(), grid.height());
    if actual != expected {
        return Err(LayoutError::RasterSizeMismatch { expected, actual });
    }

    let cells = grid.cells_mut();
    for (x, y, pixel) in raster.enumerate_pixels() {
        if let Some(cell) = cells.get_mut([y as usize, x as usize]) {
            *cell = intensity_class(pixel.0[0], num_classes);
        }
    }
    Ok(())
}
