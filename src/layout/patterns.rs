//! Deterministic periodic layouts
//!
//! Each generator divides the grid into bands (or square tiles) of a fixed
//! pixel size and cycles through the classes band by band. A size parameter of
//! `AUTO_SIZE` derives the band size from the grid extent and class count.

use crate::io::configuration::{AUTO_SIZE, DEFAULT_MAX_STRIPE_WIDTH};
use crate::layout::grid::LayoutGrid;

/// Resolve the band size for a periodic layout
///
/// An explicit size is used as-is. Otherwise the extent is split evenly among
/// the classes, capped at `DEFAULT_MAX_STRIPE_WIDTH` and floored at one pixel
/// so that grids narrower than the class count still cycle one pixel per class.
pub fn effective_band_size(size_parameter: usize, extent: usize, num_classes: usize) -> usize {
    if size_parameter != AUTO_SIZE {
        return size_parameter;
    }
    (extent / num_classes.max(1)).clamp(1, DEFAULT_MAX_STRIPE_WIDTH)
}

// Class for a band position; callers guarantee band_size > 0 and num_classes > 0
const fn band_class(position: usize, band_size: usize, num_classes: usize) -> u32 {
    ((position / band_size) % num_classes) as u32
}

/// Fill whole rows, cycling classes every `stripe_width` rows
///
/// `num_classes` must be at least one.
pub fn horizontal_stripes(grid: &mut LayoutGrid, num_classes: usize, stripe_width: usize) {
    let band = effective_band_size(stripe_width, grid.height(), num_classes);
    for (row, mut line) in grid.cells_mut().rows_mut().into_iter().enumerate() {
        line.fill(band_class(row, band, num_classes));
    }
}

/// Fill whole columns, cycling classes every `stripe_width` columns
///
/// `num_classes` must be at least one.
pub fn vertical_stripes(grid: &mut LayoutGrid, num_classes: usize, stripe_width: usize) {
    let band = effective_band_size(stripe_width, grid.width(), num_classes);
    for (col, mut line) in grid.cells_mut().columns_mut().into_iter().enumerate() {
        line.fill(band_class(col, band, num_classes));
    }
}

/// Tile the grid with `square_width` squares whose classes advance diagonally
///
/// Tile `(r, c)` gets class `(r + c) % num_classes`, so a tile size of one with
/// two classes yields a checkerboard. The auto size is derived from the width.
/// `num_classes` must be at least one.
pub fn diagonal_grid(grid: &mut LayoutGrid, num_classes: usize, square_width: usize) {
    let tile = effective_band_size(square_width, grid.width(), num_classes);
    for ((row, col), cell) in grid.cells_mut().indexed_iter_mut() {
        *cell = (((row / tile) + (col / tile)) % num_classes) as u32;
    }
}
