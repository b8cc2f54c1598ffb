//! Class index grid backing every layout
//!
//! The grid stores one class index per pixel in a row-major `(height, width)`
//! array, so the contiguous slice of the array is the linear class map with
//! index `row * width + col`.

use ndarray::Array2;

/// Per-pixel class assignment for a `width × height` image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutGrid {
    /// Class indices indexed by `[row, col]`
    class_map: Array2<u32>,
}

impl LayoutGrid {
    /// Create a grid with every pixel assigned to class 0
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            class_map: Array2::zeros((height, width)),
        }
    }

    /// Grid width in pixels (number of columns)
    pub fn width(&self) -> usize {
        self.class_map.ncols()
    }

    /// Grid height in pixels (number of rows)
    pub fn height(&self) -> usize {
        self.class_map.nrows()
    }

    /// Total number of pixels
    pub fn len(&self) -> usize {
        self.class_map.len()
    }

    /// True when the grid holds no pixels
    pub fn is_empty(&self) -> bool {
        self.class_map.is_empty()
    }

    /// Class at column `x`, row `y`
    ///
    /// Returns `None` for coordinates outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        self.class_map.get([y, x]).copied()
    }

    /// Assign a class to the pixel at linear index `row * width + col`
    ///
    /// Out-of-range indices are ignored.
    pub(crate) fn set_linear(&mut self, index: usize, class_index: u32) {
        let width = self.width();
        if width == 0 {
            return;
        }
        if let Some(cell) = self.class_map.get_mut([index / width, index % width]) {
            *cell = class_index;
        }
    }

    /// Mutable row-major view used by the generators
    pub(crate) const fn cells_mut(&mut self) -> &mut Array2<u32> {
        &mut self.class_map
    }

    /// Row-major view of the class map
    pub const fn cells(&self) -> &Array2<u32> {
        &self.class_map
    }

    /// Linear class map, index `row * width + col`
    pub fn as_slice(&self) -> &[u32] {
        // Array2::zeros always produces a standard-layout array
        self.class_map.as_slice().unwrap_or(&[])
    }

    /// Assign every pixel to class 0
    pub fn reset(&mut self) {
        self.class_map.fill(0);
    }

    /// Reallocate to new dimensions
    ///
    /// Existing content is discarded; every pixel of the resized grid is class 0.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.class_map = Array2::zeros((height, width));
    }

    /// Count pixels per class
    ///
    /// Entry `i` holds the number of pixels assigned to class `i`. Pixels whose
    /// class lies outside `[0, num_classes)` are not counted.
    pub fn class_histogram(&self, num_classes: usize) -> Vec<usize> {
        let mut counts = vec![0; num_classes];
        for &class_index in &self.class_map {
            if let Some(count) = counts.get_mut(class_index as usize) {
                *count += 1;
            }
        }
        counts
    }
}
