//! Random blob partitioning by region growth
//!
//! The grid is covered by growing one blob at a time: a blob starts from a
//! random unfilled seed cell with a random class and repeatedly claims an
//! unfilled 4-neighbour of a random frontier cell until it reaches the target
//! size or can no longer grow. New blobs are started until every cell is
//! filled, so the result is a partition of the grid into 4-connected blobs of
//! at most the target size.

use bitvec::prelude::*;
use rand::Rng;

use crate::io::configuration::{AUTO_SIZE, DEFAULT_MAX_STRIPE_WIDTH};
use crate::layout::grid::LayoutGrid;

/// Offsets `(row, col)` of the 4-neighbourhood: left, right, top, bottom
const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Strategy for choosing the first cell of each new blob
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeedSampling {
    /// Every unfilled cell is equally likely
    #[default]
    Uniform,
    /// Draw a start index below the unfilled count, then scan forward
    /// (wrapping) to the next unfilled cell
    ///
    /// Cells that follow long filled runs are favoured. Kept for parity with
    /// layouts produced by the original desktop generator.
    ForwardScan,
}

/// Resolve the target blob size
///
/// An explicit size is used as-is. `AUTO_SIZE` gives each class an even share
/// of the grid, capped at a square of `DEFAULT_MAX_STRIPE_WIDTH` and floored at
/// a single pixel.
pub fn effective_blob_size(
    size_parameter: usize,
    width: usize,
    height: usize,
    num_classes: usize,
) -> usize {
    if size_parameter != AUTO_SIZE {
        return size_parameter;
    }
    let share = (width * height) / num_classes.max(1);
    share.clamp(1, DEFAULT_MAX_STRIPE_WIDTH * DEFAULT_MAX_STRIPE_WIDTH)
}

/// Tracks which cells are filled and samples unfilled ones
///
/// `pool` holds every unfilled linear index and `slots` maps a linear index to
/// its position in `pool`, giving O(1) uniform sampling and removal.
struct FillState {
    filled: BitVec,
    pool: Vec<usize>,
    slots: Vec<usize>,
}

impl FillState {
    fn new(cell_count: usize) -> Self {
        Self {
            filled: bitvec![0; cell_count],
            pool: (0..cell_count).collect(),
            slots: (0..cell_count).collect(),
        }
    }

    const fn remaining(&self) -> usize {
        self.pool.len()
    }

    fn is_filled(&self, index: usize) -> bool {
        self.filled.get(index).as_deref() == Some(&true)
    }

    fn mark_filled(&mut self, index: usize) {
        if self.is_filled(index) {
            return;
        }
        self.filled.set(index, true);

        let Some(&slot) = self.slots.get(index) else {
            return;
        };
        self.pool.swap_remove(slot);
        // The former last entry now lives at `slot`
        if let Some(&moved) = self.pool.get(slot) {
            if let Some(moved_slot) = self.slots.get_mut(moved) {
                *moved_slot = slot;
            }
        }
    }

    fn pick_seed<R: Rng + ?Sized>(&self, sampling: SeedSampling, rng: &mut R) -> Option<usize> {
        let remaining = self.remaining();
        if remaining == 0 {
            return None;
        }
        match sampling {
            SeedSampling::Uniform => self.pool.get(rng.random_range(0..remaining)).copied(),
            SeedSampling::ForwardScan => {
                let cell_count = self.filled.len();
                let start = rng.random_range(0..remaining);
                (0..cell_count)
                    .map(|step| (start + step) % cell_count)
                    .find(|&index| !self.is_filled(index))
            }
        }
    }
}

/// Collect the in-bounds unfilled 4-neighbours of `index` into `candidates`
fn open_neighbors(
    index: usize,
    width: usize,
    height: usize,
    cells: &FillState,
    candidates: &mut Vec<usize>,
) {
    candidates.clear();
    let row = index / width;
    let col = index % width;
    for (row_offset, col_offset) in NEIGHBOR_OFFSETS {
        let Some(neighbor_row) = row.checked_add_signed(row_offset) else {
            continue;
        };
        let Some(neighbor_col) = col.checked_add_signed(col_offset) else {
            continue;
        };
        if neighbor_row >= height || neighbor_col >= width {
            continue;
        }
        let neighbor = neighbor_row * width + neighbor_col;
        if !cells.is_filled(neighbor) {
            candidates.push(neighbor);
        }
    }
}

/// Partition the grid into randomly classed blobs of at most `blob_size` cells
///
/// Every cell is written exactly once. Returns the number of blobs grown.
/// `num_classes` must be at least one.
pub fn grow_regions<R: Rng + ?Sized>(
    grid: &mut LayoutGrid,
    num_classes: usize,
    blob_size: usize,
    sampling: SeedSampling,
    rng: &mut R,
) -> usize {
    let width = grid.width();
    let height = grid.height();
    let target = effective_blob_size(blob_size, width, height, num_classes);

    let mut cells = FillState::new(grid.len());
    let mut frontier: Vec<usize> = Vec::new();
    let mut candidates: Vec<usize> = Vec::with_capacity(NEIGHBOR_OFFSETS.len());
    let mut blob_count = 0;

    while cells.remaining() > 0 {
        let class_index = rng.random_range(0..num_classes) as u32;
        let Some(seed) = cells.pick_seed(sampling, rng) else {
            break;
        };

        grid.set_linear(seed, class_index);
        cells.mark_filled(seed);
        frontier.clear();
        frontier.push(seed);
        blob_count += 1;

        let mut blob_cells = 1;
        while blob_cells < target && cells.remaining() > 0 && !frontier.is_empty() {
            let edge_slot = rng.random_range(0..frontier.len());
            let Some(&edge) = frontier.get(edge_slot) else {
                break;
            };

            open_neighbors(edge, width, height, &cells, &mut candidates);
            if candidates.is_empty() {
                // Saturated edge; pruning it does not count as a growth step
                frontier.swap_remove(edge_slot);
                continue;
            }

            let Some(&next) = candidates.get(rng.random_range(0..candidates.len())) else {
                break;
            };
            grid.set_linear(next, class_index);
            cells.mark_filled(next);
            frontier.push(next);
            blob_cells += 1;
        }
    }

    blob_count
}
