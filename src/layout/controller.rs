//! Layout controller owning the class map and its generation history
//!
//! The controller is the single entry point for layout generation. It
//! dispatches each request to one generator, remembers the layout kind and
//! parameters of the last procedural or random generation, and replays that
//! generation whenever the grid is resized.

use image::GrayImage;
use rand::{SeedableRng, rngs::StdRng};

use crate::io::error::{Result, require_classes, require_dimensions};
use crate::layout::grid::LayoutGrid;
use crate::layout::growth::{SeedSampling, grow_regions};
use crate::layout::patterns::{diagonal_grid, horizontal_stripes, vertical_stripes};
use crate::layout::quantize::quantize_raster;

/// Generator that last produced a replayable layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LayoutKind {
    /// Nothing has been generated yet
    #[default]
    None,
    /// Full-width bands stacked top to bottom
    HorizontalStripes,
    /// Full-height bands side by side
    VerticalStripes,
    /// Square tiles with diagonally advancing classes
    Grid,
    /// Region-grown blobs
    Random,
}

/// Parameters of the last replayable generation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationRecord {
    /// Generator used
    pub kind: LayoutKind,
    /// Number of classes requested
    pub num_classes: usize,
    /// Stripe width, square width or target blob size (`AUTO_SIZE` for auto)
    pub size_parameter: usize,
}

/// Owns the class map and drives every layout generator
///
/// Mutation requires `&mut self`, so readers can never observe a grid that a
/// generator is still writing.
pub struct LayoutController {
    grid: LayoutGrid,
    record: GenerationRecord,
    rng: StdRng,
    seed_sampling: SeedSampling,
    blob_count: Option<usize>,
}

impl LayoutController {
    /// Create a controller with a blank `width × height` grid
    ///
    /// `seed` initializes the random source used by random layouts, so equal
    /// seeds and call sequences produce identical layouts.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is zero or too large
    pub fn new(width: usize, height: usize, seed: u64) -> Result<Self> {
        require_dimensions(width, height)?;
        Ok(Self {
            grid: LayoutGrid::new(width, height),
            record: GenerationRecord::default(),
            rng: StdRng::seed_from_u64(seed),
            seed_sampling: SeedSampling::default(),
            blob_count: None,
        })
    }

    /// Select how random layouts choose the first cell of each blob
    #[must_use]
    pub const fn with_seed_sampling(mut self, seed_sampling: SeedSampling) -> Self {
        self.seed_sampling = seed_sampling;
        self
    }

    /// Grid width in pixels
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Grid height in pixels
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Read-only view of the class map
    pub const fn grid(&self) -> &LayoutGrid {
        &self.grid
    }

    /// Linear class map, index `row * width + col`
    pub fn class_map(&self) -> &[u32] {
        self.grid.as_slice()
    }

    /// Kind and parameters that `resize` will replay
    pub const fn record(&self) -> GenerationRecord {
        self.record
    }

    /// Blobs in the current grid, if it was produced by region growth
    pub const fn blob_count(&self) -> Option<usize> {
        self.blob_count
    }

    /// Class at column `x`, row `y`
    ///
    /// Returns `None` for coordinates outside the grid.
    pub fn class_at(&self, x: usize, y: usize) -> Option<u32> {
        self.grid.get(x, y)
    }

    /// Generate horizontal stripes `stripe_width` rows tall
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `num_classes` is zero
    pub fn generate_horizontal_stripes(
        &mut self,
        num_classes: usize,
        stripe_width: usize,
    ) -> Result<()> {
        require_classes(num_classes)?;
        horizontal_stripes(&mut self.grid, num_classes, stripe_width);
        self.remember(LayoutKind::HorizontalStripes, num_classes, stripe_width);
        Ok(())
    }

    /// Generate vertical stripes `stripe_width` columns wide
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `num_classes` is zero
    pub fn generate_vertical_stripes(
        &mut self,
        num_classes: usize,
        stripe_width: usize,
    ) -> Result<()> {
        require_classes(num_classes)?;
        vertical_stripes(&mut self.grid, num_classes, stripe_width);
        self.remember(LayoutKind::VerticalStripes, num_classes, stripe_width);
        Ok(())
    }

    /// Generate a diagonal grid of `square_width` tiles
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `num_classes` is zero
    pub fn generate_grid(&mut self, num_classes: usize, square_width: usize) -> Result<()> {
        require_classes(num_classes)?;
        diagonal_grid(&mut self.grid, num_classes, square_width);
        self.remember(LayoutKind::Grid, num_classes, square_width);
        Ok(())
    }

    /// Generate region-grown blobs of at most `blob_size` pixels
    ///
    /// Returns the number of blobs grown.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `num_classes` is zero
    pub fn generate_random(&mut self, num_classes: usize, blob_size: usize) -> Result<usize> {
        require_classes(num_classes)?;
        let blob_count = grow_regions(
            &mut self.grid,
            num_classes,
            blob_size,
            self.seed_sampling,
            &mut self.rng,
        );
        tracing::debug!(blob_count, "grew random layout");
        self.remember(LayoutKind::Random, num_classes, blob_size);
        self.blob_count = Some(blob_count);
        Ok(blob_count)
    }

    /// Generate a layout by binning the intensities of a grayscale raster
    ///
    /// The raster must match the grid dimensions. The generation record is
    /// left untouched, so a later resize replays the previously recorded
    /// layout (or leaves a blank grid if there is none).
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `num_classes` is zero and
    /// `RasterSizeMismatch` if the raster size differs from the grid size
    pub fn generate_from_image(&mut self, num_classes: usize, raster: &GrayImage) -> Result<()> {
        require_classes(num_classes)?;
        quantize_raster(&mut self.grid, num_classes, raster)?;
        self.blob_count = None;
        tracing::debug!(num_classes, "quantized layout image");
        Ok(())
    }

    /// Assign every pixel to class 0, keeping the generation record
    pub fn reset(&mut self) {
        self.grid.reset();
        self.blob_count = None;
    }

    /// Reallocate the grid and replay the recorded generation at the new size
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is zero or too large
    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        require_dimensions(width, height)?;
        self.grid.resize(width, height);
        self.blob_count = None;

        let GenerationRecord {
            kind,
            num_classes,
            size_parameter,
        } = self.record;
        if kind == LayoutKind::None {
            tracing::warn!(width, height, "resized with no recorded layout, grid left blank");
            return Ok(());
        }
        self.generate(kind, num_classes, size_parameter)
    }

    /// Run the generator for `kind`, replacing the class map
    ///
    /// `LayoutKind::None` resets the grid to class 0 and keeps the record.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `num_classes` is zero
    pub fn generate(&mut self, kind: LayoutKind, num_classes: usize, size: usize) -> Result<()> {
        match kind {
            LayoutKind::HorizontalStripes => self.generate_horizontal_stripes(num_classes, size),
            LayoutKind::VerticalStripes => self.generate_vertical_stripes(num_classes, size),
            LayoutKind::Grid => self.generate_grid(num_classes, size),
            LayoutKind::Random => self.generate_random(num_classes, size).map(drop),
            LayoutKind::None => {
                self.reset();
                Ok(())
            }
        }
    }

    fn remember(&mut self, kind: LayoutKind, num_classes: usize, size_parameter: usize) {
        self.blob_count = None;
        self.record = GenerationRecord {
            kind,
            num_classes,
            size_parameter,
        };
        tracing::debug!(
            ?kind,
            num_classes,
            size_parameter,
            width = self.grid.width(),
            height = self.grid.height(),
            "generated layout"
        );
    }
}
