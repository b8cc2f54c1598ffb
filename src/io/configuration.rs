//! Layout constants and runtime configuration defaults

// Band size used when a stripe or grid layout is asked to auto-compute its size
/// Upper bound on auto-computed stripe and tile widths, in pixels
pub const DEFAULT_MAX_STRIPE_WIDTH: usize = 25;

/// Size parameter value requesting an auto-computed stripe, tile or blob size
pub const AUTO_SIZE: usize = 0;

/// Default layout width in pixels
pub const DEFAULT_WIDTH: usize = 500;
/// Default layout height in pixels
pub const DEFAULT_HEIGHT: usize = 500;

/// Default number of spectral classes
pub const DEFAULT_NUM_CLASSES: usize = 4;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Progress bar display settings
/// Layout count above which a progress bar is shown
pub const MIN_LAYOUTS_FOR_PROGRESS: usize = 2;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Output settings
/// Suffix inserted before the index of numbered output files
pub const OUTPUT_SUFFIX: &str = "_layout";
