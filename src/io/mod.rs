/// Plain-text class map output
pub mod class_map;
/// Command-line interface and batch processing
pub mod cli;
/// Generation constants and runtime defaults
pub mod configuration;
/// Error types for layout operations
pub mod error;
/// Tracing subscriber setup for the binary
pub mod logging;
/// Progress display for multi-layout runs
pub mod progress;
/// Layout source image loading and grayscale conversion
pub mod raster;
