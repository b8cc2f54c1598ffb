//! Layout generation engine
//!
//! This module contains the class map and everything that writes it:
//! - The width × height class index grid
//! - Periodic pattern generators (stripes and diagonal grid)
//! - Random region growth into contiguous blobs
//! - Grayscale image quantization
//! - The controller that owns the grid and replays the last generator on resize

/// Layout controller and generation record
pub mod controller;
/// Class index grid storage
pub mod grid;
/// Random blob partitioning by region growth
pub mod growth;
/// Deterministic periodic layouts
pub mod patterns;
/// Intensity binning of grayscale rasters
pub mod quantize;

pub use controller::{GenerationRecord, LayoutController, LayoutKind};
pub use grid::LayoutGrid;
pub use growth::SeedSampling;
