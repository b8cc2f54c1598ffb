//! Spatial layout generation for synthetic hyperspectral image cubes
//!
//! A layout assigns every pixel of a `width × height` grid to one of a palette
//! of spectral classes. Layouts are produced procedurally (stripes, diagonal
//! grid tiling), by randomized region growth, or by quantizing a grayscale
//! source image, and are regenerated from their stored parameters whenever the
//! grid is resized.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Class map storage, layout generators and the controller that drives them
pub mod layout;

pub use io::error::{LayoutError, Result};
pub use layout::{LayoutController, LayoutGrid, LayoutKind};
