//! Error types for layout generation and layout I/O

use std::fmt;
use std::path::PathBuf;

/// Main error type for all layout operations
#[derive(Debug)]
pub enum LayoutError {
    /// A caller-supplied parameter violates a generation precondition
    ///
    /// Raised for a class count of zero and for zero grid dimensions. These
    /// are programming errors on the caller's side and are never recovered
    /// from internally.
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Raster handed to the quantizer does not match the grid size
    RasterSizeMismatch {
        /// Grid dimensions (width, height)
        expected: (usize, usize),
        /// Raster dimensions (width, height)
        actual: (usize, usize),
    },

    /// Failed to load a layout source image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::RasterSizeMismatch { expected, actual } => {
                write!(
                    f,
                    "Raster is {}x{} but the layout grid is {}x{}",
                    actual.0, actual.1, expected.0, expected.1
                )
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for layout results
pub type Result<T> = std::result::Result<T, LayoutError>;

impl From<image::ImageError> for LayoutError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for LayoutError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> LayoutError {
    LayoutError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Reject a class count of zero
///
/// # Errors
///
/// Returns `InvalidParameter` when `num_classes` is zero
pub fn require_classes(num_classes: usize) -> Result<()> {
    if num_classes == 0 {
        return Err(invalid_parameter(
            "num_classes",
            &num_classes,
            &"at least one class is required",
        ));
    }
    Ok(())
}

/// Reject zero or oversized grid dimensions
///
/// # Errors
///
/// Returns `InvalidParameter` when either dimension is zero or exceeds
/// `MAX_GRID_DIMENSION`
pub fn require_dimensions(width: usize, height: usize) -> Result<()> {
    use crate::io::configuration::MAX_GRID_DIMENSION;

    for (parameter, value) in [("width", width), ("height", height)] {
        if value == 0 {
            return Err(invalid_parameter(
                parameter,
                &value,
                &"grid dimensions must be positive",
            ));
        }
        if value > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                parameter,
                &value,
                &format!("grid dimensions are limited to {MAX_GRID_DIMENSION}"),
            ));
        }
    }
    Ok(())
}
