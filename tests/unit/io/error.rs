//! Tests for error display and precondition checks

#[cfg(test)]
mod tests {
    use hsi_layout::LayoutError;
    use hsi_layout::io::configuration::MAX_GRID_DIMENSION;
    use hsi_layout::io::error::{invalid_parameter, require_classes, require_dimensions};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests parameter errors name the parameter, value and reason
    // Verified by dropping the value from the message
    #[test]
    fn test_invalid_parameter_display() {
        let err = invalid_parameter("num_classes", &0, &"at least one class is required");

        assert_eq!(
            err.to_string(),
            "Invalid parameter 'num_classes' = '0': at least one class is required"
        );
        assert!(err.source().is_none());
    }

    // Tests raster mismatch reports both sizes as width x height
    // Verified by swapping expected and actual
    #[test]
    fn test_raster_mismatch_display() {
        let err = LayoutError::RasterSizeMismatch {
            expected: (10, 20),
            actual: (3, 4),
        };

        assert_eq!(
            err.to_string(),
            "Raster is 3x4 but the layout grid is 10x20"
        );
    }

    // Tests I/O errors convert and keep their source
    // Verified by returning None from source for file system errors
    #[test]
    fn test_io_error_conversion_keeps_source() {
        let err: LayoutError = std::io::Error::other("disk full").into();

        assert!(matches!(err, LayoutError::FileSystem { .. }));
        assert!(err.source().is_some());

        let err = LayoutError::FileSystem {
            path: PathBuf::from("out/layout.txt"),
            operation: "write class map",
            source: std::io::Error::other("denied"),
        };
        assert!(err.to_string().contains("out/layout.txt"));
    }

    // Tests a class count of zero is rejected
    // Verified by accepting zero
    #[test]
    fn test_require_classes() {
        assert!(require_classes(1).is_ok());
        assert!(matches!(
            require_classes(0),
            Err(LayoutError::InvalidParameter {
                parameter: "num_classes",
                ..
            })
        ));
    }

    // Tests zero and oversized dimensions are rejected
    // Verified by checking only the width
    #[test]
    fn test_require_dimensions() {
        assert!(require_dimensions(1, 1).is_ok());
        assert!(require_dimensions(MAX_GRID_DIMENSION, MAX_GRID_DIMENSION).is_ok());
        assert!(require_dimensions(3, 0).is_err());
        assert!(matches!(
            require_dimensions(MAX_GRID_DIMENSION + 1, 3),
            Err(LayoutError::InvalidParameter {
                parameter: "width",
                ..
            })
        ));
    }
}
