//! Plain-text class map output
//!
//! One line per grid row, class indices separated by single spaces.

use crate::io::error::{LayoutError, Result};
use crate::layout::grid::LayoutGrid;
use std::fmt::Write as _;
use std::path::Path;

/// Render the class map as text rows
pub fn format_class_map(grid: &LayoutGrid) -> String {
    let mut text = String::with_capacity(grid.len() * 2);
    for row in grid.cells().rows() {
        let mut first = true;
        for class_index in row {
            if !first {
                text.push(' ');
            }
            first = false;
            let _ = write!(text, "{class_index}");
        }
        text.push('\n');
    }
    text
}

/// Write the class map as text rows, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written
pub fn write_class_map(grid: &LayoutGrid, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| LayoutError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    std::fs::write(path, format_class_map(grid)).map_err(|e| LayoutError::FileSystem {
        path: path.to_path_buf(),
        operation: "write class map",
        source: e,
    })
}
