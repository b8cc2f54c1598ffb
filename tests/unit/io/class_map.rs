//! Tests for plain-text class map output

#[cfg(test)]
mod tests {
    use hsi_layout::io::class_map::{format_class_map, write_class_map};
    use hsi_layout::layout::grid::LayoutGrid;
    use hsi_layout::layout::patterns::diagonal_grid;

    // Tests rows are newline-terminated and values space-separated
    // Verified by emitting columns instead of rows
    #[test]
    fn test_format_class_map_rows() {
        let mut grid = LayoutGrid::new(3, 2);
        diagonal_grid(&mut grid, 3, 1);

        assert_eq!(format_class_map(&grid), "0 1 2\n1 2 0\n");
    }

    // Tests the written file parses back to the grid values
    // Verified by writing the transposed grid
    #[test]
    fn test_write_class_map_creates_parent_directories() {
        let Ok(dir) = tempfile::tempdir() else {
            return;
        };
        let path = dir.path().join("nested").join("layout.txt");
        let mut grid = LayoutGrid::new(4, 3);
        diagonal_grid(&mut grid, 2, 1);

        assert!(write_class_map(&grid, &path).is_ok());

        let text = std::fs::read_to_string(&path).unwrap_or_default();
        let values: Vec<u32> = text
            .split_whitespace()
            .filter_map(|token| token.parse().ok())
            .collect();
        assert_eq!(values, grid.as_slice());
        assert_eq!(text.lines().count(), 3);
    }
}
