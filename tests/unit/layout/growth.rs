//! Tests for random blob partitioning by region growth

#[cfg(test)]
mod tests {
    use hsi_layout::io::configuration::{AUTO_SIZE, DEFAULT_MAX_STRIPE_WIDTH};
    use hsi_layout::layout::grid::LayoutGrid;
    use hsi_layout::layout::growth::{SeedSampling, effective_blob_size, grow_regions};
    use rand::{SeedableRng, rngs::StdRng};

    // Enough classes that two touching blobs practically never share one, so
    // each same-class 4-connected component is exactly one blob
    const DISTINCT_CLASSES: usize = 1_000_000_000;

    // Sizes of the same-class 4-connected components of the grid
    fn component_sizes(grid: &LayoutGrid) -> Vec<usize> {
        let (width, height) = (grid.width(), grid.height());
        let mut seen = vec![false; width * height];
        let mut sizes = Vec::new();

        for start in 0..width * height {
            if seen.get(start).copied().unwrap_or(true) {
                continue;
            }
            let class_index = grid.get(start % width, start / width);
            let mut stack = vec![start];
            if let Some(flag) = seen.get_mut(start) {
                *flag = true;
            }
            let mut size = 0;
            while let Some(index) = stack.pop() {
                size += 1;
                let (x, y) = (index % width, index / width);
                let neighbors = [
                    (x > 0).then(|| index - 1),
                    (x + 1 < width).then(|| index + 1),
                    (y > 0).then(|| index - width),
                    (y + 1 < height).then(|| index + width),
                ];
                for neighbor in neighbors.into_iter().flatten() {
                    let same = grid.get(neighbor % width, neighbor / width) == class_index;
                    if let Some(flag) = seen.get_mut(neighbor) {
                        if same && !*flag {
                            *flag = true;
                            stack.push(neighbor);
                        }
                    }
                }
            }
            sizes.push(size);
        }
        sizes
    }

    // Tests every cell ends up in exactly one connected blob no larger than the target
    // Verified by growing from the seed cell instead of a frontier cell
    #[test]
    fn test_blobs_partition_grid_into_bounded_connected_regions() {
        for sampling in [SeedSampling::Uniform, SeedSampling::ForwardScan] {
            let mut grid = LayoutGrid::new(31, 17);
            let mut rng = StdRng::seed_from_u64(11);

            let blob_count = grow_regions(&mut grid, DISTINCT_CLASSES, 12, sampling, &mut rng);
            let sizes = component_sizes(&grid);

            assert_eq!(sizes.len(), blob_count, "{sampling:?}");
            assert_eq!(sizes.iter().sum::<usize>(), grid.len());
            assert!(sizes.iter().all(|&size| (1..=12).contains(&size)));
            assert!(grid.as_slice().iter().all(|&c| c != 0), "every cell written");
        }
    }

    // Tests class indices stay below the class count
    // Verified by drawing classes from an inclusive range
    #[test]
    fn test_blob_classes_in_range() {
        let mut grid = LayoutGrid::new(40, 40);
        let mut rng = StdRng::seed_from_u64(3);

        grow_regions(&mut grid, 3, 20, SeedSampling::Uniform, &mut rng);

        assert!(grid.as_slice().iter().all(|&c| c < 3));
        assert!(grid.class_histogram(3).iter().all(|&count| count > 0));
    }

    // Tests a target size of one yields one blob per pixel
    // Verified by starting the growth step counter at zero
    #[test]
    fn test_single_pixel_blobs() {
        let mut grid = LayoutGrid::new(9, 7);
        let mut rng = StdRng::seed_from_u64(5);

        let blob_count = grow_regions(&mut grid, 4, 1, SeedSampling::Uniform, &mut rng);

        assert_eq!(blob_count, 63);
    }

    // Tests a target covering the whole grid grows a single blob
    // Verified by stopping growth when a frontier cell saturates
    #[test]
    fn test_one_blob_fills_grid_when_target_covers_it() {
        for sampling in [SeedSampling::Uniform, SeedSampling::ForwardScan] {
            let mut grid = LayoutGrid::new(12, 10);
            let mut rng = StdRng::seed_from_u64(99);

            let blob_count = grow_regions(&mut grid, 5, 120, sampling, &mut rng);

            assert_eq!(blob_count, 1);
            let first = grid.as_slice().first().copied();
            assert!(grid.as_slice().iter().all(|&c| Some(c) == first));
        }
    }

    // Tests equal seeds reproduce a layout and different seeds do not
    // Verified by seeding the generator from entropy
    #[test]
    fn test_seeded_growth_is_reproducible() {
        let grow = |seed: u64| {
            let mut grid = LayoutGrid::new(50, 50);
            let mut rng = StdRng::seed_from_u64(seed);
            let count = grow_regions(&mut grid, 4, 30, SeedSampling::Uniform, &mut rng);
            (grid, count)
        };

        assert_eq!(grow(21), grow(21));
        assert_ne!(grow(21).0, grow(22).0);
    }

    // Tests auto blob size shares the grid among classes within bounds
    // Verified by removing the upper cap
    #[test]
    fn test_effective_blob_size() {
        assert_eq!(effective_blob_size(17, 100, 100, 4), 17);
        assert_eq!(effective_blob_size(AUTO_SIZE, 10, 10, 4), 25);
        assert_eq!(
            effective_blob_size(AUTO_SIZE, 500, 500, 4),
            DEFAULT_MAX_STRIPE_WIDTH * DEFAULT_MAX_STRIPE_WIDTH
        );
        assert_eq!(effective_blob_size(AUTO_SIZE, 2, 2, 8), 1);
    }

    // Tests a single-row grid still partitions fully
    // Verified by swapping the row and column neighbour bounds
    #[test]
    fn test_single_row_grid() {
        let mut grid = LayoutGrid::new(25, 1);
        let mut rng = StdRng::seed_from_u64(8);

        let blob_count = grow_regions(&mut grid, DISTINCT_CLASSES, 5, SeedSampling::ForwardScan, &mut rng);
        let sizes = component_sizes(&grid);

        assert_eq!(sizes.len(), blob_count);
        assert!(blob_count >= 5);
        assert!(sizes.iter().all(|&size| size <= 5));
    }
}
