#[cfg(test)]
mod test {
    use crate::core::{BoundsOriginRoot, Cell, generate};
    use crate::test::test_util::seeded;

    #[test]
    fn generated_grid_has_requested_shape_and_only_terrain() {
        for (seed, (columns, rows, density)) in [(1, 1, 0.5), (10, 3, 0.0), (7, 12, 0.3), (40, 20, 0.9), (5, 5, 1.0)]
            .into_iter()
            .enumerate()
        {
            let grid = generate(columns, rows, density, &mut seeded(seed as u64));
            assert_eq!(grid.size(), BoundsOriginRoot::new(columns, rows));
            assert_eq!(grid.iter().count(), (columns * rows) as usize);
            assert!(grid.iter().all(|(_, c)| *c == Cell::Floor || *c == Cell::Wall));
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let first = generate(30, 10, 0.4, &mut seeded(42));
        let second = generate(30, 10, 0.4, &mut seeded(42));
        assert_eq!(first, second);
    }

    #[test]
    fn density_extremes_are_exact() {
        let open = generate(12, 6, 0.0, &mut seeded(3));
        assert!(open.iter().all(|(_, c)| *c == Cell::Floor));

        let solid = generate(12, 6, 1.0, &mut seeded(3));
        assert!(solid.iter().all(|(_, c)| *c == Cell::Wall));
    }

    #[test]
    fn density_roughly_controls_wall_share() {
        let grid = generate(100, 100, 0.3, &mut seeded(9));
        let walls = grid.iter().filter(|(_, c)| **c == Cell::Wall).count();
        assert!((2500..3500).contains(&walls), "got {} walls", walls);
    }
}
