use gridfire::{GameConfig, PlacementSet};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn config_strategy() -> impl Strategy<Value = (usize, usize)> {
    (3..=10usize).prop_flat_map(|grid| (Just(grid), 1..=9usize.min(grid - 1)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_layouts_satisfy_invariants(seed in any::<u64>(), (grid_size, num_ships) in config_strategy()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let config = GameConfig::new(grid_size, num_ships).unwrap();
        let placements = PlacementSet::random(&mut rng, config).unwrap();

        prop_assert_eq!(placements.ship_count(), num_ships);

        for (row, cols) in placements.rows() {
            prop_assert!(row < grid_size);
            for (i, &col) in cols.iter().enumerate() {
                // every segment fits on the board
                prop_assert!(col + 2 <= grid_size);
                // same-row starts stay more than two columns apart
                for &other in &cols[i + 1..] {
                    prop_assert!(other.abs_diff(col) > 2,
                        "row {} holds starts {} and {}", row, col, other);
                }
                // adjacent-row starts stay more than one column apart
                if let Some(below) = placements.row(row + 1) {
                    for &other in below {
                        prop_assert!(other.abs_diff(col) > 1,
                            "rows {} and {} hold starts {} and {}", row, row + 1, col, other);
                    }
                }
            }
        }
    }
}
