use gridfire::{GameConfig, GameError, PlacementSet};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_config_validation() {
    assert_eq!(
        GameConfig::new(2, 1).unwrap_err(),
        GameError::InvalidGridSize(2)
    );
    assert_eq!(
        GameConfig::new(11, 1).unwrap_err(),
        GameError::InvalidGridSize(11)
    );
    assert_eq!(
        GameConfig::new(5, 0).unwrap_err(),
        GameError::InvalidShipCount {
            requested: 0,
            grid_size: 5
        }
    );
    // ship count is capped at grid_size - 1
    assert_eq!(
        GameConfig::new(5, 5).unwrap_err(),
        GameError::InvalidShipCount {
            requested: 5,
            grid_size: 5
        }
    );
    // and at 9 overall
    assert!(GameConfig::new(10, 10).is_err());
    assert!(GameConfig::new(10, 9).is_ok());
    assert!(GameConfig::new(3, 2).is_ok());
}

#[test]
fn test_random_places_exact_ship_count() {
    let mut rng = SmallRng::seed_from_u64(42);
    for (grid_size, num_ships) in [(3, 2), (5, 3), (8, 5), (10, 7)] {
        let config = GameConfig::new(grid_size, num_ships).unwrap();
        let placements = PlacementSet::random(&mut rng, config).unwrap();
        assert_eq!(placements.ship_count(), num_ships);
    }
}

#[test]
fn test_random_ships_fit_the_grid() {
    let mut rng = SmallRng::seed_from_u64(7);
    let config = GameConfig::new(6, 4).unwrap();
    let placements = PlacementSet::random(&mut rng, config).unwrap();
    for (row, cols) in placements.rows() {
        assert!(row < 6);
        for &col in cols {
            assert!(col <= 4, "segment at ({row}, {col}) would hang off the grid");
        }
    }
}

#[test]
fn test_covers_both_segment_cells() {
    let config = GameConfig::new(4, 1).unwrap();
    let placements = PlacementSet::from_ships(&[(1, 1)], config).unwrap();
    assert!(placements.covers(1, 1));
    assert!(placements.covers(1, 2));
    assert!(!placements.covers(1, 0));
    assert!(!placements.covers(1, 3));
    assert!(!placements.covers(0, 1));
}

#[test]
fn test_manual_placement_accepts_touching_ships() {
    let config = GameConfig::new(5, 2).unwrap();
    // segments at cols 0-1 and 2-3 touch but do not overlap
    let placements = PlacementSet::from_ships(&[(0, 0), (0, 2)], config).unwrap();
    assert_eq!(placements.row(0), Some(&[0, 2][..]));
}

#[test]
fn test_manual_placement_rejects_overlap() {
    let config = GameConfig::new(5, 2).unwrap();
    assert_eq!(
        PlacementSet::from_ships(&[(0, 1), (0, 2)], config).unwrap_err(),
        GameError::OverlappingShips { row: 0, col: 2 }
    );
    assert_eq!(
        PlacementSet::from_ships(&[(0, 1), (0, 1)], config).unwrap_err(),
        GameError::OverlappingShips { row: 0, col: 1 }
    );
}

#[test]
fn test_manual_placement_rejects_out_of_bounds() {
    let config = GameConfig::new(5, 1).unwrap();
    // a segment starting on the last column cannot fit
    assert_eq!(
        PlacementSet::from_ships(&[(0, 4)], config).unwrap_err(),
        GameError::OutOfBounds { row: 0, col: 4 }
    );
    assert_eq!(
        PlacementSet::from_ships(&[(5, 0)], config).unwrap_err(),
        GameError::OutOfBounds { row: 5, col: 0 }
    );
}
