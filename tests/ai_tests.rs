use std::collections::HashSet;

use gridfire::{AiState, GameError};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_never_repeats_and_exhausts_the_grid() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut state = AiState::new();
    let mut seen = HashSet::new();

    for i in 0..9 {
        let (row, col) = state.next_move(&mut rng, 3).unwrap();
        assert!(row < 3 && col < 3);
        assert!(seen.insert((row, col)), "({row}, {col}) fired twice");
        // lock onto a target partway through; uniqueness must survive
        if i == 3 {
            state.note_hit();
        }
    }
    assert_eq!(state.fired_count(), 9);
    assert_eq!(
        state.next_move(&mut rng, 3).unwrap_err(),
        GameError::NoCellsLeft
    );
}

#[test]
fn test_hit_locks_target_and_fires_adjacent() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut state = AiState::new();

    let (row, col) = state.next_move(&mut rng, 8).unwrap();
    assert!(!state.target_locked());
    state.note_hit();
    assert!(state.target_locked());
    assert_eq!(state.last().unwrap().count, 1);

    let (row2, col2) = state.next_move(&mut rng, 8).unwrap();
    assert_eq!(row2, row);
    if col > 0 {
        assert_eq!(col2, col - 1, "left neighbour is preferred");
    } else {
        assert_eq!(col2, col + 1);
    }
}

#[test]
fn test_second_hit_releases_the_lock() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut state = AiState::new();

    let first = state.next_move(&mut rng, 8).unwrap();
    state.note_hit();
    let second = state.next_move(&mut rng, 8).unwrap();
    state.note_hit();
    assert!(state.target_locked());

    // segment finished: the next call hunts again
    let third = state.next_move(&mut rng, 8).unwrap();
    assert!(!state.target_locked());
    assert_ne!(third, first);
    assert_ne!(third, second);
}

#[test]
fn test_moves_stay_unique_across_target_phases() {
    let mut rng = SmallRng::seed_from_u64(99);
    let mut state = AiState::new();
    let mut seen = HashSet::new();

    for i in 0..25 {
        let cell = state.next_move(&mut rng, 5).unwrap();
        assert!(seen.insert(cell), "{cell:?} fired twice");
        // alternate hits and misses to churn through both modes
        if i % 3 == 0 {
            state.note_hit();
        }
    }
    assert_eq!(
        state.next_move(&mut rng, 5).unwrap_err(),
        GameError::NoCellsLeft
    );
}
