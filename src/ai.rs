//! Hunt/target move selection for the computer opponent.
//!
//! The opponent fires at uncorrelated random cells (hunt) until a shot
//! lands, then works along the row of the confirmed hit (target) until the
//! two-cell segment is finished, and drops back to hunting.

use std::collections::BTreeMap;

use log::trace;
use rand::Rng;

use crate::common::GameError;

/// Random picks attempted before falling back to a deterministic scan.
const HUNT_TRIES: usize = 100;

/// Anchor of the current target: the most recent hunt pick and how many
/// consecutive hits it has produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastHit {
    pub row: usize,
    pub col: usize,
    pub count: usize,
}

/// Per-game memory of the computer opponent. Created lazily on its first
/// turn and discarded with the session.
#[derive(Debug, Clone, Default)]
pub struct AiState {
    fired: BTreeMap<usize, Vec<usize>>,
    fired_count: usize,
    last: Option<LastHit>,
    target_locked: bool,
}

impl AiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the opponent has already fired at (row, col).
    pub fn has_fired(&self, row: usize, col: usize) -> bool {
        self.fired
            .get(&row)
            .is_some_and(|cols| cols.contains(&col))
    }

    /// Cells fired upon so far.
    pub fn fired_count(&self) -> usize {
        self.fired_count
    }

    /// True while the opponent is finishing a ship it has hit.
    pub fn target_locked(&self) -> bool {
        self.target_locked
    }

    /// The current hunt anchor, if any move has been made.
    pub fn last(&self) -> Option<LastHit> {
        self.last
    }

    /// Record that the opponent's latest shot landed. Called by the shot
    /// resolver, not by `next_move`: the first hit on a fresh target arms
    /// the lock, further hits bump the consecutive count.
    pub fn note_hit(&mut self) {
        if self.target_locked {
            if let Some(last) = self.last.as_mut() {
                last.count += 1;
            }
        } else {
            if let Some(last) = self.last.as_mut() {
                last.count = 1;
            }
            self.target_locked = true;
        }
    }

    /// Choose the next cell to fire at. Never returns a cell that was
    /// already fired upon; the chosen cell is recorded before returning.
    pub fn next_move<R: Rng>(
        &mut self,
        rng: &mut R,
        grid_size: usize,
    ) -> Result<(usize, usize), GameError> {
        let mut chosen = None;
        if self.target_locked {
            match self.last {
                Some(last) if last.count >= 2 => {
                    // segment finished, resume hunting
                    self.target_locked = false;
                }
                Some(last) => {
                    if last.col > 0 && !self.has_fired(last.row, last.col - 1) {
                        chosen = Some((last.row, last.col - 1));
                    } else if last.col + 1 < grid_size && !self.has_fired(last.row, last.col + 1) {
                        chosen = Some((last.row, last.col + 1));
                    } else {
                        // neither neighbour is open; hunt rather than stall
                        self.target_locked = false;
                    }
                }
                None => self.target_locked = false,
            }
        }

        let hunting = chosen.is_none();
        let (row, col) = match chosen {
            Some(cell) => cell,
            None => self.hunt(rng, grid_size)?,
        };

        self.record(row, col);
        if hunting {
            self.last = Some(LastHit { row, col, count: 0 });
        }
        trace!("opponent fires at ({row}, {col})");
        Ok((row, col))
    }

    /// Uniform random pick over unfired cells, with a scan fallback once
    /// the board is dense enough that rejection sampling stops paying off.
    fn hunt<R: Rng>(&self, rng: &mut R, grid_size: usize) -> Result<(usize, usize), GameError> {
        for _ in 0..HUNT_TRIES {
            let row = rng.random_range(0..grid_size);
            let col = rng.random_range(0..grid_size);
            if !self.has_fired(row, col) {
                return Ok((row, col));
            }
        }
        self.first_unfired(grid_size).ok_or(GameError::NoCellsLeft)
    }

    fn first_unfired(&self, grid_size: usize) -> Option<(usize, usize)> {
        for row in 0..grid_size {
            for col in 0..grid_size {
                if !self.has_fired(row, col) {
                    return Some((row, col));
                }
            }
        }
        None
    }

    fn record(&mut self, row: usize, col: usize) {
        self.fired.entry(row).or_default().push(col);
        self.fired_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn target_prefers_left_neighbour() {
        let mut state = AiState {
            fired: BTreeMap::from([(4, vec![4])]),
            fired_count: 1,
            last: Some(LastHit {
                row: 4,
                col: 4,
                count: 1,
            }),
            target_locked: true,
        };
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(state.next_move(&mut rng, 8).unwrap(), (4, 3));
        assert!(state.target_locked());
    }

    #[test]
    fn target_falls_back_to_right_neighbour() {
        let mut state = AiState {
            fired: BTreeMap::from([(4, vec![3, 4])]),
            fired_count: 2,
            last: Some(LastHit {
                row: 4,
                col: 4,
                count: 1,
            }),
            target_locked: true,
        };
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(state.next_move(&mut rng, 8).unwrap(), (4, 5));
    }

    #[test]
    fn anchor_at_left_edge_targets_right() {
        let mut state = AiState {
            fired: BTreeMap::from([(2, vec![0])]),
            fired_count: 1,
            last: Some(LastHit {
                row: 2,
                col: 0,
                count: 1,
            }),
            target_locked: true,
        };
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(state.next_move(&mut rng, 8).unwrap(), (2, 1));
    }

    #[test]
    fn exhausted_target_resumes_hunting() {
        let mut state = AiState {
            fired: BTreeMap::from([(4, vec![3, 4, 5])]),
            fired_count: 3,
            last: Some(LastHit {
                row: 4,
                col: 4,
                count: 1,
            }),
            target_locked: true,
        };
        let mut rng = SmallRng::seed_from_u64(7);
        let (row, col) = state.next_move(&mut rng, 8).unwrap();
        assert!(!(row == 4 && (3..=5).contains(&col)));
        assert!(!state.target_locked());
    }

    #[test]
    fn finished_segment_releases_lock() {
        let mut state = AiState {
            fired: BTreeMap::from([(4, vec![3, 4])]),
            fired_count: 2,
            last: Some(LastHit {
                row: 4,
                col: 4,
                count: 2,
            }),
            target_locked: true,
        };
        let mut rng = SmallRng::seed_from_u64(3);
        let (row, col) = state.next_move(&mut rng, 8).unwrap();
        assert!(!state.target_locked());
        // the hunt pick re-arms the anchor
        assert_eq!(
            state.last,
            Some(LastHit {
                row,
                col,
                count: 0
            })
        );
    }
}
