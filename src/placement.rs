//! Ship layouts and the random layout generator.

use std::collections::BTreeMap;

use log::debug;
use rand::Rng;

use crate::common::GameError;
use crate::config::{GameConfig, SHIP_LEN};

/// Full-board passes attempted before giving up on a configuration.
const RETRY_CAP: usize = 1_000;
/// Random column picks attempted per row within one pass.
const COLUMN_TRIES: usize = 20;
/// Minimum spacing between starting columns on the same row.
const ROW_BUFFER: usize = 2;
/// Minimum spacing between starting columns on vertically adjacent rows.
const ADJACENT_BUFFER: usize = 1;

/// One side's ship layout: starting columns keyed by row. Each entry marks a
/// horizontal segment covering (row, col) and (row, col + 1). Rows without
/// ships are absent from the map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementSet {
    by_row: BTreeMap<usize, Vec<usize>>,
}

impl PlacementSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a random layout satisfying the placement buffers: starting
    /// columns on the same row stay more than two apart, columns on adjacent
    /// rows more than one apart, and every segment fits on the grid.
    ///
    /// Each pass walks the rows once, skipping rows while a random skip
    /// budget remains and otherwise trying up to twenty random columns; a
    /// pass that does not place exactly the configured ship count is
    /// discarded wholesale. Passes are capped so an unlucky or overfull
    /// configuration fails with `PlacementInfeasible` instead of spinning.
    pub fn random<R: Rng>(rng: &mut R, config: GameConfig) -> Result<Self, GameError> {
        let grid_size = config.grid_size();
        let num_ships = config.num_ships();

        let mut max_per_row = grid_size / 3;
        if grid_size % 3 == 2 {
            max_per_row += 1;
        }

        for pass in 0..RETRY_CAP {
            let mut placements = PlacementSet::new();
            let mut placed = 0;
            let ships_per_row = rng.random_range(1..=max_per_row);
            let half = grid_size / 2;
            let mut skip_budget = half + rng.random_range(0..=half);

            for row in 0..grid_size {
                if placed == num_ships {
                    break;
                }
                if skip_budget > 0 && rng.random_bool(0.75) {
                    skip_budget -= 1;
                    continue;
                }

                let mut placed_in_row = 0;
                for _ in 0..COLUMN_TRIES {
                    if placed == num_ships || placed_in_row == ships_per_row {
                        break;
                    }
                    let col = rng.random_range(0..grid_size - 1);
                    if placements.conflicts(row, col) {
                        continue;
                    }
                    placements.insert(row, col);
                    placed_in_row += 1;
                    placed += 1;
                }
            }

            if placed == num_ships {
                if pass > 0 {
                    debug!("placed {num_ships} ships after {} passes", pass + 1);
                }
                return Ok(placements);
            }
        }

        Err(GameError::PlacementInfeasible {
            grid_size,
            num_ships,
            attempts: RETRY_CAP,
        })
    }

    /// Build a layout from manually positioned ships. Ships must fit on the
    /// grid and must not overlap; touching is allowed, matching what the
    /// drag-and-drop flow accepts.
    pub fn from_ships(ships: &[(usize, usize)], config: GameConfig) -> Result<Self, GameError> {
        let grid_size = config.grid_size();
        let mut placements = PlacementSet::new();
        for &(row, col) in ships {
            if row >= grid_size || col + SHIP_LEN > grid_size {
                return Err(GameError::OutOfBounds { row, col });
            }
            let overlap = placements
                .row(row)
                .is_some_and(|cols| cols.iter().any(|&c| c.abs_diff(col) < SHIP_LEN));
            if overlap {
                return Err(GameError::OverlappingShips { row, col });
            }
            placements.insert(row, col);
        }
        Ok(placements)
    }

    /// Starting columns on `row`, or `None` if the row holds no ships.
    pub fn row(&self, row: usize) -> Option<&[usize]> {
        self.by_row.get(&row).map(Vec::as_slice)
    }

    /// Iterate rows and their starting columns in row order.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.by_row.iter().map(|(&row, cols)| (row, cols.as_slice()))
    }

    /// Number of ships in the layout.
    pub fn ship_count(&self) -> usize {
        self.by_row.values().map(Vec::len).sum()
    }

    /// True if a ship segment occupies (row, col). A segment starting at
    /// `c` covers both `c` and `c + 1`.
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row(row)
            .is_some_and(|cols| cols.iter().any(|&c| c == col || c + 1 == col))
    }

    /// Starting column of the segment covering or touching (row, col).
    pub fn segment_near(&self, row: usize, col: usize) -> Option<usize> {
        self.row(row)?
            .iter()
            .copied()
            .find(|&c| c == col || c + 1 == col || c == col + 1)
    }

    fn insert(&mut self, row: usize, col: usize) {
        let cols = self.by_row.entry(row).or_default();
        let at = cols.partition_point(|&c| c < col);
        cols.insert(at, col);
    }

    /// True if a ship starting at (row, col) would violate a buffer.
    fn conflicts(&self, row: usize, col: usize) -> bool {
        if let Some(cols) = self.row(row) {
            if cols.iter().any(|&c| c.abs_diff(col) <= ROW_BUFFER) {
                return true;
            }
        }
        for adjacent in [row.checked_sub(1), Some(row + 1)].into_iter().flatten() {
            if let Some(cols) = self.row(adjacent) {
                if cols.iter().any(|&c| c.abs_diff(col) <= ADJACENT_BUFFER) {
                    return true;
                }
            }
        }
        false
    }
}
