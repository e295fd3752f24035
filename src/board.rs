//! One side's board: ship layout, hit log and shot resolution.

use std::collections::{BTreeMap, BTreeSet};

use crate::common::{GameError, ShotOutcome};
use crate::config::GameConfig;
use crate::placement::PlacementSet;

/// Hits taken by one layout: the running total and the hit columns per row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitLog {
    count: usize,
    by_row: BTreeMap<usize, Vec<usize>>,
}

impl HitLog {
    /// Total hits recorded.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Columns hit on `row`, or `None` if the row is untouched.
    pub fn row(&self, row: usize) -> Option<&[usize]> {
        self.by_row.get(&row).map(Vec::as_slice)
    }

    fn record(&mut self, row: usize, col: usize) {
        self.count += 1;
        self.by_row.entry(row).or_default().push(col);
    }
}

/// Outcome of a single resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    pub outcome: ShotOutcome,
    /// True when this shot sank the last remaining segment cell.
    pub win: bool,
    /// (row, starting column) of a segment with two adjacent known hits.
    /// Presentation data only: the view layer uses it to show the sprite.
    pub revealed: Option<(usize, usize)>,
}

/// A placement set under fire: tracks every shot taken against it.
#[derive(Debug, Clone)]
pub struct Board {
    config: GameConfig,
    placements: PlacementSet,
    hits: HitLog,
    fired: BTreeSet<(usize, usize)>,
}

impl Board {
    /// Wrap a finished layout for play, with an empty hit log.
    pub fn new(placements: PlacementSet, config: GameConfig) -> Self {
        Self {
            config,
            placements,
            hits: HitLog::default(),
            fired: BTreeSet::new(),
        }
    }

    /// Resolve a shot at (row, col). A shot hits iff a segment's starting
    /// column equals `col` or `col - 1`; the win condition is every segment
    /// cell hit. Re-firing at a cell is rejected and changes nothing.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<ShotReport, GameError> {
        if !self.config.in_bounds(row, col) {
            return Err(GameError::OutOfBounds { row, col });
        }
        if !self.fired.insert((row, col)) {
            return Err(GameError::AlreadyFired { row, col });
        }

        if self.placements.covers(row, col) {
            self.hits.record(row, col);
            Ok(ShotReport {
                outcome: ShotOutcome::Hit,
                win: self.hits.count == self.config.cells_to_win(),
                revealed: self.revealed_segment(row, col),
            })
        } else {
            Ok(ShotReport {
                outcome: ShotOutcome::Miss,
                win: false,
                revealed: None,
            })
        }
    }

    /// A segment is revealed once the row holds another hit adjacent to the
    /// latest one; both cells are then known.
    fn revealed_segment(&self, row: usize, col: usize) -> Option<(usize, usize)> {
        let hits = self.hits.row(row)?;
        if !hits.iter().any(|&c| c + 1 == col || c == col + 1) {
            return None;
        }
        let start = self.placements.segment_near(row, col)?;
        Some((row, start))
    }

    /// Shots taken against this board so far.
    pub fn shots_fired(&self) -> usize {
        self.fired.len()
    }

    /// True if (row, col) was fired upon.
    pub fn was_fired(&self, row: usize, col: usize) -> bool {
        self.fired.contains(&(row, col))
    }

    /// Hit bookkeeping for this board.
    pub fn hits(&self) -> &HitLog {
        &self.hits
    }

    /// The layout under fire.
    pub fn placements(&self) -> &PlacementSet {
        &self.placements
    }

    /// True when every segment cell has been hit.
    pub fn all_sunk(&self) -> bool {
        self.hits.count == self.config.cells_to_win()
    }
}
