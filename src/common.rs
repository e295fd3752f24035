//! Shared types: shot outcomes, winners and the crate error enum.

use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result of a single resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot landed on a ship segment.
    Hit,
    /// Shot landed on open water.
    Miss,
}

/// Which side won a match. Serialized with the labels the UI shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    #[serde(rename = "You")]
    Player,
    #[serde(rename = "Computer")]
    Computer,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Player => write!(f, "You"),
            Winner::Computer => write!(f, "Computer"),
        }
    }
}

/// Errors returned by game operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// Grid side length outside the supported range.
    #[error("grid size {0} is outside the supported range")]
    InvalidGridSize(usize),
    /// Ship count not playable on the requested grid.
    #[error("{requested} ships cannot be played on a {grid_size}x{grid_size} grid")]
    InvalidShipCount { requested: usize, grid_size: usize },
    /// Random placement gave up after the retry cap.
    #[error("could not fit {num_ships} ships on a {grid_size}x{grid_size} grid after {attempts} attempts")]
    PlacementInfeasible {
        grid_size: usize,
        num_ships: usize,
        attempts: usize,
    },
    /// Coordinate lies outside the grid.
    #[error("({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },
    /// Cell was already fired upon.
    #[error("({row}, {col}) was already fired upon")]
    AlreadyFired { row: usize, col: usize },
    /// Two manually placed ships share a cell.
    #[error("ships at row {row} overlap near column {col}")]
    OverlappingShips { row: usize, col: usize },
    /// Manual placement did not place every ship.
    #[error("{placed} of {expected} ships placed")]
    IncompletePlacement { placed: usize, expected: usize },
    /// Session was already started.
    #[error("game has already started")]
    AlreadyStarted,
    /// Shot attempted outside an active game.
    #[error("game is not in progress")]
    NotInProgress,
    /// The opponent has no unfired cell left to pick.
    #[error("no unfired cells remain")]
    NoCellsLeft,
}
