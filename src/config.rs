use crate::common::GameError;

/// Smallest supported grid side length.
pub const GRID_MIN: usize = 3;
/// Largest supported grid side length.
pub const GRID_MAX: usize = 10;
/// Every ship is a horizontal segment of this many cells.
pub const SHIP_LEN: usize = 2;
/// Upper bound on the ship count regardless of grid size.
pub const MAX_SHIPS: usize = 9;

/// Validated per-session settings: grid side length and ship count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    grid_size: usize,
    num_ships: usize,
}

impl GameConfig {
    /// Validate and build a config. Grid sizes run 3..=10; ship counts run
    /// 1..=min(9, grid_size - 1).
    pub fn new(grid_size: usize, num_ships: usize) -> Result<Self, GameError> {
        if !(GRID_MIN..=GRID_MAX).contains(&grid_size) {
            return Err(GameError::InvalidGridSize(grid_size));
        }
        if num_ships == 0 || num_ships > MAX_SHIPS.min(grid_size - 1) {
            return Err(GameError::InvalidShipCount {
                requested: num_ships,
                grid_size,
            });
        }
        Ok(Self {
            grid_size,
            num_ships,
        })
    }

    /// Grid side length.
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Number of ships per side.
    pub fn num_ships(&self) -> usize {
        self.num_ships
    }

    /// Total hits needed to sink every ship.
    pub fn cells_to_win(&self) -> usize {
        self.num_ships * SHIP_LEN
    }

    /// Display label for the grid, e.g. `"8x8"`.
    pub fn grid_label(&self) -> String {
        format!("{0}x{0}", self.grid_size)
    }

    /// True if (row, col) lies on the grid.
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.grid_size && col < self.grid_size
    }
}
