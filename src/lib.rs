//! Game-simulation core of a grid-based naval artillery game: random
//! constraint-satisfying ship placement, shot resolution with win
//! detection, a hunt/target computer opponent, and a bounded match history
//! with aggregate statistics persisted through a key-value store.

mod ai;
mod board;
mod common;
mod config;
mod game;
mod logging;
mod placement;
mod stats;
mod storage;

pub use ai::{AiState, LastHit};
pub use board::{Board, HitLog, ShotReport};
pub use common::{GameError, ShotOutcome, Winner};
pub use config::{GameConfig, GRID_MAX, GRID_MIN, MAX_SHIPS, SHIP_LEN};
pub use game::{ComputerShot, Game, GameStatus, TurnReport};
pub use logging::init_logging;
pub use placement::PlacementSet;
pub use stats::{GameResult, MatchHistory, Statistics, WinRatio, HISTORY_CAP};
pub use storage::{
    load_history, save_history, FileStore, KeyValueStore, MemoryStore, HISTORY_KEY,
};
