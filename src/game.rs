//! One play session: both boards, the computer opponent and turn flow.

use std::time::Instant;

use log::{debug, info};
use rand::Rng;

use crate::ai::AiState;
use crate::board::{Board, ShotReport};
use crate::common::{GameError, ShotOutcome, Winner};
use crate::config::GameConfig;
use crate::placement::PlacementSet;
use crate::stats::GameResult;

/// Session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Ships are being placed; no shots yet.
    Setup,
    InProgress,
    Over(Winner),
}

/// One shot of a computer turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerShot {
    pub row: usize,
    pub col: usize,
    pub report: ShotReport,
}

/// Everything that happened in one player turn: the player's shot, the
/// computer's chained reply (empty unless the player missed), and the final
/// result if the turn ended the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub player: ShotReport,
    pub computer: Vec<ComputerShot>,
    pub result: Option<GameResult>,
}

/// An exclusively owned game session. All state lives here; nothing is
/// shared across games, and dropping the session discards it.
pub struct Game {
    config: GameConfig,
    player_placements: Option<PlacementSet>,
    player_board: Option<Board>,
    opponent_board: Option<Board>,
    ai: Option<AiState>,
    started: Option<Instant>,
    winner: Option<Winner>,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            player_placements: None,
            player_board: None,
            opponent_board: None,
            ai: None,
            started: None,
            winner: None,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn status(&self) -> GameStatus {
        match (self.winner, self.started) {
            (Some(winner), _) => GameStatus::Over(winner),
            (None, Some(_)) => GameStatus::InProgress,
            (None, None) => GameStatus::Setup,
        }
    }

    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    /// Place the player's ships randomly. May be repeated until `start`.
    pub fn place_randomly<R: Rng>(&mut self, rng: &mut R) -> Result<&PlacementSet, GameError> {
        if self.started.is_some() {
            return Err(GameError::AlreadyStarted);
        }
        let placements = PlacementSet::random(rng, self.config)?;
        Ok(&*self.player_placements.insert(placements))
    }

    /// Place the player's ships by hand. Every ship must be placed, fit the
    /// grid and not overlap another; touching ships are accepted.
    pub fn place_ships(&mut self, ships: &[(usize, usize)]) -> Result<(), GameError> {
        if self.started.is_some() {
            return Err(GameError::AlreadyStarted);
        }
        if ships.len() != self.config.num_ships() {
            return Err(GameError::IncompletePlacement {
                placed: ships.len(),
                expected: self.config.num_ships(),
            });
        }
        self.player_placements = Some(PlacementSet::from_ships(ships, self.config)?);
        Ok(())
    }

    /// The player's current layout, if any.
    pub fn player_placements(&self) -> Option<&PlacementSet> {
        match &self.player_board {
            Some(board) => Some(board.placements()),
            None => self.player_placements.as_ref(),
        }
    }

    /// Begin play: generate the opponent's layout, fall back to a random
    /// player layout if none was chosen, and arm the clock.
    pub fn start<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        if self.started.is_some() {
            return Err(GameError::AlreadyStarted);
        }
        let player_placements = match self.player_placements.take() {
            Some(placements) => placements,
            None => PlacementSet::random(rng, self.config)?,
        };
        let opponent_placements = PlacementSet::random(rng, self.config)?;

        self.player_board = Some(Board::new(player_placements, self.config));
        self.opponent_board = Some(Board::new(opponent_placements, self.config));
        self.started = Some(Instant::now());
        debug!(
            "game started on a {} grid with {} ships",
            self.config.grid_label(),
            self.config.num_ships()
        );
        Ok(())
    }

    /// The player's view of the opponent's board, once play has begun.
    pub fn opponent_board(&self) -> Option<&Board> {
        self.opponent_board.as_ref()
    }

    /// The player's own board, once play has begun.
    pub fn player_board(&self) -> Option<&Board> {
        self.player_board.as_ref()
    }

    /// Resolve one player shot. A hit keeps the initiative with the player;
    /// a miss hands the turn to the computer, which fires until it misses
    /// or wins. The whole computer chain runs inside this call.
    pub fn player_shot<R: Rng>(
        &mut self,
        rng: &mut R,
        row: usize,
        col: usize,
    ) -> Result<TurnReport, GameError> {
        if self.winner.is_some() || self.started.is_none() {
            return Err(GameError::NotInProgress);
        }
        let board = self.opponent_board.as_mut().ok_or(GameError::NotInProgress)?;
        let player = board.fire(row, col)?;

        let mut computer = Vec::new();
        let mut result = None;
        if player.win {
            result = Some(self.finish(Winner::Player));
        } else if player.outcome == ShotOutcome::Miss {
            let (shots, outcome) = self.computer_turn(rng)?;
            computer = shots;
            result = outcome;
        }
        Ok(TurnReport {
            player,
            computer,
            result,
        })
    }

    /// The computer's atomic turn: request a move, resolve it, and chain
    /// further moves after every hit until a miss or a win.
    fn computer_turn<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Result<(Vec<ComputerShot>, Option<GameResult>), GameError> {
        let grid_size = self.config.grid_size();
        let mut shots = Vec::new();
        let mut won = false;
        {
            // first computer turn of the session creates the AI state
            let ai = self.ai.get_or_insert_with(AiState::new);
            let board = self.player_board.as_mut().ok_or(GameError::NotInProgress)?;
            loop {
                let (row, col) = ai.next_move(rng, grid_size)?;
                let report = board.fire(row, col)?;
                if report.outcome == ShotOutcome::Hit {
                    ai.note_hit();
                }
                debug!("computer fired at ({row}, {col}): {:?}", report.outcome);
                shots.push(ComputerShot { row, col, report });
                if report.win {
                    won = true;
                    break;
                }
                if report.outcome == ShotOutcome::Miss {
                    break;
                }
            }
        }
        let result = won.then(|| self.finish(Winner::Computer));
        Ok((shots, result))
    }

    fn finish(&mut self, winner: Winner) -> GameResult {
        self.winner = Some(winner);
        let game_time = self
            .started
            .map(|at| at.elapsed().as_secs_f64().round() as u64)
            .unwrap_or(0);
        let result = GameResult {
            grid_size: self.config.grid_label(),
            num_ships: self.config.num_ships(),
            player_shots: self.opponent_board.as_ref().map_or(0, Board::shots_fired) as u32,
            opponent_shots: self.player_board.as_ref().map_or(0, Board::shots_fired) as u32,
            game_time,
            winner,
        };
        info!("game over after {game_time}s: {winner} won");
        result
    }
}
