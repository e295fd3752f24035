//! Completed-match log and aggregate statistics.

use core::fmt;
use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::common::Winner;

/// Completed matches retained; recording an eleventh evicts the oldest.
pub const HISTORY_CAP: usize = 10;

/// Immutable record of one finished match. Field names match the stored
/// JSON produced by earlier versions of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    /// Grid label, e.g. `"5x5"`.
    pub grid_size: String,
    pub num_ships: usize,
    pub player_shots: u32,
    pub opponent_shots: u32,
    /// Whole seconds from start to the winning shot.
    pub game_time: u64,
    pub winner: Winner,
}

/// The side leading on wins and its win percentage. Formats as the UI
/// string, e.g. `"You (70%)"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinRatio {
    pub leader: Winner,
    pub percent: u32,
}

impl fmt::Display for WinRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}%)", self.leader, self.percent)
    }
}

/// Aggregates over the retained results. All averages are rounded to the
/// nearest whole number; an empty history reports zeros and no leader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    pub avg_player_shots: u32,
    pub avg_opponent_shots: u32,
    pub avg_game_time: u64,
    pub win_ratio: Option<WinRatio>,
}

/// Ordered, capacity-bounded log of finished matches.
#[derive(Debug, Clone, Default)]
pub struct MatchHistory {
    results: VecDeque<GameResult>,
}

impl MatchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a history from stored results, keeping only the newest
    /// `HISTORY_CAP` entries if the input is oversized.
    pub fn from_results(results: Vec<GameResult>) -> Self {
        let skip = results.len().saturating_sub(HISTORY_CAP);
        Self {
            results: results.into_iter().skip(skip).collect(),
        }
    }

    /// Retained results, oldest first.
    pub fn results(&self) -> &VecDeque<GameResult> {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Append a finished match, evicting the oldest entry once the log is
    /// full, and return the recomputed statistics.
    pub fn record_result(&mut self, result: GameResult) -> Statistics {
        if self.results.len() == HISTORY_CAP {
            self.results.pop_front();
        }
        self.results.push_back(result);
        self.statistics()
    }

    /// Aggregate the retained results.
    pub fn statistics(&self) -> Statistics {
        let count = self.results.len();
        if count == 0 {
            // nothing to average over; report neutral values
            return Statistics::default();
        }

        let mut player_shots = 0u64;
        let mut opponent_shots = 0u64;
        let mut game_time = 0u64;
        let mut player_wins = 0u64;
        let mut opponent_wins = 0u64;
        for result in &self.results {
            player_shots += u64::from(result.player_shots);
            opponent_shots += u64::from(result.opponent_shots);
            game_time += result.game_time;
            match result.winner {
                Winner::Player => player_wins += 1,
                Winner::Computer => opponent_wins += 1,
            }
        }

        let average = |sum: u64| (sum as f64 / count as f64).round() as u64;
        let percentage = |wins: u64| (wins as f64 / count as f64 * 100.0).round() as u32;

        let win_percent = percentage(player_wins);
        let loss_percent = percentage(opponent_wins);
        // ties go to the player
        let win_ratio = if win_percent >= loss_percent {
            WinRatio {
                leader: Winner::Player,
                percent: win_percent,
            }
        } else {
            WinRatio {
                leader: Winner::Computer,
                percent: loss_percent,
            }
        };

        Statistics {
            avg_player_shots: average(player_shots) as u32,
            avg_opponent_shots: average(opponent_shots) as u32,
            avg_game_time: average(game_time),
            win_ratio: Some(win_ratio),
        }
    }
}
