use std::time::Duration;

use super::bot_controller::SearchOptions;

pub const DEFAULT_AI_MOVE_DELAY_MS: u64 = 200;
pub const DEFAULT_GAME_OVER_DELAY_MS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    /// Pause before the computer replies, so the human move renders first.
    pub ai_move_delay: Duration,
    /// Pause before announcing a finished game.
    pub game_over_delay: Duration,
    pub search: SearchOptions,
}

impl TicTacToeSessionSettings {
    pub fn from_millis(ai_move_delay_ms: u64, game_over_delay_ms: u64, alpha_beta: bool) -> Self {
        Self {
            ai_move_delay: Duration::from_millis(ai_move_delay_ms),
            game_over_delay: Duration::from_millis(game_over_delay_ms),
            search: SearchOptions { alpha_beta },
        }
    }

    pub fn immediate() -> Self {
        Self::from_millis(0, 0, false)
    }
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self::from_millis(DEFAULT_AI_MOVE_DELAY_MS, DEFAULT_GAME_OVER_DELAY_MS, false)
    }
}
