use common::config::Validate;
use common::games::tictactoe::{GameMode, TicTacToeSessionSettings};
use serde::{Deserialize, Serialize};

const MAX_DELAY_MS: u64 = 10_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub default_mode: GameMode,
    pub ai_move_delay_ms: u64,
    pub game_over_delay_ms: u64,
    #[serde(default)]
    pub alpha_beta: bool,
}

impl GameConfig {
    pub fn session_settings(&self) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings::from_millis(
            self.ai_move_delay_ms,
            self.game_over_delay_ms,
            self.alpha_beta,
        )
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.ai_move_delay_ms > MAX_DELAY_MS {
            return Err(format!("ai_move_delay_ms must not exceed {}", MAX_DELAY_MS));
        }
        if self.game_over_delay_ms > MAX_DELAY_MS {
            return Err(format!("game_over_delay_ms must not exceed {}", MAX_DELAY_MS));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        let settings = TicTacToeSessionSettings::default();
        Self {
            default_mode: GameMode::HumanVsHuman,
            ai_move_delay_ms: settings.ai_move_delay.as_millis() as u64,
            game_over_delay_ms: settings.game_over_delay.as_millis() as u64,
            alpha_beta: settings.search.alpha_beta,
        }
    }
}
