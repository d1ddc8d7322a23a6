mod board;
mod bot_controller;
mod error;
mod game_state;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves, is_valid_move};
pub use bot_controller::{
    BotInput, DRAW_SCORE, LOSS_SCORE, SearchOptions, WIN_SCORE, calculate_minimax_move,
    calculate_move, score_moves,
};
pub use error::{GameError, InvalidMoveReason};
pub use game_state::TicTacToeGameState;
pub use session::{GameEvent, GameOutcome, GameSnapshot, TicTacToeSession};
pub use settings::TicTacToeSessionSettings;
pub use types::{BOARD_SIZE, CELL_COUNT, GameMode, GameStatus, Mark, Position, WinningLine};
pub use win_detector::{check_win, check_win_with_line, evaluate_terminal};
