mod broadcaster;
mod tictactoe_runner;

pub use broadcaster::ConsoleBroadcaster;
pub use tictactoe_runner::run_tictactoe_game;
