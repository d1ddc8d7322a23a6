use super::board::Board;
use super::error::{GameError, InvalidMoveReason};
use super::types::{GameStatus, Mark, Position};
use super::win_detector::evaluate_terminal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<Position>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    /// Canonical initial state: empty board, X to move, in progress.
    pub fn reset() -> Self {
        Self::new()
    }

    /// Rejections leave the state exactly as it was.
    pub fn place_mark(&mut self, pos: Position) -> Result<(), GameError> {
        if self.status != GameStatus::InProgress {
            return Err(InvalidMoveReason::GameOver.into());
        }

        if !pos.is_on_board() {
            return Err(InvalidMoveReason::OutOfBounds(pos).into());
        }

        if !self.board.is_empty_at(pos) {
            return Err(InvalidMoveReason::CellOccupied(pos).into());
        }

        self.board.set(pos, self.current_mark);
        self.last_move = Some(pos);

        self.status = evaluate_terminal(&self.board);

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X {
            Mark::O
        } else {
            Mark::X
        };
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }
}
