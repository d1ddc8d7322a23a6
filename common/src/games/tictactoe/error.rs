use super::types::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    OutOfBounds(Position),
    CellOccupied(Position),
    GameOver,
    NotYourTurn,
}

/// Caller-contract violations, not runtime faults. A rejected move leaves the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    InvalidMove(InvalidMoveReason),
    NoLegalMove,
    InvalidMark,
    /// The background search task panicked or was cancelled. The computer still has the move.
    SearchFailed,
}

impl std::fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMoveReason::OutOfBounds(pos) => {
                write!(f, "position ({}, {}) is out of bounds", pos.row, pos.col)
            }
            InvalidMoveReason::CellOccupied(pos) => {
                write!(f, "cell ({}, {}) is already marked", pos.row, pos.col)
            }
            InvalidMoveReason::GameOver => write!(f, "game is already over"),
            InvalidMoveReason::NotYourTurn => write!(f, "not your turn"),
        }
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidMove(reason) => write!(f, "Invalid move: {}", reason),
            GameError::NoLegalMove => write!(f, "No legal move: board is full or game is over"),
            GameError::InvalidMark => write!(f, "Empty is not a player mark"),
            GameError::SearchFailed => write!(f, "Computer move search failed, reset to continue"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<InvalidMoveReason> for GameError {
    fn from(reason: InvalidMoveReason) -> Self {
        GameError::InvalidMove(reason)
    }
}
