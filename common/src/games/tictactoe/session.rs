use crate::games::GameBroadcaster;
use crate::log;
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::error::{GameError, InvalidMoveReason};
use super::game_state::TicTacToeGameState;
use super::settings::TicTacToeSessionSettings;
use super::types::{GameMode, GameStatus, Mark, Position, WinningLine};
use super::win_detector::check_win_with_line;

/// The computer always plays the second mark.
pub const COMPUTER_MARK: Mark = Mark::O;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won(Mark),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<Position>,
    pub mode: GameMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    CellMarked { position: Position, mark: Mark },
    TurnChanged { mark: Mark, is_computer: bool },
    GameEnded { outcome: GameOutcome, winning_line: Option<WinningLine> },
}

/// Drives one game for a presentation layer: takes move requests and mode selections,
/// runs the computer's reply in `HumanVsComputer` mode, and reports through `B`.
pub struct TicTacToeSession<B: GameBroadcaster> {
    game_state: TicTacToeGameState,
    mode: GameMode,
    settings: TicTacToeSessionSettings,
    broadcaster: B,
}

impl<B: GameBroadcaster> TicTacToeSession<B> {
    pub fn new(mode: GameMode, settings: TicTacToeSessionSettings, broadcaster: B) -> Self {
        Self {
            game_state: TicTacToeGameState::new(),
            mode,
            settings,
            broadcaster,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn game_state(&self) -> &TicTacToeGameState {
        &self.game_state
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.game_state.board,
            current_mark: self.game_state.current_mark,
            status: self.game_state.status,
            last_move: self.game_state.last_move,
            mode: self.mode,
        }
    }

    /// Announces the current state, e.g. right after construction.
    pub async fn start(&self) {
        self.broadcast_turn_start().await;
    }

    pub async fn select_mode(&mut self, mode: GameMode) {
        log!("Mode selected: {:?}", mode);
        self.mode = mode;
        self.reset().await;
    }

    pub async fn reset(&mut self) {
        self.game_state = TicTacToeGameState::reset();
        self.broadcast_turn_start().await;
    }

    pub async fn request_move(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        if self.is_computer_turn() {
            log!("Rejected move ({}, {}): computer is to move", row, col);
            return Err(InvalidMoveReason::NotYourTurn.into());
        }

        if let Err(e) = self.apply_and_broadcast(Position::new(row, col)).await {
            log!("Rejected move ({}, {}): {}", row, col, e);
            return Err(e);
        }

        if self.is_computer_turn() {
            tokio::time::sleep(self.settings.ai_move_delay).await;
            self.play_computer_turn().await?;
        }

        Ok(())
    }

    fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::HumanVsComputer
            && self.game_state.status == GameStatus::InProgress
            && self.game_state.current_mark == COMPUTER_MARK
    }

    async fn play_computer_turn(&mut self) -> Result<(), GameError> {
        let input = BotInput::from_game_state(&self.game_state);
        let options = self.settings.search;

        let calculated_move =
            tokio::task::spawn_blocking(move || calculate_move(input, options)).await;
        let pos = joined_search_result(calculated_move)?;

        log!("Computer plays ({}, {})", pos.row, pos.col);
        self.apply_and_broadcast(pos).await
    }

    async fn apply_and_broadcast(&mut self, pos: Position) -> Result<(), GameError> {
        let mark = self.game_state.current_mark;
        self.game_state.place_mark(pos)?;

        self.broadcaster
            .broadcast_event(GameEvent::CellMarked { position: pos, mark })
            .await;
        self.broadcaster.broadcast_state(self.snapshot()).await;

        let outcome = match self.game_state.status {
            GameStatus::InProgress => {
                self.broadcast_turn_changed().await;
                return Ok(());
            }
            GameStatus::Won(winner) => GameOutcome::Won(winner),
            GameStatus::Draw => GameOutcome::Draw,
        };

        tokio::time::sleep(self.settings.game_over_delay).await;
        log!("Game over: {:?}", outcome);
        self.broadcaster
            .broadcast_event(GameEvent::GameEnded {
                outcome,
                winning_line: check_win_with_line(&self.game_state.board),
            })
            .await;

        Ok(())
    }

    async fn broadcast_turn_start(&self) {
        self.broadcaster.broadcast_state(self.snapshot()).await;
        self.broadcast_turn_changed().await;
    }

    async fn broadcast_turn_changed(&self) {
        self.broadcaster
            .broadcast_event(GameEvent::TurnChanged {
                mark: self.game_state.current_mark,
                is_computer: self.is_computer_turn(),
            })
            .await;
    }
}

fn joined_search_result(
    joined: Result<Result<Position, GameError>, tokio::task::JoinError>,
) -> Result<Position, GameError> {
    match joined {
        Ok(result) => result,
        Err(e) => {
            log!("Computer search task failed: {}", e);
            Err(GameError::SearchFailed)
        }
    }
}
