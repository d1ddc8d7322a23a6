use super::board::{Board, get_available_moves};
use super::error::GameError;
use super::game_state::TicTacToeGameState;
use super::types::{GameStatus, Mark, Position};
use super::win_detector::evaluate_terminal;

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub alpha_beta: bool,
}

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.board,
            current_mark: state.current_mark,
        }
    }
}

#[derive(Clone, Copy)]
struct Sides {
    bot: Mark,
    opponent: Mark,
}

impl Sides {
    fn for_bot(bot: Mark) -> Result<Self, GameError> {
        let opponent = bot.opponent().ok_or(GameError::InvalidMark)?;
        Ok(Self { bot, opponent })
    }
}

pub fn calculate_move(input: BotInput, options: SearchOptions) -> Result<Position, GameError> {
    if options.alpha_beta {
        calculate_pruned_move(&input.board, input.current_mark)
    } else {
        calculate_minimax_move(&input.board, input.current_mark)
    }
}

/// Optimal move for `bot_mark`, assuming the opponent also plays optimally.
///
/// Ties go to the first candidate in row-major order. Fails with `NoLegalMove` on a
/// full or already decided board.
pub fn calculate_minimax_move(board: &Board, bot_mark: Mark) -> Result<Position, GameError> {
    let scored = score_moves(board, bot_mark)?;

    let mut best_move = None;
    let mut best_score = i32::MIN;
    for (pos, score) in scored {
        if score > best_score {
            best_score = score;
            best_move = Some(pos);
        }
    }

    best_move.ok_or(GameError::NoLegalMove)
}

/// Minimax value of every empty cell for `bot_mark`, in row-major order.
pub fn score_moves(board: &Board, bot_mark: Mark) -> Result<Vec<(Position, i32)>, GameError> {
    let sides = Sides::for_bot(bot_mark)?;
    ensure_playable(board)?;

    Ok(get_available_moves(board)
        .into_iter()
        .map(|pos| {
            let score = minimax(board.with_mark(pos, sides.bot), false, sides);
            (pos, score)
        })
        .collect())
}

fn calculate_pruned_move(board: &Board, bot_mark: Mark) -> Result<Position, GameError> {
    let sides = Sides::for_bot(bot_mark)?;
    ensure_playable(board)?;

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for pos in get_available_moves(board) {
        // Children at or below the current best may come back as bounds rather than
        // exact values. They lose the strict comparison either way, so the chosen
        // move matches the exhaustive search.
        let score = minimax_alpha_beta(
            board.with_mark(pos, sides.bot),
            false,
            sides,
            best_score,
            i32::MAX,
        );
        if score > best_score {
            best_score = score;
            best_move = Some(pos);
        }
    }

    best_move.ok_or(GameError::NoLegalMove)
}

fn ensure_playable(board: &Board) -> Result<(), GameError> {
    match evaluate_terminal(board) {
        GameStatus::InProgress => Ok(()),
        _ => Err(GameError::NoLegalMove),
    }
}

fn terminal_score(board: &Board, sides: Sides) -> Option<i32> {
    match evaluate_terminal(board) {
        GameStatus::Won(mark) if mark == sides.bot => Some(WIN_SCORE),
        GameStatus::Won(_) => Some(LOSS_SCORE),
        GameStatus::Draw => Some(DRAW_SCORE),
        GameStatus::InProgress => None,
    }
}

fn minimax(board: Board, is_maximizing: bool, sides: Sides) -> i32 {
    if let Some(score) = terminal_score(&board, sides) {
        return score;
    }

    let moves = get_available_moves(&board);

    if is_maximizing {
        moves
            .into_iter()
            .map(|pos| minimax(board.with_mark(pos, sides.bot), false, sides))
            .max()
            .unwrap_or(DRAW_SCORE)
    } else {
        moves
            .into_iter()
            .map(|pos| minimax(board.with_mark(pos, sides.opponent), true, sides))
            .min()
            .unwrap_or(DRAW_SCORE)
    }
}

fn minimax_alpha_beta(
    board: Board,
    is_maximizing: bool,
    sides: Sides,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if let Some(score) = terminal_score(&board, sides) {
        return score;
    }

    let moves = get_available_moves(&board);

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for pos in moves {
            let eval = minimax_alpha_beta(board.with_mark(pos, sides.bot), false, sides, alpha, beta);
            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for pos in moves {
            let eval =
                minimax_alpha_beta(board.with_mark(pos, sides.opponent), true, sides, alpha, beta);
            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{Empty as E, O, X};
    use rand::Rng;
    use rand::seq::IndexedRandom;

    fn both_strategies(board: &Board, mark: Mark) -> (Position, Position) {
        let exhaustive = calculate_minimax_move(board, mark).unwrap();
        let pruned = calculate_pruned_move(board, mark).unwrap();
        (exhaustive, pruned)
    }

    #[test]
    fn takes_immediate_win() {
        // O O _ / X X _ / _ _ _, O to move
        let board = Board::from_marks([O, O, E, X, X, E, E, E, E]);
        assert_eq!(calculate_minimax_move(&board, O), Ok(Position::new(0, 2)));
        assert_eq!(calculate_pruned_move(&board, O), Ok(Position::new(0, 2)));
    }

    #[test]
    fn blocks_opponent_threat() {
        // X _ _ / X O _ / _ _ _, O to move must block column 0
        let board = Board::from_marks([X, E, E, X, O, E, E, E, E]);
        assert_eq!(calculate_minimax_move(&board, O), Ok(Position::new(2, 0)));
    }

    #[test]
    fn answers_corner_opening_with_center() {
        let board = Board::new().with_mark(Position::new(0, 0), X);
        let scored = score_moves(&board, O).unwrap();
        let center = scored.iter().find(|(pos, _)| *pos == Position::new(1, 1)).unwrap();
        assert_eq!(center.1, DRAW_SCORE);
        // Every other reply loses against perfect play.
        assert!(
            scored
                .iter()
                .filter(|(pos, _)| *pos != Position::new(1, 1))
                .all(|(_, score)| *score == LOSS_SCORE)
        );
        assert_eq!(calculate_minimax_move(&board, O), Ok(Position::new(1, 1)));
    }

    #[test]
    fn equal_scores_resolve_to_first_row_major_cell() {
        // Every opening draws under perfect play, so the first cell wins the tie.
        let scored = score_moves(&Board::new(), X).unwrap();
        assert!(scored.iter().all(|(_, score)| *score == DRAW_SCORE));
        assert_eq!(calculate_minimax_move(&Board::new(), X), Ok(Position::new(0, 0)));
    }

    #[test]
    fn forced_win_ranks_with_immediate_win() {
        // _ O _ / _ _ O / X X _, X to move. (2,2) wins at once, but (0,0) forks
        // (1,0) and (2,2) and comes first in row-major order.
        let board = Board::from_marks([E, O, E, E, E, O, X, X, E]);
        let scored = score_moves(&board, X).unwrap();
        assert!(scored.contains(&(Position::new(0, 0), WIN_SCORE)));
        assert!(scored.contains(&(Position::new(2, 2), WIN_SCORE)));
        assert_eq!(calculate_minimax_move(&board, X), Ok(Position::new(0, 0)));
    }

    #[test]
    fn search_does_not_touch_caller_board() {
        let board = Board::from_marks([X, E, E, E, O, E, E, E, X]);
        let copy = board;
        let _ = calculate_minimax_move(&board, O).unwrap();
        let _ = calculate_pruned_move(&board, O).unwrap();
        assert_eq!(board, copy);
    }

    #[test]
    fn terminal_or_full_board_has_no_move() {
        let full = Board::from_marks([X, O, X, X, O, O, O, X, X]);
        assert_eq!(calculate_minimax_move(&full, O), Err(GameError::NoLegalMove));

        let won = Board::from_marks([X, X, X, O, O, E, E, E, E]);
        assert_eq!(calculate_minimax_move(&won, O), Err(GameError::NoLegalMove));
        assert_eq!(score_moves(&won, O), Err(GameError::NoLegalMove));
    }

    #[test]
    fn empty_mark_is_rejected() {
        assert_eq!(calculate_minimax_move(&Board::new(), E), Err(GameError::InvalidMark));
    }

    #[test]
    fn self_play_from_empty_board_is_draw() {
        for options in [SearchOptions { alpha_beta: false }, SearchOptions { alpha_beta: true }] {
            let mut state = TicTacToeGameState::new();
            while !state.is_over() {
                let pos = calculate_move(BotInput::from_game_state(&state), options).unwrap();
                state.place_mark(pos).unwrap();
            }
            assert_eq!(state.status, GameStatus::Draw);
        }
    }

    #[test]
    fn never_loses_against_random_opponent() {
        let mut rng = rand::rng();
        for _ in 0..30 {
            let mut state = TicTacToeGameState::new();
            while !state.is_over() {
                let pos = if state.current_mark == O {
                    calculate_minimax_move(&state.board, O).unwrap()
                } else {
                    *get_available_moves(&state.board).choose(&mut rng).unwrap()
                };
                state.place_mark(pos).unwrap();
            }
            assert_ne!(state.winner(), Some(X), "board: {:?}", state.board);
        }
    }

    #[test]
    fn never_picks_losing_move_when_alternative_exists() {
        let mut rng = rand::rng();
        for _ in 0..40 {
            let mut state = TicTacToeGameState::new();
            let plies = rng.random_range(0..7);
            for _ in 0..plies {
                if state.is_over() {
                    break;
                }
                let pos = *get_available_moves(&state.board).choose(&mut rng).unwrap();
                state.place_mark(pos).unwrap();
            }
            if state.is_over() {
                continue;
            }

            let mark = state.current_mark;
            let scored = score_moves(&state.board, mark).unwrap();
            let chosen = calculate_minimax_move(&state.board, mark).unwrap();
            let chosen_score = scored.iter().find(|(pos, _)| *pos == chosen).unwrap().1;
            let best = scored.iter().map(|(_, score)| *score).max().unwrap();
            assert_eq!(chosen_score, best);
        }
    }

    #[test]
    fn pruning_never_changes_the_move() {
        let mut rng = rand::rng();
        for _ in 0..60 {
            let mut state = TicTacToeGameState::new();
            let plies = rng.random_range(0..8);
            for _ in 0..plies {
                if state.is_over() {
                    break;
                }
                let pos = *get_available_moves(&state.board).choose(&mut rng).unwrap();
                state.place_mark(pos).unwrap();
            }
            if state.is_over() {
                continue;
            }
            let (exhaustive, pruned) = both_strategies(&state.board, state.current_mark);
            assert_eq!(exhaustive, pruned, "board: {:?}", state.board);
        }
    }
}
