use super::board::Board;
use super::types::{GameStatus, Mark, Position, WinningLine};

// Rows, then columns, then the two diagonals.
const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for [a, b, c] in WINNING_LINES {
        let mark = board.at(a);
        if mark != Mark::Empty && mark == board.at(b) && mark == board.at(c) {
            return Some(WinningLine::new(
                mark,
                Position::from_index(a),
                Position::from_index(c),
            ));
        }
    }
    None
}

/// Pure function of the board: search reuses it at every node.
pub fn evaluate_terminal(board: &Board) -> GameStatus {
    if let Some(mark) = check_win(board) {
        return GameStatus::Won(mark);
    }
    if board.is_full() {
        return GameStatus::Draw;
    }
    GameStatus::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{Empty as E, O, X};

    fn board_with_line(line: [usize; 3], mark: Mark) -> Board {
        let mut cells = [E; 9];
        for index in line {
            cells[index] = mark;
        }
        Board::from_marks(cells)
    }

    #[test]
    fn every_line_wins_for_either_mark() {
        for line in WINNING_LINES {
            for mark in [X, O] {
                let board = board_with_line(line, mark);
                assert_eq!(evaluate_terminal(&board), GameStatus::Won(mark), "line {:?}", line);
            }
        }
    }

    #[test]
    fn empty_board_is_in_progress() {
        assert_eq!(evaluate_terminal(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn full_board_without_line_is_draw() {
        let board = Board::from_marks([X, O, X, X, O, O, O, X, X]);
        assert_eq!(evaluate_terminal(&board), GameStatus::Draw);
    }

    #[test]
    fn win_on_last_cell_beats_draw() {
        let board = Board::from_marks([X, O, X, O, X, O, O, X, X]);
        assert_eq!(evaluate_terminal(&board), GameStatus::Won(X));
    }

    #[test]
    fn three_mixed_marks_do_not_win() {
        let board = Board::from_marks([X, X, O, E, E, E, E, E, E]);
        assert_eq!(check_win(&board), None);
    }

    #[test]
    fn winning_line_reports_endpoints() {
        let board = board_with_line([2, 4, 6], O);
        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.mark, O);
        assert_eq!(line.start, Position::new(0, 2));
        assert_eq!(line.end, Position::new(2, 0));
    }
}
