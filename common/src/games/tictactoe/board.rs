use super::types::{BOARD_SIZE, CELL_COUNT, Mark, Position};

/// Row-major 3x3 grid. `Copy`, so search code can hand boards around by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_marks(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn get(&self, pos: Position) -> Option<Mark> {
        if !pos.is_on_board() {
            return None;
        }
        Some(self.cells[pos.to_index()])
    }

    pub fn at(&self, index: usize) -> Mark {
        self.cells[index]
    }

    /// Returns a copy of the board with `mark` placed at `pos`. `pos` must be on the board.
    pub(crate) fn with_mark(mut self, pos: Position, mark: Mark) -> Self {
        self.set(pos, mark);
        self
    }

    pub(crate) fn set(&mut self, pos: Position, mark: Mark) {
        debug_assert!(pos.is_on_board(), "({}, {}) is off the board", pos.row, pos.col);
        self.cells[pos.to_index()] = mark;
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == Some(Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == Mark::Empty).count()
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> {
        self.cells.chunks(BOARD_SIZE)
    }
}

pub fn get_available_moves(board: &Board) -> Vec<Position> {
    board
        .cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Mark::Empty)
        .map(|(index, _)| Position::from_index(index))
        .collect()
}

pub fn is_valid_move(board: &Board, pos: Position) -> bool {
    board.is_empty_at(pos)
}
