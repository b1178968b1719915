//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines;
use crate::search::{Position, Side};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_mark(self) -> Option<Mark> {
        match self {
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
            Cell::Empty => None,
        }
    }
}

/// A player's mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opposing mark
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Convert mark to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }

    /// Parse a mark symbol, case-insensitively.
    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl Side for Mark {
    fn opponent(self) -> Self {
        Mark::opponent(self)
    }
}

/// The 3x3 Tic-Tac-Toe board.
///
/// This type implements `Copy` since it's only 9 bytes; the search engine
/// clones it once per branch, so turn tracking stays with the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Create a board from an existing grid (used for search-node cloning)
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Board { cells }
    }

    /// Create a board from a 9-character string, row-major.
    ///
    /// Whitespace is filtered out; `.` marks an empty cell and `X`/`O`
    /// (case-insensitive) mark occupied ones.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 9 non-whitespace characters remain or
    /// any character is not a valid cell representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Get the cell at zero-indexed (row, col)
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * 3 + col]
    }

    /// Place a mark for the given player.
    ///
    /// `row` and `col` are 1-indexed in [1,3]. Returns `false` without
    /// mutating when either index is out of range or the cell is occupied.
    pub fn make_move(&mut self, row: usize, col: usize, mark: Mark) -> bool {
        if !(1..=3).contains(&row) || !(1..=3).contains(&col) {
            return false;
        }

        let idx = (row - 1) * 3 + (col - 1);
        if self.cells[idx] != Cell::Empty {
            return false;
        }

        self.cells[idx] = mark.to_cell();
        true
    }

    /// Place a mark at a zero-indexed cell known to be empty.
    pub(crate) fn place(&mut self, row: usize, col: usize, mark: Mark) {
        debug_assert_eq!(self.cells[row * 3 + col], Cell::Empty);
        self.cells[row * 3 + col] = mark.to_cell();
    }

    /// Zero-indexed (row, col) coordinates of empty cells, row-major.
    pub fn available_moves(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| (i / 3, i % 3))
            .collect()
    }

    /// The winning mark, if any line is complete.
    ///
    /// Rows are checked before columns before diagonals; the first complete
    /// line decides.
    pub fn check_win(&self) -> Option<Mark> {
        lines::first_winner(&self.cells)
    }

    /// True iff there is no winner and no empty cell remains.
    pub fn check_draw(&self) -> bool {
        self.check_win().is_none() && !self.cells.contains(&Cell::Empty)
    }

    /// Check if a player has won
    pub fn has_won(&self, mark: Mark) -> bool {
        lines::has_won(&self.cells, mark)
    }

    /// Deterministic string key for the board contents, row-major.
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            let rendered: Vec<String> = (0..3)
                .map(|col| self.cell(row, col).to_char().to_string())
                .collect();
            writeln!(f, "{}", rendered.join(" | "))?;
            writeln!(f, "{}", "-".repeat(9))?;
        }
        Ok(())
    }
}

impl Position for Board {
    type Move = (usize, usize);
    type Side = Mark;

    fn legal_moves(&self) -> Vec<(usize, usize)> {
        self.available_moves()
    }

    fn apply(&mut self, (row, col): (usize, usize), side: Mark) {
        self.place(row, col, side);
    }

    fn winner(&self) -> Option<Mark> {
        self.check_win()
    }

    fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert_eq!(board.available_moves().len(), 9);
        assert_eq!(board.check_win(), None);
        assert!(!board.check_draw());
    }

    #[test]
    fn test_make_move() {
        let mut board = Board::new();

        assert!(board.make_move(2, 2, Mark::X));
        assert_eq!(board.cell(1, 1), Cell::X);

        // Occupied cell
        assert!(!board.make_move(2, 2, Mark::O));
        assert_eq!(board.cell(1, 1), Cell::X);

        // Out of range
        assert!(!board.make_move(0, 1, Mark::O));
        assert!(!board.make_move(4, 1, Mark::O));
        assert!(!board.make_move(1, 4, Mark::O));
    }

    #[test]
    fn test_mark_parsing_is_case_insensitive() {
        assert_eq!(Mark::from_char('x'), Some(Mark::X));
        assert_eq!(Mark::from_char('X'), Some(Mark::X));
        assert_eq!(Mark::from_char('o'), Some(Mark::O));
        assert_eq!(Mark::from_char('O'), Some(Mark::O));
        assert_eq!(Mark::from_char('z'), None);
    }

    #[test]
    fn test_available_moves_row_major() {
        let mut board = Board::new();
        board.make_move(1, 1, Mark::X);
        board.make_move(2, 2, Mark::O);

        let moves = board.available_moves();
        assert_eq!(moves.len(), 7);
        assert_eq!(moves[0], (0, 1));
        assert!(!moves.contains(&(0, 0)));
        assert!(!moves.contains(&(1, 1)));

        let mut sorted = moves.clone();
        sorted.sort();
        assert_eq!(moves, sorted, "moves must be in row-major ascending order");
    }

    #[test]
    fn test_win_detection_horizontal() {
        let board = Board::from_string("XXXOO....").unwrap();
        assert_eq!(board.check_win(), Some(Mark::X));
        assert!(!board.check_draw());
    }

    #[test]
    fn test_win_detection_vertical() {
        let board = Board::from_string("OX.OX.O..").unwrap();
        assert_eq!(board.check_win(), Some(Mark::O));
    }

    #[test]
    fn test_win_detection_diagonals() {
        let board = Board::from_string("X...X...X").unwrap();
        assert_eq!(board.check_win(), Some(Mark::X));

        let board = Board::from_string("..O.O.O..").unwrap();
        assert_eq!(board.check_win(), Some(Mark::O));
    }

    #[test]
    fn test_draw_detection() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        assert_eq!(board.check_win(), None);
        assert!(board.check_draw());
        assert!(board.available_moves().is_empty());
    }

    #[test]
    fn test_queries_are_idempotent() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        assert_eq!(board.check_win(), board.check_win());
        assert_eq!(board.check_draw(), board.check_draw());
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("XOX......").unwrap();
        assert_eq!(board.cell(0, 0), Cell::X);
        assert_eq!(board.cell(0, 1), Cell::O);
        assert_eq!(board.cell(0, 2), Cell::X);

        assert!(Board::from_string("XO").is_err());
        assert!(Board::from_string("XOZ......").is_err());
    }

    #[test]
    fn test_encode_roundtrip() {
        let board = Board::from_string("XO...X..O").unwrap();
        assert_eq!(board.encode(), "XO...X..O");
        assert_eq!(Board::from_string(&board.encode()).unwrap(), board);
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        let display = format!("{board}");
        assert!(display.contains("X | O | X"));
        assert!(display.contains(". | O | ."));
        assert!(display.contains("X | . | ."));
        assert!(display.contains("---------"));
    }
}
