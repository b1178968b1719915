//! Connect Four board representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::eval;
use crate::search::{Position, Side};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// A cell on the Connect Four board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    One,
    Two,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '0',
            Cell::One => '1',
            Cell::Two => '2',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '0' | '.' => Some(Cell::Empty),
            '1' => Some(Cell::One),
            '2' => Some(Cell::Two),
            _ => None,
        }
    }

    pub fn to_disc(self) -> Option<Disc> {
        match self {
            Cell::One => Some(Disc::One),
            Cell::Two => Some(Disc::Two),
            Cell::Empty => None,
        }
    }
}

/// A player's disc
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disc {
    One,
    Two,
}

impl Disc {
    /// Get the opposing disc
    pub fn opponent(self) -> Disc {
        match self {
            Disc::One => Disc::Two,
            Disc::Two => Disc::One,
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Disc::One => Cell::One,
            Disc::Two => Cell::Two,
        }
    }

    pub fn from_char(c: char) -> Option<Disc> {
        match c {
            '1' => Some(Disc::One),
            '2' => Some(Disc::Two),
            _ => None,
        }
    }
}

impl Side for Disc {
    fn opponent(self) -> Self {
        Disc::opponent(self)
    }
}

/// The 6x7 Connect Four board, row 0 on top.
///
/// Gravity invariant: a cell is occupied only if every cell below it in the
/// same column is occupied. All mutation goes through disc drops, which
/// maintain the invariant; `from_string` validates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Create a board from an existing grid (used for search-node cloning)
    pub fn from_cells(cells: [[Cell; COLS]; ROWS]) -> Self {
        Board { cells }
    }

    /// Create a board from a 42-character string, row-major from the top row.
    ///
    /// Whitespace is filtered out; `0` (or `.`) marks an empty cell, `1` and
    /// `2` the players' discs.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 42 non-whitespace characters remain,
    /// any character is invalid, or a disc rests above an empty cell.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < ROWS * COLS {
            return Err(crate::Error::InvalidBoardLength {
                expected: ROWS * COLS,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [[Cell::Empty; COLS]; ROWS];
        for (i, &c) in chars.iter().take(ROWS * COLS).enumerate() {
            cells[i / COLS][i % COLS] =
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })?;
        }

        let board = Board { cells };
        for col in 0..COLS {
            let mut seen_disc = false;
            for row in 0..ROWS {
                match board.cells[row][col] {
                    Cell::Empty if seen_disc => {
                        return Err(crate::Error::GravityViolation { column: col });
                    }
                    Cell::Empty => {}
                    _ => seen_disc = true,
                }
            }
        }

        Ok(board)
    }

    /// Get the cell at zero-indexed (row, col)
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Drop a disc into the given column for the given player.
    ///
    /// `column` is 1-indexed in [1,7]. The disc occupies the lowest empty
    /// row. Returns `false` without mutating when the column is out of range
    /// or already full.
    pub fn drop_disc(&mut self, column: usize, disc: Disc) -> bool {
        if !(1..=COLS).contains(&column) {
            return false;
        }
        self.drop(column - 1, disc)
    }

    /// Drop a disc into a zero-indexed column.
    ///
    /// Scans from the top until a disc or the bottom is found; a scan that
    /// stops at row 0 means the column is already full.
    pub(crate) fn drop(&mut self, column: usize, disc: Disc) -> bool {
        let mut row = 0;
        while row < ROWS && self.cells[row][column] == Cell::Empty {
            row += 1;
        }

        if row == 0 {
            return false;
        }

        self.cells[row - 1][column] = disc.to_cell();
        true
    }

    /// Zero-indexed columns whose top cell is empty, ascending.
    pub fn available_moves(&self) -> Vec<usize> {
        (0..COLS)
            .filter(|&col| self.cells[0][col] == Cell::Empty)
            .collect()
    }

    /// The winning disc, if any four-in-a-row exists.
    ///
    /// Scan order is a deterministic contract: horizontal windows row by
    /// row, then vertical windows column by column, then down-right
    /// diagonals top-to-bottom and left-to-right, then up-right diagonals.
    pub fn check_win(&self) -> Option<Disc> {
        for row in 0..ROWS {
            for col in 0..=COLS - 4 {
                let first = self.cells[row][col];
                if first != Cell::Empty && (1..4).all(|i| self.cells[row][col + i] == first) {
                    return first.to_disc();
                }
            }
        }

        for col in 0..COLS {
            for row in 0..=ROWS - 4 {
                let first = self.cells[row][col];
                if first != Cell::Empty && (1..4).all(|i| self.cells[row + i][col] == first) {
                    return first.to_disc();
                }
            }
        }

        for row in 0..=ROWS - 4 {
            for col in 0..=COLS - 4 {
                let first = self.cells[row][col];
                if first != Cell::Empty && (1..4).all(|i| self.cells[row + i][col + i] == first) {
                    return first.to_disc();
                }
            }
        }

        for row in 3..ROWS {
            for col in 0..=COLS - 4 {
                let first = self.cells[row][col];
                if first != Cell::Empty && (1..4).all(|i| self.cells[row - i][col + i] == first) {
                    return first.to_disc();
                }
            }
        }

        None
    }

    /// True iff there is no winner and all 42 cells are occupied.
    pub fn check_draw(&self) -> bool {
        self.check_win().is_none() && self.is_board_full()
    }

    fn is_board_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Cell::Empty))
    }

    /// Deterministic string key for the board contents, row-major from the
    /// top row. Used as the opening-book key.
    pub fn serialize(&self) -> String {
        self.cells
            .iter()
            .flat_map(|row| row.iter().map(|&cell| cell.to_char()))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let rendered: Vec<String> =
                row.iter().map(|&cell| cell.to_char().to_string()).collect();
            writeln!(f, "{}", rendered.join("|"))?;
            writeln!(f, "{}", "-".repeat(2 * COLS))?;
        }
        writeln!(f, "1|2|3|4|5|6|7")
    }
}

impl Position for Board {
    type Move = usize;
    type Side = Disc;

    fn legal_moves(&self) -> Vec<usize> {
        self.available_moves()
    }

    fn apply(&mut self, column: usize, side: Disc) {
        let dropped = self.drop(column, side);
        debug_assert!(dropped, "column {column} is full");
    }

    fn winner(&self) -> Option<Disc> {
        self.check_win()
    }

    fn is_full(&self) -> bool {
        self.is_board_full()
    }

    fn heuristic(&self, side: Disc) -> i32 {
        eval::evaluate(self, side)
    }
}
