//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Mark};

/// Winning line indices on the 3x3 board.
///
/// The order (rows, then columns, then diagonals) is part of the win-check
/// contract: the first complete line decides the reported winner.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Owner of the first complete line, scanning in `WINNING_LINES` order.
pub fn first_winner(cells: &[Cell; 9]) -> Option<Mark> {
    for line in &WINNING_LINES {
        let first = cells[line[0]];
        if first != Cell::Empty && line.iter().all(|&idx| cells[idx] == first) {
            return first.to_mark();
        }
    }
    None
}

/// Check if a player has three in a row.
pub fn has_won(cells: &[Cell; 9], mark: Mark) -> bool {
    let target = mark.to_cell();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == target))
}
