//! Tic-Tac-Toe game implementation

pub mod board;
pub mod lines;

pub use board::{Board, Cell, Mark};
pub use lines::WINNING_LINES;

/// Parse a `"row,col"` move (1-indexed) into zero-indexed coordinates.
///
/// The returned coordinates are not validated against a board; legality is
/// checked where the move is applied.
///
/// # Errors
///
/// Returns [`crate::Error::MalformedMove`] when the input is not two
/// comma-separated integers in [1,3].
pub fn parse_move(input: &str) -> crate::Result<(usize, usize)> {
    let malformed = || crate::Error::MalformedMove {
        input: input.to_string(),
        expected: "row,col with both in 1-3".to_string(),
    };

    let mut parts = input.split(',');
    let row: usize = parts
        .next()
        .and_then(|p| p.trim().parse().ok())
        .ok_or_else(malformed)?;
    let col: usize = parts
        .next()
        .and_then(|p| p.trim().parse().ok())
        .ok_or_else(malformed)?;

    if parts.next().is_some() || !(1..=3).contains(&row) || !(1..=3).contains(&col) {
        return Err(malformed());
    }

    Ok((row - 1, col - 1))
}

/// Render a zero-indexed move as the 1-indexed `"row,col"` the user typed.
pub fn format_move((row, col): (usize, usize)) -> String {
    format!("{},{}", row + 1, col + 1)
}
