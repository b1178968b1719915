//! Connect Four game implementation

pub mod board;
pub mod eval;

pub use board::{Board, Cell, Disc, COLS, ROWS};

/// Parse a single 1-indexed column move into a zero-indexed column.
///
/// # Errors
///
/// Returns [`crate::Error::MalformedMove`] when the input is not an integer
/// in [1,7].
pub fn parse_move(input: &str) -> crate::Result<usize> {
    let malformed = || crate::Error::MalformedMove {
        input: input.to_string(),
        expected: "a column number in 1-7".to_string(),
    };

    let column: usize = input.trim().parse().map_err(|_| malformed())?;
    if !(1..=COLS).contains(&column) {
        return Err(malformed());
    }

    Ok(column - 1)
}

/// Render a zero-indexed column as the 1-indexed number the user typed.
pub fn format_move(column: usize) -> String {
    (column + 1).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_move_is_one_indexed() {
        assert_eq!(format_move(0), "1");
        assert_eq!(format_move(6), "7");
    }

    #[test]
    fn parse_move_accepts_one_indexed_columns() {
        assert_eq!(parse_move("1").unwrap(), 0);
        assert_eq!(parse_move("7").unwrap(), 6);
        assert_eq!(parse_move(" 4 ").unwrap(), 3);
    }

    #[test]
    fn parse_move_rejects_garbage() {
        for input in ["", "0", "8", "-1", "2.5", "col", "1,2"] {
            assert!(parse_move(input).is_err(), "'{input}' should be rejected");
        }
    }
}
