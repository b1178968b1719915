//! Static heuristic evaluation of non-terminal Connect Four positions

use super::board::{Board, Cell, Disc, COLS, ROWS};

/// Positional weight per column: center dominance tapering to the edges.
const COLUMN_WEIGHTS: [i32; COLS] = [0, 1, 2, 3, 2, 1, 0];

/// Score returned immediately when a window holds four discs of one player.
const FOUR_IN_WINDOW: i32 = 1000;

/// Disc counts within one 4-cell window.
#[derive(Debug, Clone, Copy, Default)]
struct WindowCounts {
    own: u8,
    other: u8,
    empty: u8,
}

impl WindowCounts {
    fn tally(cells: [Cell; 4], own: Cell) -> Self {
        let mut counts = WindowCounts::default();
        for cell in cells {
            if cell == own {
                counts.own += 1;
            } else if cell == Cell::Empty {
                counts.empty += 1;
            } else {
                counts.other += 1;
            }
        }
        counts
    }

    /// Contribution of a window that holds fewer than four of a kind.
    /// Mixed windows (both players present) cannot complete a line and
    /// contribute nothing.
    fn line_potential(self) -> i32 {
        match (self.own, self.other, self.empty) {
            (3, 0, 1) => 50,
            (0, 3, 1) => -50,
            (2, 0, 2) => 10,
            (0, 2, 2) => -10,
            (1, 0, 3) => 1,
            (0, 1, 3) => -1,
            _ => 0,
        }
    }
}

/// Score a board from `disc`'s perspective: positive favors `disc`.
///
/// Sums positional column weights over owned cells (opponent cells subtract
/// the same weight), then adds line-potential contributions for every
/// 4-cell window. A window with four discs of either player short-circuits
/// the whole evaluation to +/-1000.
pub fn evaluate(board: &Board, disc: Disc) -> i32 {
    let own = disc.to_cell();
    let other = disc.opponent().to_cell();

    let mut score = 0;
    for row in 0..ROWS {
        for (col, &weight) in COLUMN_WEIGHTS.iter().enumerate() {
            let cell = board.cell(row, col);
            if cell == own {
                score += weight;
            } else if cell == other {
                score -= weight;
            }
        }
    }

    for window in windows(board) {
        let counts = WindowCounts::tally(window, own);
        if counts.own == 4 {
            return FOUR_IN_WINDOW;
        }
        if counts.other == 4 {
            return -FOUR_IN_WINDOW;
        }
        score += counts.line_potential();
    }

    score
}

/// All 4-cell windows: horizontal, vertical, then both diagonal directions.
fn windows(board: &Board) -> Vec<[Cell; 4]> {
    let mut windows = Vec::with_capacity(69);

    for row in 0..ROWS {
        for col in 0..=COLS - 4 {
            windows.push(std::array::from_fn(|i| board.cell(row, col + i)));
        }
    }

    for col in 0..COLS {
        for row in 0..=ROWS - 4 {
            windows.push(std::array::from_fn(|i| board.cell(row + i, col)));
        }
    }

    for row in 0..=ROWS - 4 {
        for col in 0..=COLS - 4 {
            windows.push(std::array::from_fn(|i| board.cell(row + i, col + i)));
        }
    }

    for row in 3..ROWS {
        for col in 0..=COLS - 4 {
            windows.push(std::array::from_fn(|i| board.cell(row - i, col + i)));
        }
    }

    windows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_is_neutral() {
        assert_eq!(evaluate(&Board::new(), Disc::One), 0);
        assert_eq!(evaluate(&Board::new(), Disc::Two), 0);
    }

    #[test]
    fn evaluation_is_antisymmetric() {
        let mut board = Board::new();
        board.drop_disc(4, Disc::One);
        board.drop_disc(3, Disc::Two);
        board.drop_disc(4, Disc::One);

        assert_eq!(evaluate(&board, Disc::One), -evaluate(&board, Disc::Two));
    }

    #[test]
    fn center_column_outweighs_the_edge() {
        let mut center = Board::new();
        center.drop_disc(4, Disc::One);
        let mut edge = Board::new();
        edge.drop_disc(1, Disc::One);

        assert!(evaluate(&center, Disc::One) > evaluate(&edge, Disc::One));
    }

    #[test]
    fn single_center_disc_scores_weight_plus_windows() {
        // Positional weight 3, plus +1 for each window containing the lone
        // disc: 4 horizontal, 1 vertical, 2 diagonal.
        let mut board = Board::new();
        board.drop_disc(4, Disc::One);
        assert_eq!(evaluate(&board, Disc::One), 3 + 4 + 1 + 2);
    }

    #[test]
    fn edge_disc_has_zero_positional_weight() {
        // Bottom-left corner: windows are 1 horizontal, 1 vertical, 1 diagonal.
        let mut board = Board::new();
        board.drop_disc(1, Disc::One);
        assert_eq!(evaluate(&board, Disc::One), 0 + 3);
    }

    #[test]
    fn four_in_a_window_short_circuits_to_exactly_1000() {
        // Plenty of other material on the board; the complete line dominates.
        let board = Board::from_string(
            "0000000\
             0000000\
             0000000\
             2200000\
             2210000\
             1111220",
        )
        .unwrap();
        assert_eq!(evaluate(&board, Disc::One), 1000);
        assert_eq!(evaluate(&board, Disc::Two), -1000);
    }

    #[test]
    fn three_with_an_open_end_scores_fifty() {
        // Three in a row for One at the bottom-left with the fourth cell
        // open: the +50 window dominates the smaller contributions.
        let board = Board::from_string(
            "0000000\
             0000000\
             0000000\
             0000000\
             0000000\
             1110000",
        )
        .unwrap();
        let score = evaluate(&board, Disc::One);
        assert!(score > 50, "three in a row should dominate, got {score}");
    }

    #[test]
    fn opponent_threat_scores_negative() {
        let board = Board::from_string(
            "0000000\
             0000000\
             0000000\
             0000000\
             0000000\
             0222000",
        )
        .unwrap();
        assert!(evaluate(&board, Disc::One) < 0);
    }
}
