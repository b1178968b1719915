//! Tactical properties of the search engine on Connect Four.
//!
//! Each scenario has a single correct column; the engine must find it
//! across a range of search depths.

use boardbots::{
    connect_four::{Board, Disc},
    search::Minimax,
};

/// Bottom row `1110022`: player one has three discs in columns 1-3 and an
/// open completion in column 4.
fn open_three_board() -> Board {
    let s = format!("{}{}", "0".repeat(35), "1110022");
    Board::from_string(&s).unwrap()
}

#[test]
fn engine_takes_the_winning_column() {
    let board = open_three_board();
    for depth in 1..=5 {
        let outcome = Minimax::new(depth).search(&board, Disc::One).unwrap();
        assert_eq!(
            outcome.best_move, 3,
            "depth {depth} missed the winning column"
        );
        assert_eq!(outcome.score, 999, "a win on the first ply scores 999");
    }
}

#[test]
fn engine_blocks_the_winning_column() {
    let board = open_three_board();
    for depth in 2..=5 {
        let outcome = Minimax::new(depth).search(&board, Disc::Two).unwrap();
        assert_eq!(
            outcome.best_move, 3,
            "depth {depth} failed to block the open three"
        );
    }
}

#[test]
fn engine_blocks_a_vertical_threat() {
    // Player two has three stacked discs in column 3 (zero-indexed 2);
    // player one must cap the column.
    let board = Board::from_string(
        "0000000\
         0000000\
         0020000\
         0020000\
         0020000\
         1020101",
    )
    .unwrap();

    for depth in 2..=5 {
        let outcome = Minimax::new(depth).search(&board, Disc::One).unwrap();
        assert_eq!(
            outcome.best_move, 2,
            "depth {depth} failed to cap the column"
        );
    }
}

#[test]
fn pruned_and_unpruned_search_agree() {
    let positions = [
        Board::new().serialize(),
        format!("{}{}", "0".repeat(35), "0011200"),
        format!("{}{}{}", "0".repeat(28), "0001000", "0212100"),
    ];

    for s in &positions {
        let board = Board::from_string(s).unwrap();
        for side in [Disc::One, Disc::Two] {
            let engine = Minimax::new(4);
            let pruned = engine.search(&board, side).unwrap();
            let unpruned = engine.search_unpruned(&board, side).unwrap();
            assert_eq!(pruned.best_move, unpruned.best_move, "position {s}");
            assert_eq!(pruned.score, unpruned.score, "position {s}");
        }
    }
}
