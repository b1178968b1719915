//! Move-selection strategies.
//!
//! One polymorphic abstraction covers every bot difficulty for both games:
//! a uniform-random mover, a fixed-depth minimax searcher, and a searcher
//! that probes a precomputed opening book first.

use rand::{prelude::IndexedRandom, rngs::StdRng, SeedableRng};

use crate::{
    opening::{BookKeyed, OpeningBook},
    search::{Minimax, Position},
    Error, Result,
};

/// A move-selection strategy for positions of type `P`.
pub trait Strategy<P: Position> {
    /// Choose a move for `side` in the given position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoAvailableMoves`] when the position is terminal.
    fn choose_move(&mut self, position: &P, side: P::Side) -> Result<P::Move>;
}

/// Picks uniformly at random among the legal moves.
#[derive(Debug)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        RandomStrategy {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded variant for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        RandomStrategy {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Position> Strategy<P> for RandomStrategy {
    fn choose_move(&mut self, position: &P, _side: P::Side) -> Result<P::Move> {
        position
            .legal_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or(Error::NoAvailableMoves)
    }
}

/// Searches with fixed-depth minimax and alpha-beta pruning.
#[derive(Debug, Clone, Copy)]
pub struct MinimaxStrategy {
    search: Minimax,
}

impl MinimaxStrategy {
    pub fn new(depth: u32) -> Self {
        MinimaxStrategy {
            search: Minimax::new(depth),
        }
    }
}

impl<P: Position> Strategy<P> for MinimaxStrategy {
    fn choose_move(&mut self, position: &P, side: P::Side) -> Result<P::Move> {
        Ok(self.search.search(position, side)?.best_move)
    }
}

/// Probes an opening book before falling back to minimax search.
///
/// A book hit short-circuits the entire search; a missing key is a normal
/// condition, never an error.
#[derive(Debug, Clone)]
pub struct LookupThenMinimaxStrategy {
    book: OpeningBook,
    search: Minimax,
}

impl LookupThenMinimaxStrategy {
    pub fn new(book: OpeningBook, depth: u32) -> Self {
        LookupThenMinimaxStrategy {
            book,
            search: Minimax::new(depth),
        }
    }
}

impl<P> Strategy<P> for LookupThenMinimaxStrategy
where
    P: Position<Move = usize> + BookKeyed,
{
    fn choose_move(&mut self, position: &P, side: P::Side) -> Result<usize> {
        if let Some(column) = self.book.lookup(&position.book_key()) {
            return Ok(column);
        }
        Ok(self.search.search(position, side)?.best_move)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::{
        connect_four,
        tictactoe::{Board, Mark},
    };

    #[test]
    fn random_strategy_only_plays_legal_moves() {
        let mut strategy = RandomStrategy::seeded(42);
        let mut board = Board::new();
        board.make_move(1, 1, Mark::X);
        board.make_move(2, 2, Mark::O);

        for _ in 0..50 {
            let mv = strategy.choose_move(&board, Mark::X).unwrap();
            assert!(board.available_moves().contains(&mv));
        }
    }

    #[test]
    fn random_strategy_is_reproducible_with_a_seed() {
        let board = Board::new();
        let mut first = RandomStrategy::seeded(7);
        let mut second = RandomStrategy::seeded(7);

        for _ in 0..10 {
            assert_eq!(
                Strategy::<Board>::choose_move(&mut first, &board, Mark::X).unwrap(),
                Strategy::<Board>::choose_move(&mut second, &board, Mark::X).unwrap()
            );
        }
    }

    #[test]
    fn random_strategy_errors_on_full_board() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        let mut strategy = RandomStrategy::seeded(1);
        assert!(matches!(
            strategy.choose_move(&board, Mark::X),
            Err(Error::NoAvailableMoves)
        ));
    }

    #[test]
    fn minimax_strategy_blocks_a_winning_threat() {
        let board = Board::from_string("XX..O....").unwrap();
        let mut strategy = MinimaxStrategy::new(9);
        assert_eq!(strategy.choose_move(&board, Mark::O).unwrap(), (0, 2));
    }

    #[test]
    fn book_hit_short_circuits_search() {
        let board = connect_four::Board::new();
        // Column 6 is not what any search would pick on an empty board
        // (center dominance), so getting it back proves the book was used.
        let entries = HashMap::from([(board.serialize(), 6)]);
        let mut strategy = LookupThenMinimaxStrategy::new(OpeningBook::from_entries(entries), 4);

        assert_eq!(strategy.choose_move(&board, connect_four::Disc::Two).unwrap(), 6);
    }

    #[test]
    fn book_miss_falls_through_to_search() {
        let mut board = connect_four::Board::new();
        board.drop_disc(1, connect_four::Disc::One);

        let mut with_book = LookupThenMinimaxStrategy::new(OpeningBook::new(), 4);
        let mut plain = MinimaxStrategy::new(4);

        assert_eq!(
            with_book.choose_move(&board, connect_four::Disc::Two).unwrap(),
            plain.choose_move(&board, connect_four::Disc::Two).unwrap()
        );
    }
}
