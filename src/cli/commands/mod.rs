//! CLI command implementations

pub mod best_move;
pub mod play;

use clap::ValueEnum;

/// Which game to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GameChoice {
    Tictactoe,
    Connect4,
}

/// Bot difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Difficulty {
    /// Uniform-random mover
    Random,
    /// Depth-limited minimax with alpha-beta pruning
    Minimax,
    /// Minimax with a precomputed opening book (Connect Four only)
    Genius,
}
