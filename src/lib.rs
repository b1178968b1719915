//! Tic-Tac-Toe and Connect Four with adversarial search bots
//!
//! This crate provides:
//! - Board representations for both games with value semantics
//! - A generic depth-limited minimax engine with alpha-beta pruning
//! - A positional heuristic evaluator for Connect Four
//! - Pluggable move-selection strategies (random, minimax, opening-book)
//! - A headless interactive session over move-source/render-sink ports

pub mod adapters;
pub mod cli;
pub mod connect_four;
pub mod driver;
pub mod error;
pub mod opening;
pub mod ports;
pub mod search;
pub mod strategy;
pub mod tictactoe;

pub use error::{Error, Result};
pub use opening::{BookKeyed, OpeningBook};
pub use search::{Minimax, Position, SearchOutcome, Side, Status, WIN_SCORE};
pub use strategy::{LookupThenMinimaxStrategy, MinimaxStrategy, RandomStrategy, Strategy};
