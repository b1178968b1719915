//! Error types for the boardbots crate

use thiserror::Error;

/// Main error type for the boardbots crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("column {column} violates gravity: a disc rests above an empty cell")]
    GravityViolation { column: usize },

    #[error("malformed move '{input}' (expected {expected})")]
    MalformedMove { input: String, expected: String },

    #[error("invalid player '{player}' (expected {expected})")]
    InvalidPlayer { player: String, expected: String },

    #[error("no moves available: the position is already terminal")]
    NoAvailableMoves,

    #[error("move source has no more input")]
    InputExhausted,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
