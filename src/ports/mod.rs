//! Ports (trait boundaries) for external dependencies.
//!
//! The interactive loop consumes a move source and a render sink but the
//! core implements neither. Following hexagonal architecture, these traits
//! are owned by the domain and implemented by adapters in the
//! infrastructure layer (or by scripted fakes in tests).

use crate::Result;

/// Source of raw human move input, one line per move.
pub trait MoveSource {
    /// Read the next move as entered.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InputExhausted`] when no more input exists.
    fn read_move(&mut self) -> Result<String>;
}

/// Sink for rendered game output.
pub trait RenderSink {
    /// Write one chunk of output (a board dump or a message line).
    fn render(&mut self, text: &str) -> Result<()>;
}
