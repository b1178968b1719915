//! CLI infrastructure for the boardbots toolkit
//!
//! This module provides the command-line interface for playing the games
//! interactively and for querying the engine headlessly.

pub mod commands;
