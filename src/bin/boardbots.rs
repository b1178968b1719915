//! boardbots CLI - Tic-Tac-Toe and Connect Four against search bots
//!
//! This CLI provides:
//! - Interactive human-vs-bot games at selectable difficulty
//! - Headless best-move queries for arbitrary positions

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "boardbots")]
#[command(version, about = "Grid games with adversarial search bots", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against a bot
    Play(boardbots::cli::commands::play::PlayArgs),

    /// Print the engine's move for a given position
    BestMove(boardbots::cli::commands::best_move::BestMoveArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => boardbots::cli::commands::play::execute(args),
        Commands::BestMove(args) => boardbots::cli::commands::best_move::execute(args),
    }
}
