//! Best-move command - Query the engine headlessly for a position

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::commands::GameChoice,
    connect_four,
    error::Error,
    opening::OpeningBook,
    strategy::{LookupThenMinimaxStrategy, MinimaxStrategy, Strategy},
    tictactoe,
};

#[derive(Parser, Debug)]
#[command(about = "Print the engine's move for a given position")]
pub struct BestMoveArgs {
    /// Game the position belongs to
    #[arg(value_enum)]
    pub game: GameChoice,

    /// Board contents, row-major from the top row
    /// (Tic-Tac-Toe: 9 of `.XO`; Connect Four: 42 of `012`)
    pub board: String,

    /// Side to move (`X`/`O` for Tic-Tac-Toe, `1`/`2` for Connect Four);
    /// defaults to the second player, the usual bot side
    #[arg(long, short = 's')]
    pub side: Option<String>,

    /// Search depth in plies
    #[arg(long)]
    pub depth: Option<u32>,

    /// Path to an opening book JSON file (Connect Four only)
    #[arg(long)]
    pub book: Option<PathBuf>,
}

pub fn execute(args: BestMoveArgs) -> Result<()> {
    match args.game {
        GameChoice::Tictactoe => best_tictactoe_move(&args),
        GameChoice::Connect4 => best_connect_four_move(&args),
    }
}

fn parse_side_char(side: &Option<String>) -> Option<char> {
    side.as_ref().and_then(|s| {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    })
}

fn best_tictactoe_move(args: &BestMoveArgs) -> Result<()> {
    let board = tictactoe::Board::from_string(&args.board)?;
    let side = match &args.side {
        None => tictactoe::Mark::O,
        Some(raw) => parse_side_char(&args.side)
            .and_then(tictactoe::Mark::from_char)
            .ok_or_else(|| Error::InvalidPlayer {
                player: raw.clone(),
                expected: "X or O".to_string(),
            })?,
    };

    let mut engine = MinimaxStrategy::new(args.depth.unwrap_or(9));
    let mv = engine
        .choose_move(&board, side)
        .context("position is already terminal")?;
    println!("{}", tictactoe::format_move(mv));
    Ok(())
}

fn best_connect_four_move(args: &BestMoveArgs) -> Result<()> {
    let board = connect_four::Board::from_string(&args.board)?;
    let side = match &args.side {
        None => connect_four::Disc::Two,
        Some(raw) => parse_side_char(&args.side)
            .and_then(connect_four::Disc::from_char)
            .ok_or_else(|| Error::InvalidPlayer {
                player: raw.clone(),
                expected: "1 or 2".to_string(),
            })?,
    };

    let book = match &args.book {
        Some(path) => OpeningBook::load(path)
            .with_context(|| format!("loading opening book '{}'", path.display()))?,
        None => OpeningBook::new(),
    };

    let mut engine = LookupThenMinimaxStrategy::new(book, args.depth.unwrap_or(7));
    let mv = engine
        .choose_move(&board, side)
        .context("position is already terminal")?;
    println!("{}", connect_four::format_move(mv));
    Ok(())
}
