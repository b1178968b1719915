//! Play command - Run an interactive human-vs-bot game

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use crate::{
    adapters::{ConsoleInput, ConsoleOutput},
    cli::commands::{Difficulty, GameChoice},
    connect_four,
    driver::{MoveGrammar, Session},
    opening::OpeningBook,
    search::Position,
    strategy::{LookupThenMinimaxStrategy, MinimaxStrategy, RandomStrategy, Strategy},
    tictactoe,
};

#[derive(Parser, Debug)]
#[command(about = "Play a game against a bot")]
pub struct PlayArgs {
    /// Game to play
    #[arg(value_enum)]
    pub game: GameChoice,

    /// Bot difficulty
    #[arg(long, short = 'd', value_enum, default_value = "minimax")]
    pub difficulty: Difficulty,

    /// Search depth in plies (ignored by the random bot)
    #[arg(long)]
    pub depth: Option<u32>,

    /// Path to an opening book JSON file (genius difficulty only)
    #[arg(long)]
    pub book: Option<PathBuf>,

    /// Random seed for the random bot, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Default search depths: Tic-Tac-Toe searches to terminal, Connect Four
/// uses a shallow fixed depth to keep moves fast.
const TICTACTOE_DEPTH: u32 = 9;
const CONNECT_FOUR_DEPTH: u32 = 7;

pub fn execute(args: PlayArgs) -> Result<()> {
    match args.game {
        GameChoice::Tictactoe => play_tictactoe(&args),
        GameChoice::Connect4 => play_connect_four(&args),
    }
}

fn random_bot(args: &PlayArgs) -> RandomStrategy {
    match args.seed {
        Some(seed) => RandomStrategy::seeded(seed),
        None => RandomStrategy::new(),
    }
}

fn play_tictactoe(args: &PlayArgs) -> Result<()> {
    let bot: Box<dyn Strategy<tictactoe::Board>> = match args.difficulty {
        Difficulty::Random => Box::new(random_bot(args)),
        Difficulty::Minimax => Box::new(MinimaxStrategy::new(
            args.depth.unwrap_or(TICTACTOE_DEPTH),
        )),
        Difficulty::Genius => bail!("the genius bot only plays Connect Four"),
    };

    run_session(tictactoe::Board::new(), tictactoe::Mark::X, bot, GRAMMAR_TTT)
}

fn play_connect_four(args: &PlayArgs) -> Result<()> {
    let depth = args.depth.unwrap_or(CONNECT_FOUR_DEPTH);
    let bot: Box<dyn Strategy<connect_four::Board>> = match args.difficulty {
        Difficulty::Random => Box::new(random_bot(args)),
        Difficulty::Minimax => Box::new(MinimaxStrategy::new(depth)),
        Difficulty::Genius => {
            let book = match &args.book {
                Some(path) => OpeningBook::load(path)
                    .with_context(|| format!("loading opening book '{}'", path.display()))?,
                None => OpeningBook::new(),
            };
            Box::new(LookupThenMinimaxStrategy::new(book, depth))
        }
    };

    run_session(
        connect_four::Board::new(),
        connect_four::Disc::One,
        bot,
        GRAMMAR_C4,
    )
}

const GRAMMAR_TTT: MoveGrammar<tictactoe::Board> = MoveGrammar {
    parse: tictactoe::parse_move,
    describe: tictactoe::format_move,
};

const GRAMMAR_C4: MoveGrammar<connect_four::Board> = MoveGrammar {
    parse: connect_four::parse_move,
    describe: connect_four::format_move,
};

fn run_session<P>(
    board: P,
    human: P::Side,
    bot: Box<dyn Strategy<P>>,
    grammar: MoveGrammar<P>,
) -> Result<()>
where
    P: Position + std::fmt::Display,
{
    println!("Let the games begin! The bot replies after each of your moves.\n");
    let mut session = Session::new(
        board,
        human,
        bot,
        grammar,
        Box::new(ConsoleInput::new()),
        Box::new(ConsoleOutput::new()),
    );
    session.run()?;
    Ok(())
}
