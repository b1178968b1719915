//! Interactive game session: the composition root for a human-vs-bot game.
//!
//! The session owns the read/print loop, input-validation retries, and turn
//! alternation; the board, strategy, and IO collaborators are all passed
//! in, so the loop runs headlessly against scripted ports in tests.

use std::fmt::Display;

use crate::{
    ports::{MoveSource, RenderSink},
    search::{Position, Side, Status},
    strategy::Strategy,
    Result,
};

/// Move grammar for one game: how raw input becomes a move and how a move
/// is echoed back (both 1-indexed on the user-facing side).
pub struct MoveGrammar<P: Position> {
    pub parse: fn(&str) -> Result<P::Move>,
    pub describe: fn(P::Move) -> String,
}

/// A human-vs-bot game in progress. The human always moves first.
pub struct Session<P: Position + Display> {
    board: P,
    human: P::Side,
    bot: Box<dyn Strategy<P>>,
    grammar: MoveGrammar<P>,
    input: Box<dyn MoveSource>,
    output: Box<dyn RenderSink>,
}

impl<P: Position + Display> Session<P> {
    pub fn new(
        board: P,
        human: P::Side,
        bot: Box<dyn Strategy<P>>,
        grammar: MoveGrammar<P>,
        input: Box<dyn MoveSource>,
        output: Box<dyn RenderSink>,
    ) -> Self {
        Session {
            board,
            human,
            bot,
            grammar,
            input,
            output,
        }
    }

    /// Run the game to completion and report the final status.
    ///
    /// # Errors
    ///
    /// Fails when the move source is exhausted mid-game or a collaborator
    /// reports an IO failure. Invalid human input is not an error; the
    /// session re-prompts until a legal move arrives.
    pub fn run(&mut self) -> Result<Status<P::Side>> {
        self.output.render(&self.board.to_string())?;

        loop {
            let mv = self.read_legal_move()?;
            self.board.apply(mv, self.human);
            self.output
                .render(&format!("You played {}.", (self.grammar.describe)(mv)))?;
            self.output.render(&self.board.to_string())?;
            if self.board.status() != Status::Ongoing {
                break;
            }

            let reply = self.bot.choose_move(&self.board, self.human.opponent())?;
            self.board.apply(reply, self.human.opponent());
            self.output.render(&format!(
                "The bot played {}.",
                (self.grammar.describe)(reply)
            ))?;
            self.output.render(&self.board.to_string())?;
            if self.board.status() != Status::Ongoing {
                break;
            }
        }

        let status = self.board.status();
        let verdict = match status {
            Status::Win(side) if side == self.human => "You win!",
            Status::Win(_) => "The bot wins!",
            Status::Draw => "The game ended in a draw.",
            Status::Ongoing => unreachable!("loop exits only on terminal status"),
        };
        self.output.render(verdict)?;

        Ok(status)
    }

    /// Final board state, for inspection after the game.
    pub fn board(&self) -> &P {
        &self.board
    }

    fn read_legal_move(&mut self) -> Result<P::Move> {
        self.output.render("Input your move:")?;
        loop {
            let line = self.input.read_move()?;
            match (self.grammar.parse)(&line) {
                Ok(mv) if self.board.legal_moves().contains(&mv) => return Ok(mv),
                _ => self.output.render("Invalid move, input your move:")?,
            }
        }
    }
}
