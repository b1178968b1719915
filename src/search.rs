//! Depth-limited minimax search with alpha-beta pruning.
//!
//! The engine is generic over [`Position`], so the same search drives both
//! Tic-Tac-Toe and Connect Four. Each branch works on its own cloned board
//! snapshot; nothing is shared between siblings, and results are
//! deterministic for a given (position, depth, side) triple.

use crate::{Error, Result};

/// Score awarded for a won position before the ply discount is applied.
///
/// A win reached after `p` plies scores `WIN_SCORE - p`, so faster wins
/// (and slower losses) are preferred.
pub const WIN_SCORE: i32 = 1000;

/// One of the two competing actors in a game instance.
pub trait Side: Copy + Eq {
    /// The other actor.
    fn opponent(self) -> Self;
}

/// Terminal status of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status<S> {
    Ongoing,
    Win(S),
    Draw,
}

/// A game position the search engine can explore.
///
/// Implementations use value semantics: the engine clones the position for
/// every branch and mutates the clone, never the original.
pub trait Position: Clone {
    /// A move coordinate (cell for Tic-Tac-Toe, column for Connect Four).
    type Move: Copy + Eq + std::fmt::Debug;

    /// The player label type.
    type Side: Side;

    /// Currently legal moves, in ascending enumeration order.
    ///
    /// The order is a contract: search tie-breaking keeps the first move
    /// encountered, so reordering changes engine output.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Apply a move for `side`. The move must come from [`legal_moves`].
    ///
    /// [`legal_moves`]: Position::legal_moves
    fn apply(&mut self, mv: Self::Move, side: Self::Side);

    /// The winning side, if any line is complete.
    fn winner(&self) -> Option<Self::Side>;

    /// Whether every cell is occupied.
    fn is_full(&self) -> bool;

    /// Heuristic score from `side`'s perspective for depth-exhausted leaves.
    ///
    /// Tic-Tac-Toe keeps the default neutral value since full-depth search
    /// always reaches a terminal state within 9 plies.
    fn heuristic(&self, side: Self::Side) -> i32 {
        let _ = side;
        0
    }

    /// Terminal status of the position.
    fn status(&self) -> Status<Self::Side> {
        if let Some(winner) = self.winner() {
            Status::Win(winner)
        } else if self.is_full() {
            Status::Draw
        } else {
            Status::Ongoing
        }
    }
}

/// Result of a search: the chosen move and its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome<M> {
    pub best_move: M,
    pub score: i32,
}

/// Fixed-depth minimax searcher.
#[derive(Debug, Clone, Copy)]
pub struct Minimax {
    depth: u32,
}

impl Minimax {
    /// Create a searcher with the given depth limit (in plies).
    pub fn new(depth: u32) -> Self {
        Minimax { depth }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Find the best move for `side` using alpha-beta pruning.
    ///
    /// Ties are broken by enumeration order: comparisons are strict, so the
    /// first move reaching the best score is kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoAvailableMoves`] when the position is already
    /// terminal (won, or no legal moves remain).
    pub fn search<P: Position>(
        &self,
        position: &P,
        side: P::Side,
    ) -> Result<SearchOutcome<P::Move>> {
        self.run(position, side, true)
    }

    /// Exhaustive minimax without pruning.
    ///
    /// Chooses the same move as [`search`] on identical inputs; exists so
    /// that equivalence can be checked directly.
    ///
    /// [`search`]: Minimax::search
    pub fn search_unpruned<P: Position>(
        &self,
        position: &P,
        side: P::Side,
    ) -> Result<SearchOutcome<P::Move>> {
        self.run(position, side, false)
    }

    fn run<P: Position>(
        &self,
        position: &P,
        side: P::Side,
        prune: bool,
    ) -> Result<SearchOutcome<P::Move>> {
        if position.winner().is_some() {
            return Err(Error::NoAvailableMoves);
        }

        let moves = position.legal_moves();
        let mut best_move = *moves.first().ok_or(Error::NoAvailableMoves)?;
        let mut best_score = i32::MIN;
        let mut alpha = i32::MIN;
        let beta = i32::MAX;

        for mv in moves {
            let mut child = position.clone();
            child.apply(mv, side);
            let score = self.score_node(
                &child,
                self.depth.saturating_sub(1),
                1,
                side.opponent(),
                alpha,
                beta,
                side,
                prune,
            );

            if score > best_score {
                best_score = score;
                best_move = mv;
            }

            if prune {
                alpha = alpha.max(best_score);
                if beta <= alpha {
                    break;
                }
            }
        }

        Ok(SearchOutcome {
            best_move,
            score: best_score,
        })
    }

    /// Score a node from the searcher's perspective.
    ///
    /// `ply` counts moves already applied from the root, discounting wins so
    /// that earlier ones score higher.
    #[allow(clippy::too_many_arguments)]
    fn score_node<P: Position>(
        &self,
        position: &P,
        depth: u32,
        ply: i32,
        to_move: P::Side,
        mut alpha: i32,
        mut beta: i32,
        searcher: P::Side,
        prune: bool,
    ) -> i32 {
        if let Some(winner) = position.winner() {
            return if winner == searcher {
                WIN_SCORE - ply
            } else {
                -WIN_SCORE + ply
            };
        }
        if position.is_full() {
            return 0;
        }
        if depth == 0 {
            return position.heuristic(searcher);
        }

        let maximizing = to_move == searcher;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for mv in position.legal_moves() {
            let mut child = position.clone();
            child.apply(mv, to_move);
            let score = self.score_node(
                &child,
                depth - 1,
                ply + 1,
                to_move.opponent(),
                alpha,
                beta,
                searcher,
                prune,
            );

            if maximizing {
                if score > best {
                    best = score;
                }
                if prune {
                    alpha = alpha.max(best);
                    if beta <= alpha {
                        break;
                    }
                }
            } else {
                if score < best {
                    best = score;
                }
                if prune {
                    beta = beta.min(best);
                    if beta <= alpha {
                        break;
                    }
                }
            }
        }

        best
    }
}
