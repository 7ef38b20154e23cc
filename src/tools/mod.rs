//! Miscellaneous tools used for searching. Most notably this module contains the
//! `Searcher` trait for building bots, and the `Evaluator` capability that scores
//! positions for them.

pub mod eval;

use crate::board::Position;
use crate::core::piece_move::{Move, Score};

use self::eval::Evaluator;

/// What a search found: the chosen move, its score and how many positions were evaluated.
///
/// `best_move` is `None` when the searched position has no legal moves, or at depth 0.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: Score,
    pub evaluations: u64,
}

/// Defines an object that can play chess.
pub trait Searcher {
    fn name() -> &'static str
    where
        Self: Sized;

    /// Searches `position` to `depth` plies, scoring the leaves with `evaluator`.
    fn search<E: Evaluator + Sync + ?Sized>(
        position: &Position,
        evaluator: &E,
        depth: u16,
    ) -> SearchResult
    where
        Self: Sized;

    /// Returns the best move found, or `None` if the position has no legal moves.
    fn best_move<E: Evaluator + Sync + ?Sized>(
        position: &Position,
        evaluator: &E,
        depth: u16,
    ) -> Option<Move>
    where
        Self: Sized,
    {
        Self::search(position, evaluator, depth).best_move
    }
}
